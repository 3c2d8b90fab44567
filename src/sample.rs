use log::trace;

use crate::error::{Error, RangeError};
use crate::{CtrKeystream, Drng};

/// Denominator of [`Drng::next_scalar`], fixed so scalars are identical on
/// every target.
const SCALAR_DENOMINATOR: i64 = i64::MAX;

/// Bytes to draw and mask to apply so that the masked draw covers `0..=range`
/// with as few excess bits as possible.
///
/// `range` must be non-zero.
fn range_mask(range: u64) -> (usize, u64) {
    let bits = u64::BITS - range.leading_zeros();
    // at most 8
    #[allow(clippy::cast_possible_truncation)]
    let num_bytes = bits.div_ceil(8) as usize;
    let mask = u64::MAX >> (u64::BITS - bits);
    (num_bytes, mask)
}

impl<C: CtrKeystream> Drng<C> {
    /// Uniformly sample an integer in `[min, max]` (both inclusive).
    ///
    /// `min == max` returns `min` without consuming any stream. Otherwise
    /// candidates are drawn from the stream and discarded until one falls in
    /// range; see the crate documentation for the exact procedure.
    ///
    /// # Errors
    /// - [`RangeError::InvertedBounds`] if `min > max`.
    /// - [`RangeError::Overflow`] if `max - min` does not fit in an `i64`.
    /// - [`Error::CounterExhausted`] if the stream runs out mid-sampling.
    ///
    /// # Examples
    /// ```
    /// use ctr_drng::{Drng, Error, RangeError};
    ///
    /// let mut rng = Drng::new(&[1u8; 16]).unwrap();
    /// let x = rng.next_int(-20, -10).unwrap();
    /// assert!((-20..=-10).contains(&x));
    ///
    /// assert_eq!(
    ///     rng.next_int(100, 10),
    ///     Err(Error::Range(RangeError::InvertedBounds { min: 100, max: 10 }))
    /// );
    /// ```
    pub fn next_int(&mut self, min: i64, max: i64) -> Result<i64, Error> {
        if min == max {
            return Ok(min);
        }
        if min > max {
            return Err(RangeError::InvertedBounds { min, max }.into());
        }
        let range = max
            .checked_sub(min)
            .ok_or(RangeError::Overflow { min, max })?;

        // range > 0 here, so the cast is lossless
        #[allow(clippy::cast_sign_loss)]
        let (num_bytes, mask) = range_mask(range as u64);

        let mut buf = [0u8; 8];
        loop {
            self.fill_bytes(&mut buf[..num_bytes])?;
            let raw = u64::from_le_bytes(buf) & mask;

            // mask < 2^63 since range fits in an i64
            #[allow(clippy::cast_possible_wrap)]
            let candidate = min.checked_add(raw as i64);
            match candidate {
                Some(value) if value <= max => return Ok(value),
                _ => trace!("rejected candidate {} for range [{}, {}]", raw, min, max),
            }
        }
    }

    /// Sample a float in `[0, max_value]`: an integer in `[0, i64::MAX]`
    /// scaled by `max_value / i64::MAX`.
    ///
    /// ```
    /// use ctr_drng::Drng;
    ///
    /// let mut rng = Drng::new(&[1u8; 16]).unwrap();
    /// let x = rng.next_scalar(255.0).unwrap();
    /// assert!((0.0..=255.0).contains(&x));
    /// ```
    pub fn next_scalar(&mut self, max_value: f64) -> Result<f64, Error> {
        let n = self.next_int(0, SCALAR_DENOMINATOR)?;
        Ok((max_value * n as f64) / SCALAR_DENOMINATOR as f64)
    }

    /// Sample a float in `[0, 1]`. Same as `next_scalar(1.0)`.
    pub fn next_unit(&mut self) -> Result<f64, Error> {
        self.next_scalar(1.0)
    }
}
