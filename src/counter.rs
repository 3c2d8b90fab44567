use crate::error::CounterExhausted;
use crate::BLOCK_SIZE;

/// Encode `counter` as an IV: its big-endian bytes, left padded with zero
/// bytes to [`BLOCK_SIZE`].
///
/// `0` encodes to the all-zero block.
pub fn encode_counter(counter: u64) -> [u8; BLOCK_SIZE] {
    let mut iv = [0u8; BLOCK_SIZE];
    iv[BLOCK_SIZE - 8..].copy_from_slice(&counter.to_be_bytes());
    iv
}

/// Number of cipher blocks consumed by a draw of `size` bytes, i.e.
/// `ceil(size / BLOCK_SIZE)`.
pub fn blocks_for(size: usize) -> u64 {
    // usize is at most 64 bits wide on every supported target
    size.div_ceil(BLOCK_SIZE) as u64
}

/// Advance `counter` by `blocks`, refusing to wrap around.
pub(crate) fn advance(counter: u64, blocks: u64) -> Result<u64, CounterExhausted> {
    counter
        .checked_add(blocks)
        .ok_or(CounterExhausted { counter, blocks })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_all_zero_block() {
        assert_eq!(encode_counter(0), [0u8; BLOCK_SIZE]);
    }

    #[test]
    fn big_endian_left_padded() {
        let iv = encode_counter(0x0102_0304);
        assert_eq!(&iv[..12], &[0u8; 12]);
        assert_eq!(&iv[12..], &[1, 2, 3, 4]);

        let iv = encode_counter(256);
        assert_eq!(iv[14], 1);
        assert_eq!(iv[15], 0);

        let iv = encode_counter(u64::MAX);
        assert_eq!(&iv[..8], &[0u8; 8]);
        assert_eq!(&iv[8..], &[0xff; 8]);
    }

    #[test]
    fn block_rounding() {
        assert_eq!(blocks_for(0), 0);
        assert_eq!(blocks_for(1), 1);
        assert_eq!(blocks_for(16), 1);
        assert_eq!(blocks_for(17), 2);
        assert_eq!(blocks_for(1024), 64);
    }

    #[test]
    fn advance_refuses_to_wrap() {
        assert_eq!(advance(0, 3), Ok(3));
        assert_eq!(advance(u64::MAX - 1, 1), Ok(u64::MAX));
        assert_eq!(
            advance(u64::MAX - 1, 2),
            Err(CounterExhausted {
                counter: u64::MAX - 1,
                blocks: 2
            })
        );
    }
}
