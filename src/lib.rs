//! A deterministic pseudo-random number generator (DRNG) driven by AES in
//! counter mode.
//!
//! Given a fixed key, the generator produces an unbounded, reproducible stream
//! of pseudo-random bytes, and derives bounded integers and floating point
//! scalars from that stream. The same key and the same sequence of calls
//! always give the same output, on every platform.
//!
//! Intended for reproducible simulations, procedural generation and testing.
//! This is not an audited CSPRNG: do not use it to generate secret keys unless
//! you have independently validated it for that purpose.
//!
//! # Usage
//! Create an instance from a key of 16, 32 or more bytes (any non-empty
//! multiple of 16) with [`Drng::new`], from a human readable name with
//! [`Drng::from_name`], or with a fresh random key from the OS with
//! [`Drng::new_from_getrandom`]. Then use [`Drng::fill_bytes`],
//! [`Drng::next_bytes`] or [`Drng::get_bytes`] for raw bytes,
//! [`Drng::next_int`] for integers in an inclusive range and
//! [`Drng::next_scalar`] for floats. [`Drng::reset`] rewinds the stream to its
//! start.
//!
//! # Examples
//! Two generators with the same key give the same output:
//! ```
//! use ctr_drng::Drng;
//!
//! let key = [0x2a; 16];
//! let mut a = Drng::new(&key).unwrap();
//! let mut b = Drng::new(&key).unwrap();
//!
//! assert_eq!(a.next_bytes(40).unwrap(), b.next_bytes(40).unwrap());
//! assert_eq!(a.next_int(-5, 5).unwrap(), b.next_int(-5, 5).unwrap());
//! ```
//!
//! Dice rolls seeded from a name, replayed after a reset:
//! ```
//! use ctr_drng::Drng;
//!
//! let mut rng = Drng::from_name("i like cats").unwrap();
//! let rolls: Vec<i64> = (0..10).map(|_| rng.next_int(1, 6).unwrap()).collect();
//! assert!(rolls.iter().all(|r| (1..=6).contains(r)));
//!
//! rng.reset();
//! let replay: Vec<i64> = (0..10).map(|_| rng.next_int(1, 6).unwrap()).collect();
//! assert_eq!(rolls, replay);
//! ```
//!
//! # Determinism & Portability
//! The output is a pure function of the key, the block counter at the time of
//! the call and the sizes requested. Integer sampling counts bits, never
//! machine words, and scalars are always scaled by `i64::MAX`, so the output
//! does not depend on the pointer width or endianness of the target.
//!
//! # Crate Features
//! - `getrandom` (default): Enable dependency on the [`getrandom` crate], for
//!   [`Drng::new_from_getrandom`].
//! - `alloc` (default): `Vec` returning APIs, [`StringSeed`] and
//!   [`derive_key`].
//! - `rand-core`: Enable dependency on the [`rand_core` crate]. This enables
//!   implementations of `RngCore` and `SeedableRng` for [`Drng`].
//!
//! # Design
//! The generator state is a key and a 64-bit block counter, starting at zero.
//! A draw of `n` bytes encrypts `n` zero bytes with the block cipher in counter
//! mode, using the current counter, encoded big-endian and left padded to 16
//! bytes, as the IV. The counter is then advanced by `ceil(n / 16)` blocks.
//! The unused tail of a partially consumed block is discarded, so every draw
//! starts on a fresh block.
//!
//! The counter never wraps: a draw that would overflow it fails with
//! [`CounterExhausted`] and leaves the generator untouched.
//!
//! Integers in `[min, max]` are rejection sampled: with `bits` the bit length
//! of `max - min`, a draw of `ceil(bits / 8)` bytes is read as a little-endian
//! integer, masked to its low `bits` bits and offset by `min`. Candidates above
//! `max` are discarded and redrawn. Each candidate is accepted with probability
//! greater than one half, so there is no modulo bias and the expected number of
//! draws is below two.
//!
//! The cipher is abstracted behind [`CtrKeystream`], so the stream logic can
//! be driven by a stub in tests or by a different cipher library.
//!
//! # Concurrency
//! All draws take `&mut self`. Share an instance between threads behind a
//! lock, or better, give each thread its own instance. [`Drng`] is `Send` as
//! long as its cipher is.
//!
//! [`getrandom` crate]: https://crates.io/crates/getrandom
//! [`rand_core` crate]: https://crates.io/crates/rand_core
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]
#![forbid(rust_2018_compatibility, unsafe_code)]
#![deny(future_incompatible, rust_2018_idioms)]
#![warn(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

#[cfg(feature = "alloc")]
extern crate alloc;

use log::{debug, error, trace};

/// Block size of the underlying cipher in bytes. Keys must be a multiple of
/// this, and the counter advances once per block of output.
pub const BLOCK_SIZE: usize = 16;

mod cipher;
mod counter;
mod error;
/// Bounded integer and float sampling, as inherent methods on [`Drng`].
mod sample;
mod seed;

pub use cipher::{AesCtr, CtrKeystream};
pub use counter::{blocks_for, encode_counter};
pub use error::{CounterExhausted, Error, RangeError, SeedSizeError};
#[cfg(feature = "alloc")]
pub use seed::{derive_key, StringSeed};
pub use seed::{validate_seed, PAD_STRING};

/// The deterministic generator: a keyed block cipher in counter mode plus the
/// block counter marking the position in the stream.
///
/// # Examples
/// ```
/// use ctr_drng::Drng;
///
/// let mut rng = Drng::new(&[7u8; 32]).unwrap();
/// let bytes = rng.get_bytes::<24>().unwrap();
/// assert_eq!(rng.counter(), 2);
///
/// rng.reset();
/// assert_eq!(rng.get_bytes::<24>().unwrap(), bytes);
/// ```
#[derive(Clone, Debug)]
pub struct Drng<C = AesCtr> {
    cipher: C,
    counter: u64,
}

impl Drng<AesCtr> {
    /// Create a generator keyed with `seed`, which must be a non-empty
    /// multiple of [`BLOCK_SIZE`] bytes.
    pub fn new(seed: &[u8]) -> Result<Self, SeedSizeError> {
        let cipher = AesCtr::new(seed)?;
        debug!(
            "created generator from {} byte seed (AES-{})",
            seed.len(),
            cipher.key_bits()
        );
        Ok(Self::with_cipher(cipher))
    }

    /// Create a generator keyed with exactly one block. Cannot fail.
    pub fn from_block_key(key: &[u8; BLOCK_SIZE]) -> Self {
        Self::with_cipher(AesCtr::aes128(key))
    }

    /// Create a generator keyed with `name`, padded by [`derive_key`].
    #[cfg(feature = "alloc")]
    #[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
    pub fn from_name(name: &str) -> Result<Self, SeedSizeError> {
        let key = zeroize::Zeroizing::new(derive_key(name));
        Self::new(&key)
    }

    /// Create a generator with a random 16 byte key from the OS RNG (e.g. the
    /// `getrandom` syscall in linux). Two such generators give independent
    /// streams.
    #[cfg(feature = "getrandom")]
    #[cfg_attr(docsrs, doc(cfg(feature = "getrandom")))]
    pub fn new_from_getrandom() -> Result<Self, getrandom::Error> {
        let mut key = zeroize::Zeroizing::new([0u8; BLOCK_SIZE]);
        getrandom::fill(key.as_mut_slice())?;
        debug!("created generator from OS randomness");
        Ok(Self::from_block_key(&key))
    }
}

impl<C: CtrKeystream> Drng<C> {
    /// Create a generator on top of an arbitrary counter mode cipher.
    pub fn with_cipher(cipher: C) -> Self {
        Self { cipher, counter: 0 }
    }

    /// The cipher driving this generator.
    pub fn cipher(&self) -> &C {
        &self.cipher
    }

    /// Position in the stream, in blocks consumed since construction or the
    /// last [`Self::reset`].
    pub fn counter(&self) -> u64 {
        self.counter
    }

    /// Rewind to the start of the stream. The same key is kept, so the same
    /// calls replay the same output.
    pub fn reset(&mut self) {
        debug!("reset generator at block counter {}", self.counter);
        self.counter = 0;
    }

    /// Fill `dest` with the next `dest.len()` bytes of the stream.
    ///
    /// Fails without consuming anything if the block counter would overflow.
    pub fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), CounterExhausted> {
        let blocks = blocks_for(dest.len());
        let next = counter::advance(self.counter, blocks).inspect_err(|e| error!("{}", e))?;

        let iv = encode_counter(self.counter);
        trace!(
            "drawing {} bytes ({} blocks) at block counter {}",
            dest.len(),
            blocks,
            self.counter
        );
        dest.fill(0);
        self.cipher.apply_keystream(&iv, dest);
        self.counter = next;
        Ok(())
    }

    /// Output an array `[u8; N]` filled with the next `N` bytes of the stream.
    pub fn get_bytes<const N: usize>(&mut self) -> Result<[u8; N], CounterExhausted> {
        let mut out = [0; N];
        self.fill_bytes(&mut out)?;
        Ok(out)
    }

    /// Return the next `size` bytes of the stream.
    #[cfg(feature = "alloc")]
    #[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
    pub fn next_bytes(&mut self, size: usize) -> Result<alloc::vec::Vec<u8>, CounterExhausted> {
        let mut out = alloc::vec![0; size];
        self.fill_bytes(&mut out)?;
        Ok(out)
    }

    #[cfg(test)]
    pub(crate) fn set_counter(&mut self, counter: u64) {
        self.counter = counter;
    }
}

#[cfg(feature = "rand-core")]
mod rand_core {
    use super::{AesCtr, CtrKeystream, Drng, BLOCK_SIZE};

    /// Panics with the exhaustion message. 2^64 blocks are out of reach in
    /// practice.
    fn fill_or_panic<C: CtrKeystream>(rng: &mut Drng<C>, dest: &mut [u8]) {
        if let Err(e) = rng.fill_bytes(dest) {
            panic!("{}", e);
        }
    }

    #[cfg_attr(docsrs, doc(cfg(feature = "rand-core")))]
    impl<C: CtrKeystream> rand_core::RngCore for Drng<C> {
        /// Slow: uses up a whole 16 byte block of the stream for 4 bytes. Use
        /// [`Drng::fill_bytes`] for bulk output.
        fn next_u32(&mut self) -> u32 {
            let mut buf = [0u8; 4];
            fill_or_panic(self, &mut buf);
            u32::from_le_bytes(buf)
        }

        /// Slow: uses up a whole 16 byte block of the stream for 8 bytes. Use
        /// [`Drng::fill_bytes`] for bulk output.
        fn next_u64(&mut self) -> u64 {
            let mut buf = [0u8; 8];
            fill_or_panic(self, &mut buf);
            u64::from_le_bytes(buf)
        }

        /// Equivalent to [`Drng::fill_bytes`].
        ///
        /// # Panics
        /// If the block counter is exhausted.
        fn fill_bytes(&mut self, dest: &mut [u8]) {
            fill_or_panic(self, dest)
        }
    }

    #[cfg_attr(docsrs, doc(cfg(feature = "rand-core")))]
    impl rand_core::SeedableRng for Drng<AesCtr> {
        type Seed = [u8; BLOCK_SIZE];

        /// Equivalent to [`Drng::from_block_key`].
        fn from_seed(seed: Self::Seed) -> Self {
            Self::from_block_key(&seed)
        }
    }
}
