use aes::cipher::{InnerIvInit, KeyInit, StreamCipher};
use zeroize::Zeroizing;

use crate::error::SeedSizeError;
use crate::seed::validate_seed;
use crate::BLOCK_SIZE;

type Aes128Ctr = ctr::Ctr128BE<aes::Aes128>;
type Aes256Ctr = ctr::Ctr128BE<aes::Aes256>;

/// A 128-bit block cipher in counter mode, used encrypt-only.
///
/// Implementations must XOR the keystream starting at `iv` into `buf`,
/// incrementing the IV as a 128-bit big-endian integer after every
/// [`BLOCK_SIZE`] bytes. The keystream must be a pure function of the key and
/// `iv`: [`Drng`](crate::Drng) relies on this for reproducibility.
pub trait CtrKeystream {
    fn apply_keystream(&self, iv: &[u8; BLOCK_SIZE], buf: &mut [u8]);
}

/// Expanded AES key schedule. Zeroized on drop by the `aes` crate.
#[derive(Clone)]
enum Schedule {
    Aes128(aes::Aes128),
    Aes256(aes::Aes256),
}

/// AES in counter mode with a big-endian 128-bit counter.
///
/// A 16-byte key selects AES-128. Longer keys select AES-256, keyed with the
/// key material XOR-folded into 32 bytes, so a 32-byte key is used as is.
#[derive(Clone)]
pub struct AesCtr {
    schedule: Schedule,
}

impl AesCtr {
    /// Expand `key` into an AES key schedule.
    ///
    /// Fails with [`SeedSizeError`] if `key` is empty or not a multiple of
    /// [`BLOCK_SIZE`] bytes long.
    pub fn new(key: &[u8]) -> Result<Self, SeedSizeError> {
        validate_seed(key)?;

        if key.len() == BLOCK_SIZE {
            let mut short = Zeroizing::new([0u8; BLOCK_SIZE]);
            short.copy_from_slice(key);
            return Ok(Self::aes128(&short));
        }

        let mut folded = Zeroizing::new([0u8; 2 * BLOCK_SIZE]);
        for (i, b) in key.iter().enumerate() {
            folded[i % (2 * BLOCK_SIZE)] ^= b;
        }
        Ok(Self {
            schedule: Schedule::Aes256(aes::Aes256::new((&*folded).into())),
        })
    }

    /// AES-128 keyed with exactly one block. Cannot fail.
    pub fn aes128(key: &[u8; BLOCK_SIZE]) -> Self {
        Self {
            schedule: Schedule::Aes128(aes::Aes128::new(key.into())),
        }
    }

    /// Key size of the selected AES variant in bits.
    pub fn key_bits(&self) -> u32 {
        match self.schedule {
            Schedule::Aes128(_) => 128,
            Schedule::Aes256(_) => 256,
        }
    }
}

impl CtrKeystream for AesCtr {
    fn apply_keystream(&self, iv: &[u8; BLOCK_SIZE], buf: &mut [u8]) {
        match &self.schedule {
            Schedule::Aes128(aes) => {
                Aes128Ctr::from_core(ctr::CtrCore::inner_iv_init(aes.clone(), iv.into()))
                    .apply_keystream(buf)
            }
            Schedule::Aes256(aes) => {
                Aes256Ctr::from_core(ctr::CtrCore::inner_iv_init(aes.clone(), iv.into()))
                    .apply_keystream(buf)
            }
        }
    }
}

impl core::fmt::Debug for AesCtr {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // never print the key schedule
        f.debug_struct("AesCtr")
            .field("key_bits", &self.key_bits())
            .finish_non_exhaustive()
    }
}
