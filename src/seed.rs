//! Seed validation and derivation of seeds from human readable names.

use crate::error::SeedSizeError;
use crate::BLOCK_SIZE;

/// Padding appended, byte by byte, to a name until its length is a multiple
/// of [`BLOCK_SIZE`].
pub const PAD_STRING: &[u8; BLOCK_SIZE] = b"R3JlZyBCb3dsZXIh";

/// Check that `seed` is usable as a key: non-empty, and a multiple of
/// [`BLOCK_SIZE`] bytes long.
pub fn validate_seed(seed: &[u8]) -> Result<(), SeedSizeError> {
    if seed.is_empty() || seed.len() % BLOCK_SIZE != 0 {
        return Err(SeedSizeError { len: seed.len() });
    }
    Ok(())
}

/// Pad `name` with [`PAD_STRING`] to the next multiple of [`BLOCK_SIZE`]
/// bytes. Names that already have such a length are returned unchanged; in
/// particular the empty name stays empty (and is rejected as a seed).
#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
pub fn derive_key(name: &str) -> alloc::vec::Vec<u8> {
    let mut key = alloc::vec::Vec::from(name.as_bytes());
    let missing = (BLOCK_SIZE - key.len() % BLOCK_SIZE) % BLOCK_SIZE;
    key.extend_from_slice(&PAD_STRING[..missing]);
    key
}

/// A key derived from a name with [`derive_key`].
///
/// ```
/// use ctr_drng::StringSeed;
///
/// let seed = StringSeed::new("i like cats");
/// assert_eq!(seed.as_bytes(), b"i like catsR3JlZ");
///
/// let mut rng = seed.into_drng().unwrap();
/// let roll = rng.next_int(1, 10).unwrap();
/// assert!((1..=10).contains(&roll));
/// ```
#[cfg(feature = "alloc")]
#[cfg_attr(docsrs, doc(cfg(feature = "alloc")))]
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StringSeed {
    padded: alloc::vec::Vec<u8>,
}

#[cfg(feature = "alloc")]
impl StringSeed {
    pub fn new(name: &str) -> Self {
        Self {
            padded: derive_key(name),
        }
    }

    /// The padded key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.padded
    }

    /// Create a generator keyed with this seed.
    pub fn into_drng(self) -> Result<crate::Drng, SeedSizeError> {
        crate::Drng::new(&self.padded)
    }
}

#[cfg(feature = "alloc")]
impl AsRef<[u8]> for StringSeed {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

#[cfg(feature = "alloc")]
impl core::fmt::Display for StringSeed {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // names are `&str` and the padding is ASCII, so this never fails
        match core::str::from_utf8(&self.padded) {
            Ok(s) => f.write_str(s),
            Err(_) => Err(core::fmt::Error),
        }
    }
}

#[cfg(feature = "alloc")]
impl core::fmt::Debug for StringSeed {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StringSeed")
            .field("len", &self.padded.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_block_multiples() {
        assert_eq!(validate_seed(&[0; 16]), Ok(()));
        assert_eq!(validate_seed(&[0; 32]), Ok(()));
        assert_eq!(validate_seed(&[0; 48]), Ok(()));
    }

    #[test]
    fn rejects_other_lengths() {
        assert_eq!(validate_seed(&[]), Err(SeedSizeError { len: 0 }));
        assert_eq!(validate_seed(&[0; 5]), Err(SeedSizeError { len: 5 }));
        assert_eq!(validate_seed(&[0; 17]), Err(SeedSizeError { len: 17 }));
    }

    #[cfg(feature = "alloc")]
    mod derive {
        extern crate std;

        use super::super::*;
        use std::string::ToString;

        #[test]
        fn sixteen_bytes_unchanged() {
            assert_eq!(derive_key("0123456789abcdef"), b"0123456789abcdef");
        }

        #[test]
        fn short_name_gets_padding() {
            let key = derive_key("cat mouse");
            assert_eq!(key.len(), 16);
            assert!(key.starts_with(b"cat mouse"));
            assert_eq!(&key[9..], &PAD_STRING[..7]);
        }

        #[test]
        fn long_name_gets_padding() {
            let name = "here comes the sun, do do do do, here comes the sun";
            let key = derive_key(name);
            assert_eq!(key.len(), 64);
            assert!(key.starts_with(name.as_bytes()));
            assert_eq!(&key[name.len()..], &PAD_STRING[..64 - name.len()]);
        }

        #[test]
        fn empty_name_is_not_a_valid_seed() {
            assert!(derive_key("").is_empty());
            assert!(StringSeed::new("").into_drng().is_err());
        }

        #[test]
        fn display_shows_padded_name() {
            let seed = StringSeed::new("cat mouse");
            assert_eq!(seed.to_string(), "cat mouseR3JlZyB");
        }
    }
}
