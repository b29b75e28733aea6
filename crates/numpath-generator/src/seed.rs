use std::{fmt, str::FromStr};

use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// A 256-bit seed that makes puzzle generation reproducible.
///
/// The seed is displayed and parsed as 64 lowercase hexadecimal digits.
/// Each generation stage draws from its own stream, obtained with
/// [`PuzzleSeed::derive`].
///
/// # Examples
///
/// ```
/// use numpath_generator::PuzzleSeed;
///
/// let seed: PuzzleSeed = "00112233445566778899aabbccddeeff00112233445566778899aabbccddeeff".parse()?;
/// assert_eq!(seed.to_string().parse::<PuzzleSeed>()?, seed);
/// assert_ne!(seed.derive("path"), seed.derive("mask"));
/// # Ok::<(), numpath_generator::ParseSeedError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Draws a fresh seed from the thread-local entropy source.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::rng().random())
    }

    /// Returns a random number generator seeded with this seed.
    #[must_use]
    pub fn rng(self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }

    /// Derives an independent seed for a named stage.
    ///
    /// The result is `SHA-256(seed || label)`.
    #[must_use]
    pub fn derive(self, label: &str) -> Self {
        let digest = Sha256::new()
            .chain_update(self.0)
            .chain_update(label.as_bytes())
            .finalize();
        Self(digest.into())
    }
}

impl From<[u8; 32]> for PuzzleSeed {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Errors from parsing a [`PuzzleSeed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The string is not 64 characters long.
    #[display("seed must be 64 hex digits, got {len} characters")]
    InvalidLength {
        /// Number of characters found.
        len: usize,
    },
    /// A character is not a hexadecimal digit.
    #[display("invalid hex digit {digit:?} at index {index}")]
    InvalidDigit {
        /// 0-based character index.
        index: usize,
        /// Offending character.
        digit: char,
    },
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.trim().chars().collect();
        if chars.len() != 64 {
            return Err(ParseSeedError::InvalidLength { len: chars.len() });
        }

        let mut bytes = [0; 32];
        for (i, (byte, pair)) in bytes.iter_mut().zip(chars.chunks_exact(2)).enumerate() {
            let hi = hex_value(pair[0], 2 * i)?;
            let lo = hex_value(pair[1], 2 * i + 1)?;
            *byte = (hi << 4) | lo;
        }
        Ok(Self(bytes))
    }
}

fn hex_value(digit: char, index: usize) -> Result<u8, ParseSeedError> {
    digit
        .to_digit(16)
        .and_then(|v| u8::try_from(v).ok())
        .ok_or(ParseSeedError::InvalidDigit { index, digit })
}
