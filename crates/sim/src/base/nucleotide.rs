use core::fmt;

use crate::errors::InvalidNucleotide;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A DNA nucleotide base.
///
/// `Nucleotide` is a compact, Copyable representation of DNA bases backed by
/// a single byte (u8). The mapping of variants to integers is stable and used
/// throughout the crate (A=0, C=1, G=2, T=3). Use the convenience conversion
/// functions to go between bytes/chars and `Nucleotide`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Nucleotide {
    A = 0,
    C = 1,
    G = 2,
    T = 3,
}

impl Nucleotide {
    /// All four bases in index order. This is the alphabet mutation samples
    /// from; a base can be "replaced" by itself.
    pub const ALPHABET: [Self; 4] = [Self::A, Self::C, Self::G, Self::T];

    /// Convert from u8 index (0-3)
    #[inline(always)]
    pub const fn from_index(idx: u8) -> Option<Self> {
        match idx {
            0 => Some(Self::A),
            1 => Some(Self::C),
            2 => Some(Self::G),
            3 => Some(Self::T),
            _ => None,
        }
    }

    /// Convert to the compact u8 index (0-3).
    #[inline(always)]
    pub const fn to_index(self) -> u8 {
        self as u8
    }

    /// Convert from an ASCII byte (`b'A'`, `b'C'`, `b'G'`, `b'T'`) and also
    /// accepts lowercase bytes. Returns `None` for non-standard characters.
    #[inline]
    pub const fn from_ascii(byte: u8) -> Option<Self> {
        match byte {
            b'A' | b'a' => Some(Self::A),
            b'C' | b'c' => Some(Self::C),
            b'G' | b'g' => Some(Self::G),
            b'T' | b't' => Some(Self::T),
            _ => None,
        }
    }

    /// Convert to an uppercase ASCII byte representing this nucleotide.
    #[inline(always)]
    pub const fn to_ascii(self) -> u8 {
        match self {
            Self::A => b'A',
            Self::C => b'C',
            Self::G => b'G',
            Self::T => b'T',
        }
    }

    /// Convert to an uppercase `char` representing this nucleotide.
    #[inline(always)]
    pub const fn to_char(self) -> char {
        self.to_ascii() as char
    }

    /// Return the complementary base (A <-> T, C <-> G).
    #[inline(always)]
    pub const fn complement(self) -> Self {
        match self {
            Self::A => Self::T,
            Self::T => Self::A,
            Self::C => Self::G,
            Self::G => Self::C,
        }
    }

    /// Draw a uniformly random base from the four-letter alphabet.
    #[inline]
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALPHABET[rng.random_range(0..4)]
    }
}

impl TryFrom<u8> for Nucleotide {
    type Error = InvalidNucleotide;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Self::from_ascii(byte).ok_or(InvalidNucleotide(byte))
    }
}

impl From<Nucleotide> for u8 {
    #[inline(always)]
    fn from(nuc: Nucleotide) -> u8 {
        nuc.to_index()
    }
}

impl From<Nucleotide> for char {
    #[inline(always)]
    fn from(nuc: Nucleotide) -> char {
        nuc.to_char()
    }
}

impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    #[test]
    fn test_nucleotide_from_index() {
        assert_eq!(Nucleotide::from_index(0), Some(Nucleotide::A));
        assert_eq!(Nucleotide::from_index(1), Some(Nucleotide::C));
        assert_eq!(Nucleotide::from_index(2), Some(Nucleotide::G));
        assert_eq!(Nucleotide::from_index(3), Some(Nucleotide::T));
        assert_eq!(Nucleotide::from_index(4), None);
        assert_eq!(Nucleotide::from_index(255), None);
    }

    #[test]
    fn test_nucleotide_to_index() {
        assert_eq!(Nucleotide::A.to_index(), 0);
        assert_eq!(Nucleotide::C.to_index(), 1);
        assert_eq!(Nucleotide::G.to_index(), 2);
        assert_eq!(Nucleotide::T.to_index(), 3);
    }

    #[test]
    fn test_nucleotide_from_ascii() {
        // Uppercase
        assert_eq!(Nucleotide::from_ascii(b'A'), Some(Nucleotide::A));
        assert_eq!(Nucleotide::from_ascii(b'C'), Some(Nucleotide::C));
        assert_eq!(Nucleotide::from_ascii(b'G'), Some(Nucleotide::G));
        assert_eq!(Nucleotide::from_ascii(b'T'), Some(Nucleotide::T));

        // Lowercase
        assert_eq!(Nucleotide::from_ascii(b'a'), Some(Nucleotide::A));
        assert_eq!(Nucleotide::from_ascii(b't'), Some(Nucleotide::T));

        // Invalid
        assert_eq!(Nucleotide::from_ascii(b'N'), None);
        assert_eq!(Nucleotide::from_ascii(b'5'), None);
        assert_eq!(Nucleotide::from_ascii(b' '), None);
    }

    #[test]
    fn test_nucleotide_to_char() {
        assert_eq!(Nucleotide::A.to_char(), 'A');
        assert_eq!(Nucleotide::C.to_char(), 'C');
        assert_eq!(Nucleotide::G.to_char(), 'G');
        assert_eq!(Nucleotide::T.to_char(), 'T');
    }

    #[test]
    fn test_nucleotide_complement() {
        assert_eq!(Nucleotide::A.complement(), Nucleotide::T);
        assert_eq!(Nucleotide::T.complement(), Nucleotide::A);
        assert_eq!(Nucleotide::C.complement(), Nucleotide::G);
        assert_eq!(Nucleotide::G.complement(), Nucleotide::C);

        // Double complement returns original
        assert_eq!(Nucleotide::A.complement().complement(), Nucleotide::A);
    }

    #[test]
    fn test_nucleotide_sample_covers_alphabet() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);

        let mut counts = [0usize; 4];
        for _ in 0..4000 {
            counts[Nucleotide::sample(&mut rng).to_index() as usize] += 1;
        }

        // Uniform sampling: each base should land near 1000 draws
        for &count in &counts {
            assert!(count > 800);
            assert!(count < 1200);
        }
    }

    #[test]
    fn test_nucleotide_try_from_u8() {
        assert_eq!(Nucleotide::try_from(b'A'), Ok(Nucleotide::A));
        assert_eq!(Nucleotide::try_from(b'c'), Ok(Nucleotide::C));
        assert!(Nucleotide::try_from(b'N').is_err());

        let err = Nucleotide::try_from(b'X').unwrap_err();
        assert_eq!(err.0, b'X');
    }

    #[test]
    fn test_invalid_nucleotide_display() {
        let err = InvalidNucleotide(b'X');
        let msg = format!("{err}");
        assert!(msg.contains("Invalid"));
        assert!(msg.contains("88")); // ASCII value of 'X'
        assert!(msg.contains("X"));
    }

    #[test]
    fn test_nucleotide_size() {
        // Ensure Nucleotide is exactly 1 byte
        assert_eq!(std::mem::size_of::<Nucleotide>(), 1);
    }
}
