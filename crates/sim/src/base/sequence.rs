use super::Nucleotide;
use crate::errors::{InvalidSequence, OutOfBounds};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Mutable genetic sequence backed by a vector of Nucleotides.
///
/// `Sequence` is intended for active, in-place operations such as mutation.
/// Its length is fixed for the lifetime of a simulation: mutation replaces
/// bases, it never inserts or deletes them. For a read-only, shareable view
/// convert to `SharedSequence` using `to_shared` or `into_shared`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sequence(Vec<Nucleotide>);

impl Sequence {
    /// Create a new, empty `Sequence`.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Create a `Sequence` from a vector of `Nucleotide`s.
    pub fn from_nucleotides(nucleotides: Vec<Nucleotide>) -> Self {
        Self(nucleotides)
    }

    /// Create a `Sequence` of `len` copies of `base`.
    pub fn uniform(base: Nucleotide, len: usize) -> Self {
        Self(vec![base; len])
    }

    /// Return the length of the sequence in bases.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return `true` if the sequence contains no bases.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return the `Nucleotide` at `index`, or `None` if out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Nucleotide> {
        self.0.get(index).copied()
    }

    /// Set the base at `index` to `base`.
    ///
    /// Returns `OutOfBounds` if `index` is greater than or equal to the
    /// sequence length.
    #[inline]
    pub fn set(&mut self, index: usize, base: Nucleotide) -> Result<(), OutOfBounds> {
        self.0
            .get_mut(index)
            .map(|slot| *slot = base)
            .ok_or(OutOfBounds {
                index,
                len: self.len(),
            })
    }

    /// Borrow the underlying `Nucleotide` slice.
    #[inline]
    pub fn as_slice(&self) -> &[Nucleotide] {
        &self.0
    }

    /// Borrow the mutable underlying `Nucleotide` slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Nucleotide] {
        &mut self.0
    }

    /// Consume this `Sequence` and produce an immutable `SharedSequence`.
    ///
    /// This avoids cloning the internal buffer by reusing the owned `Vec`
    /// storage as an `Arc<[Nucleotide]>` where possible.
    pub fn into_shared(self) -> SharedSequence {
        SharedSequence(self.0.into())
    }

    /// Create an immutable `SharedSequence` by cloning the internal data.
    pub fn to_shared(&self) -> SharedSequence {
        SharedSequence(self.0.clone().into())
    }
}

impl Default for Sequence {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &nuc in &self.0 {
            write!(f, "{}", nuc.to_char())?;
        }
        Ok(())
    }
}

impl FromStr for Sequence {
    type Err = InvalidSequence;

    /// Parse a textual representation (e.g. "ACGT") into a `Sequence`.
    ///
    /// Characters not present in the standard DNA alphabet produce an
    /// `InvalidSequence` error. This function is case-insensitive for ASCII
    /// letters. Non-ASCII characters are rejected outright; they must not be
    /// narrowed to a byte first, or lookalikes like 'Ł' (U+0141, low byte
    /// 0x41) would pass for 'A'.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let data: Result<Vec<Nucleotide>, _> = s
            .chars()
            .map(|c| {
                u8::try_from(c)
                    .ok()
                    .and_then(Nucleotide::from_ascii)
                    .ok_or(InvalidSequence::InvalidChar(c))
            })
            .collect();

        Ok(Self(data?))
    }
}

/// Immutable, shareable sequence view.
///
/// `SharedSequence` holds its data in a reference-counted `Arc<[Nucleotide]>`.
/// Cloning a `SharedSequence` is cheap and the structure is safe to share for
/// read-only operations. The simulation uses it for the target sequence,
/// which every individual is scored against but nothing ever mutates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SharedSequence(Arc<[Nucleotide]>);

impl SharedSequence {
    /// Return the number of bases in the shared sequence.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return true if the shared sequence has no bases.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return the `Nucleotide` at `index`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Nucleotide> {
        self.0.get(index).copied()
    }

    /// Borrow the `Nucleotide` slice.
    #[inline]
    pub fn as_slice(&self) -> &[Nucleotide] {
        &self.0
    }

    /// Clone the shared data into a new mutable `Sequence`.
    pub fn to_mutable(&self) -> Sequence {
        Sequence(self.0.to_vec())
    }
}

impl From<Sequence> for SharedSequence {
    fn from(seq: Sequence) -> Self {
        seq.into_shared()
    }
}

impl fmt::Display for SharedSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &nuc in self.0.iter() {
            write!(f, "{}", nuc.to_char())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_new_is_empty() {
        let seq = Sequence::new();
        assert_eq!(seq.len(), 0);
        assert!(seq.is_empty());
    }

    #[test]
    fn test_sequence_uniform() {
        let seq = Sequence::uniform(Nucleotide::G, 5);
        assert_eq!(seq.len(), 5);
        assert_eq!(seq.to_string(), "GGGGG");
    }

    #[test]
    fn test_sequence_from_nucleotides() {
        let seq = Sequence::from_nucleotides(vec![
            Nucleotide::A,
            Nucleotide::C,
            Nucleotide::G,
            Nucleotide::T,
        ]);
        assert_eq!(seq.to_string(), "ACGT");
    }

    #[test]
    fn test_sequence_from_str_valid() {
        let seq = Sequence::from_str("ACGTacgt").unwrap();
        assert_eq!(seq.len(), 8);
        assert_eq!(seq.to_string(), "ACGTACGT");
    }

    #[test]
    fn test_sequence_from_str_invalid() {
        let err = Sequence::from_str("ACXGT").unwrap_err();
        assert_eq!(err, InvalidSequence::InvalidChar('X'));
    }

    #[test]
    fn test_sequence_from_str_rejects_non_ascii() {
        // 'Ł' (U+0141) has low byte 0x41 ('A'); truncating to u8 would
        // silently accept it as a base.
        let err = Sequence::from_str("\u{141}CGT").unwrap_err();
        assert_eq!(err, InvalidSequence::InvalidChar('\u{141}'));

        assert!(Sequence::from_str("ACG\u{100}").is_err());
        assert!(Sequence::from_str("αCGT").is_err());
    }

    #[test]
    fn test_sequence_get_set() {
        let mut seq = Sequence::from_str("AAAA").unwrap();
        assert_eq!(seq.get(2), Some(Nucleotide::A));

        seq.set(2, Nucleotide::T).unwrap();
        assert_eq!(seq.get(2), Some(Nucleotide::T));
        assert_eq!(seq.to_string(), "AATA");

        let err = seq.set(4, Nucleotide::C).unwrap_err();
        assert_eq!(err.index, 4);
        assert_eq!(err.len, 4);
    }

    #[test]
    fn test_sequence_into_shared_roundtrip() {
        let seq = Sequence::from_str("ACGT").unwrap();
        let shared = seq.clone().into_shared();

        assert_eq!(shared.len(), 4);
        assert_eq!(shared.get(1), Some(Nucleotide::C));
        assert_eq!(shared.to_mutable(), seq);
        assert_eq!(shared.to_string(), "ACGT");
    }

    #[test]
    fn test_shared_sequence_is_cheap_to_clone() {
        let shared = Sequence::from_str("ACGTACGT").unwrap().into_shared();
        let clone = shared.clone();
        assert_eq!(shared.as_slice(), clone.as_slice());
    }
}
