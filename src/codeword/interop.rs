//! Conversions between [`Codeword`] and `bitvec` containers.

use bitvec::prelude::*;

use super::types::Codeword;
use crate::utils::bits::{self, Word};
use crate::utils::error::{CodewordError, Result};

impl Codeword {
    /// Builds a codeword holding the bits of `bits`, index 0 first.
    ///
    /// # Errors
    ///
    /// [`CodewordError::InvalidLength`] if `bits` is empty.
    pub fn from_bitslice(bits: &BitSlice<Word, Lsb0>) -> Result<Self> {
        let mut bv = BitVec::<Word, Lsb0>::from_bitslice(bits);
        // Unaligned slices keep their head offset; shift bit 0 to word 0.
        bv.force_align();
        Codeword::from_words(bits.len(), bv.into_vec())
    }

    /// Builds a codeword from a sequence of bits, index 0 first.
    pub fn from_bits<I>(bits: I) -> Result<Self>
    where
        I: IntoIterator<Item = bool>,
    {
        let bv: BitVec<Word, Lsb0> = bits.into_iter().collect();
        Self::from_bitslice(&bv)
    }

    /// Copies the codeword into a `BitVec` of exactly `length()` bits.
    pub fn to_bitvec(&self) -> Result<BitVec<Word, Lsb0>> {
        let words = self.words()?;
        let mut bv = BitVec::<Word, Lsb0>::from_vec(words.to_vec());
        bv.truncate(self.length());
        Ok(bv)
    }

    /// Iterates over the bits, index 0 first.
    pub fn iter_bits(&self) -> Result<impl Iterator<Item = bool> + '_> {
        let words = self.words()?;
        Ok((0..self.length()).map(move |i| bits::get(words, i)))
    }
}

impl TryFrom<&BitSlice<Word, Lsb0>> for Codeword {
    type Error = CodewordError;

    fn try_from(bits: &BitSlice<Word, Lsb0>) -> Result<Self> {
        Self::from_bitslice(bits)
    }
}
