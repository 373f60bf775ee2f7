// src/codeword/types.rs

//! The [`Codeword`] value type.
//!
//! A codeword is a fixed-length sequence of bits packed into [`Word`]s. The
//! unused high bits of the last word are kept at zero after every mutation,
//! so whole-word comparisons and zero checks see exactly the logical bits.

use std::fmt;

use log::{debug, trace};

use crate::utils::bits::{self, Word};
use crate::utils::error::{CodewordError, Result};

/// A fixed-length binary codeword.
///
/// A codeword is either initialized (length > 0, `ceil(length / WORD_BITS)`
/// words of storage) or empty (length 0, no storage). Every operation other than
/// [`reset`](Self::reset) and the state queries fails with
/// [`CodewordError::Uninitialized`] on an empty codeword.
///
/// Cloning duplicates the storage; the clone and the original never alias.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use binary_codeword::Codeword;
///
/// let mut a = Codeword::new(4)?;
/// let mut b = Codeword::new(4)?;
/// a.set_bit(0, 1)?;
/// a.set_bit(2, 1)?;
/// b.set_bit(2, 1)?;
/// b.set_bit(3, 1)?;
///
/// let c = a.xor(&b)?;
/// assert_eq!(c.render()?, "(1001)");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Codeword {
    length: usize,
    words: Vec<Word>,
}

impl Codeword {
    /// Creates an all-zero codeword of `length` bits.
    ///
    /// # Errors
    ///
    /// [`CodewordError::InvalidLength`] if `length` is zero.
    pub fn new(length: usize) -> Result<Self> {
        let mut codeword = Self::empty();
        codeword.reset(length)?;
        Ok(codeword)
    }

    /// Creates an empty, uninitialized codeword with no storage.
    pub const fn empty() -> Self {
        Self {
            length: 0,
            words: Vec::new(),
        }
    }

    /// Creates an all-zero codeword from a signed length, rejecting
    /// negative and zero values with [`CodewordError::InvalidLength`].
    pub fn try_from_signed_length(length: i64) -> Result<Self> {
        match usize::try_from(length) {
            Ok(length) if length > 0 => Self::new(length),
            _ => Err(CodewordError::InvalidLength { length }),
        }
    }

    /// Re-initializes the codeword to `length` zero bits, discarding the
    /// previous contents.
    ///
    /// On error the codeword is left untouched.
    pub fn reset(&mut self, length: usize) -> Result<()> {
        if length == 0 {
            return Err(CodewordError::InvalidLength { length: 0 });
        }

        let num_words = bits::words_for(length);
        debug!("Allocating codeword storage: {} bits in {} words", length, num_words);

        self.length = length;
        self.words = vec![0; num_words];
        Ok(())
    }

    /// Moves the storage out, leaving `self` empty.
    pub fn take(&mut self) -> Codeword {
        std::mem::take(self)
    }

    /// Returns the number of bits, or 0 for an empty codeword.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Returns the number of storage words, or 0 for an empty codeword.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Checks if the codeword has storage.
    pub fn is_initialized(&self) -> bool {
        self.length > 0
    }

    /// Returns the packed storage words.
    pub fn words(&self) -> Result<&[Word]> {
        self.require_initialized()?;
        Ok(&self.words)
    }

    /// Returns the bit at `position` as 0 or 1.
    pub fn get_bit(&self, position: usize) -> Result<u8> {
        self.bit(position).map(u8::from)
    }

    /// Returns the bit at `position` as a `bool`.
    pub fn bit(&self, position: usize) -> Result<bool> {
        self.require_position(position)?;
        Ok(bits::get(&self.words, position))
    }

    /// Writes the low bit of `value` at `position`: odd values store 1, even
    /// values store 0. Negative values follow two's complement, so `-1`
    /// stores 1.
    pub fn set_bit(&mut self, position: usize, value: i64) -> Result<()> {
        self.require_position(position)?;
        bits::set(&mut self.words, position, value & 1 == 1);
        self.mask_unused_bits();
        Ok(())
    }

    /// Inverts the bit at `position`.
    pub fn flip_bit(&mut self, position: usize) -> Result<()> {
        self.require_position(position)?;
        bits::toggle(&mut self.words, position);
        self.mask_unused_bits();
        Ok(())
    }

    /// [`get_bit`](Self::get_bit) for signed positions; negative positions
    /// fail with [`CodewordError::PositionOutOfRange`].
    pub fn get_bit_signed(&self, position: i64) -> Result<u8> {
        let position = self.unsigned_position(position)?;
        self.get_bit(position)
    }

    /// [`set_bit`](Self::set_bit) for signed positions.
    pub fn set_bit_signed(&mut self, position: i64, value: i64) -> Result<()> {
        let position = self.unsigned_position(position)?;
        self.set_bit(position, value)
    }

    /// Returns `true` if every bit is 0.
    pub fn is_zero(&self) -> Result<bool> {
        self.require_initialized()?;
        // Tail bits are always clear, so no special case for the last word.
        Ok(self.words.iter().all(|&w| w == 0))
    }

    /// Returns the component-wise XOR of `self` and `other` as a new codeword.
    ///
    /// # Errors
    ///
    /// [`CodewordError::Uninitialized`] if either operand is empty,
    /// [`CodewordError::LengthMismatch`] if the lengths differ.
    pub fn xor(&self, other: &Codeword) -> Result<Codeword> {
        self.require_compatible(other)?;
        trace!("XOR of two {}-bit codewords", self.length);

        let mut out = Codeword {
            length: self.length,
            words: self
                .words
                .iter()
                .zip(&other.words)
                .map(|(a, b)| a ^ b)
                .collect(),
        };
        out.mask_unused_bits();
        Ok(out)
    }

    /// XORs `other` into `self` without allocating.
    ///
    /// Both operands are validated before `self` is modified, so on error
    /// `self` keeps its previous contents.
    pub fn xor_in_place(&mut self, other: &Codeword) -> Result<()> {
        self.require_compatible(other)?;
        trace!("In-place XOR of two {}-bit codewords", self.length);

        bits::xor_into(&mut self.words, &other.words);
        self.mask_unused_bits();
        Ok(())
    }

    /// Compares two codewords bit for bit.
    ///
    /// Codewords of different lengths compare unequal; unlike
    /// [`xor`](Self::xor) this is not an error.
    pub fn equals(&self, other: &Codeword) -> Result<bool> {
        self.require_initialized()?;
        other.require_initialized()?;

        if self.length != other.length {
            return Ok(false);
        }
        Ok(self.words == other.words)
    }

    /// Renders the codeword as `(` + one `0`/`1` per bit, index 0 first, + `)`.
    pub fn render(&self) -> Result<String> {
        self.require_initialized()?;
        Ok(self.to_string())
    }

    /// Builds a codeword of `length` bits from packed words, padding or
    /// truncating `words` to the right word count and masking the tail.
    pub(crate) fn from_words(length: usize, mut words: Vec<Word>) -> Result<Self> {
        if length == 0 {
            return Err(CodewordError::InvalidLength { length: 0 });
        }
        words.resize(bits::words_for(length), 0);

        let mut cw = Codeword { length, words };
        cw.mask_unused_bits();
        Ok(cw)
    }

    fn mask_unused_bits(&mut self) {
        bits::mask_tail(&mut self.words, self.length);

        #[cfg(feature = "debug-logging")]
        trace!("Codeword words after mutation: {:016x?}", self.words);
    }

    fn require_initialized(&self) -> Result<()> {
        if self.is_initialized() {
            Ok(())
        } else {
            Err(CodewordError::Uninitialized)
        }
    }

    fn require_position(&self, position: usize) -> Result<()> {
        self.require_initialized()?;
        if position >= self.length {
            return Err(CodewordError::PositionOutOfRange {
                position: i64::try_from(position).unwrap_or(i64::MAX),
                length: self.length,
            });
        }
        Ok(())
    }

    fn require_compatible(&self, other: &Codeword) -> Result<()> {
        self.require_initialized()?;
        other.require_initialized()?;
        if self.length != other.length {
            return Err(CodewordError::LengthMismatch {
                left: self.length,
                right: other.length,
            });
        }
        Ok(())
    }

    fn unsigned_position(&self, position: i64) -> Result<usize> {
        self.require_initialized()?;
        usize::try_from(position).map_err(|_| CodewordError::PositionOutOfRange {
            position,
            length: self.length,
        })
    }
}

impl fmt::Display for Codeword {
    /// Writes `(` + one `0`/`1` per bit + `)`. An empty codeword writes `()`;
    /// use [`Codeword::render`] to reject it instead.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for i in 0..self.length {
            f.write_str(if bits::get(&self.words, i) { "1" } else { "0" })?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_allocates_zeroed_words() {
        let cw = Codeword::new(65).unwrap();
        assert_eq!(cw.length(), 65);
        assert_eq!(cw.word_count(), 2);
        assert_eq!(cw.words().unwrap(), &[0u64, 0]);
    }

    #[test]
    fn test_new_rejects_zero_length() {
        assert_eq!(
            Codeword::new(0).unwrap_err(),
            CodewordError::InvalidLength { length: 0 }
        );
    }

    #[test]
    fn test_signed_length() {
        assert_eq!(
            Codeword::try_from_signed_length(-3).unwrap_err(),
            CodewordError::InvalidLength { length: -3 }
        );
        assert_eq!(Codeword::try_from_signed_length(7).unwrap().length(), 7);
    }

    #[test]
    fn test_failed_reset_keeps_contents() {
        let mut cw = Codeword::new(4).unwrap();
        cw.set_bit(1, 1).unwrap();
        assert!(cw.reset(0).is_err());
        assert_eq!(cw.length(), 4);
        assert_eq!(cw.get_bit(1).unwrap(), 1);
    }

    #[test]
    fn test_take_leaves_empty() {
        let mut cw = Codeword::new(10).unwrap();
        cw.set_bit(9, 1).unwrap();

        let moved = cw.take();
        assert_eq!(moved.get_bit(9).unwrap(), 1);
        assert!(!cw.is_initialized());
        assert_eq!(cw.length(), 0);
        assert_eq!(cw.word_count(), 0);
        assert_eq!(cw.get_bit(0).unwrap_err(), CodewordError::Uninitialized);

        // A moved-from codeword can be re-initialized.
        cw.reset(3).unwrap();
        assert!(cw.is_zero().unwrap());
    }

    #[test]
    fn test_tail_stays_masked_at_word_boundary() {
        let mut cw = Codeword::new(64).unwrap();
        cw.set_bit(63, 1).unwrap();
        assert_eq!(cw.words().unwrap(), &[1u64 << 63]);

        let mut cw = Codeword::new(70).unwrap();
        cw.flip_bit(69).unwrap();
        assert_eq!(cw.words().unwrap(), &[0u64, 1 << 5]);
    }

    #[test]
    fn test_signed_positions() {
        let mut cw = Codeword::new(4).unwrap();
        assert_eq!(
            cw.set_bit_signed(-1, 1).unwrap_err(),
            CodewordError::PositionOutOfRange {
                position: -1,
                length: 4
            }
        );
        assert_eq!(
            cw.get_bit_signed(4).unwrap_err(),
            CodewordError::PositionOutOfRange {
                position: 4,
                length: 4
            }
        );
        cw.set_bit_signed(3, 1).unwrap();
        assert_eq!(cw.get_bit_signed(3).unwrap(), 1);
    }

    #[test]
    fn test_display_matches_render() {
        let mut cw = Codeword::new(5).unwrap();
        cw.set_bit(1, 1).unwrap();
        cw.set_bit(4, 1).unwrap();
        assert_eq!(cw.to_string(), cw.render().unwrap());
        assert_eq!(cw.to_string(), "(01001)");
    }

    #[test]
    fn test_display_of_empty_codeword() {
        assert_eq!(Codeword::empty().to_string(), "()");
        assert_eq!(format!("{}", Codeword::default()), "()");

        let mut cw = Codeword::new(2).unwrap();
        let _moved = cw.take();
        assert_eq!(cw.to_string(), "()");
        assert_eq!(cw.render().unwrap_err(), CodewordError::Uninitialized);
    }

    #[test]
    fn test_set_bit_negative_value() {
        let mut cw = Codeword::new(3).unwrap();
        cw.set_bit(1, -1).unwrap();
        assert_eq!(cw.get_bit(1).unwrap(), 1);
        cw.set_bit(1, -2).unwrap();
        assert_eq!(cw.get_bit(1).unwrap(), 0);
        cw.set_bit_signed(2, -3).unwrap();
        assert_eq!(cw.render().unwrap(), "(001)");
    }

    #[test]
    fn test_from_words_masks_tail() {
        let cw = Codeword::from_words(3, vec![Word::MAX, Word::MAX]).unwrap();
        assert_eq!(cw.word_count(), 1);
        assert_eq!(cw.words().unwrap(), &[0b111u64]);

        let cw = Codeword::from_words(70, vec![1]).unwrap();
        assert_eq!(cw.words().unwrap(), &[1u64, 0]);

        assert!(Codeword::from_words(0, vec![]).is_err());
    }
}
