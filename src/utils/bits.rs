//! Word layout for packed bit storage.
//!
//! Bit `i` of a packed sequence lives in word `i / WORD_BITS` at bit
//! `i % WORD_BITS`, least-significant bit first.

/// The unsigned integer type bits are packed into.
pub type Word = u64;

/// The number of bits in a [`Word`].
pub const WORD_BITS: usize = Word::BITS as usize;

/// Returns the number of words needed to hold `bits` bits.
#[inline(always)]
pub const fn words_for(bits: usize) -> usize {
    bits.div_ceil(WORD_BITS)
}

/// Splits a bit index into `(word index, bit index within word)`.
#[inline(always)]
pub const fn locate(position: usize) -> (usize, usize) {
    (position / WORD_BITS, position % WORD_BITS)
}

/// Mask of the bits in the last word that belong to a sequence of `bits` bits.
///
/// When `bits` is an exact multiple of the word width every bit of the last
/// word is in use and the mask is all ones.
#[inline(always)]
pub const fn tail_mask(bits: usize) -> Word {
    match bits % WORD_BITS {
        0 => Word::MAX,
        used => (1 << used) - 1,
    }
}

/// Clears the unused high bits of the last word of `words`.
#[inline(always)]
pub fn mask_tail(words: &mut [Word], bits: usize) {
    if let Some(last) = words.last_mut() {
        *last &= tail_mask(bits);
    }
}

#[inline(always)]
pub fn get(words: &[Word], position: usize) -> bool {
    let (word, bit) = locate(position);
    (words[word] >> bit) & 1 == 1
}

#[inline(always)]
pub fn set(words: &mut [Word], position: usize, value: bool) {
    let (word, bit) = locate(position);
    words[word] &= !(1 << bit);
    words[word] |= (value as Word) << bit;
}

#[inline(always)]
pub fn toggle(words: &mut [Word], position: usize) {
    let (word, bit) = locate(position);
    words[word] ^= 1 << bit;
}

/// XORs `src` into `dst` word by word. Both slices must have the same length.
#[inline]
pub fn xor_into(dst: &mut [Word], src: &[Word]) {
    debug_assert_eq!(dst.len(), src.len());
    for (d, s) in dst.iter_mut().zip(src) {
        *d ^= *s;
    }
}
