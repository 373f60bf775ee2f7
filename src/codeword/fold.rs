//! XOR accumulation over many codewords.

use log::trace;

use super::types::Codeword;
use crate::utils::error::{CodewordError, Result};

/// Returns the XOR of every codeword in `codewords`, or `None` if there are
/// none.
///
/// The first codeword is cloned and the rest are folded into it with
/// [`Codeword::xor_in_place`]. XOR is commutative and associative, so the
/// order of the input does not affect the result.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use binary_codeword::Codeword;
/// use binary_codeword::codeword::fold::xor_all;
///
/// let a = Codeword::from_bits([true, false, true])?;
/// let b = Codeword::from_bits([true, true, false])?;
/// let sum = xor_all([&a, &b])?.expect("non-empty input");
/// assert_eq!(sum.render()?, "(011)");
/// # Ok(())
/// # }
/// ```
pub fn xor_all<'a, I>(codewords: I) -> Result<Option<Codeword>>
where
    I: IntoIterator<Item = &'a Codeword>,
{
    let mut iter = codewords.into_iter();
    let Some(first) = iter.next() else {
        return Ok(None);
    };
    if !first.is_initialized() {
        return Err(CodewordError::Uninitialized);
    }

    let mut acc = first.clone();
    let mut count = 1usize;
    for cw in iter {
        acc.xor_in_place(cw)?;
        count += 1;
    }
    trace!("Folded {} codewords of length {}", count, acc.length());
    Ok(Some(acc))
}

/// XORs every codeword in `others` into `target`.
///
/// All operands are checked before `target` is touched: if any of them is
/// empty or has a different length, the error is returned and `target` keeps
/// its previous contents.
pub fn accumulate(target: &mut Codeword, others: &[Codeword]) -> Result<()> {
    if !target.is_initialized() {
        return Err(CodewordError::Uninitialized);
    }
    for cw in others {
        if !cw.is_initialized() {
            return Err(CodewordError::Uninitialized);
        }
        if cw.length() != target.length() {
            return Err(CodewordError::LengthMismatch {
                left: target.length(),
                right: cw.length(),
            });
        }
    }

    for cw in others {
        target.xor_in_place(cw)?;
    }
    trace!("Accumulated {} codewords into target", others.len());
    Ok(())
}
