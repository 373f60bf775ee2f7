//! # Binary Codeword Library
//!
//! A fixed-length binary codeword packed into 64-bit words, for coding-theory
//! and bit-manipulation code where compact storage and fast XOR matter.
//!
//! This library is organized into two modules:
//! - `utils`: Error handling and the packed word layout
//! - `codeword`: The `Codeword` value type, XOR accumulation and `bitvec` interop

// Re-export commonly used types at the crate root
pub use utils::error::{CodewordError, Result};
pub use utils::bits::{WORD_BITS, Word};

pub mod utils {
    pub mod bits;
    pub mod error;
}

pub mod codeword {
    pub mod fold;
    pub mod interop;
    pub mod types;

    // Re-export the value type
    pub use self::types::*;
}

pub use codeword::Codeword;
