//! Decoding primitives for 32-bit word-aligned hybrid (EWAH) compressed bitmaps
//!
//! A compressed bitmap is a sequence of 32-bit words split into blocks: one marker word
//! (a run of identical words plus a count of literal words) followed by that many
//! literal words. [`IteratingRlw`] walks such a stream one logical word at a time,
//! crossing block boundaries transparently, and re-emits it into any [`BitmapStorage`].
//!
//! # Example
//!
//! ```rust
//! use ewah::{Ewah32, RunningLengthWord};
//!
//! // One block: three words of ones, then two literal words
//! let words = vec![
//!     RunningLengthWord::new(true, 3, 2).raw(),
//!     0xAAAA_AAAA,
//!     0x0F0F_0F0F,
//! ];
//! let bitmap = Ewah32::from_words(words, 5 * 32).unwrap();
//!
//! let mut cursor = bitmap.cursor();
//! let mut out: Vec<u32> = Vec::new();
//! cursor.discard_first_words(4);
//! assert_eq!(cursor.discharge(&mut out, 100), 1);
//! assert_eq!(out, vec![0x0F0F_0F0F]);
//!
//! let mut negated: Vec<u32> = Vec::new();
//! assert_eq!(bitmap.cursor().discharge_negated(&mut negated, 100), 5);
//! assert_eq!(negated, vec![0, 0, 0, 0x5555_5555, 0xF0F0_F0F0]);
//! ```

pub mod bitmap;
pub mod cursor;
mod error;
pub mod rlw;
pub mod storage;

pub use bitmap::{Ewah32, EwahIterator};
pub use cursor::IteratingRlw;
pub use error::{Error, Result};
pub use rlw::{BufferedRunningLengthWord, RunningLengthWord};
pub use storage::{BitmapStorage, NullStorage};

/// Number of bits in a single compressed or literal word
pub const WORD_IN_BITS: usize = 32;
