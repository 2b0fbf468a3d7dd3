//! A 32-bit EWAH compressed bitmap, as stored
//!
//! The words are kept exactly as they were produced by the encoder; this module only
//! checks that they form a well-formed stream and hands out walkers over them.
//!
//! # Example
//!
//! ```rust
//! use ewah::{Ewah32, RunningLengthWord};
//!
//! let bitmap = Ewah32::from_words(
//!     vec![
//!         RunningLengthWord::new(false, 2, 1).raw(),
//!         0x8000_0001,
//!         RunningLengthWord::new(true, 1, 0).raw(),
//!     ],
//!     4 * 32,
//! )
//! .unwrap();
//!
//! assert_eq!(bitmap.size_in_words(), 3);
//! assert_eq!(bitmap.logical_words(), 4);
//! assert_eq!(bitmap.to_words(), vec![0, 0, 0x8000_0001, u32::MAX]);
//! ```

/// A compressed bitmap over 32-bit words
#[derive(Clone, PartialEq, Eq)]
pub struct Ewah32 {
    buffer: Vec<u32>,
    size_in_bits: usize,
}

mod imp;
mod iter;
mod ops;
mod serialization;

pub use self::iter::EwahIterator;
