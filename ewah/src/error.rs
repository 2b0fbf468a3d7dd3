use std::io;

/// Errors raised while loading or validating a compressed word buffer
///
/// Decoding itself never fails: once a bitmap has been accepted, every cursor
/// operation treats argument misuse as a bug and panics.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A compressed bitmap always holds at least one marker word.
    #[error("compressed buffer is empty, expected at least one marker word")]
    EmptyBuffer,

    /// The byte input cannot be split into whole 32-bit words.
    #[error("buffer of {len} bytes is not a whole number of 32-bit words")]
    TruncatedBuffer { len: usize },

    /// A marker word announces more literal words than the buffer holds.
    #[error(
        "marker word at position {position} announces {expected} literal words, only {available} remain"
    )]
    LiteralOverrun {
        position: usize,
        expected: usize,
        available: usize,
    },

    /// The declared bit length does not match the number of decoded words.
    #[error("size of {size_in_bits} bits does not match the {logical_words} words the stream decodes to")]
    SizeMismatch {
        size_in_bits: usize,
        logical_words: usize,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
