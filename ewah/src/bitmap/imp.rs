use tracing::debug;

use super::Ewah32;
use crate::rlw::RunningLengthWord;
use crate::{Error, Result, WORD_IN_BITS};

impl Ewah32 {
    /// Creates an empty bitmap: a single marker word describing nothing
    ///
    /// # Examples
    ///
    /// ```
    /// use ewah::Ewah32;
    ///
    /// let bitmap = Ewah32::new();
    /// assert!(bitmap.is_empty());
    /// assert_eq!(bitmap.as_words(), &[0]);
    /// assert_eq!(bitmap.logical_words(), 0);
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            buffer: vec![0],
            size_in_bits: 0,
        }
    }

    /// Wraps already compressed words covering `size_in_bits` bits
    ///
    /// Every marker word must be followed by as many literal words as it announces,
    /// and the stream must decode to exactly `size_in_bits.div_ceil(32)` words.
    ///
    /// # Examples
    ///
    /// ```
    /// use ewah::{Error, Ewah32, RunningLengthWord};
    ///
    /// let marker = RunningLengthWord::new(false, 0, 2).raw();
    /// assert!(Ewah32::from_words(vec![marker, 1, 2], 64).is_ok());
    ///
    /// let err = Ewah32::from_words(vec![marker, 1], 64).unwrap_err();
    /// assert!(matches!(err, Error::LiteralOverrun { position: 0, expected: 2, available: 1 }));
    ///
    /// let err = Ewah32::from_words(vec![marker, 1, 2], 65).unwrap_err();
    /// assert!(matches!(err, Error::SizeMismatch { size_in_bits: 65, logical_words: 2 }));
    /// ```
    pub fn from_words(words: Vec<u32>, size_in_bits: usize) -> Result<Self> {
        let bitmap = Self {
            buffer: words,
            size_in_bits,
        };
        bitmap.validate()?;
        Ok(bitmap)
    }

    /// Checks that the word buffer is a well-formed stream decoding to exactly `size_in_bits`
    /// rounded up to whole words
    pub fn validate(&self) -> Result<()> {
        if self.buffer.is_empty() {
            return Err(Error::EmptyBuffer);
        }

        let mut position = 0;
        let mut blocks = 0;
        let mut logical_words = 0;
        while position < self.buffer.len() {
            let rlw = RunningLengthWord::from_raw(self.buffer[position]);
            let expected = rlw.number_of_literal_words() as usize;
            let available = self.buffer.len() - position - 1;
            if expected > available {
                return Err(Error::LiteralOverrun {
                    position,
                    expected,
                    available,
                });
            }
            logical_words += rlw.size() as usize;
            blocks += 1;
            position += expected + 1;
        }

        if logical_words != self.size_in_bits.div_ceil(WORD_IN_BITS) {
            return Err(Error::SizeMismatch {
                size_in_bits: self.size_in_bits,
                logical_words,
            });
        }

        debug!(
            words = self.buffer.len(),
            blocks,
            logical_words,
            size_in_bits = self.size_in_bits,
            "validated compressed bitmap"
        );
        Ok(())
    }

    /// Access the raw compressed words
    #[inline]
    pub fn as_words(&self) -> &[u32] {
        &self.buffer
    }

    /// Number of bits this bitmap covers
    #[inline]
    pub const fn size_in_bits(&self) -> usize {
        self.size_in_bits
    }

    /// Compressed length, in words
    #[inline]
    pub fn size_in_words(&self) -> usize {
        self.buffer.len()
    }

    /// Returns `true` if the bitmap covers no bits at all
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.size_in_bits == 0
    }

    /// Number of words the stream decodes to, summed over every marker word
    pub fn logical_words(&self) -> usize {
        let mut iter = self.ewah_iter();
        let mut total = 0;
        while iter.has_next() {
            total += RunningLengthWord::from_raw(iter.next_marker()).size() as usize;
        }
        total
    }

    /// Decompress into one `u32` per logical word
    ///
    /// # Examples
    ///
    /// ```
    /// use ewah::{Ewah32, RunningLengthWord};
    ///
    /// let words = vec![
    ///     RunningLengthWord::new(true, 1, 1).raw(),
    ///     0x0000_00FF,
    ///     RunningLengthWord::new(false, 2, 0).raw(),
    /// ];
    /// let bitmap = Ewah32::from_words(words, 4 * 32).unwrap();
    /// assert_eq!(bitmap.to_words(), vec![u32::MAX, 0xFF, 0, 0]);
    /// ```
    pub fn to_words(&self) -> Vec<u32> {
        let mut words = Vec::with_capacity(self.logical_words());
        self.cursor().discharge_all(&mut words);
        words
    }
}
