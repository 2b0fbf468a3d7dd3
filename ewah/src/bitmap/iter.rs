use super::Ewah32;
use crate::rlw::RunningLengthWord;

/// Walks the marker words of a compressed buffer, one block at a time
#[derive(Clone, Debug)]
pub struct EwahIterator<'a> {
    buffer: &'a [u32],
    pointer: usize,
    marker_position: usize,
}

impl<'a> EwahIterator<'a> {
    /// Walk `buffer` from its first word, which must be a marker word
    #[inline]
    pub const fn new(buffer: &'a [u32]) -> Self {
        Self {
            buffer,
            pointer: 0,
            marker_position: 0,
        }
    }

    /// Is there another marker word to visit?
    #[inline]
    pub const fn has_next(&self) -> bool {
        self.pointer < self.buffer.len()
    }

    /// Move to the next block, returning its raw marker word
    ///
    /// # Panics
    ///
    /// Panics if [`has_next`](Self::has_next) is `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ewah::{EwahIterator, RunningLengthWord};
    ///
    /// let words = [
    ///     RunningLengthWord::new(false, 1, 2).raw(),
    ///     10,
    ///     20,
    ///     RunningLengthWord::new(true, 4, 0).raw(),
    /// ];
    /// let mut iter = EwahIterator::new(&words);
    /// assert_eq!(iter.next_marker(), words[0]);
    /// assert_eq!(iter.literal_words(), 1);
    /// assert_eq!(iter.next_marker(), words[3]);
    /// assert_eq!(iter.literal_words(), 4);
    /// assert!(!iter.has_next());
    /// ```
    #[inline]
    pub fn next_marker(&mut self) -> u32 {
        assert!(self.has_next(), "no marker word left in the buffer");
        let word = self.buffer[self.pointer];
        self.marker_position = self.pointer;
        self.pointer += RunningLengthWord::from_raw(word).number_of_literal_words() as usize + 1;
        word
    }

    /// Index of the first literal word of the block last returned by
    /// [`next_marker`](Self::next_marker)
    ///
    /// Only meaningful once `next_marker` has been called: before that no block has
    /// been visited and the value is `1`, which is not a literal region.
    #[inline]
    pub const fn literal_words(&self) -> usize {
        self.marker_position + 1
    }

    #[inline]
    pub const fn buffer(&self) -> &'a [u32] {
        self.buffer
    }
}

impl Ewah32 {
    /// Returns a walker over the marker words of this bitmap
    #[inline]
    pub fn ewah_iter(&self) -> EwahIterator<'_> {
        EwahIterator::new(self.as_words())
    }
}
