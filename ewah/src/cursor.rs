//! Word-at-a-time decoding across block boundaries
//!
//! [`IteratingRlw`] keeps the decoded fields of the current block and lazily loads the
//! next block whenever the current one has been consumed. Binary operations drive two
//! cursors side by side: read both with [`literal_word_at`](IteratingRlw::literal_word_at),
//! decide how many words to emit, then [`discharge`](IteratingRlw::discharge) one and
//! [`discard_first_words`](IteratingRlw::discard_first_words) the other.

use tracing::trace;

use crate::bitmap::{Ewah32, EwahIterator};
use crate::rlw::BufferedRunningLengthWord;
use crate::storage::BitmapStorage;

/// A decoding cursor over a compressed word stream
///
/// The cursor is in one of two states: it holds undecoded words of a block
/// (`size() > 0`), or the stream is exhausted.
#[derive(Clone, Debug)]
pub struct IteratingRlw<'a> {
    iterator: EwahIterator<'a>,
    rlw: BufferedRunningLengthWord,
}

impl<'a> IteratingRlw<'a> {
    /// Start decoding at the next block of `iterator`
    ///
    /// # Panics
    ///
    /// Panics if `iterator` has no block left.
    pub fn new(mut iterator: EwahIterator<'a>) -> Self {
        let rlw = BufferedRunningLengthWord::new(iterator.next_marker());
        let mut cursor = Self { iterator, rlw };
        cursor.advance_block_if_exhausted();
        cursor
    }

    /// Skip the next `x` logical words, loading later blocks as needed
    ///
    /// Words past the end of the stream are silently ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use ewah::{Ewah32, RunningLengthWord};
    ///
    /// let words = vec![
    ///     RunningLengthWord::new(true, 3, 2).raw(),
    ///     0xAAAA_AAAA,
    ///     0x0F0F_0F0F,
    /// ];
    /// let bitmap = Ewah32::from_words(words, 5 * 32).unwrap();
    /// let mut cursor = bitmap.cursor();
    ///
    /// cursor.discard_first_words(2);
    /// assert_eq!(cursor.running_length(), 1);
    /// cursor.discard_first_words(2);
    /// assert_eq!(cursor.size(), 1);
    /// assert_eq!(cursor.literal_word_at(0), 0x0F0F_0F0F);
    /// cursor.discard_first_words(100);
    /// assert_eq!(cursor.size(), 0);
    /// ```
    pub fn discard_first_words(&mut self, mut x: usize) {
        while x > 0 {
            let local = x.min(self.rlw.size());
            self.rlw.discard_first_words(local);
            x -= local;
            if !self.advance_block_if_exhausted() {
                break;
            }
        }
    }

    /// Emit up to `max` words into `container`, returning how many were emitted
    ///
    /// Fewer than `max` words are emitted only when the stream runs out.
    ///
    /// # Examples
    ///
    /// ```
    /// use ewah::{Ewah32, RunningLengthWord};
    ///
    /// let words = vec![
    ///     RunningLengthWord::new(true, 3, 2).raw(),
    ///     0xAAAA_AAAA,
    ///     0x0F0F_0F0F,
    /// ];
    /// let bitmap = Ewah32::from_words(words, 5 * 32).unwrap();
    /// let mut cursor = bitmap.cursor();
    ///
    /// let mut out: Vec<u32> = Vec::new();
    /// assert_eq!(cursor.discharge(&mut out, 4), 4);
    /// assert_eq!(out, vec![u32::MAX, u32::MAX, u32::MAX, 0xAAAA_AAAA]);
    /// assert_eq!(cursor.discharge(&mut out, 4), 1);
    /// assert_eq!(out.last(), Some(&0x0F0F_0F0F));
    /// ```
    pub fn discharge<S: BitmapStorage + ?Sized>(&mut self, container: &mut S, max: usize) -> usize {
        let mut index = 0;
        while index < max && self.size() > 0 {
            let pl = self.running_length().min(max - index);
            container.add_stream_of_empty_words(self.running_bit(), pl);
            index += pl;
            let pd = self.number_of_literal_words().min(max - index);
            self.write_literal_words(pd, container);
            self.discard_first_words(pl + pd);
            index += pd;
        }
        index
    }

    /// Like [`discharge`](Self::discharge), with every emitted word inverted
    pub fn discharge_negated<S: BitmapStorage + ?Sized>(
        &mut self,
        container: &mut S,
        max: usize,
    ) -> usize {
        let mut index = 0;
        while index < max && self.size() > 0 {
            let pl = self.running_length().min(max - index);
            container.add_stream_of_empty_words(!self.running_bit(), pl);
            index += pl;
            let pd = self.number_of_literal_words().min(max - index);
            self.write_negated_literal_words(pd, container);
            self.discard_first_words(pl + pd);
            index += pd;
        }
        index
    }

    /// Emit the rest of the stream as zero words
    ///
    /// Pads the output when this operand runs out before its peer.
    pub fn discharge_as_empty<S: BitmapStorage + ?Sized>(&mut self, container: &mut S) {
        while self.size() > 0 {
            let size = self.size();
            container.add_stream_of_empty_words(false, size);
            self.discard_first_words(size);
        }
    }

    /// Emit everything from the current position to the end of the stream
    ///
    /// Leaves the cursor exhausted.
    ///
    /// # Examples
    ///
    /// ```
    /// use ewah::{Ewah32, RunningLengthWord};
    ///
    /// let words = vec![
    ///     RunningLengthWord::new(false, 1, 1).raw(),
    ///     0x8000_0000,
    ///     RunningLengthWord::new(true, 2, 0).raw(),
    /// ];
    /// let bitmap = Ewah32::from_words(words, 4 * 32).unwrap();
    /// let mut cursor = bitmap.cursor();
    /// cursor.discard_first_words(1);
    ///
    /// let mut out: Vec<u32> = Vec::new();
    /// cursor.discharge_all(&mut out);
    /// assert_eq!(out, vec![0x8000_0000, u32::MAX, u32::MAX]);
    /// assert_eq!(cursor.size(), 0);
    /// ```
    pub fn discharge_all<S: BitmapStorage + ?Sized>(&mut self, container: &mut S) {
        loop {
            container.add_stream_of_empty_words(self.running_bit(), self.running_length());
            self.write_literal_words(self.number_of_literal_words(), container);
            if !self.iterator.has_next() {
                break;
            }
            self.rlw.reset(self.iterator.next_marker());
        }
        let size = self.rlw.size();
        self.rlw.discard_first_words(size);
    }

    /// Read the literal word `index` positions past the current one, without consuming it
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below [`number_of_literal_words`](Self::number_of_literal_words).
    #[inline]
    pub fn literal_word_at(&self, index: usize) -> u32 {
        assert!(
            index < self.number_of_literal_words(),
            "literal index {index} out of range for a block with {} literal words left",
            self.number_of_literal_words()
        );
        self.iterator.buffer()[self.literal_word_start() + index]
    }

    /// Emit the next `n` literal words without consuming them
    #[inline]
    pub fn write_literal_words<S: BitmapStorage + ?Sized>(&self, n: usize, container: &mut S) {
        debug_assert!(n <= self.number_of_literal_words());
        container.add_stream_of_literal_words(self.iterator.buffer(), self.literal_word_start(), n);
    }

    /// Emit the next `n` literal words, inverted, without consuming them
    #[inline]
    pub fn write_negated_literal_words<S: BitmapStorage + ?Sized>(
        &self,
        n: usize,
        container: &mut S,
    ) {
        debug_assert!(n <= self.number_of_literal_words());
        container.add_stream_of_negated_literal_words(
            self.iterator.buffer(),
            self.literal_word_start(),
            n,
        );
    }

    /// Remaining logical words in the current block only
    #[inline]
    pub const fn size(&self) -> usize {
        self.rlw.size()
    }

    #[inline]
    pub const fn running_bit(&self) -> bool {
        self.rlw.running_bit()
    }

    #[inline]
    pub const fn running_length(&self) -> usize {
        self.rlw.running_length()
    }

    #[inline]
    pub const fn number_of_literal_words(&self) -> usize {
        self.rlw.number_of_literal_words()
    }

    /// Absolute buffer index of the next unread literal word
    #[inline]
    const fn literal_word_start(&self) -> usize {
        self.iterator.literal_words() + self.rlw.literal_word_offset()
    }

    /// Load blocks until one has words left, or the stream ends
    ///
    /// Returns `false` once the cursor is exhausted.
    fn advance_block_if_exhausted(&mut self) -> bool {
        while self.rlw.size() == 0 {
            if !self.iterator.has_next() {
                return false;
            }
            self.rlw.reset(self.iterator.next_marker());
            trace!(
                literal_start = self.iterator.literal_words(),
                running_length = self.rlw.running_length(),
                literal_words = self.rlw.number_of_literal_words(),
                "crossed into next block"
            );
        }
        true
    }
}

impl Ewah32 {
    /// Returns a decoding cursor positioned at the first word of this bitmap
    #[inline]
    pub fn cursor(&self) -> IteratingRlw<'_> {
        IteratingRlw::new(self.ewah_iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rlw::RunningLengthWord;
    use crate::storage::NullStorage;

    fn two_blocks() -> Ewah32 {
        Ewah32::from_words(
            vec![
                RunningLengthWord::new(true, 3, 2).raw(),
                0xAAAA_AAAA,
                0x0F0F_0F0F,
                RunningLengthWord::new(false, 2, 1).raw(),
                0x1234_5678,
            ],
            8 * 32,
        )
        .unwrap()
    }

    #[test]
    fn advance_is_noop_while_block_has_words() {
        let bitmap = two_blocks();
        let mut cursor = bitmap.cursor();
        assert!(cursor.advance_block_if_exhausted());
        assert_eq!(cursor.size(), 5);
        assert_eq!(cursor.literal_word_start(), 1);
    }

    #[test]
    fn advance_loads_next_block() {
        let bitmap = two_blocks();
        let mut cursor = bitmap.cursor();
        cursor.rlw.discard_first_words(5);
        assert!(cursor.advance_block_if_exhausted());
        assert!(!cursor.running_bit());
        assert_eq!(cursor.size(), 3);
        assert_eq!(cursor.literal_word_start(), 4);

        cursor.rlw.discard_first_words(3);
        assert!(!cursor.advance_block_if_exhausted());
        assert_eq!(cursor.size(), 0);
    }

    #[test]
    fn empty_markers_are_skipped() {
        let bitmap = Ewah32::from_words(
            vec![
                RunningLengthWord::new(true, 0, 0).raw(),
                RunningLengthWord::new(false, 0, 0).raw(),
                RunningLengthWord::new(true, 2, 0).raw(),
                RunningLengthWord::new(false, 0, 0).raw(),
            ],
            64,
        )
        .unwrap();
        let mut cursor = bitmap.cursor();
        assert_eq!(cursor.size(), 2);
        assert!(cursor.running_bit());

        let mut out: Vec<u32> = Vec::new();
        assert_eq!(cursor.discharge(&mut out, 10), 2);
        assert_eq!(out, vec![u32::MAX; 2]);
    }

    #[test]
    fn discard_crosses_blocks() {
        let bitmap = two_blocks();
        let mut cursor = bitmap.cursor();
        cursor.discard_first_words(6);
        assert_eq!(cursor.running_length(), 1);
        assert_eq!(cursor.number_of_literal_words(), 1);
        assert_eq!(cursor.literal_word_at(0), 0x1234_5678);
    }

    #[test]
    fn discard_exact_block_lands_on_next() {
        let bitmap = two_blocks();
        let mut cursor = bitmap.cursor();
        cursor.discard_first_words(5);
        assert_eq!(cursor.size(), 3);
        assert_eq!(cursor.running_length(), 2);
        assert_eq!(cursor.literal_word_start(), 4);
    }

    #[test]
    fn discharge_is_bounded() {
        let bitmap = two_blocks();
        let mut cursor = bitmap.cursor();
        let mut out: Vec<u32> = Vec::new();
        assert_eq!(cursor.discharge(&mut out, 2), 2);
        assert_eq!(cursor.discharge(&mut out, 4), 4);
        assert_eq!(cursor.discharge(&mut out, 4), 2);
        assert_eq!(cursor.discharge(&mut out, 4), 0);
        assert_eq!(out, bitmap.to_words());
    }

    #[test]
    fn discharge_zero_emits_nothing() {
        let bitmap = two_blocks();
        let mut cursor = bitmap.cursor();
        let mut sink = NullStorage::new();
        assert_eq!(cursor.discharge(&mut sink, 0), 0);
        assert_eq!(sink.words_seen(), 0);
        assert_eq!(cursor.size(), 5);
    }

    #[test]
    fn negated_matches_inverted_plain() {
        let bitmap = two_blocks();
        let mut negated: Vec<u32> = Vec::new();
        assert_eq!(bitmap.cursor().discharge_negated(&mut negated, 100), 8);
        let plain: Vec<u32> = bitmap.to_words().into_iter().map(|w| !w).collect();
        assert_eq!(negated, plain);
    }

    #[test]
    fn discharge_as_empty_pads_with_zeros() {
        let bitmap = two_blocks();
        let mut cursor = bitmap.cursor();
        cursor.discard_first_words(1);
        let mut out: Vec<u32> = Vec::new();
        cursor.discharge_as_empty(&mut out);
        assert_eq!(out, vec![0; 7]);
        assert_eq!(cursor.size(), 0);
    }

    #[test]
    fn write_literal_words_does_not_consume() {
        let bitmap = two_blocks();
        let mut cursor = bitmap.cursor();
        cursor.discard_first_words(3);
        let mut out: Vec<u32> = Vec::new();
        cursor.write_literal_words(2, &mut out);
        cursor.write_negated_literal_words(1, &mut out);
        assert_eq!(out, vec![0xAAAA_AAAA, 0x0F0F_0F0F, 0x5555_5555]);
        assert_eq!(cursor.size(), 2);
    }

    #[test]
    fn discharge_all_after_partial_discharge() {
        let bitmap = two_blocks();
        let mut cursor = bitmap.cursor();
        let mut out: Vec<u32> = Vec::new();
        cursor.discharge(&mut out, 4);
        cursor.discharge_all(&mut out);
        assert_eq!(out, bitmap.to_words());

        let mut tail: Vec<u32> = Vec::new();
        assert_eq!(cursor.discharge(&mut tail, 10), 0);
        assert!(tail.is_empty());
    }

    #[test]
    #[should_panic]
    fn literal_index_out_of_range() {
        let bitmap = two_blocks();
        let cursor = bitmap.cursor();
        cursor.literal_word_at(2);
    }

    #[test]
    fn cursor_from_walker() {
        let bitmap = two_blocks();
        let mut walker = bitmap.ewah_iter();
        walker.next_marker();
        let mut cursor = IteratingRlw::new(walker);
        let mut out: Vec<u32> = Vec::new();
        cursor.discharge_all(&mut out);
        assert_eq!(out, vec![0, 0, 0x1234_5678]);
    }
}
