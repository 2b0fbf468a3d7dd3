//! Destinations for decoded words

/// A sink receiving decoded words, either as runs or as literal words
///
/// Implementations decide how words are stored; appending is assumed to always
/// succeed.
pub trait BitmapStorage {
    /// Append `count` words which are all ones (`bit == true`) or all zeros
    fn add_stream_of_empty_words(&mut self, bit: bool, count: usize);

    /// Append `buffer[start..start + count]` verbatim
    fn add_stream_of_literal_words(&mut self, buffer: &[u32], start: usize, count: usize);

    /// Append `buffer[start..start + count]`, each word bitwise inverted
    fn add_stream_of_negated_literal_words(&mut self, buffer: &[u32], start: usize, count: usize);
}

impl<S: BitmapStorage + ?Sized> BitmapStorage for &mut S {
    #[inline]
    fn add_stream_of_empty_words(&mut self, bit: bool, count: usize) {
        (**self).add_stream_of_empty_words(bit, count);
    }

    #[inline]
    fn add_stream_of_literal_words(&mut self, buffer: &[u32], start: usize, count: usize) {
        (**self).add_stream_of_literal_words(buffer, start, count);
    }

    #[inline]
    fn add_stream_of_negated_literal_words(&mut self, buffer: &[u32], start: usize, count: usize) {
        (**self).add_stream_of_negated_literal_words(buffer, start, count);
    }
}

/// Uncompressed output: one `u32` per logical word
///
/// # Examples
///
/// ```
/// use ewah::BitmapStorage;
///
/// let mut words: Vec<u32> = Vec::new();
/// words.add_stream_of_empty_words(true, 2);
/// words.add_stream_of_negated_literal_words(&[0, 0xFFFF_0000, 7], 1, 1);
/// assert_eq!(words, vec![u32::MAX, u32::MAX, 0x0000_FFFF]);
/// ```
impl BitmapStorage for Vec<u32> {
    #[inline]
    fn add_stream_of_empty_words(&mut self, bit: bool, count: usize) {
        let word = if bit { u32::MAX } else { 0 };
        self.resize(self.len() + count, word);
    }

    #[inline]
    fn add_stream_of_literal_words(&mut self, buffer: &[u32], start: usize, count: usize) {
        self.extend_from_slice(&buffer[start..start + count]);
    }

    #[inline]
    fn add_stream_of_negated_literal_words(&mut self, buffer: &[u32], start: usize, count: usize) {
        self.extend(buffer[start..start + count].iter().map(|&word| !word));
    }
}

/// A sink which drops everything it is given, only counting words
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NullStorage {
    words: usize,
}

impl NullStorage {
    #[inline]
    pub const fn new() -> Self {
        Self { words: 0 }
    }

    /// Total number of words offered to this sink
    #[inline]
    pub const fn words_seen(&self) -> usize {
        self.words
    }
}

impl BitmapStorage for NullStorage {
    #[inline]
    fn add_stream_of_empty_words(&mut self, _bit: bool, count: usize) {
        self.words += count;
    }

    #[inline]
    fn add_stream_of_literal_words(&mut self, buffer: &[u32], start: usize, count: usize) {
        debug_assert!(start + count <= buffer.len());
        self.words += count;
    }

    #[inline]
    fn add_stream_of_negated_literal_words(&mut self, buffer: &[u32], start: usize, count: usize) {
        debug_assert!(start + count <= buffer.len());
        self.words += count;
    }
}
