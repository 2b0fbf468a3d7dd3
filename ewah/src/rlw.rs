//! Marker word ("running length word") layout
//!
//! ```text
//!  31            17 16             1   0
//! ┌────────────────┬────────────────┬─────┐
//! │ literal count  │ running length │ bit │
//! └────────────────┴────────────────┴─────┘
//! ```
//!
//! [`RunningLengthWord`] is a read-only view over a raw marker word.
//! [`BufferedRunningLengthWord`] is the decoded, mutable copy a cursor shrinks as it
//! consumes words.

use std::fmt;

/// Width of the running length field
pub const RUNNING_LENGTH_BITS: u32 = 16;

/// Width of the literal word count field
pub const LITERAL_BITS: u32 = 32 - 1 - RUNNING_LENGTH_BITS;

/// Largest run a single marker word can describe
pub const LARGEST_RUNNING_LENGTH_COUNT: u32 = (1 << RUNNING_LENGTH_BITS) - 1;

/// Largest number of literal words a single marker word can announce
pub const LARGEST_LITERAL_COUNT: u32 = (1 << LITERAL_BITS) - 1;

const RUNNING_LENGTH_MASK: u32 = LARGEST_RUNNING_LENGTH_COUNT << 1;
const LITERAL_SHIFT: u32 = 1 + RUNNING_LENGTH_BITS;

/// A raw marker word
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct RunningLengthWord(u32);

impl RunningLengthWord {
    /// Build a marker word from its fields
    ///
    /// # Panics
    ///
    /// Panics if `running_length` exceeds [`LARGEST_RUNNING_LENGTH_COUNT`] or
    /// `literal_words` exceeds [`LARGEST_LITERAL_COUNT`].
    ///
    /// # Examples
    ///
    /// ```
    /// use ewah::RunningLengthWord;
    ///
    /// let rlw = RunningLengthWord::new(true, 3, 2);
    /// assert!(rlw.running_bit());
    /// assert_eq!(rlw.running_length(), 3);
    /// assert_eq!(rlw.number_of_literal_words(), 2);
    /// assert_eq!(rlw.size(), 5);
    /// assert_eq!(RunningLengthWord::from_raw(rlw.raw()), rlw);
    /// ```
    #[inline]
    pub const fn new(running_bit: bool, running_length: u32, literal_words: u32) -> Self {
        Self(0)
            .with_running_bit(running_bit)
            .with_running_length(running_length)
            .with_number_of_literal_words(literal_words)
    }

    #[inline]
    pub const fn from_raw(word: u32) -> Self {
        Self(word)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn running_bit(self) -> bool {
        self.0 & 1 != 0
    }

    #[inline]
    pub const fn running_length(self) -> u32 {
        (self.0 & RUNNING_LENGTH_MASK) >> 1
    }

    #[inline]
    pub const fn number_of_literal_words(self) -> u32 {
        self.0 >> LITERAL_SHIFT
    }

    /// Number of logical words covered by this marker's block
    #[inline]
    pub const fn size(self) -> u32 {
        self.running_length() + self.number_of_literal_words()
    }

    #[inline]
    pub const fn with_running_bit(self, bit: bool) -> Self {
        Self((self.0 & !1) | bit as u32)
    }

    #[inline]
    pub const fn with_running_length(self, length: u32) -> Self {
        assert!(
            length <= LARGEST_RUNNING_LENGTH_COUNT,
            "running length exceeds the marker field width"
        );
        Self((self.0 & !RUNNING_LENGTH_MASK) | (length << 1))
    }

    #[inline]
    pub const fn with_number_of_literal_words(self, count: u32) -> Self {
        assert!(
            count <= LARGEST_LITERAL_COUNT,
            "literal word count exceeds the marker field width"
        );
        Self((self.0 & (RUNNING_LENGTH_MASK | 1)) | (count << LITERAL_SHIFT))
    }
}

/// # Examples
///
/// ```
/// use ewah::RunningLengthWord;
///
/// let rlw = RunningLengthWord::from(0x0002_0007);
/// assert!(rlw.running_bit());
/// assert_eq!(rlw.running_length(), 3);
/// assert_eq!(rlw.number_of_literal_words(), 1);
/// ```
impl From<u32> for RunningLengthWord {
    #[inline]
    fn from(word: u32) -> Self {
        Self::from_raw(word)
    }
}

impl fmt::Debug for RunningLengthWord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Rlw<{}x{}, {} literals>",
            u8::from(self.running_bit()),
            self.running_length(),
            self.number_of_literal_words()
        )
    }
}

/// Decoded copy of a marker word which can be shrunk as words are consumed
///
/// The fields are derived from the raw word only by [`new`](Self::new) and
/// [`reset`](Self::reset); afterwards they are plain bookkeeping and never
/// re-read from the buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BufferedRunningLengthWord {
    running_bit: bool,
    running_length: usize,
    number_of_literal_words: usize,
    literal_word_offset: usize,
}

impl BufferedRunningLengthWord {
    #[inline]
    pub fn new(word: u32) -> Self {
        let mut rlw = Self::default();
        rlw.reset(word);
        rlw
    }

    /// Reinterpret `word` in place, forgetting any previous consumption
    #[inline]
    pub fn reset(&mut self, word: u32) {
        let rlw = RunningLengthWord::from_raw(word);
        self.running_bit = rlw.running_bit();
        self.running_length = rlw.running_length() as usize;
        self.number_of_literal_words = rlw.number_of_literal_words() as usize;
        self.literal_word_offset = 0;
    }

    #[inline]
    pub const fn running_bit(&self) -> bool {
        self.running_bit
    }

    #[inline]
    pub const fn running_length(&self) -> usize {
        self.running_length
    }

    /// Overwrite the remaining run length
    ///
    /// Only shrink it: a cursor trusts these fields, so growing the run past the
    /// decoded value makes it emit words the stream does not hold.
    #[inline]
    pub fn set_running_length(&mut self, length: usize) {
        self.running_length = length;
    }

    #[inline]
    pub const fn number_of_literal_words(&self) -> usize {
        self.number_of_literal_words
    }

    /// Overwrite the remaining literal word count
    ///
    /// Only shrink it: growing the count past the decoded value makes a cursor read
    /// literal words beyond this block, or beyond the end of the buffer.
    #[inline]
    pub fn set_number_of_literal_words(&mut self, count: usize) {
        self.number_of_literal_words = count;
    }

    /// Offset of the first unread literal word, relative to the block's literal start
    #[inline]
    pub const fn literal_word_offset(&self) -> usize {
        self.literal_word_offset
    }

    /// Remaining logical words in this block
    #[inline]
    pub const fn size(&self) -> usize {
        self.running_length + self.number_of_literal_words
    }

    /// Consume `x` words from the front of this block: the run first, then literals
    ///
    /// # Panics
    ///
    /// Panics if `x` is larger than [`size`](Self::size).
    ///
    /// # Examples
    ///
    /// ```
    /// use ewah::{BufferedRunningLengthWord, RunningLengthWord};
    ///
    /// let mut rlw = BufferedRunningLengthWord::new(RunningLengthWord::new(false, 2, 3).raw());
    /// rlw.discard_first_words(3);
    /// assert_eq!(rlw.running_length(), 0);
    /// assert_eq!(rlw.number_of_literal_words(), 2);
    /// assert_eq!(rlw.literal_word_offset(), 1);
    /// ```
    pub fn discard_first_words(&mut self, mut x: usize) {
        assert!(
            x <= self.size(),
            "cannot discard {x} words from a block of {}",
            self.size()
        );
        if self.running_length >= x {
            self.running_length -= x;
            return;
        }
        x -= self.running_length;
        self.running_length = 0;
        self.literal_word_offset += x;
        self.number_of_literal_words -= x;
    }
}

/// # Examples
///
/// ```
/// use ewah::{BufferedRunningLengthWord, RunningLengthWord};
///
/// let rlw = BufferedRunningLengthWord::from(RunningLengthWord::new(false, 4, 2));
/// assert_eq!(rlw.size(), 6);
/// assert_eq!(rlw.literal_word_offset(), 0);
/// ```
impl From<RunningLengthWord> for BufferedRunningLengthWord {
    #[inline]
    fn from(rlw: RunningLengthWord) -> Self {
        Self::new(rlw.raw())
    }
}
