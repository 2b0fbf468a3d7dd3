use std::fmt;

use super::Ewah32;
use crate::rlw::RunningLengthWord;

impl fmt::Debug for Ewah32 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut markers = Vec::new();
        let mut iter = self.ewah_iter();
        while iter.has_next() {
            markers.push(RunningLengthWord::from_raw(iter.next_marker()));
        }
        if markers.len() < 32 {
            write!(f, "Ewah32<{} bits, {:?}>", self.size_in_bits(), markers)
        } else {
            write!(
                f,
                "Ewah32<{} bits in {} blocks, {} words>",
                self.size_in_bits(),
                markers.len(),
                self.size_in_words()
            )
        }
    }
}

impl Default for Ewah32 {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
