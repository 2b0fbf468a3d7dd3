use std::io::Write;
use std::mem::size_of;

use byteorder::{ByteOrder, WriteBytesExt};
use tracing::debug;

use super::Ewah32;
use crate::{Error, Result};

impl Ewah32 {
    /// Load a compressed word buffer stored with byte order `B`
    ///
    /// Only the words themselves are read; `size_in_bits` must be supplied by the caller.
    ///
    /// # Examples
    ///
    /// ```
    /// use byteorder::BigEndian;
    /// use ewah::{Error, Ewah32, RunningLengthWord};
    ///
    /// let marker = RunningLengthWord::new(true, 1, 1).raw();
    /// let mut bytes = marker.to_be_bytes().to_vec();
    /// bytes.extend_from_slice(&0x1234_5678u32.to_be_bytes());
    ///
    /// let bitmap = Ewah32::from_bytes::<BigEndian>(&bytes, 64).unwrap();
    /// assert_eq!(bitmap.to_words(), vec![u32::MAX, 0x1234_5678]);
    ///
    /// let err = Ewah32::from_bytes::<BigEndian>(&bytes[..7], 64).unwrap_err();
    /// assert!(matches!(err, Error::TruncatedBuffer { len: 7 }));
    /// ```
    pub fn from_bytes<B: ByteOrder>(bytes: &[u8], size_in_bits: usize) -> Result<Self> {
        if bytes.len() % size_of::<u32>() != 0 {
            return Err(Error::TruncatedBuffer { len: bytes.len() });
        }
        let mut words = vec![0; bytes.len() / size_of::<u32>()];
        B::read_u32_into(bytes, &mut words);
        debug!(bytes = bytes.len(), "loaded compressed word buffer");
        Self::from_words(words, size_in_bits)
    }

    /// Write the compressed words to `writer` with byte order `B`
    ///
    /// # Examples
    ///
    /// ```
    /// use byteorder::LittleEndian;
    /// use ewah::Ewah32;
    ///
    /// let bitmap = Ewah32::new();
    /// let mut out = Vec::new();
    /// bitmap.write_words::<LittleEndian, _>(&mut out).unwrap();
    /// assert_eq!(out.len(), bitmap.serialized_size_in_bytes());
    ///
    /// let loaded = Ewah32::from_bytes::<LittleEndian>(&out, bitmap.size_in_bits()).unwrap();
    /// assert_eq!(loaded, bitmap);
    /// ```
    pub fn write_words<B: ByteOrder, W: Write>(&self, mut writer: W) -> Result<()> {
        for &word in self.as_words() {
            writer.write_u32::<B>(word)?;
        }
        Ok(())
    }

    /// How many bytes [`write_words`](Self::write_words) produces
    #[inline]
    pub fn serialized_size_in_bytes(&self) -> usize {
        self.size_in_words() * size_of::<u32>()
    }
}
