use ewah::{Ewah32, IteratingRlw, NullStorage, RunningLengthWord};
use libfuzzer_sys::arbitrary::{self, Arbitrary, Unstructured};

/// Largest run generated, kept small so streams stay cheap to decompress
pub const MAX_RUN: u32 = 0x1000;

#[derive(Debug, Clone)]
pub struct Block {
    pub bit: bool,
    pub run: u32,
    pub literals: Vec<u32>,
}

impl<'a> Arbitrary<'a> for Block {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let bit = u.arbitrary()?;
        let run = u.int_in_range(0..=MAX_RUN)?;
        let count: u8 = u.int_in_range(0..=16)?;
        let literals = (0..count)
            .map(|_| u.arbitrary())
            .collect::<arbitrary::Result<_>>()?;
        Ok(Self { bit, run, literals })
    }
}

pub fn compress(blocks: &[Block]) -> Ewah32 {
    let mut words = Vec::new();
    let mut total = 0;
    for block in blocks {
        words.push(RunningLengthWord::new(block.bit, block.run, block.literals.len() as u32).raw());
        words.extend_from_slice(&block.literals);
        total += block.run as usize + block.literals.len();
    }
    if words.is_empty() {
        words.push(0);
    }
    Ewah32::from_words(words, total * 32).unwrap()
}

pub fn decompress(blocks: &[Block]) -> Vec<u32> {
    let mut words = Vec::new();
    for block in blocks {
        let fill = if block.bit { u32::MAX } else { 0 };
        words.extend(std::iter::repeat(fill).take(block.run as usize));
        words.extend_from_slice(&block.literals);
    }
    words
}

#[derive(Arbitrary, Debug)]
pub enum CursorOp {
    Discard(u16),
    Discharge(u16),
    DischargeNegated(u16),
    DischargeNull(u16),
    DischargeAsEmpty,
    DischargeAll,
    LiteralAt(u8),
    Size,
}

impl CursorOp {
    /// Apply to `cursor`, checking against the uncompressed `expected` words from `position`
    pub fn on_both(&self, cursor: &mut IteratingRlw<'_>, expected: &[u32], position: &mut usize) {
        let remaining = &expected[*position..];
        match *self {
            CursorOp::Discard(n) => {
                cursor.discard_first_words(n.into());
                *position += remaining.len().min(n.into());
            }
            CursorOp::Discharge(n) => {
                let mut out: Vec<u32> = Vec::new();
                let emitted = cursor.discharge(&mut out, n.into());
                assert_eq!(emitted, remaining.len().min(n.into()));
                assert_eq!(out, &remaining[..emitted]);
                *position += emitted;
            }
            CursorOp::DischargeNegated(n) => {
                let mut out: Vec<u32> = Vec::new();
                let emitted = cursor.discharge_negated(&mut out, n.into());
                assert_eq!(emitted, remaining.len().min(n.into()));
                assert!(out.iter().zip(remaining).all(|(&a, &b)| a == !b));
                *position += emitted;
            }
            CursorOp::DischargeNull(n) => {
                let mut sink = NullStorage::new();
                let emitted = cursor.discharge(&mut sink, n.into());
                assert_eq!(emitted, sink.words_seen());
                *position += emitted;
            }
            CursorOp::DischargeAsEmpty => {
                let mut out: Vec<u32> = Vec::new();
                cursor.discharge_as_empty(&mut out);
                assert_eq!(out.len(), remaining.len());
                assert!(out.iter().all(|&w| w == 0));
                *position = expected.len();
            }
            CursorOp::DischargeAll => {
                let mut out: Vec<u32> = Vec::new();
                cursor.discharge_all(&mut out);
                assert_eq!(out, remaining);
                *position = expected.len();
            }
            CursorOp::LiteralAt(i) => {
                let i = usize::from(i);
                if i < cursor.number_of_literal_words() {
                    let offset = cursor.running_length() + i;
                    assert_eq!(cursor.literal_word_at(i), remaining[offset]);
                }
            }
            CursorOp::Size => {
                assert!(cursor.size() <= remaining.len());
                assert_eq!(cursor.size() == 0, remaining.is_empty());
            }
        }
    }
}
