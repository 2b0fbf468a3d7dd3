#![no_main]

use byteorder::{BigEndian, ByteOrder, LittleEndian};
use ewah::{Ewah32, EwahIterator, NullStorage, RunningLengthWord};
use libfuzzer_sys::fuzz_target;

/// Decoded length claimed by the markers, without checking literal counts
fn claimed_words<B: ByteOrder>(bytes: &[u8]) -> usize {
    let mut words = vec![0; bytes.len() / 4];
    B::read_u32_into(bytes, &mut words);
    let mut iter = EwahIterator::new(&words);
    let mut total = 0;
    while iter.has_next() {
        total += RunningLengthWord::from_raw(iter.next_marker()).size() as usize;
    }
    total
}

fn check_bitmap<B: ByteOrder>(input: &[u8]) {
    let words = input.len() / 4;
    let bytes = &input[..words * 4];
    let claimed = claimed_words::<B>(bytes);
    if claimed > 0 {
        assert!(Ewah32::from_bytes::<B>(bytes, (claimed - 1) * 32).is_err());
    }
    let Ok(bitmap) = Ewah32::from_bytes::<B>(bytes, claimed * 32) else {
        return;
    };
    bitmap.validate().unwrap();

    let whole = bitmap.to_words();
    assert_eq!(
        whole.len(),
        bitmap.logical_words(),
        "Length mismatch in {}",
        std::any::type_name::<B>()
    );

    let mut cursor = bitmap.cursor();
    let mut chunked: Vec<u32> = Vec::new();
    while cursor.discharge(&mut chunked, 7) > 0 {}
    assert_eq!(chunked, whole);

    let mut sink = NullStorage::new();
    bitmap.cursor().discharge_as_empty(&mut sink);
    assert_eq!(sink.words_seen(), whole.len());

    let mut out = Vec::new();
    bitmap.write_words::<B, _>(&mut out).unwrap();
    assert_eq!(out, bytes);
}

fuzz_target!(|input: &[u8]| {
    check_bitmap::<BigEndian>(input);
    check_bitmap::<LittleEndian>(input);
});
