#![no_main]

use crate::arbitrary_ops::*;
use libfuzzer_sys::arbitrary;
use libfuzzer_sys::arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

mod arbitrary_ops;

fuzz_target!(|input: FuzzInput| {
    let bitmap = compress(&input.blocks);
    let expected = decompress(&input.blocks);
    assert_eq!(bitmap.logical_words(), expected.len());
    assert_eq!(bitmap.to_words(), expected);

    let mut cursor = bitmap.cursor();
    let mut position = 0;
    for op in &input.ops {
        op.on_both(&mut cursor, &expected, &mut position);
    }

    let mut rest: Vec<u32> = Vec::new();
    cursor.discharge_all(&mut rest);
    assert_eq!(rest, &expected[position..]);
});

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    blocks: Vec<Block>,
    ops: Vec<CursorOp>,
}
