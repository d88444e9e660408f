#![no_main]
use libfuzzer_sys::fuzz_target;
use std::io::Cursor;

fuzz_target!(|data: &[u8]| {
    // First byte picks the starting position so non-zero cursors get covered.
    let Some((&pos, body)) = data.split_first() else {
        return;
    };
    for bypass in [false, true] {
        let mut cursor = Cursor::new(body);
        cursor.set_position(u64::from(pos));
        let _ = binsniff::sniff(&mut cursor, "bin", bypass);
        assert_eq!(cursor.position(), u64::from(pos));
    }
});
