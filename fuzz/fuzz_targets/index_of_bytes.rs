#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (Vec<u8>, Vec<u8>, u16, u16)| {
    let (haystack, needle, start, window) = input;
    let (start, window) = (usize::from(start), usize::from(window));
    if let Some(at) = binsniff::index_of_bytes(&haystack, &needle, start, window) {
        assert!(at >= start);
        assert_eq!(&haystack[at..at + needle.len()], needle.as_slice());
    }
});
