#![no_main]

use libfuzzer_sys::fuzz_target;
use na_doc::{BigEndian, LittleEndian, ReadConfig, decode, decode_with, encode};

fuzz_target!(|data: &[u8]| {
    let config = ReadConfig::new().with_trailing_data(true).with_max_depth(64);
    if let Ok(doc) = decode_with(data, &config) {
        let be = encode::<BigEndian>(&doc).unwrap();
        let le = encode::<LittleEndian>(&doc).unwrap();
        assert_eq!(encode::<BigEndian>(&decode(&be).unwrap()).unwrap(), be);
        assert_eq!(encode::<LittleEndian>(&decode(&le).unwrap()).unwrap(), le);
        let _ = doc.deep_clone();
    }
});
