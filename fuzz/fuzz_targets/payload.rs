#![no_main]

use frrid_frame::{decode, RemoteIdRepr};

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let result = decode(data);
    assert_eq!(result, decode(data));

    let repr = RemoteIdRepr::parse(data);
    if repr.fields.is_full() {
        return;
    }

    let expected = repr.to_result();
    assert_eq!(result.presence(), expected.presence());
    if result.anomalies().is_empty() {
        assert_eq!(result, expected);
    }
});
