#![no_main]

use frrid_frame::{BeaconFrameRepr, Frame, RemoteIdDecoder};

use libfuzzer_sys::{fuzz_target, Corpus};

fuzz_target!(|data: &[u8]| -> Corpus {
    if data.len() > 2346 {
        return Corpus::Reject;
    }

    let _ = RemoteIdDecoder::default().decode_frame(data);

    if let Ok(Frame::Beacon(beacon) | Frame::ProbeResponse(beacon)) = Frame::new(data) {
        let _ = BeaconFrameRepr::parse(&beacon);
    }

    Corpus::Keep
});
