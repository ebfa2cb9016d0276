#![no_main]

use frrid_frame::{BeaconFrame, BeaconFrameRepr, InformationElementRepr, Oui, RemoteIdDecoder};

use libfuzzer_sys::fuzz_target;

fuzz_target!(|repr: BeaconFrameRepr| {
    if repr.validate().is_err() {
        return;
    }

    let mut buffer = vec![0; repr.buffer_len()];
    repr.emit(&mut BeaconFrame::new_unchecked(&mut buffer[..]));

    let frame = BeaconFrame::new(&buffer[..]).unwrap();
    assert_eq!(BeaconFrameRepr::parse(&frame).unwrap(), repr);

    let expected = repr.information_elements.iter().find_map(|ie| match ie {
        InformationElementRepr::VendorSpecific(vendor) if vendor.oui == Oui::FRENCH_DEFENSE => {
            Some(vendor.remote_id.to_result())
        }
        _ => None,
    });

    let detection = RemoteIdDecoder::default().decode_frame(&buffer).unwrap();
    assert_eq!(detection.map(|d| d.remote_id), expected);
});
