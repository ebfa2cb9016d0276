use crate::*;

/// A beacon captured from a French drone beacon module, with a supported
/// rates and a DS parameter set element before the Remote ID element.
const CAPTURE: &str = concat!(
    "80000000",
    "ffffffffffff",
    "025c3500aa01",
    "025c3500aa01",
    "3012",
    "0000000000000000",
    "6400",
    "0104",
    "000b", "494c4c4d41565f30313233",
    "0108", "8c129824b048606c",
    "030106",
    "dd4e", "6a5c35", "01",
    "010101",
    "021e", "494c4c4d4156303030303030303030303030303030303030303030313233",
    "0404004a8c9d",
    "0504000396d6",
    "06020078",
    "07020032",
    "0804004a8a08",
    "0904000395f8",
    "0a0109",
    "0b02002d",
);

const TRANSMITTER: MacAddress = MacAddress([0x02, 0x5c, 0x35, 0x00, 0xaa, 0x01]);

#[test]
fn captured_beacon() {
    let frame = hex::decode(CAPTURE).unwrap();
    let beacon = BeaconFrame::new(&frame[..]).unwrap();

    let header = beacon.header();
    assert_eq!(header.subtype(), ManagementSubtype::Beacon);
    assert!(header.receiver().is_broadcast());
    assert_eq!(header.transmitter(), TRANSMITTER);
    assert_eq!(header.bssid(), TRANSMITTER);
    assert_eq!(header.sequence_number(), 0x123);
    assert_eq!(header.fragment_number(), 0);
    assert_eq!(header.ht_control(), None);

    assert_eq!(beacon.timestamp(), 0);
    assert_eq!(beacon.beacon_interval(), 100);
    assert_eq!(
        beacon.capability_information(),
        CapabilityInformation::Ess | CapabilityInformation::ShortSlotTime
    );

    let ids: std::vec::Vec<ElementId> = beacon
        .information_elements()
        .map(|ie| ie.element_id())
        .collect();
    assert_eq!(
        ids,
        [
            ElementId::Ssid,
            ElementId::SupportedRates,
            ElementId::DsParameterSet,
            ElementId::VendorSpecific,
        ]
    );
}

#[test]
fn decode_captured_beacon() {
    let frame = hex::decode(CAPTURE).unwrap();
    let detection = RemoteIdDecoder::default()
        .decode_frame(&frame)
        .unwrap()
        .unwrap();

    assert_eq!(detection.transmitter, TRANSMITTER);
    assert_eq!(detection.ssid.as_ref().and_then(Ssid::as_str), Some("ILLMAV_0123"));
    assert_eq!(detection.sub_type, 1);

    let result = &detection.remote_id;
    assert_eq!(result.presence(), Presence::all() - Presence::IdAnsi);
    assert!(result.anomalies().is_empty());
    assert_eq!(result.protocol_version(), Some(1));

    let id = result.id_fr().unwrap();
    assert_eq!(id.as_str(), Some("ILLMAV000000000000000000000123"));
    assert_eq!(id.manufacturer(), Some(&b"ILL"[..]));
    assert_eq!(id.model(), Some(&b"MAV"[..]));
    assert_eq!(id.serial(), Some(&b"000000000000000000000123"[..]));

    assert_eq!(result.latitude(), Some(Coordinate(4_885_661)));
    assert_eq!(result.longitude(), Some(Coordinate(235_222)));
    assert_eq!(result.hmsl(), Some(120));
    assert_eq!(result.hagl(), Some(50));
    assert_eq!(result.takeoff_latitude(), Some(Coordinate(4_885_000)));
    assert_eq!(result.takeoff_longitude(), Some(Coordinate(235_000)));
    assert_eq!(result.horizontal_speed(), Some(9));
    assert_eq!(result.route(), Some(45));
}

#[test]
fn captured_beacon_with_fcs() {
    let mut frame = hex::decode(CAPTURE).unwrap();
    frame.extend_from_slice(&[0; 4]);

    let mut with_fcs = FrameWithFcs::new_unchecked(&mut frame[..]);
    with_fcs.fill_fcs();

    let with_fcs = FrameWithFcs::new(&frame[..]).unwrap();
    assert!(with_fcs.check_fcs());

    let Frame::Beacon(beacon) = with_fcs.frame().unwrap() else {
        panic!("expected a beacon");
    };
    assert_eq!(beacon.beacon_interval(), 100);

    let last = frame.len() - 1;
    frame[last] ^= 0xff;
    assert!(FrameWithFcs::new(&frame[..]).is_err());
}

#[test]
fn parse_captured_beacon() {
    let frame = hex::decode(CAPTURE).unwrap();
    let beacon = BeaconFrame::new(&frame[..]).unwrap();
    let repr = BeaconFrameRepr::parse(&beacon).unwrap();

    assert!(!repr.probe_response);
    assert_eq!(repr.sequence_number, 0x123);
    // Supported rates and DS parameter set are not represented.
    assert_eq!(repr.information_elements.len(), 2);

    let InformationElementRepr::VendorSpecific(vendor) = &repr.information_elements[1] else {
        panic!("expected a vendor specific element");
    };
    assert_eq!(vendor.oui, Oui::FRENCH_DEFENSE);
    assert_eq!(vendor.remote_id.fields.len(), 10);
    assert_eq!(vendor.remote_id.to_result(), decode(&frame[68..]));
}

#[test]
fn probe_response() {
    let mut frame = hex::decode(CAPTURE).unwrap();
    frame[0] = 0x50;

    let beacon = BeaconFrame::new(&frame[..]).unwrap();
    assert!(beacon.is_probe_response());

    let detection = RemoteIdDecoder::default().decode_frame(&frame).unwrap();
    assert!(detection.is_some());
}

#[test]
fn not_a_beacon() {
    let mut frame = hex::decode(CAPTURE).unwrap();

    // Probe request.
    frame[0] = 0x40;
    assert!(RemoteIdDecoder::default().decode_frame(&frame).is_err());

    // Data frame.
    frame[0] = 0x08;
    assert!(RemoteIdDecoder::default().decode_frame(&frame).is_err());

    // Too short for the fixed parameters.
    assert!(RemoteIdDecoder::default().decode_frame(&frame[..30]).is_err());
}

#[test]
fn no_remote_id_element() {
    let frame = hex::decode(CAPTURE).unwrap();
    // Stop right before the vendor specific element.
    let end = 24 + 12 + 13 + 10 + 3;
    assert_eq!(
        RemoteIdDecoder::default().decode_frame(&frame[..end]),
        Ok(None)
    );
}

#[test]
fn ht_control() {
    let frame = hex::decode(concat!(
        "80800000",
        "ffffffffffff",
        "025c3500aa01",
        "025c3500aa01",
        "0000",
        "01020304",
        "0000000000000000",
        "6400",
        "0100",
        "dd07", "6a5c35", "01", "0a0114",
    ))
    .unwrap();

    let beacon = BeaconFrame::new(&frame[..]).unwrap();
    assert_eq!(beacon.header().header_len(), 28);
    assert_eq!(beacon.header().ht_control(), Some(0x0403_0201));
    assert_eq!(beacon.beacon_interval(), 100);

    let detection = RemoteIdDecoder::default()
        .decode_frame(&frame)
        .unwrap()
        .unwrap();
    assert_eq!(detection.ssid, None);
    assert_eq!(detection.remote_id.horizontal_speed(), Some(20));
}

#[test]
fn named_builders() {
    let beacon: BeaconFrameBuilder<Beacon> = BeaconFrameBuilder::new_beacon(TRANSMITTER);
    let response: BeaconFrameBuilder<ProbeResponse> =
        BeaconFrameBuilder::new_probe_response(TRANSMITTER, MacAddress::BROADCAST);

    let beacon = beacon.finalize().unwrap();
    let response = response.finalize().unwrap();
    assert!(!beacon.probe_response);
    assert!(response.probe_response);
}
