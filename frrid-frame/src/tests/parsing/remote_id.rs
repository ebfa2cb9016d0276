use crate::*;

const ID: &[u8; 30] = b"ABC123000000000000000000000042";

fn body(records: &[&[u8]]) -> std::vec::Vec<u8> {
    records.concat()
}

#[test]
fn identifier_and_latitude() {
    let mut payload = vec![0x6a, 0x5c, 0x35, 0x00, 0x02, 0x1e];
    payload.extend_from_slice(ID);
    payload.extend_from_slice(&[0x04, 0x04, 0x00, 0x2b, 0x87, 0xb8]);

    let vendor = VendorSpecific::new(&payload[..]).unwrap();
    assert_eq!(vendor.oui(), Oui::FRENCH_DEFENSE);
    assert_eq!(vendor.sub_type(), 0);

    let result = decode(vendor.body());
    assert_eq!(result.id().map(Identifier::raw), Some(&ID[..]));
    assert_eq!(result.id_fr().and_then(Identifier::as_str), Some("ABC123000000000000000000000042"));
    assert_eq!(result.latitude().map(|l| l.raw()), Some(2_852_792));
    assert_eq!(result.latitude().map(|l| l.degrees()), Some(28.52792));
    assert_eq!(result.presence(), Presence::IdFr | Presence::Latitude);
}

#[test]
fn record_longer_than_payload() {
    let payload = body(&[&[0x0a, 0x01, 0x0c], &[0x06, 0x02, 0x00, 0x64], &[0x05, 0x04, 0x00, 0x03]]);

    let result = decode(&payload);
    assert_eq!(result.horizontal_speed(), Some(12));
    assert_eq!(result.hmsl(), Some(100));
    assert_eq!(result.longitude(), None);
    assert_eq!(result.presence(), Presence::HorizontalSpeed | Presence::Hmsl);
    assert_eq!(result.anomalies(), Anomalies::Truncated);
}

#[test]
fn lone_type_octet() {
    let result = decode(&[0x0a, 0x01, 0x0c, 0x0b]);
    assert_eq!(result.horizontal_speed(), Some(12));
    assert_eq!(result.anomalies(), Anomalies::Truncated);
}

#[test]
fn negative_heights() {
    let result = decode(&[0x06, 0x02, 0xff, 0x38, 0x07, 0x02, 0xff, 0xfe]);
    assert_eq!(result.hmsl(), Some(-200));
    assert_eq!(result.hagl(), Some(-2));
}

#[test]
fn southern_and_western_coordinates() {
    let result = decode(&hex::decode("0404ffd482480504ffffcfc7").unwrap());
    assert_eq!(result.latitude(), Some(Coordinate(-2_850_232)));
    assert_eq!(result.longitude().map(|l| l.degrees()), Some(-0.12345));
}

#[test]
fn unknown_record_between_known_ones() {
    let known = body(&[&[0x0a, 0x01, 0x0c], &[0x0b, 0x02, 0x01, 0x0e]]);
    let with_unknown = body(&[
        &[0x0a, 0x01, 0x0c],
        &[0x2a, 0x05, 0xde, 0xad, 0xbe, 0xef, 0x00],
        &[0x0b, 0x02, 0x01, 0x0e],
    ]);

    let result = decode(&with_unknown);
    assert_eq!(result, decode(&known));
    assert_eq!(result.horizontal_speed(), Some(12));
    assert_eq!(result.route(), Some(270));
    assert!(result.anomalies().is_empty());
}

#[test]
fn zero_length_unknown_record() {
    let result = decode(&[0xfe, 0x00, 0x0a, 0x01, 0x03]);
    assert_eq!(result.horizontal_speed(), Some(3));
    assert!(result.anomalies().is_empty());
}

#[test]
fn presence_matches_records() {
    let records: [&[u8]; 10] = [
        &[0x01, 0x01, 0x01],
        &[0x04, 0x04, 0x00, 0x00, 0x00, 0x00],
        &[0x05, 0x04, 0x00, 0x00, 0x00, 0x00],
        &[0x06, 0x02, 0x00, 0x00],
        &[0x07, 0x02, 0x00, 0x00],
        &[0x08, 0x04, 0x00, 0x00, 0x00, 0x00],
        &[0x09, 0x04, 0x00, 0x00, 0x00, 0x00],
        &[0x0a, 0x01, 0x00],
        &[0x0b, 0x02, 0x00, 0x00],
        &[0x03, 0x03, b'a', b'b', b'c'],
    ];

    for record in records {
        let result = decode(record);
        let expected = Presence::from(FieldType::from(record[0]));
        assert_eq!(result.presence(), expected);
    }

    let result = decode(&body(&records));
    assert_eq!(result.presence(), Presence::all() - Presence::IdFr);
    assert_eq!(result.id().and_then(Identifier::as_str), Some("abc"));
    assert_eq!(result.id_fr(), None);
}

#[test]
fn french_identifier_wins() {
    let mut payload = vec![0x03, 0x03, b'a', b'b', b'c', 0x02, 0x1e];
    payload.extend_from_slice(ID);
    let result = decode(&payload);
    assert_eq!(result.id().map(Identifier::raw), Some(&ID[..]));

    payload.extend_from_slice(&[0x03, 0x03, b'x', b'y', b'z']);
    let result = decode(&payload);
    assert_eq!(result.id().map(Identifier::raw), Some(&ID[..]));
    assert_eq!(result.presence(), Presence::IdFr | Presence::IdAnsi);
}

#[test]
fn wrong_sizes() {
    let payload = body(&[
        &[0x02, 0x03, b'a', b'b', b'c'],
        &[0x06, 0x01, 0x00],
        &[0x0a, 0x02, 0x00, 0x01],
        &[0x03, 0x1f],
        &[0; 31],
    ]);

    let result = decode(&payload);
    assert!(result.is_empty());
    assert_eq!(result.anomalies(), Anomalies::SizeMismatch);
}

#[test]
fn last_value_wins() {
    let result = decode(&[0x0a, 0x01, 0x01, 0x0a, 0x01, 0x02]);
    assert_eq!(result.horizontal_speed(), Some(2));
}
