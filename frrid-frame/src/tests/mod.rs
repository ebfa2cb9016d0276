use super::*;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

mod parsing;

const TRANSMITTER: MacAddress = MacAddress([0x60, 0x55, 0xf9, 0x01, 0x02, 0x03]);

fn remote_id() -> RemoteIdRepr {
    let mut remote_id = RemoteIdRepr::default();
    remote_id.push(RemoteIdField::ProtocolVersion(1)).unwrap();
    remote_id
        .push(RemoteIdField::IdFr(
            Identifier::new(b"ILLMAV000000000000000000000123").unwrap(),
        ))
        .unwrap();
    remote_id
        .push(RemoteIdField::Latitude(Coordinate(4_885_661)))
        .unwrap();
    remote_id
        .push(RemoteIdField::Longitude(Coordinate(235_222)))
        .unwrap();
    remote_id.push(RemoteIdField::Hmsl(120)).unwrap();
    remote_id
        .push(RemoteIdField::TakeoffLatitude(Coordinate(4_885_000)))
        .unwrap();
    remote_id
        .push(RemoteIdField::TakeoffLongitude(Coordinate(235_000)))
        .unwrap();
    remote_id.push(RemoteIdField::HorizontalSpeed(9)).unwrap();
    remote_id.push(RemoteIdField::Route(45)).unwrap();
    remote_id
}

/// Show decoder logs when running with `--features log`.
fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn emit(repr: &BeaconFrameRepr) -> std::vec::Vec<u8> {
    let mut buffer = vec![0; repr.buffer_len()];
    repr.emit(&mut BeaconFrame::new_unchecked(&mut buffer[..]));
    buffer
}

#[test]
fn emit_then_decode_frame() {
    let repr = BeaconFrameBuilder::new_beacon(TRANSMITTER)
        .set_ssid(Ssid::new(b"ILLMAV_0123").unwrap())
        .set_sequence_number(42)
        .add_remote_id(Oui::FRENCH_DEFENSE, 1, remote_id())
        .finalize()
        .unwrap();
    let buffer = emit(&repr);

    let detection = RemoteIdDecoder::default()
        .decode_frame(&buffer)
        .unwrap()
        .unwrap();

    assert_eq!(detection.transmitter, TRANSMITTER);
    assert_eq!(detection.bssid, TRANSMITTER);
    assert_eq!(detection.ssid, Some(Ssid::new(b"ILLMAV_0123").unwrap()));
    assert_eq!(detection.sub_type, 1);
    assert_eq!(detection.remote_id, remote_id().to_result());
    assert!(detection.remote_id.anomalies().is_empty());

    let result = &detection.remote_id;
    assert_eq!(result.protocol_version(), Some(1));
    assert_eq!(result.latitude(), Some(Coordinate(4_885_661)));
    assert_eq!(result.longitude(), Some(Coordinate(235_222)));
    assert_eq!(result.hmsl(), Some(120));
    assert_eq!(result.hagl(), None);
    assert_eq!(result.route(), Some(45));
}

#[test]
fn display_detection() {
    let repr = BeaconFrameBuilder::new_beacon(TRANSMITTER)
        .set_ssid(Ssid::new(b"ILLMAV_0123").unwrap())
        .add_remote_id(Oui::FRENCH_DEFENSE, 1, remote_id())
        .finalize()
        .unwrap();
    let buffer = emit(&repr);

    let detection = RemoteIdDecoder::default()
        .decode_frame(&buffer)
        .unwrap()
        .unwrap();

    assert_eq!(
        format!("{detection}"),
        "MAC: 60:55:f9:01:02:03\n\
         SSID: ILLMAV_0123\n\
         PROTOCOL: 1\n\
         FR_ID: ILLMAV000000000000000000000123\n\
         LAT: 48.856610\n\
         LON: 2.352220\n\
         HMSL: 120\n\
         LAT TO: 48.850000\n\
         LON TO: 2.350000\n\
         H SPEED: 9\n\
         ROUTE: 45\n"
    );
}

#[test]
fn other_authority() {
    let repr = BeaconFrameBuilder::new_beacon(TRANSMITTER)
        .add_remote_id(Oui([0x11, 0x22, 0x33]), 1, remote_id())
        .finalize()
        .unwrap();
    let buffer = emit(&repr);

    assert_eq!(RemoteIdDecoder::default().decode_frame(&buffer), Ok(None));

    let decoder = RemoteIdDecoder::new(DecoderConfig {
        authority_oui: Oui([0x11, 0x22, 0x33]),
    });
    let detection = decoder.decode_frame(&buffer).unwrap().unwrap();
    assert_eq!(detection.ssid, None);
    assert_eq!(detection.remote_id, remote_id().to_result());
}

#[test]
fn only_first_element_is_decoded() {
    let mut second = RemoteIdRepr::default();
    second.push(RemoteIdField::HorizontalSpeed(99)).unwrap();

    let repr = BeaconFrameBuilder::new_beacon(TRANSMITTER)
        .add_remote_id(Oui::FRENCH_DEFENSE, 1, remote_id())
        .add_remote_id(Oui::FRENCH_DEFENSE, 1, second)
        .finalize()
        .unwrap();
    let buffer = emit(&repr);

    let detection = RemoteIdDecoder::default()
        .decode_frame(&buffer)
        .unwrap()
        .unwrap();
    assert_eq!(detection.remote_id.horizontal_speed(), Some(9));
}

#[test]
fn decode_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(0x6a5c35);

    for _ in 0..256 {
        let mut body = vec![0u8; rng.gen_range(0..96)];
        rng.fill(&mut body[..]);

        assert_eq!(decode(&body), decode(&body));
    }
}

#[test]
fn random_bodies_presence() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(0x0dd);

    for _ in 0..4096 {
        let mut body = vec![0u8; rng.gen_range(0..64)];
        rng.fill(&mut body[..]);

        // Bias toward known types so that size checks are exercised.
        for i in (0..body.len()).step_by(5) {
            if rng.gen_bool(0.5) {
                body[i] = rng.gen_range(1..=11);
            }
        }

        let result = decode(&body);
        let repr = RemoteIdRepr::parse(&body);

        let mut records = RemoteIdRecordsIterator::new(&body);
        for _ in &mut records {}
        assert_eq!(
            result.anomalies().contains(Anomalies::Truncated),
            records.truncated()
        );

        if repr.fields.is_full() {
            continue;
        }

        let expected = repr.to_result();
        assert_eq!(result.presence(), expected.presence());
        if result.anomalies().is_empty() {
            assert_eq!(result, expected);
        }
    }
}

#[test]
fn random_frames_stay_in_bounds() {
    let mut rng = StdRng::seed_from_u64(0xbeac0);
    let decoder = RemoteIdDecoder::default();

    let repr = BeaconFrameBuilder::new_beacon(TRANSMITTER)
        .set_ssid(Ssid::new(b"UAV").unwrap())
        .add_remote_id(Oui::FRENCH_DEFENSE, 1, remote_id())
        .finalize()
        .unwrap();
    let valid = emit(&repr);

    for _ in 0..4096 {
        let mut frame = valid.clone();
        frame.truncate(rng.gen_range(0..=valid.len()));

        for _ in 0..rng.gen_range(0..4) {
            if frame.is_empty() {
                break;
            }
            let i = rng.gen_range(0..frame.len());
            frame[i] = rng.gen();
        }

        let _ = decoder.decode_frame(&frame);
        let _ = Frame::new(&frame[..]);
        let _ = FrameWithFcs::new(&frame[..]);
        if frame.len() > 36 {
            let _ = decoder.decode_elements(&frame[36..]);
        }
    }
}

#[test]
fn truncated_frame() {
    init_logger();

    let repr = BeaconFrameBuilder::new_beacon(TRANSMITTER)
        .add_remote_id(Oui::FRENCH_DEFENSE, 1, remote_id())
        .finalize()
        .unwrap();
    let buffer = emit(&repr);

    // Cut the last 2 octets of the route record: the vendor element no
    // longer fits in the frame and is ignored.
    let cut = &buffer[..buffer.len() - 2];
    assert_eq!(RemoteIdDecoder::default().decode_frame(cut), Ok(None));

    // Shorten the element length instead: the element is kept and its body
    // ends in the middle of the route record.
    let mut shortened = buffer.clone();
    shortened[37] -= 2;
    let detection = RemoteIdDecoder::default()
        .decode_frame(&shortened[..buffer.len() - 2])
        .unwrap()
        .unwrap();
    assert_eq!(detection.remote_id.route(), None);
    assert_eq!(detection.remote_id.horizontal_speed(), Some(9));
    assert_eq!(detection.remote_id.anomalies(), Anomalies::Truncated);
}
