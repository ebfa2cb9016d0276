use crate::*;

#[test]
fn scan_element_list() {
    let data = hex::decode(concat!(
        "0000",                 // hidden SSID
        "010482848b96",         // supported rates
        "dd0700a0c60102ffff",   // vendor specific of another organization
        "dd086a5c35000a01",     // announced length past the body
    ))
    .unwrap();

    let elements: std::vec::Vec<_> = InformationElementsIterator::new(&data).collect();
    assert_eq!(elements.len(), 3);

    let ssid = Ssid::new(elements[0].content()).unwrap();
    assert!(ssid.is_hidden());

    assert_eq!(elements[1].element_id(), ElementId::SupportedRates);
    assert_eq!(elements[1].content(), [0x82, 0x84, 0x8b, 0x96]);

    assert!(match_vendor(&elements[2], Oui::FRENCH_DEFENSE).is_none());
    assert_eq!(
        match_vendor(&elements[2], Oui([0x00, 0xa0, 0xc6])).map(|v| v.sub_type()),
        Some(0x01)
    );

    assert!(RemoteIdDecoder::default().decode_elements(&data).is_none());
}

#[test]
fn other_organization_is_never_decoded() {
    let data = hex::decode("dd0b112233000a0114060200ff").unwrap();
    let ie = InformationElement::new(&data[..]).unwrap();

    assert!(match_vendor(&ie, Oui::FRENCH_DEFENSE).is_none());
    assert!(RemoteIdDecoder::default().decode_elements(&data).is_none());
}

#[test]
fn vendor_element_without_records() {
    let data = hex::decode("dd046a5c3501").unwrap();

    let (vendor, result) = RemoteIdDecoder::default()
        .decode_elements(&data)
        .unwrap();
    assert_eq!(vendor.sub_type(), 1);
    assert!(vendor.body().is_empty());
    assert!(result.is_empty());
    assert!(result.anomalies().is_empty());
}

#[test]
fn vendor_element_too_short() {
    let data = hex::decode("dd036a5c35dd056a5c35010a").unwrap();

    // The first element cannot hold a sub-type and is passed over.
    let (vendor, result) = RemoteIdDecoder::default()
        .decode_elements(&data)
        .unwrap();
    assert_eq!(vendor.body(), [0x0a]);
    assert_eq!(result.anomalies(), Anomalies::Truncated);
}

#[test]
fn first_ssid_wins() {
    let frame = BeaconFrameBuilder::new_beacon(MacAddress([0x02, 0, 0, 0, 0, 1]))
        .set_ssid(Ssid::new(b"first").unwrap())
        .add_information_element(InformationElementRepr::Ssid(Ssid::new(b"second").unwrap()))
        .add_remote_id(Oui::FRENCH_DEFENSE, 1, RemoteIdRepr::default())
        .finalize()
        .unwrap();

    let mut buffer = vec![0; frame.buffer_len()];
    frame.emit(&mut BeaconFrame::new_unchecked(&mut buffer[..]));

    let detection = RemoteIdDecoder::default()
        .decode_frame(&buffer)
        .unwrap()
        .unwrap();
    assert_eq!(detection.ssid, Some(Ssid::new(b"first").unwrap()));
}
