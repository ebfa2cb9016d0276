use super::{Anomalies, FieldSpec, RemoteIdRecordsIterator, RemoteIdResult};
use crate::{
    match_vendor, BeaconFrame, ElementId, InformationElementsIterator, MacAddress, Oui, Result,
    Ssid, VendorSpecific,
};

/// Decode the Remote ID records of a vendor specific element body.
///
/// Records are read one after the other until the body is exhausted:
/// - a record of unknown type is skipped;
/// - a record whose length does not suit its type is skipped and flagged
///   [`Anomalies::SizeMismatch`];
/// - a protocol version other than 1 is dropped and flagged
///   [`Anomalies::UnsupportedVersion`];
/// - a record running past the end of the body stops decoding and is flagged
///   [`Anomalies::Truncated`]. Fields decoded before it are kept.
///
/// Decoding never fails and never reads outside `body`.
pub fn decode(body: &[u8]) -> RemoteIdResult {
    let mut result = RemoteIdResult::default();
    let mut records = RemoteIdRecordsIterator::new(body);

    for record in &mut records {
        let code = record.code();

        let Some(spec) = FieldSpec::lookup(code) else {
            trace!("skipping unknown Remote ID field {}", code);
            continue;
        };

        let len = record.length();
        if !spec.size.accepts(len) {
            debug!("skipping Remote ID field {} of {} octets", code, len);
            result.flag(Anomalies::SizeMismatch);
            continue;
        }

        match (spec.decode)(record.value()) {
            Ok(field) => {
                if !result.insert(field) {
                    debug!("ignoring ANSI identifier sent after a French identifier");
                }
            }
            Err(anomalies) => {
                warn!("dropping Remote ID field {}: unsupported value", code);
                result.flag(anomalies);
            }
        }
    }

    if records.truncated() {
        debug!("Remote ID payload truncated at offset {}", records.offset());
        result.flag(Anomalies::Truncated);
    }

    result
}

/// Configuration of a [`RemoteIdDecoder`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DecoderConfig {
    /// OUI of the vendor specific element carrying Remote ID records.
    pub authority_oui: Oui,
}

/// A drone detected in a beacon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    /// Address of the transmitter.
    pub transmitter: MacAddress,
    /// BSS identifier.
    pub bssid: MacAddress,
    /// The SSID, when the frame carries one that fits in 32 octets.
    pub ssid: Option<Ssid>,
    /// Sub-type of the vendor specific element.
    pub sub_type: u8,
    /// The decoded Remote ID fields.
    pub remote_id: RemoteIdResult,
}

impl core::fmt::Display for Detection {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "MAC: {}", self.transmitter)?;
        if let Some(ssid) = &self.ssid {
            writeln!(f, "SSID: {ssid}")?;
        }
        write!(f, "{}", self.remote_id)
    }
}

/// Decoder for French Remote ID beacons.
#[derive(Debug, Default, Clone, Copy)]
pub struct RemoteIdDecoder {
    config: DecoderConfig,
}

impl RemoteIdDecoder {
    /// Create a new [`RemoteIdDecoder`].
    pub const fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    /// Return the configuration.
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode the body of a vendor specific element, see [`decode`].
    pub fn decode_payload(&self, body: &[u8]) -> RemoteIdResult {
        decode(body)
    }

    /// Decode the first vendor specific element of the configured authority
    /// in an element list.
    pub fn decode_elements<'f>(
        &self,
        elements: &'f [u8],
    ) -> Option<(VendorSpecific<&'f [u8]>, RemoteIdResult)> {
        let (_, vendor) = self.scan(InformationElementsIterator::new(elements));
        let vendor = vendor?;
        let result = decode(vendor.payload());

        Some((vendor, result))
    }

    /// Decode a beacon or probe response.
    ///
    /// Returns `Ok(None)` when the frame does not carry a vendor specific
    /// element of the configured authority.
    ///
    /// # Errors
    ///
    /// Returns an error if `frame` is not a beacon or probe response.
    pub fn decode_frame(&self, frame: &[u8]) -> Result<Option<Detection>> {
        let beacon = BeaconFrame::new(frame)?;
        let header = beacon.header();

        let (ssid, vendor) = self.scan(beacon.information_elements());
        let Some(vendor) = vendor else {
            trace!("no Remote ID element in frame");
            return Ok(None);
        };

        Ok(Some(Detection {
            transmitter: header.transmitter(),
            bssid: header.bssid(),
            ssid,
            sub_type: vendor.sub_type(),
            remote_id: decode(vendor.payload()),
        }))
    }

    /// Find the first SSID element and the first vendor specific element of
    /// the authority. An oversized first SSID gives no SSID at all.
    fn scan<'f>(
        &self,
        elements: InformationElementsIterator<'f>,
    ) -> (Option<Ssid>, Option<VendorSpecific<&'f [u8]>>) {
        let mut ssid = None;
        let mut ssid_seen = false;
        let mut vendor = None;

        for element in elements {
            match element.element_id() {
                ElementId::Ssid if !ssid_seen => {
                    ssid_seen = true;
                    ssid = Ssid::new(element.value()).ok();
                }
                ElementId::VendorSpecific if vendor.is_none() => {
                    vendor = match_vendor(&element, self.config.authority_oui)
                }
                _ => (),
            }
        }

        (ssid, vendor)
    }
}
