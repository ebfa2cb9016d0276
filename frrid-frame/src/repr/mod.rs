use crate::{
    BeaconFrame, CapabilityInformation, FrameControlFlags, FrameType, InformationElement,
    MacAddress, ManagementFrame, ManagementSubtype,
};

use super::{Error, Result};

use heapless::Vec;

mod remote_id;
pub use remote_id::RemoteIdRepr;

mod ie;
pub use ie::*;

mod builder;
pub use builder::{Beacon, BeaconFrameBuilder, ProbeResponse};

/// A high-level representation of an 802.11 beacon or probe response.
///
/// Only SSID and Vendor Specific elements are represented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeaconFrameRepr {
    /// Emit a probe response instead of a beacon.
    pub probe_response: bool,
    /// The receiver address.
    pub receiver: MacAddress,
    /// The transmitter address.
    pub transmitter: MacAddress,
    /// The BSS identifier.
    pub bssid: MacAddress,
    /// The sequence number.
    pub sequence_number: u16,
    /// The timestamp, in microseconds.
    pub timestamp: u64,
    /// The beacon interval, in time units.
    pub beacon_interval: u16,
    /// The capability information.
    pub capability_information: CapabilityInformation,
    /// The information elements.
    pub information_elements: Vec<InformationElementRepr, 8>,
}

#[cfg(feature = "fuzz")]
impl arbitrary::Arbitrary<'_> for BeaconFrameRepr {
    fn arbitrary(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<Self> {
        let mut information_elements = Vec::new();

        for _ in 0..u.int_in_range(0..=7)? {
            information_elements
                .push(InformationElementRepr::arbitrary(u)?)
                .map_err(|_| arbitrary::Error::IncorrectFormat)?;
        }

        Ok(Self {
            probe_response: u.arbitrary()?,
            receiver: u.arbitrary()?,
            transmitter: u.arbitrary()?,
            bssid: u.arbitrary()?,
            sequence_number: u.int_in_range(0..=0x0fff)?,
            timestamp: u.arbitrary()?,
            beacon_interval: u.arbitrary()?,
            capability_information: CapabilityInformation::from_bits_truncate(u.arbitrary()?),
            information_elements,
        })
    }
}

impl BeaconFrameRepr {
    /// Parse a beacon or probe response.
    ///
    /// Elements other than SSID and Vendor Specific are skipped. Parsing stops
    /// after 8 elements.
    pub fn parse(reader: &BeaconFrame<&[u8]>) -> Result<Self> {
        let header = reader.header();

        if header.ht_control().is_some() {
            return Err(Error);
        }

        let mut information_elements = Vec::new();

        for ie in reader.information_elements() {
            let Ok(ie) = InformationElementRepr::parse(&ie) else {
                continue;
            };

            if information_elements.push(ie).is_err() {
                break;
            }
        }

        Ok(Self {
            probe_response: reader.is_probe_response(),
            receiver: header.receiver(),
            transmitter: header.transmitter(),
            bssid: header.bssid(),
            sequence_number: header.sequence_number(),
            timestamp: reader.timestamp(),
            beacon_interval: reader.beacon_interval(),
            capability_information: reader.capability_information(),
            information_elements,
        })
    }

    /// Validate the frame.
    pub fn validate(&self) -> Result<()> {
        if self.sequence_number > 0x0fff {
            return Err(Error);
        }

        for ie in self.information_elements.iter() {
            ie.validate()?;
        }

        Ok(())
    }

    /// Return the length of the frame when emitted into a buffer.
    pub fn buffer_len(&self) -> usize {
        let mut len = ManagementFrame::<&[u8]>::HEADER_LEN;
        len += BeaconFrame::<&[u8]>::FIXED_PARAMETERS_LEN;

        for ie in self.information_elements.iter() {
            len += ie.buffer_len();
        }

        len
    }

    /// Emit the frame into a buffer.
    pub fn emit(&self, frame: &mut BeaconFrame<&'_ mut [u8]>) {
        let subtype = if self.probe_response {
            ManagementSubtype::ProbeResponse
        } else {
            ManagementSubtype::Beacon
        };

        let mut header = frame.header_mut();
        let mut fc = header.frame_control_mut();
        fc.set_frame_type(FrameType::Management, subtype as u8);
        fc.set_flags(FrameControlFlags::empty());
        header.set_duration(0);
        header.set_receiver(self.receiver);
        header.set_transmitter(self.transmitter);
        header.set_bssid(self.bssid);
        header.set_sequence_number(self.sequence_number);

        frame.set_timestamp(self.timestamp);
        frame.set_beacon_interval(self.beacon_interval);
        frame.set_capability_information(self.capability_information);

        let elements = frame.elements_mut();
        let mut offset = 0;
        for ie in self.information_elements.iter() {
            ie.emit(&mut InformationElement::new_unchecked(&mut elements[offset..]));
            offset += ie.buffer_len();
        }
    }
}
