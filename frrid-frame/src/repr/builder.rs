use super::{BeaconFrameRepr, InformationElementRepr, RemoteIdRepr, VendorSpecificRepr};
use crate::{CapabilityInformation, MacAddress, Oui, Ssid};
use crate::{Error, Result};

use heapless::Vec;

/// Marker for a [`BeaconFrameBuilder`] building a beacon.
pub struct Beacon;
/// Marker for a [`BeaconFrameBuilder`] building a probe response.
pub struct ProbeResponse;

/// A helper for building 802.11 beacons carrying Remote ID records.
pub struct BeaconFrameBuilder<T> {
    frame: BeaconFrameRepr,
    overflow: bool,
    r#type: core::marker::PhantomData<T>,
}

impl BeaconFrameBuilder<Beacon> {
    /// Create a new builder for a broadcast beacon, with the transmitter as
    /// BSS identifier.
    pub fn new_beacon(transmitter: MacAddress) -> Self {
        Self {
            frame: BeaconFrameRepr {
                probe_response: false,
                receiver: MacAddress::BROADCAST,
                transmitter,
                bssid: transmitter,
                sequence_number: 0,
                timestamp: 0,
                beacon_interval: 100,
                capability_information: CapabilityInformation::Ess,
                information_elements: Vec::new(),
            },
            overflow: false,
            r#type: core::marker::PhantomData,
        }
    }
}

impl BeaconFrameBuilder<ProbeResponse> {
    /// Create a new builder for a probe response to `receiver`.
    pub fn new_probe_response(transmitter: MacAddress, receiver: MacAddress) -> Self {
        Self {
            frame: BeaconFrameRepr {
                probe_response: true,
                receiver,
                transmitter,
                bssid: transmitter,
                sequence_number: 0,
                timestamp: 0,
                beacon_interval: 100,
                capability_information: CapabilityInformation::Ess,
                information_elements: Vec::new(),
            },
            overflow: false,
            r#type: core::marker::PhantomData,
        }
    }
}

impl<T> BeaconFrameBuilder<T> {
    /// Set the BSS identifier.
    pub fn set_bssid(mut self, bssid: MacAddress) -> Self {
        self.frame.bssid = bssid;
        self
    }

    /// Set the sequence number.
    pub fn set_sequence_number(mut self, sequence_number: u16) -> Self {
        self.frame.sequence_number = sequence_number;
        self
    }

    /// Set the timestamp.
    pub fn set_timestamp(mut self, timestamp: u64) -> Self {
        self.frame.timestamp = timestamp;
        self
    }

    /// Set the beacon interval.
    pub fn set_beacon_interval(mut self, beacon_interval: u16) -> Self {
        self.frame.beacon_interval = beacon_interval;
        self
    }

    /// Set the capability information.
    pub fn set_capability_information(mut self, capability: CapabilityInformation) -> Self {
        self.frame.capability_information = capability;
        self
    }

    /// Set the SSID.
    ///
    /// # Note
    /// The SSID element is always the first element of the frame.
    pub fn set_ssid(mut self, ssid: Ssid) -> Self {
        let elements = &mut self.frame.information_elements;

        match elements.first_mut() {
            Some(InformationElementRepr::Ssid(current)) => *current = ssid,
            _ => {
                if elements.insert(0, InformationElementRepr::Ssid(ssid)).is_err() {
                    self.overflow = true;
                }
            }
        }

        self
    }

    /// Add an Information Element.
    pub fn add_information_element(mut self, ie: InformationElementRepr) -> Self {
        if self.frame.information_elements.push(ie).is_err() {
            self.overflow = true;
        }

        self
    }

    /// Add a Vendor Specific element carrying Remote ID records.
    pub fn add_remote_id(self, oui: Oui, sub_type: u8, remote_id: RemoteIdRepr) -> Self {
        self.add_information_element(InformationElementRepr::VendorSpecific(VendorSpecificRepr {
            oui,
            sub_type,
            remote_id,
        }))
    }

    /// Finalize the frame builder, returning the frame representation.
    ///
    /// # Errors
    ///
    /// Returns an error if more than 8 elements were added, or if the frame
    /// does not validate.
    pub fn finalize(self) -> Result<BeaconFrameRepr> {
        if self.overflow {
            return Err(Error);
        }

        self.frame.validate()?;

        Ok(self.frame)
    }
}
