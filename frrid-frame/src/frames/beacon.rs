use bitflags::bitflags;

use crate::{Error, Result};
use crate::{FrameControl, InformationElementsIterator, ManagementFrame, ManagementSubtype};

bitflags! {
    /// Capability Information field of a beacon.
    #[derive(Copy, Clone, PartialEq, Eq)]
    pub struct CapabilityInformation: u16 {
        /// Infrastructure network.
        const Ess = 1 << 0;
        /// Independent (ad hoc) network.
        const Ibss = 1 << 1;
        /// Encryption is required.
        const Privacy = 1 << 4;
        /// Short preamble.
        const ShortPreamble = 1 << 5;
        /// Spectrum management.
        const SpectrumManagement = 1 << 8;
        /// QoS.
        const Qos = 1 << 9;
        /// Short slot time.
        const ShortSlotTime = 1 << 10;
        /// Automatic power save delivery.
        const Apsd = 1 << 11;
        /// Radio measurement.
        const RadioMeasurement = 1 << 12;
    }
}

impl core::fmt::Debug for CapabilityInformation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

/// A reader/writer for an 802.11 beacon or probe response frame.
///
/// Both frames share the same layout: the management header, 12 octets of
/// fixed parameters, then a list of information elements.
/// ```notrust
/// +--------+-----------+-----------------+------------+----------+
/// | Header | Timestamp | Beacon interval | Capability | Elements |
/// +--------+-----------+-----------------+------------+----------+
/// 0        24          32                34           36
/// ```
pub struct BeaconFrame<T: AsRef<[u8]>> {
    buffer: T,
}

impl<T: AsRef<[u8]>> BeaconFrame<T> {
    /// Length of the fixed parameters.
    pub const FIXED_PARAMETERS_LEN: usize = 12;

    /// Create a new [`BeaconFrame`] reader/writer from a given buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer does not hold a beacon or a probe
    /// response, or is too short for its fixed parameters.
    pub fn new(buffer: T) -> Result<Self> {
        let header = ManagementFrame::new(buffer.as_ref())?;

        if !matches!(
            header.subtype(),
            ManagementSubtype::Beacon | ManagementSubtype::ProbeResponse
        ) {
            return Err(Error);
        }

        let frame = Self::new_unchecked(buffer);

        if !frame.check_len() {
            return Err(Error);
        }

        Ok(frame)
    }

    /// Returns `false` if the buffer is too short to contain the fixed
    /// parameters.
    fn check_len(&self) -> bool {
        self.header().body().len() >= Self::FIXED_PARAMETERS_LEN
    }

    /// Create a new [`BeaconFrame`] reader/writer from a given buffer without
    /// checking.
    pub fn new_unchecked(buffer: T) -> Self {
        Self { buffer }
    }

    /// Return the [`ManagementFrame`] header reader.
    pub fn header(&self) -> ManagementFrame<&'_ [u8]> {
        ManagementFrame::new_unchecked(self.buffer.as_ref())
    }

    /// Return a [`FrameControl`] reader.
    pub fn frame_control(&self) -> FrameControl<&'_ [u8]> {
        FrameControl::new_unchecked(&self.buffer.as_ref()[..2])
    }

    /// Returns `true` for a probe response.
    pub fn is_probe_response(&self) -> bool {
        self.header().subtype() == ManagementSubtype::ProbeResponse
    }

    fn fixed_parameters(&self) -> &[u8] {
        let offset = self.header().header_len();
        &self.buffer.as_ref()[offset..][..Self::FIXED_PARAMETERS_LEN]
    }

    /// Return the timestamp, in microseconds.
    pub fn timestamp(&self) -> u64 {
        let b = &self.fixed_parameters()[..8];
        u64::from_le_bytes([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]])
    }

    /// Return the beacon interval, in time units of 1024 microseconds.
    pub fn beacon_interval(&self) -> u16 {
        let b = &self.fixed_parameters()[8..10];
        u16::from_le_bytes([b[0], b[1]])
    }

    /// Return the [`CapabilityInformation`].
    pub fn capability_information(&self) -> CapabilityInformation {
        let b = &self.fixed_parameters()[10..12];
        CapabilityInformation::from_bits_truncate(u16::from_le_bytes([b[0], b[1]]))
    }

    /// Return the information elements.
    pub fn elements(&self) -> &[u8] {
        let offset = self.header().header_len() + Self::FIXED_PARAMETERS_LEN;
        &self.buffer.as_ref()[offset..]
    }

    /// Return an [`Iterator`] over the information elements.
    pub fn information_elements(&self) -> InformationElementsIterator<'_> {
        InformationElementsIterator::new(self.elements())
    }
}

impl<T: AsRef<[u8]> + AsMut<[u8]>> BeaconFrame<T> {
    /// Return a mutable [`ManagementFrame`] header writer.
    pub fn header_mut(&mut self) -> ManagementFrame<&'_ mut [u8]> {
        ManagementFrame::new_unchecked(self.buffer.as_mut())
    }

    fn fixed_parameters_mut(&mut self) -> &mut [u8] {
        let offset = self.header().header_len();
        &mut self.buffer.as_mut()[offset..][..Self::FIXED_PARAMETERS_LEN]
    }

    /// Set the timestamp.
    pub fn set_timestamp(&mut self, timestamp: u64) {
        self.fixed_parameters_mut()[..8].copy_from_slice(&timestamp.to_le_bytes());
    }

    /// Set the beacon interval.
    pub fn set_beacon_interval(&mut self, interval: u16) {
        self.fixed_parameters_mut()[8..10].copy_from_slice(&interval.to_le_bytes());
    }

    /// Set the [`CapabilityInformation`].
    pub fn set_capability_information(&mut self, capability: CapabilityInformation) {
        self.fixed_parameters_mut()[10..12].copy_from_slice(&capability.bits().to_le_bytes());
    }

    /// Return a mutable reference to the information elements.
    pub fn elements_mut(&mut self) -> &mut [u8] {
        let offset = self.header().header_len() + Self::FIXED_PARAMETERS_LEN;
        &mut self.buffer.as_mut()[offset..]
    }
}
