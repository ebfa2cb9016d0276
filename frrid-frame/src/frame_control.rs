//! 802.11 Frame Control field readers and writers.

use super::{Error, Result};
use bitflags::bitflags;

/// 802.11 frame type.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub enum FrameType {
    /// Management frame.
    Management = 0b00,
    /// Control frame.
    Control = 0b01,
    /// Data frame.
    Data = 0b10,
    /// Extension frame.
    Extension = 0b11,
}

impl From<u8> for FrameType {
    fn from(value: u8) -> Self {
        match value & 0b11 {
            0b00 => Self::Management,
            0b01 => Self::Control,
            0b10 => Self::Data,
            _ => Self::Extension,
        }
    }
}

/// 802.11 management frame subtype.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub enum ManagementSubtype {
    /// Association request.
    AssociationRequest = 0,
    /// Association response.
    AssociationResponse = 1,
    /// Reassociation request.
    ReassociationRequest = 2,
    /// Reassociation response.
    ReassociationResponse = 3,
    /// Probe request.
    ProbeRequest = 4,
    /// Probe response.
    ProbeResponse = 5,
    /// Timing advertisement.
    TimingAdvertisement = 6,
    /// Beacon.
    Beacon = 8,
    /// Announcement traffic indication message.
    Atim = 9,
    /// Disassociation.
    Disassociation = 10,
    /// Authentication.
    Authentication = 11,
    /// Deauthentication.
    Deauthentication = 12,
    /// Action.
    Action = 13,
    /// Action no ack.
    ActionNoAck = 14,
    /// Reserved subtype.
    Unknown,
}

impl From<u8> for ManagementSubtype {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::AssociationRequest,
            1 => Self::AssociationResponse,
            2 => Self::ReassociationRequest,
            3 => Self::ReassociationResponse,
            4 => Self::ProbeRequest,
            5 => Self::ProbeResponse,
            6 => Self::TimingAdvertisement,
            8 => Self::Beacon,
            9 => Self::Atim,
            10 => Self::Disassociation,
            11 => Self::Authentication,
            12 => Self::Deauthentication,
            13 => Self::Action,
            14 => Self::ActionNoAck,
            _ => Self::Unknown,
        }
    }
}

bitflags! {
    /// Second octet of the Frame Control field.
    /// ```notrust
    /// +-------+---------+-----------+-------+-----------+-----------+-----------+-------+
    /// | To DS | From DS | More frag | Retry | Power mgt | More data | Protected | Order |
    /// +-------+---------+-----------+-------+-----------+-----------+-----------+-------+
    /// ```
    #[derive(Copy, Clone, PartialEq, Eq)]
    pub struct FrameControlFlags: u8 {
        /// To DS.
        const ToDs = 0b0000_0001;
        /// From DS.
        const FromDs = 0b0000_0010;
        /// More fragments.
        const MoreFragments = 0b0000_0100;
        /// Retry.
        const Retry = 0b0000_1000;
        /// Power management.
        const PowerManagement = 0b0001_0000;
        /// More data.
        const MoreData = 0b0010_0000;
        /// Protected frame.
        const Protected = 0b0100_0000;
        /// +HTC/Order.
        const Order = 0b1000_0000;
    }
}

impl core::fmt::Debug for FrameControlFlags {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

/// A reader/writer for the 802.11 Frame Control field.
/// ```notrust
/// +------------------+------+---------+-------+
/// | Protocol version | Type | Subtype | Flags |
/// +------------------+------+---------+-------+
/// 0                  2      4         8       16
/// ```
pub struct FrameControl<T: AsRef<[u8]>> {
    buffer: T,
}

impl<T: AsRef<[u8]>> FrameControl<T> {
    /// Create a new [`FrameControl`] reader/writer from a given buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer is too short.
    pub fn new(buffer: T) -> Result<Self> {
        let fc = Self::new_unchecked(buffer);

        if !fc.check_len() {
            return Err(Error);
        }

        Ok(fc)
    }

    /// Returns `false` if the buffer is too short to contain the Frame Control field.
    fn check_len(&self) -> bool {
        self.buffer.as_ref().len() >= 2
    }

    /// Create a new [`FrameControl`] reader/writer from a given buffer without length checking.
    pub fn new_unchecked(buffer: T) -> Self {
        Self { buffer }
    }

    /// Return the protocol version, always 0 for 802.11 (PV0) frames.
    pub fn protocol_version(&self) -> u8 {
        self.buffer.as_ref()[0] & 0b11
    }

    /// Return the [`FrameType`] field.
    pub fn frame_type(&self) -> FrameType {
        FrameType::from((self.buffer.as_ref()[0] >> 2) & 0b11)
    }

    /// Return the raw subtype field.
    pub fn subtype(&self) -> u8 {
        self.buffer.as_ref()[0] >> 4
    }

    /// Return the [`ManagementSubtype`], if this is a management frame.
    pub fn management_subtype(&self) -> Option<ManagementSubtype> {
        match self.frame_type() {
            FrameType::Management => Some(ManagementSubtype::from(self.subtype())),
            _ => None,
        }
    }

    /// Return the [`FrameControlFlags`].
    pub fn flags(&self) -> FrameControlFlags {
        FrameControlFlags::from_bits_truncate(self.buffer.as_ref()[1])
    }

    /// Returns `true` when the protected frame flag is set.
    pub fn protected(&self) -> bool {
        self.flags().contains(FrameControlFlags::Protected)
    }
}

impl<T: AsRef<[u8]> + AsMut<[u8]>> FrameControl<T> {
    /// Set the frame type and subtype, with protocol version 0.
    pub fn set_frame_type(&mut self, frame_type: FrameType, subtype: u8) {
        self.buffer.as_mut()[0] = ((subtype & 0b1111) << 4) | ((frame_type as u8) << 2);
    }

    /// Set the [`FrameControlFlags`].
    pub fn set_flags(&mut self, flags: FrameControlFlags) {
        self.buffer.as_mut()[1] = flags.bits();
    }
}
