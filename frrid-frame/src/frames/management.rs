use crate::{Error, Result};
use crate::{FrameControl, FrameControlFlags, FrameType, MacAddress, ManagementSubtype};

/// A reader/writer for an 802.11 management frame.
/// ```notrust
/// +---------------+----------+-------+-------+-------+----------+-------------+------+
/// | Frame control | Duration | Addr1 | Addr2 | Addr3 | Sequence | HT control* | Body |
/// +---------------+----------+-------+-------+-------+----------+-------------+------+
/// 0               2          4       10      16      22         24
/// ```
/// The HT control field is only present when the +HTC/Order flag is set.
pub struct ManagementFrame<T: AsRef<[u8]>> {
    buffer: T,
}

impl<T: AsRef<[u8]>> ManagementFrame<T> {
    /// Length of the header without HT control field.
    pub const HEADER_LEN: usize = 24;

    /// Create a new [`ManagementFrame`] reader/writer from a given buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer is too short for the header, if the
    /// protocol version is not 0, or if this is not a management frame.
    pub fn new(buffer: T) -> Result<Self> {
        let frame = Self::new_unchecked(buffer);

        if !frame.check_len() {
            return Err(Error);
        }

        let fc = frame.frame_control();
        if fc.protocol_version() != 0 || fc.frame_type() != FrameType::Management {
            return Err(Error);
        }

        Ok(frame)
    }

    /// Returns `false` if the buffer is too short to contain the header.
    fn check_len(&self) -> bool {
        let buffer = self.buffer.as_ref();
        buffer.len() >= Self::HEADER_LEN && buffer.len() >= self.header_len()
    }

    /// Create a new [`ManagementFrame`] reader/writer from a given buffer
    /// without checking.
    pub fn new_unchecked(buffer: T) -> Self {
        Self { buffer }
    }

    /// Return a reader over the same buffer.
    pub fn reader(&self) -> ManagementFrame<&'_ [u8]> {
        ManagementFrame::new_unchecked(self.buffer.as_ref())
    }

    /// Return a [`FrameControl`] reader.
    pub fn frame_control(&self) -> FrameControl<&'_ [u8]> {
        FrameControl::new_unchecked(&self.buffer.as_ref()[..2])
    }

    /// Return the [`ManagementSubtype`].
    pub fn subtype(&self) -> ManagementSubtype {
        ManagementSubtype::from(self.frame_control().subtype())
    }

    /// Return the length of the header, HT control field included.
    pub fn header_len(&self) -> usize {
        if self.frame_control().flags().contains(FrameControlFlags::Order) {
            Self::HEADER_LEN + 4
        } else {
            Self::HEADER_LEN
        }
    }

    /// Return the duration field, in microseconds.
    pub fn duration(&self) -> u16 {
        let b = &self.buffer.as_ref()[2..4];
        u16::from_le_bytes([b[0], b[1]])
    }

    /// Return the receiver address (address 1).
    pub fn receiver(&self) -> MacAddress {
        MacAddress::from_bytes(&self.buffer.as_ref()[4..10])
    }

    /// Return the transmitter address (address 2).
    pub fn transmitter(&self) -> MacAddress {
        MacAddress::from_bytes(&self.buffer.as_ref()[10..16])
    }

    /// Return the BSS identifier (address 3).
    pub fn bssid(&self) -> MacAddress {
        MacAddress::from_bytes(&self.buffer.as_ref()[16..22])
    }

    fn sequence_control(&self) -> u16 {
        let b = &self.buffer.as_ref()[22..24];
        u16::from_le_bytes([b[0], b[1]])
    }

    /// Return the sequence number.
    pub fn sequence_number(&self) -> u16 {
        self.sequence_control() >> 4
    }

    /// Return the fragment number.
    pub fn fragment_number(&self) -> u8 {
        (self.sequence_control() & 0b1111) as u8
    }

    /// Return the HT control field, if present.
    pub fn ht_control(&self) -> Option<u32> {
        if self.header_len() == Self::HEADER_LEN {
            return None;
        }

        let b = &self.buffer.as_ref()[24..28];
        Some(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    /// Return the frame body.
    pub fn body(&self) -> &[u8] {
        &self.buffer.as_ref()[self.header_len()..]
    }
}

impl<T: AsRef<[u8]> + AsMut<[u8]>> ManagementFrame<T> {
    /// Return a mutable [`FrameControl`] writer.
    pub fn frame_control_mut(&mut self) -> FrameControl<&'_ mut [u8]> {
        FrameControl::new_unchecked(&mut self.buffer.as_mut()[..2])
    }

    /// Set the duration field.
    pub fn set_duration(&mut self, duration: u16) {
        self.buffer.as_mut()[2..4].copy_from_slice(&duration.to_le_bytes());
    }

    /// Set the receiver address (address 1).
    pub fn set_receiver(&mut self, address: MacAddress) {
        self.buffer.as_mut()[4..10].copy_from_slice(address.as_bytes());
    }

    /// Set the transmitter address (address 2).
    pub fn set_transmitter(&mut self, address: MacAddress) {
        self.buffer.as_mut()[10..16].copy_from_slice(address.as_bytes());
    }

    /// Set the BSS identifier (address 3).
    pub fn set_bssid(&mut self, address: MacAddress) {
        self.buffer.as_mut()[16..22].copy_from_slice(address.as_bytes());
    }

    /// Set the sequence number, with fragment number 0.
    pub fn set_sequence_number(&mut self, sequence_number: u16) {
        let sequence_control = (sequence_number & 0x0fff) << 4;
        self.buffer.as_mut()[22..24].copy_from_slice(&sequence_control.to_le_bytes());
    }

    /// Return a mutable reference to the frame body.
    pub fn body_mut(&mut self) -> &mut [u8] {
        let offset = self.header_len();
        &mut self.buffer.as_mut()[offset..]
    }
}
