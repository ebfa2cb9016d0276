//! High-level representation of 802.11 management frames.

use crate::{Error, Result};

use crate::{FrameControl, FrameType, ManagementSubtype};

mod beacon;
mod management;

pub use beacon::*;
pub use management::*;

/// CRC-32 of the 802.11 Frame Check Sequence.
const FCS: crc::Crc<u32> = crc::Crc::<u32>::new(&crc::CRC_32_ISO_HDLC);

/// An 802.11 frame followed by its Frame Check Sequence (FCS), as captured by
/// drivers that keep it.
pub struct FrameWithFcs<T: AsRef<[u8]>> {
    buffer: T,
}

impl<T: AsRef<[u8]>> FrameWithFcs<T> {
    /// Create a new [`FrameWithFcs`] from a given buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer cannot hold an FCS, or if the FCS does
    /// not match the content.
    pub fn new(buffer: T) -> Result<Self> {
        let frame = Self::new_unchecked(buffer);

        if !frame.check_len() {
            return Err(Error);
        }

        if !frame.check_fcs() {
            return Err(Error);
        }

        Ok(frame)
    }

    /// Returns `false` if the buffer is too short to contain the FCS.
    fn check_len(&self) -> bool {
        self.buffer.as_ref().len() >= 4
    }

    /// Create a new [`FrameWithFcs`] from a given buffer without checking the
    /// FCS.
    pub fn new_unchecked(buffer: T) -> Self {
        Self { buffer }
    }

    /// Calculate the FCS over the content of the frame.
    #[inline]
    pub fn calculate_fcs(&self) -> u32 {
        FCS.checksum(self.content())
    }

    /// Returns `true` if the FCS matches the content of the frame.
    #[inline]
    pub fn check_fcs(&self) -> bool {
        self.calculate_fcs() == self.fcs()
    }

    /// Return the content of the frame, excluding the FCS.
    pub fn content(&self) -> &[u8] {
        let buffer = self.buffer.as_ref();
        &buffer[..buffer.len() - 4]
    }

    /// Return the FCS.
    pub fn fcs(&self) -> u32 {
        let buffer = self.buffer.as_ref();
        let b = &buffer[buffer.len() - 4..];
        u32::from_le_bytes([b[0], b[1], b[2], b[3]])
    }

    /// Return a high-level representation of the frame, excluding the FCS.
    pub fn frame(&self) -> Result<Frame<&'_ [u8]>> {
        Frame::new(self.content())
    }
}

impl<T: AsRef<[u8]> + AsMut<[u8]>> FrameWithFcs<T> {
    /// Compute the FCS over the content and write it in the last 4 octets.
    pub fn fill_fcs(&mut self) {
        let fcs = self.calculate_fcs();
        let buffer = self.buffer.as_mut();
        let len = buffer.len();
        buffer[len - 4..].copy_from_slice(&fcs.to_le_bytes());
    }
}

/// A high-level representation of an 802.11 management frame.
pub enum Frame<T: AsRef<[u8]>> {
    /// A beacon.
    Beacon(BeaconFrame<T>),
    /// A probe response.
    ProbeResponse(BeaconFrame<T>),
    /// Any other management frame.
    Management(ManagementFrame<T>),
}

impl<T: AsRef<[u8]>> Frame<T> {
    /// Create a new [`Frame`] from a given buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer does not hold a management frame.
    pub fn new(buffer: T) -> Result<Self> {
        let frame_control = FrameControl::new(buffer.as_ref())?;

        if frame_control.frame_type() != FrameType::Management {
            return Err(Error);
        }

        match frame_control.management_subtype() {
            Some(ManagementSubtype::Beacon) => Ok(Frame::Beacon(BeaconFrame::new(buffer)?)),
            Some(ManagementSubtype::ProbeResponse) => {
                Ok(Frame::ProbeResponse(BeaconFrame::new(buffer)?))
            }
            _ => Ok(Frame::Management(ManagementFrame::new(buffer)?)),
        }
    }

    /// Return the [`ManagementFrame`] header reader.
    pub fn header(&self) -> ManagementFrame<&'_ [u8]> {
        match self {
            Frame::Beacon(frame) | Frame::ProbeResponse(frame) => frame.header(),
            Frame::Management(frame) => frame.reader(),
        }
    }

    /// Return the [`BeaconFrame`] reader of a beacon or probe response.
    pub fn beacon(&self) -> Option<&BeaconFrame<T>> {
        match self {
            Frame::Beacon(frame) | Frame::ProbeResponse(frame) => Some(frame),
            Frame::Management(_) => None,
        }
    }
}
