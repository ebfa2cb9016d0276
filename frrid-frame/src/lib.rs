//! Zero-copy readers for 802.11 management frames carrying a French Remote ID
//! beacon.
//!
//! Each reader contains the following functions:
//! - [`new`]: Create a new reader, checking the buffer length.
//! - [`new_unchecked`]: Create a new reader without checking the buffer
//!   length.
//!
//! The pipeline goes from a captured frame down to a [`RemoteIdResult`]:
//! - [`BeaconFrame`] reads the management header and fixed parameters, and
//!   returns an [`InformationElementsIterator`] over the element list.
//! - [`match_vendor`] keeps the vendor specific element whose [`Oui`] is the
//!   configured authority.
//! - [`decode`] walks the nested Remote ID records of that element, using the
//!   static field [`REGISTRY`] to check and decode every record.
//!
//! [`RemoteIdDecoder`] wires all of them together.
//!
//! ## Reading a frame
//! ```
//! # use frrid_frame::{BeaconFrame, ElementId, Oui, match_vendor, decode};
//! # let frame: [u8; 56] = [
//! #     0x80, 0x00, 0x00, 0x00, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x60, 0x55,
//! #     0xf9, 0x01, 0x02, 0x03, 0x60, 0x55, 0xf9, 0x01, 0x02, 0x03, 0x10, 0x00,
//! #     0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x64, 0x00, 0x01, 0x00,
//! #     0x00, 0x03, 0x55, 0x41, 0x56, 0xdd, 0x0d, 0x6a, 0x5c, 0x35, 0x01, 0x01,
//! #     0x01, 0x01, 0x04, 0x04, 0x00, 0x2b, 0x87, 0xb8,
//! # ];
//! let frame = BeaconFrame::new(&frame[..]).unwrap();
//! assert_eq!(frame.beacon_interval(), 100);
//!
//! for element in frame.information_elements() {
//!     if element.element_id() == ElementId::Ssid {
//!         assert_eq!(element.content(), b"UAV");
//!     }
//!
//!     if let Some(vendor) = match_vendor(&element, Oui::FRENCH_DEFENSE) {
//!         let result = decode(vendor.body());
//!         assert_eq!(result.latitude().unwrap().degrees(), 28.52792);
//!     }
//! }
//! ```
//!
//! ## Decoding errors
//!
//! Radio data is untrusted. Records that are truncated, carry the wrong size
//! or use an unknown type never abort decoding: the affected field is left
//! absent and the irregularity is recorded in [`RemoteIdResult::anomalies`].
//!
//! [`new`]: BeaconFrame::new
//! [`new_unchecked`]: BeaconFrame::new_unchecked
#![no_std]
#![deny(missing_docs)]
#![deny(unsafe_code)]

#[cfg(any(feature = "std", test))]
#[macro_use]
extern crate std;

#[macro_use]
mod utils;

#[cfg(test)]
mod tests;

mod frames;
pub use frames::*;

mod frame_control;
pub use frame_control::*;

mod addressing;
pub use addressing::*;

mod ie;
pub use ie::*;

mod rid;
pub use rid::*;

mod repr;
pub use repr::*;

/// An error that can occur when reading or writing an 802.11 frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Error;

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "buffer does not hold a valid frame")
    }
}

/// A type alias for `Result<T, frame::Error>`.
pub type Result<T> = core::result::Result<T, Error>;
