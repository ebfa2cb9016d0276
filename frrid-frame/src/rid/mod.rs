//! French Remote ID records carried in the body of the authority's Vendor
//! Specific element.

mod field;
pub use field::*;

mod registry;
pub use registry::*;

mod result;
pub use result::*;

mod decoder;
pub use decoder::*;

use super::{Error, Result};

/// A reader/writer for a Remote ID record.
/// ```notrust
/// +------+--------+------------------------+
/// | Type | Length | Value (0-255 octets)...|
/// +------+--------+------------------------+
/// 0      1        2
/// ```
/// Multi-octet values are big-endian.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct RemoteIdRecord<T: AsRef<[u8]>> {
    data: T,
}

impl<T: AsRef<[u8]>> RemoteIdRecord<T> {
    /// Create a new [`RemoteIdRecord`] reader/writer from a given buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer is too short to contain the record
    /// header, or the value announced by the header.
    pub fn new(data: T) -> Result<Self> {
        let record = Self::new_unchecked(data);

        if !record.check_len() {
            return Err(Error);
        }

        Ok(record)
    }

    /// Returns `false` if the buffer is too short to contain the record.
    fn check_len(&self) -> bool {
        let data = self.data.as_ref();
        data.len() >= 2 && data.len() >= self.buffer_len()
    }

    /// Create a new [`RemoteIdRecord`] reader/writer from a given buffer
    /// without length checking.
    pub fn new_unchecked(data: T) -> Self {
        Self { data }
    }

    /// Return the raw type code.
    pub fn code(&self) -> u8 {
        self.data.as_ref()[0]
    }

    /// Return the [`FieldType`].
    pub fn field_type(&self) -> FieldType {
        FieldType::from(self.code())
    }

    /// Return the length of the value in octets.
    pub fn length(&self) -> usize {
        self.data.as_ref()[1] as usize
    }

    /// Return the number of octets the record occupies, header included.
    pub fn buffer_len(&self) -> usize {
        2 + self.length()
    }

    /// Return the value of the record.
    pub fn value(&self) -> &[u8] {
        &self.data.as_ref()[2..][..self.length()]
    }
}

impl<T: AsRef<[u8]> + AsMut<[u8]>> RemoteIdRecord<T> {
    /// Set the type code.
    pub fn set_code(&mut self, code: u8) {
        self.data.as_mut()[0] = code;
    }

    /// Set the length of the value.
    pub fn set_length(&mut self, len: u8) {
        self.data.as_mut()[1] = len;
    }

    /// Return a mutable reference to the value.
    pub fn value_mut(&mut self) -> &mut [u8] {
        &mut self.data.as_mut()[2..]
    }
}

impl<T: AsRef<[u8]>> core::fmt::Display for RemoteIdRecord<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let Some(spec) = FieldSpec::lookup(self.code()) else {
            return write!(f, "Unknown[{}]({:0x?})", self.code(), self.value());
        };

        if !spec.size.accepts(self.length()) {
            return write!(f, "{:?}({:0x?}) invalid length", spec.field_type, self.value());
        }

        match (spec.decode)(self.value()) {
            Ok(field) => write!(f, "{field}"),
            Err(_) => write!(f, "{:?}({:0x?}) invalid", spec.field_type, self.value()),
        }
    }
}

/// Remote ID field type.
#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord)]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub enum FieldType {
    /// Protocol version.
    ProtocolVersion = 1,
    /// French identifier: manufacturer, model and serial number.
    IdFr = 2,
    /// ANSI/CTA-2063 physical serial number.
    IdAnsi = 3,
    /// Current latitude.
    Latitude = 4,
    /// Current longitude.
    Longitude = 5,
    /// Height above mean sea level.
    Hmsl = 6,
    /// Height above the takeoff point.
    Hagl = 7,
    /// Takeoff latitude.
    TakeoffLatitude = 8,
    /// Takeoff longitude.
    TakeoffLongitude = 9,
    /// Horizontal ground speed.
    HorizontalSpeed = 10,
    /// Route (true course).
    Route = 11,
    /// Reserved for future use.
    Unknown,
}

impl From<u8> for FieldType {
    fn from(value: u8) -> Self {
        match value {
            1 => Self::ProtocolVersion,
            2 => Self::IdFr,
            3 => Self::IdAnsi,
            4 => Self::Latitude,
            5 => Self::Longitude,
            6 => Self::Hmsl,
            7 => Self::Hagl,
            8 => Self::TakeoffLatitude,
            9 => Self::TakeoffLongitude,
            10 => Self::HorizontalSpeed,
            11 => Self::Route,
            _ => Self::Unknown,
        }
    }
}

impl core::fmt::Display for FieldType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ProtocolVersion => write!(f, "Protocol Version"),
            Self::IdFr => write!(f, "French ID"),
            Self::IdAnsi => write!(f, "ANSI ID"),
            Self::Hmsl => write!(f, "HMSL"),
            Self::Hagl => write!(f, "HAGL"),
            Self::TakeoffLatitude => write!(f, "Takeoff Latitude"),
            Self::TakeoffLongitude => write!(f, "Takeoff Longitude"),
            Self::HorizontalSpeed => write!(f, "Horizontal Speed"),
            _ => write!(f, "{:?}", self),
        }
    }
}

/// An [`Iterator`] over [`RemoteIdRecord`].
///
/// Iteration ends when the body is exhausted, or at the first record whose
/// header or value does not fit in what is left of the body. In the latter
/// case [`RemoteIdRecordsIterator::truncated`] returns `true`.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct RemoteIdRecordsIterator<'f> {
    data: &'f [u8],
    offset: usize,
    terminated: bool,
}

impl<'f> RemoteIdRecordsIterator<'f> {
    /// Create a new [`RemoteIdRecordsIterator`].
    pub fn new(data: &'f [u8]) -> Self {
        Self {
            data,
            offset: 0,
            terminated: data.is_empty(),
        }
    }

    /// Return the offset of the iterator.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns `true` when iteration stopped before the end of the body.
    pub fn truncated(&self) -> bool {
        self.terminated && self.offset < self.data.len()
    }
}

impl<'f> Iterator for RemoteIdRecordsIterator<'f> {
    type Item = RemoteIdRecord<&'f [u8]>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.terminated {
            return None;
        }

        let Ok(record) = RemoteIdRecord::new(&self.data[self.offset..]) else {
            self.terminated = true;
            return None;
        };
        let len = record.buffer_len();

        let record = RemoteIdRecord {
            data: &self.data[self.offset..][..len],
        };

        self.offset += len;

        if self.offset >= self.data.len() {
            self.terminated = true;
        }

        Some(record)
    }
}
