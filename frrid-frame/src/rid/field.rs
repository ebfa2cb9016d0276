use super::FieldType;
use super::{Error, Result};

/// A latitude or longitude, in units of 10^-5 degrees.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub struct Coordinate(pub i32);

impl Coordinate {
    /// Number of raw units in one degree.
    pub const SCALE: f64 = 100_000.0;

    /// Create a coordinate from degrees, truncating toward zero.
    pub fn from_degrees(degrees: f64) -> Self {
        Self((degrees * Self::SCALE) as i32)
    }

    /// Return the raw value as carried on the wire.
    pub const fn raw(&self) -> i32 {
        self.0
    }

    /// Return the coordinate in degrees.
    pub fn degrees(&self) -> f64 {
        self.0 as f64 / Self::SCALE
    }
}

impl core::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:.5}°", self.degrees())
    }
}

/// A drone identifier of at most 30 octets.
///
/// French identifiers are exactly 30 octets: a 3 octet manufacturer code, a 3
/// octet model code and a 24 octet serial number, left padded. ANSI/CTA-2063
/// serial numbers may be shorter.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    bytes: heapless::Vec<u8, 30>,
}

impl Identifier {
    /// Maximum length of an identifier.
    pub const CAPACITY: usize = 30;

    /// Create an identifier by copying `bytes`.
    ///
    /// # Errors
    ///
    /// Returns an error if `bytes` is longer than [`Identifier::CAPACITY`].
    pub fn new(bytes: &[u8]) -> Result<Self> {
        Ok(Self {
            bytes: heapless::Vec::from_slice(bytes).map_err(|_| Error)?,
        })
    }

    /// Return all the octets as received.
    pub fn raw(&self) -> &[u8] {
        &self.bytes
    }

    /// Return the octets up to the first NUL.
    pub fn as_bytes(&self) -> &[u8] {
        let end = self
            .bytes
            .iter()
            .position(|b| *b == 0)
            .unwrap_or(self.bytes.len());
        &self.bytes[..end]
    }

    /// Return the identifier as text, if it is valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        core::str::from_utf8(self.as_bytes()).ok()
    }

    /// Returns `true` if no octets were received.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Return the manufacturer code of a French identifier.
    pub fn manufacturer(&self) -> Option<&[u8]> {
        self.french().map(|id| &id[..3])
    }

    /// Return the model code of a French identifier.
    pub fn model(&self) -> Option<&[u8]> {
        self.french().map(|id| &id[3..6])
    }

    /// Return the serial number of a French identifier, up to the first NUL.
    pub fn serial(&self) -> Option<&[u8]> {
        self.french().map(|id| {
            let serial = &id[6..];
            let end = serial.iter().position(|b| *b == 0).unwrap_or(serial.len());
            &serial[..end]
        })
    }

    fn french(&self) -> Option<&[u8]> {
        (self.bytes.len() == Self::CAPACITY).then_some(&self.bytes[..])
    }
}

impl core::fmt::Display for Identifier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for b in self.as_bytes() {
            if b.is_ascii_graphic() || *b == b' ' {
                write!(f, "{}", *b as char)?;
            } else {
                write!(f, "\\x{:02x}", b)?;
            }
        }

        Ok(())
    }
}

#[cfg(feature = "fuzz")]
impl arbitrary::Arbitrary<'_> for Identifier {
    fn arbitrary(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<Self> {
        let len = u.int_in_range(0..=Self::CAPACITY)?;
        Self::new(u.bytes(len)?).map_err(|_| arbitrary::Error::IncorrectFormat)
    }
}

/// A decoded Remote ID field.
///
/// Heights above sea level and above the takeoff point are two independent
/// fields. Transmitters normally send only one of them, but both are kept
/// when both are present.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub enum RemoteIdField {
    /// Protocol version.
    ProtocolVersion(u8),
    /// French identifier.
    IdFr(Identifier),
    /// ANSI/CTA-2063 physical serial number.
    IdAnsi(Identifier),
    /// Current latitude.
    Latitude(Coordinate),
    /// Current longitude.
    Longitude(Coordinate),
    /// Height above mean sea level, in meters.
    Hmsl(i16),
    /// Height above the takeoff point, in meters.
    Hagl(i16),
    /// Takeoff latitude.
    TakeoffLatitude(Coordinate),
    /// Takeoff longitude.
    TakeoffLongitude(Coordinate),
    /// Horizontal ground speed, in meters per second.
    HorizontalSpeed(u8),
    /// Route, in degrees clockwise from true north.
    Route(u16),
}

impl RemoteIdField {
    /// Return the [`FieldType`] of this field.
    pub fn field_type(&self) -> FieldType {
        match self {
            Self::ProtocolVersion(_) => FieldType::ProtocolVersion,
            Self::IdFr(_) => FieldType::IdFr,
            Self::IdAnsi(_) => FieldType::IdAnsi,
            Self::Latitude(_) => FieldType::Latitude,
            Self::Longitude(_) => FieldType::Longitude,
            Self::Hmsl(_) => FieldType::Hmsl,
            Self::Hagl(_) => FieldType::Hagl,
            Self::TakeoffLatitude(_) => FieldType::TakeoffLatitude,
            Self::TakeoffLongitude(_) => FieldType::TakeoffLongitude,
            Self::HorizontalSpeed(_) => FieldType::HorizontalSpeed,
            Self::Route(_) => FieldType::Route,
        }
    }
}

impl core::fmt::Display for RemoteIdField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let field_type = self.field_type();
        match self {
            Self::ProtocolVersion(version) => write!(f, "{field_type}: {version}"),
            Self::IdFr(id) | Self::IdAnsi(id) => write!(f, "{field_type}: {id}"),
            Self::Latitude(c)
            | Self::Longitude(c)
            | Self::TakeoffLatitude(c)
            | Self::TakeoffLongitude(c) => write!(f, "{field_type}: {c}"),
            Self::Hmsl(h) | Self::Hagl(h) => write!(f, "{field_type}: {h} m"),
            Self::HorizontalSpeed(speed) => write!(f, "{field_type}: {speed} m/s"),
            Self::Route(route) => write!(f, "{field_type}: {route}°"),
        }
    }
}
