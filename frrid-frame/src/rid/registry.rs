use super::{Anomalies, Coordinate, FieldType, Identifier, RemoteIdField};

/// Encoded size accepted for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSize {
    /// The value must be exactly this long.
    Exact(usize),
    /// The value may be anything up to this long.
    AtMost(usize),
}

impl FieldSize {
    /// Returns `true` if a value of `len` octets has an acceptable size.
    pub fn accepts(&self, len: usize) -> bool {
        match *self {
            Self::Exact(size) => len == size,
            Self::AtMost(size) => len <= size,
        }
    }
}

/// How a field type is encoded on the wire.
#[derive(Clone, Copy)]
pub struct FieldSpec {
    /// The field type.
    pub field_type: FieldType,
    /// The accepted size of the value.
    pub size: FieldSize,
    /// Decode a value whose size was accepted by [`FieldSpec::size`].
    pub decode: fn(&[u8]) -> core::result::Result<RemoteIdField, Anomalies>,
}

impl FieldSpec {
    /// Look up the entry of `code` in [`REGISTRY`].
    ///
    /// Reserved and unknown codes have no entry.
    pub fn lookup(code: u8) -> Option<&'static FieldSpec> {
        REGISTRY.iter().find(|spec| spec.field_type as u8 == code)
    }
}

/// The only protocol version this decoder understands.
pub const PROTOCOL_VERSION: u8 = 0x01;

/// Every known field type, in type code order.
pub static REGISTRY: [FieldSpec; 11] = [
    FieldSpec {
        field_type: FieldType::ProtocolVersion,
        size: FieldSize::Exact(1),
        decode: decode_protocol_version,
    },
    FieldSpec {
        field_type: FieldType::IdFr,
        size: FieldSize::Exact(Identifier::CAPACITY),
        decode: |v| french_identifier(v).map(RemoteIdField::IdFr),
    },
    FieldSpec {
        field_type: FieldType::IdAnsi,
        size: FieldSize::AtMost(Identifier::CAPACITY),
        decode: |v| identifier(v).map(RemoteIdField::IdAnsi),
    },
    FieldSpec {
        field_type: FieldType::Latitude,
        size: FieldSize::Exact(4),
        decode: |v| coordinate(v).map(RemoteIdField::Latitude),
    },
    FieldSpec {
        field_type: FieldType::Longitude,
        size: FieldSize::Exact(4),
        decode: |v| coordinate(v).map(RemoteIdField::Longitude),
    },
    FieldSpec {
        field_type: FieldType::Hmsl,
        size: FieldSize::Exact(2),
        decode: |v| height(v).map(RemoteIdField::Hmsl),
    },
    FieldSpec {
        field_type: FieldType::Hagl,
        size: FieldSize::Exact(2),
        decode: |v| height(v).map(RemoteIdField::Hagl),
    },
    FieldSpec {
        field_type: FieldType::TakeoffLatitude,
        size: FieldSize::Exact(4),
        decode: |v| coordinate(v).map(RemoteIdField::TakeoffLatitude),
    },
    FieldSpec {
        field_type: FieldType::TakeoffLongitude,
        size: FieldSize::Exact(4),
        decode: |v| coordinate(v).map(RemoteIdField::TakeoffLongitude),
    },
    FieldSpec {
        field_type: FieldType::HorizontalSpeed,
        size: FieldSize::Exact(1),
        decode: |v| match v {
            [speed] => Ok(RemoteIdField::HorizontalSpeed(*speed)),
            _ => Err(Anomalies::SizeMismatch),
        },
    },
    FieldSpec {
        field_type: FieldType::Route,
        size: FieldSize::Exact(2),
        decode: |v| match v {
            [hi, lo] => Ok(RemoteIdField::Route(u16::from_be_bytes([*hi, *lo]))),
            _ => Err(Anomalies::SizeMismatch),
        },
    },
];

fn decode_protocol_version(value: &[u8]) -> core::result::Result<RemoteIdField, Anomalies> {
    match value {
        [PROTOCOL_VERSION] => Ok(RemoteIdField::ProtocolVersion(PROTOCOL_VERSION)),
        [_] => Err(Anomalies::UnsupportedVersion),
        _ => Err(Anomalies::SizeMismatch),
    }
}

fn identifier(value: &[u8]) -> core::result::Result<Identifier, Anomalies> {
    Identifier::new(value).map_err(|_| Anomalies::SizeMismatch)
}

fn french_identifier(value: &[u8]) -> core::result::Result<Identifier, Anomalies> {
    if value.len() != Identifier::CAPACITY {
        return Err(Anomalies::SizeMismatch);
    }

    identifier(value)
}

fn coordinate(value: &[u8]) -> core::result::Result<Coordinate, Anomalies> {
    match <[u8; 4]>::try_from(value) {
        Ok(raw) => Ok(Coordinate(i32::from_be_bytes(raw))),
        Err(_) => Err(Anomalies::SizeMismatch),
    }
}

fn height(value: &[u8]) -> core::result::Result<i16, Anomalies> {
    match <[u8; 2]>::try_from(value) {
        Ok(raw) => Ok(i16::from_be_bytes(raw)),
        Err(_) => Err(Anomalies::SizeMismatch),
    }
}
