use crate::{
    FieldSpec, FieldType, Identifier, RemoteIdField, RemoteIdRecord, RemoteIdRecordsIterator,
    RemoteIdResult, PROTOCOL_VERSION,
};
use crate::{Error, Result};

use heapless::Vec;

impl RemoteIdField {
    /// Return the length of the value when emitted.
    pub fn value_len(&self) -> usize {
        match self {
            Self::ProtocolVersion(_) | Self::HorizontalSpeed(_) => 1,
            Self::IdFr(id) | Self::IdAnsi(id) => id.raw().len(),
            Self::Latitude(_)
            | Self::Longitude(_)
            | Self::TakeoffLatitude(_)
            | Self::TakeoffLongitude(_) => 4,
            Self::Hmsl(_) | Self::Hagl(_) | Self::Route(_) => 2,
        }
    }

    /// Return the length of the record when emitted, header included.
    pub fn buffer_len(&self) -> usize {
        2 + self.value_len()
    }

    /// Emit the field as a record.
    pub fn emit(&self, record: &mut RemoteIdRecord<&mut [u8]>) {
        record.set_code(self.field_type() as u8);
        record.set_length(self.value_len() as u8);

        let value = record.value_mut();
        match self {
            Self::ProtocolVersion(version) => value[0] = *version,
            Self::HorizontalSpeed(speed) => value[0] = *speed,
            Self::IdFr(id) | Self::IdAnsi(id) => value[..id.raw().len()].copy_from_slice(id.raw()),
            Self::Latitude(c)
            | Self::Longitude(c)
            | Self::TakeoffLatitude(c)
            | Self::TakeoffLongitude(c) => value[..4].copy_from_slice(&c.raw().to_be_bytes()),
            Self::Hmsl(h) | Self::Hagl(h) => value[..2].copy_from_slice(&h.to_be_bytes()),
            Self::Route(route) => value[..2].copy_from_slice(&route.to_be_bytes()),
        }
    }
}

/// A high-level representation of the Remote ID records of a vendor specific
/// element, in wire order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RemoteIdRepr {
    /// The fields, in the order they are emitted.
    pub fields: Vec<RemoteIdField, 16>,
}

#[cfg(feature = "fuzz")]
impl arbitrary::Arbitrary<'_> for RemoteIdRepr {
    fn arbitrary(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<Self> {
        let mut fields = Vec::new();

        for _ in 0..u.int_in_range(0..=15)? {
            fields
                .push(RemoteIdField::arbitrary(u)?)
                .map_err(|_| arbitrary::Error::IncorrectFormat)?;
        }

        Ok(Self { fields })
    }
}

impl RemoteIdRepr {
    /// Parse the records of a vendor specific element body.
    ///
    /// Only records that decode are kept. Parsing stops after 16 fields.
    pub fn parse(body: &[u8]) -> Self {
        let mut fields = Vec::new();

        for record in RemoteIdRecordsIterator::new(body) {
            let Some(spec) = FieldSpec::lookup(record.code()) else {
                continue;
            };

            if !spec.size.accepts(record.length()) {
                continue;
            }

            if let Ok(field) = (spec.decode)(record.value()) {
                if fields.push(field).is_err() {
                    break;
                }
            }
        }

        Self { fields }
    }

    /// Add a field.
    ///
    /// # Errors
    ///
    /// Returns an error if 16 fields are already present.
    pub fn push(&mut self, field: RemoteIdField) -> Result<()> {
        self.fields.push(field).map_err(|_| Error)
    }

    /// Validate that every field would be decoded back.
    pub fn validate(&self) -> Result<()> {
        for field in self.fields.iter() {
            match field {
                RemoteIdField::ProtocolVersion(version) if *version != PROTOCOL_VERSION => {
                    return Err(Error)
                }
                RemoteIdField::IdFr(id) if id.raw().len() != Identifier::CAPACITY => {
                    return Err(Error)
                }
                _ => (),
            }
        }

        Ok(())
    }

    /// Return the [`RemoteIdResult`] decoding these fields gives.
    pub fn to_result(&self) -> RemoteIdResult {
        let mut result = RemoteIdResult::default();

        for field in self.fields.iter() {
            result.insert(field.clone());
        }

        result
    }

    /// Returns `true` if a field of the given type is present.
    pub fn contains(&self, field_type: FieldType) -> bool {
        self.fields.iter().any(|f| f.field_type() == field_type)
    }

    /// Return the length of the records when emitted.
    pub fn buffer_len(&self) -> usize {
        self.fields.iter().map(RemoteIdField::buffer_len).sum()
    }

    /// Emit the records into a buffer.
    pub fn emit(&self, buffer: &mut [u8]) {
        let mut offset = 0;

        for field in self.fields.iter() {
            field.emit(&mut RemoteIdRecord::new_unchecked(&mut buffer[offset..]));
            offset += field.buffer_len();
        }
    }
}
