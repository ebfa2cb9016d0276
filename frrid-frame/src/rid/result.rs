use super::{Coordinate, FieldType, Identifier, RemoteIdField};
use bitflags::bitflags;

bitflags! {
    /// Fields decoded from a Remote ID payload, one bit per field type at
    /// `1 << type code`.
    #[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
    pub struct Presence: u16 {
        /// Protocol version.
        const ProtocolVersion = 1 << 1;
        /// French identifier.
        const IdFr = 1 << 2;
        /// ANSI/CTA-2063 identifier.
        const IdAnsi = 1 << 3;
        /// Latitude.
        const Latitude = 1 << 4;
        /// Longitude.
        const Longitude = 1 << 5;
        /// Height above mean sea level.
        const Hmsl = 1 << 6;
        /// Height above the takeoff point.
        const Hagl = 1 << 7;
        /// Takeoff latitude.
        const TakeoffLatitude = 1 << 8;
        /// Takeoff longitude.
        const TakeoffLongitude = 1 << 9;
        /// Horizontal speed.
        const HorizontalSpeed = 1 << 10;
        /// Route.
        const Route = 1 << 11;
    }
}

impl core::fmt::Debug for Presence {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

impl From<FieldType> for Presence {
    fn from(value: FieldType) -> Self {
        match value {
            FieldType::Unknown => Self::empty(),
            field_type => Self::from_bits_truncate(1 << field_type as u16),
        }
    }
}

bitflags! {
    /// Irregularities met while decoding a Remote ID payload.
    ///
    /// None of them stops decoding; they only lower the confidence one can
    /// have in the result.
    #[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
    pub struct Anomalies: u8 {
        /// The payload ended in the middle of a record.
        const Truncated = 0b0000_0001;
        /// A known record had a length its type does not allow.
        const SizeMismatch = 0b0000_0010;
        /// The protocol version is not supported.
        const UnsupportedVersion = 0b0000_0100;
    }
}

impl core::fmt::Debug for Anomalies {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

/// The fields decoded from one Remote ID payload.
///
/// A value can only be read when its field was present in the payload; the
/// accessors return `None` otherwise. French and ANSI identifiers share one
/// slot, see [`RemoteIdResult::id`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RemoteIdResult {
    id: Identifier,
    protocol_version: u8,
    latitude: Coordinate,
    longitude: Coordinate,
    hmsl: i16,
    hagl: i16,
    takeoff_latitude: Coordinate,
    takeoff_longitude: Coordinate,
    horizontal_speed: u8,
    route: u16,
    presence: Presence,
    anomalies: Anomalies,
}

impl RemoteIdResult {
    /// Return the fields that were present.
    pub fn presence(&self) -> Presence {
        self.presence
    }

    /// Return the irregularities met while decoding.
    pub fn anomalies(&self) -> Anomalies {
        self.anomalies
    }

    /// Returns `true` if no field was decoded.
    pub fn is_empty(&self) -> bool {
        self.presence.is_empty()
    }

    /// Return the protocol version.
    pub fn protocol_version(&self) -> Option<u8> {
        self.get(Presence::ProtocolVersion, self.protocol_version)
    }

    /// Return the drone identifier.
    ///
    /// This is the French identifier when one was received, the ANSI/CTA-2063
    /// identifier otherwise. An ANSI identifier following a French one is
    /// ignored.
    pub fn id(&self) -> Option<&Identifier> {
        (self.presence.intersects(Presence::IdFr | Presence::IdAnsi)).then_some(&self.id)
    }

    /// Return the French identifier.
    pub fn id_fr(&self) -> Option<&Identifier> {
        self.presence.contains(Presence::IdFr).then_some(&self.id)
    }

    /// Return the latitude.
    pub fn latitude(&self) -> Option<Coordinate> {
        self.get(Presence::Latitude, self.latitude)
    }

    /// Return the longitude.
    pub fn longitude(&self) -> Option<Coordinate> {
        self.get(Presence::Longitude, self.longitude)
    }

    /// Return the height above mean sea level, in meters.
    pub fn hmsl(&self) -> Option<i16> {
        self.get(Presence::Hmsl, self.hmsl)
    }

    /// Return the height above the takeoff point, in meters.
    pub fn hagl(&self) -> Option<i16> {
        self.get(Presence::Hagl, self.hagl)
    }

    /// Return the takeoff latitude.
    pub fn takeoff_latitude(&self) -> Option<Coordinate> {
        self.get(Presence::TakeoffLatitude, self.takeoff_latitude)
    }

    /// Return the takeoff longitude.
    pub fn takeoff_longitude(&self) -> Option<Coordinate> {
        self.get(Presence::TakeoffLongitude, self.takeoff_longitude)
    }

    /// Return the horizontal speed, in meters per second.
    pub fn horizontal_speed(&self) -> Option<u8> {
        self.get(Presence::HorizontalSpeed, self.horizontal_speed)
    }

    /// Return the route, in degrees.
    pub fn route(&self) -> Option<u16> {
        self.get(Presence::Route, self.route)
    }

    fn get<V>(&self, field: Presence, value: V) -> Option<V> {
        self.presence.contains(field).then_some(value)
    }

    /// Store a decoded field and mark it present.
    ///
    /// Returns `false` when the field was ignored, which only happens to an
    /// ANSI identifier received after a French one.
    pub(crate) fn insert(&mut self, field: RemoteIdField) -> bool {
        let presence = Presence::from(field.field_type());

        match field {
            RemoteIdField::ProtocolVersion(version) => self.protocol_version = version,
            RemoteIdField::IdFr(id) => self.id = id,
            RemoteIdField::IdAnsi(_) if self.presence.contains(Presence::IdFr) => return false,
            RemoteIdField::IdAnsi(id) => self.id = id,
            RemoteIdField::Latitude(c) => self.latitude = c,
            RemoteIdField::Longitude(c) => self.longitude = c,
            RemoteIdField::Hmsl(h) => self.hmsl = h,
            RemoteIdField::Hagl(h) => self.hagl = h,
            RemoteIdField::TakeoffLatitude(c) => self.takeoff_latitude = c,
            RemoteIdField::TakeoffLongitude(c) => self.takeoff_longitude = c,
            RemoteIdField::HorizontalSpeed(speed) => self.horizontal_speed = speed,
            RemoteIdField::Route(route) => self.route = route,
        }

        self.presence |= presence;
        true
    }

    /// Record an irregularity.
    pub(crate) fn flag(&mut self, anomalies: Anomalies) {
        self.anomalies |= anomalies;
    }
}

impl core::fmt::Display for RemoteIdResult {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if let Some(version) = self.protocol_version() {
            writeln!(f, "PROTOCOL: {version}")?;
        }

        if let Some(id) = self.id_fr() {
            writeln!(f, "FR_ID: {id}")?;
        } else if let Some(id) = self.id() {
            writeln!(f, "ANSI_ID: {id}")?;
        }

        if let Some(latitude) = self.latitude() {
            writeln!(f, "LAT: {:.6}", latitude.degrees())?;
        }

        if let Some(longitude) = self.longitude() {
            writeln!(f, "LON: {:.6}", longitude.degrees())?;
        }

        if let Some(hmsl) = self.hmsl() {
            writeln!(f, "HMSL: {hmsl}")?;
        }

        if let Some(hagl) = self.hagl() {
            writeln!(f, "HAGL: {hagl}")?;
        }

        if let Some(latitude) = self.takeoff_latitude() {
            writeln!(f, "LAT TO: {:.6}", latitude.degrees())?;
        }

        if let Some(longitude) = self.takeoff_longitude() {
            writeln!(f, "LON TO: {:.6}", longitude.degrees())?;
        }

        if let Some(speed) = self.horizontal_speed() {
            writeln!(f, "H SPEED: {speed}")?;
        }

        if let Some(route) = self.route() {
            writeln!(f, "ROUTE: {route}")?;
        }

        Ok(())
    }
}
