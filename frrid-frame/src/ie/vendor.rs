use super::{ElementId, InformationElement};
use super::{Error, Result};

/// An Organizationally Unique Identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub struct Oui(pub [u8; 3]);

impl Oui {
    /// The French defense authority, which assigns the Remote ID vendor
    /// element.
    pub const FRENCH_DEFENSE: Oui = Oui([0x6a, 0x5c, 0x35]);

    /// Return the OUI octets.
    pub const fn as_bytes(&self) -> &[u8; 3] {
        &self.0
    }
}

impl Default for Oui {
    fn default() -> Self {
        Self::FRENCH_DEFENSE
    }
}

impl From<[u8; 3]> for Oui {
    fn from(value: [u8; 3]) -> Self {
        Self(value)
    }
}

impl core::str::FromStr for Oui {
    type Err = Error;

    /// Parse `6a5c35`, `6a:5c:35` or `6A-5C-35`.
    fn from_str(s: &str) -> Result<Self> {
        let mut oui = [0u8; 3];
        let mut digits = s.bytes().filter(|b| *b != b':' && *b != b'-');

        for octet in oui.iter_mut() {
            let (Some(hi), Some(lo)) = (digits.next(), digits.next()) else {
                return Err(Error);
            };
            let hi = (hi as char).to_digit(16).ok_or(Error)?;
            let lo = (lo as char).to_digit(16).ok_or(Error)?;
            *octet = ((hi << 4) | lo) as u8;
        }

        if digits.next().is_some() {
            return Err(Error);
        }

        Ok(Self(oui))
    }
}

impl core::fmt::Display for Oui {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:02x}:{:02x}:{:02x}", self.0[0], self.0[1], self.0[2])
    }
}

/// A reader/writer for the content of a Vendor Specific element.
/// ```notrust
/// +-----+----------+------------------+
/// | OUI | Sub-type | Body...          |
/// +-----+----------+------------------+
/// 0     3          4
/// ```
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub struct VendorSpecific<T: AsRef<[u8]>> {
    data: T,
}

impl<T: AsRef<[u8]>> VendorSpecific<T> {
    /// Create a new [`VendorSpecific`] reader/writer from the content of a
    /// Vendor Specific element.
    ///
    /// # Errors
    ///
    /// Returns an error if the content cannot hold an OUI and a sub-type.
    pub fn new(data: T) -> Result<Self> {
        let vendor = Self::new_unchecked(data);

        if !vendor.check_len() {
            return Err(Error);
        }

        Ok(vendor)
    }

    /// Returns `false` if the buffer is too short.
    fn check_len(&self) -> bool {
        self.data.as_ref().len() >= 4
    }

    /// Create a new [`VendorSpecific`] reader/writer without length checking.
    pub fn new_unchecked(data: T) -> Self {
        Self { data }
    }

    /// Return the [`Oui`].
    pub fn oui(&self) -> Oui {
        let b = &self.data.as_ref()[..3];
        Oui([b[0], b[1], b[2]])
    }

    /// Return the vendor sub-type.
    pub fn sub_type(&self) -> u8 {
        self.data.as_ref()[3]
    }

    /// Return the body following the sub-type.
    pub fn body(&self) -> &[u8] {
        &self.data.as_ref()[4..]
    }
}

impl<T: AsRef<[u8]> + AsMut<[u8]>> VendorSpecific<T> {
    /// Set the [`Oui`].
    pub fn set_oui(&mut self, oui: Oui) {
        self.data.as_mut()[..3].copy_from_slice(&oui.0);
    }

    /// Set the vendor sub-type.
    pub fn set_sub_type(&mut self, sub_type: u8) {
        self.data.as_mut()[3] = sub_type;
    }

    /// Return a mutable reference to the body.
    pub fn body_mut(&mut self) -> &mut [u8] {
        &mut self.data.as_mut()[4..]
    }
}

impl<'f> VendorSpecific<&'f [u8]> {
    /// Return the body, borrowed for as long as the underlying buffer.
    pub fn payload(&self) -> &'f [u8] {
        let data: &'f [u8] = self.data;
        &data[4..]
    }
}

impl<T: AsRef<[u8]>> core::fmt::Display for VendorSpecific<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "OUI: {}, sub-type: {}, {} octets",
            self.oui(),
            self.sub_type(),
            self.body().len()
        )
    }
}

/// Return the vendor content of `element` if it is a Vendor Specific element
/// issued by `authority`.
///
/// Elements of another kind, elements too short to hold an OUI and a
/// sub-type, and elements of another organization all give `None`.
pub fn match_vendor<'f>(
    element: &InformationElement<&'f [u8]>,
    authority: Oui,
) -> Option<VendorSpecific<&'f [u8]>> {
    if element.element_id() != ElementId::VendorSpecific {
        return None;
    }

    let vendor = VendorSpecific::new(element.value()).ok()?;

    (vendor.oui() == authority).then_some(vendor)
}
