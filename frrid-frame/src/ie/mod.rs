//! 802.11 Information Element readers and writers.

mod ssid;
pub use ssid::*;

mod vendor;
pub use vendor::*;

use super::{Error, Result};

/// A reader/writer for an 802.11 Information Element.
/// ```notrust
/// +------------+--------+-------------------------+
/// | Element ID | Length | Content (0-255 octets)..|
/// +------------+--------+-------------------------+
/// 0            1        2
/// ```
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub struct InformationElement<T: AsRef<[u8]>> {
    data: T,
}

impl<T: AsRef<[u8]>> InformationElement<T> {
    /// Create a new [`InformationElement`] reader/writer from a given buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer cannot hold the header, or is shorter
    /// than the length announced in the header.
    pub fn new(data: T) -> Result<Self> {
        let ie = Self::new_unchecked(data);

        if !ie.check_len() {
            return Err(Error);
        }

        Ok(ie)
    }

    /// Returns `false` if the buffer is too short to contain the Information
    /// Element.
    fn check_len(&self) -> bool {
        let data = self.data.as_ref();
        data.len() >= 2 && data.len() >= self.buffer_len()
    }

    /// Create a new [`InformationElement`] reader/writer from a given buffer
    /// without length checking.
    pub fn new_unchecked(data: T) -> Self {
        Self { data }
    }

    /// Return the raw element ID.
    pub fn id(&self) -> u8 {
        self.data.as_ref()[0]
    }

    /// Return the [`ElementId`].
    pub fn element_id(&self) -> ElementId {
        ElementId::from(self.id())
    }

    /// Return the length field value (which is the length of the content
    /// field).
    pub fn length(&self) -> usize {
        self.data.as_ref()[1] as usize
    }

    /// Return the number of octets the element occupies, header included.
    pub fn buffer_len(&self) -> usize {
        2 + self.length()
    }

    /// Return the content of this Information Element.
    pub fn content(&self) -> &[u8] {
        &self.data.as_ref()[2..][..self.length()]
    }
}

impl<'f> InformationElement<&'f [u8]> {
    /// Return the content of this Information Element, borrowed for as long as
    /// the underlying buffer.
    pub fn value(&self) -> &'f [u8] {
        let data: &'f [u8] = self.data;
        &data[2..][..self.length()]
    }
}

impl<T: AsRef<[u8]> + AsMut<[u8]>> InformationElement<T> {
    /// Set the element ID field.
    pub fn set_id(&mut self, id: u8) {
        self.data.as_mut()[0] = id;
    }

    /// Set the length field.
    pub fn set_length(&mut self, len: u8) {
        self.data.as_mut()[1] = len;
    }

    /// Return a mutable reference to the content of this Information Element.
    pub fn content_mut(&mut self) -> &mut [u8] {
        &mut self.data.as_mut()[2..]
    }
}

impl<T: AsRef<[u8]>> core::fmt::Display for InformationElement<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.element_id() {
            ElementId::Ssid => match core::str::from_utf8(self.content()) {
                Ok(ssid) => write!(f, "Ssid({ssid:?})"),
                Err(_) => write!(f, "Ssid({:0x?})", self.content()),
            },
            ElementId::VendorSpecific => {
                let Ok(vendor) = VendorSpecific::new(self.content()) else {
                    return write!(f, "VendorSpecific({:0x?})", self.content());
                };
                write!(f, "VendorSpecific {vendor}")
            }
            ElementId::Unknown => write!(f, "Unknown[{}]({:0x?})", self.id(), self.content()),
            id => write!(f, "{:?}({:0x?})", id, self.content()),
        }
    }
}

/// 802.11 Element ID.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub enum ElementId {
    /// Service Set Identity.
    Ssid = 0,
    /// Supported Rates and BSS Membership Selectors.
    SupportedRates = 1,
    /// DSSS Parameter Set.
    DsParameterSet = 3,
    /// Traffic Indication Map.
    Tim = 5,
    /// Country.
    Country = 7,
    /// BSS Load.
    BssLoad = 11,
    /// ERP Information.
    ErpInformation = 42,
    /// HT Capabilities.
    HtCapabilities = 45,
    /// Robust Security Network.
    Rsn = 48,
    /// Extended Supported Rates and BSS Membership Selectors.
    ExtendedSupportedRates = 50,
    /// HT Operation.
    HtOperation = 61,
    /// Extended Capabilities.
    ExtendedCapabilities = 127,
    /// Vendor Specific.
    VendorSpecific = 0xdd,
    /// Element ID Extension.
    Extension = 0xff,
    /// Any other element.
    Unknown,
}

impl From<u8> for ElementId {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::Ssid,
            1 => Self::SupportedRates,
            3 => Self::DsParameterSet,
            5 => Self::Tim,
            7 => Self::Country,
            11 => Self::BssLoad,
            42 => Self::ErpInformation,
            45 => Self::HtCapabilities,
            48 => Self::Rsn,
            50 => Self::ExtendedSupportedRates,
            61 => Self::HtOperation,
            127 => Self::ExtendedCapabilities,
            0xdd => Self::VendorSpecific,
            0xff => Self::Extension,
            _ => Self::Unknown,
        }
    }
}

/// Read the element starting at `offset` in `buffer`.
///
/// Returns the element together with the offset of the next one, or `None`
/// when fewer than 2 octets remain or when the announced length runs past the
/// end of the buffer. The returned element never reaches beyond its own
/// content.
pub fn next_element(buffer: &[u8], offset: usize) -> Option<(InformationElement<&[u8]>, usize)> {
    let rest = buffer.get(offset..)?;
    let ie = InformationElement::new(rest).ok()?;
    let len = ie.buffer_len();

    Some((InformationElement::new_unchecked(&rest[..len]), offset + len))
}

/// An [`Iterator`] over [`InformationElement`].
///
/// Iteration stops at the first element whose header or content does not fit
/// in the buffer; trailing bytes are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InformationElementsIterator<'f> {
    data: &'f [u8],
    offset: usize,
    terminated: bool,
}

impl<'f> InformationElementsIterator<'f> {
    /// Create a new [`InformationElementsIterator`].
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
}

impl<'f> Iterator for InformationElementsIterator<'f> {
    type Item = InformationElement<&'f [u8]>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.terminated {
            return None;
        }

        let Some((ie, offset)) = next_element(self.data, self.offset) else {
            self.terminated = true;
            return None;
        };

        self.offset = offset;

        if self.offset >= self.data.len() {
            self.terminated = true;
        }

        Some(ie)
    }
}
