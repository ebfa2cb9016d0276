use super::RemoteIdRepr;
use crate::{ElementId, InformationElement, Oui, Ssid, VendorSpecific};
use crate::{Error, Result};

/// A high-level representation of a Vendor Specific element carrying Remote
/// ID records.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub struct VendorSpecificRepr {
    /// The OUI of the organization.
    pub oui: Oui,
    /// The vendor sub-type.
    pub sub_type: u8,
    /// The Remote ID records.
    pub remote_id: RemoteIdRepr,
}

impl VendorSpecificRepr {
    /// Parse a Vendor Specific element.
    pub fn parse(vendor: &VendorSpecific<&[u8]>) -> Self {
        Self {
            oui: vendor.oui(),
            sub_type: vendor.sub_type(),
            remote_id: RemoteIdRepr::parse(vendor.body()),
        }
    }

    /// Return the length of the element content when emitted.
    pub fn buffer_len(&self) -> usize {
        4 + self.remote_id.buffer_len()
    }

    /// Emit the element content.
    pub fn emit(&self, vendor: &mut VendorSpecific<&mut [u8]>) {
        vendor.set_oui(self.oui);
        vendor.set_sub_type(self.sub_type);
        self.remote_id.emit(vendor.body_mut());
    }
}

/// A high-level representation of an Information Element.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub enum InformationElementRepr {
    /// Service Set Identity.
    Ssid(Ssid),
    /// Vendor Specific element.
    VendorSpecific(VendorSpecificRepr),
}

impl InformationElementRepr {
    /// Parse an Information Element.
    ///
    /// # Errors
    ///
    /// Returns an error for elements that are neither an SSID nor a Vendor
    /// Specific element, and for malformed ones.
    pub fn parse(ie: &InformationElement<&[u8]>) -> Result<Self> {
        match ie.element_id() {
            ElementId::Ssid => Ok(Self::Ssid(Ssid::new(ie.content())?)),
            ElementId::VendorSpecific => Ok(Self::VendorSpecific(VendorSpecificRepr::parse(
                &VendorSpecific::new(ie.content())?,
            ))),
            _ => Err(Error),
        }
    }

    fn content_len(&self) -> usize {
        match self {
            Self::Ssid(ssid) => ssid.as_bytes().len(),
            Self::VendorSpecific(vendor) => vendor.buffer_len(),
        }
    }

    /// Validate that the element fits in an Information Element and that its
    /// Remote ID records would be decoded back.
    pub fn validate(&self) -> Result<()> {
        if self.content_len() > u8::MAX as usize {
            return Err(Error);
        }

        match self {
            Self::Ssid(_) => Ok(()),
            Self::VendorSpecific(vendor) => vendor.remote_id.validate(),
        }
    }

    /// Return the length of the element when emitted, header included.
    pub fn buffer_len(&self) -> usize {
        2 + self.content_len()
    }

    /// Emit the element into a buffer.
    pub fn emit(&self, ie: &mut InformationElement<&mut [u8]>) {
        ie.set_length(self.content_len() as u8);

        match self {
            Self::Ssid(ssid) => {
                ie.set_id(ElementId::Ssid as u8);
                ie.content_mut()[..ssid.as_bytes().len()].copy_from_slice(ssid.as_bytes());
            }
            Self::VendorSpecific(vendor) => {
                ie.set_id(ElementId::VendorSpecific as u8);
                vendor.emit(&mut VendorSpecific::new_unchecked(ie.content_mut()));
            }
        }
    }
}
