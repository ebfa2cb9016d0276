use super::{Error, Result};

/// A Service Set Identity of at most 32 octets.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Ssid(heapless::Vec<u8, 32>);

impl Ssid {
    /// Maximum length of an SSID.
    pub const CAPACITY: usize = 32;

    /// Create an SSID by copying `bytes`.
    ///
    /// # Errors
    ///
    /// Returns an error if `bytes` is longer than [`Ssid::CAPACITY`].
    pub fn new(bytes: &[u8]) -> Result<Self> {
        heapless::Vec::from_slice(bytes).map(Self).map_err(|_| Error)
    }

    /// Return the SSID octets.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Return the SSID as text, if it is valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        core::str::from_utf8(&self.0).ok()
    }

    /// Returns `true` for a hidden network: an empty SSID or one made of NUL
    /// octets only.
    pub fn is_hidden(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }
}

impl core::fmt::Display for Ssid {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.as_str() {
            Some(ssid) => write!(f, "{ssid}"),
            None => write!(f, "{:0x?}", self.as_bytes()),
        }
    }
}

#[cfg(feature = "fuzz")]
impl arbitrary::Arbitrary<'_> for Ssid {
    fn arbitrary(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<Self> {
        let len = u.int_in_range(0..=Self::CAPACITY)?;
        Self::new(u.bytes(len)?).map_err(|_| arbitrary::Error::IncorrectFormat)
    }
}
