//! 802.11 MAC addresses.

/// An 802.11 MAC address.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default)]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub struct MacAddress(pub [u8; 6]);

impl MacAddress {
    /// The broadcast address.
    pub const BROADCAST: MacAddress = MacAddress([0xff; 6]);

    /// Create an address from a slice of exactly 6 octets.
    ///
    /// # Panics
    /// Panics if the slice is not 6 octets long.
    pub fn from_bytes(a: &[u8]) -> Self {
        let mut b = [0u8; 6];
        b.copy_from_slice(a);
        Self(b)
    }

    /// Return the address octets.
    pub const fn as_bytes(&self) -> &[u8; 6] {
        &self.0
    }

    /// Query whether this address is the broadcast address.
    pub fn is_broadcast(&self) -> bool {
        *self == Self::BROADCAST
    }

    /// Query whether the group bit is set.
    pub fn is_multicast(&self) -> bool {
        self.0[0] & 0b1 != 0
    }

    /// Query whether this is an individual address.
    pub fn is_unicast(&self) -> bool {
        !self.is_multicast()
    }

    /// Query whether the locally administered bit is set, as with randomized
    /// addresses.
    pub fn is_local(&self) -> bool {
        self.0[0] & 0b10 != 0
    }
}

impl From<[u8; 6]> for MacAddress {
    fn from(value: [u8; 6]) -> Self {
        Self(value)
    }
}

impl core::fmt::Display for MacAddress {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let a = &self.0;
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            a[0], a[1], a[2], a[3], a[4], a[5]
        )
    }
}
