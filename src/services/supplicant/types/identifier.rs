use std::fmt::{self, Display};

/// Network name as raw octets.
///
/// 802.11 allows SSIDs that are not valid UTF-8, so the bytes are kept.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Ssid(Vec<u8>);

impl Ssid {
    /// Creates a new SSID from raw bytes.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Lossy UTF-8 rendering of the SSID.
    pub fn as_str(&self) -> String {
        String::from_utf8_lossy(&self.0).to_string()
    }

    /// Returns the raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Hidden networks broadcast an empty SSID.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for Ssid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<Vec<u8>> for Ssid {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl From<&str> for Ssid {
    fn from(s: &str) -> Self {
        Self::new(s.as_bytes().to_vec())
    }
}

/// Hardware address such as a BSSID or P2P device address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct MacAddress(Vec<u8>);

impl MacAddress {
    /// Creates a new address from raw octets.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Returns the raw octets.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// Two uppercase hex digits per octet, joined by `:`.
impl Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, octet) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(":")?;
            }
            write!(f, "{octet:02X}")?;
        }
        Ok(())
    }
}

impl From<Vec<u8>> for MacAddress {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mac_address_is_uppercase_and_colon_separated() {
        let bssid = MacAddress::new(vec![0x00, 0x1a, 0x2b, 0xc3, 0x0d, 0xfe]);
        assert_eq!(bssid.to_string(), "00:1A:2B:C3:0D:FE");
        assert_eq!(MacAddress::default().to_string(), "");
    }

    #[test]
    fn ssid_renders_invalid_utf8_lossily() {
        let ssid = Ssid::new(vec![b'c', b'a', b'f', 0xff]);
        assert_eq!(ssid.as_str(), "caf\u{fffd}");
        assert!(Ssid::default().is_empty());
    }
}
