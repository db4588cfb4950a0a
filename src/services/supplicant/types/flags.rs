//! wpa_supplicant flag types.

use bitflags::bitflags;

bitflags! {
    /// WPS configuration methods advertised by a peer.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct WpsConfigMethods: u16 {
        /// USB flash drive.
        const USBA = 0x0001;
        /// Ethernet.
        const ETHERNET = 0x0002;
        /// Static PIN printed on a label.
        const LABEL = 0x0004;
        /// PIN shown on a display.
        const DISPLAY = 0x0008;
        /// External NFC token.
        const EXT_NFC_TOKEN = 0x0010;
        /// Integrated NFC token.
        const INT_NFC_TOKEN = 0x0020;
        /// NFC interface.
        const NFC_INTERFACE = 0x0040;
        /// Push button.
        const PUSHBUTTON = 0x0080;
        /// PIN entered on a keypad.
        const KEYPAD = 0x0100;
        /// Software push button.
        const VIRT_PUSHBUTTON = 0x0280;
        /// Hardware push button.
        const PHY_PUSHBUTTON = 0x0480;
        /// P2P services.
        const P2PS = 0x1000;
        /// PIN on a software display.
        const VIRT_DISPLAY = 0x2008;
        /// PIN on a hardware display.
        const PHY_DISPLAY = 0x4008;
    }

    /// Wi-Fi Direct device capability bits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct P2pDeviceCapability: u8 {
        /// Service discovery is supported.
        const SERVICE_DISCOVERY = 0x01;
        /// Client discoverability is supported.
        const CLIENT_DISCOVERABILITY = 0x02;
        /// Concurrent operation with an infrastructure link.
        const CONCURRENT_OPERATION = 0x04;
        /// Managed by the infrastructure network.
        const INFRASTRUCTURE_MANAGED = 0x08;
        /// Cannot join more groups.
        const DEVICE_LIMIT = 0x10;
        /// Invitation procedure is supported.
        const INVITATION_PROCEDURE = 0x20;
    }

    /// Wi-Fi Direct group capability bits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct P2pGroupCapability: u8 {
        /// Acting as group owner.
        const GROUP_OWNER = 0x01;
        /// The group is persistent.
        const PERSISTENT_GROUP = 0x02;
        /// No more clients can join.
        const GROUP_LIMIT = 0x04;
        /// Intra-BSS distribution is provided.
        const INTRA_BSS_DISTRIBUTION = 0x08;
        /// Cross connection to an infrastructure network.
        const CROSS_CONNECTION = 0x10;
        /// Persistent reconnect is supported.
        const PERSISTENT_RECONNECT = 0x20;
        /// Group formation is in progress.
        const GROUP_FORMATION = 0x40;
        /// IP addresses are allocated in EAPOL-Key frames.
        const IP_ADDRESS_ALLOCATION = 0x80;
    }
}

/// Names of the set flags, for display.
pub fn flag_names<F: bitflags::Flags>(flags: &F) -> Vec<&'static str> {
    flags.iter_names().map(|(name, _)| name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wps_methods_truncate_unknown_bits() {
        let methods = WpsConfigMethods::from_bits_truncate(0x0188 | 0x8000);
        assert!(methods.contains(WpsConfigMethods::KEYPAD));
        assert!(methods.contains(WpsConfigMethods::PUSHBUTTON));
        assert_eq!(methods.bits() & 0x8000, 0);
    }

    #[test]
    fn capability_names_are_listed() {
        let caps = P2pGroupCapability::GROUP_OWNER | P2pGroupCapability::PERSISTENT_GROUP;
        assert_eq!(flag_names(&caps), vec!["GROUP_OWNER", "PERSISTENT_GROUP"]);
    }
}
