use std::{collections::HashMap, fmt, ops::Deref};

use futures::{Stream, StreamExt, stream::BoxStream};
use zbus::{
    Connection,
    proxy::CacheProperties,
    zvariant::{ObjectPath, OwnedObjectPath, OwnedValue, Value},
};

use crate::services::{
    common::{optional_path, owned_dict},
    supplicant::{P2pRole, RemoteObject, SupplicantError, interfaces, proxy::P2pDeviceProxy},
};

use super::{group::Group, peer::Peer, persistent_group::PersistentGroup};

/// How peer discovery scans channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum P2pDiscoveryType {
    /// Full scan first, then social channels.
    StartWithFull,
    /// Social channels only.
    Social,
    /// Social channels plus one other channel per iteration.
    Progressive,
}

impl P2pDiscoveryType {
    /// The string wpa_supplicant expects in the `DiscoveryType` argument.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StartWithFull => "start_with_full",
            Self::Social => "social",
            Self::Progressive => "progressive",
        }
    }
}

/// Arguments for [`P2pDevice::find`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct P2pFindArgs {
    /// Seconds to search; the daemon searches until stopped when absent.
    pub timeout: Option<i32>,
    /// Channel strategy.
    pub discovery_type: Option<P2pDiscoveryType>,
}

impl P2pFindArgs {
    pub(crate) fn to_args(&self) -> HashMap<&str, Value<'_>> {
        let mut args = HashMap::new();
        if let Some(timeout) = self.timeout {
            args.insert("Timeout", Value::from(timeout));
        }
        if let Some(kind) = self.discovery_type {
            args.insert("DiscoveryType", Value::from(kind.as_str()));
        }
        args
    }
}

/// Provisioning method used when connecting to a peer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum P2pWpsMethod {
    /// Push button.
    #[default]
    Pbc,
    /// Show a PIN locally.
    Display,
    /// Enter the PIN shown by the peer.
    Keypad,
    /// Use a given PIN.
    Pin,
}

impl P2pWpsMethod {
    /// The string wpa_supplicant expects in the `wps_method` argument.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pbc => "pbc",
            Self::Display => "display",
            Self::Keypad => "keypad",
            Self::Pin => "pin",
        }
    }
}

/// Arguments for [`P2pDevice::connect`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct P2pConnectArgs {
    /// Peer to connect to.
    pub peer: OwnedObjectPath,
    /// Provisioning method.
    pub wps_method: P2pWpsMethod,
    /// PIN for the `pin`, `display` and `keypad` methods.
    pub pin: Option<String>,
    /// Make the resulting group persistent.
    pub persistent: bool,
    /// Join an existing group instead of negotiating.
    pub join: bool,
    /// Only authorize the peer to connect later.
    pub authorize_only: bool,
    /// Group owner intent, 0 to 15.
    pub go_intent: Option<i32>,
    /// Operating frequency in MHz.
    pub frequency: Option<i32>,
}

impl P2pConnectArgs {
    /// Push button connection to `peer`.
    pub fn new(peer: OwnedObjectPath) -> Self {
        Self {
            peer,
            wps_method: P2pWpsMethod::default(),
            pin: None,
            persistent: false,
            join: false,
            authorize_only: false,
            go_intent: None,
            frequency: None,
        }
    }

    pub(crate) fn to_args(&self) -> HashMap<&str, Value<'_>> {
        let mut args = HashMap::new();
        args.insert("peer", Value::from(self.peer.clone().into_inner()));
        args.insert("wps_method", Value::from(self.wps_method.as_str()));
        args.insert("persistent", Value::from(self.persistent));
        args.insert("join", Value::from(self.join));
        args.insert("authorize_only", Value::from(self.authorize_only));

        if let Some(pin) = &self.pin {
            args.insert("pin", Value::from(pin.as_str()));
        }
        if let Some(intent) = self.go_intent {
            args.insert("go_intent", Value::from(intent));
        }
        if let Some(frequency) = self.frequency {
            args.insert("frequency", Value::from(frequency));
        }

        args
    }
}

/// Arguments for [`P2pDevice::group_add`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct P2pGroupAddArgs {
    /// Store the group for later re-invocation.
    pub persistent: bool,
    /// Re-invoke a stored group.
    pub persistent_group: Option<OwnedObjectPath>,
    /// Operating frequency in MHz.
    pub frequency: Option<i32>,
}

impl P2pGroupAddArgs {
    pub(crate) fn to_args(&self) -> HashMap<&str, Value<'_>> {
        let mut args = HashMap::new();
        args.insert("persistent", Value::from(self.persistent));

        if let Some(group) = &self.persistent_group {
            args.insert("persistent_group_object", Value::from(group.clone().into_inner()));
        }
        if let Some(frequency) = self.frequency {
            args.insert("frequency", Value::from(frequency));
        }

        args
    }
}

/// Notifications from the P2P facet.
#[derive(Debug, Clone, PartialEq)]
pub enum P2pEvent {
    /// A peer was discovered.
    DeviceFound(OwnedObjectPath),
    /// A peer is no longer visible.
    DeviceLost(OwnedObjectPath),
    /// Discovery stopped.
    FindStopped,
    /// A group was started.
    GroupStarted(HashMap<String, OwnedValue>),
    /// A group was torn down.
    GroupFinished(HashMap<String, OwnedValue>),
    /// Group owner negotiation succeeded.
    GoNegotiationSuccess(HashMap<String, OwnedValue>),
    /// Group owner negotiation failed.
    GoNegotiationFailure(HashMap<String, OwnedValue>),
    /// Result of an invitation.
    InvitationResult(HashMap<String, OwnedValue>),
}

impl fmt::Display for P2pEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DeviceFound(path) => write!(f, "DeviceFound({path})"),
            Self::DeviceLost(path) => write!(f, "DeviceLost({path})"),
            Self::FindStopped => f.write_str("FindStopped"),
            Self::GroupStarted(_) => f.write_str("GroupStarted"),
            Self::GroupFinished(_) => f.write_str("GroupFinished"),
            Self::GoNegotiationSuccess(_) => f.write_str("GONegotiationSuccess"),
            Self::GoNegotiationFailure(_) => f.write_str("GONegotiationFailure"),
            Self::InvitationResult(_) => f.write_str("InvitationResult"),
        }
    }
}

/// Wi-Fi Direct facet of an interface.
#[derive(Debug, Clone)]
pub struct P2pDevice {
    object: RemoteObject,
    proxy: P2pDeviceProxy<'static>,
}

impl Deref for P2pDevice {
    type Target = RemoteObject;

    fn deref(&self) -> &Self::Target {
        &self.object
    }
}

impl P2pDevice {
    /// Wrap the P2P facet of the interface at `path`.
    ///
    /// # Errors
    /// Returns `SupplicantError::Dbus` if the proxy cannot be created.
    pub async fn new(connection: &Connection, path: OwnedObjectPath) -> Result<Self, SupplicantError> {
        let proxy = P2pDeviceProxy::builder(connection)
            .path(path.clone())?
            .cache_properties(CacheProperties::No)
            .build()
            .await?;

        Ok(Self {
            object: RemoteObject::new(connection.clone(), path, interfaces::P2P_DEVICE),
            proxy,
        })
    }

    /// Start peer discovery.
    ///
    /// # Errors
    /// Returns the mapped remote error if the call fails.
    pub async fn find(&self, args: &P2pFindArgs) -> Result<(), SupplicantError> {
        Ok(self.proxy.find(args.to_args()).await?)
    }

    /// Stop peer discovery.
    ///
    /// # Errors
    /// Returns the mapped remote error if the call fails.
    pub async fn stop_find(&self) -> Result<(), SupplicantError> {
        Ok(self.proxy.stop_find().await?)
    }

    /// Listen for `timeout` seconds.
    ///
    /// # Errors
    /// Returns the mapped remote error if the call fails.
    pub async fn listen(&self, timeout: i32) -> Result<(), SupplicantError> {
        Ok(self.proxy.listen(timeout).await?)
    }

    /// Configure extended listen timing in milliseconds. Zeroes disable it.
    ///
    /// # Errors
    /// Returns the mapped remote error if the call fails.
    pub async fn extended_listen(&self, period: i32, interval: i32) -> Result<(), SupplicantError> {
        let mut args = HashMap::new();
        args.insert("period", Value::from(period));
        args.insert("interval", Value::from(interval));
        Ok(self.proxy.extended_listen(args).await?)
    }

    /// Flush peer and service state.
    ///
    /// # Errors
    /// Returns the mapped remote error if the call fails.
    pub async fn flush(&self) -> Result<(), SupplicantError> {
        Ok(self.proxy.flush().await?)
    }

    /// Connect to a peer. Returns the generated PIN when one was requested.
    ///
    /// # Errors
    /// Returns `SupplicantError::ConnectChannelUnavailable`,
    /// `SupplicantError::ConnectChannelUnsupported` or
    /// `SupplicantError::ConnectUnspecified` when the connection fails.
    pub async fn connect(&self, args: &P2pConnectArgs) -> Result<Option<String>, SupplicantError> {
        let pin = self.proxy.connect(args.to_args()).await?;
        Ok(Some(pin).filter(|p| !p.is_empty()))
    }

    /// Start an autonomous group.
    ///
    /// # Errors
    /// Returns the mapped remote error if the call fails.
    pub async fn group_add(&self, args: &P2pGroupAddArgs) -> Result<(), SupplicantError> {
        Ok(self.proxy.group_add(args.to_args()).await?)
    }

    /// Cancel an ongoing group formation.
    ///
    /// # Errors
    /// Returns the mapped remote error if the call fails.
    pub async fn cancel(&self) -> Result<(), SupplicantError> {
        Ok(self.proxy.cancel().await?)
    }

    /// Invite a peer, optionally into a stored group.
    ///
    /// # Errors
    /// Returns the mapped remote error if the call fails.
    pub async fn invite(
        &self,
        peer: &ObjectPath<'_>,
        persistent_group: Option<&ObjectPath<'_>>,
    ) -> Result<(), SupplicantError> {
        let mut args = HashMap::new();
        args.insert("peer", Value::from(peer.clone()));
        if let Some(group) = persistent_group {
            args.insert("persistent_group_object", Value::from(group.clone()));
        }
        Ok(self.proxy.invite(args).await?)
    }

    /// Leave the current group.
    ///
    /// # Errors
    /// Returns the mapped remote error if the call fails.
    pub async fn disconnect(&self) -> Result<(), SupplicantError> {
        Ok(self.proxy.disconnect().await?)
    }

    /// Reject connection attempts from a peer.
    ///
    /// # Errors
    /// Returns the mapped remote error if the call fails.
    pub async fn reject_peer(&self, peer: &ObjectPath<'_>) -> Result<(), SupplicantError> {
        Ok(self.proxy.reject_peer(peer).await?)
    }

    /// Remove a client from the group.
    ///
    /// # Errors
    /// Returns the mapped remote error if the call fails.
    pub async fn remove_client(&self, peer: &ObjectPath<'_>) -> Result<(), SupplicantError> {
        let mut args = HashMap::new();
        args.insert("peer", Value::from(peer.clone()));
        Ok(self.proxy.remove_client(args).await?)
    }

    /// Send a provision discovery request, `method` is `display`, `keypad`, `pbc` or `pushbutton`.
    ///
    /// # Errors
    /// Returns the mapped remote error if the call fails.
    pub async fn provision_discovery_request(
        &self,
        peer: &ObjectPath<'_>,
        method: &str,
    ) -> Result<(), SupplicantError> {
        Ok(self.proxy.provision_discovery_request(peer, method).await?)
    }

    /// Store a persistent group.
    ///
    /// # Errors
    /// Returns `SupplicantError::InvalidArgs` if the daemon rejects an entry.
    pub async fn add_persistent_group(
        &self,
        properties: &HashMap<String, String>,
    ) -> Result<PersistentGroup, SupplicantError> {
        let args: HashMap<&str, Value<'_>> = properties
            .iter()
            .map(|(key, value)| (key.as_str(), Value::from(value.as_str())))
            .collect();

        let path = self.proxy.add_persistent_group(args).await?;
        PersistentGroup::new(self.connection(), path).await
    }

    /// Remove a stored group.
    ///
    /// # Errors
    /// Returns `SupplicantError::NetworkUnknown` if no such group exists.
    pub async fn remove_persistent_group(&self, path: &ObjectPath<'_>) -> Result<(), SupplicantError> {
        Ok(self.proxy.remove_persistent_group(path).await?)
    }

    /// Remove every stored group.
    ///
    /// # Errors
    /// Returns the mapped remote error if the call fails.
    pub async fn remove_all_persistent_groups(&self) -> Result<(), SupplicantError> {
        Ok(self.proxy.remove_all_persistent_groups().await?)
    }

    /// Discovered peers.
    ///
    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn peers(&self) -> Result<Vec<Peer>, SupplicantError> {
        let mut peers = Vec::new();
        for path in self.proxy.peers().await? {
            peers.push(Peer::new(self.connection(), path).await?);
        }
        Ok(peers)
    }

    /// Role of the local device.
    ///
    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn role(&self) -> Result<P2pRole, SupplicantError> {
        Ok(P2pRole::from_dbus(&self.proxy.role().await?))
    }

    /// Group the device belongs to.
    ///
    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn group(&self) -> Result<Option<Group>, SupplicantError> {
        match optional_path(self.proxy.group().await?) {
            Some(path) => Ok(Some(Group::new(self.connection(), path).await?)),
            None => Ok(None),
        }
    }

    /// Peer acting as group owner.
    ///
    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn peer_go(&self) -> Result<Option<Peer>, SupplicantError> {
        match optional_path(self.proxy.peer_go().await?) {
            Some(path) => Ok(Some(Peer::new(self.connection(), path).await?)),
            None => Ok(None),
        }
    }

    /// Stored persistent groups.
    ///
    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn persistent_groups(&self) -> Result<Vec<PersistentGroup>, SupplicantError> {
        let mut groups = Vec::new();
        for path in self.proxy.persistent_groups().await? {
            groups.push(PersistentGroup::new(self.connection(), path).await?);
        }
        Ok(groups)
    }

    /// Device configuration dictionary.
    ///
    /// # Errors
    /// Returns the mapped remote error if the read fails.
    pub async fn device_config(&self) -> Result<HashMap<String, OwnedValue>, SupplicantError> {
        Ok(self.proxy.p2p_device_config().await?)
    }

    /// Stream of P2P notifications.
    ///
    /// # Errors
    /// Returns an error if the signal match rules cannot be added.
    pub async fn events(&self) -> Result<impl Stream<Item = P2pEvent> + Send + 'static, SupplicantError> {
        let found = self.proxy.receive_device_found().await?.filter_map(|s| async move {
            let args = s.args().ok()?;
            Some(P2pEvent::DeviceFound(OwnedObjectPath::from(args.path().clone())))
        });
        let lost = self.proxy.receive_device_lost().await?.filter_map(|s| async move {
            let args = s.args().ok()?;
            Some(P2pEvent::DeviceLost(OwnedObjectPath::from(args.path().clone())))
        });
        let stopped = self
            .proxy
            .receive_find_stopped()
            .await?
            .map(|_| P2pEvent::FindStopped);
        let started = self.proxy.receive_group_started().await?.filter_map(|s| async move {
            let args = s.args().ok()?;
            Some(P2pEvent::GroupStarted(owned_dict(args.properties())))
        });
        let finished = self.proxy.receive_group_finished().await?.filter_map(|s| async move {
            let args = s.args().ok()?;
            Some(P2pEvent::GroupFinished(owned_dict(args.properties())))
        });
        let go_success = self
            .proxy
            .receive_go_negotiation_success()
            .await?
            .filter_map(|s| async move {
                let args = s.args().ok()?;
                Some(P2pEvent::GoNegotiationSuccess(owned_dict(args.properties())))
            });
        let go_failure = self
            .proxy
            .receive_go_negotiation_failure()
            .await?
            .filter_map(|s| async move {
                let args = s.args().ok()?;
                Some(P2pEvent::GoNegotiationFailure(owned_dict(args.properties())))
            });
        let invitation = self
            .proxy
            .receive_invitation_result()
            .await?
            .filter_map(|s| async move {
                let args = s.args().ok()?;
                Some(P2pEvent::InvitationResult(owned_dict(args.result())))
            });

        let streams: Vec<BoxStream<'static, P2pEvent>> = vec![
            found.boxed(),
            lost.boxed(),
            stopped.boxed(),
            started.boxed(),
            finished.boxed(),
            go_success.boxed(),
            go_failure.boxed(),
            invitation.boxed(),
        ];
        Ok(futures::stream::select_all(streams))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn peer_path() -> OwnedObjectPath {
        OwnedObjectPath::try_from("/fi/w1/wpa_supplicant1/Interfaces/1/Peers/0211223344").unwrap()
    }

    #[test]
    fn find_args_are_optional() {
        assert!(P2pFindArgs::default().to_args().is_empty());

        let args = P2pFindArgs {
            timeout: Some(30),
            discovery_type: Some(P2pDiscoveryType::Social),
        };
        let dict = args.to_args();

        assert_eq!(dict.get("Timeout"), Some(&Value::from(30i32)));
        assert_eq!(dict.get("DiscoveryType"), Some(&Value::from("social")));
    }

    #[test]
    fn connect_args_default_to_push_button() {
        let args = P2pConnectArgs::new(peer_path());
        let dict = args.to_args();

        assert_eq!(dict.get("wps_method"), Some(&Value::from("pbc")));
        assert_eq!(dict.get("join"), Some(&Value::from(false)));
        assert!(!dict.contains_key("pin"));
        assert!(!dict.contains_key("go_intent"));
    }

    #[test]
    fn connect_args_include_pin_and_intent() {
        let args = P2pConnectArgs {
            wps_method: P2pWpsMethod::Pin,
            pin: Some("12345670".to_string()),
            go_intent: Some(7),
            ..P2pConnectArgs::new(peer_path())
        };
        let dict = args.to_args();

        assert_eq!(dict.get("pin"), Some(&Value::from("12345670")));
        assert_eq!(dict.get("go_intent"), Some(&Value::from(7i32)));
    }

    #[test]
    fn group_add_references_persistent_group() {
        let args = P2pGroupAddArgs {
            persistent: true,
            persistent_group: Some(
                OwnedObjectPath::try_from("/fi/w1/wpa_supplicant1/Interfaces/1/PersistentGroups/0")
                    .unwrap(),
            ),
            frequency: None,
        };
        let dict = args.to_args();

        assert_eq!(dict.get("persistent"), Some(&Value::from(true)));
        assert!(dict.contains_key("persistent_group_object"));
        assert!(!dict.contains_key("frequency"));
    }
}
