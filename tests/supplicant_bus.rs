//! Integration tests against a mock daemon served on a private message bus.
//!
//! Each test starts its own `dbus-daemon`. Tests return early when the
//! binary is not installed.

#![cfg_attr(test, allow(clippy::unwrap_used))]

use std::{collections::HashMap, process::Stdio, sync::Arc, time::Duration};

use futures::StreamExt;
use tempfile::TempDir;
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    process::{Child, Command},
};
use wpa_supplicant::{
    config::{BusKind, DbusConfig},
    services::supplicant::{
        BUS_NAME, InterfaceState, ROOT_PATH, ScanOptions, Supplicant, SupplicantError,
        SupplicantEvent,
    },
};
use zbus::{
    connection,
    object_server::SignalEmitter,
    zvariant::{ObjectPath, OwnedObjectPath, OwnedValue},
};

const WLAN0_PATH: &str = "/fi/w1/wpa_supplicant1/Interfaces/0";

/// Private bus daemon, killed when dropped.
struct TestBus {
    _dir: TempDir,
    _daemon: Child,
    address: String,
}

impl TestBus {
    async fn start() -> Option<Self> {
        let dir = TempDir::new().unwrap();
        let socket = dir.path().join("bus.sock");
        let config = dir.path().join("bus.conf");
        std::fs::write(
            &config,
            format!(
                r#"<!DOCTYPE busconfig PUBLIC "-//freedesktop//DTD D-Bus Bus Configuration 1.0//EN"
 "http://www.freedesktop.org/standards/dbus/1.0/busconfig.dtd">
<busconfig>
  <type>session</type>
  <listen>unix:path={}</listen>
  <auth>EXTERNAL</auth>
  <policy context="default">
    <allow send_destination="*" eavesdrop="true"/>
    <allow eavesdrop="true"/>
    <allow own="*"/>
  </policy>
</busconfig>
"#,
                socket.display()
            ),
        )
        .unwrap();

        let mut daemon = match Command::new("dbus-daemon")
            .arg(format!("--config-file={}", config.display()))
            .arg("--nofork")
            .arg("--print-address")
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
        {
            Ok(daemon) => daemon,
            Err(e) => {
                eprintln!("skipping: dbus-daemon unavailable ({e})");
                return None;
            }
        };

        let stdout = daemon.stdout.take()?;
        let mut line = String::new();
        tokio::time::timeout(
            Duration::from_secs(5),
            BufReader::new(stdout).read_line(&mut line),
        )
        .await
        .ok()?
        .ok()?;

        let address = line.trim().to_string();
        if address.is_empty() {
            eprintln!("skipping: dbus-daemon printed no address");
            return None;
        }

        Some(Self {
            _dir: dir,
            _daemon: daemon,
            address,
        })
    }

    async fn client(&self) -> Supplicant {
        Supplicant::connect_with(&DbusConfig {
            bus: BusKind::Session,
            address: Some(self.address.clone()),
        })
        .await
        .unwrap()
    }
}

#[derive(Debug, zbus::DBusError)]
#[zbus(prefix = "fi.w1.wpa_supplicant1")]
enum MockError {
    #[zbus(error)]
    ZBus(zbus::Error),
    InterfaceUnknown(String),
}

struct MockSupplicant {
    interfaces: Vec<OwnedObjectPath>,
}

#[zbus::interface(name = "fi.w1.wpa_supplicant1")]
impl MockSupplicant {
    async fn get_interface(&self, ifname: String) -> Result<OwnedObjectPath, MockError> {
        match (ifname.as_str(), self.interfaces.first()) {
            ("wlan0", Some(path)) => Ok(path.clone()),
            _ => Err(MockError::InterfaceUnknown(format!("no interface {ifname}"))),
        }
    }

    async fn remove_interface(
        &self,
        path: OwnedObjectPath,
        #[zbus(signal_emitter)] emitter: SignalEmitter<'_>,
    ) -> Result<(), MockError> {
        if !self.interfaces.contains(&path) {
            return Err(MockError::InterfaceUnknown(format!("no interface at {}", path.as_str())));
        }
        Self::interface_removed(&emitter, path.clone().into_inner()).await?;
        Ok(())
    }

    #[zbus(signal)]
    async fn interface_removed(emitter: &SignalEmitter<'_>, path: ObjectPath<'_>) -> zbus::Result<()>;

    #[zbus(property)]
    async fn interfaces(&self) -> Vec<OwnedObjectPath> {
        self.interfaces.clone()
    }
}

struct MockInterface {
    state: String,
    ap_scan: u32,
    scan_interval: i32,
    // `None` never answers a scan request.
    scan_result: Option<bool>,
}

impl MockInterface {
    fn new(scan_result: Option<bool>) -> Self {
        Self {
            state: "inactive".to_string(),
            ap_scan: 1,
            scan_interval: 5,
            scan_result,
        }
    }
}

#[zbus::interface(name = "fi.w1.wpa_supplicant1.Interface")]
impl MockInterface {
    async fn scan(
        &self,
        _args: HashMap<String, OwnedValue>,
        #[zbus(signal_emitter)] emitter: SignalEmitter<'_>,
    ) -> zbus::fdo::Result<()> {
        if let Some(success) = self.scan_result {
            Self::scan_done(&emitter, success).await?;
        }
        Ok(())
    }

    #[zbus(signal)]
    async fn scan_done(emitter: &SignalEmitter<'_>, success: bool) -> zbus::Result<()>;

    #[zbus(property)]
    async fn state(&self) -> String {
        self.state.clone()
    }

    #[zbus(property)]
    async fn scanning(&self) -> bool {
        self.state == "scanning"
    }

    #[zbus(property)]
    async fn ifname(&self) -> String {
        "wlan0".to_string()
    }

    #[zbus(property)]
    async fn ap_scan(&self) -> u32 {
        self.ap_scan
    }

    #[zbus(property)]
    async fn set_ap_scan(&mut self, mode: u32) {
        self.ap_scan = mode;
    }

    #[zbus(property)]
    async fn scan_interval(&self) -> i32 {
        self.scan_interval
    }

    #[zbus(property)]
    async fn set_scan_interval(&mut self, seconds: i32) {
        self.scan_interval = seconds;
    }

    #[zbus(property, name = "CurrentBSS")]
    async fn current_bss(&self) -> OwnedObjectPath {
        OwnedObjectPath::try_from("/").unwrap()
    }

    #[zbus(property)]
    async fn current_network(&self) -> OwnedObjectPath {
        OwnedObjectPath::try_from("/").unwrap()
    }

    #[zbus(property, name = "BSSs")]
    async fn bsss(&self) -> Vec<OwnedObjectPath> {
        vec![
            OwnedObjectPath::try_from(format!("{WLAN0_PATH}/BSSs/0")).unwrap(),
            OwnedObjectPath::try_from(format!("{WLAN0_PATH}/BSSs/1")).unwrap(),
        ]
    }
}

async fn serve(bus: &TestBus, scan_result: Option<bool>) -> zbus::Connection {
    let root = MockSupplicant {
        interfaces: vec![OwnedObjectPath::try_from(WLAN0_PATH).unwrap()],
    };

    connection::Builder::address(bus.address.as_str())
        .unwrap()
        .name(BUS_NAME)
        .unwrap()
        .serve_at(ROOT_PATH, root)
        .unwrap()
        .serve_at(WLAN0_PATH, MockInterface::new(scan_result))
        .unwrap()
        .build()
        .await
        .unwrap()
}

macro_rules! bus_or_skip {
    () => {
        match TestBus::start().await {
            Some(bus) => bus,
            None => return,
        }
    };
}

mod scanning {
    use super::*;

    #[tokio::test]
    async fn blocking_scan_returns_known_bss() {
        let bus = bus_or_skip!();
        let _server = serve(&bus, Some(true)).await;
        let iface = bus.client().await.get_interface("wlan0").await.unwrap();

        let bss = iface
            .scan_blocking(&ScanOptions::default(), Duration::from_secs(5))
            .await
            .unwrap();

        let paths: Vec<String> = bss.iter().map(|b| b.path().to_string()).collect();
        assert_eq!(
            paths,
            vec![format!("{WLAN0_PATH}/BSSs/0"), format!("{WLAN0_PATH}/BSSs/1")]
        );
    }

    #[tokio::test]
    async fn unsuccessful_scan_is_an_error() {
        let bus = bus_or_skip!();
        let _server = serve(&bus, Some(false)).await;
        let iface = bus.client().await.get_interface("wlan0").await.unwrap();

        let result = iface
            .scan_blocking(&ScanOptions::default(), Duration::from_secs(5))
            .await;

        assert!(matches!(result, Err(SupplicantError::ScanFailed)));
    }

    #[tokio::test]
    async fn missing_scan_done_times_out() {
        let bus = bus_or_skip!();
        let _server = serve(&bus, None).await;
        let iface = bus.client().await.get_interface("wlan0").await.unwrap();

        let result = iface
            .scan_blocking(&ScanOptions::default(), Duration::from_millis(200))
            .await;

        assert!(matches!(
            result,
            Err(SupplicantError::MethodTimeout { ref operation, .. }) if operation == "ScanDone"
        ));
    }

    #[tokio::test]
    async fn wait_for_decodes_scan_done_argument() {
        let bus = bus_or_skip!();
        let _server = serve(&bus, Some(true)).await;
        let iface = bus.client().await.get_interface("wlan0").await.unwrap();

        let trigger = iface.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(200)).await;
            trigger.scan(&ScanOptions::default()).await.unwrap();
        });

        let args = iface
            .wait_for("ScanDone", Some(Duration::from_secs(5)))
            .await
            .unwrap();

        assert_eq!(args.len(), 1);
        assert!(bool::try_from(&args[0]).unwrap());
    }
}

mod properties {
    use super::*;

    #[tokio::test]
    async fn ap_scan_rejects_unknown_mode() {
        let bus = bus_or_skip!();
        let _server = serve(&bus, None).await;
        let iface = bus.client().await.get_interface("wlan0").await.unwrap();

        let result = iface.set_ap_scan(3).await;

        assert!(matches!(result, Err(SupplicantError::InvalidArgs(_))));
        assert_eq!(iface.ap_scan().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn ap_scan_writes_through() {
        let bus = bus_or_skip!();
        let _server = serve(&bus, None).await;
        let iface = bus.client().await.get_interface("wlan0").await.unwrap();

        iface.set_ap_scan(2).await.unwrap();

        assert_eq!(iface.ap_scan().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn scan_interval_rejects_negative() {
        let bus = bus_or_skip!();
        let _server = serve(&bus, None).await;
        let iface = bus.client().await.get_interface("wlan0").await.unwrap();

        let result = iface.set_scan_interval(-1).await;

        assert!(matches!(result, Err(SupplicantError::InvalidArgs(_))));
        assert_eq!(iface.scan_interval().await.unwrap(), 5);

        iface.set_scan_interval(30).await.unwrap();
        assert_eq!(iface.scan_interval().await.unwrap(), 30);
    }
}

mod interface_cache {
    use super::*;

    #[tokio::test]
    async fn repeated_lookup_shares_wrapper() {
        let bus = bus_or_skip!();
        let _server = serve(&bus, None).await;
        let supplicant = bus.client().await;

        let first = supplicant.get_interface("wlan0").await.unwrap();
        let second = supplicant.get_interface("wlan0").await.unwrap();

        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn unknown_interface_name_maps_error() {
        let bus = bus_or_skip!();
        let _server = serve(&bus, None).await;
        let supplicant = bus.client().await;

        let result = supplicant.get_interface("wlan9").await;

        assert!(matches!(result, Err(SupplicantError::InterfaceUnknown(_))));
    }

    #[tokio::test]
    async fn remove_interface_evicts_wrapper() {
        let bus = bus_or_skip!();
        let _server = serve(&bus, None).await;
        let supplicant = bus.client().await;
        let before = supplicant.get_interface("wlan0").await.unwrap();

        supplicant.remove_interface(before.path()).await.unwrap();

        let after = supplicant.get_interface("wlan0").await.unwrap();
        assert!(!Arc::ptr_eq(&before, &after));
    }

    #[tokio::test]
    async fn remove_unknown_path_maps_error() {
        let bus = bus_or_skip!();
        let _server = serve(&bus, None).await;
        let supplicant = bus.client().await;
        let path = ObjectPath::try_from("/fi/w1/wpa_supplicant1/Interfaces/7").unwrap();

        let result = supplicant.remove_interface(&path).await;

        assert!(matches!(result, Err(SupplicantError::InterfaceUnknown(_))));
    }

    #[tokio::test]
    async fn removal_event_evicts_wrapper() {
        let bus = bus_or_skip!();
        let _server = serve(&bus, None).await;
        let supplicant = bus.client().await;
        let other = bus.client().await;
        let before = supplicant.get_interface("wlan0").await.unwrap();
        let mut events = supplicant.events().await.unwrap();

        other.remove_interface(before.path()).await.unwrap();

        let event = tokio::time::timeout(Duration::from_secs(5), events.next())
            .await
            .unwrap()
            .unwrap();
        assert!(matches!(
            event,
            SupplicantEvent::InterfaceRemoved(ref path) if path.as_str() == WLAN0_PATH
        ));

        let after = supplicant.get_interface("wlan0").await.unwrap();
        assert!(!Arc::ptr_eq(&before, &after));
    }
}

mod live {
    use super::*;

    #[tokio::test]
    async fn follows_state_changes() {
        let bus = bus_or_skip!();
        let server = serve(&bus, None).await;
        let iface = bus.client().await.get_interface("wlan0").await.unwrap();
        let live = iface.live().await.unwrap();
        assert_eq!(live.state.get(), InterfaceState::Inactive);

        let iface_ref = server
            .object_server()
            .interface::<_, MockInterface>(WLAN0_PATH)
            .await
            .unwrap();
        iface_ref.get_mut().await.state = "scanning".to_string();
        iface_ref
            .get()
            .await
            .state_changed(iface_ref.signal_emitter())
            .await
            .unwrap();

        let mut states = live.state.watch();
        let reached = tokio::time::timeout(Duration::from_secs(5), async {
            while let Some(state) = states.next().await {
                if state == InterfaceState::Scanning {
                    return true;
                }
            }
            false
        })
        .await
        .unwrap();
        assert!(reached);
    }

    #[tokio::test]
    async fn dropping_view_releases_it() {
        let bus = bus_or_skip!();
        let _server = serve(&bus, None).await;
        let iface = bus.client().await.get_interface("wlan0").await.unwrap();

        let live = iface.live().await.unwrap();
        let weak = Arc::downgrade(&live);
        drop(live);
        tokio::time::sleep(Duration::from_millis(200)).await;

        assert!(weak.upgrade().is_none());
    }
}
