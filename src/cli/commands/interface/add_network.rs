use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    cli::{
        CliContext, Command, CommandResult,
        types::{ArgType, CommandArg, CommandMetadata},
    },
    services::supplicant::NetworkConfig,
};

/// Adds a network block for an SSID, open or protected by a passphrase.
pub struct AddNetworkCommand {
    context: Arc<CliContext>,
}

impl AddNetworkCommand {
    /// Creates a new AddNetworkCommand
    pub fn new(context: Arc<CliContext>) -> Self {
        Self { context }
    }

    fn network_config(ssid: &str, psk: Option<&String>) -> NetworkConfig {
        let config = NetworkConfig::new().ssid(ssid);
        match psk {
            Some(psk) => config.psk(psk.as_str()).key_mgmt("WPA-PSK"),
            None => config.key_mgmt("NONE"),
        }
    }
}

#[async_trait]
impl Command for AddNetworkCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        let interface = self.context.interface(&args[0]).await?;
        let config = Self::network_config(&args[1], args.get(2));

        let network = interface.add_network(&config).await?;
        self.context.render(&network.summary().await?)
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "add-network".to_string(),
            description: "Add a network block (WPA-PSK with a passphrase, open without)"
                .to_string(),
            category: "interface".to_string(),
            args: vec![
                CommandArg::required("ifname", "Kernel interface name", ArgType::Interface),
                CommandArg::required("ssid", "Network name", ArgType::String),
                CommandArg::optional("psk", "WPA passphrase", ArgType::String),
            ],
            examples: vec![
                "wpa interface add-network wlan0 HomeNet hunter22".to_string(),
                "wpa interface add-network wlan0 CafeGuest".to_string(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passphrase_selects_wpa_psk() {
        let psk = "hunter22".to_string();
        let config = AddNetworkCommand::network_config("HomeNet", Some(&psk));
        assert_eq!(
            config,
            NetworkConfig::new()
                .ssid("HomeNet")
                .psk("hunter22")
                .key_mgmt("WPA-PSK")
        );
    }

    #[test]
    fn missing_passphrase_means_open_network() {
        let config = AddNetworkCommand::network_config("CafeGuest", None);
        assert_eq!(config, NetworkConfig::new().ssid("CafeGuest").key_mgmt("NONE"));
    }
}
