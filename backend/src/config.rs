//! Server settings, read from the environment.

use std::env;

use log::warn;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub open_browser: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            open_browser: true,
        }
    }
}

impl ServerConfig {
    /// `LEADS_HOST`, `LEADS_PORT` and `LEADS_OPEN_BROWSER`, each falling back
    /// to its default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(host) = lookup("LEADS_HOST").filter(|h| !h.trim().is_empty()) {
            config.host = host.trim().to_string();
        }
        if let Some(port) = lookup("LEADS_PORT") {
            match port.trim().parse() {
                Ok(port) => config.port = port,
                Err(_) => warn!("ignoring invalid LEADS_PORT {:?}", port),
            }
        }
        if let Some(flag) = lookup("LEADS_OPEN_BROWSER") {
            config.open_browser = !matches!(
                flag.trim().to_ascii_lowercase().as_str(),
                "0" | "false" | "no" | "off"
            );
        }
        config
    }

    /// Address to show and open in the browser. Loopback binds use
    /// `localhost`, the host name of the default API address.
    pub fn public_url(&self) -> String {
        let host = match self.host.as_str() {
            "127.0.0.1" | "0.0.0.0" | "::1" => "localhost",
            other => other,
        };
        format!("http://{}:{}", host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        assert_eq!(config_from(&[]), ServerConfig::default());
        assert_eq!(ServerConfig::default().public_url(), "http://localhost:8080");
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("LEADS_HOST", "0.0.0.0"),
            ("LEADS_PORT", "9000"),
            ("LEADS_OPEN_BROWSER", "false"),
        ]);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9000);
        assert!(!config.open_browser);
    }

    #[test]
    fn bad_port_keeps_default() {
        assert_eq!(config_from(&[("LEADS_PORT", "eighty")]).port, DEFAULT_PORT);
    }

    #[test]
    fn named_hosts_are_kept_in_the_url() {
        let config = config_from(&[("LEADS_HOST", "leads.test")]);
        assert_eq!(config.public_url(), "http://leads.test:8080");
    }
}
