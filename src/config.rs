use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub connection: ConnectionConfig,
    pub strip: StripConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConnectionConfig {
    /// Transport kind: "serial" or "tcp"
    pub transport: String,
    /// Serial device path (required for "serial")
    pub port: Option<String>,
    #[serde(default = "default_baud_rate")]
    pub baud_rate: u32,
    /// Firmata TCP address as host:port (required for "tcp")
    pub address: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StripConfig {
    pub pin: u8,
    pub pixel_count: u16,
    /// Initial brightness applied by the demo command
    pub brightness: Option<u8>,
}

/// Default Firmata baud rate.
fn default_baud_rate() -> u32 {
    57600
}
