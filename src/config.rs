use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub host: String,
    pub port: u16,
    pub max_payload_bytes: usize,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            max_payload_bytes: 10 * 1024 * 1024,
        }
    }
}

impl Configuration {
    /// Defaults, overlaid by an optional `zonemap.toml`, overlaid by
    /// `ZONEMAP_*` environment variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name("zonemap").required(false))
            .add_source(config::Environment::with_prefix("ZONEMAP"))
            .build()?
            .try_deserialize()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
