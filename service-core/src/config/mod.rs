use crate::error::AppError;
use config::{builder::DefaultState, Config as Cfg, ConfigBuilder, File};
use serde::Deserialize;
use std::net::{Ipv4Addr, SocketAddr};

/// Settings shared by every service: listening port, read from an optional
/// `configuration` file and `APP__*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    8080
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        Self::from_builder(
            Cfg::builder()
                .add_source(File::with_name("configuration").required(false))
                .add_source(config::Environment::with_prefix("APP").separator("__")),
        )
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, AppError> {
        Ok(builder.build()?.try_deserialize()?)
    }

    /// Listen on every interface at the configured port.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}
