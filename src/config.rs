use std::env;

use anyhow::Context;

const PORT_VAR: &str = "PORT";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
}

impl Config {
    /// Reads the listening port from `PORT`, falling back to 3000 when the
    /// variable is unset or empty.
    pub fn from_env() -> anyhow::Result<Config> {
        let port = match env::var(PORT_VAR) {
            Ok(val) if !val.is_empty() => val
                .parse::<u16>()
                .with_context(|| format!("invalid {} value: {:?}", PORT_VAR, val))?,
            _ => DEFAULT_PORT,
        };

        Ok(Config { port })
    }
}
