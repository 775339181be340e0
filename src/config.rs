use std::{env, path::PathBuf};

use crate::Error;

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub static_dir: Option<PathBuf>,
    pub seed_demo_posts: bool,
}

impl Config {
    pub fn from_env() -> crate::Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source. Empty values count
    /// as unset.
    pub fn from_lookup<F>(lookup: F) -> crate::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match var("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| {
                    Error::Config(format!(
                        "PORT must be a valid port number, got {:?}",
                        raw
                    ))
                })?,
            None => 5000,
        };

        let seed_demo_posts = match var("SEED_DEMO_POSTS") {
            Some(raw) => parse_bool(&raw).ok_or_else(|| {
                Error::Config(format!(
                    "SEED_DEMO_POSTS must be a boolean, got {:?}",
                    raw
                ))
            })?,
            None => true,
        };

        Ok(Self {
            host: var("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            static_dir: var("STATIC_DIR").map(PathBuf::from),
            seed_demo_posts,
        })
    }

    pub fn web_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
