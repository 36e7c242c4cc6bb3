//! Environment-driven configuration for binseq.
//!
//! Values are read from process environment variables named `BINSEQ_<PREFIX>_<FIELD>`, after
//! loading an optional `.config.env` file from the crate manifest directory.

use std::{
    env,
    path::{Path, PathBuf},
};

use serde::de::DeserializeOwned;

mod error;

pub mod arith;

pub use arith::ArithConfig;
pub use error::Error;

const CARGO_MANIFEST_DIR: &str = env!("CARGO_MANIFEST_DIR");
const CONFIG_ENV_PREFIX: &str = "BINSEQ";

pub trait Config: DeserializeOwned {
    const PREFIX: &'static str;

    fn from_env() -> Result<Self, Error> {
        let prefix = format!("{}_{}", CONFIG_ENV_PREFIX, Self::PREFIX);

        // the env file is optional, anything else wrong with it is not.
        if let Err(err) = dotenvy::from_path(config_env_path()) {
            if !err.not_found() {
                return Err(err.into());
            }
        }

        Ok(config::Config::builder()
            .add_source(
                config::Environment::with_prefix(&prefix)
                    .separator("_")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?)
    }
}

#[doc(hidden)]
pub fn config_env_path() -> PathBuf {
    Path::new(CARGO_MANIFEST_DIR).join(".config.env")
}
