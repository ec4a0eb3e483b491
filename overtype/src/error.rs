use derive_more::From;
use thiserror::Error;

use crate::config::ConfigError;

/// Top-level application error
#[derive(Debug, From, Error)]
pub enum Error {
    #[error("Failed to read passage: {0}")]
    Io(std::io::Error),

    #[error(transparent)]
    Config(ConfigError),
}
