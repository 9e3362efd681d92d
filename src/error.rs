use std::net::AddrParseError;
use std::num::ParseIntError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid PORT value {value:?}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("invalid HOST value {value:?}")]
    InvalidHost {
        value: String,
        #[source]
        source: AddrParseError,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
