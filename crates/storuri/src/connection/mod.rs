//! # Storuri Connection Parameters
//!
//! Normalizes the leftover parameters a resolver surfaces into the final
//! connection configuration: recognized names are coerced to integers
//! (byte-denominated fields accept unit suffixes), defaults are applied
//! for absent keys, and unknown names are rejected in one batch.

pub mod error;


pub use error::ConnectionError;

use crate::datatypes::{DatatypeError, convert_bytesize};
use crate::error::Result;
use crate::resolver::{ParamValue, RawParams};

/// Validated connection configuration for opening a logical database
/// session atop a storage handle.
///
/// Three fields carry defaults; the rest are absent unless the URI or
/// config entry supplied them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub database_name: String,
    pub pool_size: i64,
    pub cache_size: i64,
    pub pool_timeout: Option<i64>,
    pub cache_size_bytes: Option<i64>,
    pub historical_pool_size: Option<i64>,
    pub historical_cache_size: Option<i64>,
    pub historical_cache_size_bytes: Option<i64>,
    pub historical_timeout: Option<i64>,
    pub large_record_size: Option<i64>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            database_name: "unnamed".to_string(),
            pool_size: 7,
            cache_size: 10_000,
            pool_timeout: None,
            cache_size_bytes: None,
            historical_pool_size: None,
            historical_cache_size: None,
            historical_cache_size_bytes: None,
            historical_timeout: None,
            large_record_size: None,
        }
    }
}

impl DatabaseConfig {
    /// Validate and coerce the raw leftover parameters surfaced by a
    /// resolver.
    ///
    /// Values that arrive as native integers (the declarative-config
    /// path) pass through untouched; textual values go through byte-size
    /// coercion for the byte-denominated fields and plain integer
    /// coercion otherwise. Unknown names are collected — all of them —
    /// and rejected together.
    pub fn from_params(params: RawParams) -> Result<Self> {
        let mut config = DatabaseConfig::default();
        let mut unknown = Vec::new();

        for (key, value) in params {
            match key.as_str() {
                "database_name" => config.database_name = text_param(value),
                "connection_pool_size" => config.pool_size = int_param(&value)?,
                "connection_pool_timeout" => config.pool_timeout = Some(int_param(&value)?),
                "connection_cache_size" => config.cache_size = int_param(&value)?,
                "connection_cache_size_bytes" => {
                    config.cache_size_bytes = Some(bytes_param(&value)?)
                }
                "connection_historical_pool_size" => {
                    config.historical_pool_size = Some(int_param(&value)?)
                }
                "connection_historical_cache_size" => {
                    config.historical_cache_size = Some(int_param(&value)?)
                }
                "connection_historical_cache_size_bytes" => {
                    config.historical_cache_size_bytes = Some(bytes_param(&value)?)
                }
                "connection_historical_timeout" => {
                    config.historical_timeout = Some(int_param(&value)?)
                }
                "connection_large_record_size" => {
                    config.large_record_size = Some(bytes_param(&value)?)
                }
                _ => unknown.push(key),
            }
        }

        if !unknown.is_empty() {
            return Err(ConnectionError::UnknownDatabaseKeywords { keywords: unknown }.into());
        }
        Ok(config)
    }
}

// Plain base-10 only: connection-level counts and timeouts never take
// the boolean token aliases that backend flags do.
fn int_param(value: &ParamValue) -> Result<i64> {
    match value {
        ParamValue::Int(value) => Ok(*value),
        ParamValue::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| DatatypeError::conversion(text, "integer").into()),
    }
}

fn bytes_param(value: &ParamValue) -> Result<i64> {
    match value {
        ParamValue::Int(value) => Ok(*value),
        ParamValue::Text(text) => Ok(convert_bytesize(text)?),
    }
}

fn text_param(value: ParamValue) -> String {
    match value {
        ParamValue::Text(text) => text,
        ParamValue::Int(value) => value.to_string(),
    }
}
