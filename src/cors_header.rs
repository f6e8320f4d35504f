use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::constants::{default, header};

/// The CORS response headers this crate knows how to stamp.
///
/// The variant order is the wire order: every resolved set is emitted
/// in exactly this sequence, with absent headers skipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CorsHeader {
    AllowOrigin,
    AllowHeaders,
    AllowMethods,
    AllowCredentials,
    ExposeHeaders,
    MaxAge,
}

impl CorsHeader {
    /// All supported headers, in emission order.
    pub const ALL: [CorsHeader; 6] = [
        CorsHeader::AllowOrigin,
        CorsHeader::AllowHeaders,
        CorsHeader::AllowMethods,
        CorsHeader::AllowCredentials,
        CorsHeader::ExposeHeaders,
        CorsHeader::MaxAge,
    ];

    /// The canonical header name as it appears on the wire.
    pub const fn as_str(self) -> &'static str {
        match self {
            CorsHeader::AllowOrigin => header::ACCESS_CONTROL_ALLOW_ORIGIN,
            CorsHeader::AllowHeaders => header::ACCESS_CONTROL_ALLOW_HEADERS,
            CorsHeader::AllowMethods => header::ACCESS_CONTROL_ALLOW_METHODS,
            CorsHeader::AllowCredentials => header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
            CorsHeader::ExposeHeaders => header::ACCESS_CONTROL_EXPOSE_HEADERS,
            CorsHeader::MaxAge => header::ACCESS_CONTROL_MAX_AGE,
        }
    }

    /// The built-in fallback value, for the headers that have one.
    ///
    /// Only `Allow-Origin`, `Allow-Headers` and `Allow-Methods` carry a
    /// default; the remaining headers are emitted solely when configured.
    pub const fn default_value(self) -> Option<&'static str> {
        match self {
            CorsHeader::AllowOrigin => Some(default::ALLOW_ORIGIN),
            CorsHeader::AllowHeaders => Some(default::ALLOW_HEADERS),
            CorsHeader::AllowMethods => Some(default::ALLOW_METHODS),
            _ => None,
        }
    }

    /// Looks up a header by its wire name, ignoring ASCII case.
    ///
    /// Returns `None` for names outside the supported set.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for CorsHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CorsHeader {
    type Err = ParseCorsHeaderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseCorsHeaderError {
            name: s.to_string(),
        })
    }
}

/// Error returned when a header name does not belong to the supported set.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unrecognized CORS response header name: '{name}'")]
pub struct ParseCorsHeaderError {
    name: String,
}

impl ParseCorsHeaderError {
    /// The name that failed to parse.
    pub fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
#[path = "cors_header_test.rs"]
mod cors_header_test;
