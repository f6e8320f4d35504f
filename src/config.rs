use std::collections::HashMap;

use crate::cors_header::CorsHeader;

/// Caller-supplied overrides for the stamped CORS headers.
///
/// Every field is optional. A missing or empty value falls back to the
/// built-in default where one exists, otherwise the header is omitted
/// from the response entirely.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeaderConfig {
    pub allow_origin: Option<String>,
    pub allow_headers: Option<String>,
    pub allow_methods: Option<String>,
    pub allow_credentials: Option<String>,
    pub expose_headers: Option<String>,
    pub max_age: Option<String>,
}

impl HeaderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` as the override for `name`, replacing any previous one.
    pub fn set(&mut self, name: CorsHeader, value: impl Into<String>) {
        *self.slot_mut(name) = Some(value.into());
    }

    /// The override currently held for `name`, if any.
    pub fn value_of(&self, name: CorsHeader) -> Option<&str> {
        match name {
            CorsHeader::AllowOrigin => self.allow_origin.as_deref(),
            CorsHeader::AllowHeaders => self.allow_headers.as_deref(),
            CorsHeader::AllowMethods => self.allow_methods.as_deref(),
            CorsHeader::AllowCredentials => self.allow_credentials.as_deref(),
            CorsHeader::ExposeHeaders => self.expose_headers.as_deref(),
            CorsHeader::MaxAge => self.max_age.as_deref(),
        }
    }

    fn slot_mut(&mut self, name: CorsHeader) -> &mut Option<String> {
        match name {
            CorsHeader::AllowOrigin => &mut self.allow_origin,
            CorsHeader::AllowHeaders => &mut self.allow_headers,
            CorsHeader::AllowMethods => &mut self.allow_methods,
            CorsHeader::AllowCredentials => &mut self.allow_credentials,
            CorsHeader::ExposeHeaders => &mut self.expose_headers,
            CorsHeader::MaxAge => &mut self.max_age,
        }
    }
}

/// Builds a config from `(name, value)` pairs, typically environment-style
/// header maps. Keys that do not name a supported CORS response header are
/// skipped; of duplicate keys the last wins.
impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for HeaderConfig {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut config = Self::new();

        for (key, value) in iter {
            if let Some(name) = CorsHeader::parse(key.as_ref()) {
                config.set(name, value);
            }
        }

        config
    }
}

impl From<HashMap<String, String>> for HeaderConfig {
    fn from(map: HashMap<String, String>) -> Self {
        map.into_iter().collect()
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
