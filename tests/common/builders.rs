#![allow(dead_code)]

use cors_stamp::{Cors, CorsHeader, HeaderConfig};

#[derive(Default)]
pub struct ConfigBuilder {
    allow_origin: Option<String>,
    allow_headers: Option<String>,
    allow_methods: Option<String>,
    allow_credentials: Option<String>,
    expose_headers: Option<String>,
    max_age: Option<String>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allow_origin(mut self, value: impl Into<String>) -> Self {
        self.allow_origin = Some(value.into());
        self
    }

    pub fn allow_headers(mut self, value: impl Into<String>) -> Self {
        self.allow_headers = Some(value.into());
        self
    }

    pub fn allow_methods(mut self, value: impl Into<String>) -> Self {
        self.allow_methods = Some(value.into());
        self
    }

    pub fn allow_credentials(mut self, value: impl Into<String>) -> Self {
        self.allow_credentials = Some(value.into());
        self
    }

    pub fn expose_headers(mut self, value: impl Into<String>) -> Self {
        self.expose_headers = Some(value.into());
        self
    }

    pub fn max_age(mut self, value: impl Into<String>) -> Self {
        self.max_age = Some(value.into());
        self
    }

    pub fn build(self) -> HeaderConfig {
        let mut config = HeaderConfig::new();
        if let Some(value) = self.allow_origin {
            config.set(CorsHeader::AllowOrigin, value);
        }
        if let Some(value) = self.allow_headers {
            config.set(CorsHeader::AllowHeaders, value);
        }
        if let Some(value) = self.allow_methods {
            config.set(CorsHeader::AllowMethods, value);
        }
        if let Some(value) = self.allow_credentials {
            config.set(CorsHeader::AllowCredentials, value);
        }
        if let Some(value) = self.expose_headers {
            config.set(CorsHeader::ExposeHeaders, value);
        }
        if let Some(value) = self.max_age {
            config.set(CorsHeader::MaxAge, value);
        }
        config
    }

    pub fn build_cors(self) -> Cors {
        Cors::new(self.build())
    }
}

pub fn config() -> ConfigBuilder {
    ConfigBuilder::new()
}

pub fn cors() -> Cors {
    Cors::new(HeaderConfig::new())
}
