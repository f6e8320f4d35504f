use std::sync::Arc;

use cors_stamp::{Cors, CorsHeader, HeaderConfig};

pub type SharedCors = Arc<Cors>;

#[derive(Clone)]
pub struct AppState {
    pub cors: SharedCors,
    pub greeting: &'static str,
}

pub fn build_state() -> AppState {
    let mut config = HeaderConfig::new();
    config.set(CorsHeader::AllowOrigin, "http://app.example.com");
    config.set(CorsHeader::AllowHeaders, "X-Example-Trace");
    config.set(CorsHeader::ExposeHeaders, "X-Example-Trace");
    config.set(CorsHeader::AllowCredentials, "true");
    config.set(CorsHeader::MaxAge, "600");

    AppState {
        cors: Arc::new(Cors::new(config)),
        greeting: "Welcome to the Axum CORS example!",
    }
}

pub mod middleware;
