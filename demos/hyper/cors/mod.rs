use std::sync::Arc;

use cors_stamp::{Cors, CorsHeader, HeaderConfig};

pub type SharedCors = Arc<Cors>;
pub type SharedAppState = Arc<AppState>;

#[derive(Clone)]
pub struct AppState {
    pub cors: SharedCors,
    pub greeting: &'static str,
}

pub fn build_state() -> SharedAppState {
    let mut config = HeaderConfig::new();
    config.set(CorsHeader::AllowHeaders, "X-Example-Trace");
    config.set(CorsHeader::ExposeHeaders, "X-Example-Trace");
    config.set(CorsHeader::MaxAge, "600");

    Arc::new(AppState {
        cors: Arc::new(Cors::new(config)),
        greeting: "Welcome to the Hyper CORS example!",
    })
}

pub mod middleware;
