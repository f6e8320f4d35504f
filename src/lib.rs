pub mod constants;

mod config;
mod context;
mod cors;
mod cors_header;
mod headers;
mod resolver;

pub use config::HeaderConfig;
pub use context::ResponseContext;
pub use cors::{Cors, MiddlewareFn, middleware};
pub use cors_header::{CorsHeader, ParseCorsHeaderError};
pub use headers::{ResolvedHeaders, ResolvedHeadersIter};
pub use resolver::resolve;
