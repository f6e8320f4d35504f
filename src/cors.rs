use crate::config::HeaderConfig;
use crate::context::ResponseContext;
use crate::headers::ResolvedHeaders;
use crate::resolver::resolve;

/// Stamps CORS headers onto outgoing responses.
///
/// Construction is infallible and the instance is immutable, so one
/// `Cors` can be shared across every request of a server's lifetime.
#[derive(Clone, Debug)]
pub struct Cors {
    config: HeaderConfig,
}

impl Cors {
    pub fn new(config: HeaderConfig) -> Self {
        Self { config }
    }

    /// Writes the resolved headers into `ctx`, one `set_header` call per
    /// header, in emission order. Headers without a value are skipped.
    pub fn apply<C: ResponseContext + ?Sized>(&self, ctx: &mut C) {
        for (name, value) in self.resolve_headers().iter() {
            ctx.set_header(name.as_str(), value);
        }
    }

    /// The headers `apply` would stamp, materialized for inspection.
    ///
    /// Resolution happens on every call rather than at construction.
    pub fn resolve_headers(&self) -> ResolvedHeaders {
        resolve(&self.config)
    }
}

/// A ready-to-install middleware closure over a shared [`Cors`].
pub type MiddlewareFn = Box<dyn Fn(&mut dyn ResponseContext) + Send + Sync>;

/// Builds a middleware that stamps the headers resolved from `config`
/// onto every response passed through it.
pub fn middleware(config: HeaderConfig) -> MiddlewareFn {
    let cors = Cors::new(config);

    Box::new(move |ctx| cors.apply(ctx))
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
