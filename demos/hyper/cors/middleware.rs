use std::future::Future;
use std::pin::Pin;

use cors_stamp::ResponseContext;
use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::http::header::{HeaderMap, HeaderName, HeaderValue};
use hyper::service::Service;
use hyper::{Request, Response};

use super::SharedCors;

type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

pub type CorsBody = Full<Bytes>;

/// Hyper middleware in the shape described by the official
/// "Getting Started with a Server Middleware" guide:
/// https://hyper.rs/guides/1/server/middleware/
#[derive(Clone)]
pub struct CorsStamp<S> {
    inner: S,
    cors: SharedCors,
}

impl<S> CorsStamp<S> {
    pub fn new(cors: SharedCors, inner: S) -> Self {
        Self { inner, cors }
    }
}

impl<S> Service<Request<Incoming>> for CorsStamp<S>
where
    S: Service<Request<Incoming>, Response = Response<CorsBody>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    S::Error: Send + 'static,
{
    type Response = Response<CorsBody>;
    type Error = S::Error;
    type Future = BoxFuture<Result<Self::Response, Self::Error>>;

    fn call(&self, req: Request<Incoming>) -> Self::Future {
        let cors = self.cors.clone();
        let inner = self.inner.clone();

        Box::pin(async move {
            let mut response = inner.call(req).await?;
            cors.apply(&mut HeaderMapContext(response.headers_mut()));
            Ok(response)
        })
    }
}

struct HeaderMapContext<'a>(&'a mut HeaderMap);

impl ResponseContext for HeaderMapContext<'_> {
    fn set_header(&mut self, name: &str, value: &str) {
        if let (Ok(header_name), Ok(header_value)) =
            (HeaderName::try_from(name), HeaderValue::from_str(value))
        {
            self.0.insert(header_name, header_value);
        }
    }
}
