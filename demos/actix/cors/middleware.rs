use std::future::{Ready, ready};
use std::pin::Pin;
use std::task::{Context, Poll};

use actix_web::Error;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderMap, HeaderName, HeaderValue};
use cors_stamp::ResponseContext;

use super::SharedCors;

type LocalBoxFuture<'a, T> = Pin<Box<dyn std::future::Future<Output = T> + 'a>>;

pub struct CorsStamp {
    cors: SharedCors,
}

impl CorsStamp {
    pub fn new(cors: SharedCors) -> Self {
        Self { cors }
    }
}

impl<S, B> Transform<S, ServiceRequest> for CorsStamp
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = CorsStampMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(CorsStampMiddleware {
            service,
            cors: self.cors.clone(),
        }))
    }
}

pub struct CorsStampMiddleware<S> {
    service: S,
    cors: SharedCors,
}

impl<S, B> Service<ServiceRequest> for CorsStampMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let cors = self.cors.clone();
        let fut = self.service.call(req);

        Box::pin(async move {
            let mut res = fut.await?;
            cors.apply(&mut HeaderMapContext(res.headers_mut()));
            Ok(res)
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
