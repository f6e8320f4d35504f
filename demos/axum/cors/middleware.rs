use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use cors_stamp::ResponseContext;

use super::{AppState, SharedCors};

pub async fn cors_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let cors: SharedCors = state.cors.clone();

    let mut response = next.run(request).await;
    cors.apply(&mut HeaderMapContext(response.headers_mut()));
    response
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
