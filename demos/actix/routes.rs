use actix_web::{HttpResponse, Responder, http::header::CONTENT_TYPE, web};

use crate::cors::AppState;

pub async fn greet(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok()
        .insert_header((CONTENT_TYPE, "text/html; charset=utf-8"))
        .body(format!(
            "<h1>{}</h1><p>Every response from this server carries the stamped CORS headers.</p>",
            state.greeting
        ))
}
