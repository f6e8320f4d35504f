use axum::{Json, extract::State};
use serde::Serialize;

use crate::cors::AppState;

#[derive(Serialize)]
pub struct Greeting {
    message: &'static str,
    hint: &'static str,
}

pub async fn greet(State(state): State<AppState>) -> Json<Greeting> {
    Json(Greeting {
        message: state.greeting,
        hint: "Call this endpoint from your frontend to see the stamped CORS headers.",
    })
}
