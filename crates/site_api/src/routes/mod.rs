//! `/api/*` route table.

mod blogs;
mod chat;
mod projects;

use axum::{
    http::header,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use portfolio_contract::{BLOGS_ROUTE, CHAT_ROUTE, PROJECTS_ROUTE};

use crate::ApiState;

pub use blogs::list_blogs;
pub use chat::ask_assistant;
pub use projects::list_projects;

/// Routes relaying the three upstream services.
pub fn api_routes() -> Router<ApiState> {
    Router::new()
        .route(BLOGS_ROUTE, get(list_blogs))
        .route(PROJECTS_ROUTE, get(list_projects))
        .route(CHAT_ROUTE, post(ask_assistant))
}

fn json_passthrough(body: axum::body::Bytes) -> Response {
    ([(header::CONTENT_TYPE, "application/json")], body).into_response()
}
