//! Pages Router

use axum::{Router, routing::get};

use crate::handlers::{self, PagesState};
use crate::render::SharedRenderer;

/// Create the router serving the read-only pages
pub fn pages_router(renderer: SharedRenderer) -> Router {
    let state = PagesState { renderer };

    Router::new()
        .route("/", get(handlers::home))
        .route("/login", get(handlers::login_page))
        .route("/register", get(handlers::register_page))
        .route("/products", get(handlers::products_page))
        .with_state(state)
}
