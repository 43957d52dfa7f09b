//! HTTP Handlers

use axum::extract::State;
use axum::response::Html;

use crate::render::SharedRenderer;
use crate::view::ViewModel;

/// Shared state for page handlers
#[derive(Clone)]
pub struct PagesState {
    pub renderer: SharedRenderer,
}

/// GET /
pub async fn home(State(state): State<PagesState>) -> Html<String> {
    state.renderer.render(&ViewModel::guest_home())
}

/// GET /login
pub async fn login_page(State(state): State<PagesState>) -> Html<String> {
    state.renderer.render(&ViewModel::login(None))
}

/// GET /register
pub async fn register_page(State(state): State<PagesState>) -> Html<String> {
    state.renderer.render(&ViewModel::register())
}

/// GET /products
pub async fn products_page(State(state): State<PagesState>) -> Html<String> {
    state.renderer.render(&ViewModel::products())
}
