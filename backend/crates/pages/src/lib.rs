//! Pages Module
//!
//! Everything that turns a request outcome into HTML:
//! - `view` - view models handed to the renderer
//! - `render` - the [`PageRenderer`] seam and the built-in HTML renderer
//! - `catalog` - the static product listing
//! - `handlers` / `router` - the four read-only page routes
//!
//! Page handlers never call a collaborator other than the renderer, so
//! GET requests are side-effect free.

pub mod catalog;
pub mod handlers;
pub mod render;
pub mod router;
pub mod view;

pub use handlers::PagesState;
pub use render::{HtmlRenderer, PageRenderer, SharedRenderer};
pub use router::pages_router;
pub use view::{MfaFields, Template, ViewModel};
