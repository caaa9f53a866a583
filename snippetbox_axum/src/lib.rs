//! snippetbox-axum - HTTP layer of the Snippetbox web application
//!
//! Provides the [`snippetbox_router`] serving the home page, the snippet
//! endpoints and the user signup/login/logout pages, rendered with askama.

mod error;
mod pages;
mod render;
mod router;
mod session;

#[cfg(test)]
mod test_utils;

pub use error::IntoResponseError;
pub use router::{snippetbox_router, snippetbox_router_no_trace};
pub use session::{AuthRejection, AuthUser};

// Re-export the initialization function from the snippetbox crate
pub use snippetbox::init;
