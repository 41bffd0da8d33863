//! # API Module
//!
//! HTTP endpoints served by the short-lived local server that `playurmood auth`
//! starts while the user grants access in the browser.
//!
//! - [`callback`] - Receives the authorization code from Spotify's redirect and
//!   exchanges it, together with the PKCE verifier, for an access token.
//! - [`health`] - Reports status and version; handy to check that the
//!   redirect address is reachable.
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use playurmood::api::{callback, health};
//!
//! let app = Router::new()
//!     .route("/callback", get(callback))
//!     .route("/health", get(health));
//! ```

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
