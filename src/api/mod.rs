//! # API Module
//!
//! Route handlers of the web application.
//!
//! ## Endpoints
//!
//! - [`welcome`] - `GET /`
//! - [`health`] - `GET /health`, status and version as JSON
//! - [`signup_page`] / [`signup`] - `GET|POST /signup`
//! - [`login_page`] / [`login`] - `GET|POST /login`, sets the session cookie
//! - [`logout`] - `GET /logout`, drops the session
//! - [`index_page`] / [`index_search`] - `GET|POST /index`, artist search,
//!   discography, trending artists and recommendations
//! - [`recommend_page`] / [`recommend`] - `GET|POST /recommend`
//!
//! Pages behind a session take the [`CurrentUser`] extractor, which redirects
//! to `/login` when no valid session cookie is present. Upstream failures are
//! rendered as messages on the page instead of error statuses.

mod auth;
mod health;
mod index;
mod recommend;

pub use auth::{CurrentUser, login, login_page, logout, signup, signup_page, welcome};
pub use health::health;
pub use index::{IndexForm, index_page, index_search};
pub use recommend::{RecommendForm, recommend, recommend_page};
