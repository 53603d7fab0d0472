//! `storefront-app`
//!
//! **Responsibility:** the collaborator around the cart core: a session that
//! owns the state and publishes events, a plain-text rendering of the page,
//! line-based input, and environment configuration.

pub mod config;
pub mod error;
pub mod input;
pub mod session;
pub mod view;

pub use config::AppConfig;
pub use error::SessionError;
pub use input::{Input, parse_input};
pub use session::Session;
pub use view::{StorefrontView, render};
