//! academy-app - Application state and page composition for Crypto Academy
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: routes, messages, the `update` function and its handlers,
//! page composition, configuration loading and OS signal handling.

pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod page;
pub mod page_view_state;
pub mod route;
pub mod signals;
pub mod state;

// Re-export primary types
pub use handler::{update, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use page::{compose_page, HomeEntry, HomePage, ModulePage, NavTarget, NotFoundPage, Page};
pub use page_view_state::PageViewState;
pub use route::Route;
pub use state::{AppState, HomeState, UiMode};
