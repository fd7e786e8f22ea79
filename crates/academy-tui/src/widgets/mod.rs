//! Custom widget components

mod header;
mod help;
mod home;
pub mod modal_overlay;
mod module_page;
mod nav_bar;
mod not_found;
mod search_input;
mod status_bar;

pub use header::AppHeader;
pub use help::HelpOverlay;
pub use home::HomeView;
pub use module_page::ModuleView;
pub use nav_bar::NavBar;
pub use not_found::NotFoundView;
pub use search_input::SearchInput;
pub use status_bar::{KeyHint, StatusBar, HOME_HINTS, NOT_FOUND_HINTS, SEARCH_HINTS};
