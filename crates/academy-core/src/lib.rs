//! # academy-core - Core Domain Types
//!
//! Foundation crate for Crypto Academy. Provides the module catalog, the
//! display metadata derivers, content selection and error handling.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, toml, url, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Module`] - A lesson record from the catalog
//! - [`RecommendedWebsite`] - External resource linked from a module
//! - [`Difficulty`], [`Category`] - Classified dataset values
//! - [`Tone`], [`Tint`] - UI-agnostic color class and its background wash
//!
//! ### Catalog (`catalog`)
//! - [`Catalog`] - Ordered module collection with lookup and prev/next navigation
//! - [`Resolution`] - Outcome of resolving a route parameter
//!
//! ### Metadata (`metadata`)
//! - [`difficulty_info()`] - Difficulty badge, always succeeds
//! - [`category_info()`] - Category icon and colors, always succeeds
//!
//! ### Content (`content`)
//! - [`select_content()`] - Module id to [`ModuleDetailBundle`], with templated fallback
//! - [`deep_dive()`] - Optional extended sections for a module
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Error enum for catalog, config, terminal and I/O failures
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! ```rust
//! use academy_core::prelude::*;
//! ```

pub mod catalog;
pub mod content;
pub mod error;
pub mod logging;
pub mod metadata;
pub mod prelude;
pub mod types;

pub use catalog::{Catalog, Neighbours, Resolution};
pub use content::{
    deep_dive, known_content_ids, select_content, Block, DeepDive, DeepDiveSection,
    ModuleDetailBundle,
};
pub use error::{Error, Result, ResultExt};
pub use metadata::{category_info, difficulty_info, CategoryIcon, CategoryInfo, DifficultyInfo};
pub use types::{Category, Difficulty, Module, RecommendedWebsite, Tint, Tone};
