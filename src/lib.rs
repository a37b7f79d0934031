//! # async-resource-lens
//!
//! Composable lenses for immutable view models, and a small state machine
//! describing the lifecycle of an asynchronously fetched resource.
//!
//! ## Overview
//!
//! - **Optics**: [`Lens`](optics::Lens), [`FunctionLens`](optics::FunctionLens),
//!   and lens composition for deep, non-destructive updates
//! - **Pipelines**: `pipe!` and `flow!` for left-to-right application and composition
//! - **Resources**: [`AsyncResource`](resource::AsyncResource) pairing a fetch input
//!   with its [`AsyncResourceState`](resource::AsyncResourceState)
//! - **View models**: [`UserViewModel`](view_model::UserViewModel) with named lenses
//!   into its avatar resource
//!
//! The core never performs I/O. A host application drives fetches and records
//! every progress, success or failure event by deriving a new view model
//! through one of the named lenses.
//!
//! ## Feature Flags
//!
//! - `derive` (default): re-exports the `Lenses` derive macro for downstream
//!   structs. The macro crate itself is always linked, since the resource and
//!   view model types derive their lenses with it.
//! - `serde`: serde support for the value types
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use async_resource_lens::prelude::*;
//! use url::Url;
//!
//! let user = User::new(1, "Ada", Url::parse("http://x/1.jpg").unwrap());
//! let view_model = UserViewModel::new(user);
//! assert!(view_model.should_fetch_avatar());
//!
//! let loading = pipe!(view_model, UserViewModel::loading_progress_lens().setter(0.5));
//! assert_eq!(*UserViewModel::loading_progress_lens().get(&loading), 0.5);
//! assert!(!loading.should_fetch_avatar());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

// Lets `#[derive(Lenses)]` resolve `::async_resource_lens` inside this crate.
extern crate self as async_resource_lens;

/// Prelude module for convenient imports.
///
/// ```rust
/// use async_resource_lens::prelude::*;
/// ```
pub mod prelude {
    pub use crate::compose::*;
    pub use crate::optics::*;
    pub use crate::resource::*;
    pub use crate::view_model::*;
    pub use crate::lens;
}

pub mod compose;
pub mod optics;
pub mod resource;
pub mod view_model;

#[cfg(feature = "derive")]
pub use async_resource_lens_derive::Lenses;
