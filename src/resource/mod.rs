//! The lifecycle of an asynchronously fetched resource.
//!
//! An [`AsyncResource`] pairs a fetch input (for example an image URL) with an
//! [`AsyncResourceState`]:
//!
//! ```text
//! Empty ──> Loading(p0) ──> Loading(p1) ──> ... ──> Loaded(data)
//!                                   └──────────────> Error(cause)
//! ```
//!
//! The resource never schedules anything itself. A host application asks
//! [`AsyncResource::should_fetch`], starts the fetch, and records each event by
//! building the next resource value.
//!
//! # Narrow Lenses
//!
//! `loading_progress_lens`, `loaded_data_lens` and `error_cause_lens` focus on the
//! payload of a single variant. They are meant for callers that already know
//! which variant is active; reading one on any other variant panics.
//!
//! ```
//! use async_resource_lens::optics::Lens;
//! use async_resource_lens::resource::{AsyncResource, AsyncResourceState};
//!
//! type Avatar = AsyncResource<String, Vec<u8>>;
//!
//! let resource = Avatar::new("http://x/1.jpg".to_string());
//! let loaded = Avatar::loaded_data_lens().set(resource, vec![0xFF, 0xD8]);
//!
//! assert_eq!(*loaded.output(), AsyncResourceState::Loaded(vec![0xFF, 0xD8]));
//! assert_eq!(*Avatar::loaded_data_lens().get(&loaded), vec![0xFF, 0xD8]);
//! ```

mod async_resource;
mod error;
mod state;

pub use async_resource::AsyncResource;
pub use error::FetchError;
pub use state::AsyncResourceState;
pub use state::Phase;

static_assertions::assert_impl_all!(AsyncResource<url::Url, Vec<u8>>: Send, Sync, Clone);
static_assertions::assert_impl_all!(FetchError: Send, Sync, std::error::Error);
