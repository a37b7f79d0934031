//! View models composing a domain entity with an async resource.
//!
//! A host application keeps a [`UserViewModel`] per user. When its fetch
//! pipeline reports progress, success or failure, it applies the matching
//! named lens to obtain the next snapshot:
//!
//! ```
//! use async_resource_lens::prelude::*;
//! use url::Url;
//!
//! let user = User::new(7, "Grace", Url::parse("http://x/7.jpg").unwrap());
//! let view_model = UserViewModel::from(user);
//!
//! let next = pipe!(
//!     view_model,
//!     UserViewModel::loading_progress_lens().setter(0.5),
//!     UserViewModel::error_cause_lens().setter(FetchError::Status(503)),
//! );
//!
//! assert_eq!(*UserViewModel::error_cause_lens().get(&next), FetchError::Status(503));
//! assert!(!next.should_fetch_avatar());
//! ```

mod identity;
mod user;
mod user_view_model;

pub use identity::Identifiable;
pub use user::User;
pub use user_view_model::AvatarResource;
pub use user_view_model::UserViewModel;
