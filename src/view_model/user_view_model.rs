//! Presentation-ready projection of a [`User`] and its avatar resource.

use url::Url;

use super::{Identifiable, User};
use crate::optics::{FunctionLens, Lens};
use crate::resource::{AsyncResource, FetchError};

/// The avatar image of a user: fetched from a URL, delivered as raw bytes.
pub type AvatarResource = AsyncResource<Url, Vec<u8>>;

/// Immutable view model of a [`User`] with its avatar image resource.
///
/// The display name is derived from the user whenever a view model is
/// constructed and cannot be set on its own. Changing any nested field means
/// building a new view model, normally through one of the named lenses:
///
/// | Lens | Focus | Total |
/// |------|-------|-------|
/// | [`avatar_lens`](Self::avatar_lens) | the whole avatar resource | yes |
/// | [`user_lens`](Self::user_lens) | the underlying user | yes |
/// | [`loading_progress_lens`](Self::loading_progress_lens) | progress of a loading avatar | get panics otherwise |
/// | [`loaded_data_lens`](Self::loaded_data_lens) | bytes of a loaded avatar | get panics otherwise |
/// | [`error_cause_lens`](Self::error_cause_lens) | cause of a failed avatar | get panics otherwise |
///
/// # Example
///
/// ```
/// use async_resource_lens::optics::Lens;
/// use async_resource_lens::resource::AsyncResourceState;
/// use async_resource_lens::view_model::{User, UserViewModel};
/// use url::Url;
///
/// let user = User::new(1, "Ada", Url::parse("http://x/1.jpg").unwrap());
/// let view_model = UserViewModel::new(user);
///
/// let loaded = UserViewModel::loaded_data_lens().set(view_model, vec![1, 2, 3]);
/// assert_eq!(*loaded.avatar().output(), AsyncResourceState::Loaded(vec![1, 2, 3]));
/// assert_eq!(loaded.display_name(), "Ada");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UserViewModel {
    #[cfg_attr(feature = "serde", serde(skip_serializing))]
    user: User,
    display_name: String,
    avatar: AvatarResource,
}

impl UserViewModel {
    /// Creates a view model whose avatar has not been fetched yet.
    pub fn new(user: User) -> Self {
        let avatar = AsyncResource::new(user.avatar_url.clone());
        Self::with_avatar(user, avatar)
    }

    /// Designated constructor: every view model is built here, so the display
    /// name always follows the user.
    pub fn with_avatar(user: User, avatar: AvatarResource) -> Self {
        tracing::trace!(
            user_id = user.id,
            avatar = %avatar.output().phase(),
            "building user view model"
        );
        Self {
            display_name: user.name.clone(),
            user,
            avatar,
        }
    }

    /// Returns the underlying user.
    ///
    /// Presentation code should not need this; it exists for orchestration
    /// logic that maps view models back to domain entities.
    pub const fn user(&self) -> &User {
        &self.user
    }

    /// Returns the name to display.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Returns the avatar resource.
    pub const fn avatar(&self) -> &AvatarResource {
        &self.avatar
    }

    /// Returns the URL the avatar is fetched from.
    pub const fn avatar_url(&self) -> &Url {
        self.avatar.input()
    }

    /// Returns `true` if the avatar has never been requested.
    pub const fn should_fetch_avatar(&self) -> bool {
        self.avatar.should_fetch()
    }

    /// Lens on the whole avatar resource.
    #[must_use]
    pub fn avatar_lens() -> impl Lens<Self, AvatarResource> + Clone {
        FunctionLens::new(
            |view_model: &Self| &view_model.avatar,
            |view_model: Self, avatar: AvatarResource| Self::with_avatar(view_model.user, avatar),
        )
    }

    /// Lens on the underlying user. Setting it recomputes the display name and
    /// keeps the avatar resource as it is.
    #[must_use]
    pub fn user_lens() -> impl Lens<Self, User> + Clone {
        FunctionLens::new(
            |view_model: &Self| &view_model.user,
            |view_model: Self, user: User| Self::with_avatar(user, view_model.avatar),
        )
    }

    /// Narrow lens on the avatar's loading progress.
    ///
    /// # Panics
    ///
    /// `get` panics unless the avatar is loading.
    #[must_use]
    pub fn loading_progress_lens() -> impl Lens<Self, f32> + Clone {
        Self::avatar_lens().compose(AvatarResource::loading_progress_lens())
    }

    /// Narrow lens on the loaded avatar bytes.
    ///
    /// # Panics
    ///
    /// `get` panics unless the avatar is loaded.
    #[must_use]
    pub fn loaded_data_lens() -> impl Lens<Self, Vec<u8>> + Clone {
        Self::avatar_lens().compose(AvatarResource::loaded_data_lens())
    }

    /// Narrow lens on why the avatar failed to load.
    ///
    /// # Panics
    ///
    /// `get` panics unless the avatar failed.
    #[must_use]
    pub fn error_cause_lens() -> impl Lens<Self, FetchError> + Clone {
        Self::avatar_lens().compose(AvatarResource::error_cause_lens())
    }
}

impl From<User> for UserViewModel {
    fn from(user: User) -> Self {
        Self::new(user)
    }
}

/// View models are the same item when they project the same user, whatever
/// their avatar state.
impl Identifiable for UserViewModel {
    fn same_as(&self, other: &Self) -> bool {
        self.user == other.user
    }
}

static_assertions::assert_impl_all!(UserViewModel: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::AsyncResourceState;

    fn ada() -> User {
        User::new(1, "Ada", Url::parse("http://x/1.jpg").unwrap())
    }

    #[test]
    fn test_new_defaults_avatar_to_empty() {
        let view_model = UserViewModel::new(ada());
        assert_eq!(view_model.display_name(), "Ada");
        assert_eq!(view_model.avatar_url().as_str(), "http://x/1.jpg");
        assert!(view_model.avatar().output().is_empty());
        assert!(view_model.should_fetch_avatar());
    }

    #[test]
    fn test_user_lens_recomputes_display_name() {
        let view_model = UserViewModel::new(ada());
        let renamed = User::name_lens().set(ada(), "Ada Lovelace".to_string());

        let updated = UserViewModel::user_lens().set(view_model, renamed);
        assert_eq!(updated.display_name(), "Ada Lovelace");
        assert!(updated.should_fetch_avatar());
    }

    #[test]
    fn test_avatar_lens_keeps_user() {
        let view_model = UserViewModel::new(ada());
        let loading = view_model.avatar().with_output(AsyncResourceState::Loading(0.2));

        let updated = UserViewModel::avatar_lens().set(view_model.clone(), loading.clone());
        assert_eq!(updated.avatar(), &loading);
        assert_eq!(updated.user(), view_model.user());
        assert!(updated.same_as(&view_model));
        assert_ne!(updated, view_model);
    }
}
