//! The feed: view models updated from fetch events through lenses.

use async_resource_lens::optics::Lens;
use async_resource_lens::resource::AsyncResource;
use async_resource_lens::view_model::UserViewModel;

use crate::fetcher::FetchEvent;

/// Derives the next view model from a fetch event.
pub fn apply(view_model: UserViewModel, event: FetchEvent) -> UserViewModel {
    match event {
        FetchEvent::Progress(progress) => {
            UserViewModel::loading_progress_lens().set(view_model, progress)
        }
        FetchEvent::Loaded(bytes) => UserViewModel::loaded_data_lens().set(view_model, bytes),
        FetchEvent::Failed(cause) => UserViewModel::error_cause_lens().set(view_model, cause),
    }
}

/// Applies a fetch event to the item in slot `index`.
///
/// The current view model is moved out of its slot and the derived one moved
/// back in. Empty or out-of-range slots are left untouched.
pub fn apply_at(slots: &mut [Option<UserViewModel>], index: usize, event: FetchEvent) {
    if let Some(slot) = slots.get_mut(index)
        && let Some(current) = slot.take()
    {
        *slot = Some(apply(current, event));
    }
}

/// Resets every failed avatar so that it becomes eligible for fetching again.
pub fn reset_failed(items: Vec<UserViewModel>) -> Vec<UserViewModel> {
    items
        .into_iter()
        .map(|view_model| {
            if view_model.avatar().output().is_error() {
                UserViewModel::avatar_lens().modify_ref(view_model, AsyncResource::reset)
            } else {
                view_model
            }
        })
        .collect()
}

/// Counts of items per avatar state.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Avatars never requested.
    pub empty: usize,
    /// Avatars still loading.
    pub loading: usize,
    /// Avatars loaded.
    pub loaded: usize,
    /// Avatars that failed.
    pub failed: usize,
}

impl Summary {
    /// Tallies the avatar states of a feed.
    pub fn of(items: &[UserViewModel]) -> Self {
        items.iter().fold(Self::default(), |summary, view_model| {
            let output = view_model.avatar().output();
            Self {
                empty: summary.empty + usize::from(output.is_empty()),
                loading: summary.loading + usize::from(output.is_loading()),
                loaded: summary.loaded + usize::from(output.is_loaded()),
                failed: summary.failed + usize::from(output.is_error()),
            }
        })
    }
}
