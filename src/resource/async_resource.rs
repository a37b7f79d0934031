//! An immutable pairing of a fetch input with its fetch lifecycle state.

use async_resource_lens_derive::Lenses;

use super::{AsyncResourceState, FetchError};
use crate::optics::Lens;

/// A description of what to fetch (`input`) together with how far the fetch
/// has come (`output`).
///
/// The resource is a value: each transition builds a new `AsyncResource`
/// through [`with_output`](Self::with_output) or one of the lenses. The
/// derived [`input_lens`](Self::input_lens) and
/// [`output_lens`](Self::output_lens) each preserve the other field.
///
/// # Example
///
/// ```
/// use async_resource_lens::resource::{AsyncResource, AsyncResourceState};
///
/// let resource: AsyncResource<&str, Vec<u8>> = AsyncResource::new("http://x/1.jpg");
/// assert!(resource.should_fetch());
///
/// let loading = resource.with_output(AsyncResourceState::Loading(0.1));
/// assert!(!loading.should_fetch());
/// assert_eq!(loading.input(), resource.input());
/// ```
#[derive(Debug, Clone, PartialEq, Lenses)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AsyncResource<I, O> {
    input: I,
    output: AsyncResourceState<O>,
}

impl<I, O> AsyncResource<I, O> {
    /// Creates a resource that has not been fetched yet.
    pub const fn new(input: I) -> Self {
        Self {
            input,
            output: AsyncResourceState::Empty,
        }
    }

    /// Creates a resource in an explicit state.
    pub const fn from_parts(input: I, output: AsyncResourceState<O>) -> Self {
        Self { input, output }
    }

    /// Returns what is being fetched.
    pub const fn input(&self) -> &I {
        &self.input
    }

    /// Returns the current fetch state.
    pub const fn output(&self) -> &AsyncResourceState<O> {
        &self.output
    }

    /// Splits the resource into its input and state.
    pub fn into_parts(self) -> (I, AsyncResourceState<O>) {
        (self.input, self.output)
    }

    /// Returns `true` exactly when the resource is `Empty`.
    ///
    /// Loading, loaded and failed resources are never fetched again by this
    /// policy. Retrying requires an explicit [`reset`](Self::reset).
    pub const fn should_fetch(&self) -> bool {
        self.output.is_empty()
    }
}

impl<I: Clone, O> AsyncResource<I, O> {
    /// Returns a new resource with the same input and the given state.
    ///
    /// This is the only state transition primitive. `self` is left untouched.
    #[must_use]
    pub fn with_output(&self, output: AsyncResourceState<O>) -> Self {
        tracing::trace!(
            from = %self.output.phase(),
            to = %output.phase(),
            "async resource transition"
        );
        Self::from_parts(self.input.clone(), output)
    }

    /// Returns a new `Empty` resource with the same input, making it eligible
    /// for fetching again.
    #[must_use]
    pub fn reset(&self) -> Self {
        self.with_output(AsyncResourceState::Empty)
    }
}

impl<I, O> AsyncResource<I, O>
where
    O: Clone + 'static,
{
    /// Narrow lens on the loading progress of the resource.
    ///
    /// # Panics
    ///
    /// `get` panics unless the resource is loading.
    #[must_use]
    pub fn loading_progress_lens() -> impl Lens<Self, f32> + Clone {
        Self::output_lens().compose(AsyncResourceState::<O>::loading_progress_lens())
    }

    /// Narrow lens on the loaded payload of the resource.
    ///
    /// # Panics
    ///
    /// `get` panics unless the resource is loaded.
    #[must_use]
    pub fn loaded_data_lens() -> impl Lens<Self, O> + Clone {
        Self::output_lens().compose(AsyncResourceState::<O>::loaded_data_lens())
    }

    /// Narrow lens on the failure cause of the resource.
    ///
    /// # Panics
    ///
    /// `get` panics unless the resource failed.
    #[must_use]
    pub fn error_cause_lens() -> impl Lens<Self, FetchError> + Clone {
        Self::output_lens().compose(AsyncResourceState::<O>::error_cause_lens())
    }
}
