//! The fetch lifecycle of an async resource, and narrow lenses into it.

use std::fmt;

use super::FetchError;
use crate::optics::{FunctionLens, Lens};

/// The fetch lifecycle state of an async resource.
///
/// The conventional lifecycle is
/// `Empty -> Loading(p0) -> Loading(p1) -> ... -> Loaded(data)` on success and
/// `Loading(pn) -> Error(cause)` on failure. Nothing here enforces it: any
/// state may replace any other.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AsyncResourceState<O> {
    /// No fetch has been attempted.
    Empty,
    /// A fetch is in flight. Progress is advisory and expected in `[0.0, 1.0]`.
    Loading(f32),
    /// The fetch succeeded.
    Loaded(O),
    /// The fetch failed.
    Error(FetchError),
}

/// The variant of an [`AsyncResourceState`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// See [`AsyncResourceState::Empty`].
    Empty,
    /// See [`AsyncResourceState::Loading`].
    Loading,
    /// See [`AsyncResourceState::Loaded`].
    Loaded,
    /// See [`AsyncResourceState::Error`].
    Error,
}

impl fmt::Display for Phase {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Empty => "empty",
            Self::Loading => "loading",
            Self::Loaded => "loaded",
            Self::Error => "error",
        };
        formatter.write_str(name)
    }
}

impl<O> Default for AsyncResourceState<O> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<O> AsyncResourceState<O> {
    /// Returns the variant of this state.
    pub const fn phase(&self) -> Phase {
        match self {
            Self::Empty => Phase::Empty,
            Self::Loading(_) => Phase::Loading,
            Self::Loaded(_) => Phase::Loaded,
            Self::Error(_) => Phase::Error,
        }
    }

    /// Returns `true` if no fetch has been attempted.
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns `true` if a fetch is in flight.
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading(_))
    }

    /// Returns `true` if the fetch succeeded.
    pub const fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    /// Returns `true` if the fetch failed.
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Narrow lens on the progress inside [`Loading`](Self::Loading).
    ///
    /// `set` always yields `Loading(progress)`, whatever the previous state.
    ///
    /// # Panics
    ///
    /// `get` panics unless the state is `Loading`.
    ///
    /// # Example
    ///
    /// ```
    /// use async_resource_lens::optics::Lens;
    /// use async_resource_lens::resource::AsyncResourceState;
    ///
    /// let progress = AsyncResourceState::<Vec<u8>>::loading_progress_lens();
    /// let state = progress.set(AsyncResourceState::Empty, 0.25);
    /// assert_eq!(*progress.get(&state), 0.25);
    /// ```
    #[must_use]
    pub fn loading_progress_lens() -> impl Lens<Self, f32> + Clone {
        FunctionLens::new(
            |state: &Self| match state {
                Self::Loading(progress) => progress,
                other => variant_mismatch(Phase::Loading, other.phase()),
            },
            |_: Self, progress: f32| Self::Loading(progress),
        )
    }

    /// Narrow lens on the payload inside [`Loaded`](Self::Loaded).
    ///
    /// `set` always yields `Loaded(data)`, whatever the previous state.
    ///
    /// # Panics
    ///
    /// `get` panics unless the state is `Loaded`.
    #[must_use]
    pub fn loaded_data_lens() -> impl Lens<Self, O> + Clone {
        FunctionLens::new(
            |state: &Self| match state {
                Self::Loaded(data) => data,
                other => variant_mismatch(Phase::Loaded, other.phase()),
            },
            |_: Self, data: O| Self::Loaded(data),
        )
    }

    /// Narrow lens on the cause inside [`Error`](Self::Error).
    ///
    /// `set` always yields `Error(cause)`, whatever the previous state.
    ///
    /// # Panics
    ///
    /// `get` panics unless the state is `Error`.
    #[must_use]
    pub fn error_cause_lens() -> impl Lens<Self, FetchError> + Clone {
        FunctionLens::new(
            |state: &Self| match state {
                Self::Error(cause) => cause,
                other => variant_mismatch(Phase::Error, other.phase()),
            },
            |_: Self, cause: FetchError| Self::Error(cause),
        )
    }
}

/// Reading a narrow lens on the wrong variant is a programming error.
#[cold]
#[inline(never)]
fn variant_mismatch(expected: Phase, actual: Phase) -> ! {
    panic!("narrow lens requires resource state `{expected}`, found `{actual}`")
}
