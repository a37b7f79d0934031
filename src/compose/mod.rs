//! Left-to-right pipelines.
//!
//! Chaining several lens updates reads best in the order they happen. This
//! module provides two small utilities for that:
//!
//! - [`pipe!`]: apply functions to a value, left to right
//! - [`flow!`]: compose functions left to right into a new function
//! - [`identity`]: the unit of composition
//!
//! # Pipeline
//!
//! ```text
//! x |> f |> g |> h = h(g(f(x)))      pipe!(x, f, g, h)
//! f |> g |> h      = |x| h(g(f(x)))  flow!(f, g, h)
//! ```
//!
//! # Example
//!
//! ```
//! use async_resource_lens::optics::Lens;
//! use async_resource_lens::{flow, lens, pipe};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Point { x: i32, y: i32 }
//!
//! let to_origin = flow!(lens!(Point, x).setter(0), lens!(Point, y).setter(0));
//!
//! assert_eq!(to_origin(Point { x: 3, y: 4 }), Point { x: 0, y: 0 });
//! assert_eq!(pipe!(Point { x: 3, y: 4 }, to_origin), Point { x: 0, y: 0 });
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `flow!(flow!(f, g), h) == flow!(f, flow!(g, h))`
//! - **Left Identity**: `flow!(identity, f) == f`
//! - **Right Identity**: `flow!(f, identity) == f`
//! - **Pipe/Flow**: `pipe!(x, f, g) == flow!(f, g)(x)`

mod flow_macro;
mod pipe_macro;

/// Returns the value unchanged.
///
/// The identity function is the unit element of [`flow!`]:
/// `flow!(identity, f)` and `flow!(f, identity)` both behave like `f`.
///
/// ```
/// use async_resource_lens::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// ```
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::flow;
pub use crate::pipe;
