//! Derive macro for async-resource-lens optics.
//!
//! # Available Derive Macros
//!
//! - [`Lenses`]: Generates lens methods for struct fields
//!
//! # Example
//!
//! ```rust,ignore
//! use async_resource_lens::Lenses;
//! use async_resource_lens::optics::Lens;
//!
//! #[derive(Clone, Lenses)]
//! struct Point {
//!     x: i32,
//!     #[lens(skip)]
//!     y: i32,
//! }
//!
//! // Generated methods:
//! // - Point::x_lens() -> impl Lens<Point, i32>
//!
//! let point = Point { x: 10, y: 20 };
//! let x_lens = Point::x_lens();
//! assert_eq!(*x_lens.get(&point), 10);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod lenses;

use proc_macro::TokenStream;

/// Derive macro for generating Lens accessors for struct fields.
///
/// For each field `foo` of type `T`, generates:
///
/// ```rust,ignore
/// impl StructName {
///     pub fn foo_lens() -> impl Lens<StructName, T> + Clone { ... }
/// }
/// ```
///
/// Fields annotated with `#[lens(skip)]` get no accessor. Use it for fields
/// that are derived from other fields and must never be written on their own.
///
/// # Requirements
///
/// - The struct must be a named struct (not a tuple struct)
/// - The generated code refers to `::async_resource_lens::optics`, so the
///   deriving crate must be able to name `async_resource_lens`
///
/// # Generics
///
/// ```rust,ignore
/// #[derive(Clone, Lenses)]
/// struct Container<T> {
///     value: T,
/// }
///
/// let container = Container { value: 42 };
/// let lens = Container::<i32>::value_lens();
/// assert_eq!(*lens.get(&container), 42);
/// ```
#[proc_macro_derive(Lenses, attributes(lens))]
pub fn derive_lenses(input: TokenStream) -> TokenStream {
    lenses::derive_lenses_impl(input)
}
