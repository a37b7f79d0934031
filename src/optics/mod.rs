//! Optics for immutable data manipulation.
//!
//! This module provides lenses - composable accessors for immutable data
//! structures. A lens focuses on one part of a whole, enabling type-safe reading
//! and non-destructive updating of deeply nested fields.
//!
//! # Available Optics
//!
//! - [`Lens`]: Focus on a single part (get/set access)
//! - [`FunctionLens`]: A lens built from a getter and a setter
//! - [`ComposedLens`]: Two lenses chained end to end
//!
//! # Example
//!
//! ```
//! use async_resource_lens::optics::Lens;
//! use async_resource_lens::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Address { street: String, city: String }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Person { name: String, address: Address }
//!
//! let person_street = lens!(Person, address).compose(lens!(Address, street));
//!
//! let person = Person {
//!     name: "Alice".to_string(),
//!     address: Address {
//!         street: "Main St".to_string(),
//!         city: "Tokyo".to_string(),
//!     },
//! };
//!
//! let updated = person_street.set(person, "Oak Ave".to_string());
//! assert_eq!(updated.address.street, "Oak Ave");
//! assert_eq!(updated.address.city, "Tokyo"); // Other fields unchanged
//! ```
//!
//! # Lens Laws
//!
//! 1. **GetPut Law**: `lens.set(source, lens.get(&source).clone()) == source`
//! 2. **PutGet Law**: `lens.get(&lens.set(source, value)) == &value`
//! 3. **PutPut Law**: `lens.set(lens.set(source, v1), v2) == lens.set(source, v2)`
//!
//! Composition is associative:
//!
//! ```text
//! a.compose(b).compose(c) ≡ a.compose(b.compose(c))
//! ```

mod lens;

pub use lens::ComposedLens;
pub use lens::FunctionLens;
pub use lens::Lens;
pub use lens::compose;
