//! Logical identity, as opposed to structural equality.

/// Types whose values can denote the same logical item while differing in
/// transient state.
///
/// `PartialEq` answers "are these values identical?"; `same_as` answers "do
/// these values describe the same thing?". A list diffing two snapshots uses
/// `same_as` to pair up items and `PartialEq` to decide whether a paired item
/// changed.
pub trait Identifiable {
    /// Returns `true` if `self` and `other` denote the same logical item.
    fn same_as(&self, other: &Self) -> bool;
}
