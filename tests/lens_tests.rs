//! Unit tests for Lens optics.
//!
//! - [`FunctionLens`]: lens built from a getter and a setter
//! - [`ComposedLens`]: composition of two lenses
//! - `setter`: curried set
//! - [`lens!`] macro: field lenses

use async_resource_lens::lens;
use async_resource_lens::optics::{ComposedLens, FunctionLens, Lens, compose};
use rstest::rstest;

// =============================================================================
// Test Structures
// =============================================================================

#[derive(Clone, PartialEq, Debug)]
struct Address {
    street: String,
    city: String,
}

#[derive(Clone, PartialEq, Debug)]
struct Person {
    name: String,
    address: Address,
}

#[derive(Clone, PartialEq, Debug)]
struct Wrapper<T> {
    value: T,
    tag: u8,
}

fn alice() -> Person {
    Person {
        name: "Alice".to_string(),
        address: Address {
            street: "Main St".to_string(),
            city: "Tokyo".to_string(),
        },
    }
}

// =============================================================================
// FunctionLens
// =============================================================================

#[rstest]
fn test_function_lens_get_and_set() {
    let name_lens = FunctionLens::new(
        |person: &Person| &person.name,
        |person: Person, name: String| Person { name, ..person },
    );

    assert_eq!(name_lens.get(&alice()), "Alice");

    let renamed = name_lens.set(alice(), "Bob".to_string());
    assert_eq!(renamed.name, "Bob");
    assert_eq!(renamed.address, alice().address);
}

#[rstest]
fn test_generic_struct_lens_macro() {
    let value_lens = lens!(Wrapper<i32>, value);
    let wrapper = Wrapper { value: 1, tag: 9 };

    let updated = value_lens.set(wrapper, 2);
    assert_eq!(updated, Wrapper { value: 2, tag: 9 });
}

#[rstest]
#[case(0, 0)]
#[case(21, 42)]
#[case(-4, -8)]
fn test_modify(#[case] input: i32, #[case] expected: i32) {
    let value_lens = lens!(Wrapper<i32>, value);
    let doubled = value_lens.modify(Wrapper { value: input, tag: 0 }, |value| value * 2);
    assert_eq!(doubled.value, expected);
}

#[rstest]
fn test_function_lens_debug() {
    let street_lens = lens!(Address, street);
    assert!(format!("{street_lens:?}").contains("FunctionLens"));
}

// =============================================================================
// Composition
// =============================================================================

#[rstest]
fn test_compose_get_reaches_nested_part() {
    let person_city = lens!(Person, address).compose(lens!(Address, city));
    assert_eq!(person_city.get(&alice()), "Tokyo");
}

#[rstest]
fn test_compose_set_rewrites_only_nested_part() {
    let person_city = lens!(Person, address).compose(lens!(Address, city));
    let moved = person_city.set(alice(), "Osaka".to_string());

    assert_eq!(moved.address.city, "Osaka");
    assert_eq!(moved.address.street, "Main St");
    assert_eq!(moved.name, "Alice");
}

#[rstest]
fn test_free_compose_is_composed_lens() {
    let person_street: ComposedLens<_, _, Address> =
        compose(lens!(Person, address), lens!(Address, street));
    assert_eq!(person_street.get(&alice()), "Main St");
}

#[rstest]
fn test_composed_lens_clone_behaves_the_same() {
    let person_city = lens!(Person, address).compose(lens!(Address, city));
    let cloned = person_city.clone();

    assert_eq!(
        person_city.set(alice(), "Kyoto".to_string()),
        cloned.set(alice(), "Kyoto".to_string())
    );
}

// =============================================================================
// Curried setter
// =============================================================================

#[rstest]
fn test_setter_defers_the_update() {
    let relocate = lens!(Person, address)
        .compose(lens!(Address, city))
        .setter("Nagoya".to_string());

    let original = alice();
    let relocated = relocate(original.clone());

    assert_eq!(original.address.city, "Tokyo");
    assert_eq!(relocated.address.city, "Nagoya");
}

#[rstest]
fn test_setters_can_be_collected() {
    let steps: Vec<Box<dyn Fn(Wrapper<i32>) -> Wrapper<i32>>> = vec![
        Box::new(lens!(Wrapper<i32>, value).setter(5)),
        Box::new(lens!(Wrapper<i32>, tag).setter(1)),
    ];

    let result = steps
        .iter()
        .fold(Wrapper { value: 0, tag: 0 }, |wrapper, step| step(wrapper));
    assert_eq!(result, Wrapper { value: 5, tag: 1 });
}
