//! Tests for the `pipe!` and `flow!` pipeline macros.

use async_resource_lens::compose::identity;
use async_resource_lens::optics::Lens;
use async_resource_lens::{flow, lens, pipe};
use rstest::rstest;

#[derive(Clone, PartialEq, Debug)]
struct Counter {
    count: i32,
    label: String,
}

fn counter() -> Counter {
    Counter {
        count: 0,
        label: "clicks".to_string(),
    }
}

fn increment(counter: Counter) -> Counter {
    Counter {
        count: counter.count + 1,
        ..counter
    }
}

fn double(counter: Counter) -> Counter {
    Counter {
        count: counter.count * 2,
        ..counter
    }
}

#[rstest]
fn test_pipe_applies_left_to_right() {
    let result = pipe!(counter(), increment, double);
    assert_eq!(result.count, 2);

    let reversed = pipe!(counter(), double, increment);
    assert_eq!(reversed.count, 1);
}

#[rstest]
fn test_pipe_with_setters() {
    let result = pipe!(
        counter(),
        lens!(Counter, count).setter(10),
        increment,
        lens!(Counter, label).setter("taps".to_string()),
    );

    assert_eq!(
        result,
        Counter {
            count: 11,
            label: "taps".to_string()
        }
    );
}

#[rstest]
fn test_pipe_equals_flow_applied() {
    let flowed = flow!(increment, double, increment);
    assert_eq!(pipe!(counter(), increment, double, increment), flowed(counter()));
}

#[rstest]
fn test_flow_is_associative() {
    let left = flow!(flow!(increment, double), increment);
    let right = flow!(increment, flow!(double, increment));

    assert_eq!(left(counter()), right(counter()));
}

#[rstest]
fn test_flow_identity_is_neutral() {
    let with_identity = flow!(identity, double, identity);
    let seeded = Counter {
        count: 4,
        ..counter()
    };

    assert_eq!(with_identity(seeded.clone()), double(seeded));
}

#[rstest]
fn test_flow_result_is_reusable() {
    let reset = flow!(lens!(Counter, count).setter(0), lens!(Counter, label).setter(String::new()));

    let first = reset(increment(counter()));
    let second = reset(double(increment(counter())));
    assert_eq!(first, second);
}
