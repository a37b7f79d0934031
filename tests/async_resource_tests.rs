//! Unit tests for the async resource state machine.

use async_resource_lens::optics::Lens;
use async_resource_lens::resource::{AsyncResource, AsyncResourceState, FetchError, Phase};
use rstest::{fixture, rstest};

type Resource = AsyncResource<String, Vec<u8>>;
type State = AsyncResourceState<Vec<u8>>;

#[fixture]
fn resource() -> Resource {
    AsyncResource::new("http://x/1.jpg".to_string())
}

// =============================================================================
// should_fetch
// =============================================================================

#[rstest]
#[case(State::Empty, true)]
#[case(State::Loading(0.0), false)]
#[case(State::Loading(0.5), false)]
#[case(State::Loading(1.0), false)]
#[case(State::Loaded(Vec::new()), false)]
#[case(State::Loaded(vec![0xFF, 0xD8, 0xFF]), false)]
#[case(State::Error(FetchError::Network("unreachable".to_string())), false)]
#[case(State::Error(FetchError::Status(404)), false)]
#[case(State::Error(FetchError::Cancelled), false)]
fn test_should_fetch_only_when_empty(resource: Resource, #[case] state: State, #[case] expected: bool) {
    assert_eq!(resource.with_output(state).should_fetch(), expected);
}

// =============================================================================
// with_output
// =============================================================================

#[rstest]
#[case(State::Loading(0.25))]
#[case(State::Loaded(vec![1, 2, 3]))]
#[case(State::Error(FetchError::Decode("bad header".to_string())))]
fn test_with_output_keeps_input_and_original(resource: Resource, #[case] state: State) {
    let snapshot = resource.clone();
    let next = resource.with_output(state.clone());

    assert_eq!(next.input(), resource.input());
    assert_eq!(next.output(), &state);
    assert_eq!(resource, snapshot);
}

#[rstest]
fn test_full_success_lifecycle(resource: Resource) {
    let phases: Vec<Phase> = [
        State::Loading(0.1),
        State::Loading(0.6),
        State::Loading(1.0),
        State::Loaded(vec![42]),
    ]
    .into_iter()
    .scan(resource, |current, state| {
        *current = current.with_output(state);
        Some(current.output().phase())
    })
    .collect();

    assert_eq!(
        phases,
        vec![Phase::Loading, Phase::Loading, Phase::Loading, Phase::Loaded]
    );
}

#[rstest]
fn test_no_transition_table_is_enforced(resource: Resource) {
    let loaded = resource.with_output(State::Loaded(vec![1]));
    let back_to_loading = loaded.with_output(State::Loading(0.0));
    assert_eq!(back_to_loading.output(), &State::Loading(0.0));
}

#[rstest]
fn test_error_requires_explicit_reset(resource: Resource) {
    let failed = resource.with_output(State::Error(FetchError::Status(503)));
    assert!(!failed.should_fetch());
    assert!(failed.reset().should_fetch());
}

// =============================================================================
// Resource-level narrow lenses
// =============================================================================

#[rstest]
fn test_resource_loading_progress_lens(resource: Resource) {
    let lens = Resource::loading_progress_lens();
    let loading = lens.set(resource, 0.75);

    assert_eq!(*lens.get(&loading), 0.75);
    assert_eq!(loading.input(), "http://x/1.jpg");
}

#[rstest]
fn test_resource_error_cause_lens(resource: Resource) {
    let lens = Resource::error_cause_lens();
    let failed = lens.set(resource, FetchError::Cancelled);

    assert_eq!(lens.get(&failed), &FetchError::Cancelled);
    assert!(failed.output().is_error());
}

#[rstest]
fn test_resource_modify_progress(resource: Resource) {
    let lens = Resource::loading_progress_lens();
    let loading = lens.set(resource, 0.2);
    let advanced = lens.modify(loading, |progress| progress + 0.3);

    assert!((*lens.get(&advanced) - 0.5).abs() < f32::EPSILON);
}
