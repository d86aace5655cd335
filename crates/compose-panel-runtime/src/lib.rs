#![doc = r"Observable state and scoped composition locals backing compose-panel."]

pub mod collections;
pub mod composition_local;
pub mod derived_state;
pub mod mutable_state;

pub use composition_local::{
    compositionLocalOf, CompositionLocal, CompositionLocalProvider, LocalScope, ProvidedValue,
};
pub use derived_state::DerivedState;
pub use mutable_state::{MutableState, State, Subscription};

#[allow(non_snake_case)]
pub fn mutableStateOf<T: Clone + 'static>(initial: T) -> MutableState<T> {
    MutableState::new(initial)
}

#[allow(non_snake_case)]
pub fn derivedStateOf<T: Clone + 'static>(compute: impl Fn() -> T + 'static) -> DerivedState<T> {
    DerivedState::new(compute)
}

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod state_tests;

#[cfg(test)]
#[path = "tests/local_tests.rs"]
mod local_tests;
