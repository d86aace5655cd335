//! Single-instance variant: one owner state read by every descendant consumer.

use std::fmt;

use compose_panel_runtime::{LocalScope, ProvidedValue};

use crate::context::{local_for, ComposeContext};
use crate::error::ComposeError;
use crate::options::{ComposeOptions, LabelOptions};
use crate::state::ComposeState;

/// Owner of a single compose panel.
pub struct Compose<D: Clone + 'static> {
    state: ComposeState<D>,
    options: ComposeOptions,
}

impl<D: Clone + 'static> Compose<D> {
    pub fn new(options: ComposeOptions) -> Self {
        Self {
            state: ComposeState::new(),
            options,
        }
    }

    pub fn state(&self) -> &ComposeState<D> {
        &self.state
    }

    pub fn options(&self) -> ComposeOptions {
        self.options
    }

    pub fn provides(&self) -> ProvidedValue {
        local_for::<ComposeState<D>>().provides(Some(self.state.clone()))
    }

    /// Publishes the state to `scope` and all of its descendants.
    pub fn provide(&self, scope: &LocalScope) {
        scope.provide(self.provides());
    }

    pub fn open(&self) {
        log::debug!("compose: open");
        self.state.open();
    }

    pub fn close(&self) {
        log::debug!(
            "compose: close (detach_on_close = {})",
            self.options.detach_on_close
        );
        self.state.close(self.options.detach_on_close);
    }

    pub fn create(&self, payload: Option<D>) {
        log::debug!("compose: create");
        self.state.create(payload);
    }

    pub fn edit(&self, payload: Option<D>) {
        log::debug!("compose: edit");
        self.state.edit(payload);
    }

    pub fn toggle(&self) {
        if self.state.is_active() {
            self.close();
        } else {
            self.open();
        }
    }
}

impl<D: Clone + 'static> Default for Compose<D> {
    fn default() -> Self {
        Self::new(ComposeOptions::default())
    }
}

impl<D: fmt::Debug + Clone + 'static> fmt::Debug for Compose<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Compose")
            .field("state", &self.state)
            .field("options", &self.options)
            .finish()
    }
}

/// Creates a single-instance owner and publishes its state in `scope`.
pub fn use_compose<D: Clone + 'static>(scope: &LocalScope, options: ComposeOptions) -> Compose<D> {
    let compose = Compose::new(options);
    compose.provide(scope);
    compose
}

/// Reads the state published by the nearest [`use_compose`] owner.
pub fn use_compose_context<D: Clone + 'static>(
    scope: &LocalScope,
    name: &str,
    labels: LabelOptions,
) -> Result<ComposeContext<D>, ComposeError> {
    let state = local_for::<ComposeState<D>>()
        .current(scope)
        .ok_or_else(|| ComposeError::missing_provider(name, "use_compose"))?;
    Ok(ComposeContext::from_state(state, name, labels))
}

#[cfg(test)]
#[path = "tests/single_tests.rs"]
mod tests;
