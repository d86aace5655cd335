//! Multi-instance variant: consumers register named states with one owner.
//!
//! Entries are appended in registration order and never removed. Every named
//! operation resolves the first entry with that name and mutates it through
//! the shared handle, so the consumer that registered it sees the change.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use compose_panel_runtime::{LocalScope, ProvidedValue};

use crate::context::{local_for, ComposeContext};
use crate::error::ComposeError;
use crate::options::{ComposeOptions, LabelOptions};
use crate::state::ComposeState;

struct RegistryEntry<D: Clone + 'static> {
    name: String,
    state: ComposeState<D>,
}

/// Handle published by a [`ComposeRegistry`] so descendants can register.
pub struct ComposeRegistrar<D: Clone + 'static> {
    entries: Rc<RefCell<Vec<RegistryEntry<D>>>>, // FUTURE(no_std): replace Vec with arena-backed entries.
}

impl<D: Clone + 'static> Clone for ComposeRegistrar<D> {
    fn clone(&self) -> Self {
        Self {
            entries: Rc::clone(&self.entries),
        }
    }
}

impl<D: Clone + 'static> ComposeRegistrar<D> {
    pub fn register(&self, name: &str, state: ComposeState<D>) {
        let mut entries = self.entries.borrow_mut();
        if entries.iter().any(|entry| entry.name == name) {
            log::warn!("compose `{name}` registered twice; lookups keep resolving the first one");
        }
        log::debug!("compose `{name}` registered ({} total)", entries.len() + 1);
        entries.push(RegistryEntry {
            name: name.to_string(),
            state,
        });
    }

    fn find(&self, name: &str) -> Option<ComposeState<D>> {
        self.entries
            .borrow()
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.state.clone())
    }
}

impl<D: Clone + 'static> fmt::Debug for ComposeRegistrar<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComposeRegistrar")
            .field("entries", &self.entries.borrow().len())
            .finish()
    }
}

/// Owner coordinating any number of named compose panels.
pub struct ComposeRegistry<D: Clone + 'static> {
    registrar: ComposeRegistrar<D>,
    options: ComposeOptions,
}

impl<D: Clone + 'static> ComposeRegistry<D> {
    pub fn new(options: ComposeOptions) -> Self {
        Self {
            registrar: ComposeRegistrar {
                entries: Rc::new(RefCell::new(Vec::new())),
            },
            options,
        }
    }

    pub fn registrar(&self) -> &ComposeRegistrar<D> {
        &self.registrar
    }

    pub fn options(&self) -> ComposeOptions {
        self.options
    }

    pub fn provides(&self) -> ProvidedValue {
        local_for::<ComposeRegistrar<D>>().provides(Some(self.registrar.clone()))
    }

    pub fn provide(&self, scope: &LocalScope) {
        scope.provide(self.provides());
    }

    pub fn find_instance(&self, name: &str) -> Option<ComposeState<D>> {
        self.registrar.find(name)
    }

    pub fn len(&self) -> usize {
        self.registrar.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Registered names in registration order, duplicates included.
    pub fn names(&self) -> Vec<String> {
        self.registrar
            .entries
            .borrow()
            .iter()
            .map(|entry| entry.name.clone())
            .collect()
    }

    pub fn open(&self, name: &str) {
        self.with_instance(name, "open", |instance| instance.open());
    }

    pub fn close(&self, name: &str) {
        let detach_on_close = self.options.detach_on_close;
        self.with_instance(name, "close", |instance| instance.close(detach_on_close));
    }

    pub fn create(&self, name: &str, payload: Option<D>) {
        self.with_instance(name, "create", |instance| instance.create(payload));
    }

    pub fn edit(&self, name: &str, payload: Option<D>) {
        self.with_instance(name, "edit", |instance| instance.edit(payload));
    }

    pub fn toggle(&self, name: &str) {
        match self.find_instance(name) {
            Some(instance) if instance.is_active() => self.close(name),
            Some(_) => self.open(name),
            None => log::warn!("compose `{name}` is not registered; toggle ignored"),
        }
    }

    fn with_instance(&self, name: &str, operation: &str, f: impl FnOnce(&ComposeState<D>)) {
        match self.find_instance(name) {
            Some(instance) => {
                log::debug!("compose `{name}`: {operation}");
                f(&instance);
            }
            None => log::warn!("compose `{name}` is not registered; {operation} ignored"),
        }
    }
}

impl<D: Clone + 'static> Default for ComposeRegistry<D> {
    fn default() -> Self {
        Self::new(ComposeOptions::default())
    }
}

impl<D: Clone + 'static> fmt::Debug for ComposeRegistry<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComposeRegistry")
            .field("names", &self.names())
            .field("options", &self.options)
            .finish()
    }
}

/// Creates a registry owner and publishes its registrar in `scope`.
pub fn use_compose_registry<D: Clone + 'static>(
    scope: &LocalScope,
    options: ComposeOptions,
) -> ComposeRegistry<D> {
    let registry = ComposeRegistry::new(options);
    registry.provide(scope);
    registry
}

/// Registers a fresh panel named `name` with the nearest registry owner.
pub fn define_compose<D: Clone + 'static>(
    scope: &LocalScope,
    name: &str,
    labels: LabelOptions,
) -> Result<ComposeContext<D>, ComposeError> {
    let registrar = local_for::<ComposeRegistrar<D>>()
        .current(scope)
        .ok_or_else(|| ComposeError::missing_provider(name, "use_compose_registry"))?;
    Ok(define_compose_with(&registrar, name, labels))
}

/// Registers a fresh panel with an explicitly supplied registrar.
pub fn define_compose_with<D: Clone + 'static>(
    registrar: &ComposeRegistrar<D>,
    name: &str,
    labels: LabelOptions,
) -> ComposeContext<D> {
    let state = ComposeState::new();
    registrar.register(name, state.clone());
    ComposeContext::from_state(state, name, labels)
}

#[cfg(test)]
#[path = "tests/registry_tests.rs"]
mod tests;
