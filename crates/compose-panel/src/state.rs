use std::fmt;

use compose_panel_runtime::{mutableStateOf, MutableState};

/// Status of one create/edit panel.
///
/// Every field is its own observable cell. Cloning hands out another handle
/// to the same cells, which is how owners and consumers share a panel.
pub struct ComposeState<D: Clone + 'static> {
    active: MutableState<bool>,
    creating: MutableState<bool>,
    updating: MutableState<bool>,
    data: MutableState<Option<D>>,
}

/// Plain copy of a [`ComposeState`] at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeSnapshot<D> {
    pub active: bool,
    pub creating: bool,
    pub updating: bool,
    pub data: Option<D>,
}

impl<D: Clone + 'static> ComposeState<D> {
    pub fn new() -> Self {
        Self {
            active: mutableStateOf(false),
            creating: mutableStateOf(true),
            updating: mutableStateOf(false),
            data: mutableStateOf(None),
        }
    }

    pub fn active(&self) -> &MutableState<bool> {
        &self.active
    }

    pub fn creating(&self) -> &MutableState<bool> {
        &self.creating
    }

    pub fn updating(&self) -> &MutableState<bool> {
        &self.updating
    }

    pub fn data(&self) -> &MutableState<Option<D>> {
        &self.data
    }

    pub fn is_active(&self) -> bool {
        self.active.value()
    }

    pub fn is_creating(&self) -> bool {
        self.creating.value()
    }

    pub fn snapshot(&self) -> ComposeSnapshot<D> {
        ComposeSnapshot {
            active: self.active.value(),
            creating: self.creating.value(),
            updating: self.updating.value(),
            data: self.data.value(),
        }
    }

    /// Whether both handles point at the same cells.
    pub fn same_as(&self, other: &Self) -> bool {
        self.active == other.active
    }

    pub(crate) fn open(&self) {
        self.active.set(true);
    }

    pub(crate) fn close(&self, detach_on_close: bool) {
        self.active.set(false);
        self.updating.set(false);
        if detach_on_close {
            self.data.set(None);
        }
    }

    pub(crate) fn create(&self, payload: Option<D>) {
        self.active.set(true);
        self.data.set(payload);
        self.updating.set(false);
        self.creating.set(true);
    }

    pub(crate) fn edit(&self, payload: Option<D>) {
        self.active.set(true);
        self.updating.set(true);
        self.data.set(payload);
        self.creating.set(false);
    }
}

impl<D: Clone + 'static> Default for ComposeState<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Clone + 'static> Clone for ComposeState<D> {
    fn clone(&self) -> Self {
        Self {
            active: self.active.clone(),
            creating: self.creating.clone(),
            updating: self.updating.clone(),
            data: self.data.clone(),
        }
    }
}

impl<D: fmt::Debug + Clone + 'static> fmt::Debug for ComposeState<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComposeState")
            .field("active", &self.active.value())
            .field("creating", &self.creating.value())
            .field("updating", &self.updating.value())
            .field("data", &self.data.value())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod tests;
