use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use compose_panel_runtime::collections::map::HashMap;
use compose_panel_runtime::{
    compositionLocalOf, derivedStateOf, CompositionLocal, DerivedState, MutableState,
};

use crate::labels::{normalize, LabelKind};
use crate::options::LabelOptions;
use crate::state::ComposeState;

thread_local! {
    static LOCALS: RefCell<HashMap<TypeId, Box<dyn Any>>> = RefCell::new(HashMap::default());
}

/// The composition local carrying values of type `T`, created on first use.
///
/// Each published type gets its own key, so the single-instance state and
/// the registry handle never resolve to each other.
pub(crate) fn local_for<T: Clone + 'static>() -> CompositionLocal<Option<T>> {
    LOCALS.with(|locals| {
        let mut locals = locals.borrow_mut();
        let id = TypeId::of::<T>();
        if let Some(local) = locals
            .get(&id)
            .and_then(|local| local.downcast_ref::<CompositionLocal<Option<T>>>())
        {
            return local.clone();
        }
        let local = compositionLocalOf(|| None::<T>);
        locals.insert(id, Box::new(local.clone()));
        local
    })
}

/// Consumer side of a compose panel: the shared state plus its labels.
///
/// `title` and `action` are derived from the `creating` cell and recomputed
/// each time it is written, whoever writes it.
pub struct ComposeContext<D: Clone + 'static> {
    name: Rc<str>,
    state: ComposeState<D>,
    title: DerivedState<String>,
    action: DerivedState<String>,
}

impl<D: Clone + 'static> ComposeContext<D> {
    /// Builds a consumer around an already resolved state.
    pub fn from_state(state: ComposeState<D>, name: &str, labels: LabelOptions) -> Self {
        let name: Rc<str> = Rc::from(name);
        let labels = Rc::new(labels);
        let title = derived_label(&name, &labels, state.creating(), LabelKind::Title);
        let action = derived_label(&name, &labels, state.creating(), LabelKind::Action);
        Self {
            name,
            state,
            title,
            action,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> &ComposeState<D> {
        &self.state
    }

    pub fn active(&self) -> &MutableState<bool> {
        self.state.active()
    }

    pub fn creating(&self) -> &MutableState<bool> {
        self.state.creating()
    }

    pub fn updating(&self) -> &MutableState<bool> {
        self.state.updating()
    }

    pub fn data(&self) -> &MutableState<Option<D>> {
        self.state.data()
    }

    pub fn title(&self) -> String {
        self.title.value()
    }

    pub fn action(&self) -> String {
        self.action.value()
    }

    pub fn title_state(&self) -> &DerivedState<String> {
        &self.title
    }

    pub fn action_state(&self) -> &DerivedState<String> {
        &self.action
    }
}

fn derived_label(
    name: &Rc<str>,
    labels: &Rc<LabelOptions>,
    creating: &MutableState<bool>,
    kind: LabelKind,
) -> DerivedState<String> {
    let name = Rc::clone(name);
    let labels = Rc::clone(labels);
    let source = creating.clone();
    derivedStateOf(move || normalize(&name, source.value(), kind, &labels)).depends_on(creating)
}

impl<D: fmt::Debug + Clone + 'static> fmt::Debug for ComposeContext<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComposeContext")
            .field("name", &self.name)
            .field("state", &self.state)
            .field("title", &self.title())
            .field("action", &self.action())
            .finish()
    }
}
