use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::mutable_state::{MutableState, State, Subscription};

pub(crate) struct DerivedStateInner<T: Clone + 'static> {
    compute: RefCell<Rc<dyn Fn() -> T>>,
    state: MutableState<T>,
    sources: RefCell<Vec<Subscription>>,
}

impl<T: Clone + 'static> DerivedStateInner<T> {
    fn recompute(&self) {
        let compute = self.compute.borrow().clone();
        self.state.set_value(compute());
    }
}

/// A value computed from other state cells.
///
/// Recomputation is explicit: the value is computed once on creation, then
/// again whenever a source registered with [`DerivedState::depends_on`] is
/// written or [`DerivedState::recompute`] is called. Reads never recompute.
pub struct DerivedState<T: Clone + 'static> {
    inner: Rc<DerivedStateInner<T>>,
}

impl<T: Clone + 'static> Clone for DerivedState<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + 'static> DerivedState<T> {
    pub fn new(compute: impl Fn() -> T + 'static) -> Self {
        let compute: Rc<dyn Fn() -> T> = Rc::new(compute);
        let initial = compute();
        Self {
            inner: Rc::new(DerivedStateInner {
                compute: RefCell::new(compute),
                state: MutableState::new(initial),
                sources: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Recomputes whenever `source` is written.
    pub fn depends_on<U: Clone + 'static>(self, source: &MutableState<U>) -> Self {
        self.track(&source.as_state());
        self
    }

    pub fn track<U: Clone + 'static>(&self, source: &State<U>) {
        // The source only holds a weak handle to the watcher, and the watcher
        // only holds a weak handle back, so neither side keeps the other alive.
        let weak = Rc::downgrade(&self.inner);
        let subscription = source.subscribe(move || {
            if let Some(inner) = weak.upgrade() {
                inner.recompute();
            }
        });
        self.inner.sources.borrow_mut().push(subscription);
    }

    pub fn set_compute(&self, compute: impl Fn() -> T + 'static) {
        let compute: Rc<dyn Fn() -> T> = Rc::new(compute);
        *self.inner.compute.borrow_mut() = compute;
        self.inner.recompute();
    }

    pub fn recompute(&self) {
        self.inner.recompute();
    }

    pub fn value(&self) -> T {
        self.inner.state.value()
    }

    pub fn get(&self) -> T {
        self.value()
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.inner.state.with(f)
    }

    /// Read-only handle to the cached value; subscribers see each recomputation.
    pub fn as_state(&self) -> State<T> {
        self.inner.state.as_state()
    }
}

impl<T: fmt::Debug + Clone + 'static> fmt::Debug for DerivedState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DerivedState")
            .field("value", &self.value())
            .field("sources", &self.inner.sources.borrow().len())
            .finish()
    }
}
