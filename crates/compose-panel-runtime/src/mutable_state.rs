use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

type Watcher = dyn Fn();

pub(crate) struct MutableStateInner<T: Clone + 'static> {
    value: RefCell<T>,
    version: Cell<u64>,
    watchers: RefCell<Vec<Weak<Watcher>>>, // FUTURE(no_std): replace Vec with fixed-capacity watcher slots.
}

impl<T: Clone + 'static> MutableStateInner<T> {
    fn new(value: T) -> Self {
        Self {
            value: RefCell::new(value),
            version: Cell::new(0),
            watchers: RefCell::new(Vec::new()),
        }
    }

    fn subscribe(&self, watcher: impl Fn() + 'static) -> Subscription {
        let watcher: Rc<Watcher> = Rc::new(watcher);
        let mut watchers = self.watchers.borrow_mut();
        watchers.retain(|w| w.strong_count() > 0);
        watchers.push(Rc::downgrade(&watcher));
        Subscription { watcher }
    }

    fn notify_watchers(&self) {
        // Collect first so a watcher may read or subscribe to this state.
        let watchers: Vec<Rc<Watcher>> = {
            let mut watchers = self.watchers.borrow_mut();
            watchers.retain(|w| w.strong_count() > 0);
            watchers.iter().filter_map(Weak::upgrade).collect()
        };

        for watcher in watchers {
            watcher();
        }
    }
}

/// Keeps a watcher registered on a state cell. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes the watcher"]
pub struct Subscription {
    watcher: Rc<Watcher>,
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("watcher", &Rc::as_ptr(&self.watcher))
            .finish()
    }
}

/// Read-only view of a [`MutableState`].
pub struct State<T: Clone + 'static> {
    inner: Rc<MutableStateInner<T>>,
}

/// Shared observable cell. Clones point at the same value.
pub struct MutableState<T: Clone + 'static> {
    inner: Rc<MutableStateInner<T>>, // FUTURE(no_std): replace Rc with arena-managed handles.
}

impl<T: Clone + 'static> PartialEq for State<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: Clone + 'static> Eq for State<T> {}

impl<T: Clone + 'static> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + 'static> PartialEq for MutableState<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: Clone + 'static> Eq for MutableState<T> {}

impl<T: Clone + 'static> Clone for MutableState<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + 'static> MutableState<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(MutableStateInner::new(value)),
        }
    }

    pub fn as_state(&self) -> State<T> {
        State {
            inner: Rc::clone(&self.inner),
        }
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.as_state().with(f)
    }

    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let result = {
            let mut value = self.inner.value.borrow_mut();
            f(&mut *value)
        };
        self.bump_version();
        self.inner.notify_watchers();
        result
    }

    pub fn replace(&self, value: T) -> T {
        let previous = self.inner.value.replace(value);
        self.bump_version();
        self.inner.notify_watchers();
        previous
    }

    pub fn set_value(&self, value: T) {
        self.replace(value);
    }

    pub fn set(&self, value: T) {
        self.replace(value);
    }

    pub fn value(&self) -> T {
        self.as_state().value()
    }

    pub fn get(&self) -> T {
        self.value()
    }

    /// Number of writes since the cell was created.
    pub fn version(&self) -> u64 {
        self.inner.version.get()
    }

    /// Runs `watcher` after every write until the returned subscription is dropped.
    pub fn subscribe(&self, watcher: impl Fn() + 'static) -> Subscription {
        self.inner.subscribe(watcher)
    }

    #[cfg(test)]
    pub(crate) fn watcher_count(&self) -> usize {
        self.inner
            .watchers
            .borrow()
            .iter()
            .filter(|w| w.strong_count() > 0)
            .count()
    }

    fn bump_version(&self) {
        self.inner.version.set(self.inner.version.get().wrapping_add(1));
    }
}

impl<T: fmt::Debug + Clone + 'static> fmt::Debug for MutableState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MutableState")
            .field("value", &self.value())
            .finish()
    }
}

impl<T: Clone + 'static> State<T> {
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let value = self.inner.value.borrow();
        f(&*value)
    }

    pub fn value(&self) -> T {
        self.inner.value.borrow().clone()
    }

    pub fn get(&self) -> T {
        self.value()
    }

    pub fn version(&self) -> u64 {
        self.inner.version.get()
    }

    pub fn subscribe(&self, watcher: impl Fn() + 'static) -> Subscription {
        self.inner.subscribe(watcher)
    }
}

impl<T: fmt::Debug + Clone + 'static> fmt::Debug for State<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("value", &self.value())
            .finish()
    }
}
