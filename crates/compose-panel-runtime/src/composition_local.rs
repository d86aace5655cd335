use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::collections::map::HashMap;

pub(crate) type LocalKey = usize;

static NEXT_LOCAL_KEY: AtomicUsize = AtomicUsize::new(1);

fn next_local_key() -> LocalKey {
    NEXT_LOCAL_KEY.fetch_add(1, Ordering::Relaxed)
}

/// A value published by [`CompositionLocal::provides`], ready to be installed in a scope.
pub struct ProvidedValue {
    key: LocalKey,
    value: Rc<dyn Any>,
}

impl ProvidedValue {
    pub fn key(&self) -> usize {
        self.key
    }
}

impl fmt::Debug for ProvidedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProvidedValue")
            .field("key", &self.key)
            .finish()
    }
}

struct LocalScopeInner {
    parent: Option<LocalScope>,
    depth: usize,
    values: RefCell<HashMap<LocalKey, Rc<dyn Any>>>, // FUTURE(no_std): replace map with a sorted small vec.
}

/// One node of the ancestor chain that composition locals resolve against.
///
/// Scopes are handed explicitly to whatever needs to publish or read a local.
/// A child sees every value provided by its ancestors unless it, or a closer
/// ancestor, provides the same local again.
#[derive(Clone)]
pub struct LocalScope {
    inner: Rc<LocalScopeInner>,
}

impl LocalScope {
    pub fn root() -> Self {
        Self::with_parent(None)
    }

    pub fn child(&self) -> Self {
        Self::with_parent(Some(self.clone()))
    }

    fn with_parent(parent: Option<LocalScope>) -> Self {
        let depth = parent.as_ref().map_or(0, |p| p.depth() + 1);
        Self {
            inner: Rc::new(LocalScopeInner {
                parent,
                depth,
                values: RefCell::new(HashMap::default()),
            }),
        }
    }

    pub fn parent(&self) -> Option<&LocalScope> {
        self.inner.parent.as_ref()
    }

    pub fn depth(&self) -> usize {
        self.inner.depth
    }

    /// Installs `value` in this scope, replacing anything this scope already provided for the same local.
    pub fn provide(&self, value: ProvidedValue) {
        log::trace!(
            "scope@{} provides local #{}",
            self.inner.depth,
            value.key
        );
        self.inner.values.borrow_mut().insert(value.key, value.value);
    }

    pub fn provide_all(&self, values: impl IntoIterator<Item = ProvidedValue>) {
        for value in values {
            self.provide(value);
        }
    }

    /// Whether this scope itself, ignoring ancestors, provides the local.
    pub fn provides_locally<T: Clone + 'static>(&self, local: &CompositionLocal<T>) -> bool {
        self.inner.values.borrow().contains_key(&local.key)
    }

    fn lookup(&self, key: LocalKey) -> Option<Rc<dyn Any>> {
        let mut scope = Some(self);
        while let Some(current) = scope {
            if let Some(value) = current.inner.values.borrow().get(&key) {
                return Some(Rc::clone(value));
            }
            scope = current.parent();
        }
        None
    }
}

impl Default for LocalScope {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Debug for LocalScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalScope")
            .field("depth", &self.inner.depth)
            .field("provided", &self.inner.values.borrow().len())
            .finish()
    }
}

#[derive(Clone)]
pub struct CompositionLocal<T: Clone + 'static> {
    key: LocalKey,
    default: Rc<dyn Fn() -> T>,
}

impl<T: Clone + 'static> PartialEq for CompositionLocal<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<T: Clone + 'static> Eq for CompositionLocal<T> {}

impl<T: Clone + 'static> CompositionLocal<T> {
    pub fn provides(&self, value: T) -> ProvidedValue {
        ProvidedValue {
            key: self.key,
            value: Rc::new(value),
        }
    }

    /// Nearest value provided in `scope` or its ancestors, else the default.
    pub fn current(&self, scope: &LocalScope) -> T {
        self.current_or_none(scope)
            .unwrap_or_else(|| self.default_value())
    }

    /// Like [`current`](Self::current) but without falling back to the default.
    pub fn current_or_none(&self, scope: &LocalScope) -> Option<T> {
        scope
            .lookup(self.key)
            .and_then(|value| value.downcast_ref::<T>().cloned())
    }

    pub fn default_value(&self) -> T {
        (self.default)()
    }

    pub fn key(&self) -> usize {
        self.key
    }
}

impl<T: Clone + 'static> fmt::Debug for CompositionLocal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositionLocal")
            .field("key", &self.key)
            .finish()
    }
}

#[allow(non_snake_case)]
pub fn compositionLocalOf<T: Clone + 'static>(
    default: impl Fn() -> T + 'static,
) -> CompositionLocal<T> {
    CompositionLocal {
        key: next_local_key(),
        default: Rc::new(default),
    }
}

/// Runs `content` in a child of `parent` that provides `values`.
#[allow(non_snake_case)]
pub fn CompositionLocalProvider<R>(
    parent: &LocalScope,
    values: impl IntoIterator<Item = ProvidedValue>,
    content: impl FnOnce(&LocalScope) -> R,
) -> R {
    let scope = parent.child();
    scope.provide_all(values);
    content(&scope)
}
