use super::*;

#[test]
fn default_value_used_outside_provider() {
    let local = compositionLocalOf(|| 7);
    let scope = LocalScope::root();

    assert_eq!(local.current(&scope), 7);
    assert_eq!(local.current_or_none(&scope), None);
}

#[test]
fn provider_scopes_values_to_descendants() {
    let local = compositionLocalOf(|| 0);
    let root = LocalScope::root();

    let seen = CompositionLocalProvider(&root, vec![local.provides(3)], |scope| {
        let grandchild = scope.child().child();
        assert_eq!(grandchild.depth(), 3);
        local.current(&grandchild)
    });

    assert_eq!(seen, 3);
    assert_eq!(local.current(&root), 0);
}

#[test]
fn nearest_provider_shadows_outer_one() {
    let local = compositionLocalOf(|| "default");
    let root = LocalScope::root();
    root.provide(local.provides("outer"));

    let inner = root.child();
    inner.provide(local.provides("inner"));
    let leaf = inner.child();

    assert_eq!(local.current(&leaf), "inner");
    assert_eq!(local.current(&root.child()), "outer");
    assert!(inner.provides_locally(&local));
    assert!(!leaf.provides_locally(&local));
}

#[test]
fn locals_with_same_type_do_not_cross_resolve() {
    let first = compositionLocalOf(|| None::<i32>);
    let second = compositionLocalOf(|| None::<i32>);
    let scope = LocalScope::root();
    scope.provide(first.provides(Some(1)));

    assert_ne!(first, second);
    assert_eq!(first.current(&scope), Some(1));
    assert_eq!(second.current(&scope), None);
}

#[test]
fn providing_again_in_same_scope_replaces_value() {
    let local = compositionLocalOf(String::new);
    let scope = LocalScope::root();
    scope.provide(local.provides("a".to_string()));
    scope.provide(local.provides("b".to_string()));

    assert_eq!(local.current(&scope), "b");
}

#[test]
fn provided_state_handles_stay_shared() {
    let local = compositionLocalOf(|| mutableStateOf(0));
    let state = mutableStateOf(1);
    let scope = LocalScope::root();
    scope.provide(local.provides(state.clone()));

    local.current(&scope.child()).set(42);

    assert_eq!(state.value(), 42);
}

#[test]
fn provided_value_carries_its_local_key() {
    let first = compositionLocalOf(|| 0u8);
    let second = compositionLocalOf(|| 0u8);

    assert_eq!(first.provides(1).key(), first.key());
    assert_ne!(first.key(), second.key());
    assert_eq!(first.clone().key(), first.key());
}
