use compose_panel::{
    define_compose, use_compose, use_compose_context, use_compose_registry, Compose, ComposeError,
    ComposeOptions, CompositionLocalProvider, LabelOptions, LocalScope,
};

#[test]
fn variants_do_not_cross_resolve() {
    let root = LocalScope::root();
    let _single = use_compose::<u32>(&root, ComposeOptions::default());

    let err = define_compose::<u32>(&root.child(), "Row", LabelOptions::default()).unwrap_err();
    assert!(matches!(err, ComposeError::MissingProvider { .. }));

    let other = LocalScope::root();
    let _registry = use_compose_registry::<u32>(&other, ComposeOptions::default());
    assert!(use_compose_context::<u32>(&other.child(), "Row", LabelOptions::default()).is_err());
}

#[test]
fn payload_types_get_separate_owners() {
    let root = LocalScope::root();
    let numbers = use_compose::<u32>(&root, ComposeOptions::default());
    let words = use_compose::<String>(&root, ComposeOptions::default());

    let number_view =
        use_compose_context::<u32>(&root.child(), "Number", LabelOptions::default()).unwrap();
    let word_view =
        use_compose_context::<String>(&root.child(), "Word", LabelOptions::default()).unwrap();

    numbers.edit(Some(7));
    assert_eq!(number_view.title(), "Edit Number");
    assert_eq!(word_view.title(), "Create Word");
    assert!(!words.state().is_active());
}

#[test]
fn nearest_owner_wins() {
    let root = LocalScope::root();
    let outer = use_compose::<u32>(&root, ComposeOptions::default());

    let inner = Compose::<u32>::new(ComposeOptions::default());

    CompositionLocalProvider(&root, [inner.provides()], |section| {
        let view =
            use_compose_context::<u32>(&section.child(), "Item", LabelOptions::default()).unwrap();

        outer.open();
        assert!(!view.active().value());

        inner.open();
        assert!(view.active().value());
    });
}

#[test]
fn registry_serves_consumers_across_sibling_scopes() {
    let root = LocalScope::root();
    let registry = use_compose_registry::<String>(&root, ComposeOptions::default());

    let sidebar = root.child();
    let content = root.child().child();
    let tags = define_compose::<String>(&sidebar, "Tag", LabelOptions::default()).unwrap();
    let notes = define_compose::<String>(
        &content,
        "Note",
        LabelOptions::default().create_action("Add %"),
    )
    .unwrap();

    registry.create("Note", Some("hello".to_string()));
    registry.edit("Tag", Some("urgent".to_string()));

    assert_eq!(notes.action(), "Add Note");
    assert_eq!(notes.data().value().as_deref(), Some("hello"));
    assert_eq!(tags.title(), "Edit Tag");
    assert_eq!(tags.action(), "Save changes");

    registry.close("Tag");
    assert!(!tags.active().value());
    assert_eq!(tags.data().value(), None);
    assert!(notes.active().value());
}
