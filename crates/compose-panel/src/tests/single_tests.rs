use super::*;
use crate::state::ComposeSnapshot;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq)]
struct User {
    id: u32,
}

fn owner(detach_on_close: bool) -> (LocalScope, Compose<User>) {
    let scope = LocalScope::root();
    let compose = use_compose(&scope, ComposeOptions { detach_on_close });
    (scope, compose)
}

#[test]
fn create_opens_in_create_mode_with_payload() {
    let (_scope, compose) = owner(true);

    compose.create(Some(User { id: 1 }));

    assert_eq!(
        compose.state().snapshot(),
        ComposeSnapshot {
            active: true,
            creating: true,
            updating: false,
            data: Some(User { id: 1 }),
        }
    );
}

#[test]
fn edit_overrides_any_prior_state() {
    let (_scope, compose) = owner(true);
    compose.create(None);
    compose.close();

    compose.edit(Some(User { id: 2 }));

    assert_eq!(
        compose.state().snapshot(),
        ComposeSnapshot {
            active: true,
            creating: false,
            updating: true,
            data: Some(User { id: 2 }),
        }
    );
}

#[test]
fn close_detaches_payload_only_when_configured() {
    let (_scope, detaching) = owner(true);
    detaching.edit(Some(User { id: 3 }));
    detaching.close();
    let closed = detaching.state().snapshot();
    assert!(!closed.active);
    assert!(!closed.updating);
    assert_eq!(closed.data, None);

    let (_scope, keeping) = owner(false);
    keeping.edit(Some(User { id: 4 }));
    keeping.close();
    let closed = keeping.state().snapshot();
    assert!(!closed.active);
    assert!(!closed.updating);
    assert_eq!(closed.data, Some(User { id: 4 }));
}

#[test]
fn toggle_twice_restores_active() {
    let (_scope, compose) = owner(true);
    assert!(!compose.state().is_active());

    compose.toggle();
    assert!(compose.state().is_active());
    compose.toggle();
    assert!(!compose.state().is_active());

    compose.edit(Some(User { id: 5 }));
    compose.toggle();
    compose.toggle();
    let snapshot = compose.state().snapshot();
    assert!(snapshot.active);
    assert!(!snapshot.updating);
    assert_eq!(snapshot.data, None);
}

#[test]
fn consumer_labels_follow_owner_transitions() {
    let (scope, compose) = owner(true);
    let context =
        use_compose_context::<User>(&scope.child(), "User", LabelOptions::default()).unwrap();

    assert_eq!(context.title(), "Create User");
    assert_eq!(context.action(), "Save");

    compose.edit(Some(User { id: 6 }));
    assert_eq!(context.title(), "Edit User");
    assert_eq!(context.action(), "Save changes");
    assert_eq!(context.data().value(), Some(User { id: 6 }));
    assert!(context.updating().value());

    compose.create(None);
    assert_eq!(context.title(), "Create User");
    assert_eq!(context.action(), "Save");
}

#[test]
fn consumers_share_the_owner_state() {
    let (scope, compose) = owner(true);
    let first =
        use_compose_context::<User>(&scope.child(), "User", LabelOptions::default()).unwrap();
    let second =
        use_compose_context::<User>(&scope.child(), "Member", LabelOptions::default()).unwrap();

    compose.open();

    assert!(first.active().value());
    assert!(second.active().value());
    assert!(first.state().same_as(compose.state()));
    assert_eq!(second.name(), "Member");
}

#[test]
fn consumer_without_owner_is_rejected() {
    let scope = LocalScope::root();

    let err = use_compose_context::<User>(&scope, "User", LabelOptions::default()).unwrap_err();

    assert_eq!(
        err,
        ComposeError::MissingProvider {
            name: "User".to_string(),
            provider: "use_compose",
        }
    );
    assert!(err.to_string().contains("use_compose"));
}

#[test]
fn custom_labels_are_applied() {
    let (scope, compose) = owner(true);
    let labels = LabelOptions::default()
        .create_title("New %")
        .update_action("Update %");
    let context = use_compose_context::<User>(&scope.child(), "invoice", labels).unwrap();

    assert_eq!(context.title(), "New invoice");
    compose.edit(None);
    assert_eq!(context.title(), "Edit invoice");
    assert_eq!(context.action(), "Update invoice");
}

#[test]
fn label_states_notify_subscribers_on_mode_change() {
    let (scope, compose) = owner(true);
    let context =
        use_compose_context::<User>(&scope.child(), "User", LabelOptions::default()).unwrap();
    let seen = Rc::new(RefCell::new(Vec::new()));

    let _title = {
        let seen = Rc::clone(&seen);
        let title = context.title_state().as_state();
        context
            .title_state()
            .as_state()
            .subscribe(move || seen.borrow_mut().push(title.value()))
    };
    let _action = {
        let seen = Rc::clone(&seen);
        let action = context.action_state().as_state();
        context
            .action_state()
            .as_state()
            .subscribe(move || seen.borrow_mut().push(action.value()))
    };

    compose.edit(Some(User { id: 8 }));

    assert_eq!(
        *seen.borrow(),
        vec!["Edit User".to_string(), "Save changes".to_string()]
    );
}
