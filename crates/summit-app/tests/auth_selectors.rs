//! End-to-end tests for the auth selectors over a live store.
#![allow(missing_docs)]

use futures::{FutureExt, StreamExt};
use summit_app::selectors::{
    select_auth_state, select_current_user, select_error_message, select_is_loading,
};
use summit_app::{
    AppState, AppStore, AuthAction, AuthState, ConferenceAction, StateStream, TutorialAction,
    User,
};

/// Next value if one is ready right now, `None` if the stream would wait.
fn ready<T>(stream: &mut StateStream<T>) -> Option<T> {
    stream.next().now_or_never().flatten()
}

fn loading_state() -> AppState {
    AppState::from_json(r#"{"auth":{"loading":true}}"#).unwrap()
}

#[tokio::test]
async fn initial_snapshot_projects_every_auth_field() {
    let store = AppStore::new(loading_state());

    let mut loading = store.select(&select_is_loading());
    let mut user = store.select(&select_current_user());
    let mut error = store.select(&select_error_message());

    assert_eq!(loading.next().await, Some(true));
    assert_eq!(user.next().await, Some(None));
    assert_eq!(error.next().await, Some(None));
}

#[tokio::test]
async fn login_success_updates_loading_and_user_but_not_error() {
    let store = AppStore::new(loading_state());

    let mut loading = store.select(&select_is_loading());
    let mut user = store.select(&select_current_user());
    let mut error = store.select(&select_error_message());
    // Drain the initial snapshot.
    assert_eq!(loading.next().await, Some(true));
    assert_eq!(user.next().await, Some(None));
    assert_eq!(error.next().await, Some(None));

    store
        .dispatch(AuthAction::LoginSucceeded(User::new(1, "A")))
        .unwrap();

    assert_eq!(loading.next().await, Some(false));
    assert_eq!(user.next().await, Some(Some(User::new(1, "A"))));
    assert_eq!(ready(&mut error), None, "error is still None; must not re-emit");
}

#[tokio::test]
async fn failed_login_emits_error_message() {
    let store = AppStore::default();
    let mut error = store.select(&select_error_message());
    assert_eq!(error.next().await, Some(None));

    store
        .dispatch(AuthAction::LoginFailed("Invalid credentials".to_string()))
        .unwrap();

    assert_eq!(
        error.next().await,
        Some(Some("Invalid credentials".to_string()))
    );
}

#[tokio::test]
async fn unrelated_branch_changes_are_suppressed() {
    let store = AppStore::default();
    let mut loading = store.select(&select_is_loading());
    let mut auth = store.select(&select_auth_state());
    assert_eq!(loading.next().await, Some(false));
    assert_eq!(auth.next().await, Some(AuthState::default()));

    store.dispatch(TutorialAction::SlideChanged(1)).unwrap();
    store.dispatch(ConferenceAction::SpeakersRequested).unwrap();
    store.dispatch(TutorialAction::Completed).unwrap();

    assert_eq!(ready(&mut loading), None);
    assert_eq!(ready(&mut auth), None);

    store.dispatch(AuthAction::CheckToken).unwrap();
    assert_eq!(loading.next().await, Some(true));
}

#[tokio::test]
async fn outputs_follow_dispatch_order() {
    let store = AppStore::default();
    let loading = store.select(&select_is_loading());

    store.dispatch(AuthAction::LoginRequested).unwrap();
    store
        .dispatch(AuthAction::LoginFailed("nope".to_string()))
        .unwrap();
    store.dispatch(AuthAction::CheckToken).unwrap();
    store
        .dispatch(AuthAction::LoginSucceeded(User::new(2, "B")))
        .unwrap();
    store.dispatch(AuthAction::Logout).unwrap();
    store.close();

    let seen: Vec<bool> = loading.collect().await;
    assert_eq!(seen, vec![false, true, false, true, false]);
}

#[tokio::test]
async fn two_subscriptions_are_independent() {
    let store = AppStore::default();
    let selector = select_current_user();

    let first = store.select(&selector);
    store
        .dispatch(AuthAction::LoginSucceeded(User::new(1, "A")))
        .unwrap();
    let second = store.select(&selector);
    store.dispatch(AuthAction::Logout).unwrap();
    store.close();

    let first: Vec<Option<User>> = first.collect().await;
    let second: Vec<Option<User>> = second.collect().await;
    assert_eq!(first, vec![None, Some(User::new(1, "A")), None]);
    assert_eq!(second, vec![Some(User::new(1, "A")), None]);
}

#[tokio::test]
async fn dropping_a_selector_stream_unsubscribes() {
    let store = AppStore::default();
    let stream = store.select(&select_is_loading());
    assert_eq!(store.subscriber_count(), 1);

    drop(stream);
    store.dispatch(AuthAction::CheckToken).unwrap();
    assert_eq!(store.subscriber_count(), 0);
}

#[tokio::test]
async fn selectors_agree_with_snapshot_fields() {
    let store = AppStore::default();
    let mut auth = store.select(&select_auth_state());
    let mut error = store.select(&select_error_message());
    let mut user = store.select(&select_current_user());
    let mut loading = store.select(&select_is_loading());

    let script = [
        AuthAction::CheckToken,
        AuthAction::LoginFailed("expired".to_string()),
        AuthAction::LoginRequested,
        AuthAction::LoginSucceeded(User::new(9, "Z")),
    ];
    let mut last = (None, None, None);
    for action in script {
        store.dispatch(action).unwrap();
        let snapshot = store.snapshot();
        // Each selector either emitted the new field value or stayed quiet
        // because it did not change.
        while let Some(value) = ready(&mut error) {
            last.0 = Some(value);
        }
        while let Some(value) = ready(&mut user) {
            last.1 = Some(value);
        }
        while let Some(value) = ready(&mut loading) {
            last.2 = Some(value);
        }
        while ready(&mut auth).is_some() {}

        assert_eq!(last.0.as_ref(), Some(&snapshot.auth.error));
        assert_eq!(last.1.as_ref(), Some(&snapshot.auth.current_user));
        assert_eq!(last.2, Some(snapshot.auth.loading));
    }
}
