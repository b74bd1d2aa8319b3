//! Speaker list and tutorial selectors over a live store.
#![allow(missing_docs)]

use futures::{FutureExt, StreamExt};
use summit_app::selectors::{
    select_current_slide, select_show_skip, select_slides, select_speaker_by_name,
    select_speaker_sessions, select_speakers, select_speakers_loading,
};
use summit_app::{
    AppState, AppStore, AuthAction, ConferenceAction, Session, Speaker, StateStream, TutorialAction,
};

fn ready<T>(stream: &mut StateStream<T>) -> Option<T> {
    stream.next().now_or_never().flatten()
}

fn speaker(name: &str, twitter: &str, sessions: &[&str]) -> Speaker {
    Speaker {
        name: name.to_string(),
        profile_pic: format!("img/speakers/{}.jpg", name.to_lowercase()),
        twitter: twitter.to_string(),
        about: String::new(),
        sessions: sessions
            .iter()
            .enumerate()
            .map(|(i, title)| Session {
                id: format!("{name}-{i}"),
                name: (*title).to_string(),
                time_start: "09:00".to_string(),
                time_end: "09:45".to_string(),
                location: "Hall A".to_string(),
            })
            .collect(),
    }
}

#[tokio::test]
async fn speaker_list_loads_sorted() {
    let store = AppStore::default();
    let mut speakers = store.select(&select_speakers());
    let mut loading = store.select(&select_speakers_loading());
    assert_eq!(speakers.next().await, Some(Vec::new()));
    assert_eq!(loading.next().await, Some(false));

    store.dispatch(ConferenceAction::SpeakersRequested).unwrap();
    assert_eq!(loading.next().await, Some(true));
    assert_eq!(ready(&mut speakers), None);

    store
        .dispatch(ConferenceAction::SpeakersLoaded(vec![
            speaker("Grace", "grace", &["Compilers"]),
            speaker("Ada", "ada", &["Engines", "Notes"]),
        ]))
        .unwrap();

    let names: Vec<String> = speakers
        .next()
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(names, vec!["Ada", "Grace"]);
    assert_eq!(loading.next().await, Some(false));
}

#[tokio::test]
async fn speaker_detail_and_sessions_follow_name() {
    let store = AppStore::default();
    let mut detail = store.select(&select_speaker_by_name("Ada"));
    let mut sessions = store.select(&select_speaker_sessions("Ada"));
    assert_eq!(detail.next().await, Some(None));
    assert_eq!(sessions.next().await, Some(Vec::new()));

    store
        .dispatch(ConferenceAction::SpeakersLoaded(vec![speaker(
            "Ada",
            "ada",
            &["Engines"],
        )]))
        .unwrap();

    let ada = detail.next().await.unwrap().unwrap();
    assert_eq!(ada.twitter_url().as_deref(), Some("https://twitter.com/ada"));
    let titles: Vec<String> = sessions
        .next()
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(titles, vec!["Engines"]);

    // Auth traffic does not disturb the speaker views.
    store.dispatch(AuthAction::CheckToken).unwrap();
    assert_eq!(ready(&mut detail), None);
    assert_eq!(ready(&mut sessions), None);
}

#[tokio::test]
async fn tutorial_skip_hidden_on_last_slide() {
    let store = AppStore::default();
    let mut skip = store.select(&select_show_skip());
    let mut slide = store.select(&select_current_slide());
    assert_eq!(skip.next().await, Some(true));
    assert_eq!(
        slide.next().await.flatten().map(|s| s.title),
        Some("Welcome to ICA".to_string())
    );

    store.dispatch(TutorialAction::SlideChanged(1)).unwrap();
    assert_eq!(ready(&mut skip), None, "still not the last slide");
    assert_eq!(
        slide.next().await.flatten().map(|s| s.title),
        Some("What is Ionic?".to_string())
    );

    store.dispatch(TutorialAction::SlideChanged(2)).unwrap();
    assert_eq!(skip.next().await, Some(false));

    store.dispatch(TutorialAction::SlideChanged(0)).unwrap();
    assert_eq!(skip.next().await, Some(true));

    store.dispatch(TutorialAction::Completed).unwrap();
    assert_eq!(skip.next().await, Some(false));
}

#[tokio::test]
async fn slides_emit_once() {
    let store = AppStore::default();
    let mut slides = store.select(&select_slides());
    assert_eq!(slides.next().await.map(|s| s.len()), Some(3));

    for index in [1, 2, 1, 0] {
        store.dispatch(TutorialAction::SlideChanged(index)).unwrap();
    }
    assert_eq!(ready(&mut slides), None);
}

#[tokio::test]
async fn out_of_range_slide_index_hides_skip() {
    let state = AppState::from_json(
        r#"{"auth":{"loading":false},"tutorial":{"current":18446744073709551615}}"#,
    )
    .unwrap();
    let store = AppStore::new(state);
    let mut skip = store.select(&select_show_skip());
    let mut slide = store.select(&select_current_slide());

    assert_eq!(skip.next().await, Some(false));
    assert_eq!(slide.next().await, Some(None));
}
