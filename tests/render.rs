use std::collections::HashSet;

use feedbox::error::{FormError, LoadError};
use feedbox::i18n::{Locale, Translator};
use feedbox::models::{
    Feed, FormState, LoadingProcess, LoadingStatus, Post, State,
};
use feedbox::render::{Surface, Tone};
use feedbox::store::Change;

fn i18n() -> Translator {
    Translator::new(Locale::En)
}

fn surface() -> Surface {
    Surface::new(&i18n())
}

fn post(id: &str, title: &str) -> Post {
    Post {
        id: id.to_owned(),
        title: title.to_owned(),
        description: format!("{title} described"),
        link: format!("https://example.com/{id}"),
        ..Post::default()
    }
}

#[test]
fn invalid_form_shows_the_translated_error() {
    let i18n = i18n();
    let mut surface = surface();
    let state = State {
        form: FormState::invalid(FormError::NotUrl),
        ..State::default()
    };

    surface.apply(Change::Form, &state, &i18n);

    assert!(surface.input_invalid);
    assert_eq!(surface.feedback.text, "Must be valid url");
    assert_eq!(surface.feedback.tone, Tone::Danger);
}

#[test]
fn valid_form_clears_the_feedback() {
    let i18n = i18n();
    let mut surface = surface();

    let invalid = State {
        form: FormState::invalid(FormError::Exists),
        ..State::default()
    };
    surface.apply(Change::Form, &invalid, &i18n);

    let valid = State {
        form: FormState::valid(),
        ..State::default()
    };
    surface.apply(Change::Form, &valid, &i18n);

    assert!(!surface.input_invalid);
    assert_eq!(surface.feedback.text, "");
}

#[test]
fn loading_walks_the_state_machine() {
    let i18n = i18n();
    let mut surface = surface();
    surface.input = "https://example.com/feed".to_owned();

    let mut state = State {
        loading_process: LoadingProcess::loading(),
        ..State::default()
    };
    surface.apply(Change::LoadingProcess, &state, &i18n);
    assert!(!surface.input_enabled);
    assert_eq!(surface.feedback.text, "RSS is loading");
    assert_eq!(surface.feedback.tone, Tone::Neutral);
    // the in-flight url stays visible while disabled
    assert_eq!(surface.input, "https://example.com/feed");

    state.loading_process = LoadingProcess::success();
    surface.apply(Change::LoadingProcess, &state, &i18n);
    assert!(surface.input_enabled);
    assert_eq!(surface.input, "");
    assert_eq!(surface.feedback.text, "RSS loading successfully");
    assert_eq!(surface.feedback.tone, Tone::Success);

    state.loading_process = LoadingProcess::failed(LoadError::Network);
    surface.apply(Change::LoadingProcess, &state, &i18n);
    assert!(surface.input_enabled);
    assert_eq!(surface.feedback.text, "Network error");
    assert_eq!(surface.feedback.tone, Tone::Danger);
}

#[test]
fn missing_error_key_falls_back_to_unknown() {
    let i18n = i18n();
    let mut surface = surface();
    let state = State {
        loading_process: LoadingProcess {
            status: LoadingStatus::Failed,
            error: None,
        },
        ..State::default()
    };

    surface.apply(Change::LoadingProcess, &state, &i18n);

    assert_eq!(surface.feedback.text, "Something goes wrong");
}

#[test]
fn feed_cards_follow_state_order() {
    let i18n = i18n();
    let mut surface = surface();
    let state = State {
        feeds: vec![
            Feed {
                title: "Newest".to_owned(),
                description: "fresh".to_owned(),
                ..Feed::default()
            },
            Feed {
                title: "Oldest".to_owned(),
                description: "stale".to_owned(),
                ..Feed::default()
            },
        ],
        ..State::default()
    };

    surface.apply(Change::Feeds, &state, &i18n);

    let titles: Vec<_> = surface.feeds.iter().map(|f| f.title.as_str()).collect();
    assert_eq!(titles, ["Newest", "Oldest"]);
}

#[test]
fn watched_posts_render_visited() {
    let i18n = i18n();
    let mut surface = surface();
    let state = State {
        posts: vec![post("p1", "One"), post("p2", "Two")],
        watched_posts: HashSet::from(["p1".to_owned()]),
        ..State::default()
    };

    surface.apply(Change::WatchedPosts, &state, &i18n);

    assert!(surface.posts[0].visited);
    assert!(!surface.posts[1].visited);
}

#[test]
fn modal_populates_the_detail_card() {
    let i18n = i18n();
    let mut surface = surface();
    let mut state = State {
        posts: vec![Post {
            id: "p1".to_owned(),
            title: "Rust & ownership".to_owned(),
            description: "moves &amp; borrows".to_owned(),
            link: "https://example.com/p1".to_owned(),
            ..Post::default()
        }],
        ..State::default()
    };
    state.modal.post_id = "p1".to_owned();

    surface.apply(Change::ModalPost, &state, &i18n);

    let card = surface.modal.expect("card must be built");
    assert_eq!(card.title, "Rust & ownership");
    // entities in the body are unescaped for display
    assert_eq!(card.body, "moves & borrows");
    assert_eq!(card.link, "https://example.com/p1");
    assert_eq!(card.read_label, "Read completely");
    assert_eq!(card.close_label, "Close");
}

#[test]
fn handlers_are_idempotent() {
    let i18n = i18n();
    let mut surface = surface();
    let state = State {
        form: FormState::invalid(FormError::NotUrl),
        loading_process: LoadingProcess::failed(LoadError::NotRss),
        posts: vec![post("p1", "One")],
        feeds: vec![Feed::default()],
        watched_posts: HashSet::from(["p1".to_owned()]),
        ..State::default()
    };

    for change in [
        Change::Form,
        Change::LoadingProcess,
        Change::Feeds,
        Change::Posts,
        Change::WatchedPosts,
    ] {
        surface.apply(change, &state, &i18n);
        let once = surface.clone();
        surface.apply(change, &state, &i18n);
        assert_eq!(surface, once, "{change:?} must be re-render-safe");
    }
}
