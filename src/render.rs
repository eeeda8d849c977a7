//! Change-to-presentation dispatch.
//!
//! [`Surface`] is the retained view-model the egui layer paints every
//! frame. [`Surface::apply`] routes one committed [`Change`] to the handler
//! for the affected region; every handler rebuilds its region from scratch
//! off the current state, so applying the same change twice is a no-op.

use crate::i18n::Translator;
use crate::models::{LoadingStatus, State};
use crate::store::Change;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tone {
    #[default]
    Neutral,
    Success,
    Danger,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Feedback {
    pub text: String,
    pub tone: Tone,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeedCard {
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostRow {
    pub id: String,
    pub title: String,
    pub link: String,
    pub visited: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalCard {
    pub title: String,
    pub body: String,
    pub link: String,
    pub read_label: String,
    pub close_label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Surface {
    pub input: String,
    pub input_enabled: bool,
    pub input_invalid: bool,
    pub feedback: Feedback,
    pub feeds_title: String,
    pub posts_title: String,
    pub preview_label: String,
    pub feeds: Vec<FeedCard>,
    pub posts: Vec<PostRow>,
    pub modal: Option<ModalCard>,
}

impl Surface {
    pub fn new(i18n: &Translator) -> Self {
        Self {
            input: String::new(),
            input_enabled: true,
            input_invalid: false,
            feedback: Feedback::default(),
            feeds_title: i18n.t(&["feeds"]),
            posts_title: i18n.t(&["posts"]),
            preview_label: i18n.t(&["preview"]),
            feeds: Vec::new(),
            posts: Vec::new(),
            modal: None,
        }
    }

    pub fn apply(&mut self, change: Change, state: &State, i18n: &Translator) {
        match change {
            Change::Form => self.render_form(state, i18n),
            Change::LoadingProcess => self.render_loading(state, i18n),
            Change::Feeds => self.render_feeds(state),
            Change::Posts | Change::WatchedPosts => self.render_posts(state),
            Change::ModalPost => self.render_modal(state, i18n),
        }
    }

    fn render_form(&mut self, state: &State, i18n: &Translator) {
        if state.form.is_valid {
            self.input_invalid = false;
            self.feedback = Feedback::default();
        } else {
            let key = state.form.error.map(|e| e.key()).unwrap_or("unknown");
            self.input_invalid = true;
            self.feedback = Feedback {
                text: i18n.t(&[&format!("errors.{key}"), "errors.unknown"]),
                tone: Tone::Danger,
            };
        }
    }

    fn render_loading(&mut self, state: &State, i18n: &Translator) {
        match state.loading_process.status {
            LoadingStatus::Loading => {
                self.input_enabled = false;
                self.feedback = Feedback {
                    text: i18n.t(&["loading.loading"]),
                    tone: Tone::Neutral,
                };
            }
            LoadingStatus::Success => {
                self.input_enabled = true;
                self.input.clear();
                self.feedback = Feedback {
                    text: i18n.t(&["loading.success"]),
                    tone: Tone::Success,
                };
            }
            LoadingStatus::Failed => {
                let key = state
                    .loading_process
                    .error
                    .map(|e| e.key())
                    .unwrap_or("unknown");
                self.input_enabled = true;
                self.feedback = Feedback {
                    text: i18n.t(&[&format!("errors.{key}"), "errors.unknown"]),
                    tone: Tone::Danger,
                };
            }
        }
    }

    fn render_feeds(&mut self, state: &State) {
        self.feeds = state
            .feeds
            .iter()
            .map(|feed| FeedCard {
                title: feed.title.clone(),
                description: feed.description.clone(),
            })
            .collect();
    }

    fn render_posts(&mut self, state: &State) {
        self.posts = state
            .posts
            .iter()
            .map(|post| PostRow {
                id: post.id.clone(),
                title: post.title.clone(),
                link: post.link.clone(),
                visited: state.watched_posts.contains(&post.id),
            })
            .collect();
    }

    fn render_modal(&mut self, state: &State, i18n: &Translator) {
        let post = state
            .find_post(&state.modal.post_id)
            .expect("modal references a post that is not in the state");
        self.modal = Some(ModalCard {
            title: post.title.clone(),
            body: htmlize::unescape(&post.description).into_owned(),
            link: post.link.clone(),
            read_label: i18n.t(&["readFull"]),
            close_label: i18n.t(&["close"]),
        });
    }
}
