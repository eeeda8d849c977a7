use std::sync::{Arc, RwLock};

use tokio::sync::mpsc::UnboundedSender;

use crate::models::{Feed, FormState, LoadingProcess, Post, State};

/// What part of the [`State`] a setter just reassigned. Closed set, the
/// render side matches on it exhaustively.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Change {
    Form,
    LoadingProcess,
    Feeds,
    Posts,
    WatchedPosts,
    ModalPost,
}

pub type SharedStore = Arc<RwLock<Store>>;

/// Owns the state tree. All writes go through the setters below; each one
/// commits its mutation and then queues exactly one [`Change`] for the
/// render side. No deduplication, no batching: reassigning an equal value
/// still notifies, and callers doing several assignments get one event per
/// assignment, in order.
#[derive(Debug)]
pub struct Store {
    state: State,
    changes: UnboundedSender<Change>,
}

impl Store {
    pub fn new(changes: UnboundedSender<Change>) -> Self {
        Self {
            state: State::new(),
            changes,
        }
    }

    pub fn shared(changes: UnboundedSender<Change>) -> SharedStore {
        Arc::new(RwLock::new(Self::new(changes)))
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn set_form(&mut self, form: FormState) {
        self.state.form = form;
        self.notify(Change::Form);
    }

    pub fn set_loading(&mut self, loading: LoadingProcess) {
        self.state.loading_process = loading;
        self.notify(Change::LoadingProcess);
    }

    /// Newest feed first.
    pub fn prepend_feed(&mut self, feed: Feed) {
        self.state.feeds.insert(0, feed);
        self.notify(Change::Feeds);
    }

    /// Newest batch first, relative order inside the batch preserved.
    pub fn prepend_posts(&mut self, posts: Vec<Post>) {
        self.state.posts.splice(0..0, posts);
        self.notify(Change::Posts);
    }

    pub fn watch_post(&mut self, id: String) {
        self.state.watched_posts.insert(id);
        self.notify(Change::WatchedPosts);
    }

    pub fn open_modal(&mut self, id: String) {
        self.state.modal.post_id = id;
        self.notify(Change::ModalPost);
    }

    fn notify(&self, change: Change) {
        // only fails when the ui side is already gone
        if self.changes.send(change).is_err() {
            tracing::warn!("dropped change event {change:?}");
        }
    }
}
