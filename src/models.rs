use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{FormError, LoadError};

#[derive(Serialize, Deserialize, Clone, Default, Debug, PartialEq, Eq)]
pub struct Feed {
    pub id: String,
    pub url: String,
    pub title: String,
    pub description: String,
}

#[derive(Serialize, Deserialize, Clone, Default, Debug, PartialEq, Eq)]
pub struct Post {
    pub id: String,
    /// id of the feed this post came from
    pub channel_id: String,
    pub title: String,
    pub description: String,
    pub link: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadingStatus {
    Loading,
    Success,
    Failed,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub is_valid: bool,
    pub error: Option<FormError>,
}

impl FormState {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn invalid(error: FormError) -> Self {
        Self {
            is_valid: false,
            error: Some(error),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadingProcess {
    pub status: LoadingStatus,
    pub error: Option<LoadError>,
}

impl LoadingProcess {
    pub fn loading() -> Self {
        Self {
            status: LoadingStatus::Loading,
            error: None,
        }
    }

    pub fn success() -> Self {
        Self {
            status: LoadingStatus::Success,
            error: None,
        }
    }

    pub fn failed(error: LoadError) -> Self {
        Self {
            status: LoadingStatus::Failed,
            error: Some(error),
        }
    }
}

impl Default for LoadingProcess {
    /// `Success` doubles as the idle state, nothing in flight yet.
    fn default() -> Self {
        Self::success()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Modal {
    /// empty until the user opens a post
    pub post_id: String,
}

/// The whole application state. Reads are free, writes must go through
/// [`crate::Store`] so every mutation emits a change event.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct State {
    pub form: FormState,
    pub loading_process: LoadingProcess,
    pub feeds: Vec<Feed>,
    pub posts: Vec<Post>,
    pub watched_posts: HashSet<String>,
    pub modal: Modal,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find_post(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|post| post.id == id)
    }
}

/// Session-unique opaque id: millisecond timestamp plus a random suffix.
pub fn next_id() -> String {
    let ts = chrono::Utc::now().timestamp_millis();
    let suffix = uuid::Uuid::new_v4().simple().to_string();
    format!("{ts}_{}", &suffix[..8])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_do_not_repeat() {
        let a = next_id();
        let b = next_id();
        assert_ne!(a, b);
    }
}
