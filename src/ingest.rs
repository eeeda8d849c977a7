//! Fetch-parse-merge pipeline for one submitted url.
//!
//! Feeds are fetched through the allorigins proxy, which wraps the raw
//! document in a json envelope. The pipeline always resolves: failures are
//! classified into a [`LoadError`] and land in `loading_process`, never in
//! a return value.

use serde::Deserialize;
use url::Url;

use crate::error::{IngestError, LoadError};
use crate::models::{self, Feed, LoadingProcess, Post};
use crate::parser::{self, ParsedFeed};
use crate::store::SharedStore;

/// Compatibility surface: host, path and query parameter names must match
/// what the proxy expects.
pub const PROXY_ORIGIN: &str = "https://allorigins.hexlet.app";

#[derive(Debug, Deserialize)]
struct ProxyEnvelope {
    contents: String,
}

/// Wraps the target url into a proxied GET address, cache disabled.
pub fn add_proxy(url: &str) -> Result<Url, url::ParseError> {
    let mut proxied = Url::parse(PROXY_ORIGIN)?.join("/get")?;
    proxied
        .query_pairs_mut()
        .append_pair("url", url)
        .append_pair("disableCache", "true");
    Ok(proxied)
}

/// Runs the whole pipeline for one url. The loading flip happens before the
/// first await point; overlapping calls are allowed and settle in
/// resolution order.
pub async fn ingest(store: &SharedStore, client: &reqwest::Client, url: &str) {
    begin(store);
    let outcome = fetch_and_parse(client, url).await;
    resolve(store, url, outcome);
}

/// Marks the shared loading process as in flight.
pub fn begin(store: &SharedStore) {
    if let Ok(mut store) = store.write() {
        store.set_loading(LoadingProcess::loading());
    }
}

async fn fetch_and_parse(client: &reqwest::Client, url: &str) -> Result<ParsedFeed, IngestError> {
    let proxied = add_proxy(url)?;
    let response = client.get(proxied).send().await?.error_for_status()?;
    let body = response.text().await?;
    let ProxyEnvelope { contents } = serde_json::from_str(&body)?;
    Ok(parser::parse(&contents)?)
}

/// Applies a settled fetch outcome to the store. On success the new feed
/// and its posts are prepended; on failure the collections stay untouched
/// and only the classified error is published.
pub fn resolve(store: &SharedStore, url: &str, outcome: Result<ParsedFeed, IngestError>) {
    match outcome {
        Ok(parsed) => {
            let (feed, posts) = build_records(url, parsed);
            tracing::info!("loaded {} with {} posts", feed.url, posts.len());
            if let Ok(mut store) = store.write() {
                store.set_loading(LoadingProcess::success());
                store.prepend_feed(feed);
                store.prepend_posts(posts);
            }
        }
        Err(error) => {
            tracing::warn!("loading {url} failed: {error}");
            if let Ok(mut store) = store.write() {
                store.set_loading(LoadingProcess::failed(classify(&error)));
            }
        }
    }
}

/// Stamps parsed records with fresh session ids. Every post points back at
/// the feed it arrived with.
pub fn build_records(url: &str, parsed: ParsedFeed) -> (Feed, Vec<Post>) {
    let feed = Feed {
        id: models::next_id(),
        url: url.to_owned(),
        title: parsed.title,
        description: parsed.description,
    };
    let posts = parsed
        .items
        .into_iter()
        .map(|item| Post {
            id: models::next_id(),
            channel_id: feed.id.clone(),
            title: item.title,
            description: item.description,
            link: item.link,
        })
        .collect();
    (feed, posts)
}

/// Total mapping from pipeline failures to the user-visible taxonomy.
pub fn classify(error: &IngestError) -> LoadError {
    match error {
        IngestError::Parse(_) => LoadError::NotRss,
        IngestError::Http(_) => LoadError::Network,
        IngestError::Address(_) | IngestError::Envelope(_) => LoadError::Unknown,
    }
}
