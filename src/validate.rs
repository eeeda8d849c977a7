use url::Url;

use crate::error::FormError;
use crate::models::Feed;

/// Checks a candidate url before it is handed to the ingestion pipeline.
/// Duplicate detection is an exact, case-sensitive match against the url
/// the feed was originally submitted with; no normalization.
pub fn validate(candidate: &str, feeds: &[Feed]) -> Option<FormError> {
    let parsed = match Url::parse(candidate) {
        Ok(parsed) => parsed,
        Err(_) => return Some(FormError::NotUrl),
    };
    if !matches!(parsed.scheme(), "http" | "https") {
        return Some(FormError::NotUrl);
    }
    if feeds.iter().any(|feed| feed.url == candidate) {
        return Some(FormError::Exists);
    }
    None
}
