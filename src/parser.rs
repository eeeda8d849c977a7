//! Boundary over `feed_rs`: raw document text in, the few fields we render
//! out. Anything `feed_rs` rejects surfaces as a [`ParsingError`].

use crate::error::ParsingError;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedFeed {
    pub title: String,
    pub description: String,
    pub items: Vec<ParsedItem>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedItem {
    pub title: String,
    pub description: String,
    pub link: String,
}

pub fn parse(document: &str) -> Result<ParsedFeed, ParsingError> {
    let feed = feed_rs::parser::parse(document.as_bytes())?;

    let items = feed
        .entries
        .into_iter()
        .map(|entry| ParsedItem {
            title: entry.title.map(|t| t.content).unwrap_or_default(),
            description: entry.summary.map(|t| t.content).unwrap_or_default(),
            link: entry
                .links
                .into_iter()
                .next()
                .map(|link| link.href)
                .unwrap_or_default(),
        })
        .collect();

    Ok(ParsedFeed {
        title: feed.title.map(|t| t.content).unwrap_or_default(),
        description: feed.description.map(|t| t.content).unwrap_or_default(),
        items,
    })
}
