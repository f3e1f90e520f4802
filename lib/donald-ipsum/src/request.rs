use crate::{Error, Result};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Endpoint {
    Paragraphs,
    Sentences,
    Words,
}

impl Endpoint {
    pub const ALL: [Endpoint; 3] = [Endpoint::Paragraphs, Endpoint::Sentences, Endpoint::Words];

    /// Path segment appended to the base URL.
    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::Paragraphs => "paragraphs",
            Endpoint::Sentences => "sentences",
            Endpoint::Words => "words",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Collapses anything that is not a non-negative integer to `0`.
///
/// `0` means "no count", so an explicit zero and an absent count build the
/// same request and the server picks its default amount.
pub fn normalize_count(count: impl Into<Option<i64>>) -> u64 {
    match count.into() {
        Some(n) if n >= 0 => n as u64,
        _ => 0,
    }
}

/// Same rule as [`normalize_count`] for textual input: non-integers such as
/// `"2.5"` or `"five"` count as absent.
pub fn parse_count(text: &str) -> u64 {
    normalize_count(text.trim().parse::<i64>().ok())
}

/// Builds `<base_url>/<endpoint>[?count=<n>]`.
///
/// The query parameter is only attached when the normalized count is
/// non-zero. Query pairs already present on `base_url` are kept.
pub fn construct_uri(
    base_url: &str,
    endpoint: Endpoint,
    count: impl Into<Option<i64>>,
) -> Result<Url> {
    let mut url = Url::parse(base_url).map_err(|e| Error::InvalidBaseUrl {
        url: base_url.to_string(),
        error: e.to_string(),
    })?;

    if url.cannot_be_a_base() {
        return Err(Error::InvalidBaseUrl {
            url: base_url.to_string(),
            error: "URL cannot be used as a base".to_string(),
        });
    }

    let path = format!("{}/{}", url.path().trim_end_matches('/'), endpoint);
    url.set_path(&path);

    let count = normalize_count(count);
    if count != 0 {
        url.query_pairs_mut()
            .append_pair("count", &count.to_string());
    }

    Ok(url)
}
