//! Core types for Reelhang

use serde::Deserialize;

/// One movie record as returned by the remote catalog.
///
/// Records are immutable once fetched and live only for the current
/// screen activation. Optional fields tolerate catalog entries that
/// omit an image or a canonical URL.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct MovieRecord {
    #[serde(default)]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Wire shape of the catalog body.
///
/// The endpoint is known to serve either a bare array of records or an
/// object wrapping them in a `results` field. Both decode to the same
/// record list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CatalogBody {
    Listed { results: Vec<MovieRecord> },
    Bare(Vec<MovieRecord>),
}

impl CatalogBody {
    pub fn into_records(self) -> Vec<MovieRecord> {
        match self {
            CatalogBody::Listed { results } => results,
            CatalogBody::Bare(records) => records,
        }
    }
}

/// One tile of the gallery screen, derived from a catalog record.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryItem {
    /// Display identifier: trailing path segment of the record URL,
    /// falling back to the record id, falling back to the 1-based
    /// position in the fetched list.
    pub display_id: String,
    pub title: String,
    pub image: Option<String>,
}

impl GalleryItem {
    pub fn from_record(record: &MovieRecord, position: usize) -> Self {
        let display_id = record
            .url
            .as_deref()
            .and_then(trailing_segment)
            .map(str::to_string)
            .or_else(|| {
                if record.id.is_empty() {
                    None
                } else {
                    Some(record.id.clone())
                }
            })
            .unwrap_or_else(|| (position + 1).to_string());

        Self {
            display_id,
            title: record.title.clone(),
            image: record.image.clone(),
        }
    }
}

/// Derive gallery tiles for a full record list, preserving order.
pub fn gallery_items(records: &[MovieRecord]) -> Vec<GalleryItem> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| GalleryItem::from_record(record, i))
        .collect()
}

/// Last non-empty path segment of a URL, ignoring a trailing slash.
fn trailing_segment(url: &str) -> Option<&str> {
    url.split('/').rev().find(|segment| !segment.is_empty())
}
