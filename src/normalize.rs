//! Bulk-to-single response normalization.
//!
//! A bulk record carries every field of a single lookup except `region_code`,
//! plus a status `message`. Normalizing drops the message and leaves the
//! region code empty.

use std::mem;

use crate::model::{BulkLookupResult, LookupResult};

impl From<BulkLookupResult> for LookupResult {
    fn from(bulk: BulkLookupResult) -> Self {
        let BulkLookupResult { mut details, .. } = bulk;

        // only a non-empty language list is carried over
        let languages = mem::take(&mut details.languages);
        if !languages.is_empty() {
            details.languages = languages;
        }

        LookupResult {
            details,
            region_code: String::new(),
        }
    }
}

pub fn normalize(bulk: BulkLookupResult) -> LookupResult {
    bulk.into()
}

/// Normalizes every record, keeping request order.
pub fn normalize_all<I>(records: I) -> Vec<LookupResult>
where
    I: IntoIterator<Item = BulkLookupResult>,
{
    records.into_iter().map(normalize).collect()
}
