use serde::Serialize;
use serde_json::Value;

use crate::{
    Error,
    model::{BulkLookupResult, LookupResult},
    normalize::normalize_all,
};

/// A decoded response body: a single lookup, or a normalized bulk lookup in
/// request order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Single(LookupResult),
    Bulk(Vec<LookupResult>),
}

impl Response {
    pub fn len(&self) -> usize {
        match self {
            Response::Single(_) => 1,
            Response::Bulk(results) => results.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_vec(self) -> Vec<LookupResult> {
        match self {
            Response::Single(result) => vec![result],
            Response::Bulk(results) => results,
        }
    }
}

pub fn decode_lookup(body: &str) -> Result<LookupResult, Error> {
    Ok(serde_json::from_str(body)?)
}

/// Decodes a bulk body: a JSON array of records in request order.
pub fn decode_bulk(body: &str) -> Result<Vec<BulkLookupResult>, Error> {
    Ok(serde_json::from_str(body)?)
}

pub fn decode_bulk_normalized(body: &str) -> Result<Vec<LookupResult>, Error> {
    let records = decode_bulk(body)?;
    Ok(normalize_records(records))
}

/// Decodes either shape, telling them apart by the top-level JSON type.
pub fn decode_any(body: &str) -> Result<Response, Error> {
    match serde_json::from_str::<Value>(body)? {
        value @ Value::Array(_) => {
            let records: Vec<BulkLookupResult> = serde_json::from_value(value)?;
            Ok(Response::Bulk(normalize_records(records)))
        }
        value => Ok(Response::Single(serde_json::from_value(value)?)),
    }
}

pub fn encode<T>(value: &T, pretty: bool) -> Result<String, Error>
where
    T: Serialize + ?Sized,
{
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(text)
}

fn normalize_records(records: Vec<BulkLookupResult>) -> Vec<LookupResult> {
    debug!("bulk response with {} record(s)", records.len());
    for record in &records {
        if let Some(message) = record.message() {
            warn!("bulk record {}: {}", record, message);
        }
    }
    normalize_all(records)
}
