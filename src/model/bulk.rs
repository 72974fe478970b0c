use std::fmt;

use serde::{Deserialize, Serialize};

use crate::util::nullable;

use super::IpDetails;

/// One record of a bulk lookup response.
///
/// Each IP in a bulk request succeeds or fails on its own; `message` carries
/// the per-record status and is empty for a successful lookup. The bulk shape
/// has no `region_code`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BulkLookupResult {
    #[serde(flatten)]
    pub details: IpDetails,
    #[serde(default, deserialize_with = "nullable")]
    pub message: String,
}

impl BulkLookupResult {
    pub fn message(&self) -> Option<&str> {
        (!self.message.is_empty()).then_some(self.message.as_str())
    }

    pub fn is_ok(&self) -> bool {
        self.message.is_empty()
    }
}

impl fmt::Display for BulkLookupResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.details.ip)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn decode_with_message() {
        let bulk: BulkLookupResult = serde_json::from_value(json!({
            "ip": "999.1.1.1",
            "message": "999.1.1.1 does not appear to be an IPv4 or IPv6 address",
            "region_code": "XX"
        }))
        .unwrap();

        assert_eq!(bulk.to_string(), "999.1.1.1");
        assert!(!bulk.is_ok());
        assert_eq!(
            bulk.message(),
            Some("999.1.1.1 does not appear to be an IPv4 or IPv6 address")
        );
    }

    #[test]
    fn missing_or_null_message_is_ok() {
        let missing: BulkLookupResult = serde_json::from_value(json!({ "ip": "1.1.1.1" })).unwrap();
        let null: BulkLookupResult =
            serde_json::from_value(json!({ "ip": "1.1.1.1", "message": null })).unwrap();

        for bulk in [missing, null] {
            assert!(bulk.is_ok());
            assert_eq!(bulk.message(), None);
        }
    }

    #[test]
    fn encode_has_no_region_code() {
        let value = serde_json::to_value(BulkLookupResult::default()).unwrap();
        let object = value.as_object().unwrap();
        assert!(object.contains_key("message"));
        assert!(!object.contains_key("region_code"));
    }
}
