use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    util::{non_empty, nullable},
};

/// Autonomous System Number data.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Asn {
    #[serde(deserialize_with = "nullable")]
    pub asn: String,
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub domain: String,
    #[serde(deserialize_with = "nullable")]
    pub route: String,
    #[serde(rename = "type", deserialize_with = "nullable")]
    pub kind: String,
}

/// A language spoken where the IP resides.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Language {
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub native: String,
}

/// The currency used where the IP resides.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Currency {
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub code: String,
    #[serde(deserialize_with = "nullable")]
    pub symbol: String,
    #[serde(deserialize_with = "nullable")]
    pub native: String,
    #[serde(deserialize_with = "nullable")]
    pub plural: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeZone {
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(rename = "abbr", deserialize_with = "nullable")]
    pub abbreviation: String,
    #[serde(deserialize_with = "nullable")]
    pub offset: String,
    #[serde(deserialize_with = "nullable")]
    pub is_dst: bool,
    #[serde(
        deserialize_with = "non_empty",
        skip_serializing_if = "Option::is_none"
    )]
    pub current_time: Option<String>,
}

impl TimeZone {
    /// Parses `current_time`, which the API sends as RFC 3339 with the zone's
    /// own offset.
    pub fn local_time(&self) -> Option<Result<DateTime<FixedOffset>, Error>> {
        self.current_time
            .as_deref()
            .map(|s| DateTime::parse_from_rfc3339(s).map_err(Error::from))
    }
}

/// Threat intelligence for the IP.
///
/// `is_anonymous` and `is_threat` are derived upstream and kept as sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Threat {
    /// Node on the Tor network.
    #[serde(deserialize_with = "nullable")]
    pub is_tor: bool,
    /// HTTP/HTTPS/SSL/SOCKS/CONNECT or transparent proxy.
    #[serde(deserialize_with = "nullable")]
    pub is_proxy: bool,
    /// `is_tor || is_proxy`
    #[serde(deserialize_with = "nullable")]
    pub is_anonymous: bool,
    /// Known source of attacks, malware or botnet activity.
    #[serde(deserialize_with = "nullable")]
    pub is_known_attacker: bool,
    /// Known source of spam, harvesting or other bot abuse.
    #[serde(deserialize_with = "nullable")]
    pub is_known_abuser: bool,
    /// `is_known_attacker || is_known_abuser`
    #[serde(deserialize_with = "nullable")]
    pub is_threat: bool,
    /// Inside a bogon range.
    #[serde(deserialize_with = "nullable")]
    pub is_bogon: bool,
}

impl Threat {
    pub fn is_clean(&self) -> bool {
        !(self.is_tor
            || self.is_proxy
            || self.is_anonymous
            || self.is_known_attacker
            || self.is_known_abuser
            || self.is_threat
            || self.is_bogon)
    }
}
