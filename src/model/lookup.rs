use std::{fmt, net::IpAddr};

use serde::{Deserialize, Serialize};

use crate::{Error, util::nullable};

use super::{Asn, Currency, Language, Threat, TimeZone};

/// Fields shared by the single and bulk response shapes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IpDetails {
    #[serde(deserialize_with = "nullable")]
    pub ip: String,
    #[serde(deserialize_with = "nullable")]
    pub asn: Asn,
    #[serde(rename = "organisation", deserialize_with = "nullable")]
    pub organization: String,

    #[serde(deserialize_with = "nullable")]
    pub city: String,
    #[serde(deserialize_with = "nullable")]
    pub region: String,
    #[serde(deserialize_with = "nullable")]
    pub postal: String,

    #[serde(deserialize_with = "nullable")]
    pub country_name: String,
    #[serde(deserialize_with = "nullable")]
    pub country_code: String,

    /// URL of the country flag image.
    #[serde(deserialize_with = "nullable")]
    pub flag: String,
    #[serde(deserialize_with = "nullable")]
    pub emoji_flag: String,
    /// Codepoints of `emoji_flag`, e.g. `U+1F1FA U+1F1F8`.
    #[serde(deserialize_with = "nullable")]
    pub emoji_unicode: String,

    #[serde(deserialize_with = "nullable")]
    pub continent_name: String,
    #[serde(deserialize_with = "nullable")]
    pub continent_code: String,

    #[serde(deserialize_with = "nullable")]
    pub latitude: f64,
    #[serde(deserialize_with = "nullable")]
    pub longitude: f64,

    #[serde(deserialize_with = "nullable")]
    pub calling_code: String,

    #[serde(deserialize_with = "nullable")]
    pub is_eu: bool,

    #[serde(
        rename = "language",
        deserialize_with = "nullable",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub languages: Vec<Language>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<TimeZone>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub threat: Option<Threat>,
}

/// A single IP lookup response from ipdata.co.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LookupResult {
    #[serde(flatten)]
    pub details: IpDetails,
    #[serde(default, deserialize_with = "nullable")]
    pub region_code: String,
}

impl LookupResult {
    pub fn ip_addr(&self) -> Result<IpAddr, Error> {
        let ip = self.details.ip.trim();
        ip.parse().map_err(|_err| Error::ip_parse_error(ip))
    }
}

impl fmt::Display for LookupResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.details.ip)
    }
}
