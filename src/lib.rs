//! Data model for ipdata.co lookup responses.
//!
//! Single lookups decode into [`LookupResult`]. Bulk lookups decode into
//! [`BulkLookupResult`] records, which [`normalize`](normalize::normalize)
//! turns into the single-lookup shape.

#[macro_use]
extern crate tracing;

pub mod config;
pub mod decode;
mod error;
pub mod model;
pub mod normalize;
pub mod trace;
mod util;

pub use decode::Response;
pub use error::Error;
pub use model::{
    Asn, BulkLookupResult, Currency, IpDetails, Language, LookupResult, Threat, TimeZone,
};
