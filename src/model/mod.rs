mod bulk;
mod details;
mod lookup;

pub use bulk::BulkLookupResult;
pub use details::{Asn, Currency, Language, Threat, TimeZone};
pub use lookup::{IpDetails, LookupResult};
