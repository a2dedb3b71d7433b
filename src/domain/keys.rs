//! Backend key naming.
//!
//! These names are shared with any data already sitting in the store and must
//! not change: `url:<code>` holds the long URL, `hits:<code>` is a hash of
//! counters whose reserved field `Total` holds the cumulative count.

pub const URL_KEY_PREFIX: &str = "url:";
pub const HITS_KEY_PREFIX: &str = "hits:";
pub const TOTAL_FIELD: &str = "Total";

pub fn url_key(code: &str) -> String {
    format!("{URL_KEY_PREFIX}{code}")
}

pub fn hits_key(code: &str) -> String {
    format!("{HITS_KEY_PREFIX}{code}")
}
