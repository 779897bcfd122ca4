//! Dotted-quad address format check
//!
//! The check is purely lexical: four dot-separated groups of one to three
//! digits. Octet values are not range-checked, so `999.999.999.999` passes.
//! Existing device registries and operator workflows rely on this exact
//! pattern, so it is kept as is.

use regex::Regex;
use std::sync::LazyLock;

static IPV4_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,3}(\.\d{1,3}){3}$").expect("IPv4 pattern is valid"));

/// Whether `candidate` has the dotted-quad shape accepted by the console
pub fn is_ipv4_format(candidate: &str) -> bool {
    IPV4_FORMAT.is_match(candidate)
}
