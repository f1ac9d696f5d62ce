//! IP address classification.
//!
//! Search input is validated locally before any network request is made.
//! Recognized forms are full-string IPv4 dotted-quads (each octet 0-255)
//! and full-string IPv6 written as eight colon-separated 1-4 digit hex
//! groups. Compressed IPv6 (`::`) is not recognized.

use std::sync::LazyLock;

use regex::Regex;

static IPV4_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(25[0-5]|2[0-4]\d|[01]?\d\d?)(\.(25[0-5]|2[0-4]\d|[01]?\d\d?)){3}$")
        .expect("ipv4 pattern compiles")
});

static IPV6_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^([0-9a-f]{1,4}:){7}[0-9a-f]{1,4}$").expect("ipv6 pattern compiles")
});

/// Classification of a candidate IP string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpKind {
    V4,
    V6,
    Invalid,
}

/// Classify `input` as IPv4, IPv6, or invalid. Pure and total; never
/// touches the network and never panics.
pub fn classify_ip(input: &str) -> IpKind {
    if IPV4_RE.is_match(input) {
        IpKind::V4
    } else if IPV6_RE.is_match(input) {
        IpKind::V6
    } else {
        IpKind::Invalid
    }
}

/// True iff `input` is a recognized IPv4 or IPv6 address.
pub fn is_valid_ip(input: &str) -> bool {
    classify_ip(input) != IpKind::Invalid
}
