//! The fixed tag schema, expressed as data
//!
//! Nine tags, each with a literal or pattern rule. The table is the
//! single source of truth: the validator walks it in order, so adding or
//! tightening a rule never touches control flow.

use regex::Regex;
use std::sync::LazyLock;

/// 64 lowercase hex characters: a SHA-256 rendered the way the SDK emits it
pub(crate) static SHA256_HEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9a-f]{64}$").expect("SHA256_HEX should compile"));

/// Hyphenated UUID, any version, case-insensitive
pub(crate) static UUID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
        .expect("UUID should compile")
});

/// `0` or a positive decimal with no leading zero
pub(crate) static SEQUENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(0|[1-9][0-9]*)$").expect("SEQUENCE should compile"));

/// ISO-8601 `YYYY-MM-DDThh:mm:ss[.fff]` with a `Z` or `±hh:mm` offset
pub(crate) static TIMESTAMP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(\.\d{3})?(Z|[+-]\d{2}:\d{2})$")
        .expect("TIMESTAMP should compile")
});

/// `YYYY-MM-DD`
pub(crate) static DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("DATE should compile"));

/// `MAJOR.MINOR.PATCH`, digits only
pub(crate) static SEMVER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\d+\.\d+$").expect("SEMVER should compile"));

/// How a tag value is checked
pub(crate) enum ValueRule {
    /// Must equal this exact string
    Literal(&'static str),
    /// Must match this pattern; the description feeds the error message
    Pattern(&'static LazyLock<Regex>, &'static str),
}

pub(crate) struct TagRule {
    pub name: &'static str,
    pub rule: ValueRule,
}

/// Every tag an accepted item carries, no more and no fewer
pub(crate) static TAG_RULES: &[TagRule] = &[
    TagRule {
        name: "App-Name",
        rule: ValueRule::Literal("agentsystems-notary"),
    },
    TagRule {
        name: "Content-Type",
        rule: ValueRule::Literal("application/json"),
    },
    TagRule {
        name: "Hash",
        rule: ValueRule::Pattern(&SHA256_HEX, "64 lowercase hex characters"),
    },
    TagRule {
        name: "Namespace",
        rule: ValueRule::Pattern(&SHA256_HEX, "64 lowercase hex characters"),
    },
    TagRule {
        name: "Session-ID",
        rule: ValueRule::Pattern(&UUID, "a UUID"),
    },
    TagRule {
        name: "Sequence",
        rule: ValueRule::Pattern(&SEQUENCE, "a non-negative integer without leading zeros"),
    },
    TagRule {
        name: "Notarized-At",
        rule: ValueRule::Pattern(&TIMESTAMP, "an ISO-8601 timestamp with offset"),
    },
    TagRule {
        name: "Notarized-Date-UTC",
        rule: ValueRule::Pattern(&DATE, "a YYYY-MM-DD date"),
    },
    TagRule {
        name: "SDK-Version",
        rule: ValueRule::Pattern(&SEMVER, "MAJOR.MINOR.PATCH digits"),
    },
];
