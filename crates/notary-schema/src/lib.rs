//! Application-level schema validation
//!
//! An item that reaches this crate is already well-formed and authentic.
//! What remains is policy: the operator pays for chain storage, so only
//! the canonical notarization shape is admitted — one signature scheme,
//! no target, no anchor, exactly nine known tags, a five-field JSON body,
//! and byte-equality between every tag and its body counterpart. The
//! on-chain tag set stays self-describing without parsing the payload.
//!
//! Checks run in a fixed order and the first failure wins, with a message
//! naming the violated rule.

mod body;
mod rules;

use notary_dataitem::DataItem;
use notary_types::{Error, Result};
use rules::{TagRule, ValueRule, TAG_RULES};
use std::collections::HashSet;

pub use body::NotarizedBody;

/// Largest DataItem the operator subsidizes, in bytes
pub const MAX_ITEM_SIZE: usize = 12_288;

/// Minimum accepted client SDK version
pub const MIN_SDK_VERSION: (u64, u64, u64) = (0, 2, 0);

/// Number of tags an accepted item carries
pub const REQUIRED_TAG_COUNT: usize = 9;

/// Validate an authenticated DataItem against the notarization schema
pub fn validate(item: &DataItem<'_>) -> Result<()> {
    check_envelope(item)?;
    check_tags(item)?;
    let item_body = check_body(item)?;
    check_cross_fields(item, &item_body)?;
    Ok(())
}

fn check_envelope(item: &DataItem<'_>) -> Result<()> {
    if item.len() > MAX_ITEM_SIZE {
        return Err(Error::SizeExceeded {
            size: item.len(),
            limit: MAX_ITEM_SIZE,
        });
    }
    if item.signature_type() != 1 {
        return Err(Error::schema(format!(
            "signature type {} not allowed",
            item.signature_type()
        )));
    }
    if item.target().is_some() {
        return Err(Error::schema("target not allowed"));
    }
    if item.anchor().is_some() {
        return Err(Error::schema("anchor not allowed"));
    }
    Ok(())
}

fn check_tags(item: &DataItem<'_>) -> Result<()> {
    let tags = item.tags();
    if tags.len() != REQUIRED_TAG_COUNT {
        return Err(Error::schema(format!(
            "expected {REQUIRED_TAG_COUNT} tags, found {}",
            tags.len()
        )));
    }

    let mut seen = HashSet::new();
    for tag in tags {
        if !seen.insert(tag.name.as_str()) {
            return Err(Error::schema(format!("duplicate tag name {}", tag.name)));
        }
        if !TAG_RULES.iter().any(|rule| rule.name == tag.name) {
            return Err(Error::schema(format!("unexpected tag {}", tag.name)));
        }
    }

    for rule in TAG_RULES {
        check_tag_value(item, rule)?;
    }

    check_sdk_version_floor(tag_value(item, "SDK-Version").expect("checked above"))?;
    check_date_consistency(item)?;
    Ok(())
}

fn check_tag_value(item: &DataItem<'_>, rule: &TagRule) -> Result<()> {
    let value = tag_value(item, rule.name)
        .ok_or_else(|| Error::schema(format!("missing tag {}", rule.name)))?;
    match &rule.rule {
        ValueRule::Literal(expected) => {
            if value != *expected {
                return Err(Error::schema(format!(
                    "{} tag must be {expected}",
                    rule.name
                )));
            }
        }
        ValueRule::Pattern(pattern, description) => {
            if !pattern.is_match(value) {
                return Err(Error::schema(format!(
                    "{} tag must be {description}",
                    rule.name
                )));
            }
        }
    }
    Ok(())
}

/// Component-wise floor on the already pattern-checked `SDK-Version` tag
fn check_sdk_version_floor(version: &str) -> Result<()> {
    let mut parts = version.split('.').map(|part| part.parse::<u64>());
    let mut next = || {
        parts
            .next()
            .and_then(|part| part.ok())
            .ok_or_else(|| Error::schema(format!("SDK-Version {version} is not comparable")))
    };
    let parsed = (next()?, next()?, next()?);
    if parsed < MIN_SDK_VERSION {
        let (major, minor, patch) = MIN_SDK_VERSION;
        return Err(Error::schema(format!(
            "SDK-Version {version} below minimum {major}.{minor}.{patch}"
        )));
    }
    Ok(())
}

fn check_date_consistency(item: &DataItem<'_>) -> Result<()> {
    let notarized_at = tag_value(item, "Notarized-At").expect("checked above");
    let date = tag_value(item, "Notarized-Date-UTC").expect("checked above");
    if notarized_at.get(..10) != Some(date) {
        return Err(Error::schema(
            "Notarized-Date-UTC does not match Notarized-At date",
        ));
    }
    Ok(())
}

fn check_body(item: &DataItem<'_>) -> Result<NotarizedBody> {
    let item_body = NotarizedBody::from_payload(item.data())?;
    if item_body.v != "1" {
        return Err(Error::schema("body v must be \"1\""));
    }
    if !rules::SHA256_HEX.is_match(&item_body.hash) {
        return Err(Error::schema("body hash must be 64 lowercase hex characters"));
    }
    if !rules::SHA256_HEX.is_match(&item_body.namespace) {
        return Err(Error::schema(
            "body namespace must be 64 lowercase hex characters",
        ));
    }
    if !rules::TIMESTAMP.is_match(&item_body.notarized_at) {
        return Err(Error::schema(
            "body notarized_at must be an ISO-8601 timestamp with offset",
        ));
    }
    if !rules::SEMVER.is_match(&item_body.sdk_version) {
        return Err(Error::schema("body sdk_version must be MAJOR.MINOR.PATCH digits"));
    }
    Ok(item_body)
}

fn check_cross_fields(item: &DataItem<'_>, item_body: &NotarizedBody) -> Result<()> {
    let pairs = [
        ("Hash", item_body.hash.as_str(), "hash"),
        ("Namespace", item_body.namespace.as_str(), "namespace"),
        ("Notarized-At", item_body.notarized_at.as_str(), "notarized_at"),
        ("SDK-Version", item_body.sdk_version.as_str(), "sdk_version"),
    ];
    for (tag_name, body_value, body_field) in pairs {
        let tag = tag_value(item, tag_name).expect("checked above");
        if tag != body_value {
            return Err(Error::schema(format!(
                "{tag_name} tag does not match body {body_field}"
            )));
        }
    }
    Ok(())
}

fn tag_value<'i>(item: &'i DataItem<'_>, name: &str) -> Option<&'i str> {
    item.tags()
        .iter()
        .find(|tag| tag.name == name)
        .map(|tag| tag.value.as_str())
}
