use once_cell::sync::Lazy;
use regex::Regex;

use crate::validator::Requirement::{Optional, Required};
use crate::validator::{AttributeSpec, Schema, TypeConstraint};

/// Record types accepted by the API.
pub static RECORD_TYPES: Lazy<Regex> =
    Lazy::new(|| Regex::new("^(A|CNAME|AAAA|MX|TXT|SRV|NS|SOA)$").expect("pattern must be valid"));

/// Schema of the record resource.
///
/// `content` is a plain string for most types and an object for `SOA`.
pub static RECORD: Schema = Schema {
    resource: "record",
    attributes: &[
        AttributeSpec::read_only("uuid", TypeConstraint::String),
        AttributeSpec::read_only("name", TypeConstraint::String)
            .create(Required)
            .update(Optional),
        AttributeSpec::read_only("type", TypeConstraint::Pattern(&RECORD_TYPES))
            .create(Required)
            .update(Optional),
        AttributeSpec::read_only(
            "content",
            TypeConstraint::AnyOf(&[TypeConstraint::String, TypeConstraint::Object]),
        )
        .create(Required)
        .update(Optional),
        AttributeSpec::read_only("ttl", TypeConstraint::Integer)
            .create(Required)
            .update(Optional),
        AttributeSpec::read_only(
            "priority",
            TypeConstraint::AnyOf(&[TypeConstraint::Integer, TypeConstraint::Null]),
        )
        .create(Optional),
        AttributeSpec::read_only("created_at", TypeConstraint::String),
        AttributeSpec::read_only("updated_at", TypeConstraint::String),
        AttributeSpec::read_only("purge", TypeConstraint::String).delete(Optional),
    ],
};
