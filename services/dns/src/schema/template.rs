use crate::validator::Requirement::{Optional, Required};
use crate::validator::{AttributeSpec, Schema, TypeConstraint};

/// Schema of the template resource.
pub static TEMPLATE: Schema = Schema {
    resource: "template",
    attributes: &[
        AttributeSpec::read_only("uuid", TypeConstraint::String),
        AttributeSpec::read_only("name", TypeConstraint::String).create(Required),
        AttributeSpec::read_only("description", TypeConstraint::String)
            .create(Optional)
            .update(Optional),
        AttributeSpec::read_only("default_ttl", TypeConstraint::Integer)
            .create(Required)
            .update(Optional),
        AttributeSpec::read_only("created_at", TypeConstraint::String),
        AttributeSpec::read_only("updated_at", TypeConstraint::String),
        AttributeSpec::read_only("records", TypeConstraint::Array),
    ],
};
