use crate::validator::Requirement::{Optional, Required};
use crate::validator::{AttributeSpec, Schema, TypeConstraint};

/// Schema of the zone resource.
///
/// `authenticated` is reported as a boolean by the API, older responses
/// carry a string.
pub static ZONE: Schema = Schema {
    resource: "zone",
    attributes: &[
        AttributeSpec::read_only("uuid", TypeConstraint::String),
        AttributeSpec::read_only("name", TypeConstraint::String).create(Required),
        AttributeSpec::read_only("email", TypeConstraint::String)
            .create(Required)
            .update(Optional),
        AttributeSpec::read_only("description", TypeConstraint::String)
            .create(Optional)
            .update(Optional),
        AttributeSpec::read_only("default_ttl", TypeConstraint::Integer)
            .create(Required)
            .update(Optional),
        AttributeSpec::read_only(
            "authenticated",
            TypeConstraint::AnyOf(&[TypeConstraint::String, TypeConstraint::Boolean]),
        ),
        AttributeSpec::read_only("template_uuid", TypeConstraint::String).create(Optional),
        AttributeSpec::read_only("created_at", TypeConstraint::String),
        AttributeSpec::read_only("updated_at", TypeConstraint::String),
        AttributeSpec::read_only("records", TypeConstraint::Array),
    ],
};
