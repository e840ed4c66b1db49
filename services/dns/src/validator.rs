//! Declarative attribute validation.
//!
//! Every resource describes its attributes with a static [`Schema`]. A
//! single [`Schema::validate`] runs the checks for any resource, so adding a
//! resource only means adding a table.

use std::fmt;

use idcf_dns_core::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

/// The action a payload is validated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Creating a resource.
    Create,
    /// Updating a resource.
    Update,
    /// Deleting a resource.
    Delete,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Create => f.write_str("create"),
            Action::Update => f.write_str("update"),
            Action::Delete => f.write_str("delete"),
        }
    }
}

/// Whether an attribute must be supplied for an action.
///
/// An attribute without a requirement for an action is forbidden there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// The attribute must be present.
    Required,
    /// The attribute may be present.
    Optional,
}

/// Constraint a JSON value must satisfy.
#[derive(Debug, Clone, Copy)]
pub enum TypeConstraint {
    /// A JSON string.
    String,
    /// A JSON integer, signed or unsigned.
    Integer,
    /// A JSON boolean.
    Boolean,
    /// A JSON object.
    Object,
    /// A JSON array.
    Array,
    /// JSON `null`.
    Null,
    /// A JSON string matching the pattern.
    Pattern(&'static Lazy<Regex>),
    /// Any of the listed constraints.
    AnyOf(&'static [TypeConstraint]),
}

impl TypeConstraint {
    /// Check whether `value` satisfies this constraint.
    pub fn is_satisfied_by(&self, value: &Value) -> bool {
        match self {
            TypeConstraint::String => value.is_string(),
            TypeConstraint::Integer => value.is_i64() || value.is_u64(),
            TypeConstraint::Boolean => value.is_boolean(),
            TypeConstraint::Object => value.is_object(),
            TypeConstraint::Array => value.is_array(),
            TypeConstraint::Null => value.is_null(),
            TypeConstraint::Pattern(re) => value.as_str().is_some_and(|s| re.is_match(s)),
            TypeConstraint::AnyOf(constraints) => {
                constraints.iter().any(|c| c.is_satisfied_by(value))
            }
        }
    }
}

impl fmt::Display for TypeConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeConstraint::String => f.write_str("String"),
            TypeConstraint::Integer => f.write_str("Integer"),
            TypeConstraint::Boolean => f.write_str("Boolean"),
            TypeConstraint::Object => f.write_str("Object"),
            TypeConstraint::Array => f.write_str("Array"),
            TypeConstraint::Null => f.write_str("Null"),
            TypeConstraint::Pattern(re) => write!(f, "String matching /{}/", re.as_str()),
            TypeConstraint::AnyOf(constraints) => {
                for (idx, c) in constraints.iter().enumerate() {
                    if idx != 0 {
                        f.write_str(" or ")?;
                    }
                    write!(f, "{c}")?;
                }
                Ok(())
            }
        }
    }
}

/// Schema entry of a single attribute.
#[derive(Debug, Clone, Copy)]
pub struct AttributeSpec {
    /// Attribute name as it appears in the JSON payload.
    pub name: &'static str,
    /// Constraint on the attribute value.
    pub ty: TypeConstraint,
    /// Requirement for [`Action::Create`].
    pub create: Option<Requirement>,
    /// Requirement for [`Action::Update`].
    pub update: Option<Requirement>,
    /// Requirement for [`Action::Delete`].
    pub delete: Option<Requirement>,
}

impl AttributeSpec {
    /// An attribute that is only ever read, never sent.
    pub const fn read_only(name: &'static str, ty: TypeConstraint) -> Self {
        Self {
            name,
            ty,
            create: None,
            update: None,
            delete: None,
        }
    }

    /// Set the requirement for create.
    pub const fn create(mut self, req: Requirement) -> Self {
        self.create = Some(req);
        self
    }

    /// Set the requirement for update.
    pub const fn update(mut self, req: Requirement) -> Self {
        self.update = Some(req);
        self
    }

    /// Set the requirement for delete.
    pub const fn delete(mut self, req: Requirement) -> Self {
        self.delete = Some(req);
        self
    }

    /// Requirement of this attribute for `action`.
    pub fn requirement(&self, action: Action) -> Option<Requirement> {
        match action {
            Action::Create => self.create,
            Action::Update => self.update,
            Action::Delete => self.delete,
        }
    }
}

/// Static attribute table of one resource.
#[derive(Debug)]
pub struct Schema {
    /// Resource name used in error messages.
    pub resource: &'static str,
    /// Known attributes.
    pub attributes: &'static [AttributeSpec],
}

impl Schema {
    /// Look up an attribute by name.
    pub fn attribute(&self, name: &str) -> Option<&AttributeSpec> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Validate `attributes` for `action`.
    ///
    /// Checks run in order and stop at the first failure:
    ///
    /// 1. every attribute required for `action` is present
    /// 2. every supplied attribute is allowed for `action`
    /// 3. every supplied attribute is known and its value satisfies the constraint
    ///
    /// The first two checks only run when an action is given.
    pub fn validate(&self, attributes: &Map<String, Value>, action: Option<Action>) -> Result<()> {
        if let Some(action) = action {
            self.validate_presence(attributes, action)?;
            self.validate_absence(attributes, action)?;
        }

        for (name, value) in attributes {
            let spec = self.attribute(name).ok_or_else(|| {
                Error::invalid_attribute_name(format!("`{name}` is invalid attribute name"))
            })?;

            if !spec.ty.is_satisfied_by(value) {
                return Err(Error::invalid_attribute_type(format!(
                    "`{name}` is required to be a {}",
                    spec.ty
                )));
            }
        }

        Ok(())
    }

    fn validate_presence(&self, attributes: &Map<String, Value>, action: Action) -> Result<()> {
        let missing = self
            .attributes
            .iter()
            .filter(|a| a.requirement(action) == Some(Requirement::Required))
            .find(|a| !attributes.contains_key(a.name));

        match missing {
            Some(a) => Err(Error::missing_attribute(format!(
                "`{}` is required in {action} action",
                a.name
            ))),
            None => Ok(()),
        }
    }

    fn validate_absence(&self, attributes: &Map<String, Value>, action: Action) -> Result<()> {
        let unnecessary = attributes.keys().find(|name| {
            self.attribute(name)
                .and_then(|a| a.requirement(action))
                .is_none()
        });

        match unnecessary {
            Some(name) => Err(Error::unnecessary_attribute(format!(
                "`{name}` is unnecessary in {action} action"
            ))),
            None => Ok(()),
        }
    }
}
