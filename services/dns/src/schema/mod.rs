//! Attribute schemas of the DNS resources.

mod record;
pub use record::RECORD;
pub use record::RECORD_TYPES;

mod template;
pub use template::TEMPLATE;

mod zone;
pub use zone::ZONE;
