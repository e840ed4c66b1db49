//! Typed views of the resources returned by the API.

mod record;
pub use record::{Record, RecordContent, RecordType};

mod template;
pub use template::Template;

mod zone;
pub use zone::Zone;
