//! Objects used to read ABA frameworks and to write the results computed on them.

mod dsl_reader;
pub use dsl_reader::DslReader;

mod json_writer;
pub use json_writer::JsonWriter;

mod request;
pub use request::process_str;
pub use request::process_with_reader;
pub use request::read_str;

mod specs;
pub use specs::FrameworkReader;
pub use specs::WarningHandler;
