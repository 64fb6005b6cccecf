use crate::aba::ABAFramework;
use anyhow::Result;
use std::io::Read;

/// The type of callback functions to call when warnings are raised while parsing a framework.
///
/// The parameters are the index of the line and the warning message.
pub type WarningHandler = Box<dyn Fn(usize, String)>;

/// A trait implemented by objects able to read ABA frameworks.
pub trait FrameworkReader {
    /// Reads an [`ABAFramework`].
    ///
    /// In case warnings are raised, the callback functions registered by [add_warning_handler](Self::add_warning_handler) are triggered.
    ///
    /// # Example
    ///
    /// ```
    /// # use abaplus::aba::ABAFramework;
    /// # use abaplus::io::{DslReader, FrameworkReader};
    /// fn read_framework_from_str(s: &str) -> ABAFramework<String> {
    ///     let reader = DslReader::default();
    ///     reader.read(&mut s.as_bytes()).expect("unreadable input")
    /// }
    /// # read_framework_from_str("L: [a]");
    /// ```
    fn read(&self, reader: &mut dyn Read) -> Result<ABAFramework<String>>;

    /// Adds a callback function to call when warnings are raised while parsing a framework.
    fn add_warning_handler(&mut self, h: WarningHandler);
}
