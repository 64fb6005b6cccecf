use super::{DslReader, FrameworkReader};
use crate::aba::{ABAFramework, Pipeline, PipelineOptions, PipelineResult};
use anyhow::{Context, Result};
use log::warn;

/// Reads a framework from a text with the given reader and runs the pipeline on it.
///
/// An empty text gives an empty framework, for which only the original stage is run.
/// An error is returned only if the reader fails.
pub fn process_with_reader(
    reader: &dyn FrameworkReader,
    input: &str,
    options: PipelineOptions,
) -> Result<PipelineResult<String>> {
    let framework = reader
        .read(&mut input.as_bytes())
        .context("while reading the framework")?;
    Ok(Pipeline::new_for_strings(options).run(&framework))
}

fn logging_dsl_reader() -> DslReader {
    let mut reader = DslReader::default();
    reader.add_warning_handler(Box::new(|i, w| warn!("at line {}: {}", i, w)));
    reader
}

/// Reads a framework in the textual ABA+ format (see [DslReader]).
///
/// Parsing warnings are logged.
pub fn read_str(input: &str) -> Result<ABAFramework<String>> {
    logging_dsl_reader()
        .read(&mut input.as_bytes())
        .context("while reading the framework")
}

/// Reads a framework in the textual ABA+ format (see [DslReader]) and runs the pipeline on it.
///
/// Parsing warnings are logged.
///
/// # Example
///
/// ```
/// # use abaplus::aba::{PipelineOptions, Stage};
/// # use abaplus::io::process_str;
/// let result = process_str("L: [a,p]\nA: [a]\nC(a): p\n[r1]: p <- a", PipelineOptions::default()).unwrap();
/// assert_eq!(2, result.get(Stage::Original).unwrap().attacks().len());
/// let empty = process_str(" \n", PipelineOptions::default()).unwrap();
/// assert!(empty.get(Stage::Original).unwrap().arguments().is_empty());
/// ```
pub fn process_str(input: &str, options: PipelineOptions) -> Result<PipelineResult<String>> {
    process_with_reader(&logging_dsl_reader(), input, options)
}
