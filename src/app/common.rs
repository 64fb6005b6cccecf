use super::{
    app_helper::AppHelper, command::Command, AuthorsCommand, CheckCommand, ProcessCommand,
};
use abaplus::aba::{PipelineOptions, DEFAULT_MAX_UNFOLDED_RULES};
use anyhow::{anyhow, Context, Result};
use clap::{Arg, ArgMatches};
use lazy_static::lazy_static;
use log::info;
use std::{
    fs::{self, File},
    io::{self, Read},
    path::PathBuf,
};

pub(crate) fn create_app_helper() -> AppHelper<'static> {
    let app_name = option_env!("CARGO_PKG_NAME").unwrap_or("unknown app name");
    let app_version = option_env!("CARGO_PKG_VERSION").unwrap_or("unknown version");
    let authors = option_env!("CARGO_PKG_AUTHORS").unwrap_or("unknown authors");
    let mut app = AppHelper::new(
        app_name,
        app_version,
        authors,
        "Abaplus, an argument and attack generator for ABA+ frameworks.",
    );
    let commands: Vec<Box<dyn Command>> = vec![
        Box::new(AuthorsCommand::new(app_name, app_version, authors)),
        Box::new(CheckCommand::new()),
        Box::new(ProcessCommand::new()),
    ];
    for c in commands {
        app.add_command(c);
    }
    app
}

pub(crate) const ARG_INPUT: &str = "INPUT";

const STDIN_INPUT: &str = "-";

pub(crate) fn input_args() -> Arg<'static, 'static> {
    Arg::with_name(ARG_INPUT)
        .short("f")
        .empty_values(false)
        .multiple(false)
        .allow_hyphen_values(true)
        .help(r#"the input file that contains the framework ("-" for the standard input)"#)
        .required(true)
}

pub(crate) const ARG_MAX_UNFOLDED_RULES: &str = "MAX_UNFOLDED_RULES";

lazy_static! {
    static ref DEFAULT_MAX_UNFOLDED_RULES_STR: String = DEFAULT_MAX_UNFOLDED_RULES.to_string();
}

pub(crate) fn pipeline_args() -> Vec<Arg<'static, 'static>> {
    vec![Arg::with_name(ARG_MAX_UNFOLDED_RULES)
        .long("max-unfolded-rules")
        .empty_values(false)
        .multiple(false)
        .default_value(DEFAULT_MAX_UNFOLDED_RULES_STR.as_str())
        .help(r#"the maximal size (rules or new sentences) of the non-circular unfolding ("none" for no limit)"#)
        .required(false)]
}

pub(crate) fn read_pipeline_options(arg_matches: &ArgMatches<'_>) -> Result<PipelineOptions> {
    let max_unfolded_rules = match arg_matches.value_of(ARG_MAX_UNFOLDED_RULES) {
        None => Some(DEFAULT_MAX_UNFOLDED_RULES),
        Some("none") => None,
        Some(s) => Some(s.parse::<usize>().with_context(|| {
            format!(r#"while parsing the maximal size of the unfolding "{}""#, s)
        })?),
    };
    Ok(PipelineOptions::default().with_max_unfolded_rules(max_unfolded_rules))
}

/// Reads the whole content of the input given by the user, either a file path or `-` for the standard input.
pub(crate) fn read_input_text(arg_matches: &ArgMatches<'_>) -> Result<String> {
    let input = arg_matches
        .value_of(ARG_INPUT)
        .ok_or_else(|| anyhow!("missing input"))?;
    let mut text = String::new();
    if input == STDIN_INPUT {
        info!("reading the framework from the standard input");
        io::stdin()
            .read_to_string(&mut text)
            .context("while reading the standard input")?;
    } else {
        let canonicalized = canonicalize_file_path(input)?;
        info!("reading input file {:?}", canonicalized);
        File::open(&canonicalized)
            .and_then(|mut f| f.read_to_string(&mut text))
            .with_context(|| format!("while reading file {:?}", canonicalized))?;
    }
    Ok(text)
}

/// Canonicalize a path given by the user.
pub(crate) fn canonicalize_file_path(file_path: &str) -> Result<PathBuf> {
    fs::canonicalize(PathBuf::from(file_path))
        .with_context(|| format!(r#"while opening file "{}""#, file_path))
}
