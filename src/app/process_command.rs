use super::{cli_manager, command::Command, common};
use abaplus::io::{process_str, JsonWriter};
use anyhow::Result;
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};

const CMD_NAME: &str = "process";

const ARG_PRETTY: &str = "PRETTY";

pub(crate) struct ProcessCommand;

impl ProcessCommand {
    pub(crate) fn new() -> Self {
        ProcessCommand
    }
}

impl<'a> Command<'a> for ProcessCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Computes the arguments and attacks of a framework and of its transformed variants")
            .setting(AppSettings::DisableVersion)
            .arg(common::input_args())
            .args(&common::pipeline_args())
            .arg(
                Arg::with_name(ARG_PRETTY)
                    .long("pretty")
                    .takes_value(false)
                    .help("indent the JSON output"),
            )
            .arg(cli_manager::logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let text = common::read_input_text(arg_matches)?;
        let options = common::read_pipeline_options(arg_matches)?;
        let result = process_str(&text, options)?;
        let writer = JsonWriter::new(arg_matches.is_present(ARG_PRETTY));
        writer.write(&mut std::io::stdout(), &result)
    }
}
