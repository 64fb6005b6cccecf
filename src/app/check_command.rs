use super::{cli_manager, command::Command, common};
use abaplus::{
    aba::{is_circular, NonCircularTransformer},
    io,
};
use anyhow::Result;
use clap::{App, AppSettings, ArgMatches, SubCommand};
use log::info;

const CMD_NAME: &str = "check";

pub(crate) struct CheckCommand;

impl CheckCommand {
    pub(crate) fn new() -> Self {
        CheckCommand
    }
}

impl<'a> Command<'a> for CheckCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Checks an input framework for errors and displays its properties")
            .setting(AppSettings::DisableVersion)
            .arg(common::input_args())
            .arg(cli_manager::logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let text = common::read_input_text(arg_matches)?;
        let framework = io::read_str(&text)?;
        info!(
            "the framework has {} sentence(s), {} assumption(s), {} contrary(ies), {} rule(s) and {} preference(s)",
            framework.language().len(),
            framework.n_assumptions(),
            framework.contraries().len(),
            framework.n_rules(),
            framework.preferences().len(),
        );
        let circular = is_circular(&framework);
        info!("the framework is {}", if circular { "circular" } else { "not circular" });
        info!(
            "the framework is {}",
            if framework.is_atomic() { "atomic" } else { "not atomic" }
        );
        if circular {
            info!(
                "unfolding it would use depth {} with size {}",
                NonCircularTransformer::depth(&framework),
                NonCircularTransformer::unfolding_size(&framework)
            );
        }
        Ok(())
    }
}
