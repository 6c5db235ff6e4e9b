//! Config subcommand handlers.

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{self, Config};
use crate::error::CliError;
use crate::output;

use super::util;

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let path = config::effective_path(global);

    match args.command {
        ConfigCommand::Show => {
            let cfg = config::load_config_or_default(Some(&path));
            let rendered = cfg.to_toml()?;
            let out = output::render_single(
                global.format(),
                &cfg,
                |_| rendered.trim_end().to_owned(),
                |_| path.display().to_string(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ConfigCommand::Path => {
            println!("{}", path.display());
            Ok(())
        }

        ConfigCommand::Init => {
            if path.exists()
                && !util::confirm(
                    &format!("Overwrite existing config at {}?", path.display()),
                    "config init",
                    global.yes,
                )?
            {
                return Ok(());
            }
            let written = config::save_config(&Config::default(), Some(&path))?;
            if !global.quiet {
                eprintln!("Config written to {}", written.display());
            }
            Ok(())
        }
    }
}
