use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// Creates the config directory and writes a default configuration file.
/// An existing file is left as is. In test mode nothing is written.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = Config::resolve_path(cli.config.as_deref());

    if cli.test {
        info(format!("Test mode: configuration not written ({})", path.display()));
        return Ok(());
    }

    if path.exists() {
        info(format!("Config file already present: {}", path.display()));
        return Ok(());
    }

    Config::default().save(&path)?;
    success(format!("Config file: {}", path.display()));
    Ok(())
}
