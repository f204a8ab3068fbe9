use crate::cli::commands::read_input;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ingest::parse_tab_separated;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::ui::render::{render_cards, render_details};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary {
        file,
        json,
        details,
    } = cmd
    {
        let text = read_input(file.as_deref())?;
        let records = parse_tab_separated(&text)?;
        let report = Core::build_report(&records);
        let metrics = report.metrics();

        if *json {
            println!("{}", serde_json::to_string_pretty(&metrics)?);
            return Ok(());
        }

        print!("{}", render_cards(&metrics, cfg));

        if *details || cfg.show_details {
            print!("{}", render_details(&report, cfg));
        }
    }

    Ok(())
}
