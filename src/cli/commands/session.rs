//! Interactive editing session: a line-oriented stand-in for the editable grid.
//!
//! The session owns the `RecordStore`; after every change the metrics are
//! recomputed from a fresh snapshot. Errors are shown as alerts and the
//! session keeps going.

use crate::cli::commands::read_input;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::core::store::RecordStore;
use crate::errors::{AppError, AppResult};
use crate::models::record::{RecordField, RowId};
use crate::ui::messages::{error, info, success};
use crate::ui::render::{render_cards, render_details, render_grid};

use std::io::{self, BufRead, Write};

const HELP: &str = "\
Commands:
  add                          append an empty row
  set <id> <field> <value>     edit a cell (fields: sequence, name, reg, date, time)
  del <id>                     delete a row and renumber the rest
  paste                        read tab-separated rows until a line with '.'
  load <file>                  replace all rows with the rows of <file>
  clear                        remove every row
  show                         print the grid and the summary
  details                      print pairs and breaks per person and day
  help                         show this help
  quit                         leave the session";

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Changed,
    Quit,
}

/// Split off the first whitespace-delimited word.
fn next_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (s, ""),
    }
}

fn parse_row_id(s: &str) -> AppResult<RowId> {
    s.parse()
        .map(RowId)
        .map_err(|_| AppError::InvalidRowId(s.to_string()))
}

pub struct Session<'a> {
    store: RecordStore,
    cfg: &'a Config,
}

impl<'a> Session<'a> {
    pub fn new(store: RecordStore, cfg: &'a Config) -> Self {
        Self { store, cfg }
    }

    fn print_summary(&self) {
        let metrics = Core::aggregate(&self.store.snapshot());
        print!("{}", render_cards(&metrics, self.cfg));
    }

    /// Read pasted rows from `input` until a lone `.` or end of input.
    fn read_paste<R: BufRead>(input: &mut R) -> AppResult<String> {
        let mut text = String::new();
        let mut line = String::new();
        loop {
            line.clear();
            if input.read_line(&mut line)? == 0 || line.trim_end() == "." {
                break;
            }
            text.push_str(&line);
        }
        Ok(text)
    }

    fn execute<R: BufRead>(&mut self, line: &str, input: &mut R) -> AppResult<Flow> {
        let (cmd, rest) = next_word(line);

        match cmd.to_lowercase().as_str() {
            "" => Ok(Flow::Continue),
            "add" => {
                let id = self.store.add();
                success(format!("Row {} added", id));
                Ok(Flow::Changed)
            }
            "set" => {
                let (id, rest) = next_word(rest);
                let (field, value) = next_word(rest);
                let id = parse_row_id(id)?;
                let field = RecordField::rf_from_str(field)
                    .ok_or_else(|| AppError::InvalidField(field.to_string()))?;
                self.store.update(id, field, value.trim_end())?;
                Ok(Flow::Changed)
            }
            "del" => {
                let id = parse_row_id(next_word(rest).0)?;
                self.store.delete(id)?;
                success(format!("Row {} deleted", id));
                Ok(Flow::Changed)
            }
            "paste" => {
                info("Paste tab-separated rows, then a line with '.'");
                let text = Self::read_paste(input)?;
                let n = self.store.paste(&text)?;
                success(format!("{} rows loaded", n));
                Ok(Flow::Changed)
            }
            "load" => {
                let text = read_input(Some(rest.trim()))?;
                let n = self.store.paste(&text)?;
                success(format!("{} rows loaded", n));
                Ok(Flow::Changed)
            }
            "clear" => {
                self.store.clear();
                Ok(Flow::Changed)
            }
            "show" => {
                print!("{}", render_grid(self.store.rows()));
                self.print_summary();
                Ok(Flow::Continue)
            }
            "details" => {
                let report = Core::build_report(&self.store.snapshot());
                print!("{}", render_details(&report, self.cfg));
                Ok(Flow::Continue)
            }
            "help" => {
                println!("{}", HELP);
                Ok(Flow::Continue)
            }
            "quit" | "exit" => Ok(Flow::Quit),
            other => Err(AppError::Other(format!(
                "Unknown command '{}'. Type 'help' for the list of commands",
                other
            ))),
        }
    }

    /// Run the command loop until `quit` or end of input.
    pub fn run<R: BufRead>(&mut self, input: &mut R) -> AppResult<()> {
        let mut line = String::new();
        loop {
            print!("> ");
            io::stdout().flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                println!();
                return Ok(());
            }

            match self.execute(line.trim(), input) {
                Ok(Flow::Quit) => return Ok(()),
                Ok(Flow::Changed) => self.print_summary(),
                Ok(Flow::Continue) => {}
                Err(e) => error(e),
            }
        }
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Session { file } = cmd {
        let mut store = RecordStore::new();
        if let Some(path) = file {
            let text = read_input(Some(path.as_str()))?;
            store.paste(&text)?;
        }

        info("Attendance session. Type 'help' for the list of commands.");
        let stdin = io::stdin();
        let mut input = stdin.lock();
        Session::new(store, cfg).run(&mut input)?;
    }

    Ok(())
}
