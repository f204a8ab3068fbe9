use crate::cli::commands::read_input;
use crate::cli::parser::Commands;
use crate::core::store::RecordStore;
use crate::errors::AppResult;
use crate::ui::render::render_grid;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Table { file } = cmd {
        let text = read_input(file.as_deref())?;
        let mut store = RecordStore::new();
        store.paste(&text)?;
        print!("{}", render_grid(store.rows()));
    }

    Ok(())
}
