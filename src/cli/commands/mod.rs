pub mod config;
pub mod init;
pub mod session;
pub mod summary;
pub mod table;

use crate::errors::AppResult;
use crate::utils::path::expand_tilde;
use std::fs;
use std::io::{self, Read};

/// Read tab-separated input from `file`, or from stdin when no file is given.
pub(crate) fn read_input(file: Option<&str>) -> AppResult<String> {
    match file {
        Some(path) => Ok(fs::read_to_string(expand_tilde(path))?),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
