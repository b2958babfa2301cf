//! Command implementations.

pub mod import;
pub mod preview;

use std::io::Read;
use std::path::Path;

use lexport::{LexportError, Result};

/// Read the input text from a file, or from stdin when the path is '-'.
pub fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| LexportError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;
        Ok(text)
    } else {
        let bytes = std::fs::read(path).map_err(|e| LexportError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
