use std::fs::File;
use std::io::{self, Write};

use xlate::error::Result;
use xlate::types::OutputDest;

/// Writes `text` to the destination; stdout gets a trailing newline.
pub fn write_output(text: &str, dest: &OutputDest) -> Result<()> {
    match dest {
        OutputDest::File(path) => {
            let mut file = File::create(path)?;
            file.write_all(text.as_bytes())?;
            Ok(())
        }
        OutputDest::Stdout => {
            let mut handle = io::stdout().lock();
            handle.write_all(text.as_bytes())?;
            handle.write_all(b"\n")?;
            Ok(())
        }
    }
}
