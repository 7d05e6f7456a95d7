#![allow(dead_code)]

use std::fs::File;
use std::io::{Error, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Writes a script with the given `(action, target)` rows to a temp file.
pub fn write_script(rows: &[(&str, &str)]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "action, target").unwrap();
    for (action, target) in rows {
        writeln!(file, "{action}, {target}").unwrap();
    }
    file
}

/// Generates a script buying `purchases` Skittles, each paid with a quarter.
pub fn generate_script(path: &Path, purchases: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["action", "target"])?;
    for _ in 0..purchases {
        wtr.write_record(["select", "skittles"])?;
        wtr.write_record(["insert", "quarter"])?;
        wtr.write_record(["purchase", ""])?;
    }

    wtr.flush()?;
    Ok(())
}
