// src/output.rs
use crate::synth::BrownianPath;
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Fixed scientific notation with 16 digits after the decimal point and a
/// sign-aligning leading space for non-negative values.
pub fn format_coordinate(x: f64) -> String {
    if x < 0.0 {
        format!("{:.16e}", x)
    } else {
        format!(" {:.16e}", x)
    }
}

/// Write the two-section file format: a header line with the construction
/// parameters, then one line per grid index of space-separated coordinate
/// values. Every line is CRLF-terminated.
pub fn write_path<W: Write>(path: &BrownianPath, out: &mut W) -> io::Result<()> {
    write!(out, "{}\r\n", path.characteristics())?;
    let values = path.values();
    for t in 0..path.grid_len() {
        let line: Vec<String> = (0..path.dimension())
            .map(|dim| format_coordinate(values[[dim, t]]))
            .collect();
        write!(out, "{}\r\n", line.join(" "))?;
    }
    Ok(())
}

/// Export a finished path to a file. Either the whole file is written and
/// flushed, or the error propagates before anything further is emitted.
pub fn export_path(path: &BrownianPath, filename: &str) -> io::Result<()> {
    let mut file = BufWriter::new(File::create(filename)?);
    write_path(path, &mut file)?;
    file.flush()
}
