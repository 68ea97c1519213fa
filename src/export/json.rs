use crate::error::ExportError;
use crate::model::FilterReport;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes `report` as pretty-printed JSON followed by a newline.
pub fn export_json<P: AsRef<Path>>(report: &FilterReport, path: P) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let write_error = |source: std::io::Error| ExportError::WriteError {
        path: path_ref.to_path_buf(),
        source,
    };

    let file = File::create(path_ref).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, report)?;
    writeln!(writer).map_err(write_error)?;
    writer.flush().map_err(write_error)?;

    Ok(())
}
