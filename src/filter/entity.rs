use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::FilterError;
use crate::filter::classify::{classify, LineClass};
use crate::filter::lines::LineReader;
use crate::filter::paths::OutputPaths;
use crate::model::FilterReport;

/// Splits an IFC file into a geometry file and a property file.
///
/// Lines containing `IFCPROPERTYSINGLEVALUE` or `IFCPROPERTYSET` go to
/// `<name>_info_.ifc`; everything else goes to `<name>_filtered_.ifc`.
/// Line order is kept within each output. Source lines may end in `\n`,
/// `\r` or `\r\n`; every written line ends in a single `\n`. Line content
/// is copied byte for byte.
#[derive(Debug, Clone)]
pub struct IfcEntityFilter {
    paths: OutputPaths,
}

impl IfcEntityFilter {
    /// Resolves the output paths for `source`.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::PathTooShort`] if `source` has fewer than 4
    /// characters.
    pub fn new(source: &str) -> Result<Self, FilterError> {
        Ok(Self {
            paths: OutputPaths::derive(source)?,
        })
    }

    #[must_use]
    pub fn filtered_path(&self) -> &Path {
        &self.paths.filtered
    }

    #[must_use]
    pub fn info_path(&self) -> &Path {
        &self.paths.info
    }

    /// Best-effort filtering.
    ///
    /// Failures print a fixed diagnostic to stderr and are otherwise
    /// swallowed. The filtered path is returned either way, so a returned
    /// path does not mean the outputs are complete.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use ifc_filter::filter::IfcEntityFilter;
    ///
    /// let filtered = IfcEntityFilter::new("model.ifc")?.filter();
    /// assert_eq!(filtered, "model_filtered_.ifc");
    /// # Ok::<(), ifc_filter::error::FilterError>(())
    /// ```
    #[must_use = "the returned path names the filtered output"]
    pub fn filter(&self) -> String {
        match self.try_filter() {
            Ok(report) => debug!(
                filtered = report.filtered_lines,
                info = report.info_lines,
                info_share = %format!("{:.1}%", report.info_percentage()),
                "filtering finished"
            ),
            Err(err) => {
                eprintln!("{}", err.diagnostic());
                warn!(error = %err, "filtering incomplete");
            }
        }

        self.paths.filtered.to_string_lossy().into_owned()
    }

    /// Strict filtering: same behavior as [`filter`](Self::filter) but the
    /// first I/O fault is returned instead of printed.
    ///
    /// The source is opened before the outputs, so a missing source leaves
    /// no output files behind. Outputs already opened are flushed and closed
    /// when an error ends the run.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::SourceRead`] when the source cannot be opened
    /// or read, and [`FilterError::OutputWrite`] when either output cannot
    /// be created, written or flushed.
    pub fn try_filter(&self) -> Result<FilterReport, FilterError> {
        debug!(source = %self.paths.source.display(), "filtering IFC file");

        let file = File::open(&self.paths.source)
            .map_err(|source| read_error(&self.paths.source, source))?;
        let reader = BufReader::new(file);

        let mut filtered = create_output(&self.paths.filtered)?;
        let mut info = create_output(&self.paths.info)?;

        let report = split_lines(reader, &mut filtered, &mut info, &self.paths)?;

        filtered
            .flush()
            .map_err(|source| write_error(&self.paths.filtered, source))?;
        info.flush()
            .map_err(|source| write_error(&self.paths.info, source))?;

        debug!(
            total = report.total_lines,
            single_values = report.property_single_value_lines,
            property_sets = report.property_set_lines,
            "outputs flushed"
        );

        Ok(report)
    }
}

/// Streams `reader` line by line into `filtered` or `info`.
///
/// `paths` only labels errors; nothing is opened here.
///
/// # Errors
///
/// Read faults map to [`FilterError::SourceRead`], write faults to
/// [`FilterError::OutputWrite`] naming the output that failed.
pub fn split_lines<R, F, I>(
    reader: R,
    filtered: &mut F,
    info: &mut I,
    paths: &OutputPaths,
) -> Result<FilterReport, FilterError>
where
    R: BufRead,
    F: Write,
    I: Write,
{
    let mut report = FilterReport::new(paths);
    let mut lines = LineReader::new(reader);
    let mut line = Vec::new();

    while lines
        .read_line(&mut line)
        .map_err(|source| read_error(&paths.source, source))?
    {
        let class = classify(&line);

        match class {
            LineClass::Geometry => {
                write_line(filtered, &line)
                    .map_err(|source| write_error(&paths.filtered, source))?;
            }
            LineClass::Info(_) => {
                write_line(info, &line).map_err(|source| write_error(&paths.info, source))?;
            }
        }

        report.record(class);
    }

    Ok(report)
}

fn write_line<W: Write>(writer: &mut W, line: &[u8]) -> io::Result<()> {
    writer.write_all(line)?;
    writer.write_all(b"\n")
}

fn create_output(path: &Path) -> Result<BufWriter<File>, FilterError> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|source| write_error(path, source))
}

fn read_error(path: &Path, source: std::io::Error) -> FilterError {
    FilterError::SourceRead {
        path: PathBuf::from(path),
        source,
    }
}

fn write_error(path: &Path, source: std::io::Error) -> FilterError {
    FilterError::OutputWrite {
        path: PathBuf::from(path),
        source,
    }
}
