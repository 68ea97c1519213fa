use serde::Serialize;
use std::path::Path;

use crate::filter::{InfoMarker, LineClass, OutputPaths};

/// Line counts gathered during one filter run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterReport {
    pub source_path: String,
    pub filtered_path: String,
    pub info_path: String,
    pub total_lines: usize,
    pub filtered_lines: usize,
    pub info_lines: usize,
    pub property_single_value_lines: usize,
    pub property_set_lines: usize,
}

impl FilterReport {
    #[must_use]
    pub fn new(paths: &OutputPaths) -> Self {
        Self {
            source_path: display(&paths.source),
            filtered_path: display(&paths.filtered),
            info_path: display(&paths.info),
            ..Self::default()
        }
    }

    pub fn record(&mut self, class: LineClass) {
        self.total_lines += 1;
        match class {
            LineClass::Geometry => self.filtered_lines += 1,
            LineClass::Info(marker) => {
                self.info_lines += 1;
                match marker {
                    InfoMarker::PropertySingleValue => self.property_single_value_lines += 1,
                    InfoMarker::PropertySet => self.property_set_lines += 1,
                }
            }
        }
    }

    /// Share of source lines moved to the info output, in percent.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn info_percentage(&self) -> f64 {
        if self.total_lines == 0 {
            return 0.0;
        }
        self.info_lines as f64 * 100.0 / self.total_lines as f64
    }
}

fn display(path: &Path) -> String {
    path.to_string_lossy().to_string()
}
