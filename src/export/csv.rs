use crate::error::ExportError;
use crate::filter::InfoMarker;
use crate::model::FilterReport;
use std::fs::File;
use std::path::Path;

/// Writes `report` as `Metric,Value` rows.
pub fn export_csv<P: AsRef<Path>>(report: &FilterReport, path: P) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let file = File::create(path_ref).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;

    let mut writer = csv::Writer::from_writer(file);

    writer.write_record(["Metric", "Value"])?;

    let rows = [
        ("Source".to_string(), report.source_path.clone()),
        ("Filtered Output".to_string(), report.filtered_path.clone()),
        ("Info Output".to_string(), report.info_path.clone()),
        ("Total Lines".to_string(), report.total_lines.to_string()),
        ("Filtered Lines".to_string(), report.filtered_lines.to_string()),
        ("Info Lines".to_string(), report.info_lines.to_string()),
        (
            marker_label(InfoMarker::PropertySingleValue),
            report.property_single_value_lines.to_string(),
        ),
        (
            marker_label(InfoMarker::PropertySet),
            report.property_set_lines.to_string(),
        ),
        (
            "Info Share (%)".to_string(),
            format!("{:.1}", report.info_percentage()),
        ),
    ];

    for (metric, value) in &rows {
        writer.write_record([metric, value])?;
    }

    writer.flush().map_err(|source| ExportError::WriteError {
        path: path_ref.to_path_buf(),
        source,
    })?;

    Ok(())
}

fn marker_label(marker: InfoMarker) -> String {
    format!("{} Lines", marker.entity_name())
}
