//! # IFC Filter
//!
//! Splits an IFC file into the lines needed for 3D visualisation and the
//! property lines that only carry additional information.
//!
//! ## Features
//!
//! - Streams the source line by line, no IFC parsing involved
//! - Moves `IFCPROPERTYSINGLEVALUE` and `IFCPROPERTYSET` lines to `<name>_info_.ifc`
//! - Keeps everything else, in order, in `<name>_filtered_.ifc`
//! - Export run statistics to CSV and JSON
//!
//! ## Example
//!
//! ```no_run
//! use ifc_filter::filter::IfcEntityFilter;
//!
//! let filter = IfcEntityFilter::new("model.ifc").expect("path too short");
//! let report = filter.try_filter().expect("Failed to filter");
//! println!("Filtered: {}", report.filtered_path);
//! println!("Property lines: {}", report.info_lines);
//! ```

pub mod error;
pub mod export;
pub mod filter;
pub mod model;
