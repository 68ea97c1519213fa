pub mod classify;
pub mod entity;
pub mod lines;
pub mod paths;

pub use crate::error::FilterError;
pub use classify::{classify, is_info_line, InfoMarker, LineClass};
pub use entity::{split_lines, IfcEntityFilter};
pub use lines::LineReader;
pub use paths::{OutputPaths, FILTERED_SUFFIX, INFO_SUFFIX};
