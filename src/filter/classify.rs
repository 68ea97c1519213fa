use bstr::ByteSlice;

/// Entities whose lines carry property data rather than geometry.
/// Checked in order; the first match wins.
const INFO_MARKERS: [InfoMarker; 2] = [InfoMarker::PropertySingleValue, InfoMarker::PropertySet];

/// Which property marker put a line into the info output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoMarker {
    PropertySingleValue,
    PropertySet,
}

impl InfoMarker {
    #[must_use]
    pub fn entity_name(self) -> &'static str {
        match self {
            Self::PropertySingleValue => "IFCPROPERTYSINGLEVALUE",
            Self::PropertySet => "IFCPROPERTYSET",
        }
    }
}

/// Destination of a single source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// Kept in the filtered output.
    Geometry,
    /// Moved to the info output.
    Info(InfoMarker),
}

/// Classifies a line by case-sensitive substring match anywhere in the line.
///
/// Works on raw bytes, so lines that are not valid UTF-8 are classified too.
///
/// # Example
///
/// ```
/// use ifc_filter::filter::{classify, InfoMarker, LineClass};
///
/// assert_eq!(classify("#1=IFCWALL('guid',$);"), LineClass::Geometry);
/// assert_eq!(
///     classify("#2=IFCPROPERTYSET('guid',$,'Pset_WallCommon',$,(#3));"),
///     LineClass::Info(InfoMarker::PropertySet)
/// );
/// ```
#[must_use]
pub fn classify(line: impl AsRef<[u8]>) -> LineClass {
    let line = line.as_ref();
    INFO_MARKERS
        .into_iter()
        .find(|marker| line.contains_str(marker.entity_name()))
        .map_or(LineClass::Geometry, LineClass::Info)
}

#[must_use]
pub fn is_info_line(line: impl AsRef<[u8]>) -> bool {
    matches!(classify(line), LineClass::Info(_))
}
