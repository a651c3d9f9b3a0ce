// ---------------------------------------------------------------------------
// DataError: failures while loading the embedded fixtures
// ---------------------------------------------------------------------------

use std::fmt;

/// Errors that can occur while parsing and validating fixture data.
///
/// Filtering, sorting and recommendation are total functions and never
/// produce one of these; only the loaders in [`crate::fixtures`] do.
#[derive(Debug)]
pub enum DataError {
    /// The embedded JSON did not match the expected shape.
    Parse(String),
    /// A fixture collection parsed but contained no records.
    EmptyCollection(&'static str),
    /// A tract polygon has fewer than three distinct vertices.
    InvalidGeometry { id: String, vertices: usize },
    /// A dashboard region code is not in the known region list.
    UnknownRegion(String),
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::Parse(msg) => write!(f, "Parse error: {msg}"),
            DataError::EmptyCollection(name) => write!(f, "Fixture '{name}' is empty"),
            DataError::InvalidGeometry { id, vertices } => write!(
                f,
                "Invalid geometry for tract {id}: polygon has {vertices} vertices, need at least 3"
            ),
            DataError::UnknownRegion(code) => write!(f, "Unknown dashboard region: {code}"),
        }
    }
}

impl std::error::Error for DataError {}

impl From<serde_json::Error> for DataError {
    fn from(e: serde_json::Error) -> Self {
        DataError::Parse(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_error_display_parse() {
        let err = DataError::Parse("expected value".to_string());
        let msg = format!("{err}");
        assert!(msg.contains("Parse error"), "got: {msg}");
        assert!(msg.contains("expected value"), "got: {msg}");
    }

    #[test]
    fn test_data_error_display_invalid_geometry() {
        let err = DataError::InvalidGeometry {
            id: "06001400100".to_string(),
            vertices: 2,
        };
        let msg = format!("{err}");
        assert!(msg.contains("06001400100"), "got: {msg}");
        assert!(msg.contains("2 vertices"), "got: {msg}");
    }

    #[test]
    fn test_data_error_from_serde_json() {
        let json_err = serde_json::from_str::<Vec<u32>>("{not json").unwrap_err();
        let err: DataError = json_err.into();
        assert!(matches!(err, DataError::Parse(_)));
    }

    #[test]
    fn test_data_error_debug() {
        let err = DataError::UnknownRegion("ZZ".to_string());
        let debug = format!("{err:?}");
        assert!(debug.contains("UnknownRegion"), "got: {debug}");
    }
}
