//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Error)]
pub enum GeoJsonError {
    /// A line string or a linear ring has fewer points than the format allows.
    #[error("{shape} must have at least {required} points, got {actual}")]
    TooFewPoints {
        /// Name of the shape that was being built.
        shape: &'static str,
        /// Minimum number of points for the shape.
        required: usize,
        /// Number of points reported by the caller.
        actual: usize,
    },

    /// A polygon was requested with zero rings, so it has no exterior boundary.
    #[error("polygon must have at least one ring")]
    EmptyPolygon,

    /// One of the members of a multi-part geometry is invalid.
    #[error("invalid {part} at index {index}: {source}")]
    Member {
        /// Kind of the member (`line`, `ring` or `polygon`).
        part: &'static str,
        /// Index of the member inside the enclosing geometry.
        index: usize,
        /// The error of the member itself.
        #[source]
        source: Box<GeoJsonError>,
    },

    /// Feature id cannot be represented in the document.
    #[error("invalid feature id: {0}")]
    InvalidId(String),

    /// A properties payload could not be converted into a document.
    #[error("failed to serialize properties: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The document could not be converted into another representation.
    #[error("conversion error: {0}")]
    Conversion(String),
}

/// Result type of the crate.
pub type Result<T> = std::result::Result<T, GeoJsonError>;

impl GeoJsonError {
    pub(crate) fn member(part: &'static str, index: usize, source: GeoJsonError) -> Self {
        Self::Member {
            part,
            index,
            source: Box::new(source),
        }
    }

    /// Returns true if the error was caused by a geometry that violates the structural minimums of the format.
    pub fn is_invalid_geometry(&self) -> bool {
        match self {
            Self::TooFewPoints { .. } | Self::EmptyPolygon => true,
            Self::Member { source, .. } => source.is_invalid_geometry(),
            Self::InvalidId(_) | Self::Serialization(_) | Self::Conversion(_) => false,
        }
    }

    /// Indices of the nested members that lead to the failed element, outermost first.
    ///
    /// For example, a too short hole `2` of the polygon `1` of a multipolygon gives `[1, 2]`.
    pub fn path(&self) -> Vec<usize> {
        let mut path = vec![];
        let mut current = self;
        while let Self::Member { index, source, .. } = current {
            path.push(*index);
            current = source;
        }

        path
    }

    /// The innermost error, skipping all [`GeoJsonError::Member`] wrappers.
    pub fn root_cause(&self) -> &GeoJsonError {
        match self {
            Self::Member { source, .. } => source.root_cause(),
            other => other,
        }
    }
}
