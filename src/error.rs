use core::fmt;

/// Result alias for `centroid`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by validation, distance functions and clustering engines.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The dataset was empty.
    EmptyInput,

    /// Two vectors (or a vector and a centroid) differ in length.
    DimensionMismatch {
        /// Expected dimension.
        expected: usize,
        /// Found dimension.
        found: usize,
    },

    /// Invalid number of clusters requested.
    InvalidClusterCount {
        /// Requested count.
        requested: usize,
        /// Number of vectors.
        n_items: usize,
    },

    /// Invalid parameter value.
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Error message.
        message: &'static str,
    },

    /// Generic error with message.
    Other(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyInput => write!(f, "empty input provided"),
            Error::DimensionMismatch { expected, found } => {
                write!(f, "dimension mismatch: expected {expected}, found {found}")
            }
            Error::InvalidClusterCount { requested, n_items } => {
                write!(f, "cannot create {requested} clusters from {n_items} vectors")
            }
            Error::InvalidParameter { name, message } => {
                write!(f, "invalid parameter '{name}': {message}")
            }
            Error::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(Error::EmptyInput.to_string(), "empty input provided");
        assert_eq!(
            Error::DimensionMismatch {
                expected: 3,
                found: 2
            }
            .to_string(),
            "dimension mismatch: expected 3, found 2"
        );
        assert_eq!(
            Error::InvalidClusterCount {
                requested: 5,
                n_items: 2
            }
            .to_string(),
            "cannot create 5 clusters from 2 vectors"
        );
        assert_eq!(
            Error::InvalidParameter {
                name: "delta_threshold",
                message: "must be in (0, 1)"
            }
            .to_string(),
            "invalid parameter 'delta_threshold': must be in (0, 1)"
        );
    }
}
