//! Error types shared by the whole crate.

/// Crate-wide result type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors raised while validating a [`GridConfig`](crate::GridConfig) or exporting an image.
///
/// Validation errors are always raised before any pixel is drawn, so a failed
/// synthesis never yields a partial image.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum Error {
    /// A geometry field is zero, negative, non-finite, fractional, or too large.
    #[display("invalid geometry: `{field}` {reason}")]
    InvalidGeometry {
        /// Name of the offending field.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },

    /// A style field (color, font size, stroke width) cannot be used.
    #[display("invalid style: `{field}` {reason}")]
    InvalidStyle {
        /// Name of the offending field.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },

    /// Reading or writing a file failed.
    #[display("I/O error: {_0}")]
    #[from]
    Io(std::io::Error),

    /// A configuration document could not be parsed.
    #[display("config error: {_0}")]
    #[from]
    Config(serde_json::Error),

    /// PNG encoding failed.
    #[cfg(feature = "png")]
    #[display("PNG encoding error: {_0}")]
    #[from]
    Png(png::EncodingError),
}

impl Error {
    pub(crate) fn geometry(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidGeometry {
            field,
            reason: reason.into(),
        }
    }

    pub(crate) fn style(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidStyle {
            field,
            reason: reason.into(),
        }
    }
}
