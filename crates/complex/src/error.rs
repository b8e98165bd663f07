//! Errors encountered while reading a [`Complex`](crate::Complex) from text.
//!
//! Arithmetic never fails, so these only come from [`crate::read`].

use std::fmt;

/// The three tokens making up the text form of a [`Complex`](crate::Complex).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    /// The leading real part.
    Real,
    /// The imaginary part.
    Imaginary,
    /// The trailing unit marker (conventionally `i`), read and discarded.
    Unit,
}

impl Component {
    /// Returns a lowercase description of the component, as used in error messages.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Real => "real part",
            Self::Imaginary => "imaginary part",
            Self::Unit => "unit marker",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Why reading a [`Complex`](crate::Complex) from text failed. This plays the role of a text
/// stream's fail state: arithmetic itself never produces one.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("expected {component}, found end of input")]
    MissingToken { component: Component },
    #[error("invalid {component}: '{found}'")]
    InvalidNumber { component: Component, found: String },
    #[error("unexpected trailing input: '{0}'")]
    TrailingInput(String),
}

impl ReadError {
    /// The component being read when the error occurred, if any.
    pub const fn component(&self) -> Option<Component> {
        match self {
            Self::MissingToken { component }
            | Self::InvalidNumber { component, .. } => Some(*component),
            Self::Io(_) | Self::TrailingInput(_) => None,
        }
    }

    /// Whether the input simply ran out, as opposed to containing something malformed.
    pub const fn is_eof(&self) -> bool {
        matches!(self, Self::MissingToken { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::{Component, ReadError};

    #[test]
    fn test_error_display() {
        let err = ReadError::MissingToken {
            component: Component::Unit,
        };
        assert_eq!(err.to_string(), "expected unit marker, found end of input");
        assert!(err.is_eof());

        let err = ReadError::InvalidNumber {
            component: Component::Real,
            found: "x".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid real part: 'x'");
        assert_eq!(err.component(), Some(Component::Real));

        let err = ReadError::TrailingInput("j".to_owned());
        assert_eq!(err.to_string(), "unexpected trailing input: 'j'");
        assert_eq!(err.component(), None);
    }

    #[test]
    fn test_component_names() {
        assert_eq!(Component::Real.as_str(), "real part");
        assert_eq!(Component::Imaginary.to_string(), "imaginary part");
        assert_eq!(Component::Unit.as_str(), "unit marker");
    }
}
