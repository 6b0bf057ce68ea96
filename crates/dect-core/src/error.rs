use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Sample buffer length does not match the product of the extent.
    SizeMismatch { expected: usize, actual: usize },
    /// Two images of the same rank cover different extents.
    ExtentMismatch {
        left: Vec<usize>,
        right: Vec<usize>,
    },
    /// Two images that must share a rank do not.
    DimensionMismatch { left: usize, right: usize },
    /// Rank outside the supported `1..=4` set.
    UnsupportedDimension { rank: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { expected, actual } => {
                write!(f, "size mismatch: expected {expected}, got {actual}")
            }
            Self::ExtentMismatch { left, right } => {
                write!(f, "extent mismatch: {left:?} vs {right:?}")
            }
            Self::DimensionMismatch { left, right } => write!(
                f,
                "dimension mismatch: cannot combine a {left}-D image with a {right}-D image"
            ),
            Self::UnsupportedDimension { rank } => {
                write!(f, "image dimension of {rank} is not supported")
            }
        }
    }
}

impl std::error::Error for Error {}
