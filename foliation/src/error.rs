use crate::Value;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FoliationError {
    #[error("invalid subset size {size}: must be non-negative")]
    NegativeSize { size: i64 },
    #[error("invalid subset size {size}: the input only has {len} elements")]
    SizeExceedsLength { size: i64, len: usize },
    #[error("invalid modulus {modulus}: must be strictly positive")]
    NonPositiveModulus { modulus: Value },
    #[error("enumeration aborted: more than {limit} subsets would be stored")]
    TooManyWitnesses { limit: usize },
}

impl FoliationError {
    /// True if the error stems from a malformed query, as opposed to a resource limit hit while running it.
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(self, FoliationError::TooManyWitnesses { .. })
    }
}

pub type Result<T> = std::result::Result<T, FoliationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification() {
        assert!(FoliationError::NegativeSize { size: -1 }.is_invalid_argument());
        assert!(FoliationError::SizeExceedsLength { size: 4, len: 3 }.is_invalid_argument());
        assert!(FoliationError::NonPositiveModulus { modulus: 0 }.is_invalid_argument());
        assert!(!FoliationError::TooManyWitnesses { limit: 10 }.is_invalid_argument());
    }

    #[test]
    fn messages() {
        let err = FoliationError::SizeExceedsLength { size: 11, len: 10 };
        assert_eq!(err.to_string(), "invalid subset size 11: the input only has 10 elements");
    }
}
