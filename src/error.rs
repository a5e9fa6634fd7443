use thiserror::Error;

/// Ways a conversion input can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaseError {
    #[error("Input cannot be null or undefined")]
    NullOrUndefined,

    #[error("Expected a string, but received {found}")]
    Type { found: &'static str },

    #[error("Input string cannot be empty")]
    EmptyInput,

    #[error("Input string must contain at least one valid word")]
    NoValidWords,
}

impl CaseError {
    /// Stable identifier, used in JSON output.
    pub fn kind(&self) -> &'static str {
        match self {
            CaseError::NullOrUndefined => "null-or-undefined",
            CaseError::Type { .. } => "type",
            CaseError::EmptyInput => "empty-input",
            CaseError::NoValidWords => "no-valid-words",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_error_names_the_type() {
        let err = CaseError::Type { found: "number" };
        assert_eq!(err.to_string(), "Expected a string, but received number");
    }

    #[test]
    fn test_kinds_are_distinct() {
        let kinds = [
            CaseError::NullOrUndefined.kind(),
            CaseError::Type { found: "object" }.kind(),
            CaseError::EmptyInput.kind(),
            CaseError::NoValidWords.kind(),
        ];
        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
