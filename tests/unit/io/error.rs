//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use dominotile::TilingError;
    use dominotile::io::error::{invalid_parameter, invariant_violation};
    use std::error::Error;

    // Tests error source chaining works correctly
    // Verified by returning None from source for FileSystem errors
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = TilingError::FileSystem {
            path: "/tmp/tiling.png".into(),
            operation: "create file",
            source: io_error,
        };

        assert!(error.source().is_some());
        let message = error.to_string();
        assert!(message.contains("create file"));
        assert!(message.contains("/tmp/tiling.png"));
    }

    // Tests search errors have no source
    // Verified by wrapping search errors in an io error
    #[test]
    fn test_search_errors_have_no_source() {
        let error = TilingError::SearchExhausted {
            width: 3,
            height: 2,
            steps: 7,
        };
        assert!(error.source().is_none());
    }

    // Tests dimension errors mention the grid and the reason
    // Verified by omitting the reason from the Display output
    #[test]
    fn test_invalid_dimensions_message() {
        let error = TilingError::InvalidDimensions {
            width: -1,
            height: 4,
            reason: "dimensions must not be negative".to_string(),
        };

        let message = error.to_string();
        assert!(message.contains("-1x4"));
        assert!(message.contains("must not be negative"));
    }

    // Tests run failures mention grid size and step counts
    // Verified by printing width and height in swapped order
    #[test]
    fn test_run_failure_messages() {
        let exhausted = TilingError::SearchExhausted {
            width: 5,
            height: 6,
            steps: 42,
        }
        .to_string();
        assert!(exhausted.contains("5x6"));
        assert!(exhausted.contains("42 steps"));

        let limited = TilingError::StepLimitExceeded {
            width: 8,
            height: 8,
            steps: 100,
        }
        .to_string();
        assert!(limited.contains("100"));
        assert!(limited.contains("8x8"));

        let odd = TilingError::OddArea {
            width: 3,
            height: 3,
        }
        .to_string();
        assert!(odd.contains("odd area"));

        let finished = TilingError::GeneratorFinished {
            width: 2,
            height: 2,
        }
        .to_string();
        assert!(finished.contains("already finished"));
    }

    // Tests helper constructors fill every field
    // Verified by leaving the reason of invalid_parameter empty
    #[test]
    fn test_helper_constructors() {
        let error = invalid_parameter("cell_size", &0, &"must be positive");
        let message = error.to_string();
        assert!(message.contains("cell_size"));
        assert!(message.contains('0'));
        assert!(message.contains("must be positive"));

        let violation = invariant_violation("place tile", &"overlap");
        assert!(matches!(
            violation,
            TilingError::InvariantViolation {
                operation: "place tile",
                ..
            }
        ));
        assert!(violation.to_string().contains("overlap"));
    }

    // Tests I/O errors convert into file system errors
    // Verified by mapping io errors to InvariantViolation
    #[test]
    fn test_from_io_error() {
        let error: TilingError = std::io::Error::other("broken pipe").into();
        assert!(matches!(
            error,
            TilingError::FileSystem {
                operation: "write",
                ..
            }
        ));
        assert!(error.source().is_some());
    }
}
