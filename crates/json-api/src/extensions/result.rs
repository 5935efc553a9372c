//! Result helper extensions for HTTP handlers.

use std::fmt::Display;

use salvo::prelude::StatusError;
use tracing::{error, warn};

/// Map any error to a logged HTTP error.
pub(crate) trait ResultExt<T> {
    fn or_400(self, context: &str) -> Result<T, StatusError>;

    fn or_500(self, context: &str) -> Result<T, StatusError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Display,
{
    fn or_400(self, context: &str) -> Result<T, StatusError> {
        self.map_err(|error| {
            warn!("{context}: {error}");

            StatusError::bad_request().brief(format!("{context}: {error}"))
        })
    }

    fn or_500(self, context: &str) -> Result<T, StatusError> {
        self.map_err(|error| {
            error!("{context}: {error}");

            StatusError::internal_server_error()
        })
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn or_400_keeps_the_cause_in_the_brief() {
        let result: Result<(), &str> = Err("unknown staff role: owner");

        let Err(error) = result.or_400("invalid role") else {
            panic!("expected an error");
        };

        assert_eq!(error.code, StatusCode::BAD_REQUEST);
        assert_eq!(error.brief, "invalid role: unknown staff role: owner");
    }

    #[test]
    fn or_500_hides_the_cause() {
        let result: Result<(), &str> = Err("connection reset");

        let Err(error) = result.or_500("failed to load cart") else {
            panic!("expected an error");
        };

        assert_eq!(error.code, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!error.brief.contains("connection reset"));
    }

    #[test]
    fn ok_values_pass_through() {
        let result: Result<u32, &str> = Ok(3);

        assert_eq!(result.or_400("unused").ok(), Some(3));
    }
}
