use thiserror::Error;

/// Failure vocabulary for one outbound fetch. Every variant renders as the
/// user-facing message the view layer shows verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The deadline elapsed before the request completed.
    #[error("Request timed out. Please try again.")]
    Timeout,

    /// The server answered with a non-success status.
    #[error("HTTP {status}: {status_text}")]
    HttpStatus { status: u16, status_text: String },

    /// DNS, connection, or transport failure; also covers a body that
    /// could not be read or decoded, matching the original screen's
    /// catch-all behavior.
    #[error("Unable to connect. Please check your internet connection.")]
    Connectivity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_user_facing_copy() {
        assert_eq!(
            FetchError::Timeout.to_string(),
            "Request timed out. Please try again."
        );
        assert_eq!(
            FetchError::Connectivity.to_string(),
            "Unable to connect. Please check your internet connection."
        );
        assert_eq!(
            FetchError::HttpStatus {
                status: 500,
                status_text: "Internal Server Error".to_string(),
            }
            .to_string(),
            "HTTP 500: Internal Server Error"
        );
    }
}
