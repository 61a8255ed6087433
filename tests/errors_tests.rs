use notidigest::errors::SummarizeError;
use std::error::Error;

#[test]
fn test_summarize_error_implements_error_trait() {
    // Verify SummarizeError implements the Error trait
    fn assert_error<T: Error>(_: &T) {}

    let error = SummarizeError::InvalidRequest;
    assert_error(&error);
}

#[test]
fn test_summarize_error_display() {
    // Verify Display implementation works correctly
    let error = SummarizeError::InvalidRequest;
    assert_eq!(format!("{error}"), "Invalid request");

    let error = SummarizeError::Api { status: 401 };
    assert_eq!(format!("{error}"), "API error (status 401)");

    let error = SummarizeError::EmptyResponse;
    assert_eq!(format!("{error}"), "Empty response from API");

    let error = SummarizeError::Http("Connection error".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to send HTTP request: Connection error"
    );
}

#[test]
fn test_summarize_error_from_reqwest() {
    // We can't easily construct a reqwest::Error directly, but we can
    // verify that the From<reqwest::Error> conversion is implemented by
    // checking that this compiles.
    #[allow(unused)]
    fn _check_reqwest_conversion(err: reqwest::Error) -> SummarizeError {
        SummarizeError::from(err)
    }
}
