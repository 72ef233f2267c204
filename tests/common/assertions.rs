//! Custom assertion macros and utilities
//!
//! Provides assertion macros for the JSON envelope every endpoint returns.

/// Assert that a result is ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
    ($result:expr, $message:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("{}: {:?}", $message, e),
        }
    };
}

/// Assert that a response body is a failure envelope with the given status
#[macro_export]
macro_rules! assert_failure_envelope {
    ($body:expr, $status:expr) => {{
        let body: &serde_json::Value = &$body;
        assert_eq!(body["success"], false, "Expected failure envelope, got {}", body);
        assert_eq!(body["statusCode"], $status, "Unexpected statusCode in {}", body);
        assert!(body["data"].is_null(), "Expected null data in {}", body);
        assert!(body["time"].is_string(), "Expected time in {}", body);
    }};
}

/// Assert that a response body is a success envelope and return its data
#[macro_export]
macro_rules! assert_success_envelope {
    ($body:expr, $status:expr, $message:expr) => {{
        let body: &serde_json::Value = &$body;
        assert_eq!(body["success"], true, "Expected success envelope, got {}", body);
        assert_eq!(body["statusCode"], $status, "Unexpected statusCode in {}", body);
        assert_eq!(body["message"], $message, "Unexpected message in {}", body);
        body["data"].clone()
    }};
}

/// Assert that a string contains a substring
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {
        assert!(
            $haystack.contains($needle),
            "Expected '{}' to contain '{}'",
            $haystack,
            $needle
        );
    };
}
