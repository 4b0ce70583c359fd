//! Error categorization.
//!
//! Maps transport errors, HTTP status codes and provider status strings onto
//! [`ErrorType`] so failures can be counted consistently.

use reqwest::StatusCode;

use super::types::ErrorType;
use crate::geocode::ProviderStatus;

/// Categorizes a `reqwest::Error` into an `ErrorType`.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ErrorType {
    if let Some(status) = error.status() {
        return categorize_http_status(status);
    }

    if error.is_builder() {
        ErrorType::HttpRequestBuilderError
    } else if error.is_timeout() {
        ErrorType::HttpRequestTimeoutError
    } else if error.is_connect() {
        ErrorType::HttpRequestConnectError
    } else if error.is_body() {
        ErrorType::HttpRequestBodyError
    } else if error.is_decode() {
        ErrorType::ResponseDecodeError
    } else {
        ErrorType::HttpRequestOtherError
    }
}

/// Categorizes a non-success HTTP status returned by the provider.
pub fn categorize_http_status(status: StatusCode) -> ErrorType {
    match status.as_u16() {
        401 | 403 => ErrorType::ProviderRequestDenied,
        429 => ErrorType::ProviderOverQueryLimit,
        _ => ErrorType::HttpRequestStatusError,
    }
}

/// Categorizes a provider status that did not yield a coordinate.
pub fn categorize_provider_status(status: &ProviderStatus) -> ErrorType {
    match status {
        ProviderStatus::Ok | ProviderStatus::ZeroResults => ErrorType::ProviderZeroResults,
        ProviderStatus::OverQueryLimit | ProviderStatus::OverDailyLimit => {
            ErrorType::ProviderOverQueryLimit
        }
        ProviderStatus::RequestDenied => ErrorType::ProviderRequestDenied,
        ProviderStatus::InvalidRequest => ErrorType::ProviderInvalidRequest,
        ProviderStatus::UnknownError | ProviderStatus::Other(_) => {
            ErrorType::ProviderUnknownStatus
        }
    }
}
