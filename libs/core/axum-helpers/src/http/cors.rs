use axum::http::{HeaderValue, Method, header, header::InvalidHeaderValue};
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Creates a CORS layer for the given origins.
///
/// Allows the methods the API serves (GET, POST, PUT, OPTIONS) with
/// `Content-Type` and `Accept` headers, cached by browsers for one hour.
///
/// # Errors
/// Returns an error if an origin is not a valid header value.
pub fn create_cors_layer(allowed_origins: &[String]) -> Result<CorsLayer, InvalidHeaderValue> {
    let origins = allowed_origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([header::LOCATION])
        .max_age(Duration::from_secs(3600)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_origins() {
        let origins = vec![
            "http://localhost:3000".to_string(),
            "https://reviews.example.com".to_string(),
        ];
        assert!(create_cors_layer(&origins).is_ok());
    }

    #[test]
    fn test_invalid_origin_is_rejected() {
        let origins = vec!["http://bad\norigin".to_string()];
        assert!(create_cors_layer(&origins).is_err());
    }
}
