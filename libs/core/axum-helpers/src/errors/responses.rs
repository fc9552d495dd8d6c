//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "code": 1005,
        "error": "INTERNAL_ERROR",
        "message": "An internal server error occurred"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Validation Error",
    content_type = "application/json",
    example = json!({
        "code": 1001,
        "error": "VALIDATION_ERROR",
        "message": "Request validation failed",
        "details": {
            "rating": [{
                "code": "range",
                "message": null,
                "params": {"min": 1, "max": 5, "value": 9}
            }]
        }
    })
)]
pub struct BadRequestValidationResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Malformed JSON body",
    content_type = "application/json",
    example = json!({
        "code": 1003,
        "error": "INVALID_JSON",
        "message": "Failed to parse the request body as JSON"
    })
)]
pub struct BadRequestJsonResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Invalid path parameter",
    content_type = "application/json",
    example = json!({
        "code": 1002,
        "error": "INVALID_PATH",
        "message": "Cannot parse `abc` to a `i32`"
    })
)]
pub struct BadRequestPathResponse(pub ErrorResponse);

/// Resource not found; the response has no body
#[derive(ToResponse)]
#[response(description = "Resource not found")]
pub struct NotFoundResponse;
