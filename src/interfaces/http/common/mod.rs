//! Common API response and pagination DTOs

pub mod validated_json;

pub use validated_json::ValidatedJson;

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::DomainError;
use crate::shared::types::{PageRequest, PageResult};

/// Standard response wrapper.
///
/// Every REST endpoint returns data in this envelope.
/// On success: `{"success": true, "data": {...}}`,
/// on error: `{"success": false, "error": "description"}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// `true` if the request succeeded
    pub success: bool,
    /// Payload; `null` on error
    pub data: Option<T>,
    /// Error description; `null` on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Pagination query parameters for list endpoints
#[derive(Debug, Deserialize, ToSchema, utoipa::IntoParams)]
pub struct PaginationParams {
    /// Page number (1-based). Default: 1
    #[serde(default = "default_page")]
    pub page: u32,
    /// Items per page (1-100). Default: 20
    #[serde(default = "default_size")]
    pub size: u32,
}

fn default_page() -> u32 {
    1
}

fn default_size() -> u32 {
    20
}

impl PaginationParams {
    pub fn to_request(&self) -> PageRequest {
        PageRequest::new(self.page, self.size)
    }
}

/// One page of a collection plus paging metadata
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaginatedResponse<T> {
    /// Items on the current page
    pub items: Vec<T>,
    /// Total number of items across all pages
    pub total_count: usize,
    /// Page size used for the slice
    pub page_size: u32,
    /// Current page (1-based)
    pub page_number: u32,
    /// Total number of pages
    pub total_pages: u32,
}

impl<T> PaginatedResponse<T> {
    pub fn new(page: PageResult<T>, request: PageRequest) -> Self {
        let total_pages = (page.total_count as f64 / request.size as f64).ceil() as u32;
        Self {
            items: page.items,
            total_count: page.total_count,
            page_size: request.size,
            page_number: request.page,
            total_pages,
        }
    }
}

/// Map a domain error onto an HTTP status + error envelope.
pub fn error_response<T>(err: DomainError) -> (StatusCode, Json<ApiResponse<T>>) {
    let status = match &err {
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::PageExceeded { .. } => StatusCode::BAD_REQUEST,
        DomainError::SurveyMissing => StatusCode::PRECONDITION_FAILED,
        DomainError::Validation(_) if err.is_transient() => StatusCode::INTERNAL_SERVER_ERROR,
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::Conflict(_) => StatusCode::CONFLICT,
        DomainError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        DomainError::Forbidden(_) => StatusCode::FORBIDDEN,
    };
    (status, Json(ApiResponse::error(err.to_string())))
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::types::paginate;

    #[test]
    fn paginated_response_reports_total_pages() {
        let request = PageRequest::new(2, 2);
        let page = paginate(vec![1, 2, 3, 4, 5], request).unwrap();
        let response = PaginatedResponse::new(page, request);

        assert_eq!(response.items, vec![3, 4]);
        assert_eq!(response.total_count, 5);
        assert_eq!(response.page_number, 2);
        assert_eq!(response.page_size, 2);
        assert_eq!(response.total_pages, 3);
    }

    #[test]
    fn empty_collection_has_zero_pages() {
        let request = PageRequest::default();
        let page = paginate(Vec::<i32>::new(), request).unwrap();
        let response = PaginatedResponse::new(page, request);

        assert!(response.items.is_empty());
        assert_eq!(response.total_pages, 0);
    }

    #[test]
    fn page_exceeded_maps_to_bad_request() {
        let err = DomainError::PageExceeded {
            offset: 40,
            total: 3,
        };
        let (status, _) = error_response::<()>(err);
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn database_errors_map_to_internal_error() {
        let err = DomainError::Validation("Database error: connection lost".into());
        let (status, _) = error_response::<()>(err);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
