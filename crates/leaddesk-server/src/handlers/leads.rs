//! Handlers for the `/api/leads` endpoint: listing, CORS preflight, and the
//! method-not-allowed fallback.

use axum::extract::{Query, State};
use axum::http::{header, HeaderName, HeaderValue, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use leaddesk_core::query::{query, LeadQuery, RawLeadQuery};

use crate::auth::{self, AccessDecision, Capability};
use crate::error::ApiError;
use crate::schema::leads::LeadsResponse;
use crate::state::AppState;

/// Returns a filtered, paginated page of leads.
///
/// `GET /api/leads?search=&page=&limit=&leadType=&location=&activeTab=&startDate=&endDate=`
///
/// All parameters are optional; malformed numeric values degrade to the
/// defaults rather than failing the request.
pub async fn list_leads(
    State(state): State<AppState>,
    Query(raw): Query<RawLeadQuery>,
) -> Result<Json<LeadsResponse>, ApiError> {
    if let AccessDecision::Denied { reason, .. } = auth::authorize(Capability::ReadLeads) {
        return Err(ApiError::Forbidden(reason));
    }

    let params = LeadQuery::from_raw(&raw);
    let page = query(&state.leads, &params);

    Ok(Json(LeadsResponse {
        leads: page.items,
        meta: page.meta,
    }))
}

/// Answers CORS preflight for `/api/leads`.
///
/// `OPTIONS /api/leads` -> 204 with the allow-origin/-methods/-headers set,
/// restricted to the single configured origin.
pub async fn preflight(State(state): State<AppState>) -> impl IntoResponse {
    let headers: [(HeaderName, HeaderValue); 3] = [
        (
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            state.allowed_origin.clone(),
        ),
        (
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, OPTIONS"),
        ),
        (
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ),
    ];
    (StatusCode::NO_CONTENT, headers)
}

/// Fallback for unsupported methods: 405 with `Allow: GET, OPTIONS`.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
