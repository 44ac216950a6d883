//! Quote handlers

use axum::{extract::State, Json};
use validator::Validate;

use domain_catalog::DONATION_OPTIONS;

use crate::dto::quote::{QuoteRequestDto, QuoteResponse};
use crate::{error::ApiError, AppState};

/// Computes a premium quote for a configured application
///
/// This is the server-side source of truth for the premium: the payment
/// step renders its result and the submission flow re-validates against
/// it, so a client-computed figure is never trusted on its own.
///
/// A request the rating table cannot resolve still returns 200 with the
/// all-zero breakdown and `configured: false`; the zero breakdown is the
/// contract's "insufficient configuration" value, not a failure.
pub async fn create_quote(
    State(state): State<AppState>,
    Json(request): Json<QuoteRequestDto>,
) -> Result<Json<QuoteResponse>, ApiError> {
    request.validate()?;

    if !DONATION_OPTIONS.contains(&request.donation_percentage) {
        return Err(ApiError::Validation(format!(
            "donation_percentage must be one of {:?}",
            DONATION_OPTIONS
        )));
    }

    let domain_request = request.into_domain();
    let breakdown = state.calculator.calculate(&domain_request);

    tracing::info!(
        product = %domain_request.product_name,
        configured = !breakdown.is_unconfigured(),
        annual_total = %breakdown.annual_total,
        "quote computed"
    );

    Ok(Json(QuoteResponse::from_breakdown(&domain_request, &breakdown)))
}
