//! Availability search handlers

use axum::{extract::State, Json};

use crate::booking::requests::SearchAvailableCarsRequest;
use crate::booking::responses::{CarStatistics, SearchResponse};
use crate::booking::services;
use crate::error::Result;
use crate::responses::ApiResponse;
use crate::AppState;

use super::extract::ValidatedJson;

/// Models with a free unit for the requested range
pub async fn search(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SearchAvailableCarsRequest>,
) -> Result<Json<ApiResponse<SearchResponse>>> {
    let result = services::search_available_cars(&state.db, &state.config.policy, &request).await?;
    Ok(Json(ApiResponse::ok(result)))
}

/// Fleet usage today
pub async fn statistics(State(state): State<AppState>) -> Result<Json<ApiResponse<CarStatistics>>> {
    let stats = services::car_statistics(&state.db, state.today()).await?;
    Ok(Json(ApiResponse::ok(stats)))
}
