//! Season lookup handler

use axum::{extract::Path, Json};

use crate::dates::parse_date;
use crate::error::Result;
use crate::pricing::responses::SeasonResponse;
use crate::pricing::season_name;
use crate::responses::ApiResponse;

/// Season of a single day
pub async fn season(Path(date): Path<String>) -> Result<Json<ApiResponse<SeasonResponse>>> {
    let date = parse_date(&date)?;

    Ok(Json(ApiResponse::ok(SeasonResponse {
        date,
        season: season_name(date),
    })))
}
