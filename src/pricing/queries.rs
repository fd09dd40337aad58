//! Database queries for pricing.

use sqlx::PgPool;

use crate::error::Result;

use super::models::CarModel;

/// Get a vehicle model with its rates
pub async fn find_car_model(pool: &PgPool, model_id: i32) -> Result<Option<CarModel>> {
    let model = sqlx::query_as::<_, CarModel>(
        r#"
        SELECT model_id, model_name, price_peak, price_mid, price_off
        FROM models
        WHERE model_id = $1
        "#,
    )
    .bind(model_id)
    .fetch_optional(pool)
    .await?;

    Ok(model)
}

/// Get all vehicle models (for cache warming)
pub async fn get_all_car_models(pool: &PgPool) -> Result<Vec<CarModel>> {
    let models = sqlx::query_as::<_, CarModel>(
        r#"
        SELECT model_id, model_name, price_peak, price_mid, price_off
        FROM models
        ORDER BY model_id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(models)
}
