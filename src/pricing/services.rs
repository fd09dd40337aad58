//! Pricing service functions with database access.

use sqlx::PgPool;
use std::sync::Arc;

use crate::cache::AppCache;
use crate::error::{AppError, Result};

use super::models::CarModel;
use super::queries;

/// Look up a vehicle model, cache first.
pub async fn get_car_model(pool: &PgPool, cache: &AppCache, model_id: i32) -> Result<Arc<CarModel>> {
    if let Some(cached) = cache.models.get(&model_id).await {
        tracing::debug!("Cache HIT for model: {}", model_id);
        return Ok(cached);
    }

    tracing::debug!("Cache MISS for model: {}", model_id);
    let model = queries::find_car_model(pool, model_id)
        .await?
        .map(Arc::new)
        .ok_or_else(|| AppError::Internal(format!("model {model_id} referenced by a car does not exist")))?;

    cache.models.insert(model_id, Arc::clone(&model)).await;
    Ok(model)
}

/// Load every model into the cache
pub async fn warm_model_cache(pool: &PgPool, cache: &AppCache) -> Result<usize> {
    let models = queries::get_all_car_models(pool).await?;
    let count = models.len();

    for model in models {
        cache.models.insert(model.model_id, Arc::new(model)).await;
    }

    tracing::info!("Cache warm-up complete. Stats: {:?}", cache.stats());
    Ok(count)
}
