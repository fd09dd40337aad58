//! HTTP routes

mod available_cars;
mod bookings;
mod extract;
mod health;
mod seasons;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::AppState;

/// Build the application router
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/bookings", post(bookings::create))
        .route("/bookings/user/:user_id", get(bookings::user_bookings))
        .route("/bookings/statistics", get(bookings::statistics))
        .route("/bookings/:booking_id", get(bookings::detail).delete(bookings::cancel))
        .route("/available-cars", post(available_cars::search))
        .route("/available-cars/statistics", get(available_cars::statistics))
        .route("/seasons/:date", get(seasons::season));

    Router::new()
        .route("/health", get(health::health))
        .nest("/api/v1", api)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
