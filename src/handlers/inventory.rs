use axum::{Json, extract::State};
use serde::Serialize;

use crate::db::models::CarListing;
use crate::service::inventory::list_cars;
use crate::{HubError, router::HubState};

#[derive(Debug, Serialize)]
pub struct CarModelsReply {
    #[serde(rename = "CarModels")]
    pub car_models: Vec<CarListing>,
}

/// GET /get_cars -> every model with its make.
pub async fn get_cars(State(state): State<HubState>) -> Result<Json<CarModelsReply>, HubError> {
    let car_models = list_cars(&state.inventory).await?;
    Ok(Json(CarModelsReply { car_models }))
}
