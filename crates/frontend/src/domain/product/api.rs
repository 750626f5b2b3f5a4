//! HTTP gateway to the remote product collection.

use crate::shared::api_utils::api_url;
use contracts::domain::product::{Product, ProductId, ProductInput};
use gloo_net::http::Request;
use thiserror::Error;

const API_BASE: &str = "/api/products";

/// Failure of a single gateway call: the transport broke before a status
/// line arrived, the status was outside the 2xx range, or a success body
/// did not decode as the expected shape. No retries either way.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("backend unavailable: {0}")]
    Transport(String),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("unexpected response body: {0}")]
    Decode(String),
}

fn item_path(id: ProductId) -> String {
    format!("{}/{}", API_BASE, id.value())
}

pub async fn list_products() -> Result<Vec<Product>, ApiError> {
    let response = Request::get(&api_url(API_BASE))
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn fetch_product(id: ProductId) -> Result<Product, ApiError> {
    let response = Request::get(&api_url(&item_path(id)))
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn create_product(input: &ProductInput) -> Result<Product, ApiError> {
    let response = Request::post(&api_url(API_BASE))
        .json(input)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn update_product(id: ProductId, input: &ProductInput) -> Result<Product, ApiError> {
    let response = Request::put(&api_url(&item_path(id)))
        .json(input)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn delete_product(id: ProductId) -> Result<(), ApiError> {
    let response = Request::delete(&api_url(&item_path(id)))
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    // The delete response carries no meaningful body.
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_path_appends_id() {
        assert_eq!(item_path(ProductId::new(3)), "/api/products/3");
    }

    #[test]
    fn status_error_displays_code() {
        assert_eq!(ApiError::Status(404).to_string(), "HTTP 404");
    }
}
