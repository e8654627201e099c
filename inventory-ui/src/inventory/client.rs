use super::record::InventoryRecord;
use super::request::{Endpoint, InventoryRequest, ResponseShape};
use crate::config::ApiConfig;
use crate::http_client::{ApiError, HttpClient, Result};

/// Decoded body of a successful inventory call.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    Record(InventoryRecord),
    Records(Vec<InventoryRecord>),
    Empty,
}

/// Inventory-specific wrapper around the generic HttpClient
#[derive(Clone)]
pub struct InventoryClient {
    http: HttpClient,
    endpoint: Endpoint,
}

impl InventoryClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        Ok(Self {
            http: HttpClient::new(config)?,
            endpoint: Endpoint::new(&config.api_prefix),
        })
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub async fn send(&self, request: &InventoryRequest) -> Result<ApiResponse> {
        let raw = self
            .http
            .send(
                request.method.clone(),
                &request.segments,
                &request.query,
                request.body.as_ref(),
            )
            .await?;

        match request.expects {
            ResponseShape::Empty => Ok(ApiResponse::Empty),
            ResponseShape::Record => {
                let record = serde_json::from_value(raw.json()?)
                    .map_err(|e| ApiError::Decode(e.to_string()))?;
                Ok(ApiResponse::Record(record))
            }
            ResponseShape::Records => {
                let records = serde_json::from_value(raw.json()?)
                    .map_err(|e| ApiError::Decode(e.to_string()))?;
                Ok(ApiResponse::Records(records))
            }
        }
    }
}
