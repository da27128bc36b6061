use crate::error::ApiResult;
use crate::infrastructure::api::ApiClient;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

/// Remote health probe (`GET /health`)
#[derive(Debug, Clone)]
pub struct HealthService {
    api: ApiClient,
}

impl HealthService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn get_health(&self) -> ApiResult<HealthStatus> {
        self.api.get_json("/health").await
    }
}
