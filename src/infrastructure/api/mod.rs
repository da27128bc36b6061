pub mod client;
pub mod health;
pub mod products;

pub use client::ApiClient;
pub use health::{HealthService, HealthStatus};
pub use products::ProductService;
