pub mod api;
pub mod backend;
pub mod error;
pub mod model;

pub use api::{AdvisorClient, ApiClientConfig};
pub use backend::{follow_up_prompt, AdviceBackend};
pub use error::ApiError;
pub use model::{AdviceItem, AdvicePayload, Category, DestinationId};
pub use reqwest::StatusCode;
