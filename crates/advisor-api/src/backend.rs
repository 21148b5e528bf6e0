use async_trait::async_trait;

use crate::error::ApiError;
use crate::model::{AdvicePayload, DestinationId};

/// The three backend calls a search or follow-up is built from.
///
/// [`crate::api::AdvisorClient`] is the HTTP implementation; the controller
/// only ever sees this trait.
#[async_trait]
pub trait AdviceBackend: Send + Sync {
    /// Look a destination up by name and country, creating it when the lookup
    /// comes back empty.
    async fn resolve_or_create_destination(
        &self,
        city: &str,
        country: &str,
    ) -> Result<DestinationId, ApiError>;

    /// Ask the backend to (re)generate advice. Empty inputs are omitted from
    /// the request body; with neither present no body is sent.
    async fn trigger_advice_generation(
        &self,
        destination_id: &DestinationId,
        hobbies: Option<&str>,
        follow_up_question: Option<&str>,
    ) -> Result<(), ApiError>;

    async fn fetch_advice(&self, destination_id: &DestinationId) -> Result<AdvicePayload, ApiError>;
}

pub fn default_description(city: &str, country: &str) -> String {
    format!("Travel information for {city}, {country}")
}

pub fn follow_up_prompt(name: &str, country: &str, question: &str) -> String {
    format!("Follow-up question about {name}, {country}: {question}")
}
