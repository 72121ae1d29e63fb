use crate::api::models::ExtractionResult;
use crate::utils::error::ControllerError;
use async_trait::async_trait;

/// Anything that can turn a pin URL into an extraction result.
///
/// The UI controller only talks to the backend through this trait, which
/// keeps the state machine testable without a server.
#[async_trait]
pub trait ExtractApi: Send + Sync {
    async fn extract(&self, url: &str) -> Result<ExtractionResult, ControllerError>;
}
