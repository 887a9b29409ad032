//! Contract with the extraction collaborator.
//!
//! An [`Extractor`] turns uploaded source files into candidate cards. It runs
//! as one request/response call; its output is merged only once the whole
//! batch has arrived, and a failed call merges nothing.

use crate::error::ExtractionError;
use crate::types::{Card, Language};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An uploaded file to extract cards from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceFile {
    pub name: String,
    /// File body as text or base64. Opaque to the core.
    #[serde(default)]
    pub content: String,
}

impl SourceFile {
    /// Lower-cased file extension, if any.
    pub fn extension(&self) -> Option<String> {
        self.name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
            .filter(|ext| !ext.is_empty())
    }
}

/// What to extract and where the resulting cards belong.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionRequest {
    pub files: Vec<SourceFile>,
    pub language: Language,
    pub unit_id: Uuid,
    pub lesson_id: Uuid,
}

/// Produces candidate cards from source files.
///
/// Returned cards carry fresh IDs, the request's language, unit and lesson,
/// and words with their article already split off.
#[async_trait]
pub trait Extractor: Send + Sync {
    /// Extractor identifier, for logs.
    fn name(&self) -> &'static str;

    /// Extract a batch of cards. Either the whole batch or an error.
    async fn extract(&self, request: &ExtractionRequest) -> Result<Vec<Card>, ExtractionError>;
}
