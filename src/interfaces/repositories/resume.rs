use async_trait::async_trait;

use crate::entities::resume::ResumeData;
use crate::errors::AppError;

#[async_trait]
pub trait ResumeRepository: Send + Sync {
    /// Loads the persisted document. Read or parse failures collapse to the
    /// empty-shell default; callers never see an error from a load.
    async fn load_resume(&self) -> ResumeData;

    /// Replaces the whole document on disk. Failures propagate.
    async fn save_resume(&self, doc: &ResumeData) -> Result<(), AppError>;
}
