use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use tokio::fs;

use crate::constants::{RESUME_FILE, SERVICES_FILE};
use crate::entities::{resume::ResumeData, service::Service};
use crate::errors::AppError;
use crate::repositories::{resume::ResumeRepository, services::ServiceRepository};

/// Flat-file persistence: one JSON document per concern, rewritten wholesale
/// on every save. No locking; concurrent writers race and the last one wins.
#[derive(Debug, Clone)]
pub struct JsonStore {
    resume_path: PathBuf,
    services_path: PathBuf,
}

/// Probe result for the health endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreStatus {
    Ok,
    Missing,
    Invalid,
}

impl JsonStore {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        let data_dir = data_dir.as_ref();
        JsonStore {
            resume_path: data_dir.join(RESUME_FILE),
            services_path: data_dir.join(SERVICES_FILE),
        }
    }

    pub async fn ensure_dirs(&self) -> std::io::Result<()> {
        if let Some(parent) = self.resume_path.parent() {
            fs::create_dir_all(parent).await?;
        }
        Ok(())
    }

    async fn read_json<T>(&self, path: &Path) -> T
    where
        T: DeserializeOwned + Default,
    {
        let raw = match fs::read_to_string(path).await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("failed to read {}: {}; falling back to default", path.display(), e);
                return T::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("failed to parse {}: {}; falling back to default", path.display(), e);
                T::default()
            }
        }
    }

    async fn write_json<T>(&self, path: &Path, value: &T) -> Result<(), AppError>
    where
        T: Serialize + ?Sized,
    {
        let raw = serde_json::to_string_pretty(value)?;
        fs::write(path, raw).await?;
        Ok(())
    }

    async fn probe<T>(&self, path: &Path) -> StoreStatus
    where
        T: DeserializeOwned,
    {
        match fs::read_to_string(path).await {
            Err(_) => StoreStatus::Missing,
            Ok(raw) => match serde_json::from_str::<T>(&raw) {
                Ok(_) => StoreStatus::Ok,
                Err(_) => StoreStatus::Invalid,
            },
        }
    }

    pub async fn resume_status(&self) -> StoreStatus {
        self.probe::<ResumeData>(&self.resume_path).await
    }

    pub async fn services_status(&self) -> StoreStatus {
        self.probe::<Vec<Service>>(&self.services_path).await
    }
}

#[async_trait]
impl ResumeRepository for JsonStore {
    async fn load_resume(&self) -> ResumeData {
        self.read_json(&self.resume_path).await
    }

    async fn save_resume(&self, doc: &ResumeData) -> Result<(), AppError> {
        self.write_json(&self.resume_path, doc).await
    }
}

#[async_trait]
impl ServiceRepository for JsonStore {
    async fn load_services(&self) -> Vec<Service> {
        self.read_json(&self.services_path).await
    }

    async fn save_services(&self, services: &[Service]) -> Result<(), AppError> {
        self.write_json(&self.services_path, services).await
    }
}
