use validator::Validate;

use crate::entities::{resume::ResumeData, service::Service};
use crate::errors::AppError;
use crate::repositories::{resume::ResumeRepository, services::ServiceRepository};

/// Read/write access to the resume document and the services catalog, with
/// the deployment's write policy enforced in one place.
pub struct ContentHandler<R>
where
    R: ResumeRepository + ServiceRepository,
{
    pub store: R,
    read_only: bool,
}

impl<R> ContentHandler<R>
where
    R: ResumeRepository + ServiceRepository,
{
    pub fn new(store: R, read_only: bool) -> Self {
        ContentHandler { store, read_only }
    }

    /// Gate shared by every mutating operation. Checked before the request
    /// payload is even parsed, so the 403 is unconditional.
    pub fn ensure_writable(&self) -> Result<(), AppError> {
        if self.read_only {
            return Err(AppError::WritesDisabled);
        }
        Ok(())
    }

    pub async fn resume(&self) -> ResumeData {
        self.store.load_resume().await
    }

    pub async fn replace_resume(&self, doc: ResumeData) -> Result<(), AppError> {
        self.ensure_writable()?;
        self.store.save_resume(&doc).await?;
        tracing::info!("resume document replaced");
        Ok(())
    }

    pub async fn services(&self) -> Vec<Service> {
        self.store.load_services().await
    }

    pub async fn add_service(&self, service: Service) -> Result<(), AppError> {
        self.ensure_writable()?;
        service.validate()?;

        let mut services = self.store.load_services().await;
        services.push(service);
        self.store.save_services(&services).await
    }

    pub async fn remove_service(&self, id: &str) -> Result<(), AppError> {
        self.ensure_writable()?;

        let mut services = self.store.load_services().await;
        let before = services.len();
        services.retain(|s| s.id != id);

        if services.len() == before {
            return Err(AppError::NotFound(format!("No service with id {}", id)));
        }

        self.store.save_services(&services).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mockall::mock;

    mock! {
        pub Store {}

        #[async_trait]
        impl ResumeRepository for Store {
            async fn load_resume(&self) -> ResumeData;
            async fn save_resume(&self, doc: &ResumeData) -> Result<(), AppError>;
        }

        #[async_trait]
        impl ServiceRepository for Store {
            async fn load_services(&self) -> Vec<Service>;
            async fn save_services(&self, services: &[Service]) -> Result<(), AppError>;
        }
    }

    fn sample_service(id: &str) -> Service {
        Service {
            id: id.into(),
            title: "Web development".into(),
            description: "Full-stack builds".into(),
            price: "from $500".into(),
            duration: "2-3 weeks".into(),
            features: vec!["Responsive layout".into()],
            category: "development".into(),
            icon: "code".into(),
        }
    }

    #[tokio::test]
    async fn read_only_blocks_every_mutation_without_touching_the_store() {
        let store = MockStore::new();
        let handler = ContentHandler::new(store, true);

        assert!(matches!(
            handler.replace_resume(ResumeData::default()).await,
            Err(AppError::WritesDisabled)
        ));
        assert!(matches!(
            handler.add_service(sample_service("s1")).await,
            Err(AppError::WritesDisabled)
        ));
        assert!(matches!(
            handler.remove_service("s1").await,
            Err(AppError::WritesDisabled)
        ));
    }

    #[tokio::test]
    async fn add_service_appends_to_the_loaded_catalog() {
        let mut store = MockStore::new();
        store
            .expect_load_services()
            .returning(|| vec![sample_service("s1")]);
        store
            .expect_save_services()
            .withf(|services| services.len() == 2 && services[1].id == "s2")
            .returning(|_| Ok(()));

        let handler = ContentHandler::new(store, false);
        handler.add_service(sample_service("s2")).await.expect("add");
    }

    #[tokio::test]
    async fn add_service_rejects_blank_ids() {
        let store = MockStore::new();
        let handler = ContentHandler::new(store, false);

        let mut bad = sample_service("s1");
        bad.id = String::new();

        assert!(matches!(
            handler.add_service(bad).await,
            Err(AppError::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn remove_service_reports_missing_ids() {
        let mut store = MockStore::new();
        store.expect_load_services().returning(Vec::new);

        let handler = ContentHandler::new(store, false);

        assert!(matches!(
            handler.remove_service("ghost").await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn remove_service_rewrites_the_remaining_catalog() {
        let mut store = MockStore::new();
        store
            .expect_load_services()
            .returning(|| vec![sample_service("s1"), sample_service("s2")]);
        store
            .expect_save_services()
            .withf(|services| services.len() == 1 && services[0].id == "s2")
            .returning(|_| Ok(()));

        let handler = ContentHandler::new(store, false);
        handler.remove_service("s1").await.expect("remove");
    }
}
