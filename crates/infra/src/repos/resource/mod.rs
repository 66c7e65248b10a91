mod file;
mod inmemory;
mod postgres;

pub use file::FileResourceRepo;
pub use inmemory::InMemoryResourceRepo;
pub use postgres::PostgresResourceRepo;

use alarmhosting_domain::{Resource, ID};

#[async_trait::async_trait]
pub trait IResourceRepo: Send + Sync {
    async fn insert(&self, resource: &Resource) -> anyhow::Result<()>;
    async fn find(&self, resource_id: &ID) -> Option<Resource>;
    async fn find_all(&self) -> anyhow::Result<Vec<Resource>>;
}

#[cfg(test)]
mod tests {
    use crate::setup_context;
    use alarmhosting_domain::{Resource, ResourceStatus, ResourceType};

    #[tokio::test]
    async fn inserts_and_lists_resources() {
        let ctx = setup_context().await;
        let resource = Resource {
            id: "r1".into(),
            resource_type: ResourceType::Domain,
            label: "Main Site".into(),
            hostname: "main-site.local".into(),
            provider: "Acme".into(),
            expiry_date: "2030-01-01".into(),
            status: ResourceStatus::Healthy,
            renewal_url: String::new(),
            notes: String::new(),
            last_checked: 0,
            tags: vec!["prod".into()],
        };

        ctx.repos
            .resources
            .insert(&resource)
            .await
            .expect("To insert resource");

        assert_eq!(
            ctx.repos.resources.find(&resource.id).await,
            Some(resource.clone())
        );
        assert_eq!(ctx.repos.resources.find_all().await.unwrap(), vec![resource]);
    }
}
