use crate::client::LearningClient;
use crate::domain::health::HealthStatus;
use crate::error::SdkError;
use crate::query::keys;
use std::sync::Arc;

pub struct Health<'a> {
    pub(crate) client: &'a LearningClient,
}

impl<'a> Health<'a> {
    pub async fn check(&self) -> Result<HealthStatus, SdkError> {
        let url = self.client.http.url("/health/simple");
        Ok(self.client.http.get(&url).await?)
    }

    /// Cached check, shared by every caller within the stale window.
    pub async fn cached(&self) -> Result<Arc<HealthStatus>, Arc<SdkError>> {
        let client = self.client.clone();
        self.client
            .queries
            .fetch(&keys::health(), move || {
                let client = client.clone();
                async move { client.health().check().await }
            })
            .await
    }
}
