use anyhow::Context;
use async_trait::async_trait;
use serde_json::json;

use crate::models::CatalogEvent;

/// The external events service: source of the valid event list and the
/// place confirmed purchases are sent to.
#[async_trait]
pub trait EventCatalog: Send + Sync {
    async fn list_events(&self) -> anyhow::Result<Vec<CatalogEvent>>;
    async fn purchase(&self, event_id: i64, tickets: u32) -> anyhow::Result<()>;
}

pub struct HttpEventCatalog {
    base_url: String,
    client: reqwest::Client,
}

impl HttpEventCatalog {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl EventCatalog for HttpEventCatalog {
    async fn list_events(&self) -> anyhow::Result<Vec<CatalogEvent>> {
        let events = self
            .client
            .get(format!("{}/api/events", self.base_url))
            .send()
            .await
            .context("failed to call events service")?
            .error_for_status()
            .context("events service returned error")?
            .json::<Vec<CatalogEvent>>()
            .await
            .context("failed to parse events list")?;

        tracing::debug!(count = events.len(), "fetched event catalog");
        Ok(events)
    }

    async fn purchase(&self, event_id: i64, tickets: u32) -> anyhow::Result<()> {
        self.client
            .post(format!("{}/api/events/{}/purchase", self.base_url, event_id))
            .json(&json!({ "tickets": tickets }))
            .send()
            .await
            .context("failed to call events service")?
            .error_for_status()
            .context("events service rejected purchase")?;

        Ok(())
    }
}
