//! HTTP Task API
//!
//! `reqwest` client for the to-do REST backend. Works natively and in the
//! browser (reqwest switches to `fetch` on wasm32).

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::api::TaskApi;
use crate::config::ClientConfig;
use crate::error::{SyncError, SyncResult};
use crate::task::{Task, TaskId, TaskText};

pub struct HttpTaskApi {
    client: Client,
    config: ClientConfig,
}

impl HttpTaskApi {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn task_url(&self, id: &TaskId, action: Option<&str>) -> String {
        let encoded = utf8_percent_encode(id.as_str(), NON_ALPHANUMERIC);
        match action {
            Some(action) => self.config.endpoint(&format!("tasks/{}/{}", encoded, action)),
            None => self.config.endpoint(&format!("tasks/{}", encoded)),
        }
    }
}

/// Turn non-2xx responses into `SyncError::Status`, keeping the body for the log
async fn check_status(response: Response) -> SyncResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            log::warn!("[HTTP] Could not read error body for status {}: {}", status, e);
            String::new()
        }
    };
    Err(SyncError::Status {
        status: status.as_u16(),
        body,
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> SyncResult<T> {
    let response = check_status(response).await?;
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[async_trait(?Send)]
impl TaskApi for HttpTaskApi {
    async fn list_tasks(&self) -> SyncResult<Vec<Task>> {
        let response = self.client.get(self.config.endpoint("tasks")).send().await?;
        decode(response).await
    }

    async fn create_task(&self, text: &str) -> SyncResult<Task> {
        let response = self
            .client
            .post(self.config.endpoint("tasks"))
            .json(&TaskText { text })
            .send()
            .await?;
        decode(response).await
    }

    async fn update_task(&self, id: &TaskId, text: &str) -> SyncResult<Task> {
        let response = self
            .client
            .post(self.task_url(id, None))
            .json(&TaskText { text })
            .send()
            .await?;
        decode(response).await
    }

    async fn delete_task(&self, id: &TaskId) -> SyncResult<()> {
        let response = self.client.delete(self.task_url(id, None)).send().await?;
        check_status(response).await?;
        Ok(())
    }

    async fn complete_task(&self, id: &TaskId) -> SyncResult<Task> {
        let response = self.client.post(self.task_url(id, Some("complete"))).send().await?;
        decode(response).await
    }

    async fn incomplete_task(&self, id: &TaskId) -> SyncResult<Task> {
        let response = self.client.post(self.task_url(id, Some("incomplete"))).send().await?;
        decode(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_urls_escape_ids() {
        let api = HttpTaskApi::new(ClientConfig::default());
        assert_eq!(
            api.task_url(&TaskId::from("42"), None),
            "http://localhost:8080/tasks/42"
        );
        assert_eq!(
            api.task_url(&TaskId::from("a/b c"), Some("complete")),
            "http://localhost:8080/tasks/a%2Fb%20c/complete"
        );
    }
}
