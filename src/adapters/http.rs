use crate::config::StatuspageConfig;
use crate::domain::model::{Component, Subscriber};
use crate::domain::ports::DirectoryClient;
use crate::utils::error::{Result, SubscriberError};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde::de::DeserializeOwned;

const COMPONENTS: &str = "components";
const SUBSCRIBERS: &str = "subscribers";

/// Fail-fast client for the Statuspage REST API. Each call is one GET
/// with no retries.
pub struct StatuspageClient {
    config: StatuspageConfig,
    client: Client,
}

impl StatuspageClient {
    pub fn new(config: StatuspageConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("OAuth {}", config.token)).map_err(|_| {
            SubscriberError::InvalidConfigValue {
                field: "STATUSPAGE_TOKEN".to_string(),
                value: "***".to_string(),
                reason: "Token contains characters not allowed in an HTTP header".to_string(),
            }
        })?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout())
            .build()?;

        Ok(Self { config, client })
    }

    async fn get_list<T: DeserializeOwned>(
        &self,
        resource: &str,
        page: Option<u32>,
    ) -> Result<Vec<T>> {
        let url = self.config.resource_url(resource)?;
        let mut request = self.client.get(url.clone());
        if let Some(page) = page {
            request = request.query(&[("page", page)]);
        }

        tracing::debug!(url = %url, page = ?page, "Making API request");
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!(resource, status = status.as_u16(), "API response received");

        if !status.is_success() {
            // 讀不到 body 時仍保留狀態碼
            let body = response.text().await.unwrap_or_default();
            return Err(SubscriberError::UpstreamRequest {
                resource: resource.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<Vec<T>>().await?)
    }
}

#[async_trait]
impl DirectoryClient for StatuspageClient {
    async fn list_components(&self) -> Result<Vec<Component>> {
        self.get_list(COMPONENTS, None).await
    }

    async fn list_subscribers(&self, page: u32) -> Result<Vec<Subscriber>> {
        self.get_list(SUBSCRIBERS, Some(page)).await
    }

    fn max_pages(&self) -> u32 {
        self.config.max_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn client_for(server: &MockServer) -> StatuspageClient {
        let mut config = StatuspageConfig::new("page1", "secret-token");
        config.api_base = server.url("/v1");
        config.timeout_seconds = 5;
        StatuspageClient::new(config).unwrap()
    }

    #[tokio::test]
    async fn test_list_components_sends_auth_header() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v1/pages/page1/components")
                .header("Authorization", "OAuth secret-token");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([
                    {"id": "c1", "name": "API", "status": "operational", "position": 1},
                    {"id": "c2", "name": "Website"}
                ]));
        });

        let components = client_for(&server).list_components().await.unwrap();

        api_mock.assert();
        assert_eq!(components.len(), 2);
        assert_eq!(components[0].id, "c1");
        assert_eq!(components[1].name, "Website");
    }

    #[test]
    fn test_page_limit_comes_from_config() {
        let mut config = StatuspageConfig::new("page1", "secret-token");
        config.max_pages = 7;
        assert_eq!(StatuspageClient::new(config).unwrap().max_pages(), 7);
    }

    #[tokio::test]
    async fn test_list_subscribers_sends_page_param() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v1/pages/page1/subscribers")
                .query_param("page", "3");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([
                    {"id": "s1", "email": "a@x.com", "components": ["c1"]}
                ]));
        });

        let subscribers = client_for(&server).list_subscribers(3).await.unwrap();

        api_mock.assert();
        assert_eq!(subscribers.len(), 1);
        assert!(subscribers[0].is_subscribed_to("c1"));
    }

    #[tokio::test]
    async fn test_non_success_status_is_upstream_error() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/v1/pages/page1/components");
            then.status(401).body("Unauthorized");
        });

        let err = client_for(&server).list_components().await.unwrap_err();

        api_mock.assert_hits(1);
        match err {
            SubscriberError::UpstreamRequest {
                resource,
                status,
                body,
            } => {
                assert_eq!(resource, "components");
                assert_eq!(status, 401);
                assert_eq!(body, "Unauthorized");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_non_array_body_is_rejected() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/v1/pages/page1/subscribers");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"error": "unexpected"}));
        });

        let err = client_for(&server).list_subscribers(0).await.unwrap_err();
        assert!(matches!(err, SubscriberError::Http(_)));
    }

    #[test]
    fn test_rejects_token_with_newline() {
        let config = StatuspageConfig::new("page1", "bad\ntoken");
        assert!(matches!(
            StatuspageClient::new(config),
            Err(SubscriberError::InvalidConfigValue { .. })
        ));
    }
}
