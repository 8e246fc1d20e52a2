use crate::config::SupabaseConfig;
use crate::error::BackendError;
use crate::model::{Table, UpsertRow};
use crate::supabase::UpsertOutcome;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client as HttpClient;

pub struct Client {
    http_client: HttpClient,
    url: String,
    key: String,
}

impl Client {
    pub fn new(config: SupabaseConfig) -> Result<Self, BackendError> {
        let http_client = HttpClient::builder().timeout(config.timeout()).build()?;
        Ok(Self {
            http_client,
            url: config.url.trim_end_matches('/').to_string(),
            key: config.key,
        })
    }

    fn table_url(&self, table: Table) -> String {
        format!("{}/rest/v1/{}", self.url, table)
    }

    fn auth_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Ok(value) = HeaderValue::from_str(&self.key) {
            headers.insert("apikey", value);
        }
        if let Ok(value) = HeaderValue::from_str(&format!("Bearer {}", self.key)) {
            headers.insert(AUTHORIZATION, value);
        }
        headers
    }

    /// Inserts one row, letting the backend merge it into an existing row with
    /// the same key.
    ///
    /// Never fails: transport errors and unexpected statuses are reported as
    /// [`UpsertOutcome::Rejected`].
    pub async fn insert<R: UpsertRow>(&self, table: Table, row: &R) -> UpsertOutcome {
        let result = self
            .http_client
            .post(self.table_url(table))
            .headers(self.auth_headers())
            .header(CONTENT_TYPE, "application/json")
            .header("Prefer", "resolution=merge-duplicates")
            .json(row)
            .send()
            .await;

        match result {
            Ok(response) => {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                UpsertOutcome::from_response(status, body)
            }
            Err(e) => UpsertOutcome::Rejected(BackendError::Network(e)),
        }
    }

    /// Checks that the backend is reachable and the credentials are accepted.
    pub async fn probe(&self) -> Result<(), BackendError> {
        let response = self
            .http_client
            .get(self.table_url(Table::Weather))
            .query(&[("limit", "1")])
            .headers(self.auth_headers())
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::OK {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(BackendError::rejected(status, body))
        }
    }
}
