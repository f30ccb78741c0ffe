//! REST client for the plugin's property endpoints.
//!
//! All request bodies are JSON; successful responses are JSON-decoded and
//! non-2xx responses become [`SyncError::Api`] carrying the status code and
//! the raw body text. Reads that come back empty decode to default values
//! so callers always receive a well-formed (possibly empty) list.

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use super::error::{SyncError, SyncResult};
use super::store::PropertyStore;
use crate::models::incident::{Incident, Playbook};
use crate::models::list::PropertyList;
use crate::models::property::PropertyDefinition;
use crate::models::selection::SelectedIds;

#[derive(Serialize)]
struct UpdateItemBody<'a> {
    item: &'a PropertyDefinition,
}

#[derive(Serialize)]
struct ReorderBody {
    item_num: usize,
    new_location: usize,
}

#[derive(Serialize)]
struct SelectionValueBody<'a> {
    property_id: &'a str,
    selection_id: String,
}

#[derive(Serialize)]
struct FreetextValueBody<'a> {
    property_id: &'a str,
    value: &'a str,
}

/// HTTP client bound to one plugin API root.
///
/// The root is the plugin-scoped prefix, e.g.
/// `https://chat.example.com/plugins/com.mattermost.plugin-incident-response/api/v0`.
#[derive(Clone, Debug)]
pub struct RestClient {
    api_root: String,
    client: reqwest::Client,
}

impl RestClient {
    /// Builds a client for `api_root`, attaching `auth_token` as a bearer
    /// credential on every request when present.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Transport`] if the underlying HTTP client
    /// cannot be constructed or the token is not a valid header value.
    pub fn new(api_root: impl Into<String>, auth_token: Option<&str>) -> SyncResult<Self> {
        let mut headers = HeaderMap::new();
        if let Some(token) = auth_token {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|e| SyncError::Transport(e.to_string()))?;
            headers.insert(AUTHORIZATION, value);
        }
        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| SyncError::Transport(e.to_string()))?;
        Ok(Self {
            api_root: api_root.into().trim_end_matches('/').to_owned(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.api_root)
    }

    async fn get_json<T: DeserializeOwned + Default>(&self, path: &str) -> SyncResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::decode(Self::check(response).await?).await
    }

    async fn put_json<B: Serialize + Sync, T: DeserializeOwned + Default>(
        &self,
        path: &str,
        body: &B,
    ) -> SyncResult<T> {
        let response = self.client.put(self.url(path)).json(body).send().await?;
        Self::decode(Self::check(response).await?).await
    }

    async fn put_ack<B: Serialize + Sync>(&self, path: &str, body: &B) -> SyncResult<()> {
        let response = self.client.put(self.url(path)).json(body).send().await?;
        Self::check(response).await.map(|_| ())
    }

    async fn delete_ack(&self, path: &str) -> SyncResult<()> {
        let response = self.client.delete(self.url(path)).send().await?;
        Self::check(response).await.map(|_| ())
    }

    /// Converts a non-2xx response into a structured API error.
    async fn check(response: reqwest::Response) -> SyncResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let url = response.url().to_string();
        let message = response.text().await.unwrap_or_default();
        Err(SyncError::Api {
            status: status.as_u16(),
            message,
            url,
        })
    }

    /// Decodes a 2xx body, treating an empty body as the default value.
    async fn decode<T: DeserializeOwned + Default>(response: reqwest::Response) -> SyncResult<T> {
        let body = response.text().await?;
        if body.trim().is_empty() || body.trim() == "null" {
            return Ok(T::default());
        }
        serde_json::from_str(&body).map_err(|e| SyncError::Decode(e.to_string()))
    }

    /// Fetches a whole incident document.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError`] on transport failure, API rejection, or a body
    /// that fails to decode.
    #[instrument(skip(self))]
    pub async fn incident(&self, incident_id: &str) -> SyncResult<Incident> {
        self.get_json(&format!("/incidents/{incident_id}")).await
    }

    /// Fetches a whole playbook document.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError`] on transport failure, API rejection, or a body
    /// that fails to decode.
    #[instrument(skip(self))]
    pub async fn playbook(&self, playbook_id: &str) -> SyncResult<Playbook> {
        self.get_json(&format!("/playbooks/{playbook_id}")).await
    }
}

#[async_trait::async_trait]
impl PropertyStore for RestClient {
    async fn incident_list(&self, incident_id: &str) -> SyncResult<PropertyList> {
        let incident = self.incident(incident_id).await?;
        debug!(
            incident_id,
            items = incident.propertylist.len(),
            "loaded incident property list"
        );
        Ok(incident.propertylist)
    }

    async fn playbook_list(&self, playbook_id: &str) -> SyncResult<PropertyList> {
        let playbook = self.playbook(playbook_id).await?;
        Ok(playbook.propertylist)
    }

    async fn add_item(
        &self,
        incident_id: &str,
        item: &PropertyDefinition,
    ) -> SyncResult<PropertyDefinition> {
        self.put_json(&format!("/incidents/{incident_id}/propertylist/add"), item)
            .await
    }

    async fn update_item(
        &self,
        incident_id: &str,
        index: usize,
        item: &PropertyDefinition,
    ) -> SyncResult<()> {
        self.put_ack(
            &format!("/incidents/{incident_id}/propertylist/{index}"),
            &UpdateItemBody { item },
        )
        .await
    }

    async fn remove_item(&self, incident_id: &str, index: usize) -> SyncResult<()> {
        self.delete_ack(&format!("/incidents/{incident_id}/propertylist/{index}"))
            .await
    }

    async fn reorder_item(&self, incident_id: &str, from: usize, to: usize) -> SyncResult<()> {
        self.put_ack(
            &format!("/incidents/{incident_id}/propertylist/reorder"),
            &ReorderBody {
                item_num: from,
                new_location: to,
            },
        )
        .await
    }

    async fn set_selection_value(
        &self,
        incident_id: &str,
        property_id: &str,
        selected: &SelectedIds,
    ) -> SyncResult<()> {
        self.put_ack(
            &format!("/incidents/{incident_id}/property-selection-value"),
            &SelectionValueBody {
                property_id,
                // Comma-joined only here, at the wire boundary.
                selection_id: selected.to_wire(),
            },
        )
        .await
    }

    async fn set_freetext_value(
        &self,
        incident_id: &str,
        property_id: &str,
        value: &str,
    ) -> SyncResult<()> {
        self.put_ack(
            &format!("/incidents/{incident_id}/property-freetext-value"),
            &FreetextValueBody { property_id, value },
        )
        .await
    }
}
