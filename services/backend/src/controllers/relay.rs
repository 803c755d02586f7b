// Upstream catalog relay
use axum::response::{IntoResponse, Json, Response};
use reqwest::Client;
use tracing::{debug, error};
use url::Url;

use crate::error::RelayError;
use crate::models::route::RouteDescriptor;

#[derive(Clone)]
pub struct RelayController {
    client: Client,
    upstream: Url,
}

impl RelayController {
    pub fn new(upstream: Url) -> Self {
        Self {
            client: Client::new(),
            upstream,
        }
    }

    pub fn upstream_url(&self) -> &str {
        self.upstream.as_str().trim_end_matches('/')
    }

    /// Build the outbound query for a route: first client value if present, else
    /// the declared default, else nothing.
    pub fn upstream_query(
        route: &RouteDescriptor,
        query: &[(String, String)],
    ) -> Vec<(&'static str, String)> {
        route
            .params
            .iter()
            .filter_map(|param| {
                query
                    .iter()
                    .find(|(name, _)| name == param.name)
                    .map(|(_, value)| value.clone())
                    .or_else(|| param.default.map(str::to_string))
                    .map(|value| (param.upstream_name, value))
            })
            .collect()
    }

    /// Upstream URL for a route. Captures are raw path segments and keep their
    /// percent-encoding; `set_path` escapes anything that would end the path.
    pub fn upstream_endpoint(&self, route: &RouteDescriptor, captures: &[(&str, &str)]) -> Url {
        let mut url = self.upstream.clone();
        let path = format!(
            "{}{}",
            self.upstream.path().trim_end_matches('/'),
            route.upstream_path(captures.iter().copied())
        );
        url.set_path(&path);
        url
    }

    /// Issue one GET against the upstream and decode its JSON body
    pub async fn fetch(
        &self,
        route: &RouteDescriptor,
        captures: &[(&str, &str)],
        query: &[(String, String)],
    ) -> Result<serde_json::Value, RelayError> {
        let url = self.upstream_endpoint(route, captures);
        let params = Self::upstream_query(route, query);
        debug!("relay GET {} {:?}", url, params);

        let response = self
            .client
            .get(url)
            .query(&params)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }

    pub async fn forward(
        &self,
        route: &RouteDescriptor,
        captures: &[(&str, &str)],
        query: &[(String, String)],
    ) -> Response {
        match self.fetch(route, captures, query).await {
            Ok(body) => Json(body).into_response(),
            Err(e) => {
                error!("Upstream call for {} failed: {}", route.path, e);
                e.into_response()
            }
        }
    }
}
