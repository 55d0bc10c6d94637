//! Image lookups by food name

use std::collections::{HashMap, HashSet};

use common::{Endpoint, HttpClient, RequestOptions};
use futures::stream::{self, StreamExt};
use serde_json::Value;
use tracing::{debug, warn};

/// Image adapter
#[derive(Debug, Clone)]
pub struct ImageAdapter {
    client: HttpClient,
}

impl ImageAdapter {
    /// Create a new image adapter
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// Route an upstream image URL through the image proxy
    pub fn proxy_url(&self, original: &str) -> String {
        format!(
            "{}?url={}",
            self.client.config().endpoint_url(Endpoint::ImageProxy),
            urlencoding::encode(original)
        )
    }

    /// Proxied image URL for a food name; `None` when there is no match or the
    /// lookup failed
    pub async fn get_image_by_name(&self, name: &str) -> Option<String> {
        let options = RequestOptions::get().query("name", name);

        let payload = match self.client.call(Endpoint::ImageByName, options).await {
            Ok(payload) => payload,
            Err(e) => {
                warn!("Image lookup for {} failed: {}", name, e);
                return None;
            }
        };

        let original = payload
            .as_json()
            .and_then(|body| body.get("image_url"))
            .and_then(Value::as_str)
            .filter(|url| !url.is_empty());

        match original {
            Some(url) => Some(self.proxy_url(url)),
            None => {
                debug!("No image found for {}", name);
                None
            }
        }
    }

    /// Look up many names concurrently; one entry per distinct name
    pub async fn get_images_by_names<I, S>(&self, names: I) -> HashMap<String, Option<String>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let distinct: Vec<String> = names
            .into_iter()
            .map(Into::into)
            .filter(|name| seen.insert(name.clone()))
            .collect();

        stream::iter(distinct)
            .map(|name| async move {
                let url = self.get_image_by_name(&name).await;
                (name, url)
            })
            .buffer_unordered(self.client.config().max_concurrency)
            .collect::<HashMap<_, _>>()
            .await
    }
}
