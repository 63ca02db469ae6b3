use crate::extract::error::ExtractionError;
use crate::extract::records::{Element, ElementSet, ExhibitPage, FileRecord, Item, Tag};
use elsa::FrozenMap;
use log::debug;
use reqwest::Url;
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::{env, fmt};

/// Blocking client for an Omeka Classic REST API.
///
/// Authentication is a `key` query parameter on every request; Omeka
/// Classic does not use headers for auth. Vocabulary resources (tags,
/// elements, element sets) never change within a harvest, so their first
/// fetch is memoized for the client's lifetime.
pub struct OmekaClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    vocabulary_cache: FrozenMap<String, Box<Value>>,
}

impl fmt::Debug for OmekaClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OmekaClient")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "********"))
            .field("client", &"reqwest::blocking::Client")
            .finish()
    }
}

impl OmekaClient {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
            vocabulary_cache: FrozenMap::default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get_value(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<Value, ExtractionError> {
        let url = if endpoint.starts_with("http") {
            endpoint.to_string()
        } else {
            format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
        };

        let mut query: Vec<(&str, &str)> = params.to_vec();
        if let Some(key) = &self.api_key {
            query.push(("key", key));
        }
        query.push(("pretty_print", ""));

        debug!("GET {url}");
        let response = self.client.get(&url).query(&query).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(ExtractionError::Http {
                url,
                status: status.as_u16(),
                body: response.text().unwrap_or_default(),
            });
        }
        Ok(response.json()?)
    }

    fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<T, ExtractionError> {
        let value = self.get_value(endpoint, params)?;
        Ok(serde_json::from_value(value)?)
    }

    fn get_cached<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ExtractionError> {
        let value = match self.vocabulary_cache.get(endpoint) {
            Some(cached) => cached,
            None => {
                let fetched = self.get_value(endpoint, &[])?;
                self.vocabulary_cache
                    .insert(endpoint.to_string(), Box::new(fetched))
            }
        };
        Ok(serde_json::from_value(value.clone())?)
    }

    pub fn get_items(&self) -> Result<Vec<Item>, ExtractionError> {
        self.get("items", &[])
    }

    pub fn get_item(&self, item_id: i64) -> Result<Item, ExtractionError> {
        self.get(&format!("items/{item_id}"), &[])
    }

    pub fn get_collection(&self, collection_id: i64) -> Result<Value, ExtractionError> {
        self.get_value(&format!("collections/{collection_id}"), &[])
    }

    pub fn get_exhibit(&self, exhibit_id: i64) -> Result<Value, ExtractionError> {
        self.get_value(&format!("exhibits/{exhibit_id}"), &[])
    }

    pub fn get_user(&self, user_id: i64) -> Result<Value, ExtractionError> {
        self.get_value(&format!("users/{user_id}"), &[])
    }

    pub fn get_files_by_item(&self, item_id: i64) -> Result<Vec<FileRecord>, ExtractionError> {
        let item = item_id.to_string();
        self.get("files", &[("item", item.as_str())])
    }

    pub fn get_tag(&self, tag_id: i64) -> Result<Tag, ExtractionError> {
        self.get_cached(&format!("tags/{tag_id}"))
    }

    pub fn get_element_set(&self, set_id: i64) -> Result<ElementSet, ExtractionError> {
        self.get_cached(&format!("element_sets/{set_id}"))
    }

    pub fn get_element(&self, element_id: i64) -> Result<Element, ExtractionError> {
        self.get_cached(&format!("elements/{element_id}"))
    }

    pub fn get_exhibit_pages(&self, exhibit_id: i64) -> Result<Vec<ExhibitPage>, ExtractionError> {
        let exhibit = exhibit_id.to_string();
        self.get("exhibit_pages", &[("exhibit", exhibit.as_str())])
    }

    pub fn get_exhibit_pages_by_item(
        &self,
        item_id: i64,
    ) -> Result<Vec<ExhibitPage>, ExtractionError> {
        let item = item_id.to_string();
        self.get("exhibit_pages", &[("item", item.as_str())])
    }

    /// Fetches a resource by the full API URL another record embedded.
    ///
    /// URLs under the configured base are re-rooted on it; foreign hosts
    /// fall back to their path and query.
    pub fn resolve_url(&self, full_url: &str) -> Result<Value, ExtractionError> {
        let relative = match full_url.split_once(self.base_url.as_str()) {
            Some((_, rest)) => rest.trim_start_matches('/').to_string(),
            None => {
                let parsed =
                    Url::parse(full_url).map_err(|err| ExtractionError::InvalidUrl {
                        url: full_url.to_string(),
                        reason: err.to_string(),
                    })?;
                let mut relative = parsed.path().trim_start_matches('/').to_string();
                if let Some(query) = parsed.query() {
                    relative.push('?');
                    relative.push_str(query);
                }
                relative
            }
        };
        self.get_value(&relative, &[])
    }
}

impl Default for OmekaClient {
    fn default() -> Self {
        let base_url =
            env::var("OMEKA_API_URL").expect("OMEKA_API_URL must be set in .env or environment");
        let api_key = env::var("OMEKA_API_KEY").ok();

        Self::new(base_url, api_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_suite::{sample_item_json, sample_items_json};
    use mockito::Matcher;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn json_mock(server: &mut mockito::Server, path: &str, body: &str) -> mockito::Mock {
        server
            .mock("GET", path)
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create()
    }

    #[rstest]
    fn test_get_item_deserializes_the_record() {
        let mut server = mockito::Server::new();
        let mock = json_mock(&mut server, "/items/12", sample_item_json());
        let client = OmekaClient::new(server.url(), None);

        let item = client.get_item(12).unwrap();

        assert_eq!(item.id, 12);
        assert_eq!(item.tags[0].name, "letters");
        mock.assert();
    }

    #[rstest]
    fn test_requests_carry_key_and_pretty_print_params() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/items")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("key".into(), "sesame".into()),
                Matcher::UrlEncoded("pretty_print".into(), "".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(sample_items_json())
            .create();
        let client = OmekaClient::new(server.url(), Some("sesame".to_string()));

        let items = client.get_items().unwrap();

        assert_eq!(items.len(), 2);
        mock.assert();
    }

    #[rstest]
    fn test_non_success_status_is_a_hard_error() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/items/404")
            .match_query(Matcher::Any)
            .with_status(404)
            .with_body("Not Found")
            .create();
        let client = OmekaClient::new(server.url(), None);

        let err = client.get_item(404).unwrap_err();

        match err {
            ExtractionError::Http { status, body, .. } => {
                assert_eq!(status, 404);
                assert_eq!(body, "Not Found");
            }
            other => panic!("Expected Http error, got {other:?}"),
        }
    }

    #[rstest]
    fn test_vocabulary_lookups_hit_the_cache_on_the_second_call() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/elements/40")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id": 40, "name": "Date", "element_set": {"id": 1, "name": "Dublin Core"}}"#)
            .expect(1)
            .create();
        let client = OmekaClient::new(server.url(), None);

        let first = client.get_element(40).unwrap();
        let second = client.get_element(40).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.name, "Date");
        mock.assert();
    }

    #[rstest]
    fn test_get_files_by_item_filters_on_the_item_param() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/files")
            .match_query(Matcher::AllOf(vec![Matcher::UrlEncoded(
                "item".into(),
                "12".into(),
            )]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[{"id": 5, "item": {"id": 12}, "file_urls": {"original": "https://archive.example.org/files/original/5.jpg"}}]"#,
            )
            .create();
        let client = OmekaClient::new(server.url(), None);

        let files = client.get_files_by_item(12).unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(
            files[0].file_urls.original.as_deref(),
            Some("https://archive.example.org/files/original/5.jpg")
        );
        mock.assert();
    }

    #[rstest]
    fn test_resolve_url_re_roots_urls_under_the_base() {
        let mut server = mockito::Server::new();
        let mock = json_mock(&mut server, "/tags/41", r#"{"id": 41, "name": "letters"}"#);
        let client = OmekaClient::new(server.url(), None);

        let value = client
            .resolve_url(&format!("{}/tags/41", server.url()))
            .unwrap();

        assert_eq!(value["name"], "letters");
        mock.assert();
    }

    #[rstest]
    fn test_resolve_url_falls_back_to_path_for_foreign_hosts() {
        let mut server = mockito::Server::new();
        let mock = json_mock(&mut server, "/tags/41", r#"{"id": 41, "name": "letters"}"#);
        let client = OmekaClient::new(server.url(), None);

        // A foreign absolute URL resolves by path against the configured base.
        let value = client
            .resolve_url("https://mirror.example.net/tags/41")
            .unwrap();

        assert_eq!(value["id"], 41);
        mock.assert();
    }

    #[rstest]
    fn test_resolve_url_rejects_unparseable_foreign_urls() {
        let client = OmekaClient::new("https://archive.example.org/api", None);

        let err = client.resolve_url("not a url at all").unwrap_err();

        assert!(matches!(err, ExtractionError::InvalidUrl { .. }));
    }
}
