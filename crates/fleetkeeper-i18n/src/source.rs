//! Translation document retrieval

use crate::error::{I18nError, I18nResult};
use crate::{Language, TranslationDocument};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Retrieves the translation document for a language
///
/// The production implementation fetches over HTTP; tests substitute
/// in-memory sources.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TranslationSource: Send + Sync {
    /// Fetch and parse the translation document for `language`
    async fn fetch(&self, language: Language) -> I18nResult<TranslationDocument>;
}

/// Fetches translation documents from `{base}/locales/{lang}.json`
pub struct HttpTranslationSource {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpTranslationSource {
    /// Create a source rooted at `base_url` with the given request timeout
    pub fn new(base_url: &str, timeout: Duration) -> I18nResult<Self> {
        // A trailing slash keeps Url::join from replacing the last path segment
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };
        let base_url = Url::parse(&normalized).map_err(|source| I18nError::InvalidBaseUrl {
            url: normalized.clone(),
            source,
        })?;

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| I18nError::HttpClient { source })?;

        Ok(Self { client, base_url })
    }

    fn document_url(&self, language: Language) -> I18nResult<Url> {
        self.base_url
            .join(&format!("locales/{}.json", language.code()))
            .map_err(|source| I18nError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                source,
            })
    }
}

#[async_trait]
impl TranslationSource for HttpTranslationSource {
    async fn fetch(&self, language: Language) -> I18nResult<TranslationDocument> {
        let url = self.document_url(language)?;
        debug!("Fetching translations from {}", url);

        let response =
            self.client
                .get(url.clone())
                .send()
                .await
                .map_err(|source| I18nError::FetchFailed {
                    language: language.code().to_string(),
                    status: None,
                    source: Some(source),
                })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Translation fetch for '{}' returned {}", language, status);
            return Err(I18nError::FetchFailed {
                language: language.code().to_string(),
                status: Some(status.as_u16()),
                source: None,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| I18nError::FetchFailed {
                language: language.code().to_string(),
                status: Some(status.as_u16()),
                source: Some(source),
            })?;

        let document =
            serde_json::from_slice(&body).map_err(|source| I18nError::ParseFailed {
                language: language.code().to_string(),
                source,
            })?;

        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_url_formation() {
        let source = HttpTranslationSource::new("https://fleetkeeper.app", Duration::from_secs(5))
            .expect("valid base URL");
        let url = source.document_url(Language::German).expect("joins");
        assert_eq!(url.as_str(), "https://fleetkeeper.app/locales/de.json");
    }

    #[test]
    fn test_document_url_with_path_base() {
        let source =
            HttpTranslationSource::new("https://cdn.example.com/site/", Duration::from_secs(5))
                .expect("valid base URL");
        let url = source.document_url(Language::Czech).expect("joins");
        assert_eq!(url.as_str(), "https://cdn.example.com/site/locales/cs.json");
    }

    #[test]
    fn test_invalid_base_url() {
        let result = HttpTranslationSource::new("not a url", Duration::from_secs(5));
        assert!(matches!(result, Err(I18nError::InvalidBaseUrl { .. })));
    }
}
