//! API base resolution and endpoint URL building

use crate::api::models::DownloadLink;
use crate::utils::error::PinloaderError;
use reqwest::Url;

/// API base used when talking to a backend on this machine
pub const LOCAL_API_BASE: &str = "http://localhost:8000/api";

/// API base for same-origin deployments, relative to the server origin
pub const RELATIVE_API_BASE: &str = "/api";

/// Filename stem used when the result has no title
const DEFAULT_FILENAME_STEM: &str = "pin";

/// Hosts that are served by a locally running backend
pub fn is_local_host(host: &str) -> bool {
    matches!(host, "localhost" | "127.0.0.1" | "")
}

/// Pick the API base for a page host
pub fn api_base_for_host(host: &str) -> &'static str {
    if is_local_host(host) {
        LOCAL_API_BASE
    } else {
        RELATIVE_API_BASE
    }
}

/// Absolute URL prefix under which `extract` and `download` live
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiBase(String);

impl ApiBase {
    /// Use `base` verbatim, bypassing host based resolution
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self(base.trim_end_matches('/').to_string())
    }

    /// Use `base` as given, provided it is an absolute http(s) URL
    pub fn parse(base: &str) -> Result<Self, PinloaderError> {
        let base = base.trim();
        let url = Url::parse(base)
            .map_err(|e| PinloaderError::InvalidUrl(format!("{}: {}", base, e)))?;
        match url.scheme() {
            "http" | "https" => Ok(Self::new(base)),
            other => Err(PinloaderError::InvalidUrl(format!(
                "{}: unsupported scheme {}",
                base, other
            ))),
        }
    }

    /// Resolve the base for an optional server origin.
    ///
    /// No origin, or a local one, means the development backend on port 8000.
    /// Any other origin gets `/api` joined onto it.
    pub fn resolve(server_url: Option<&str>) -> Result<Self, PinloaderError> {
        let server_url = match server_url.map(str::trim).filter(|s| !s.is_empty()) {
            Some(s) => s,
            None => return Ok(Self::new(LOCAL_API_BASE)),
        };

        let origin = Url::parse(server_url)
            .map_err(|e| PinloaderError::InvalidUrl(format!("{}: {}", server_url, e)))?;
        let host = origin.host_str().unwrap_or("");

        match api_base_for_host(host) {
            LOCAL_API_BASE => Ok(Self::new(LOCAL_API_BASE)),
            relative => {
                let joined = origin
                    .join(relative)
                    .map_err(|e| PinloaderError::InvalidUrl(format!("{}: {}", server_url, e)))?;
                Ok(Self::new(joined.as_str()))
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `{base}/extract`
    pub fn extract_url(&self) -> String {
        format!("{}/extract", self.0)
    }

    /// Proxy download href for one link of a result.
    ///
    /// Query order is `url`, `filename`, then the optional `referer`, so a
    /// href without a referer ends with the link's extension.
    pub fn download_href(
        &self,
        link: &DownloadLink,
        title: &str,
        referer: Option<&str>,
    ) -> Result<String, PinloaderError> {
        let endpoint = format!("{}/download", self.0);
        let mut url = Url::parse(&endpoint)
            .map_err(|e| PinloaderError::InvalidUrl(format!("{}: {}", endpoint, e)))?;

        {
            let mut query = url.query_pairs_mut();
            query.append_pair("url", &link.url);
            query.append_pair("filename", &download_filename(title, &link.ext));
            if let Some(referer) = referer.filter(|r| !r.is_empty()) {
                query.append_pair("referer", referer);
            }
        }

        Ok(url.into())
    }
}

impl std::fmt::Display for ApiBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// `filename` query value: the title (or "pin") plus the link extension
pub fn download_filename(title: &str, ext: &str) -> String {
    let stem = title.trim();
    let stem = if stem.is_empty() {
        DEFAULT_FILENAME_STEM
    } else {
        stem
    };
    format!("{}.{}", stem, ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jpg_link() -> DownloadLink {
        DownloadLink {
            url: "https://i.pinimg.com/originals/ab/cd.jpg".to_string(),
            ext: "jpg".to_string(),
            quality: None,
            label: None,
        }
    }

    #[test]
    fn test_parse_requires_absolute_http_url() {
        assert_eq!(
            ApiBase::parse("http://10.0.0.5:9000/api/").unwrap().as_str(),
            "http://10.0.0.5:9000/api"
        );
        assert!(matches!(ApiBase::parse("/api"), Err(PinloaderError::InvalidUrl(_))));
        assert!(matches!(
            ApiBase::parse("ftp://pins.example.com/api"),
            Err(PinloaderError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_api_base_for_host() {
        assert_eq!(api_base_for_host("localhost"), LOCAL_API_BASE);
        assert_eq!(api_base_for_host("127.0.0.1"), LOCAL_API_BASE);
        assert_eq!(api_base_for_host(""), LOCAL_API_BASE);
        assert_eq!(api_base_for_host("pins.example.com"), RELATIVE_API_BASE);
    }

    #[test]
    fn test_resolve_without_server_is_local() {
        assert_eq!(ApiBase::resolve(None).unwrap().as_str(), LOCAL_API_BASE);
        assert_eq!(ApiBase::resolve(Some("  ")).unwrap().as_str(), LOCAL_API_BASE);
        assert_eq!(
            ApiBase::resolve(Some("http://127.0.0.1:3000")).unwrap().as_str(),
            LOCAL_API_BASE
        );
    }

    #[test]
    fn test_resolve_remote_origin_is_same_origin_api() {
        let base = ApiBase::resolve(Some("https://pins.example.com/app/")).unwrap();
        assert_eq!(base.as_str(), "https://pins.example.com/api");
        assert_eq!(base.extract_url(), "https://pins.example.com/api/extract");
    }

    #[test]
    fn test_resolve_rejects_garbage() {
        assert!(matches!(
            ApiBase::resolve(Some("not a url")),
            Err(PinloaderError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_download_href_without_referer_ends_with_extension() {
        let base = ApiBase::new(LOCAL_API_BASE);
        let href = base.download_href(&jpg_link(), "", None).unwrap();

        assert!(href.starts_with("http://localhost:8000/api/download?url="));
        assert!(href.ends_with("filename=pin.jpg"), "{}", href);
    }

    #[test]
    fn test_download_href_encodes_and_appends_referer() {
        let base = ApiBase::new("https://pins.example.com/api/");
        let href = base
            .download_href(
                &jpg_link(),
                "Sunset & sea",
                Some("https://www.pinterest.com/pin/123/"),
            )
            .unwrap();

        let parsed = Url::parse(&href).unwrap();
        let pairs: Vec<(String, String)> = parsed.query_pairs().into_owned().collect();
        assert_eq!(pairs[0].0, "url");
        assert_eq!(pairs[0].1, "https://i.pinimg.com/originals/ab/cd.jpg");
        assert_eq!(pairs[1], ("filename".into(), "Sunset & sea.jpg".into()));
        assert_eq!(
            pairs[2],
            ("referer".into(), "https://www.pinterest.com/pin/123/".into())
        );
        assert!(!href.contains("Sunset & sea"));
    }
}
