pub mod base;
pub mod client;
pub mod models;
pub mod traits;

pub use base::{api_base_for_host, ApiBase, LOCAL_API_BASE, RELATIVE_API_BASE};
pub use client::ApiClient;
pub use models::{DownloadLink, ExtractionRequest, ExtractionResult, MediaType};
pub use traits::ExtractApi;
