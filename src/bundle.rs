use sceneport_api_types::error::ImportError;
use sceneport_api_types::scene::SceneDescriptor;
use serde::Deserialize;

/// The single non-JSON file stored alongside a bundle's descriptor.
/// Transient; exists only between fetch and upload.
#[derive(Clone, Debug)]
pub struct BinaryResource {
    pub bytes: Vec<u8>,
    pub media_type: String,
}

impl BinaryResource {
    /// Derived extension for the uploaded asset. Binary 3D-transmission
    /// payloads keep `.glb`; everything else is treated as an image.
    pub fn file_ext(&self) -> &'static str {
        match self.media_type.split('/').nth(1) {
            Some("gltf-binary") => ".glb",
            _ => ".png",
        }
    }

    pub fn file_name(&self, scene_name: &str) -> String {
        format!("{scene_name}{}", self.file_ext())
    }
}

/// Storage a bundle is fetched from: the descriptor plus the file listing and
/// byte retrieval for the resources stored under the bundle name.
#[allow(async_fn_in_trait)]
pub trait BundleSource {
    async fn fetch_descriptor(&self, name: &str) -> Result<SceneDescriptor, ImportError>;
    async fn list_resources(&self, name: &str) -> Result<Vec<String>, ImportError>;
    async fn fetch_resource(&self, name: &str, file: &str) -> Result<BinaryResource, ImportError>;
}

#[derive(Debug, Deserialize)]
struct MediaListing {
    files: Vec<String>,
}

/// Bundle source backed by the export/media HTTP server. Base URLs are
/// injected rather than derived from any ambient location.
pub struct HttpBundleSource {
    client: reqwest::Client,
    bundle_base: String,
    media_base: String,
}

impl HttpBundleSource {
    pub fn new(bundle_base: impl Into<String>, media_base: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            bundle_base: bundle_base.into().trim_end_matches('/').to_owned(),
            media_base: media_base.into().trim_end_matches('/').to_owned(),
        }
    }
}

impl BundleSource for HttpBundleSource {
    async fn fetch_descriptor(&self, name: &str) -> Result<SceneDescriptor, ImportError> {
        let url = format!("{}/{name}.json", self.bundle_base);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| ImportError::DescriptorUnavailable(err.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(ImportError::DescriptorUnavailable(format!(
                "GET {url}: status {status}"
            )));
        }
        response
            .json()
            .await
            .map_err(|err| ImportError::DescriptorUnavailable(format!("GET {url}: {err}")))
    }

    /// Lists the non-descriptor files stored under the bundle name. A
    /// transport failure or non-success status is an error, but a reply whose
    /// payload does not have the expected shape yields an empty listing.
    async fn list_resources(&self, name: &str) -> Result<Vec<String>, ImportError> {
        let url = format!("{}/media/list/{name}/", self.media_base);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| ImportError::ResourceListUnavailable(err.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(ImportError::ResourceListUnavailable(format!(
                "GET {url}: status {status}"
            )));
        }

        let listing = match response.json::<MediaListing>().await {
            Ok(listing) => listing,
            Err(err) => {
                log::warn!("unexpected media listing for {name}: {err}");
                return Ok(Vec::new());
            }
        };
        Ok(listing
            .files
            .into_iter()
            .filter(|file| !file.ends_with(".json"))
            .collect())
    }

    async fn fetch_resource(&self, name: &str, file: &str) -> Result<BinaryResource, ImportError> {
        let url = format!("{}/media/{name}/{file}", self.media_base);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| ImportError::ResourceFetchFailed(err.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(ImportError::ResourceFetchFailed(format!(
                "GET {url}: status {status}"
            )));
        }

        let media_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("application/octet-stream")
            .to_owned();
        let bytes = response
            .bytes()
            .await
            .map_err(|err| ImportError::ResourceFetchFailed(err.to_string()))?;

        Ok(BinaryResource {
            bytes: bytes.to_vec(),
            media_type,
        })
    }
}
