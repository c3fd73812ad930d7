use crate::entities::{AssetSpec, CameraSpec, CreateReply, RegionSpec, SensorSpec, TripwireSpec};
use crate::error::ImportError;
use crate::scene::{SceneConfig, SceneRecord};
use reqwest::header::AUTHORIZATION;
use reqwest::multipart;
use serde::Serialize;

pub const SCENE_ENDPOINT: &str = "/scene";
pub const CAMERA_ENDPOINT: &str = "/camera";
pub const REGION_ENDPOINT: &str = "/region";
pub const TRIPWIRE_ENDPOINT: &str = "/tripwire";
pub const SENSOR_ENDPOINT: &str = "/sensor";
pub const ASSET_ENDPOINT: &str = "/asset";

/// Everything needed to create one backend scene record: the binary payload
/// and the minimal scene metadata sent alongside it.
#[derive(Clone, Debug)]
pub struct SceneUpload {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub media_type: String,
    pub scene_name: String,
}

/// Outcome of a scene-creation request. The backend reply is parsed
/// leniently: a success status with an unparseable body yields the raw text
/// instead of an error, and callers must check the shape they got.
#[derive(Clone, Debug)]
pub enum UploadOutcome {
    Scene(SceneRecord),
    Unparsed(String),
}

impl UploadOutcome {
    pub fn uid(&self) -> Option<&str> {
        match self {
            UploadOutcome::Scene(record) => Some(&record.uid),
            UploadOutcome::Unparsed(_) => None,
        }
    }
}

/// The backend scene-management operations consumed by the import pipeline.
#[allow(async_fn_in_trait)]
pub trait SceneBackend {
    async fn create_scene(&self, upload: SceneUpload) -> Result<UploadOutcome, ImportError>;
    async fn update_scene(
        &self,
        uid: &str,
        config: &SceneConfig,
    ) -> Result<CreateReply, ImportError>;
    async fn create_camera(&self, spec: CameraSpec) -> Result<CreateReply, ImportError>;
    async fn create_region(&self, spec: RegionSpec) -> Result<CreateReply, ImportError>;
    async fn create_tripwire(&self, spec: TripwireSpec) -> Result<CreateReply, ImportError>;
    async fn create_sensor(&self, spec: SensorSpec) -> Result<CreateReply, ImportError>;
    async fn create_asset(&self, spec: AssetSpec) -> Result<CreateReply, ImportError>;
}

/// HTTP client for the scene-management backend. The authorization credential
/// is attached verbatim to every request.
pub struct RestClient {
    client: reqwest::Client,
    base_url: String,
    auth_token: String,
}

impl RestClient {
    pub fn new(base_url: impl Into<String>, auth_token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            auth_token: auth_token.into(),
        }
    }

    fn endpoint(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    async fn create_entity<T: Serialize>(
        &self,
        endpoint: &str,
        spec: &T,
        label: &str,
    ) -> Result<CreateReply, ImportError> {
        let response = self
            .client
            .post(self.endpoint(endpoint))
            .header(AUTHORIZATION, self.auth_token.as_str())
            .json(spec)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ImportError::ItemCreationFailed {
                label: label.to_owned(),
                detail: format!("status {status}: {body}"),
            });
        }
        Ok(response.json().await.unwrap_or_default())
    }
}

impl SceneBackend for RestClient {
    /// Creates one scene record from a multipart submission carrying the
    /// binary payload (`map`) and the display name (`name`). Not idempotent:
    /// a retried call creates a duplicate record.
    async fn create_scene(&self, upload: SceneUpload) -> Result<UploadOutcome, ImportError> {
        let part = multipart::Part::bytes(upload.bytes)
            .file_name(upload.file_name)
            .mime_str(&upload.media_type)?;
        let form = multipart::Form::new()
            .part("map", part)
            .text("name", upload.scene_name);

        let response = self
            .client
            .post(self.endpoint(SCENE_ENDPOINT))
            .header(AUTHORIZATION, self.auth_token.as_str())
            .multipart(form)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ImportError::SceneCreationFailed {
                status: status.as_u16(),
                body,
            });
        }

        match serde_json::from_str::<SceneRecord>(&body) {
            Ok(record) => Ok(UploadOutcome::Scene(record)),
            Err(err) => {
                log::warn!("scene creation reply is not a scene record ({err}): {body}");
                Ok(UploadOutcome::Unparsed(body))
            }
        }
    }

    async fn update_scene(
        &self,
        uid: &str,
        config: &SceneConfig,
    ) -> Result<CreateReply, ImportError> {
        let response = self
            .client
            .put(format!("{}{}/{uid}", self.base_url, SCENE_ENDPOINT))
            .header(AUTHORIZATION, self.auth_token.as_str())
            .json(config)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ImportError::SceneUpdateFailed(format!(
                "status {status}: {body}"
            )));
        }
        Ok(response.json().await.unwrap_or_default())
    }

    async fn create_camera(&self, spec: CameraSpec) -> Result<CreateReply, ImportError> {
        self.create_entity(CAMERA_ENDPOINT, &spec, "camera").await
    }

    async fn create_region(&self, spec: RegionSpec) -> Result<CreateReply, ImportError> {
        self.create_entity(REGION_ENDPOINT, &spec, "region").await
    }

    async fn create_tripwire(&self, spec: TripwireSpec) -> Result<CreateReply, ImportError> {
        self.create_entity(TRIPWIRE_ENDPOINT, &spec, "tripwire")
            .await
    }

    async fn create_sensor(&self, spec: SensorSpec) -> Result<CreateReply, ImportError> {
        self.create_entity(SENSOR_ENDPOINT, &spec, "sensor").await
    }

    async fn create_asset(&self, spec: AssetSpec) -> Result<CreateReply, ImportError> {
        self.create_entity(ASSET_ENDPOINT, &spec, "asset").await
    }
}
