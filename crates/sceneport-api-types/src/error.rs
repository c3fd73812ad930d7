use thiserror::Error;

/// Failures that can occur while importing a scene bundle.
///
/// The first five variants abort the import before any backend mutation that
/// depends on them. `SceneUpdateFailed` is logged but does not halt entity
/// provisioning. `ItemCreationFailed` is always recovered locally and only
/// shows up in per-category bulk reports.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("failed to retrieve scene descriptor: {0}")]
    DescriptorUnavailable(String),
    #[error("failed to list bundle resources: {0}")]
    ResourceListUnavailable(String),
    #[error("bundle contains no binary resource file")]
    ResourceMissing,
    #[error("bundle contains {0} binary resource files, expected exactly one")]
    ResourceAmbiguous(usize),
    #[error("failed to retrieve binary resource: {0}")]
    ResourceFetchFailed(String),
    #[error("scene creation rejected with status {status}: {body}")]
    SceneCreationFailed { status: u16, body: String },
    #[error("scene update rejected: {0}")]
    SceneUpdateFailed(String),
    #[error("failed to create {label}: {detail}")]
    ItemCreationFailed { label: String, detail: String },
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}
