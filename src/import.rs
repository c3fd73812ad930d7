use crate::bulk::{bulk_create, BulkReport};
use crate::bundle::BundleSource;
use sceneport_api_types::client::{SceneBackend, SceneUpload, UploadOutcome};
use sceneport_api_types::entities::{AssetSpec, CameraSpec, RegionSpec, SensorSpec, TripwireSpec};
use sceneport_api_types::error::ImportError;
use sceneport_api_types::scene::SceneConfig;
use std::fmt;

/// Stages of one bundle import, in execution order. A fatal error moves the
/// import to its failed state from whichever stage raised it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ImportStage {
    FetchingDescriptor,
    FetchingResource,
    Uploading,
    ConfiguringScene,
    ProvisioningEntities,
    Done,
}

impl fmt::Display for ImportStage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            ImportStage::FetchingDescriptor => "fetching descriptor",
            ImportStage::FetchingResource => "fetching resource",
            ImportStage::Uploading => "uploading",
            ImportStage::ConfiguringScene => "configuring scene",
            ImportStage::ProvisioningEntities => "provisioning entities",
            ImportStage::Done => "done",
        };
        f.write_str(name)
    }
}

/// Outcome of a completed import. Per-category reports carry the settled
/// item outcomes; `config_error` records the non-fatal configuration
/// rejection, if any.
#[derive(Debug)]
pub struct ImportReport {
    pub stage: ImportStage,
    pub scene_uid: String,
    pub config_error: Option<ImportError>,
    pub bulk: Vec<BulkReport>,
}

fn enter(bundle: &str, stage: ImportStage) {
    log::info!("import {bundle}: {stage}");
}

/// Runs the whole import workflow for one named bundle.
///
/// The six stages are strictly sequential; items within one entity category
/// are created concurrently and settle independently. Not idempotent: two
/// concurrent imports of the same bundle create duplicate scene records.
pub async fn import_bundle<S, B>(
    source: &S,
    backend: &B,
    bundle: &str,
) -> Result<ImportReport, ImportError>
where
    S: BundleSource,
    B: SceneBackend,
{
    enter(bundle, ImportStage::FetchingDescriptor);
    let descriptor = source.fetch_descriptor(bundle).await?;

    enter(bundle, ImportStage::FetchingResource);
    let files = source.list_resources(bundle).await?;
    let file = match files.as_slice() {
        [] => return Err(ImportError::ResourceMissing),
        [file] => file.clone(),
        _ => return Err(ImportError::ResourceAmbiguous(files.len())),
    };
    let resource = source.fetch_resource(bundle, &file).await?;
    log::info!("resource file found: {file} ({})", resource.media_type);

    enter(bundle, ImportStage::Uploading);
    let upload = SceneUpload {
        file_name: resource.file_name(&descriptor.name),
        media_type: resource.media_type.clone(),
        bytes: resource.bytes,
        scene_name: descriptor.name.clone(),
    };
    let record = match backend.create_scene(upload).await? {
        UploadOutcome::Scene(record) => record,
        UploadOutcome::Unparsed(body) => {
            log::error!("scene creation failed: no usable scene record in reply");
            return Err(ImportError::SceneCreationFailed { status: 200, body });
        }
    };
    let uid = record.uid;
    log::info!("scene created: {uid}");

    enter(bundle, ImportStage::ConfiguringScene);
    // A rejected configuration update is logged but does not halt
    // provisioning.
    let config = SceneConfig::from_descriptor(&descriptor);
    let config_error = match backend.update_scene(&uid, &config).await {
        Ok(reply) => {
            if let Some(errors) = &reply.errors {
                log::warn!("scene update reported errors: {errors}");
            }
            None
        }
        Err(err) => {
            log::error!("scene update failed: {err}");
            Some(err)
        }
    };

    enter(bundle, ImportStage::ProvisioningEntities);
    let cameras: Vec<CameraSpec> = descriptor.cameras.iter().map(CameraSpec::from).collect();
    let regions: Vec<RegionSpec> = descriptor.regions.into_iter().map(RegionSpec::from).collect();
    let tripwires: Vec<TripwireSpec> = descriptor
        .tripwires
        .into_iter()
        .map(TripwireSpec::from)
        .collect();
    let sensors: Vec<SensorSpec> = descriptor.sensors.into_iter().map(SensorSpec::from).collect();
    let assets: Vec<AssetSpec> = descriptor
        .object_library
        .into_iter()
        .map(AssetSpec::from)
        .collect();

    let bulk = vec![
        bulk_create(cameras, Some(&uid), |c| backend.create_camera(c), "camera").await,
        bulk_create(regions, Some(&uid), |r| backend.create_region(r), "region").await,
        bulk_create(
            tripwires,
            Some(&uid),
            |t| backend.create_tripwire(t),
            "tripwire",
        )
        .await,
        bulk_create(sensors, Some(&uid), |s| backend.create_sensor(s), "sensor").await,
        // Object-library assets are scene-independent and never receive an
        // owning reference.
        bulk_create(assets, None, |a| backend.create_asset(a), "asset").await,
    ];

    enter(bundle, ImportStage::Done);
    Ok(ImportReport {
        stage: ImportStage::Done,
        scene_uid: uid,
        config_error,
        bulk,
    })
}
