use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Parsed scene bundle descriptor. Immutable once fetched; owned by the
/// orchestrator for the duration of one import.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SceneDescriptor {
    pub name: String,
    #[serde(default)]
    pub scale: Option<f64>,
    #[serde(default)]
    pub regulate_rate: Option<f64>,
    #[serde(default)]
    pub external_update_rate: Option<f64>,
    #[serde(default)]
    pub camera_calibration: Option<Value>,
    #[serde(default)]
    pub apriltag_size: Option<f64>,
    #[serde(default)]
    pub number_of_localizations: Option<u32>,
    #[serde(default)]
    pub global_feature: Option<Value>,
    #[serde(default)]
    pub minimum_number_of_matches: Option<u32>,
    #[serde(default)]
    pub inlier_threshold: Option<f64>,
    #[serde(default)]
    pub output_lla: Option<bool>,
    #[serde(default)]
    pub cameras: Vec<CameraEntry>,
    #[serde(default)]
    pub regions: Vec<Map<String, Value>>,
    #[serde(default)]
    pub tripwires: Vec<Map<String, Value>>,
    #[serde(default)]
    pub sensors: Vec<Map<String, Value>>,
    #[serde(default)]
    pub object_library: Vec<Map<String, Value>>,
}

/// One camera entry of the descriptor, before it is re-shaped into the
/// creation request sent to the backend.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CameraEntry {
    pub name: String,
    #[serde(default)]
    pub translation: Vec<f64>,
    #[serde(default)]
    pub rotation: Vec<f64>,
    #[serde(default)]
    pub scale: Vec<f64>,
}

/// Scene-level configuration pushed onto a freshly created scene record.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SceneConfig {
    pub scale: Option<f64>,
    pub regulate_rate: Option<f64>,
    pub external_update_rate: Option<f64>,
    pub camera_calibration: Option<Value>,
    pub apriltag_size: Option<f64>,
    pub number_of_localizations: Option<u32>,
    pub global_feature: Option<Value>,
    pub minimum_number_of_matches: Option<u32>,
    pub inlier_threshold: Option<f64>,
    pub output_lla: Option<bool>,
}

impl SceneConfig {
    pub fn from_descriptor(descriptor: &SceneDescriptor) -> Self {
        Self {
            scale: descriptor.scale,
            regulate_rate: descriptor.regulate_rate,
            external_update_rate: descriptor.external_update_rate,
            camera_calibration: descriptor.camera_calibration.clone(),
            apriltag_size: descriptor.apriltag_size,
            number_of_localizations: descriptor.number_of_localizations,
            global_feature: descriptor.global_feature.clone(),
            minimum_number_of_matches: descriptor.minimum_number_of_matches,
            inlier_threshold: descriptor.inlier_threshold,
            output_lla: descriptor.output_lla,
        }
    }
}

/// The backend-created scene. The `uid` is assigned by the backend and is
/// the sole key other entities reference.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SceneRecord {
    pub uid: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// Field order of index-addressed calibration messages.
pub const FX: usize = 0;
pub const FY: usize = 1;
pub const CX: usize = 2;
pub const CY: usize = 3;
pub const K1: usize = 0;
pub const K2: usize = 1;
pub const P1: usize = 2;
pub const P2: usize = 3;
pub const K3: usize = 4;

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CameraIntrinsics {
    pub fx: f64,
    pub fy: f64,
    pub cx: f64,
    pub cy: f64,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LensDistortion {
    pub k1: f64,
    pub k2: f64,
    pub p1: f64,
    pub p2: f64,
    pub k3: f64,
}

/// Compares a camera's stored calibration against the index-addressed layout
/// used by calibration messages. Short message arrays never match.
pub fn intrinsics_match(
    intrinsics: &CameraIntrinsics,
    distortion: &LensDistortion,
    msg_intrinsics: &[f64],
    msg_distortion: &[f64],
) -> bool {
    msg_intrinsics.get(FX) == Some(&intrinsics.fx)
        && msg_intrinsics.get(FY) == Some(&intrinsics.fy)
        && msg_intrinsics.get(CX) == Some(&intrinsics.cx)
        && msg_intrinsics.get(CY) == Some(&intrinsics.cy)
        && msg_distortion.get(K1) == Some(&distortion.k1)
        && msg_distortion.get(K2) == Some(&distortion.k2)
        && msg_distortion.get(P1) == Some(&distortion.p1)
        && msg_distortion.get(P2) == Some(&distortion.p2)
        && msg_distortion.get(K3) == Some(&distortion.k3)
}
