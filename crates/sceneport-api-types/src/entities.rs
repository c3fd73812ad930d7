use crate::scene::CameraEntry;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const EULER_TRANSFORM: &str = "euler";

/// A pending child-entity creation request that can be stamped with the uid
/// of the scene that owns it.
pub trait SceneOwned {
    fn attach_scene(&mut self, uid: &str);
}

/// Camera creation request. Descriptor camera entries are re-shaped into a
/// transform record of type `"euler"`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CameraSpec {
    pub name: String,
    pub transform_type: String,
    pub translation: Vec<f64>,
    pub rotation: Vec<f64>,
    pub scale: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scene: Option<String>,
}

impl From<&CameraEntry> for CameraSpec {
    fn from(entry: &CameraEntry) -> Self {
        Self {
            name: entry.name.clone(),
            transform_type: EULER_TRANSFORM.to_owned(),
            translation: entry.translation.clone(),
            rotation: entry.rotation.clone(),
            scale: entry.scale.clone(),
            scene: None,
        }
    }
}

impl SceneOwned for CameraSpec {
    fn attach_scene(&mut self, uid: &str) {
        self.scene = Some(uid.to_owned());
    }
}

macro_rules! passthrough_spec {
    ($name:ident) => {
        /// Passed through from the descriptor unchanged, except for the
        /// owning scene uid stamped on at provisioning time.
        #[derive(Clone, Debug, Serialize, Deserialize)]
        pub struct $name {
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub scene: Option<String>,
            #[serde(flatten)]
            pub fields: Map<String, Value>,
        }

        impl From<Map<String, Value>> for $name {
            fn from(mut fields: Map<String, Value>) -> Self {
                // Any stale owning reference carried by the bundle is dropped;
                // only the freshly created scene may be referenced.
                fields.remove("scene");
                Self {
                    scene: None,
                    fields,
                }
            }
        }

        impl SceneOwned for $name {
            fn attach_scene(&mut self, uid: &str) {
                self.scene = Some(uid.to_owned());
            }
        }
    };
}

passthrough_spec!(RegionSpec);
passthrough_spec!(TripwireSpec);
passthrough_spec!(SensorSpec);

/// Object-library asset creation request. Assets are scene-independent, so
/// the spec carries no owning reference at all.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AssetSpec {
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl From<Map<String, Value>> for AssetSpec {
    fn from(mut fields: Map<String, Value>) -> Self {
        fields.remove("scene");
        Self { fields }
    }
}

impl SceneOwned for AssetSpec {
    // Scene-independent; an owning reference is never attached.
    fn attach_scene(&mut self, _uid: &str) {}
}

/// Reply of the backend entity create/update operations. The `errors` field
/// is consulted for logging; everything else is kept opaque.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CreateReply {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
