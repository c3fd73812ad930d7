//! One-time initialization of the vision runtime. The outcome is carried by
//! an explicit handle passed to dependents instead of a module-level flag.

use std::future::Future;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VisionState {
    Uninitialized,
    Loading,
    Ready,
    Failed,
}

/// Handle to the vision runtime. Dependents query `state()` on the handle
/// they were given; there is no ambient global to consult.
#[derive(Clone, Debug)]
pub struct VisionRuntime {
    state: VisionState,
    build_info: Option<String>,
}

impl VisionRuntime {
    pub fn uninitialized() -> Self {
        Self {
            state: VisionState::Uninitialized,
            build_info: None,
        }
    }

    pub fn state(&self) -> VisionState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == VisionState::Ready
    }

    /// Build information reported by the loaded runtime, once ready.
    pub fn build_info(&self) -> Option<&str> {
        self.build_info.as_deref()
    }

    /// Runs the loader once and records the outcome. The handle is `Loading`
    /// only for the duration of this call; callers observe `Ready` or
    /// `Failed`.
    pub async fn initialize<F, Fut>(loader: F) -> Self
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = anyhow::Result<String>>,
    {
        let mut runtime = Self {
            state: VisionState::Loading,
            build_info: None,
        };
        match loader().await {
            Ok(build_info) => {
                log::info!("vision runtime loaded: {build_info}");
                runtime.state = VisionState::Ready;
                runtime.build_info = Some(build_info);
            }
            Err(err) => {
                log::error!("vision runtime failed to load: {err}");
                runtime.state = VisionState::Failed;
            }
        }
        runtime
    }
}
