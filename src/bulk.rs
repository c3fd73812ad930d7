use futures::future::join_all;
use sceneport_api_types::entities::{CreateReply, SceneOwned};
use sceneport_api_types::error::ImportError;
use std::future::Future;

/// Settled outcome of one bulk provisioning pass. A failing item never fails
/// the pass itself; it is recorded here so the caller can decide on policy.
#[derive(Debug)]
pub struct BulkReport {
    pub label: &'static str,
    pub attempted: usize,
    pub failures: Vec<ImportError>,
}

impl BulkReport {
    pub fn created(&self) -> usize {
        self.attempted - self.failures.len()
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Concurrently submits every item of one entity category against the
/// supplied creation function. The owning scene uid, when given, is stamped
/// onto each item first. All creation calls are issued at once and settle
/// independently; a rejected item does not cancel its siblings.
pub async fn bulk_create<T, F, Fut>(
    items: Vec<T>,
    scene: Option<&str>,
    create: F,
    label: &'static str,
) -> BulkReport
where
    T: SceneOwned,
    F: Fn(T) -> Fut,
    Fut: Future<Output = Result<CreateReply, ImportError>>,
{
    let attempted = items.len();
    if attempted == 0 {
        return BulkReport {
            label,
            attempted,
            failures: Vec::new(),
        };
    }

    let calls = items.into_iter().map(|mut item| {
        if let Some(uid) = scene {
            item.attach_scene(uid);
        }
        create(item)
    });

    let mut failures = Vec::new();
    for outcome in join_all(calls).await {
        match outcome {
            Ok(reply) => {
                if let Some(errors) = &reply.errors {
                    log::warn!("{label} creation reported errors: {errors}");
                }
            }
            Err(err) => {
                log::error!("error creating {label}: {err}");
                failures.push(match err {
                    failure @ ImportError::ItemCreationFailed { .. } => failure,
                    other => ImportError::ItemCreationFailed {
                        label: label.to_owned(),
                        detail: other.to_string(),
                    },
                });
            }
        }
    }

    BulkReport {
        label,
        attempted,
        failures,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sceneport_api_types::entities::SensorSpec;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    fn sensors(count: usize) -> Vec<SensorSpec> {
        (0..count)
            .map(|i| {
                let serde_json::Value::Object(fields) = json!({ "name": format!("sensor{i}") })
                else {
                    unreachable!()
                };
                SensorSpec::from(fields)
            })
            .collect()
    }

    #[tokio::test]
    async fn invokes_creation_exactly_once_per_item() {
        let calls = AtomicUsize::new(0);
        let report = bulk_create(
            sensors(7),
            Some("scene-1"),
            |_spec| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Ok(CreateReply::default()) }
            },
            "sensor",
        )
        .await;

        assert_eq!(calls.load(Ordering::SeqCst), 7);
        assert_eq!(report.attempted, 7);
        assert_eq!(report.created(), 7);
        assert!(report.is_clean());
    }

    #[tokio::test]
    async fn empty_sequence_performs_zero_calls() {
        let calls = AtomicUsize::new(0);
        let report = bulk_create(
            Vec::<SensorSpec>::new(),
            Some("scene-1"),
            |_spec| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Ok(CreateReply::default()) }
            },
            "sensor",
        )
        .await;

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(report.attempted, 0);
        assert!(report.is_clean());
    }

    #[tokio::test]
    async fn one_failing_item_does_not_cancel_siblings() {
        let succeeded = AtomicUsize::new(0);
        let report = bulk_create(
            sensors(5),
            Some("scene-1"),
            |spec| {
                let reject = spec.fields["name"] == json!("sensor2");
                let succeeded = &succeeded;
                async move {
                    if reject {
                        Err(ImportError::ItemCreationFailed {
                            label: "sensor".to_owned(),
                            detail: "status 400".to_owned(),
                        })
                    } else {
                        succeeded.fetch_add(1, Ordering::SeqCst);
                        Ok(CreateReply::default())
                    }
                }
            },
            "sensor",
        )
        .await;

        assert_eq!(succeeded.load(Ordering::SeqCst), 4);
        assert_eq!(report.attempted, 5);
        assert_eq!(report.created(), 4);
        assert_eq!(report.failures.len(), 1);
    }

    #[tokio::test]
    async fn stamps_owning_scene_when_supplied() {
        let seen = Mutex::new(Vec::new());
        bulk_create(
            sensors(3),
            Some("scene-42"),
            |spec| {
                seen.lock().unwrap().push(spec.scene.clone());
                async { Ok(CreateReply::default()) }
            },
            "sensor",
        )
        .await;

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 3);
        assert!(seen.iter().all(|scene| scene.as_deref() == Some("scene-42")));
    }

    #[tokio::test]
    async fn leaves_items_unstamped_without_an_owner() {
        let seen = Mutex::new(Vec::new());
        bulk_create(
            sensors(2),
            None,
            |spec| {
                seen.lock().unwrap().push(spec.scene.clone());
                async { Ok(CreateReply::default()) }
            },
            "sensor",
        )
        .await;

        let seen = seen.lock().unwrap();
        assert!(seen.iter().all(Option::is_none));
    }

    #[tokio::test]
    async fn transport_failures_are_reported_as_item_failures() {
        let report = bulk_create(
            sensors(1),
            None,
            |_spec| async {
                Err(ImportError::SceneUpdateFailed("misrouted".to_owned()))
            },
            "sensor",
        )
        .await;

        assert_eq!(report.failures.len(), 1);
        assert!(matches!(
            report.failures[0],
            ImportError::ItemCreationFailed { .. }
        ));
    }
}
