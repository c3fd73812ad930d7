use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("timeout exceeded after {0:?}")]
pub struct WaitTimeout(pub Duration);

/// Polls `condition` every `check_interval` until it holds, or fails with
/// [`WaitTimeout`] once `max_wait` has elapsed.
pub async fn wait_until<F>(
    mut condition: F,
    check_interval: Duration,
    max_wait: Duration,
) -> Result<(), WaitTimeout>
where
    F: FnMut() -> bool,
{
    let poll = async {
        let mut ticks = tokio::time::interval(check_interval);
        loop {
            ticks.tick().await;
            if condition() {
                break;
            }
        }
    };
    tokio::time::timeout(max_wait, poll)
        .await
        .map_err(|_| WaitTimeout(max_wait))
}
