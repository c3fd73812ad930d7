use std::time::Duration;
use thiserror::Error;
use tokio::net::TcpStream;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("connection to {0} failed: {1}")]
    Unreachable(String, #[source] std::io::Error),
    #[error("connection to {0} timed out")]
    Timeout(String),
}

/// Checks that a service endpoint accepts connections. The connection is
/// closed again immediately; only reachability is reported.
pub async fn check_endpoint(addr: &str, max_wait: Duration) -> Result<(), ProbeError> {
    log::debug!("attempting to connect to {addr}");
    match tokio::time::timeout(max_wait, TcpStream::connect(addr)).await {
        Ok(Ok(_stream)) => {
            log::debug!("successfully connected to {addr}");
            Ok(())
        }
        Ok(Err(err)) => Err(ProbeError::Unreachable(addr.to_owned(), err)),
        Err(_) => Err(ProbeError::Timeout(addr.to_owned())),
    }
}
