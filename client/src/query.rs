use std::{fmt::Display, future::Future, time::Duration};

use anyhow::{anyhow, Result};
use log::warn;
use tokio::time::timeout;

/// Await a query, bounded by `limit`. A timeout is reported as an error.
pub(crate) async fn query_with_timeout<T, F, D>(what: D, limit: Duration, query: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
    D: Display,
{
    match timeout(limit, query).await {
        Ok(res) => res,
        Err(_) => Err(anyhow!(
            "Query for {} timed out after {}ms",
            what,
            limit.as_millis()
        )),
    }
}

/// Await a read-only query, bounded by `limit`.
/// Errors and timeouts resolve to `T::default()` so the caller degrades to
/// "no access" instead of failing.
pub(crate) async fn query_or_default<T, F, D>(what: D, limit: Duration, query: F) -> T
where
    T: Default,
    F: Future<Output = Result<T>>,
    D: Display,
{
    match query_with_timeout(&what, limit, query).await {
        Ok(value) => value,
        Err(e) => {
            if log::log_enabled!(log::Level::Warn) {
                warn!("Error while querying {}, using empty value: {:#}", what, e);
            }
            T::default()
        }
    }
}
