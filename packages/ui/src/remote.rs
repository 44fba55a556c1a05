//! # Remote fetch with timeout fallback
//!
//! Catalog reads are advisory: when the backend is slow or unreachable the
//! views switch to the built-in example datasets instead of showing an
//! error page. [`with_timeout`] races a server call against a deadline and
//! returns `None` on timeout or failure — the in-flight request is not
//! aborted, its result is simply ignored. Nothing is retried.
//!
//! [`fetch_or`] is the convenience wrapper the views use: it pairs the
//! result with a [`DataSource`] tag so the page can show where its content
//! came from.

use std::future::Future;
use std::time::Duration;

/// Default deadline for catalog reads, in seconds.
pub const DEFAULT_FETCH_TIMEOUT_SECS: u32 = 8;

/// Where the content of a view came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataSource {
    /// Fetched from the backend.
    Live,
    /// Built-in example data, shown because the fetch timed out or failed.
    Sample,
}

/// Await `fut` for at most `secs` seconds. `None` on timeout or error;
/// failures are logged, never surfaced.
pub async fn with_timeout<T, E>(
    fut: impl Future<Output = Result<T, E>>,
    secs: u32,
) -> Option<T>
where
    E: std::fmt::Display,
{
    #[cfg(not(target_arch = "wasm32"))]
    {
        match tokio::time::timeout(Duration::from_secs(secs as u64), fut).await {
            Ok(Ok(value)) => Some(value),
            Ok(Err(e)) => {
                tracing::warn!("Remote call failed: {}", e);
                None
            }
            Err(_) => {
                tracing::warn!("Remote call exceeded {}s, using fallback", secs);
                None
            }
        }
    }
    #[cfg(target_arch = "wasm32")]
    {
        use futures::future::{select, Either};

        let timeout = gloo_timers::future::sleep(Duration::from_secs(secs as u64));
        futures::pin_mut!(fut);
        futures::pin_mut!(timeout);
        match select(fut, timeout).await {
            Either::Left((Ok(value), _)) => Some(value),
            Either::Left((Err(e), _)) => {
                tracing::warn!("Remote call failed: {}", e);
                None
            }
            Either::Right(_) => {
                tracing::warn!("Remote call exceeded {}s, using fallback", secs);
                None
            }
        }
    }
}

/// Fetch with fallback: the live value, or `fallback()` tagged as sample
/// data.
pub async fn fetch_or<T, E>(
    fut: impl Future<Output = Result<T, E>>,
    fallback: impl FnOnce() -> T,
) -> (T, DataSource)
where
    E: std::fmt::Display,
{
    match with_timeout(fut, DEFAULT_FETCH_TIMEOUT_SECS).await {
        Some(value) => (value, DataSource::Live),
        None => (fallback(), DataSource::Sample),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fast_future_yields_live_value() {
        let out = with_timeout(async { Ok::<_, String>(7) }, 5).await;
        assert_eq!(out, Some(7));
    }

    #[tokio::test]
    async fn error_yields_none() {
        let out = with_timeout(async { Err::<i32, _>("boom".to_string()) }, 5).await;
        assert_eq!(out, None);
    }

    #[tokio::test]
    async fn slow_future_falls_back() {
        let fut = async {
            tokio::time::sleep(Duration::from_millis(200)).await;
            Ok::<_, String>(7)
        };
        assert_eq!(with_timeout(fut, 0).await, None);
    }

    #[tokio::test]
    async fn fetch_or_tags_the_source() {
        let (value, source) = fetch_or(async { Ok::<_, String>(vec![1, 2]) }, Vec::new).await;
        assert_eq!(value, vec![1, 2]);
        assert_eq!(source, DataSource::Live);

        let (value, source) =
            fetch_or(async { Err::<Vec<i32>, _>("down".to_string()) }, || vec![9]).await;
        assert_eq!(value, vec![9]);
        assert_eq!(source, DataSource::Sample);
    }
}
