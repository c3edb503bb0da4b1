use std::future::Future;

use crate::errors::Error;

/// Runs a secondary step whose failure must not fail the overall operation.
///
/// The failure is routed to the log channel and swallowed; callers always
/// keep the result of their primary step. Returns the step's value when it
/// succeeds, so callers that care can still observe it.
pub async fn non_critical<T>(
    step: &str,
    fut: impl Future<Output = Result<T, Error>>,
) -> Option<T> {
    match fut.await {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!("Non-critical step '{}' failed: {}", step, err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn failure_is_absorbed() {
        let out: Option<()> =
            non_critical("failing step", async { Err(Error::Forbidden) }).await;
        assert!(out.is_none());
    }

    #[tokio::test]
    async fn success_passes_the_value_through() {
        let out = non_critical("ok step", async { Ok(7u32) }).await;
        assert_eq!(out, Some(7));
    }
}
