//! Async delay that works in the browser and degrades to immediate on the server.

use std::time::Duration;

#[allow(clippy::unused_async)]
pub async fn sleep(duration: Duration) {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::future::sleep(duration).await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = duration;
    }
}
