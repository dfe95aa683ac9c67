use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;

pub async fn sleep_with_jitter(base_ms: u64, jitter_ms: u64) {
    let jitter = if jitter_ms == 0 {
        0
    } else {
        rand::rng().random_range(0..=jitter_ms)
    };
    tokio::time::sleep(Duration::from_millis(base_ms + jitter)).await;
}

/// Pause between consecutive paginated requests.
#[async_trait]
pub trait Delay: Send + Sync {
    async fn pause(&self);
}

/// Real wall-clock delay on the tokio timer.
#[derive(Debug, Clone, Copy)]
pub struct TokioDelay {
    pub base_ms: u64,
    pub jitter_ms: u64,
}

impl TokioDelay {
    pub fn new(base_ms: u64, jitter_ms: u64) -> Self {
        Self { base_ms, jitter_ms }
    }
}

#[async_trait]
impl Delay for TokioDelay {
    async fn pause(&self) {
        sleep_with_jitter(self.base_ms, self.jitter_ms).await;
    }
}
