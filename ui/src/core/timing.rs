//! Monotonic timing helpers for animations.

#[cfg(not(target_arch = "wasm32"))]
use once_cell::sync::Lazy;

/// Milliseconds on a monotonic clock with an arbitrary origin.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct InstantStamp(f64);

impl InstantStamp {
    pub fn zero() -> Self {
        Self(0.0)
    }

    pub fn from_ms(ms: f64) -> Self {
        Self(ms)
    }

    pub fn as_ms(self) -> f64 {
        self.0
    }

    /// Elapsed milliseconds since `earlier`, clamped at zero.
    pub fn since(self, earlier: InstantStamp) -> f64 {
        (self.0 - earlier.0).max(0.0)
    }
}

#[cfg(not(target_arch = "wasm32"))]
static EPOCH: Lazy<std::time::Instant> = Lazy::new(std::time::Instant::now);

#[cfg(not(target_arch = "wasm32"))]
pub fn now() -> InstantStamp {
    InstantStamp(EPOCH.elapsed().as_secs_f64() * 1000.0)
}

#[cfg(target_arch = "wasm32")]
pub fn now() -> InstantStamp {
    let ms = web_sys::window()
        .and_then(|window| window.performance())
        .map(|perf| perf.now())
        .unwrap_or(0.0);
    InstantStamp(ms)
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms.min(u32::MAX as u64) as u32).await;
}
