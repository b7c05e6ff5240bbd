//! Repeating browser timer bound to a cancellation token.

use super::cancel::CancelToken;

/// Call `on_tick` every `period_ms` until `token` fires.
///
/// The token is checked after every sleep, so a cancelled ticker never runs
/// `on_tick` again. On the server this is a no-op: effects and timers only
/// exist after hydration.
pub fn spawn_repeating(period_ms: u64, token: CancelToken, on_tick: impl FnMut() + 'static) {
    #[cfg(feature = "hydrate")]
    {
        let mut on_tick = on_tick;
        log::debug!("repeating timer started ({period_ms} ms)");
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_millis(period_ms)).await;
                if token.is_cancelled() {
                    break;
                }
                on_tick();
            }
            log::debug!("repeating timer stopped");
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (period_ms, token, on_tick);
    }
}
