//! Periodic callbacks with an owning handle.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickControl {
    Continue,
    Stop,
}

/// Owns a running ticker. Dropping it stops the ticker before its next tick.
#[derive(Debug)]
pub struct TickerHandle {
    cancelled: Rc<Cell<bool>>,
}

impl TickerHandle {
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Calls `on_tick` every `interval` until it returns [`TickControl::Stop`]
/// or the returned handle is cancelled or dropped.
pub fn start_ticker<F>(interval: Duration, mut on_tick: F) -> TickerHandle
where
    F: FnMut() -> TickControl + 'static,
{
    let cancelled = Rc::new(Cell::new(false));
    let flag = cancelled.clone();
    let millis = u32::try_from(interval.as_millis()).unwrap_or(u32::MAX).max(1);

    spawn_local(async move {
        let mut ticks = 0u32;
        loop {
            TimeoutFuture::new(millis).await;
            if flag.get() {
                log::trace!("Ticker cancelled after {} ticks", ticks);
                break;
            }
            ticks += 1;
            if on_tick() == TickControl::Stop {
                log::trace!("Ticker finished after {} ticks", ticks);
                break;
            }
        }
    });

    TickerHandle { cancelled }
}
