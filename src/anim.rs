//! Frame Animation Driver
//!
//! Time-based interpolation over `requestAnimationFrame`, sampled from the
//! monotonic `performance.now()` clock. A handle owns a generation counter;
//! starting a new run (or cancelling) invalidates any frame still scheduled
//! from the previous one, so at most one run per handle is ever live.

use leptos::request_animation_frame;
use std::cell::Cell;
use std::rc::Rc;

/// Milliseconds from the monotonic page clock.
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

/// Smoothstep easing over linear progress in [0, 1].
pub fn ease(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

/// Handle for a restartable frame animation.
///
/// `start` drives the callback with linear progress in [0, 1]. The final
/// frame always reports exactly 1.0, so the end state does not depend on
/// frame timing.
#[derive(Clone, Default)]
pub struct AnimationHandle {
    generation: Rc<Cell<u64>>,
}

impl AnimationHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel any in-flight run and start a new one.
    pub fn start(&self, duration_ms: f64, on_frame: impl Fn(f64) + 'static) {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        let started = now_ms();
        tick(self.clone(), generation, started, duration_ms, Rc::new(on_frame));
    }

    /// Stop the current run without starting another.
    pub fn cancel(&self) {
        self.generation.set(self.generation.get() + 1);
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.get() == generation
    }
}

fn tick(
    handle: AnimationHandle,
    generation: u64,
    started: f64,
    duration_ms: f64,
    on_frame: Rc<dyn Fn(f64)>,
) {
    request_animation_frame(move || {
        if !handle.is_current(generation) {
            return;
        }
        let progress = if duration_ms <= 0.0 {
            1.0
        } else {
            ((now_ms() - started) / duration_ms).min(1.0)
        };
        on_frame(progress);
        if progress < 1.0 {
            tick(handle, generation, started, duration_ms, on_frame);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_hits_endpoints() {
        assert_eq!(ease(0.0), 0.0);
        assert_eq!(ease(1.0), 1.0);
    }

    #[test]
    fn ease_is_monotone() {
        let mut last = 0.0;
        for i in 0..=100 {
            let v = ease(i as f64 / 100.0);
            assert!(v >= last);
            last = v;
        }
    }

    #[test]
    fn cancel_invalidates_the_current_run() {
        let handle = AnimationHandle::new();
        assert!(handle.is_current(0));
        handle.cancel();
        assert!(!handle.is_current(0));
        assert!(handle.is_current(1));
    }
}
