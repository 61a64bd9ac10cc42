//! Activation lifecycle for the pointer trail.
//!
//! A trail holds two resources from its host: a pointer-move listener and an
//! interval timer. [`TrailEffect`] acquires both on [`activate`](TrailEffect::activate)
//! and gives both back on [`deactivate`](TrailEffect::deactivate). If the timer
//! cannot be started, the listener acquired just before it is removed before
//! the error is returned. Deactivating twice is a no-op.
//!
//! While inactive, pointer moves and ticks are dropped, so a trail that has
//! been torn down cannot keep simulating in the background.

use crate::config::TrailConfig;
use crate::error::{ConfigError, HostError};
use crate::field::ParticleField;
use crate::particle::{ParticleId, ParticleView};
use rand::rngs::SmallRng;
use rand::Rng;
use std::time::Duration;

/// Handle for a registered pointer-move listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerHandle(pub u64);

/// Handle for a running interval timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerHandle(pub u64);

/// The environment that delivers pointer events and timer ticks.
///
/// Handles returned by a host are released exactly once through the matching
/// remove/clear call.
pub trait Host {
    /// Start forwarding pointer-move events to the trail.
    fn add_pointer_listener(&mut self) -> Result<ListenerHandle, HostError>;

    /// Stop forwarding pointer-move events for `handle`.
    fn remove_pointer_listener(&mut self, handle: ListenerHandle);

    /// Start a timer firing every `period`.
    fn set_interval(&mut self, period: Duration) -> Result<TimerHandle, HostError>;

    /// Cancel the timer behind `handle`.
    fn clear_interval(&mut self, handle: TimerHandle);
}

#[derive(Debug)]
struct Resources {
    listener: ListenerHandle,
    timer: TimerHandle,
}

/// A particle field plus the host resources that drive it.
#[derive(Debug)]
pub struct TrailEffect<R = SmallRng> {
    field: ParticleField<R>,
    tick_interval: Duration,
    resources: Option<Resources>,
}

impl TrailEffect<SmallRng> {
    /// Build an inactive trail from a config.
    pub fn new(config: TrailConfig) -> Result<Self, ConfigError> {
        let tick_interval = config.tick_interval();
        Ok(Self::from_field(ParticleField::new(config)?, tick_interval))
    }
}

impl<R: Rng> TrailEffect<R> {
    /// Wrap an existing field.
    pub fn from_field(field: ParticleField<R>, tick_interval: Duration) -> Self {
        Self {
            field,
            tick_interval,
            resources: None,
        }
    }

    /// Acquire the pointer listener and tick timer from `host`.
    ///
    /// Does nothing if already active.
    pub fn activate(&mut self, host: &mut impl Host) -> Result<(), HostError> {
        if self.resources.is_some() {
            return Ok(());
        }

        let listener = host.add_pointer_listener()?;
        let timer = match host.set_interval(self.tick_interval) {
            Ok(timer) => timer,
            Err(e) => {
                host.remove_pointer_listener(listener);
                log::warn!("Trail activation failed, listener released: {}", e);
                return Err(e);
            }
        };

        self.resources = Some(Resources { listener, timer });
        log::info!("Trail activated (tick every {:?})", self.tick_interval);
        Ok(())
    }

    /// Release the timer and listener and drop all live particles.
    ///
    /// Safe to call any number of times.
    pub fn deactivate(&mut self, host: &mut impl Host) {
        if let Some(Resources { listener, timer }) = self.resources.take() {
            host.clear_interval(timer);
            host.remove_pointer_listener(listener);
            self.field.clear();
            log::info!("Trail deactivated");
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.resources.is_some()
    }

    /// Forward a pointer move to the field. Ignored while inactive.
    pub fn on_pointer_move(&mut self, x: f32, y: f32) -> Option<ParticleId> {
        if self.is_active() {
            self.field.on_pointer_move(x, y)
        } else {
            None
        }
    }

    /// Advance the field one tick. Ignored while inactive.
    pub fn tick(&mut self) {
        if self.is_active() {
            self.field.tick();
        }
    }

    /// Render records for the live set.
    pub fn views(&self) -> impl ExactSizeIterator<Item = ParticleView> + '_ {
        self.field.views()
    }

    pub fn field(&self) -> &ParticleField<R> {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut ParticleField<R> {
        &mut self.field
    }

    #[inline]
    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingHost {
        listeners: Vec<ListenerHandle>,
        timers: Vec<TimerHandle>,
        next: u64,
        refuse_timer: bool,
        calls: usize,
    }

    impl Host for CountingHost {
        fn add_pointer_listener(&mut self) -> Result<ListenerHandle, HostError> {
            self.calls += 1;
            self.next += 1;
            let h = ListenerHandle(self.next);
            self.listeners.push(h);
            Ok(h)
        }

        fn remove_pointer_listener(&mut self, handle: ListenerHandle) {
            self.calls += 1;
            let before = self.listeners.len();
            self.listeners.retain(|h| *h != handle);
            assert_eq!(self.listeners.len() + 1, before, "listener removed twice");
        }

        fn set_interval(&mut self, _period: Duration) -> Result<TimerHandle, HostError> {
            self.calls += 1;
            if self.refuse_timer {
                return Err(HostError::Timer("refused".into()));
            }
            self.next += 1;
            let h = TimerHandle(self.next);
            self.timers.push(h);
            Ok(h)
        }

        fn clear_interval(&mut self, handle: TimerHandle) {
            self.calls += 1;
            let before = self.timers.len();
            self.timers.retain(|h| *h != handle);
            assert_eq!(self.timers.len() + 1, before, "timer cleared twice");
        }
    }

    fn effect() -> TrailEffect {
        let config = TrailConfig::default().with_spawn_probability(1.0);
        let tick = config.tick_interval();
        TrailEffect::from_field(ParticleField::seeded(config, 1).unwrap(), tick)
    }

    #[test]
    fn test_activate_acquires_both() {
        let mut host = CountingHost::default();
        let mut trail = effect();
        trail.activate(&mut host).unwrap();
        assert!(trail.is_active());
        assert_eq!(host.listeners.len(), 1);
        assert_eq!(host.timers.len(), 1);

        // Second activation is a no-op.
        trail.activate(&mut host).unwrap();
        assert_eq!(host.listeners.len(), 1);
        assert_eq!(host.timers.len(), 1);
    }

    #[test]
    fn test_timer_failure_releases_listener() {
        let mut host = CountingHost {
            refuse_timer: true,
            ..Default::default()
        };
        let mut trail = effect();
        assert!(matches!(trail.activate(&mut host), Err(HostError::Timer(_))));
        assert!(!trail.is_active());
        assert!(host.listeners.is_empty());
        assert!(host.timers.is_empty());
    }

    #[test]
    fn test_deactivate_is_idempotent() {
        let mut host = CountingHost::default();
        let mut trail = effect();
        trail.activate(&mut host).unwrap();
        trail.deactivate(&mut host);
        let calls = host.calls;
        trail.deactivate(&mut host);
        assert_eq!(host.calls, calls);
        assert!(host.listeners.is_empty());
        assert!(host.timers.is_empty());
    }

    #[test]
    fn test_inactive_trail_ignores_events() {
        let mut host = CountingHost::default();
        let mut trail = effect();
        assert_eq!(trail.on_pointer_move(1.0, 1.0), None);
        assert!(trail.field().is_empty());

        trail.activate(&mut host).unwrap();
        assert!(trail.on_pointer_move(1.0, 1.0).is_some());
        trail.deactivate(&mut host);
        assert!(trail.field().is_empty());

        trail.field_mut().spawn_at(0.0, 0.0);
        let life = trail.field().snapshot()[0].life;
        trail.tick();
        assert_eq!(trail.field().snapshot()[0].life, life);
    }

    #[test]
    fn test_reactivation_after_deactivate() {
        let mut host = CountingHost::default();
        let mut trail = effect();
        trail.activate(&mut host).unwrap();
        trail.deactivate(&mut host);
        trail.activate(&mut host).unwrap();
        assert!(trail.is_active());
        assert_eq!(host.listeners.len(), 1);
    }
}
