//! Simulation builder and window host.
//!
//! [`Simulation`] configures a pointer trail and runs it in a window. The
//! window side implements [`Host`] through [`WindowHost`]: the pointer
//! listener is a flag that gates cursor forwarding, and the interval timer is
//! a [`TickClock`] whose deadlines become `ControlFlow::WaitUntil`.

use crate::config::TrailConfig;
use crate::effect::{Host, ListenerHandle, TimerHandle, TrailEffect};
use crate::effects::CursorFollower;
use crate::error::{HostError, SimulationError};
use crate::field::ParticleField;
use crate::gpu::{GpuState, ParticleInstance};
use crate::input::Input;
use crate::time::TickClock;
use crate::visuals::{hex_to_rgb, GOLD};
use glam::Vec3;
use std::sync::Arc;
use std::time::{Duration, Instant};
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

/// [`Host`] backed by a winit event loop.
///
/// Supports one pointer listener and one timer at a time.
#[derive(Debug, Default)]
pub struct WindowHost {
    listener: Option<ListenerHandle>,
    timer: Option<(TimerHandle, TickClock)>,
    next_handle: u64,
}

impl WindowHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether pointer events should be forwarded.
    pub fn is_listening(&self) -> bool {
        self.listener.is_some()
    }

    pub fn has_timer(&self) -> bool {
        self.timer.is_some()
    }

    /// Ticks owed at `now`; zero without a timer.
    pub fn ticks_due(&mut self, now: Instant) -> u32 {
        self.timer
            .as_mut()
            .map(|(_, clock)| clock.ticks_due(now))
            .unwrap_or(0)
    }

    /// When the event loop should wake next, if a timer is running.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.as_ref().map(|(_, clock)| clock.next_deadline())
    }

    fn next_handle(&mut self) -> u64 {
        self.next_handle += 1;
        self.next_handle
    }
}

impl Host for WindowHost {
    fn add_pointer_listener(&mut self) -> Result<ListenerHandle, HostError> {
        if self.listener.is_some() {
            return Err(HostError::Listener("window already has a pointer listener".into()));
        }
        let handle = ListenerHandle(self.next_handle());
        self.listener = Some(handle);
        Ok(handle)
    }

    fn remove_pointer_listener(&mut self, handle: ListenerHandle) {
        if self.listener == Some(handle) {
            self.listener = None;
        }
    }

    fn set_interval(&mut self, period: Duration) -> Result<TimerHandle, HostError> {
        if self.timer.is_some() {
            return Err(HostError::Timer("window already has a tick timer".into()));
        }
        if period.is_zero() {
            return Err(HostError::Timer("period must be non-zero".into()));
        }
        let handle = TimerHandle(self.next_handle());
        self.timer = Some((handle, TickClock::new(period)));
        Ok(handle)
    }

    fn clear_interval(&mut self, handle: TimerHandle) {
        if matches!(self.timer, Some((h, _)) if h == handle) {
            self.timer = None;
        }
    }
}

/// A pointer trail simulation builder.
///
/// Use method chaining to configure, then call `.run()` to start.
///
/// ```ignore
/// Simulation::new()
///     .with_config(TrailConfig::default().with_max_particles(40))
///     .with_title("Glint")
///     .run()?;
/// ```
pub struct Simulation {
    config: TrailConfig,
    seed: Option<u64>,
    title: String,
    window_size: (u32, u32),
}

impl Simulation {
    /// Create a new simulation with default settings.
    pub fn new() -> Self {
        Self {
            config: TrailConfig::default(),
            seed: None,
            title: "Glint".to_string(),
            window_size: (1280, 720),
        }
    }

    pub fn with_config(mut self, config: TrailConfig) -> Self {
        self.config = config;
        self
    }

    /// Fix the spawn generator seed for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Initial logical window size.
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.window_size = (width, height);
        self
    }

    pub fn config(&self) -> &TrailConfig {
        &self.config
    }

    /// Build the inactive trail this simulation would run.
    pub fn build_effect(&self) -> Result<TrailEffect, SimulationError> {
        let interval = self.config.tick_interval();
        let field = match self.seed {
            Some(seed) => ParticleField::seeded(self.config.clone(), seed)?,
            None => ParticleField::new(self.config.clone())?,
        };
        Ok(TrailEffect::from_field(field, interval))
    }

    /// Run the simulation. Blocks until the window is closed.
    pub fn run(self) -> Result<(), SimulationError> {
        let effect = self.build_effect()?;

        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let mut app = App::new(self.title, self.window_size, effect);
        event_loop.run_app(&mut app)?;

        match app.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

/// Radius of the cursor ring at rest, in pixels.
const CURSOR_RADIUS: f32 = 12.0;

fn cursor_instance(cursor: &CursorFollower, color: Vec3) -> ParticleInstance {
    ParticleInstance::new(cursor.position(), CURSOR_RADIUS * cursor.scale(), cursor.opacity(), color)
}

struct App {
    title: String,
    window_size: (u32, u32),
    window: Option<Arc<Window>>,
    gpu_state: Option<GpuState>,
    host: WindowHost,
    effect: TrailEffect,
    input: Input,
    cursor: CursorFollower,
    cursor_color: Vec3,
    error: Option<SimulationError>,
}

impl App {
    fn new(title: String, window_size: (u32, u32), effect: TrailEffect) -> Self {
        Self {
            title,
            window_size,
            window: None,
            gpu_state: None,
            host: WindowHost::new(),
            effect,
            input: Input::new(),
            cursor: CursorFollower::default(),
            cursor_color: hex_to_rgb(GOLD).unwrap_or(Vec3::ONE),
            error: None,
        }
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<(), SimulationError> {
        let (width, height) = self.window_size;
        let window_attrs = Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(width, height));

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        let size = window.inner_size();

        // One extra instance for the cursor ring.
        let capacity = self.effect.field().max_particles() + 1;
        let gpu_state = pollster::block_on(GpuState::new(window.clone(), capacity))?;

        log::info!("Window created ({}x{})", size.width, size.height);
        self.window = Some(window);
        self.gpu_state = Some(gpu_state);
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: SimulationError) {
        log::error!("{}", error);
        self.effect.deactivate(&mut self.host);
        self.error = Some(error);
        event_loop.exit();
    }

    fn render(&mut self, event_loop: &ActiveEventLoop) {
        let Some(gpu_state) = &mut self.gpu_state else {
            return;
        };
        let cursor = self
            .input
            .pointer_inside()
            .then(|| cursor_instance(&self.cursor, self.cursor_color));
        let instances = self
            .effect
            .views()
            .map(|v| ParticleInstance::from_view(&v))
            .chain(cursor);
        match gpu_state.render(instances) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let size = winit::dpi::PhysicalSize::new(gpu_state.config.width, gpu_state.config.height);
                gpu_state.resize(size);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("GPU out of memory, exiting");
                self.effect.deactivate(&mut self.host);
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.create_window(event_loop) {
                self.fail(event_loop, e);
                return;
            }
        }
        if let Err(e) = self.effect.activate(&mut self.host) {
            self.fail(event_loop, e.into());
        }
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        self.effect.deactivate(&mut self.host);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if let Some(pointer) = self.input.handle_event(&event) {
            self.cursor.set_target(self.input.pointer_position());
            if self.host.is_listening() {
                self.effect.on_pointer_move(pointer.x, pointer.y);
            }
        }

        match event {
            WindowEvent::CloseRequested => {
                self.effect.deactivate(&mut self.host);
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.resize(physical_size);
                }
            }
            WindowEvent::RedrawRequested => {
                self.render(event_loop);
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let due = self.host.ticks_due(Instant::now());
        let interval = self.effect.tick_interval();
        for _ in 0..due {
            self.effect.tick();
            self.cursor.step(interval);
        }
        if due > 0 {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }

        match self.host.next_deadline() {
            Some(deadline) => event_loop.set_control_flow(ControlFlow::WaitUntil(deadline)),
            None => event_loop.set_control_flow(ControlFlow::Wait),
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.effect.deactivate(&mut self.host);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_host_single_listener() {
        let mut host = WindowHost::new();
        let l = host.add_pointer_listener().unwrap();
        assert!(host.is_listening());
        assert!(host.add_pointer_listener().is_err());
        host.remove_pointer_listener(l);
        assert!(!host.is_listening());
    }

    #[test]
    fn test_window_host_ignores_stale_handles() {
        let mut host = WindowHost::new();
        let t = host.set_interval(Duration::from_millis(16)).unwrap();
        host.clear_interval(TimerHandle(t.0 + 100));
        assert!(host.has_timer());
        host.clear_interval(t);
        assert!(!host.has_timer());
        assert_eq!(host.next_deadline(), None);
        assert_eq!(host.ticks_due(Instant::now() + Duration::from_secs(1)), 0);
    }

    #[test]
    fn test_window_host_rejects_zero_period() {
        let mut host = WindowHost::new();
        assert!(matches!(host.set_interval(Duration::ZERO), Err(HostError::Timer(_))));
    }

    #[test]
    fn test_effect_lifecycle_on_window_host() {
        let sim = Simulation::new().with_seed(9);
        let mut effect = sim.build_effect().unwrap();
        let mut host = WindowHost::new();

        effect.activate(&mut host).unwrap();
        assert!(host.is_listening());
        assert!(host.has_timer());

        effect.deactivate(&mut host);
        effect.deactivate(&mut host);
        assert!(!host.is_listening());
        assert!(!host.has_timer());
    }

    #[test]
    fn test_timer_conflict_leaves_host_clean() {
        let sim = Simulation::new().with_seed(9);
        let mut effect = sim.build_effect().unwrap();
        let mut host = WindowHost::new();
        let _other = host.set_interval(Duration::from_millis(5)).unwrap();

        assert!(effect.activate(&mut host).is_err());
        assert!(!host.is_listening());
    }

    #[test]
    fn test_cursor_instance_tracks_follower() {
        let mut cursor = CursorFollower::default();
        cursor.jump_to(glam::Vec2::new(40.0, 30.0));
        let inst = cursor_instance(&cursor, Vec3::ONE);
        assert_eq!(inst.center, [40.0, 30.0]);
        assert_eq!(inst.size, CURSOR_RADIUS);
        assert_eq!(inst.opacity, 0.4);

        cursor.set_hovering(true);
        assert_eq!(cursor_instance(&cursor, Vec3::ONE).size, CURSOR_RADIUS * 1.5);
    }

    #[test]
    fn test_invalid_config_fails_before_window() {
        let sim = Simulation::new().with_config(TrailConfig::default().with_spawn_probability(2.0));
        assert!(matches!(sim.build_effect(), Err(SimulationError::Config(_))));
    }
}
