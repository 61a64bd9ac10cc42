//! Error types for Glint.
//!
//! The particle field itself never fails. Errors come from the layers around
//! it: loading configuration, acquiring host resources, and bringing up the
//! window and GPU.

use std::fmt;

/// Errors that can occur while loading or validating a [`TrailConfig`](crate::TrailConfig).
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read or write the config file.
    Io(std::io::Error),
    /// The file is not valid JSON for a trail config.
    Json(serde_json::Error),
    /// `max_particles` must be at least 1.
    ZeroBound,
    /// `max_particles` is above [`MAX_PARTICLES_LIMIT`](crate::config::MAX_PARTICLES_LIMIT).
    BoundTooLarge(usize),
    /// `spawn_probability` must lie in `[0, 1]`.
    Probability(f32),
    /// A `[min, max]` range has `min > max` or a non-finite endpoint.
    Range {
        /// Name of the offending field.
        field: &'static str,
        /// Lower endpoint as given.
        min: f32,
        /// Upper endpoint as given.
        max: f32,
    },
    /// Particle sizes must be strictly positive.
    NonPositiveSize(f32),
    /// `size_decay` must lie in `[0, 1]` so sizes never grow.
    Decay(f32),
    /// `life_decrement` must be positive and large enough to ever bring life to zero.
    Decrement(f32),
    /// `tick_interval_ms` must be non-zero.
    ZeroInterval,
    /// The palette has no colours.
    EmptyPalette,
    /// A palette entry is not a `#RRGGBB` hex colour.
    Color(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Failed to access config file: {}", e),
            ConfigError::Json(e) => write!(f, "Failed to parse config: {}", e),
            ConfigError::ZeroBound => write!(f, "max_particles must be at least 1"),
            ConfigError::BoundTooLarge(n) => write!(
                f,
                "max_particles must be at most {}, got {}",
                crate::config::MAX_PARTICLES_LIMIT,
                n
            ),
            ConfigError::Probability(p) => {
                write!(f, "spawn_probability must be within [0, 1], got {}", p)
            }
            ConfigError::Range { field, min, max } => {
                write!(f, "{} must be an ordered finite range, got [{}, {}]", field, min, max)
            }
            ConfigError::NonPositiveSize(s) => {
                write!(f, "size_range must only contain positive sizes, got {}", s)
            }
            ConfigError::Decay(d) => write!(f, "size_decay must be within [0, 1], got {}", d),
            ConfigError::Decrement(d) => {
                write!(f, "life_decrement must be positive and large enough to expire particles, got {}", d)
            }
            ConfigError::ZeroInterval => write!(f, "tick_interval_ms must be non-zero"),
            ConfigError::EmptyPalette => write!(f, "palette must contain at least one colour"),
            ConfigError::Color(s) => write!(f, "Invalid palette colour '{}', expected #RRGGBB", s),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}

/// Errors a [`Host`](crate::Host) reports when it cannot hand out a resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    /// The host refused to register a pointer listener.
    Listener(String),
    /// The host refused to start an interval timer.
    Timer(String),
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostError::Listener(msg) => write!(f, "Failed to add pointer listener: {}", msg),
            HostError::Timer(msg) => write!(f, "Failed to start tick timer: {}", msg),
        }
    }
}

impl std::error::Error for HostError {}

/// Errors that can occur during GPU initialization.
#[derive(Debug)]
pub enum GpuError {
    /// Failed to create a surface for rendering.
    SurfaceCreation(wgpu::CreateSurfaceError),
    /// No compatible GPU adapter found.
    NoAdapter,
    /// Failed to create GPU device.
    DeviceCreation(wgpu::RequestDeviceError),
}

impl fmt::Display for GpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpuError::SurfaceCreation(e) => write!(f, "Failed to create GPU surface: {}", e),
            GpuError::NoAdapter => write!(f, "No compatible GPU adapter found. Ensure your system has a GPU with WebGPU/Vulkan/Metal/DX12 support."),
            GpuError::DeviceCreation(e) => write!(f, "Failed to create GPU device: {}", e),
        }
    }
}

impl std::error::Error for GpuError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GpuError::SurfaceCreation(e) => Some(e),
            GpuError::DeviceCreation(e) => Some(e),
            GpuError::NoAdapter => None,
        }
    }
}

impl From<wgpu::CreateSurfaceError> for GpuError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        GpuError::SurfaceCreation(e)
    }
}

impl From<wgpu::RequestDeviceError> for GpuError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        GpuError::DeviceCreation(e)
    }
}

/// Errors that can occur when running a simulation.
#[derive(Debug)]
pub enum SimulationError {
    /// The trail configuration is invalid.
    Config(ConfigError),
    /// Failed to create event loop.
    EventLoop(winit::error::EventLoopError),
    /// Failed to create window.
    Window(winit::error::OsError),
    /// GPU initialization failed.
    Gpu(GpuError),
    /// The trail effect could not acquire its listener or timer.
    Host(HostError),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::Config(e) => write!(f, "Invalid configuration: {}", e),
            SimulationError::EventLoop(e) => write!(f, "Failed to create event loop: {}", e),
            SimulationError::Window(e) => write!(f, "Failed to create window: {}", e),
            SimulationError::Gpu(e) => write!(f, "GPU error: {}", e),
            SimulationError::Host(e) => write!(f, "Failed to activate trail: {}", e),
        }
    }
}

impl std::error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimulationError::Config(e) => Some(e),
            SimulationError::EventLoop(e) => Some(e),
            SimulationError::Window(e) => Some(e),
            SimulationError::Gpu(e) => Some(e),
            SimulationError::Host(e) => Some(e),
        }
    }
}

impl From<ConfigError> for SimulationError {
    fn from(e: ConfigError) -> Self {
        SimulationError::Config(e)
    }
}

impl From<winit::error::EventLoopError> for SimulationError {
    fn from(e: winit::error::EventLoopError) -> Self {
        SimulationError::EventLoop(e)
    }
}

impl From<winit::error::OsError> for SimulationError {
    fn from(e: winit::error::OsError) -> Self {
        SimulationError::Window(e)
    }
}

impl From<GpuError> for SimulationError {
    fn from(e: GpuError) -> Self {
        SimulationError::Gpu(e)
    }
}

impl From<HostError> for SimulationError {
    fn from(e: HostError) -> Self {
        SimulationError::Host(e)
    }
}
