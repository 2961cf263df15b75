//! Sega Saturn input translation for libretro-style frontends.
//!
//! Each frame the frontend's polled input state is converted into the byte
//! images the Saturn peripheral emulation reads from its per-port registers.
//! Up to twelve logical ports are supported through two 6Player Adaptors.
//!
//! ```text
//!  InputSource ──► InputContext::poll ──► translate ──► RegisterImage::encode
//!                        │                                     │
//!                  HostEnvironment                      SharedRegister ──► PeripheralBus
//! ```

pub mod context;
pub mod deadzone;
pub mod device;
pub mod error;
pub mod host;
pub mod mode;
pub mod register;
pub mod retro;
pub mod settings;
pub mod state;
pub mod topology;
pub mod translate;

/// Logical ports: two physical ports, each expandable to six players.
pub const MAX_PORTS: usize = 12;

pub use context::InputContext;
pub use device::ControllerVariant;
pub use error::InputError as Error;
pub use host::{HostEnvironment, InputSource, PeripheralBus};
pub use mode::ModeState;
pub use register::{RegisterBytes, RegisterImage, SharedRegister};
pub use settings::InputSettings;
