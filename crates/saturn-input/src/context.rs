//! The input subsystem as one owned object.
//!
//! [`InputContext`] holds everything that outlives a frame: the device on
//! each port, the mode flags, the register buffers shared with the SMPC
//! emulation, the multitap topology and the user settings. Collaborators are
//! passed into each call rather than cached.

use tracing::{debug, info, trace, warn};

use crate::{
    MAX_PORTS,
    device::{self, ControllerVariant},
    error::InputError,
    host::{HostEnvironment, InputSource, MESSAGE_FRAMES, PeripheralBus},
    mode::ModeState,
    register::{self, RegisterBytes, SharedRegister},
    settings::InputSettings,
    state::InputState,
    topology::PortTopology,
    translate,
};

#[derive(Debug)]
struct Port {
    variant: ControllerVariant,
    mode: ModeState,
    register: SharedRegister,
}

impl Port {
    fn new() -> Self {
        Self {
            variant: ControllerVariant::Pad,
            mode: ModeState::for_variant(ControllerVariant::Pad),
            register: register::new_shared_register(),
        }
    }
}

#[derive(Debug)]
pub struct InputContext {
    ports: [Port; MAX_PORTS],
    topology: PortTopology,
    settings: InputSettings,
}

impl InputContext {
    /// Creates the subsystem with a Control Pad on every port and binds each
    /// port's buffer to `bus`.
    pub fn new<B: PeripheralBus + ?Sized>(bus: &mut B) -> Self {
        let ctx = Self {
            ports: std::array::from_fn(|_| Port::new()),
            topology: PortTopology::new(),
            settings: InputSettings::default(),
        };
        for (index, port) in ctx.ports.iter().enumerate() {
            bus.bind_input(index, port.variant.binding_key(), port.register.clone());
        }
        ctx
    }

    /// Publishes the device picker and input labels to the frontend.
    pub fn register_with_host<H: HostEnvironment + ?Sized>(&self, host: &mut H) {
        host.set_controller_info(&device::controller_info());
        host.set_input_descriptors(&device::input_descriptors());
    }

    pub fn settings(&self) -> &InputSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut InputSettings {
        &mut self.settings
    }

    /// Number of ports polled each frame.
    pub fn active_players(&self) -> usize {
        self.topology.active_players()
    }

    pub fn multitap(&self, port: u32) -> bool {
        self.topology.multitap(port)
    }

    /// Connects or removes the 6Player Adaptor on physical port 1 or 2.
    ///
    /// Repeating the current setting does nothing, so the hardware layer only
    /// hears about real changes.
    pub fn set_multitap<B: PeripheralBus + ?Sized>(
        &mut self,
        bus: &mut B,
        port: u32,
        enabled: bool,
    ) {
        let Some(adapter) = self.topology.set_multitap(port, enabled) else {
            return;
        };

        if enabled {
            info!("Connected 6Player Adaptor to Port {port}");
        } else {
            info!("Removed 6Player Adaptor from Port {port}");
        }
        bus.set_multitap(adapter, enabled);
    }

    /// Assigns a device to `port` by frontend device id.
    ///
    /// Unknown ids leave the port unplugged. Ports past the last logical port
    /// are ignored before the id is looked at.
    pub fn set_port_device_id<B: PeripheralBus + ?Sized>(
        &mut self,
        bus: &mut B,
        port: u32,
        device: u32,
    ) {
        let port = port as usize;
        if port >= MAX_PORTS {
            debug!(port, device, "ignoring device assignment for out-of-range port");
            return;
        }

        let variant = ControllerVariant::from_device_id(device).unwrap_or_else(|| {
            warn!("Controller {}: Unsupported Device ({device})", port + 1);
            ControllerVariant::None
        });
        self.set_port_device(bus, port, variant);
    }

    /// Assigns `variant` to `port`, resetting its mode flags and registers
    /// and rebinding the buffer. Ports past the last logical port are ignored.
    pub fn set_port_device<B: PeripheralBus + ?Sized>(
        &mut self,
        bus: &mut B,
        port: usize,
        variant: ControllerVariant,
    ) {
        let Some(slot) = self.ports.get_mut(port) else {
            debug!(port, "ignoring device assignment for out-of-range port");
            return;
        };

        slot.variant = variant;
        slot.mode = ModeState::for_variant(variant);
        slot.register.lock().fill(0);

        info!("Controller {}: {}", port + 1, variant.log_name());
        bus.bind_input(port, variant.binding_key(), slot.register.clone());
    }

    pub fn port_variant(&self, port: usize) -> Option<ControllerVariant> {
        self.ports.get(port).map(|p| p.variant)
    }

    pub fn mode_state(&self, port: usize) -> Option<ModeState> {
        self.ports.get(port).map(|p| p.mode)
    }

    /// Handle to the register buffer of `port`.
    pub fn register(&self, port: usize) -> Option<SharedRegister> {
        self.ports.get(port).map(|p| p.register.clone())
    }

    /// Copy of the current register bytes of `port`.
    pub fn register_bytes(&self, port: usize) -> Option<RegisterBytes> {
        self.ports.get(port).map(|p| *p.register.lock())
    }

    /// Translates one frame of input for every active port.
    pub fn poll<I, H>(&mut self, input: &I, host: &mut H)
    where
        I: InputSource + ?Sized,
        H: HostEnvironment + ?Sized,
    {
        let players = self.topology.active_players();
        for (index, port) in self.ports.iter_mut().take(players).enumerate() {
            let translated = translate::translate(
                port.variant,
                input,
                index,
                &self.settings,
                &mut port.mode,
            );

            if let Some(analog) = translated.mode_toggled {
                let mode = if analog { "Analog Mode" } else { "Digital Mode" };
                let text = format!("Controller {}: {mode}", index + 1);
                info!("{text}");
                host.show_message(&text, MESSAGE_FRAMES);
            }

            translated.image.encode(&mut port.register.lock());
        }
        trace!(players, "input polled");
    }

    pub fn mode_states(&self) -> [ModeState; MAX_PORTS] {
        std::array::from_fn(|port| self.ports[port].mode)
    }

    /// Exact size of the record written by [`save_state`](Self::save_state).
    pub fn save_state_size(&self) -> Result<usize, InputError> {
        Ok(InputState::capture(self.mode_states()).to_postcard_bytes()?.len())
    }

    /// Writes the mode flags of all ports into `dst`, returning the number of
    /// bytes written. Nothing is written when `dst` is too small.
    pub fn save_state(&self, dst: &mut [u8]) -> Result<usize, InputError> {
        let bytes = InputState::capture(self.mode_states()).to_postcard_bytes()?;
        let Some(out) = dst.get_mut(..bytes.len()) else {
            return Err(InputError::BufferTooSmall {
                required: bytes.len(),
                actual: dst.len(),
            });
        };
        out.copy_from_slice(&bytes);
        Ok(bytes.len())
    }

    /// Restores the mode flags of all ports. On error nothing changes.
    pub fn load_state(&mut self, src: &[u8]) -> Result<(), InputError> {
        let state = InputState::from_postcard_bytes(src)?;
        for (port, mode) in self.ports.iter_mut().zip(state.modes()) {
            port.mode = mode;
        }
        Ok(())
    }
}
