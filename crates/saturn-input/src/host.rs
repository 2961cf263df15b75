//! Collaborator seams between the translation layer and the outside world.
//!
//! The frontend supplies input through [`InputSource`] and receives
//! notifications through [`HostEnvironment`]; the downstream SMPC emulation
//! receives register buffers and multitap changes through [`PeripheralBus`].

use crate::{
    device::{ControllerInfo, InputDescriptor},
    register::SharedRegister,
    retro,
};

/// How long (in frames) mode-switch messages stay on screen.
pub const MESSAGE_FRAMES: u32 = 180;

/// Polled input state provided by the frontend (`retro_input_state_t`).
pub trait InputSource {
    /// Queries the state of an input element. Digital inputs report 0/1,
    /// analog axes and pointers report signed 16-bit values.
    fn state(&self, port: u32, device: u32, index: u32, id: u32) -> i16;

    /// Reads a digital joypad button.
    fn joypad(&self, port: u32, id: u32) -> bool {
        self.state(port, retro::DEVICE_JOYPAD, 0, id) != 0
    }
}

impl<F> InputSource for F
where
    F: Fn(u32, u32, u32, u32) -> i16,
{
    fn state(&self, port: u32, device: u32, index: u32, id: u32) -> i16 {
        self(port, device, index, id)
    }
}

/// Downstream peripheral emulation that consumes the register images.
pub trait PeripheralBus {
    /// Hands the register buffer of `port` to the peripheral layer under the
    /// device `key` (`"gamepad"`, `"3dpad"`, ...). Replaces any earlier
    /// binding for the port.
    fn bind_input(&mut self, port: usize, key: &'static str, buffer: SharedRegister);

    /// Connects or removes a 6-player adaptor. `adapter` is zero-based.
    fn set_multitap(&mut self, adapter: usize, enabled: bool);
}

/// Frontend environment callbacks used by the input layer.
pub trait HostEnvironment {
    /// Pushes a short on-screen message. Fire-and-forget.
    fn show_message(&mut self, text: &str, frames: u32);

    /// Publishes the devices selectable on each port.
    fn set_controller_info(&mut self, _ports: &[ControllerInfo]) {}

    /// Publishes human-readable labels for every port/input pair.
    fn set_input_descriptors(&mut self, _descriptors: &[InputDescriptor]) {}
}
