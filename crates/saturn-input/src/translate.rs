//! Translation engine: turns one frame of polled input into a port's
//! [`RegisterImage`].

mod gun;
mod mouse;
mod pad;
mod three_d_pad;
mod trigger;
mod wheel;

use crate::{
    device::ControllerVariant,
    host::InputSource,
    mode::ModeState,
    register::RegisterImage,
    retro::{self, analog},
    settings::InputSettings,
};

/// Outcome of translating one port for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translated {
    pub image: RegisterImage,
    /// New analog-mode flag when the mode switch was just pressed.
    pub mode_toggled: Option<bool>,
}

/// Runs the algorithm of `variant` for `port`.
///
/// `mode` is only read and updated by the 3D Control Pad.
pub fn translate<I>(
    variant: ControllerVariant,
    source: &I,
    port: usize,
    settings: &InputSettings,
    mode: &mut ModeState,
) -> Translated
where
    I: InputSource + ?Sized,
{
    let input = PortInput {
        source,
        port: port as u32,
    };

    let mut mode_toggled = None;
    let image = match variant {
        ControllerVariant::None => RegisterImage::None,
        ControllerVariant::Pad => pad::translate(&input),
        ControllerVariant::ThreeDPad => {
            let (regs, toggled) = three_d_pad::translate(&input, settings, mode);
            mode_toggled = toggled;
            RegisterImage::ThreeDPad(regs)
        }
        ControllerVariant::Wheel => wheel::translate(&input, settings),
        ControllerVariant::Mouse => mouse::translate(&input, settings),
        ControllerVariant::Gun => gun::translate(&input),
    };

    Translated {
        image,
        mode_toggled,
    }
}

/// Input source bound to a single port.
struct PortInput<'a, I: ?Sized> {
    source: &'a I,
    port: u32,
}

impl<I: InputSource + ?Sized> PortInput<'_, I> {
    fn joypad(&self, id: u32) -> bool {
        self.source.joypad(self.port, id)
    }

    fn analog(&self, index: u32, id: u32) -> i16 {
        self.source.state(self.port, retro::DEVICE_ANALOG, index, id)
    }

    fn left_stick(&self) -> (i32, i32) {
        (
            self.analog(analog::INDEX_LEFT, analog::ID_X).into(),
            self.analog(analog::INDEX_LEFT, analog::ID_Y).into(),
        )
    }

    fn mouse(&self, id: u32) -> i16 {
        self.source.state(self.port, retro::DEVICE_MOUSE, 0, id)
    }

    fn lightgun(&self, id: u32) -> i16 {
        self.source.state(self.port, retro::DEVICE_LIGHTGUN, 0, id)
    }
}

/// Splits a shaped axis into `(negative, positive)` magnitudes; the
/// direction not taken reads zero.
fn split_axis(value: i32) -> (u16, u16) {
    let negative = (-value).clamp(0, i32::from(u16::MAX)) as u16;
    let positive = value.clamp(0, i32::from(u16::MAX)) as u16;
    (negative, positive)
}
