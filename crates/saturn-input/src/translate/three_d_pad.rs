use super::{PortInput, split_axis, trigger};
use crate::{
    deadzone,
    host::InputSource,
    mode::ModeState,
    register::{ThreeDPadButtons, ThreeDPadRegisters},
    retro::joypad,
    settings::InputSettings,
};

const THREE_D_PAD_MAP: [(u32, ThreeDPadButtons); 11] = [
    (joypad::UP, ThreeDPadButtons::UP),
    (joypad::DOWN, ThreeDPadButtons::DOWN),
    (joypad::LEFT, ThreeDPadButtons::LEFT),
    (joypad::RIGHT, ThreeDPadButtons::RIGHT),
    (joypad::A, ThreeDPadButtons::B),
    (joypad::R, ThreeDPadButtons::C),
    (joypad::B, ThreeDPadButtons::A),
    (joypad::START, ThreeDPadButtons::START),
    (joypad::L, ThreeDPadButtons::Z),
    (joypad::X, ThreeDPadButtons::Y),
    (joypad::Y, ThreeDPadButtons::X),
];

const MODE_SWITCH: u32 = joypad::SELECT;

pub(super) fn translate<I: InputSource + ?Sized>(
    input: &PortInput<'_, I>,
    settings: &InputSettings,
    mode: &mut ModeState,
) -> (ThreeDPadRegisters, Option<bool>) {
    let mut buttons = THREE_D_PAD_MAP
        .iter()
        .filter(|(id, _)| input.joypad(*id))
        .fold(ThreeDPadButtons::empty(), |acc, (_, bit)| acc | *bit);

    let (x, y) = input.left_stick();
    let (x, y) = deadzone::radial(x, y, settings.stick_deadzone());

    let left_trigger = trigger::read(input, joypad::L2, settings.trigger_deadzone());
    let right_trigger = trigger::read(input, joypad::R2, settings.trigger_deadzone());

    let toggled = mode.update(input.joypad(MODE_SWITCH));
    if mode.analog_mode_active {
        buttons |= ThreeDPadButtons::ANALOG_MODE;
    }

    let (left, right) = split_axis(x);
    let (up, down) = split_axis(y);

    (
        ThreeDPadRegisters {
            buttons,
            left,
            right,
            up,
            down,
            right_trigger,
            left_trigger,
        },
        toggled,
    )
}
