use super::{PortInput, split_axis};
use crate::{
    deadzone,
    host::InputSource,
    register::{RegisterImage, WheelButtons},
    retro::{analog, joypad},
    settings::InputSettings,
};

const WHEEL_MAP: [(u32, WheelButtons); 9] = [
    (joypad::A, WheelButtons::B),
    (joypad::R, WheelButtons::C),
    (joypad::B, WheelButtons::A),
    (joypad::START, WheelButtons::START),
    (joypad::L, WheelButtons::Z),
    (joypad::X, WheelButtons::Y),
    (joypad::Y, WheelButtons::X),
    (joypad::L2, WheelButtons::SHIFT_LEFT),
    (joypad::R2, WheelButtons::SHIFT_RIGHT),
];

pub(super) fn translate<I: InputSource + ?Sized>(
    input: &PortInput<'_, I>,
    settings: &InputSettings,
) -> RegisterImage {
    let buttons = WHEEL_MAP
        .iter()
        .filter(|(id, _)| input.joypad(*id))
        .fold(WheelButtons::empty(), |acc, (_, bit)| acc | *bit);

    let steering = input.analog(analog::INDEX_LEFT, analog::ID_X).into();
    let (left, right) = split_axis(deadzone::linear(steering, settings.stick_deadzone()));

    RegisterImage::Wheel {
        buttons,
        left,
        right,
    }
}
