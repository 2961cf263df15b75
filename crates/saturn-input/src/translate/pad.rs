use super::PortInput;
use crate::{
    host::InputSource,
    register::{PadButtons, RegisterImage},
    retro::joypad,
};

/// Host button → Control Pad bit, in Saturn bit order.
const PAD_MAP: [(u32, PadButtons); 13] = [
    (joypad::L, PadButtons::Z),
    (joypad::X, PadButtons::Y),
    (joypad::Y, PadButtons::X),
    (joypad::R2, PadButtons::R),
    (joypad::UP, PadButtons::UP),
    (joypad::DOWN, PadButtons::DOWN),
    (joypad::LEFT, PadButtons::LEFT),
    (joypad::RIGHT, PadButtons::RIGHT),
    (joypad::A, PadButtons::B),
    (joypad::R, PadButtons::C),
    (joypad::B, PadButtons::A),
    (joypad::START, PadButtons::START),
    // Bit 15, past the unused 12-14 gap.
    (joypad::L2, PadButtons::L),
];

pub(super) fn translate<I: InputSource + ?Sized>(input: &PortInput<'_, I>) -> RegisterImage {
    let buttons = PAD_MAP
        .iter()
        .filter(|(id, _)| input.joypad(*id))
        .fold(PadButtons::empty(), |acc, (_, bit)| acc | *bit);

    RegisterImage::Pad { buttons }
}
