use super::PortInput;
use crate::{
    host::InputSource,
    register::{MouseButtons, RegisterImage},
    retro::{joypad, mouse},
    settings::InputSettings,
};

pub(super) fn translate<I: InputSource + ?Sized>(
    input: &PortInput<'_, I>,
    settings: &InputSettings,
) -> RegisterImage {
    let mut buttons = MouseButtons::empty();
    buttons.set(MouseButtons::LEFT, input.mouse(mouse::LEFT) != 0);
    buttons.set(MouseButtons::RIGHT, input.mouse(mouse::RIGHT) != 0);
    buttons.set(MouseButtons::MIDDLE, input.mouse(mouse::MIDDLE) != 0);
    buttons.set(
        MouseButtons::START,
        input.joypad(joypad::START)
            || input.mouse(mouse::BUTTON_4) != 0
            || input.mouse(mouse::BUTTON_5) != 0,
    );

    let sensitivity = settings.mouse_sensitivity();
    let scale = |raw: i16| (f32::from(raw) * sensitivity).round() as i32;

    RegisterImage::Mouse {
        buttons,
        delta_x: scale(input.mouse(mouse::X)),
        delta_y: scale(input.mouse(mouse::Y)),
    }
}
