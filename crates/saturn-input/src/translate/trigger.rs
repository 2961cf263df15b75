use super::PortInput;
use crate::{
    deadzone::{self, AXIS_MAX},
    host::InputSource,
    retro::analog,
};

/// Reads an analog trigger, falling back to its digital state.
///
/// Not every frontend reports analog buttons. An analog reading of exactly
/// zero is therefore treated as "unsupported" and the digital button decides
/// between fully released and fully pressed. A trigger that really rests at
/// zero takes the same path, which yields the same result.
pub(super) fn read<I: InputSource + ?Sized>(
    input: &PortInput<'_, I>,
    id: u32,
    deadzone: i32,
) -> u16 {
    match input.analog(analog::INDEX_BUTTON, id) {
        0 if input.joypad(id) => AXIS_MAX as u16,
        0 => 0,
        value => deadzone::trigger(value.into(), deadzone),
    }
}
