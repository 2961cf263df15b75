use super::PortInput;
use crate::{
    host::InputSource,
    register::{GUN_OFFSCREEN_POSITION, GunStatus, RegisterImage},
    retro::lightgun,
};

// Empirical mapping of the frontend's [-0x7fff, 0x7fff] pointer range onto
// the Saturn's gun coordinate space. Keep these exact.
const SCALE_X: i32 = 21472;
const OFFSET_X: i32 = 60;
const SCALE_Y: i32 = 240;
const POINTER_SPAN: i32 = 0x7fff << 1;

pub(super) fn translate<I: InputSource + ?Sized>(input: &PortInput<'_, I>) -> RegisterImage {
    let forced_reload = input.lightgun(lightgun::RELOAD) != 0;

    let (x, y, shot) = if input.lightgun(lightgun::IS_OFFSCREEN) != 0 || forced_reload {
        (
            GUN_OFFSCREEN_POSITION,
            GUN_OFFSCREEN_POSITION,
            GunStatus::SHOT_OFF_SCREEN,
        )
    } else {
        let raw_x = i32::from(input.lightgun(lightgun::SCREEN_X));
        let raw_y = i32::from(input.lightgun(lightgun::SCREEN_Y));
        (
            screen_x(raw_x),
            screen_y(raw_y),
            GunStatus::SHOT_ON_SCREEN,
        )
    };

    let mut status = GunStatus::empty();
    if input.lightgun(lightgun::TRIGGER) != 0 || forced_reload {
        status |= shot;
    }
    if input.lightgun(lightgun::START) != 0 {
        status |= GunStatus::START;
    }

    RegisterImage::Gun { x, y, status }
}

fn screen_x(raw: i32) -> i16 {
    ((raw + OFFSET_X + 0x7fff) * SCALE_X / POINTER_SPAN) as i16
}

fn screen_y(raw: i32) -> i16 {
    ((raw + 0x7fff) * SCALE_Y / POINTER_SPAN) as i16
}
