//! Input identifiers shared with the host frontend.
//!
//! The numbering follows `libretro.h` so a frontend adapter can forward its
//! `retro_input_state_t` arguments untouched.

/// Shift applied to a subclass number when composing a device id.
pub const DEVICE_TYPE_SHIFT: u32 = 8;
/// Mask selecting the base device class from a (possibly subclassed) id.
pub const DEVICE_MASK: u32 = (1 << DEVICE_TYPE_SHIFT) - 1;

pub const DEVICE_NONE: u32 = 0;
pub const DEVICE_JOYPAD: u32 = 1;
pub const DEVICE_MOUSE: u32 = 2;
pub const DEVICE_LIGHTGUN: u32 = 4;
pub const DEVICE_ANALOG: u32 = 5;

/// Composes a device subclass id (`RETRO_DEVICE_SUBCLASS`).
pub const fn device_subclass(base: u32, id: u32) -> u32 {
    ((id + 1) << DEVICE_TYPE_SHIFT) | base
}

/// Joypad button ids (`RETRO_DEVICE_ID_JOYPAD_*`).
pub mod joypad {
    pub const B: u32 = 0;
    pub const Y: u32 = 1;
    pub const SELECT: u32 = 2;
    pub const START: u32 = 3;
    pub const UP: u32 = 4;
    pub const DOWN: u32 = 5;
    pub const LEFT: u32 = 6;
    pub const RIGHT: u32 = 7;
    pub const A: u32 = 8;
    pub const X: u32 = 9;
    pub const L: u32 = 10;
    pub const R: u32 = 11;
    pub const L2: u32 = 12;
    pub const R2: u32 = 13;
}

/// Analog stick indices and axis ids.
pub mod analog {
    pub const INDEX_LEFT: u32 = 0;
    /// Index used to read joypad buttons as analog values (triggers).
    pub const INDEX_BUTTON: u32 = 2;

    pub const ID_X: u32 = 0;
    pub const ID_Y: u32 = 1;
}

/// Mouse ids (`RETRO_DEVICE_ID_MOUSE_*`).
pub mod mouse {
    pub const X: u32 = 0;
    pub const Y: u32 = 1;
    pub const LEFT: u32 = 2;
    pub const RIGHT: u32 = 3;
    pub const MIDDLE: u32 = 6;
    pub const BUTTON_4: u32 = 9;
    pub const BUTTON_5: u32 = 10;
}

/// Light gun ids (`RETRO_DEVICE_ID_LIGHTGUN_*`).
pub mod lightgun {
    pub const TRIGGER: u32 = 2;
    pub const START: u32 = 6;
    pub const SCREEN_X: u32 = 13;
    pub const SCREEN_Y: u32 = 14;
    pub const IS_OFFSCREEN: u32 = 15;
    pub const RELOAD: u32 = 16;
}
