//! Register images handed to the SMPC peripheral emulation.
//!
//! Each port owns a 32-byte buffer whose layout depends on the connected
//! device. Translation produces a typed [`RegisterImage`]; [`RegisterImage::encode`]
//! writes it into the legacy byte layout, touching only the bytes the device
//! defines. Bytes outside that set keep whatever the previous frame left.
//!
//! ```text
//! offset  pad      3dpad        wheel        mouse          gun
//! 0..2    buttons  buttons      buttons      delta x (i32)  x (i16)
//! 2..4             left         left                        y (i16)
//! 4..6             right        right        delta y (i32)  status (u8 @4)
//! 6..8             up
//! 8..10            down                      status (u8 @8)
//! 10..12           R trigger
//! 12..14           L trigger
//! ```

use std::sync::Arc;

use bitflags::bitflags;
use parking_lot::Mutex;

/// Size of one port's register buffer.
pub const REGISTER_IMAGE_LEN: usize = 32;

/// Raw register bytes of one port.
pub type RegisterBytes = [u8; REGISTER_IMAGE_LEN];

/// Register buffer shared with the peripheral emulation.
pub type SharedRegister = Arc<Mutex<RegisterBytes>>;

/// Light gun position that tells the video layer to hide the crosshair.
pub const GUN_OFFSCREEN_POSITION: i16 = -16384;

bitflags! {
    /// Control Pad buttons word.
    ///
    /// Bits 12-14 are unused; L sits alone in bit 15.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PadButtons: u16 {
        const Z = 1 << 0;
        const Y = 1 << 1;
        const X = 1 << 2;
        const R = 1 << 3;
        const UP = 1 << 4;
        const DOWN = 1 << 5;
        const LEFT = 1 << 6;
        const RIGHT = 1 << 7;
        const B = 1 << 8;
        const C = 1 << 9;
        const A = 1 << 10;
        const START = 1 << 11;
        const L = 1 << 15;
    }
}

bitflags! {
    /// 3D Control Pad buttons word.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ThreeDPadButtons: u16 {
        const UP = 1 << 0;
        const DOWN = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
        const B = 1 << 4;
        const C = 1 << 5;
        const A = 1 << 6;
        const START = 1 << 7;
        const Z = 1 << 8;
        const Y = 1 << 9;
        const X = 1 << 10;
        /// Set while the pad reports analog mode.
        const ANALOG_MODE = 1 << 12;
    }
}

bitflags! {
    /// Arcade Racer buttons word.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct WheelButtons: u16 {
        const SHIFT_LEFT = 1 << 0;
        const SHIFT_RIGHT = 1 << 1;
        const B = 1 << 4;
        const C = 1 << 5;
        const A = 1 << 6;
        const START = 1 << 7;
        const Z = 1 << 8;
        const Y = 1 << 9;
        const X = 1 << 10;
    }
}

bitflags! {
    /// Mouse status byte (offset 8).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MouseButtons: u8 {
        const LEFT = 1 << 0;
        const RIGHT = 1 << 1;
        const MIDDLE = 1 << 2;
        const START = 1 << 3;
    }
}

bitflags! {
    /// Light gun status byte (offset 4).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct GunStatus: u8 {
        const SHOT_ON_SCREEN = 0x1;
        const START = 0x2;
        const SHOT_OFF_SCREEN = 0x4;
    }
}

/// Direction magnitudes and triggers of a 3D Control Pad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThreeDPadRegisters {
    pub buttons: ThreeDPadButtons,
    pub left: u16,
    pub right: u16,
    pub up: u16,
    pub down: u16,
    pub right_trigger: u16,
    pub left_trigger: u16,
}

/// Typed view of one port's registers for a single frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterImage {
    None,
    Pad {
        buttons: PadButtons,
    },
    ThreeDPad(ThreeDPadRegisters),
    Wheel {
        buttons: WheelButtons,
        left: u16,
        right: u16,
    },
    Mouse {
        buttons: MouseButtons,
        delta_x: i32,
        delta_y: i32,
    },
    Gun {
        x: i16,
        y: i16,
        status: GunStatus,
    },
}

impl RegisterImage {
    /// Writes the image into `bytes`.
    ///
    /// The buttons word (bytes 0-1) is always cleared first, whatever the
    /// device; variants then overwrite their own fields only.
    pub fn encode(&self, bytes: &mut RegisterBytes) {
        put_u16(bytes, 0, 0);

        match *self {
            RegisterImage::None => {}
            RegisterImage::Pad { buttons } => put_u16(bytes, 0, buttons.bits()),
            RegisterImage::ThreeDPad(regs) => {
                put_u16(bytes, 0x0, regs.buttons.bits());
                put_u16(bytes, 0x2, regs.left);
                put_u16(bytes, 0x4, regs.right);
                put_u16(bytes, 0x6, regs.up);
                put_u16(bytes, 0x8, regs.down);
                put_u16(bytes, 0xa, regs.right_trigger);
                put_u16(bytes, 0xc, regs.left_trigger);
            }
            RegisterImage::Wheel {
                buttons,
                left,
                right,
            } => {
                put_u16(bytes, 0x0, buttons.bits());
                put_u16(bytes, 0x2, left);
                put_u16(bytes, 0x4, right);
            }
            RegisterImage::Mouse {
                buttons,
                delta_x,
                delta_y,
            } => {
                bytes[0x0..0x4].copy_from_slice(&delta_x.to_le_bytes());
                bytes[0x4..0x8].copy_from_slice(&delta_y.to_le_bytes());
                bytes[0x8] = buttons.bits();
            }
            RegisterImage::Gun { x, y, status } => {
                bytes[0x0..0x2].copy_from_slice(&x.to_le_bytes());
                bytes[0x2..0x4].copy_from_slice(&y.to_le_bytes());
                bytes[0x4] = status.bits();
            }
        }
    }
}

fn put_u16(bytes: &mut RegisterBytes, offset: usize, value: u16) {
    bytes[offset..offset + 2].copy_from_slice(&value.to_le_bytes());
}

/// Allocates a zeroed register buffer.
pub fn new_shared_register() -> SharedRegister {
    Arc::new(Mutex::new([0; REGISTER_IMAGE_LEN]))
}
