//! Device registry: the closed set of Saturn peripherals and the tables the
//! frontend uses to present them.

use crate::{
    MAX_PORTS,
    retro::{self, analog, joypad, lightgun},
};

pub const DEVICE_SS_PAD: u32 = retro::device_subclass(retro::DEVICE_JOYPAD, 0);
pub const DEVICE_SS_3D_PAD: u32 = retro::device_subclass(retro::DEVICE_ANALOG, 0);
pub const DEVICE_SS_WHEEL: u32 = retro::device_subclass(retro::DEVICE_ANALOG, 1);
pub const DEVICE_SS_MOUSE: u32 = retro::device_subclass(retro::DEVICE_MOUSE, 0);
pub const DEVICE_SS_GUN: u32 = retro::device_subclass(retro::DEVICE_LIGHTGUN, 0);

/// Peripheral plugged into a logical port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ControllerVariant {
    /// Nothing connected.
    None,
    /// Standard Control Pad.
    #[default]
    Pad,
    /// 3D Control Pad with analog stick and triggers.
    ThreeDPad,
    /// Arcade Racer steering wheel.
    Wheel,
    /// Shuttle Mouse.
    Mouse,
    /// Virtua Gun / Stunner light gun.
    Gun,
}

impl ControllerVariant {
    pub const ALL: [ControllerVariant; 6] = [
        ControllerVariant::None,
        ControllerVariant::Pad,
        ControllerVariant::ThreeDPad,
        ControllerVariant::Wheel,
        ControllerVariant::Mouse,
        ControllerVariant::Gun,
    ];

    /// Resolves a frontend device id. Both the plain joypad id and the
    /// Control Pad subclass select [`ControllerVariant::Pad`].
    pub fn from_device_id(id: u32) -> Option<Self> {
        match id {
            retro::DEVICE_NONE => Some(Self::None),
            retro::DEVICE_JOYPAD | DEVICE_SS_PAD => Some(Self::Pad),
            DEVICE_SS_3D_PAD => Some(Self::ThreeDPad),
            DEVICE_SS_WHEEL => Some(Self::Wheel),
            DEVICE_SS_MOUSE => Some(Self::Mouse),
            DEVICE_SS_GUN => Some(Self::Gun),
            _ => None,
        }
    }

    /// Id advertised to the frontend.
    pub const fn device_id(self) -> u32 {
        match self {
            Self::None => retro::DEVICE_NONE,
            Self::Pad => retro::DEVICE_JOYPAD,
            Self::ThreeDPad => DEVICE_SS_3D_PAD,
            Self::Wheel => DEVICE_SS_WHEEL,
            Self::Mouse => DEVICE_SS_MOUSE,
            Self::Gun => DEVICE_SS_GUN,
        }
    }

    /// Name shown in the frontend's device picker.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Pad => "Control Pad",
            Self::ThreeDPad => "3D Control Pad",
            Self::Wheel => "Arcade Racer",
            Self::Mouse => "Mouse",
            Self::Gun => "Virtua Gun / Stunner",
        }
    }

    /// Short name used in log lines when a port is (re)assigned.
    pub const fn log_name(self) -> &'static str {
        match self {
            Self::None => "Unplugged",
            Self::Gun => "Virtua Gun",
            other => other.display_name(),
        }
    }

    /// Key the peripheral emulation uses to pick its device model.
    pub const fn binding_key(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Pad => "gamepad",
            Self::ThreeDPad => "3dpad",
            Self::Wheel => "wheel",
            Self::Mouse => "mouse",
            Self::Gun => "gun",
        }
    }
}

/// One entry of the device picker (`retro_controller_description`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceType {
    pub name: &'static str,
    pub id: u32,
}

/// Devices offered on a single port (`retro_controller_info`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerInfo {
    pub types: &'static [DeviceType],
}

/// Label for one port/input pair (`retro_input_descriptor`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputDescriptor {
    pub port: u32,
    pub device: u32,
    pub index: u32,
    pub id: u32,
    pub description: &'static str,
}

pub static DEVICE_TYPES: [DeviceType; 6] = [
    device_type(ControllerVariant::None),
    device_type(ControllerVariant::Pad),
    device_type(ControllerVariant::ThreeDPad),
    device_type(ControllerVariant::Wheel),
    device_type(ControllerVariant::Mouse),
    device_type(ControllerVariant::Gun),
];

const fn device_type(variant: ControllerVariant) -> DeviceType {
    DeviceType {
        name: variant.display_name(),
        id: variant.device_id(),
    }
}

/// Per-port device table handed to the frontend once at startup.
pub fn controller_info() -> [ControllerInfo; MAX_PORTS] {
    [ControllerInfo {
        types: &DEVICE_TYPES,
    }; MAX_PORTS]
}

const DESCRIPTOR_LABELS: [(u32, u32, u32, &str); 19] = [
    (retro::DEVICE_JOYPAD, 0, joypad::UP, "D-Pad Up"),
    (retro::DEVICE_JOYPAD, 0, joypad::DOWN, "D-Pad Down"),
    (retro::DEVICE_JOYPAD, 0, joypad::LEFT, "D-Pad Left"),
    (retro::DEVICE_JOYPAD, 0, joypad::RIGHT, "D-Pad Right"),
    (retro::DEVICE_JOYPAD, 0, joypad::B, "A Button"),
    (retro::DEVICE_JOYPAD, 0, joypad::A, "B Button"),
    (retro::DEVICE_JOYPAD, 0, joypad::R, "C Button"),
    (retro::DEVICE_JOYPAD, 0, joypad::Y, "X Button"),
    (retro::DEVICE_JOYPAD, 0, joypad::X, "Y Button"),
    (retro::DEVICE_JOYPAD, 0, joypad::L, "Z Button"),
    (retro::DEVICE_JOYPAD, 0, joypad::L2, "L Button"),
    (retro::DEVICE_JOYPAD, 0, joypad::R2, "R Button"),
    (retro::DEVICE_JOYPAD, 0, joypad::START, "Start Button"),
    (retro::DEVICE_JOYPAD, 0, joypad::SELECT, "Mode Switch"),
    (
        retro::DEVICE_ANALOG,
        analog::INDEX_LEFT,
        analog::ID_X,
        "Analog X",
    ),
    (
        retro::DEVICE_ANALOG,
        analog::INDEX_LEFT,
        analog::ID_Y,
        "Analog Y",
    ),
    (retro::DEVICE_LIGHTGUN, 0, lightgun::TRIGGER, "Gun Trigger"),
    (retro::DEVICE_LIGHTGUN, 0, lightgun::START, "Gun Start"),
    (retro::DEVICE_LIGHTGUN, 0, lightgun::RELOAD, "Gun Reload"),
];

/// Input labels for every port, in port-major order.
pub fn input_descriptors() -> Vec<InputDescriptor> {
    (0..MAX_PORTS as u32)
        .flat_map(|port| {
            DESCRIPTOR_LABELS
                .iter()
                .map(move |&(device, index, id, description)| InputDescriptor {
                    port,
                    device,
                    index,
                    id,
                    description,
                })
        })
        .collect()
}
