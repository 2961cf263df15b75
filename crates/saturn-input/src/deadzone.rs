//! Deadzone shaping for sticks, single axes and analog triggers.
//!
//! A deadzone `d` is a magnitude in `[0, 0x8000]`. Inputs inside it collapse
//! to zero and the remaining travel is stretched back to full range, so slow
//! movements stay possible just outside the deadzone. Every result saturates
//! at [`AXIS_MAX`].

/// Largest magnitude written to a register image.
pub const AXIS_MAX: i32 = 32767;

/// Full analog travel used as the rescale reference.
const RANGE: i32 = 0x8000;

/// Converts a percentage in `[0, 100]` into a deadzone magnitude.
pub fn from_percent(percent: u32) -> i32 {
    (percent as f32 * 0.01 * RANGE as f32) as i32
}

fn scale(deadzone: i32) -> f32 {
    RANGE as f32 / (RANGE - deadzone) as f32
}

fn clamp_axis(value: i32) -> i32 {
    value.clamp(-AXIS_MAX, AXIS_MAX)
}

/// Polar deadzone for a 2-D stick.
pub fn radial(x: i32, y: i32, deadzone: i32) -> (i32, i32) {
    if deadzone <= 0 {
        return (clamp_axis(x), clamp_axis(y));
    }

    let (fx, fy) = (f64::from(x), f64::from(y));
    let radius = (fx * fx + fy * fy).sqrt();
    if radius <= f64::from(deadzone) || deadzone >= RANGE {
        return (0, 0);
    }

    let angle = fy.atan2(fx);
    let radius = (radius - f64::from(deadzone)) * f64::from(scale(deadzone));
    (
        clamp_axis((radius * angle.cos()).round() as i32),
        clamp_axis((radius * angle.sin()).round() as i32),
    )
}

/// Symmetric deadzone for a single signed axis.
pub fn linear(value: i32, deadzone: i32) -> i32 {
    if deadzone <= 0 {
        return clamp_axis(value);
    }

    let magnitude = value.abs();
    if magnitude <= deadzone {
        return 0;
    }

    let scaled = ((magnitude - deadzone) as f32 * scale(deadzone)).round() as i32;
    clamp_axis(scaled * value.signum())
}

/// One-sided deadzone for an analog trigger. Negative readings count as
/// released.
pub fn trigger(value: i32, deadzone: i32) -> u16 {
    let value = value.max(0);
    let shaped = if deadzone <= 0 {
        value
    } else if value > deadzone {
        ((value - deadzone) as f32 * scale(deadzone)).round() as i32
    } else {
        0
    };
    shaped.min(AXIS_MAX) as u16
}
