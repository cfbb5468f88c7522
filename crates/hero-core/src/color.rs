use glam::Vec3;

/// HSL to RGB, all components in [0, 1]. Hue wraps, so `1.25` reads as `0.25`.
pub fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> Vec3 {
    let h = hue.rem_euclid(1.0);
    let s = saturation.clamp(0.0, 1.0);
    let l = lightness.clamp(0.0, 1.0);
    if s == 0.0 {
        return Vec3::splat(l);
    }
    let hi = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let lo = 2.0 * l - hi;
    Vec3::new(
        hue_to_channel(lo, hi, h + 1.0 / 3.0),
        hue_to_channel(lo, hi, h),
        hue_to_channel(lo, hi, h - 1.0 / 3.0),
    )
}

fn hue_to_channel(lo: f32, hi: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        lo + (hi - lo) * 6.0 * t
    } else if t < 0.5 {
        hi
    } else if t < 2.0 / 3.0 {
        lo + (hi - lo) * 6.0 * (2.0 / 3.0 - t)
    } else {
        lo
    }
}

pub const CYAN: Vec3 = Vec3::new(0.0, 1.0, 1.0); // #00ffff
pub const CORE_EMISSIVE: Vec3 = Vec3::new(0.0, 229.0 / 255.0, 1.0); // #00e5ff
pub const CORE_BASE: Vec3 = Vec3::new(96.0 / 255.0, 0.0, 1.0); // #6000ff
pub const WHITE: Vec3 = Vec3::ONE;
