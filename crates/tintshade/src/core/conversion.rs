use crate::Float;

/// Convert the given 24-bit RGB coordinates to floating point coordinates.
#[inline]
pub(crate) fn from_24bit(r: u8, g: u8, b: u8) -> [Float; 3] {
    [
        Float::from(r) / 255.0,
        Float::from(g) / 255.0,
        Float::from(b) / 255.0,
    ]
}

/// Convert the color coordinates to 24-bit representation.
///
/// This function scales each coordinate by 255 and rounds to the nearest
/// integer. Coordinates are expected to range `0..=1`. Even if that is not the
/// case, the conversion clamps results to the range `0x00..=0xff`, and a
/// not-a-number coordinate becomes `0x00`.
#[inline]
pub(crate) fn to_24bit(coordinates: &[Float; 3]) -> [u8; 3] {
    coordinates.map(|c| (c * 255.0).round().clamp(0.0, 255.0) as u8)
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert coordinates from RGB to HSL.
///
/// The RGB coordinates range `0..=1`. The result has hue in degrees `0..360`
/// as well as saturation and lightness in percent `0..=100`, all unrounded.
/// Achromatic colors have hue and saturation zero. If several channels share
/// the maximum, the first of red, green, and blue determines the hue formula.
pub(crate) fn rgb_to_hsl(value: &[Float; 3]) -> [Float; 3] {
    let [r, g, b] = *value;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return [0.0, 0.0, l * 100.0];
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    [h / 6.0 * 360.0, s * 100.0, l * 100.0]
}

/// Round HSL coordinates to whole degrees and percent.
///
/// A hue that rounds up to 360 wraps around to 0, so the result always has
/// hue in `0..=359` as well as saturation and lightness in `0..=100`.
pub(crate) fn round_hsl(value: &[Float; 3]) -> (u16, u8, u8) {
    let [h, s, l] = *value;
    (
        (h.round().clamp(0.0, 360.0) as u16) % 360,
        s.round().clamp(0.0, 100.0) as u8,
        l.round().clamp(0.0, 100.0) as u8,
    )
}

// --------------------------------------------------------------------------------------------------------------------

/// The role of an RGB channel within one sector of the hue circle.
#[derive(Clone, Copy, Debug)]
enum Part {
    Chroma,
    Second,
    Nil,
}

/// The six sectors of the hue circle. Each sector is half-open and assigns
/// chroma, the secondary component, and nothing to the red, green, and blue
/// channels.
const SECTORS: [(Float, Float, [Part; 3]); 6] = {
    use Part::*;
    [
        (0.0, 60.0, [Chroma, Second, Nil]),
        (60.0, 120.0, [Second, Chroma, Nil]),
        (120.0, 180.0, [Nil, Chroma, Second]),
        (180.0, 240.0, [Nil, Second, Chroma]),
        (240.0, 300.0, [Second, Nil, Chroma]),
        (300.0, 360.0, [Chroma, Nil, Second]),
    ]
};

/// Convert coordinates from HSL to RGB.
///
/// The HSL coordinates have hue in degrees as well as saturation and lightness
/// in percent. The result has RGB coordinates, which range `0..=1` for
/// in-range inputs.
///
/// The hue is not normalized. A hue outside `0..360`, including not-a-number,
/// falls into none of the six sectors and contributes no chroma. The result is
/// the gray `(m, m, m)` with `m = l - c/2`, which is darker than the gray with
/// the same lightness by half the chroma. At full saturation and 50% lightness,
/// it is black.
pub(crate) fn hsl_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    let [h, s, l] = *value;
    let s = s / 100.0;
    let l = l / 100.0;

    let c = (1.0 - l.mul_add(2.0, -1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let [r, g, b] = SECTORS
        .iter()
        .find(|&&(start, end, _)| start <= h && h < end)
        .map_or([0.0; 3], |&(_, _, parts)| {
            parts.map(|part| match part {
                Part::Chroma => c,
                Part::Second => x,
                Part::Nil => 0.0,
            })
        });

    [r + m, g + m, b + m]
}

// ====================================================================================================================
