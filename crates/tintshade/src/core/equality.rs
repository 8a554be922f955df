/// Determine the largest absolute difference between corresponding channels
/// of two 24-bit colors.
#[inline]
pub fn channel_distance(c1: &[u8; 3], c2: &[u8; 3]) -> u8 {
    c1.iter()
        .zip(c2.iter())
        .map(|(a, b)| a.abs_diff(*b))
        .max()
        .unwrap_or(0)
}

/// Test macro for asserting that two 24-bit colors differ by at most the
/// given number of units in every channel.
///
/// This macro accepts anything that converts into [`Rgb`](crate::Rgb) for the
/// two colors, including `[u8; 3]` arrays.
///
/// # Panics
///
/// This macro panics if any channel differs by more than the tolerance. Its
/// message places the colors below each other at the beginning of subsequent
/// lines for easy comparability.
#[macro_export]
macro_rules! assert_close_rgb {
    ($c1:expr, $c2:expr, $tolerance:expr $(,)?) => {
        let (c1, c2): ($crate::Rgb, $crate::Rgb) = ($c1.into(), $c2.into());
        let distance = $crate::channel_distance(c1.as_ref(), c2.as_ref());
        assert!(
            distance <= $tolerance,
            "colors differ by {} > {} units:\n{}\n{}",
            distance,
            $tolerance,
            c1,
            c2
        );
    };
}
