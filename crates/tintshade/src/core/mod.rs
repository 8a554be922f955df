mod conversion;
mod equality;
mod string;

// conversion
pub(crate) use conversion::{from_24bit, hsl_to_rgb, rgb_to_hsl, round_hsl, to_24bit};

// equality
#[doc(hidden)]
pub use equality::channel_distance;

// string
pub(crate) use string::{format, parse};
