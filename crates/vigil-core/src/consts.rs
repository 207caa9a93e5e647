/// Neutral value used to pre-fill padded grayscale buffers; the convolution
/// reads it wherever the averaging window overlaps the frame border.
pub const PAD_VALUE: u8 = 128;

/// Luminance coefficient for the red channel.
pub const LUMA_R: f32 = 0.2989;

/// Luminance coefficient for the green channel.
pub const LUMA_G: f32 = 0.5870;

/// Luminance coefficient for the blue channel.
pub const LUMA_B: f32 = 0.1140;

/// Smallest usable video: one background frame plus two frames to compare.
pub const MIN_FRAME_COUNT: usize = 3;

/// Default kernel size (pixels per side of the averaging window).
pub const DEFAULT_KSIZE: usize = 3;

/// Default detection threshold: fraction of pixels that must differ from the
/// background for a frame to count as detected.
pub const DEFAULT_THRESHOLD: f32 = 0.05;

/// Default number of grayscale-stage helper threads in the pipelined farm.
pub const DEFAULT_GRAY_WORKERS: usize = 4;

/// Default number of convolution-stage helper threads in the pipelined farm.
pub const DEFAULT_CONV_WORKERS: usize = 8;
