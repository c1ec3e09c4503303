//! Capacity arithmetic relating image dimensions to embeddable bytes.

/// color channels carrying payload bits per pixel, alpha is excluded
pub const CHANNELS_PER_PIXEL: usize = 3;

/// Maximum number of whole payload bytes that fit into an image of the given
/// dimensions at the given bit depth. Returns 0 for zero-area images.
///
/// Only the R, G and B channels carry payload bits. Alpha is left alone to
/// avoid visibly altering transparency.
pub fn max_bytes(width: u32, height: u32, bits_per_channel: u8) -> usize {
    width as usize * height as usize * CHANNELS_PER_PIXEL * bits_per_channel as usize / 8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_compute_capacity_at_one_bit_per_channel() {
        // 100 * 100 * 3 / 8
        assert_eq!(max_bytes(100, 100, 1), 3750);
    }

    #[test]
    fn should_scale_with_the_bit_depth() {
        assert_eq!(max_bytes(100, 100, 2), 7500);
        assert_eq!(max_bytes(100, 100, 8), 30000);
    }

    #[test]
    fn should_floor_partial_bytes() {
        // 5 * 5 * 3 = 75 bits -> 9 whole bytes
        assert_eq!(max_bytes(5, 5, 1), 9);
    }

    #[test]
    fn should_be_zero_for_zero_area_images() {
        assert_eq!(max_bytes(0, 100, 1), 0);
        assert_eq!(max_bytes(100, 0, 1), 0);
    }
}
