use std::iter::Take;
use std::slice::{Iter, IterMut};

use image::buffer::{Pixels, PixelsMut};
use image::{Pixel, Rgba, RgbaImage};

/// Row-major read access to the R, G and B channel bytes of an image.
/// The alpha channel is never yielded.
pub(crate) struct RgbChannels<'a> {
    pixels: Pixels<'a, Rgba<u8>>,
    channels: Option<Take<Iter<'a, u8>>>,
}

impl<'a> RgbChannels<'a> {
    pub fn new(image: &'a RgbaImage) -> Self {
        Self {
            pixels: image.pixels(),
            channels: None,
        }
    }
}

impl<'a> Iterator for RgbChannels<'a> {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(c) = self.channels.as_mut().and_then(Iterator::next) {
                return Some(*c);
            }
            match self.pixels.next() {
                Some(pixel) => self.channels = Some(pixel.channels().iter().take(3)),
                None => return None,
            }
        }
    }
}

/// Row-major mutable access to the R, G and B channel bytes of an image.
pub(crate) struct RgbChannelsMut<'a> {
    pixels: PixelsMut<'a, Rgba<u8>>,
    channels: Option<Take<IterMut<'a, u8>>>,
}

impl<'a> RgbChannelsMut<'a> {
    pub fn new(image: &'a mut RgbaImage) -> Self {
        Self {
            pixels: image.pixels_mut(),
            channels: None,
        }
    }
}

impl<'a> Iterator for RgbChannelsMut<'a> {
    type Item = &'a mut u8;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(c) = self.channels.as_mut().and_then(Iterator::next) {
                return Some(c);
            }
            match self.pixels.next() {
                Some(pixel) => self.channels = Some(pixel.channels_mut().iter_mut().take(3)),
                None => return None,
            }
        }
    }
}
