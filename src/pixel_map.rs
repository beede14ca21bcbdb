use std::mem::ManuallyDrop;

use crate::error::PixelMapError;
use crate::toolkit::{check_call, PixelMapToolkit};

const PIXEL_BYTES: usize = 4;

/// Pixel layout handed to the image framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    Rgba8888,
    Bgra8888,
}

impl PixelFormat {
    /// Value of the image framework's `PIXEL_FORMAT` enum.
    pub fn to_raw(self) -> i32 {
        match self {
            PixelFormat::Rgba8888 => 3,
            PixelFormat::Bgra8888 => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlphaType {
    Unknown,
    Opaque,
    Premultiplied,
    Unpremultiplied,
}

impl AlphaType {
    /// Value of the image framework's `PIXELMAP_ALPHA_TYPE` enum.
    pub fn to_raw(self) -> i32 {
        match self {
            AlphaType::Unknown => 0,
            AlphaType::Opaque => 1,
            AlphaType::Premultiplied => 2,
            AlphaType::Unpremultiplied => 3,
        }
    }
}

/// One setter call on the pixel map initialization options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PixelMapOption {
    Width(u32),
    Height(u32),
    RowStride(i32),
    PixelFormat(PixelFormat),
    AlphaType(AlphaType),
}

impl PixelMapOption {
    pub fn name(&self) -> &'static str {
        match self {
            PixelMapOption::Width(_) => "set pixel map width",
            PixelMapOption::Height(_) => "set pixel map height",
            PixelMapOption::RowStride(_) => "set pixel map row stride",
            PixelMapOption::PixelFormat(_) => "set pixel map pixel format",
            PixelMapOption::AlphaType(_) => "set pixel map alpha type",
        }
    }
}

/// Shape of the pixel buffer passed to [`create_pixel_map`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelMapOptions {
    pub width: u32,
    pub height: u32,
    /// Bytes per row, including any padding.
    pub row_stride: i32,
    pub pixel_format: PixelFormat,
    pub alpha_type: AlphaType,
}

impl PixelMapOptions {
    pub fn new(width: u32, height: u32, row_stride: i32) -> Self {
        Self { width, height, row_stride, ..Default::default() }
    }

    pub fn entries(&self) -> [PixelMapOption; 5] {
        [
            PixelMapOption::Width(self.width),
            PixelMapOption::Height(self.height),
            PixelMapOption::RowStride(self.row_stride),
            PixelMapOption::PixelFormat(self.pixel_format),
            PixelMapOption::AlphaType(self.alpha_type),
        ]
    }
}

impl Default for PixelMapOptions {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            row_stride: 0,
            pixel_format: PixelFormat::Bgra8888,
            alpha_type: AlphaType::Unknown,
        }
    }
}

/// Swaps the first and third byte of every pixel, turning RGBA into BGRA (and
/// back). A trailing partial pixel is only touched if it reaches the third byte.
pub fn swap_red_blue(data: &mut [u8]) {
    for pixel in data.chunks_mut(PIXEL_BYTES) {
        if pixel.len() > 2 {
            pixel.swap(0, 2);
        }
    }
}

/// A native pixel map with a single owner.
///
/// The handle is released when this value is dropped or passed to
/// [`PixelMap::release`].
pub struct PixelMap<'t, T: PixelMapToolkit> {
    toolkit: &'t T,
    handle: T::PixelMap,
}

impl<'t, T: PixelMapToolkit> PixelMap<'t, T> {
    /// Takes ownership of a handle created by `toolkit`.
    ///
    /// # Safety
    ///
    /// `handle` must be a live pixel map that nothing else will release.
    pub unsafe fn from_raw(toolkit: &'t T, handle: T::PixelMap) -> Self {
        Self { toolkit, handle }
    }

    /// Gives up ownership without releasing the handle.
    pub fn into_raw(self) -> T::PixelMap {
        let this = ManuallyDrop::new(self);
        this.handle
    }

    pub fn handle(&self) -> T::PixelMap {
        self.handle
    }

    pub fn release(self) {
        drop(self)
    }
}

impl<'t, T: PixelMapToolkit> std::fmt::Debug for PixelMap<'t, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelMap").field("handle", &self.handle).finish()
    }
}

impl<'t, T: PixelMapToolkit> Drop for PixelMap<'t, T> {
    fn drop(&mut self) {
        self.toolkit.release_pixel_map(self.handle);
    }
}

/// Builds a BGRA pixel map from an RGBA buffer.
///
/// The buffer is converted to BGRA in place and stays that way, whether or not
/// creation succeeds. `data.len()` should match `height * row_stride`; the
/// image framework decides what happens when it does not.
pub fn create_pixel_map<'t, T: PixelMapToolkit>(
    toolkit: &'t T, data: &mut [u8], options: &PixelMapOptions,
) -> Result<PixelMap<'t, T>, PixelMapError> {
    swap_red_blue(data);

    let mut init_options =
        check_call(toolkit.create_options(), "create pixel map initialization options")
            .map_err(PixelMapError::Options)?;
    for option in options.entries() {
        let _ = check_call(toolkit.set_option(&mut init_options, option), option.name());
    }

    let created = check_call(toolkit.create_pixel_map(data, &init_options), "create pixel map");
    toolkit.release_options(init_options);
    let handle = created.map_err(PixelMapError::Create)?;

    let _ = check_call(toolkit.scale_pixel_map(handle, 1.0, 1.0), "scale pixel map");

    Ok(PixelMap { toolkit, handle })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn swaps_red_and_blue() {
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8];
        swap_red_blue(&mut data);
        assert_eq!(data, vec![3, 2, 1, 4, 7, 6, 5, 8]);
    }

    #[test]
    fn trailing_partial_pixel() {
        let mut short = vec![1, 2, 3, 4, 5, 6];
        swap_red_blue(&mut short);
        assert_eq!(short, vec![3, 2, 1, 4, 5, 6]);

        let mut long_enough = vec![1, 2, 3, 4, 5, 6, 7];
        swap_red_blue(&mut long_enough);
        assert_eq!(long_enough, vec![3, 2, 1, 4, 7, 6, 5]);
    }

    #[test]
    fn empty_buffer() {
        let mut data: Vec<u8> = Vec::new();
        swap_red_blue(&mut data);
        assert!(data.is_empty());
    }

    #[test]
    fn default_options_are_bgra_unknown_alpha() {
        let options = PixelMapOptions::new(2, 3, 8);
        assert_eq!(
            options.entries(),
            [
                PixelMapOption::Width(2),
                PixelMapOption::Height(3),
                PixelMapOption::RowStride(8),
                PixelMapOption::PixelFormat(PixelFormat::Bgra8888),
                PixelMapOption::AlphaType(AlphaType::Unknown),
            ]
        );
        assert_eq!(PixelFormat::Bgra8888.to_raw(), 4);
        assert_eq!(AlphaType::Unknown.to_raw(), 0);
    }

    proptest! {
        #[test]
        fn swapping_twice_restores_buffer(data in proptest::collection::vec(any::<u8>(), 0..256)) {
            let mut swapped = data.clone();
            swap_red_blue(&mut swapped);
            swap_red_blue(&mut swapped);
            prop_assert_eq!(swapped, data);
        }

        #[test]
        fn swap_keeps_green_and_alpha(data in proptest::collection::vec(any::<u8>(), 0..256)) {
            let mut swapped = data.clone();
            swap_red_blue(&mut swapped);
            for (i, (before, after)) in data.iter().zip(&swapped).enumerate() {
                if i % 4 == 1 || i % 4 == 3 {
                    prop_assert_eq!(before, after);
                }
            }
        }
    }
}
