//! C entry points for the plugin's native side.
#![allow(non_snake_case)]

use std::ffi::c_int;
use std::ptr::{self, NonNull};
use std::sync::Once;

use super::hilog::{init_logger, LoggerConfig};
use super::sys::{OH_PixelmapNative, OH_UdmfData};
use super::toolkit::{ArkUi, IMAGE_NATIVE};
use crate::drag::start_drag_raw;
use crate::event::{clear_drag_end_handler, set_drag_end_handler, FfiDragEvent};
use crate::pixel_map::{create_pixel_map, PixelMap, PixelMapOptions};

pub type DragEndCallback = extern "C" fn(event: FfiDragEvent);

static LOGGER: Once = Once::new();

// The embedder may have installed its own logger already; keep it if so.
fn ensure_logger() {
    LOGGER.call_once(|| {
        let _ = init_logger(LoggerConfig::default());
    });
}

/// Converts `data` from RGBA to BGRA in place and wraps it in a pixel map.
/// Returns null on failure. The result must go back to [`releasePixelMap`].
///
/// # Safety
///
/// `data` must point to `data_size` writable bytes.
#[no_mangle]
pub unsafe extern "C" fn getPixelMap(
    data: *mut u8, data_size: usize, width: i32, height: i32, row_stride: i32,
) -> *mut OH_PixelmapNative {
    ensure_logger();
    if data.is_null() {
        log::warn!("get pixel map called without data");
        return ptr::null_mut();
    }
    let data = std::slice::from_raw_parts_mut(data, data_size);
    let options = PixelMapOptions::new(width.max(0) as u32, height.max(0) as u32, row_stride);
    match create_pixel_map(&IMAGE_NATIVE, data, &options) {
        Ok(pixel_map) => pixel_map.into_raw().as_ptr(),
        Err(err) => {
            log::warn!("{}", err);
            ptr::null_mut()
        }
    }
}

/// # Safety
///
/// `pixel_map` must come from [`getPixelMap`] and not have been released.
#[no_mangle]
pub unsafe extern "C" fn releasePixelMap(pixel_map: *mut OH_PixelmapNative) {
    if let Some(handle) = NonNull::new(pixel_map) {
        PixelMap::from_raw(&IMAGE_NATIVE, handle).release();
    }
}

/// Starts a drag of `data` previewed by `pixel_map`. Failures are logged.
///
/// # Safety
///
/// `pixel_map` must be live; `data` must be a valid UDMF object or null.
#[no_mangle]
pub unsafe extern "C" fn startDrag(
    data: *mut OH_UdmfData, pixel_map: *mut OH_PixelmapNative, touch_point_x: c_int,
    touch_point_y: c_int,
) {
    ensure_logger();
    let pixel_map = NonNull::new(pixel_map);
    let started = start_drag_raw(
        ArkUi::load,
        &IMAGE_NATIVE,
        data,
        pixel_map,
        touch_point_x,
        touch_point_y,
    );
    if let Err(err) = started {
        log::warn!("{}", err);
    }
}

/// Installs `callback` as the drag end handler; null removes it.
#[no_mangle]
pub extern "C" fn setDragEndCallback(callback: Option<DragEndCallback>) {
    ensure_logger();
    match callback {
        Some(callback) => set_drag_end_handler(move |event| callback(event.into())),
        None => clear_drag_end_handler(),
    }
}
