use std::sync::{Arc, Mutex};

use crate::drag::start_drag;
use crate::error::DragError;
use crate::event::{set_drag_end_handler, DragEvent};
use crate::pixel_map::{create_pixel_map, PixelMapOptions};
use crate::toolkit::{DragToolkit, PixelMapToolkit};

// Pointer offset from the image center, in logical pixels.
const TOUCH_POINT_OFFSET: f64 = 4.0;

/// Logical size of the dragged image on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageRect {
    pub width: f64,
    pub height: f64,
}

/// RGBA drag preview as produced by the UI framework.
#[derive(Debug, Clone, PartialEq)]
pub struct DragImage {
    pub data: Vec<u8>,
    pub width: i32,
    pub height: i32,
    pub bytes_per_row: i32,
    pub device_pixel_ratio: Option<f64>,
}

impl DragImage {
    /// Where the pointer sits on the preview, in physical pixels: just past
    /// the center of `rect`.
    pub fn touch_point(&self, rect: &ImageRect) -> (i32, i32) {
        let ratio = self.device_pixel_ratio.unwrap_or(1.0);
        let x = (rect.width / 2.0 + TOUCH_POINT_OFFSET) * ratio;
        let y = (rect.height / 2.0 + TOUCH_POINT_OFFSET) * ratio;
        (x.round() as i32, y.round() as i32)
    }

    pub fn pixel_map_options(&self) -> PixelMapOptions {
        PixelMapOptions::new(self.width.max(0) as u32, self.height.max(0) as u32, self.bytes_per_row)
    }
}

/// Starts a drag for `image` without touching the caller's pixels.
///
/// The pixel map lives only for the duration of this call; the toolkit keeps
/// its own copy for the running gesture.
pub fn begin_drag<P, T>(
    images: &P, drag: &T, image: &DragImage, rect: &ImageRect, payload: T::Payload,
) -> Result<(), DragError>
where
    P: PixelMapToolkit,
    T: DragToolkit<PixelMap = P::PixelMap>,
{
    let mut pixels = image.data.clone();
    let pixel_map = create_pixel_map(images, &mut pixels, &image.pixel_map_options())?;
    let (x, y) = image.touch_point(rect);
    let result = start_drag(drag, payload, &pixel_map, x, y);
    pixel_map.release();
    result
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOperation {
    None,
    Copy,
    Move,
    Link,
}

/// Bookkeeping for one outgoing drag.
///
/// Shared with the drag end handler, which runs on the toolkit's callback
/// thread.
#[derive(Debug, Default)]
pub struct DragSession {
    last_operation: Mutex<Option<DropOperation>>,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the operation the current drop target last accepted.
    pub fn replace_last_operation(&self, operation: DropOperation) {
        *self.last_operation.lock().unwrap_or_else(|e| e.into_inner()) = Some(operation);
    }

    pub fn last_operation(&self) -> Option<DropOperation> {
        *self.last_operation.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Resolves the operation the drag finished with.
    pub fn finish(&self, event: &DragEvent) -> DropOperation {
        if event.success {
            self.last_operation().unwrap_or(DropOperation::Copy)
        } else {
            DropOperation::None
        }
    }

    /// Resolves a drag that ended without a drag end event, e.g. because the
    /// plugin was torn down mid-gesture.
    pub fn finish_abandoned(&self) -> DropOperation {
        DropOperation::None
    }
}

/// Installs a drag end handler that resolves `session` and reports the
/// operation to `on_end`.
pub fn install_session_handler<F>(session: Arc<DragSession>, on_end: F)
where
    F: Fn(DragEvent, DropOperation) + Send + Sync + 'static,
{
    set_drag_end_handler(move |event| {
        let operation = session.finish(&event);
        log::debug!("drag session ended with {:?}", operation);
        on_end(event, operation);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(ratio: Option<f64>) -> DragImage {
        DragImage {
            data: vec![0; 16],
            width: 2,
            height: 2,
            bytes_per_row: 8,
            device_pixel_ratio: ratio,
        }
    }

    #[test]
    fn touch_point_offsets_center() {
        let rect = ImageRect { width: 100.0, height: 40.0 };
        assert_eq!(image(None).touch_point(&rect), (54, 24));
        assert_eq!(image(Some(2.0)).touch_point(&rect), (108, 48));
        assert_eq!(image(Some(1.5)).touch_point(&ImageRect { width: 3.0, height: 3.0 }), (8, 8));
    }

    #[test]
    fn options_follow_image() {
        let options = image(None).pixel_map_options();
        assert_eq!((options.width, options.height, options.row_stride), (2, 2, 8));
    }

    #[test]
    fn successful_drop_defaults_to_copy() {
        let session = DragSession::new();
        let event = DragEvent { x: 0, y: 0, success: true };
        assert_eq!(session.finish(&event), DropOperation::Copy);

        session.replace_last_operation(DropOperation::Move);
        assert_eq!(session.finish(&event), DropOperation::Move);
    }

    #[test]
    fn failed_drop_is_none() {
        let session = DragSession::new();
        session.replace_last_operation(DropOperation::Link);
        let event = DragEvent { x: 3, y: 4, success: false };
        assert_eq!(session.finish(&event), DropOperation::None);
        assert_eq!(session.last_operation(), Some(DropOperation::Link));
    }

    #[test]
    fn abandoned_drag_is_none() {
        let session = DragSession::new();
        session.replace_last_operation(DropOperation::Move);
        assert_eq!(session.finish_abandoned(), DropOperation::None);
    }
}
