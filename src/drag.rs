use std::mem::ManuallyDrop;

use crate::error::DragError;
use crate::pixel_map::PixelMap;
use crate::toolkit::{check_call, DragToolkit, PixelMapToolkit};

/// Only single-pointer drags are supported.
pub const DRAG_POINTER_ID: i32 = 0;

struct NodeGuard<'t, T: DragToolkit> {
    toolkit: &'t T,
    node: T::Node,
}

impl<'t, T: DragToolkit> Drop for NodeGuard<'t, T> {
    fn drop(&mut self) {
        self.toolkit.dispose_node(self.node);
    }
}

struct ActionGuard<'t, T: DragToolkit> {
    toolkit: &'t T,
    action: T::Action,
}

impl<'t, T: DragToolkit> Drop for ActionGuard<'t, T> {
    fn drop(&mut self) {
        self.toolkit.dispose_drag_action(self.action);
    }
}

/// Starts a native drag showing `pixel_map` and carrying `payload`.
///
/// `touch_x` and `touch_y` are the window-relative position of the pointer
/// that started the gesture. The drag itself runs on the toolkit's event loop
/// after this returns; its end is reported through
/// [`set_drag_end_handler`](crate::set_drag_end_handler).
///
/// Only a failure to create the node or the drag action is returned. Failed
/// configuration calls are logged and the drag is still started.
pub fn start_drag<T, P>(
    toolkit: &T, payload: T::Payload, pixel_map: &PixelMap<'_, P>, touch_x: i32, touch_y: i32,
) -> Result<(), DragError>
where
    T: DragToolkit,
    P: PixelMapToolkit<PixelMap = T::PixelMap>,
{
    let node = match toolkit.create_node() {
        Some(node) => NodeGuard { toolkit, node },
        None => {
            log::warn!("create node failed");
            return Err(DragError::CreateNode);
        }
    };
    // Declared after the node so it is disposed first.
    let action_guard = match toolkit.create_drag_action(node.node) {
        Some(action) => ActionGuard { toolkit, action },
        None => {
            log::warn!("create drag action failed");
            return Err(DragError::CreateDragAction);
        }
    };
    let action = action_guard.action;

    let _ = check_call(toolkit.set_pixel_maps(action, &[pixel_map.handle()]), "set pixel maps");
    let _ = check_call(toolkit.set_pointer_id(action, DRAG_POINTER_ID), "set pointer id");
    let _ = check_call(toolkit.set_touch_point_x(action, touch_x as f32), "set touch point x");
    let _ = check_call(toolkit.set_touch_point_y(action, touch_y as f32), "set touch point y");
    let _ = check_call(toolkit.set_data(action, payload), "set drag data");
    let _ = check_call(toolkit.register_status_listener(action), "register drag status listener");
    let _ = check_call(toolkit.start_drag(action), "ArkUI start to drag");

    log::debug!("drag started at ({}, {})", touch_x, touch_y);
    Ok(())
}

/// Starts a drag from a caller-owned pixel map handle, as the C interface
/// receives it.
///
/// A missing handle is rejected before `load` runs, and `load` failing (the
/// toolkit is unavailable) stops the drag before any toolkit call. The handle
/// is never released here.
///
/// # Safety
///
/// `pixel_map`, if present, must be a live handle created by `images`.
pub unsafe fn start_drag_raw<T, P, L>(
    load: L, images: &P, payload: T::Payload, pixel_map: Option<P::PixelMap>, touch_x: i32,
    touch_y: i32,
) -> Result<(), DragError>
where
    T: DragToolkit<PixelMap = P::PixelMap>,
    P: PixelMapToolkit,
    L: FnOnce() -> Result<T, DragError>,
{
    let handle = pixel_map.ok_or(DragError::MissingPixelMap)?;
    let toolkit = load()?;
    // Still owned by the caller.
    let pixel_map = ManuallyDrop::new(PixelMap::from_raw(images, handle));
    start_drag(&toolkit, payload, &*pixel_map, touch_x, touch_y)
}
