use std::fmt;

use crate::pixel_map::PixelMapOption;

/// Raw status returned by an ArkUI or image framework call.
///
/// Both toolkits use `0` as their only success value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorCode(pub i32);

impl ErrorCode {
    pub const SUCCESS: i32 = 0;

    pub fn check(raw: i32) -> Result<(), ErrorCode> {
        if raw == Self::SUCCESS {
            Ok(())
        } else {
            Err(ErrorCode(raw))
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Logs a failed toolkit call and hands the result back unchanged.
pub fn check_call<T>(result: Result<T, ErrorCode>, what: &str) -> Result<T, ErrorCode> {
    if let Err(code) = &result {
        log::warn!("call arkui func {} failed, ret = {}", what, code);
    }
    result
}

/// Image framework operations needed to build a drag preview.
pub trait PixelMapToolkit {
    type PixelMap: Copy + fmt::Debug;
    type InitOptions;

    fn create_options(&self) -> Result<Self::InitOptions, ErrorCode>;

    fn set_option(
        &self, options: &mut Self::InitOptions, option: PixelMapOption,
    ) -> Result<(), ErrorCode>;

    fn release_options(&self, options: Self::InitOptions);

    /// `data` must stay valid for the duration of the call only; the toolkit
    /// copies the pixels.
    fn create_pixel_map(
        &self, data: &mut [u8], options: &Self::InitOptions,
    ) -> Result<Self::PixelMap, ErrorCode>;

    fn scale_pixel_map(&self, pixel_map: Self::PixelMap, x: f32, y: f32)
        -> Result<(), ErrorCode>;

    fn release_pixel_map(&self, pixel_map: Self::PixelMap);
}

/// ArkUI drag action operations.
pub trait DragToolkit {
    type Node: Copy + fmt::Debug;
    type Action: Copy + fmt::Debug;
    type PixelMap: Copy + fmt::Debug;
    type Payload: Copy + fmt::Debug;

    fn create_node(&self) -> Option<Self::Node>;

    fn dispose_node(&self, node: Self::Node);

    fn create_drag_action(&self, node: Self::Node) -> Option<Self::Action>;

    fn dispose_drag_action(&self, action: Self::Action);

    fn set_pixel_maps(
        &self, action: Self::Action, pixel_maps: &[Self::PixelMap],
    ) -> Result<(), ErrorCode>;

    fn set_pointer_id(&self, action: Self::Action, pointer_id: i32) -> Result<(), ErrorCode>;

    fn set_touch_point_x(&self, action: Self::Action, x: f32) -> Result<(), ErrorCode>;

    fn set_touch_point_y(&self, action: Self::Action, y: f32) -> Result<(), ErrorCode>;

    fn set_data(&self, action: Self::Action, payload: Self::Payload) -> Result<(), ErrorCode>;

    /// Registers the drag status listener that feeds
    /// [`dispatch_status`](crate::dispatch_status). No user data is attached.
    fn register_status_listener(&self, action: Self::Action) -> Result<(), ErrorCode>;

    fn start_drag(&self, action: Self::Action) -> Result<(), ErrorCode>;
}

impl<'a, T: DragToolkit + ?Sized> DragToolkit for &'a T {
    type Node = T::Node;
    type Action = T::Action;
    type PixelMap = T::PixelMap;
    type Payload = T::Payload;

    fn create_node(&self) -> Option<Self::Node> {
        (**self).create_node()
    }

    fn dispose_node(&self, node: Self::Node) {
        (**self).dispose_node(node)
    }

    fn create_drag_action(&self, node: Self::Node) -> Option<Self::Action> {
        (**self).create_drag_action(node)
    }

    fn dispose_drag_action(&self, action: Self::Action) {
        (**self).dispose_drag_action(action)
    }

    fn set_pixel_maps(
        &self, action: Self::Action, pixel_maps: &[Self::PixelMap],
    ) -> Result<(), ErrorCode> {
        (**self).set_pixel_maps(action, pixel_maps)
    }

    fn set_pointer_id(&self, action: Self::Action, pointer_id: i32) -> Result<(), ErrorCode> {
        (**self).set_pointer_id(action, pointer_id)
    }

    fn set_touch_point_x(&self, action: Self::Action, x: f32) -> Result<(), ErrorCode> {
        (**self).set_touch_point_x(action, x)
    }

    fn set_touch_point_y(&self, action: Self::Action, y: f32) -> Result<(), ErrorCode> {
        (**self).set_touch_point_y(action, y)
    }

    fn set_data(&self, action: Self::Action, payload: Self::Payload) -> Result<(), ErrorCode> {
        (**self).set_data(action, payload)
    }

    fn register_status_listener(&self, action: Self::Action) -> Result<(), ErrorCode> {
        (**self).register_status_listener(action)
    }

    fn start_drag(&self, action: Self::Action) -> Result<(), ErrorCode> {
        (**self).start_drag(action)
    }
}
