use std::ffi::c_char;
use std::ptr::{self, NonNull};

use super::listener::on_drag_status;
use super::sys::*;
use crate::error::DragError;
use crate::pixel_map::PixelMapOption;
use crate::toolkit::{DragToolkit, ErrorCode, PixelMapToolkit};

/// The image framework's pixel map API.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImageNative;

pub(crate) static IMAGE_NATIVE: ImageNative = ImageNative;

impl PixelMapToolkit for ImageNative {
    type PixelMap = NonNull<OH_PixelmapNative>;
    type InitOptions = NonNull<OH_Pixelmap_InitializationOptions>;

    fn create_options(&self) -> Result<Self::InitOptions, ErrorCode> {
        let mut options = ptr::null_mut();
        ErrorCode::check(unsafe { OH_PixelmapInitializationOptions_Create(&mut options) })?;
        NonNull::new(options).ok_or(ErrorCode(-1))
    }

    fn set_option(
        &self, options: &mut Self::InitOptions, option: PixelMapOption,
    ) -> Result<(), ErrorCode> {
        let options = options.as_ptr();
        let ret = unsafe {
            match option {
                PixelMapOption::Width(width) => {
                    OH_PixelmapInitializationOptions_SetWidth(options, width)
                }
                PixelMapOption::Height(height) => {
                    OH_PixelmapInitializationOptions_SetHeight(options, height)
                }
                PixelMapOption::RowStride(stride) => {
                    OH_PixelmapInitializationOptions_SetRowStride(options, stride)
                }
                PixelMapOption::PixelFormat(format) => {
                    OH_PixelmapInitializationOptions_SetPixelFormat(options, format.to_raw())
                }
                PixelMapOption::AlphaType(alpha) => {
                    OH_PixelmapInitializationOptions_SetAlphaType(options, alpha.to_raw())
                }
            }
        };
        ErrorCode::check(ret)
    }

    fn release_options(&self, options: Self::InitOptions) {
        unsafe {
            OH_PixelmapInitializationOptions_Release(options.as_ptr());
        }
    }

    fn create_pixel_map(
        &self, data: &mut [u8], options: &Self::InitOptions,
    ) -> Result<Self::PixelMap, ErrorCode> {
        let mut pixel_map = ptr::null_mut();
        ErrorCode::check(unsafe {
            OH_PixelmapNative_CreatePixelmap(
                data.as_mut_ptr(),
                data.len(),
                options.as_ptr(),
                &mut pixel_map,
            )
        })?;
        NonNull::new(pixel_map).ok_or(ErrorCode(-1))
    }

    fn scale_pixel_map(
        &self, pixel_map: Self::PixelMap, x: f32, y: f32,
    ) -> Result<(), ErrorCode> {
        ErrorCode::check(unsafe { OH_PixelmapNative_Scale(pixel_map.as_ptr(), x, y) })
    }

    fn release_pixel_map(&self, pixel_map: Self::PixelMap) {
        unsafe {
            OH_PixelmapNative_Release(pixel_map.as_ptr());
        }
    }
}

/// ArkUI drag actions, driven through the native node API.
pub struct ArkUi {
    node_api: NonNull<ArkUI_NativeNodeAPI_1>,
}

impl ArkUi {
    /// Looks up `ArkUI_NativeNodeAPI_1`. Fails if the module is not loaded or
    /// the table lacks the node functions.
    pub fn load() -> Result<Self, DragError> {
        let api = unsafe {
            OH_ArkUI_QueryModuleInterfaceByName(
                ARKUI_NATIVE_NODE,
                NATIVE_NODE_API_NAME.as_ptr() as *const c_char,
            )
        };
        let node_api =
            NonNull::new(api as *mut ArkUI_NativeNodeAPI_1).ok_or(DragError::NodeApiUnavailable)?;
        let table = unsafe { node_api.as_ref() };
        if table.createNode.is_none() || table.disposeNode.is_none() {
            return Err(DragError::NodeApiUnavailable);
        }
        Ok(Self { node_api })
    }

    fn api(&self) -> &ArkUI_NativeNodeAPI_1 {
        unsafe { self.node_api.as_ref() }
    }
}

impl DragToolkit for ArkUi {
    type Node = NonNull<ArkUI_Node>;
    type Action = NonNull<ArkUI_DragAction>;
    type PixelMap = NonNull<OH_PixelmapNative>;
    type Payload = *mut OH_UdmfData;

    fn create_node(&self) -> Option<Self::Node> {
        let create_node = self.api().createNode?;
        NonNull::new(unsafe { create_node(ARKUI_NODE_CUSTOM) })
    }

    fn dispose_node(&self, node: Self::Node) {
        if let Some(dispose_node) = self.api().disposeNode {
            unsafe { dispose_node(node.as_ptr()) }
        }
    }

    fn create_drag_action(&self, node: Self::Node) -> Option<Self::Action> {
        NonNull::new(unsafe { OH_ArkUI_CreateDragActionWithNode(node.as_ptr()) })
    }

    fn dispose_drag_action(&self, action: Self::Action) {
        unsafe { OH_ArkUI_DragAction_Dispose(action.as_ptr()) }
    }

    fn set_pixel_maps(
        &self, action: Self::Action, pixel_maps: &[Self::PixelMap],
    ) -> Result<(), ErrorCode> {
        let mut raw: Vec<*mut OH_PixelmapNative> = pixel_maps.iter().map(|p| p.as_ptr()).collect();
        ErrorCode::check(unsafe {
            OH_ArkUI_DragAction_SetPixelMaps(action.as_ptr(), raw.as_mut_ptr(), raw.len() as i32)
        })
    }

    fn set_pointer_id(&self, action: Self::Action, pointer_id: i32) -> Result<(), ErrorCode> {
        ErrorCode::check(unsafe { OH_ArkUI_DragAction_SetPointerId(action.as_ptr(), pointer_id) })
    }

    fn set_touch_point_x(&self, action: Self::Action, x: f32) -> Result<(), ErrorCode> {
        ErrorCode::check(unsafe { OH_ArkUI_DragAction_SetTouchPointX(action.as_ptr(), x) })
    }

    fn set_touch_point_y(&self, action: Self::Action, y: f32) -> Result<(), ErrorCode> {
        ErrorCode::check(unsafe { OH_ArkUI_DragAction_SetTouchPointY(action.as_ptr(), y) })
    }

    fn set_data(&self, action: Self::Action, payload: Self::Payload) -> Result<(), ErrorCode> {
        ErrorCode::check(unsafe { OH_ArkUI_DragAction_SetData(action.as_ptr(), payload) })
    }

    fn register_status_listener(&self, action: Self::Action) -> Result<(), ErrorCode> {
        ErrorCode::check(unsafe {
            OH_ArkUI_DragAction_RegisterStatusListener(
                action.as_ptr(),
                ptr::null_mut(),
                Some(on_drag_status),
            )
        })
    }

    fn start_drag(&self, action: Self::Action) -> Result<(), ErrorCode> {
        ErrorCode::check(unsafe { OH_ArkUI_StartDrag(action.as_ptr()) })
    }
}
