//! Raw bindings to the ArkUI, image framework and HiLog NDK libraries.
#![allow(non_camel_case_types, non_snake_case, dead_code)]

use std::ffi::{c_char, c_int, c_void};

macro_rules! opaque {
    ($($name:ident),* $(,)?) => {
        $(
            #[repr(C)]
            pub struct $name {
                _unused: [u8; 0],
            }
        )*
    };
}

opaque!(
    ArkUI_Node,
    ArkUI_DragAction,
    ArkUI_DragAndDropInfo,
    ArkUI_DragEvent,
    OH_PixelmapNative,
    OH_Pixelmap_InitializationOptions,
    OH_UdmfData,
);

pub type ArkUI_NodeHandle = *mut ArkUI_Node;
pub type ArkUI_ErrorCode = i32;
pub type Image_ErrorCode = i32;

pub type ArkUI_NativeAPIVariantKind = i32;
pub const ARKUI_NATIVE_NODE: ArkUI_NativeAPIVariantKind = 0;

pub type ArkUI_NodeType = i32;
pub const ARKUI_NODE_CUSTOM: ArkUI_NodeType = 0;

pub type ArkUI_DragStatus = i32;
pub type ArkUI_DragResult = i32;
pub const ARKUI_DRAG_RESULT_FAILED: ArkUI_DragResult = 1;

pub type LogType = c_int;
pub const LOG_APP: LogType = 0;

pub type LogLevel = c_int;
pub const LOG_DEBUG: LogLevel = 3;
pub const LOG_INFO: LogLevel = 4;
pub const LOG_WARN: LogLevel = 5;
pub const LOG_ERROR: LogLevel = 6;

pub const NATIVE_NODE_API_NAME: &[u8] = b"ArkUI_NativeNodeAPI_1\0";

pub type DragStatusListener =
    unsafe extern "C" fn(info: *mut ArkUI_DragAndDropInfo, user_data: *mut c_void);

/// Leading members of `ArkUI_NativeNodeAPI_1`. The table is only ever read
/// through a pointer handed out by ArkUI, so the tail can be left undeclared.
#[repr(C)]
pub struct ArkUI_NativeNodeAPI_1 {
    pub version: i32,
    pub createNode: Option<unsafe extern "C" fn(node_type: ArkUI_NodeType) -> ArkUI_NodeHandle>,
    pub disposeNode: Option<unsafe extern "C" fn(node: ArkUI_NodeHandle)>,
}

#[link(name = "ace_ndk.z")]
extern "C" {
    pub fn OH_ArkUI_QueryModuleInterfaceByName(
        kind: ArkUI_NativeAPIVariantKind, struct_name: *const c_char,
    ) -> *mut c_void;

    pub fn OH_ArkUI_CreateDragActionWithNode(node: ArkUI_NodeHandle) -> *mut ArkUI_DragAction;
    pub fn OH_ArkUI_DragAction_Dispose(action: *mut ArkUI_DragAction);
    pub fn OH_ArkUI_DragAction_SetPointerId(
        action: *mut ArkUI_DragAction, pointer: i32,
    ) -> ArkUI_ErrorCode;
    pub fn OH_ArkUI_DragAction_SetPixelMaps(
        action: *mut ArkUI_DragAction, pixelmap_array: *mut *mut OH_PixelmapNative, size: i32,
    ) -> ArkUI_ErrorCode;
    pub fn OH_ArkUI_DragAction_SetTouchPointX(
        action: *mut ArkUI_DragAction, x: f32,
    ) -> ArkUI_ErrorCode;
    pub fn OH_ArkUI_DragAction_SetTouchPointY(
        action: *mut ArkUI_DragAction, y: f32,
    ) -> ArkUI_ErrorCode;
    pub fn OH_ArkUI_DragAction_SetData(
        action: *mut ArkUI_DragAction, data: *mut OH_UdmfData,
    ) -> ArkUI_ErrorCode;
    pub fn OH_ArkUI_DragAction_RegisterStatusListener(
        action: *mut ArkUI_DragAction, user_data: *mut c_void, listener: Option<DragStatusListener>,
    ) -> ArkUI_ErrorCode;
    pub fn OH_ArkUI_StartDrag(action: *mut ArkUI_DragAction) -> ArkUI_ErrorCode;

    pub fn OH_ArkUI_DragAndDropInfo_GetDragStatus(
        info: *mut ArkUI_DragAndDropInfo,
    ) -> ArkUI_DragStatus;
    pub fn OH_ArkUI_DragAndDropInfo_GetDragEvent(
        info: *mut ArkUI_DragAndDropInfo,
    ) -> *mut ArkUI_DragEvent;
    pub fn OH_ArkUI_DragEvent_GetTouchPointXToWindow(event: *mut ArkUI_DragEvent) -> f32;
    pub fn OH_ArkUI_DragEvent_GetTouchPointYToWindow(event: *mut ArkUI_DragEvent) -> f32;
    pub fn OH_ArkUI_DragEvent_GetDragResult(
        event: *mut ArkUI_DragEvent, result: *mut ArkUI_DragResult,
    ) -> ArkUI_ErrorCode;
}

#[link(name = "pixelmap")]
extern "C" {
    pub fn OH_PixelmapInitializationOptions_Create(
        options: *mut *mut OH_Pixelmap_InitializationOptions,
    ) -> Image_ErrorCode;
    pub fn OH_PixelmapInitializationOptions_SetWidth(
        options: *mut OH_Pixelmap_InitializationOptions, width: u32,
    ) -> Image_ErrorCode;
    pub fn OH_PixelmapInitializationOptions_SetHeight(
        options: *mut OH_Pixelmap_InitializationOptions, height: u32,
    ) -> Image_ErrorCode;
    pub fn OH_PixelmapInitializationOptions_SetRowStride(
        options: *mut OH_Pixelmap_InitializationOptions, row_stride: i32,
    ) -> Image_ErrorCode;
    pub fn OH_PixelmapInitializationOptions_SetPixelFormat(
        options: *mut OH_Pixelmap_InitializationOptions, pixel_format: i32,
    ) -> Image_ErrorCode;
    pub fn OH_PixelmapInitializationOptions_SetAlphaType(
        options: *mut OH_Pixelmap_InitializationOptions, alpha_type: i32,
    ) -> Image_ErrorCode;
    pub fn OH_PixelmapInitializationOptions_Release(
        options: *mut OH_Pixelmap_InitializationOptions,
    ) -> Image_ErrorCode;

    pub fn OH_PixelmapNative_CreatePixelmap(
        data: *mut u8, data_length: usize, options: *mut OH_Pixelmap_InitializationOptions,
        pixelmap: *mut *mut OH_PixelmapNative,
    ) -> Image_ErrorCode;
    pub fn OH_PixelmapNative_Scale(
        pixelmap: *mut OH_PixelmapNative, scale_x: f32, scale_y: f32,
    ) -> Image_ErrorCode;
    pub fn OH_PixelmapNative_Release(pixelmap: *mut OH_PixelmapNative) -> Image_ErrorCode;
}

#[link(name = "hilog_ndk.z")]
extern "C" {
    pub fn OH_LOG_Print(
        log_type: LogType, level: LogLevel, domain: u32, tag: *const c_char, fmt: *const c_char, ...
    ) -> c_int;
}
