use std::ffi::c_void;

use super::sys::*;
use crate::event::{dispatch_status, DragResult, DragStatus, DragStatusSnapshot};

/// Drag status listener registered on every drag action.
pub(crate) unsafe extern "C" fn on_drag_status(
    info: *mut ArkUI_DragAndDropInfo, _user_data: *mut c_void,
) {
    if info.is_null() {
        return;
    }
    let status = DragStatus::from_raw(OH_ArkUI_DragAndDropInfo_GetDragStatus(info));
    let event = OH_ArkUI_DragAndDropInfo_GetDragEvent(info);

    let (touch, result) = if event.is_null() {
        (None, None)
    } else {
        let touch = (
            OH_ArkUI_DragEvent_GetTouchPointXToWindow(event),
            OH_ArkUI_DragEvent_GetTouchPointYToWindow(event),
        );
        let mut raw_result = ARKUI_DRAG_RESULT_FAILED;
        let result = (OH_ArkUI_DragEvent_GetDragResult(event, &mut raw_result) == 0)
            .then(|| DragResult::from_raw(raw_result));
        (Some(touch), result)
    };

    if let Some(snapshot) = DragStatusSnapshot::from_parts(status, touch, result) {
        dispatch_status(snapshot);
    }
}
