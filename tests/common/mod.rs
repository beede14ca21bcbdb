#![allow(dead_code)]

use std::cell::{Cell, RefCell};

use arkui_drag::{DragToolkit, ErrorCode, PixelMapOption, PixelMapToolkit};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateOptions,
    SetOption(PixelMapOption),
    ReleaseOptions(u32),
    CreatePixelMap(Vec<u8>),
    ScalePixelMap(u32, f32, f32),
    ReleasePixelMap(u32),
    CreateNode,
    DisposeNode(u32),
    CreateDragAction(u32),
    DisposeDragAction(u32),
    SetPixelMaps(Vec<u32>),
    SetPointerId(i32),
    SetTouchPointX(f32),
    SetTouchPointY(f32),
    SetData(u32),
    RegisterStatusListener,
    StartDrag,
}

/// Toolkit double that records every call and hands out sequential ids.
#[derive(Default)]
pub struct RecordingToolkit {
    pub calls: RefCell<Vec<Call>>,
    pub next_id: Cell<u32>,
    pub fail_options: Option<i32>,
    pub fail_pixel_map: Option<i32>,
    pub fail_node: bool,
    pub fail_action: bool,
    /// Status code returned by every drag configuration call.
    pub configure_status: i32,
}

impl RecordingToolkit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, matches: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| matches(c)).count()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn next_id(&self) -> u32 {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        id
    }

    fn status(&self) -> Result<(), ErrorCode> {
        ErrorCode::check(self.configure_status)
    }
}

impl PixelMapToolkit for RecordingToolkit {
    type PixelMap = u32;
    type InitOptions = u32;

    fn create_options(&self) -> Result<u32, ErrorCode> {
        self.record(Call::CreateOptions);
        match self.fail_options {
            Some(code) => Err(ErrorCode(code)),
            None => Ok(self.next_id()),
        }
    }

    fn set_option(&self, _options: &mut u32, option: PixelMapOption) -> Result<(), ErrorCode> {
        self.record(Call::SetOption(option));
        Ok(())
    }

    fn release_options(&self, options: u32) {
        self.record(Call::ReleaseOptions(options));
    }

    fn create_pixel_map(&self, data: &mut [u8], _options: &u32) -> Result<u32, ErrorCode> {
        self.record(Call::CreatePixelMap(data.to_vec()));
        match self.fail_pixel_map {
            Some(code) => Err(ErrorCode(code)),
            None => Ok(self.next_id()),
        }
    }

    fn scale_pixel_map(&self, pixel_map: u32, x: f32, y: f32) -> Result<(), ErrorCode> {
        self.record(Call::ScalePixelMap(pixel_map, x, y));
        Ok(())
    }

    fn release_pixel_map(&self, pixel_map: u32) {
        self.record(Call::ReleasePixelMap(pixel_map));
    }
}

impl DragToolkit for RecordingToolkit {
    type Node = u32;
    type Action = u32;
    type PixelMap = u32;
    type Payload = u32;

    fn create_node(&self) -> Option<u32> {
        self.record(Call::CreateNode);
        (!self.fail_node).then(|| self.next_id())
    }

    fn dispose_node(&self, node: u32) {
        self.record(Call::DisposeNode(node));
    }

    fn create_drag_action(&self, node: u32) -> Option<u32> {
        self.record(Call::CreateDragAction(node));
        (!self.fail_action).then(|| self.next_id())
    }

    fn dispose_drag_action(&self, action: u32) {
        self.record(Call::DisposeDragAction(action));
    }

    fn set_pixel_maps(&self, _action: u32, pixel_maps: &[u32]) -> Result<(), ErrorCode> {
        self.record(Call::SetPixelMaps(pixel_maps.to_vec()));
        self.status()
    }

    fn set_pointer_id(&self, _action: u32, pointer_id: i32) -> Result<(), ErrorCode> {
        self.record(Call::SetPointerId(pointer_id));
        self.status()
    }

    fn set_touch_point_x(&self, _action: u32, x: f32) -> Result<(), ErrorCode> {
        self.record(Call::SetTouchPointX(x));
        self.status()
    }

    fn set_touch_point_y(&self, _action: u32, y: f32) -> Result<(), ErrorCode> {
        self.record(Call::SetTouchPointY(y));
        self.status()
    }

    fn set_data(&self, _action: u32, payload: u32) -> Result<(), ErrorCode> {
        self.record(Call::SetData(payload));
        self.status()
    }

    fn register_status_listener(&self, _action: u32) -> Result<(), ErrorCode> {
        self.record(Call::RegisterStatusListener);
        self.status()
    }

    fn start_drag(&self, _action: u32) -> Result<(), ErrorCode> {
        self.record(Call::StartDrag);
        self.status()
    }
}
