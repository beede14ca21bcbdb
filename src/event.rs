use std::sync::{Arc, RwLock};

use once_cell::sync::Lazy;

/// Drag lifecycle stage reported by the toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragStatus {
    Unknown,
    Started,
    Ended,
}

impl DragStatus {
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            0 => DragStatus::Started,
            1 => DragStatus::Ended,
            _ => DragStatus::Unknown,
        }
    }
}

/// Outcome of a finished drag as reported by the toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragResult {
    Successful,
    Failed,
    Canceled,
}

impl DragResult {
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            0 => DragResult::Successful,
            2 => DragResult::Canceled,
            _ => DragResult::Failed,
        }
    }
}

/// Everything the status listener reads out of one toolkit callback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragStatusSnapshot {
    pub status: DragStatus,
    /// Window-relative touch point.
    pub touch_x: f32,
    pub touch_y: f32,
    pub result: DragResult,
}

impl DragStatusSnapshot {
    /// Assembles a snapshot from what the listener could read.
    ///
    /// `touch` is `None` when the callback carried no drag event, in which
    /// case there is nothing to report. `result` is `None` when the result
    /// query failed and counts as a failed drag.
    pub fn from_parts(
        status: DragStatus, touch: Option<(f32, f32)>, result: Option<DragResult>,
    ) -> Option<Self> {
        let Some((touch_x, touch_y)) = touch else {
            log::warn!("drag status {:?} without drag event", status);
            return None;
        };
        Some(Self { status, touch_x, touch_y, result: result.unwrap_or(DragResult::Failed) })
    }
}

/// A finished drag, in window pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DragEvent {
    pub x: i64,
    pub y: i64,
    pub success: bool,
}

impl DragEvent {
    /// Returns the event to forward for this snapshot, if any. Only the end of
    /// a drag is forwarded.
    pub fn from_snapshot(snapshot: &DragStatusSnapshot) -> Option<Self> {
        if snapshot.status != DragStatus::Ended {
            return None;
        }
        Some(Self {
            x: snapshot.touch_x.round() as i64,
            y: snapshot.touch_y.round() as i64,
            success: snapshot.result == DragResult::Successful,
        })
    }
}

/// C layout of [`DragEvent`] for embedders on the other side of the FFI.
///
/// The coordinates are `int64_t` on every target, so 32-bit `long` ABIs do
/// not truncate them.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FfiDragEvent {
    pub x: i64,
    pub y: i64,
    pub result: bool,
}

impl From<DragEvent> for FfiDragEvent {
    fn from(event: DragEvent) -> Self {
        Self { x: event.x, y: event.y, result: event.success }
    }
}

type DragEndHandler = Arc<dyn Fn(DragEvent) + Send + Sync>;

// The toolkit listener carries no user data, so there is one handler per process.
static DRAG_END_HANDLER: Lazy<RwLock<Option<DragEndHandler>>> = Lazy::new(|| RwLock::new(None));

/// Installs the function that receives every finished drag, replacing any
/// previous one. It is called on the toolkit's callback thread.
pub fn set_drag_end_handler<F>(handler: F)
where
    F: Fn(DragEvent) + Send + Sync + 'static,
{
    let mut slot = DRAG_END_HANDLER.write().unwrap_or_else(|e| e.into_inner());
    *slot = Some(Arc::new(handler));
}

pub fn clear_drag_end_handler() {
    let mut slot = DRAG_END_HANDLER.write().unwrap_or_else(|e| e.into_inner());
    *slot = None;
}

/// Forwards a status callback to the drag end handler.
///
/// Returns the forwarded event, or `None` if the snapshot was not a drag end.
pub fn dispatch_status(snapshot: DragStatusSnapshot) -> Option<DragEvent> {
    let event = DragEvent::from_snapshot(&snapshot)?;

    // Clone out of the lock so the handler may replace itself.
    let handler = DRAG_END_HANDLER.read().unwrap_or_else(|e| e.into_inner()).clone();
    match handler {
        Some(handler) => handler(event),
        None => log::warn!("drag ended with no handler installed: {:?}", event),
    }
    Some(event)
}
