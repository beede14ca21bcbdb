use crate::toolkit::ErrorCode;

/// Failure to build a native pixel map.
#[derive(Debug, thiserror::Error)]
pub enum PixelMapError {
    #[error("create pixel map initialization options failed, ret = {0}")]
    Options(ErrorCode),

    #[error("create pixel map failed, ret = {0}")]
    Create(ErrorCode),
}

/// Failure to start a drag.
///
/// Only failures that stop the drag from starting are reported here. Failed
/// configuration calls on a live drag action are logged and the drag still
/// starts.
#[derive(Debug, thiserror::Error)]
pub enum DragError {
    #[error("start drag called without pixel map")]
    MissingPixelMap,

    #[error("native node API is unavailable")]
    NodeApiUnavailable,

    #[error("create node failed")]
    CreateNode,

    #[error("create drag action failed")]
    CreateDragAction,

    #[error(transparent)]
    PixelMap(#[from] PixelMapError),
}
