mod ffi;
mod hilog;
mod listener;
pub mod sys;
mod toolkit;

pub use ffi::*;
pub use hilog::*;
pub use toolkit::{ArkUi, ImageNative};
