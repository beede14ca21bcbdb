//! Native drag source for OpenHarmony ArkUI.
//!
//! The crate turns an RGBA image into a native pixel map, starts an ArkUI drag
//! action carrying that image and a UDMF payload, and reports the end of the
//! drag back to the embedder as a [`DragEvent`].
//!
//! All toolkit calls go through the [`PixelMapToolkit`] and [`DragToolkit`]
//! traits. On OpenHarmony they are implemented by the `ohos` backend.

mod drag;
mod error;
mod event;
mod pixel_map;
mod session;
mod toolkit;

#[cfg(target_env = "ohos")]
pub mod ohos;

pub use drag::*;
pub use error::*;
pub use event::*;
pub use pixel_map::*;
pub use session::*;
pub use toolkit::*;
