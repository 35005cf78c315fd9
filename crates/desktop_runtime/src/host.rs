//! Browser environment queries behind a typed boundary.

use crate::frame::FrameRect;

/// Vertical space reserved for shell chrome (system bar + dock) when a
/// window maximizes.
pub const RESERVED_CHROME_PX: i32 = 80;

#[derive(Debug, Clone, Copy, Default)]
/// Host-side environment handle for the desktop shell.
pub struct DesktopHostContext;

impl DesktopHostContext {
    /// Creates the host context.
    pub fn new() -> Self {
        Self
    }

    /// Rectangle a maximized window should fill: the browser viewport minus
    /// reserved chrome height. Non-WASM targets get a fixed fallback so
    /// native tests stay deterministic.
    pub fn viewport_rect(&self) -> FrameRect {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let width = window
                    .inner_width()
                    .ok()
                    .and_then(|value| value.as_f64())
                    .map(|value| value as i32)
                    .unwrap_or(1024);
                let height = window
                    .inner_height()
                    .ok()
                    .and_then(|value| value.as_f64())
                    .map(|value| value as i32)
                    .unwrap_or(768);

                return FrameRect {
                    x: 0,
                    y: 0,
                    w: width.max(320),
                    h: (height - RESERVED_CHROME_PX).max(220),
                };
            }
        }

        FrameRect {
            x: 0,
            y: 0,
            w: 1024,
            h: 768 - RESERVED_CHROME_PX,
        }
    }
}
