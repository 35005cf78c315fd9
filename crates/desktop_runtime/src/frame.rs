//! Presentation-unit geometry: position, size, drag, and the maximize
//! toggle.
//!
//! This state is owned by each presentation unit and is deliberately absent
//! from the registry. It resets to defaults whenever the unit remounts.

/// Default frame position for a newly mounted window.
pub const DEFAULT_FRAME_X: i32 = 100;
/// Default frame top offset for a newly mounted window.
pub const DEFAULT_FRAME_Y: i32 = 100;
/// Default frame width.
pub const DEFAULT_FRAME_W: i32 = 800;
/// Default frame height.
pub const DEFAULT_FRAME_H: i32 = 600;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Pointer position in viewport coordinates.
pub struct PointerPoint {
    /// Horizontal coordinate in px.
    pub x: i32,
    /// Vertical coordinate in px.
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Window frame rectangle in viewport coordinates.
pub struct FrameRect {
    /// Left offset in px.
    pub x: i32,
    /// Top offset in px.
    pub y: i32,
    /// Width in px.
    pub w: i32,
    /// Height in px.
    pub h: i32,
}

impl FrameRect {
    /// Returns the rect translated by `(dx, dy)`.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }
}

impl Default for FrameRect {
    fn default() -> Self {
        Self {
            x: DEFAULT_FRAME_X,
            y: DEFAULT_FRAME_Y,
            w: DEFAULT_FRAME_W,
            h: DEFAULT_FRAME_H,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Active titlebar drag: everything needed to derive the frame rect from
/// the current pointer position.
pub struct DragSession {
    /// Pointer position at drag start.
    pub pointer_start: PointerPoint,
    /// Frame rect at drag start.
    pub rect_start: FrameRect,
}

impl DragSession {
    /// Frame rect for the current pointer position.
    ///
    /// Pure translation: no snapping, no collision, no viewport clamping —
    /// a window may be dragged partially or fully off-screen.
    pub fn rect_at(&self, pointer: PointerPoint) -> FrameRect {
        self.rect_start.offset(
            pointer.x - self.pointer_start.x,
            pointer.y - self.pointer_start.y,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Complete presentation state for one window frame.
pub struct FrameState {
    /// Current frame rect.
    pub rect: FrameRect,
    /// Whether the frame fills the viewport.
    pub maximized: bool,
    /// Rect saved on maximize, restored on the next toggle.
    pub restore_rect: Option<FrameRect>,
}

impl Default for FrameState {
    fn default() -> Self {
        Self {
            rect: FrameRect::default(),
            maximized: false,
            restore_rect: None,
        }
    }
}

impl FrameState {
    /// Starts a titlebar drag; returns `None` while maximized.
    pub fn begin_drag(&self, pointer: PointerPoint) -> Option<DragSession> {
        if self.maximized {
            return None;
        }
        Some(DragSession {
            pointer_start: pointer,
            rect_start: self.rect,
        })
    }

    /// Toggles between the current rect and a viewport-filling rect.
    ///
    /// First activation saves the current rect and fills `viewport`; the
    /// second restores the exact saved rect.
    pub fn toggle_maximize(&mut self, viewport: FrameRect) {
        if self.maximized {
            if let Some(saved) = self.restore_rect.take() {
                self.rect = saved;
            }
            self.maximized = false;
        } else {
            self.restore_rect = Some(self.rect);
            self.rect = viewport;
            self.maximized = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const VIEWPORT: FrameRect = FrameRect {
        x: 0,
        y: 0,
        w: 1440,
        h: 820,
    };

    #[test]
    fn drag_translates_the_start_rect_by_pointer_delta() {
        let frame = FrameState::default();
        let session = frame
            .begin_drag(PointerPoint { x: 400, y: 120 })
            .expect("drag allowed when not maximized");

        let rect = session.rect_at(PointerPoint { x: 385, y: 180 });
        assert_eq!(rect.x, DEFAULT_FRAME_X - 15);
        assert_eq!(rect.y, DEFAULT_FRAME_Y + 60);
        assert_eq!((rect.w, rect.h), (DEFAULT_FRAME_W, DEFAULT_FRAME_H));
    }

    #[test]
    fn drag_allows_offscreen_positions() {
        let frame = FrameState::default();
        let session = frame.begin_drag(PointerPoint { x: 0, y: 0 }).unwrap();

        let rect = session.rect_at(PointerPoint { x: -900, y: -400 });
        assert_eq!(rect.x, DEFAULT_FRAME_X - 900);
        assert_eq!(rect.y, DEFAULT_FRAME_Y - 400);
    }

    #[test]
    fn maximized_frames_do_not_start_drags() {
        let mut frame = FrameState::default();
        frame.toggle_maximize(VIEWPORT);
        assert!(frame.begin_drag(PointerPoint { x: 10, y: 10 }).is_none());
    }

    #[test]
    fn maximize_round_trip_restores_the_exact_rect() {
        let mut frame = FrameState {
            rect: FrameRect {
                x: 100,
                y: 100,
                w: 800,
                h: 600,
            },
            ..FrameState::default()
        };

        frame.toggle_maximize(VIEWPORT);
        assert!(frame.maximized);
        assert_eq!(frame.rect, VIEWPORT);

        frame.toggle_maximize(VIEWPORT);
        assert!(!frame.maximized);
        assert_eq!(
            frame.rect,
            FrameRect {
                x: 100,
                y: 100,
                w: 800,
                h: 600,
            }
        );
        assert_eq!(frame.restore_rect, None);
    }

    #[test]
    fn maximize_saves_the_dragged_rect_not_the_default() {
        let mut frame = FrameState::default();
        let session = frame.begin_drag(PointerPoint { x: 0, y: 0 }).unwrap();
        frame.rect = session.rect_at(PointerPoint { x: 40, y: 25 });
        let dragged = frame.rect;

        frame.toggle_maximize(VIEWPORT);
        frame.toggle_maximize(VIEWPORT);
        assert_eq!(frame.rect, dragged);
    }
}
