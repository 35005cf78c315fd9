//! Registry data model for open windows.

use app_contract::{AppId, ViewHandle};

/// One record in the registry describing an open window's identity,
/// content, and visibility.
///
/// Presentation state (position, size, maximize) is owned by the
/// presentation unit, not the registry; see [`crate::frame`].
#[derive(Debug, Clone, PartialEq)]
pub struct WindowEntry {
    /// Registry key; at most one entry per id exists at a time.
    pub id: AppId,
    /// Display label shown in the title bar.
    pub title: String,
    /// Decorative icon handle; never interpreted by registry logic.
    pub icon: ViewHandle,
    /// Hosted application view handle; never interpreted by registry logic.
    pub content: ViewHandle,
    /// Sole visibility gate: only non-minimized entries materialize as
    /// presentation units.
    pub minimized: bool,
}

/// Open request carried by [`crate::reducer::ShellAction::Open`].
///
/// Callers construct `icon`/`content` freshly per activation; when the id is
/// already registered the request only surfaces the existing window and the
/// fresh handles are dropped (there is no way to force-reset a window's
/// content short of closing it first — a known limitation, by contract).
#[derive(Debug, Clone, PartialEq)]
pub struct OpenWindowRequest {
    /// Launch key for the application.
    pub id: AppId,
    /// Title for a newly created window.
    pub title: String,
    /// Icon handle for a newly created window.
    pub icon: ViewHandle,
    /// Content handle for a newly created window.
    pub content: ViewHandle,
}

impl OpenWindowRequest {
    fn into_entry(self) -> WindowEntry {
        WindowEntry {
            id: self.id,
            title: self.title,
            icon: self.icon,
            content: self.content,
            minimized: false,
        }
    }

    /// Applies this request to `state`: creates the entry when the id is
    /// unknown, otherwise only clears `minimized` on the existing entry.
    pub(crate) fn apply(self, state: &mut ShellState) {
        match state.windows.iter_mut().find(|entry| entry.id == self.id) {
            Some(existing) => existing.minimized = false,
            None => state.windows.push(self.into_entry()),
        }
    }
}

/// Policy for what happens to a minimized window's presentation unit.
///
/// The registry only flips the `minimized` bit; whether the unit stays in
/// the view tree (keeping hosted-app state and the dragged frame alive) or
/// unmounts (resetting both on restore) is a shell configuration choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MinimizePolicy {
    /// Minimized windows stay mounted and hidden.
    #[default]
    KeepMounted,
    /// Minimized windows unmount; frame state resets on restore.
    Unmount,
}

/// The authoritative collection of currently open window entries.
///
/// Order is insertion order; later entries paint above earlier ones and
/// there is no reordering.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShellState {
    /// Open windows in insertion order.
    pub windows: Vec<WindowEntry>,
}

impl ShellState {
    /// Returns the entry for `id` when present.
    pub fn window(&self, id: &AppId) -> Option<&WindowEntry> {
        self.windows.iter().find(|entry| &entry.id == id)
    }

    /// Entries that materialize as visible presentation units, in registry
    /// order.
    pub fn visible_windows(&self) -> impl Iterator<Item = &WindowEntry> {
        self.windows.iter().filter(|entry| !entry.minimized)
    }

    /// Entries that stay in the view tree under `policy`, in registry order.
    pub fn mounted_windows(&self, policy: MinimizePolicy) -> Vec<WindowEntry> {
        self.windows
            .iter()
            .filter(|entry| match policy {
                MinimizePolicy::KeepMounted => true,
                MinimizePolicy::Unmount => !entry.minimized,
            })
            .cloned()
            .collect()
    }
}
