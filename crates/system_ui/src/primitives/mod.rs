//! Shared structural, shell, control, and layout primitives.

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::*;

use crate::{Icon, IconName, IconSize};

mod controls;
mod layout;
mod shell;

pub use controls::{Button, EmptyState, IconButton, Switch, TextArea, TextField, ToggleRow};
pub use layout::{Cluster, Stack};
pub use shell::{
    DesktopBackdrop, DesktopIconButton, DesktopIconGrid, DesktopWindowLayer, Dock, DockButton,
    SystemBar, SystemBarGroup, WindowBody, WindowControlButton, WindowControls, WindowFrame,
    WindowTitle, WindowTitleBar,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared button variants.
pub enum ButtonVariant {
    /// Standard translucent action button.
    #[default]
    Standard,
    /// Borderless low-emphasis button.
    Ghost,
    /// High-emphasis gradient button.
    Accent,
    /// Destructive action button.
    Danger,
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Ghost => "ghost",
            Self::Accent => "accent",
            Self::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared button sizes.
pub enum ButtonSize {
    /// Compact button.
    Sm,
    /// Standard button.
    #[default]
    Md,
    /// Prominent button.
    Lg,
}

impl ButtonSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
