//! Canonical application catalog backing every launcher surface.
//!
//! The desktop icon grid and the dock are two filtered views over this one
//! table; neither carries its own app list.

use app_contract::{AppId, ViewHandle};
use leptos::*;
use system_ui::{Icon, IconName, IconSize};

use crate::model::OpenWindowRequest;

use desktop_app_browser::BrowserApp;
use desktop_app_calculator::CalculatorApp;
use desktop_app_notes::NotesApp;
use desktop_app_settings::SettingsApp;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One launchable application as the launcher surfaces see it.
pub struct AppDescriptor {
    /// Stable launch key.
    pub id: &'static str,
    /// Launcher label and initial window title.
    pub name: &'static str,
    /// Catalog icon.
    pub icon: IconName,
    /// Accent token consumed by launcher CSS.
    pub accent: &'static str,
    /// Whether the desktop icon grid shows this app.
    pub show_on_desktop: bool,
    /// Whether the dock shows this app.
    pub show_in_dock: bool,
    content: fn() -> View,
}

const APP_CATALOG: [AppDescriptor; 6] = [
    AppDescriptor {
        id: "browser",
        name: "Browser",
        icon: IconName::Globe,
        accent: "purple-pink",
        show_on_desktop: true,
        show_in_dock: true,
        content: render_browser,
    },
    AppDescriptor {
        id: "calculator",
        name: "Calculator",
        icon: IconName::Calculator,
        accent: "violet-purple",
        show_on_desktop: true,
        show_in_dock: true,
        content: render_calculator,
    },
    AppDescriptor {
        id: "notes",
        name: "Notes",
        icon: IconName::DocumentText,
        accent: "pink-rose",
        show_on_desktop: true,
        show_in_dock: true,
        content: render_notes,
    },
    AppDescriptor {
        id: "photos",
        name: "Photos",
        icon: IconName::Image,
        accent: "blue-violet",
        show_on_desktop: true,
        show_in_dock: false,
        content: render_photos_placeholder,
    },
    AppDescriptor {
        id: "music",
        name: "Music",
        icon: IconName::MusicNote,
        accent: "indigo-purple",
        show_on_desktop: true,
        show_in_dock: false,
        content: render_music_placeholder,
    },
    AppDescriptor {
        id: "settings",
        name: "Settings",
        icon: IconName::Settings,
        accent: "slate-gray",
        show_on_desktop: true,
        show_in_dock: true,
        content: render_settings,
    },
];

/// The full canonical catalog.
pub fn app_catalog() -> &'static [AppDescriptor] {
    &APP_CATALOG
}

/// Apps shown on the desktop icon grid, in catalog order.
pub fn desktop_apps() -> Vec<AppDescriptor> {
    app_catalog()
        .iter()
        .copied()
        .filter(|entry| entry.show_on_desktop)
        .collect()
}

/// Apps shown in the dock, in catalog order.
pub fn dock_apps() -> Vec<AppDescriptor> {
    app_catalog()
        .iter()
        .copied()
        .filter(|entry| entry.show_in_dock)
        .collect()
}

impl AppDescriptor {
    /// Registry key for this application.
    pub fn app_id(&self) -> AppId {
        AppId::trusted(self.id)
    }

    /// Builds an open request with freshly constructed icon and content
    /// handles for one activation.
    pub fn open_request(&self) -> OpenWindowRequest {
        let icon = self.icon;
        let content = self.content;
        OpenWindowRequest {
            id: self.app_id(),
            title: self.name.to_string(),
            icon: ViewHandle::new(move || {
                view! { <Icon icon=icon size=IconSize::Sm /> }.into_view()
            }),
            content: ViewHandle::new(move || content()),
        }
    }
}

fn render_browser() -> View {
    view! { <BrowserApp /> }.into_view()
}

fn render_calculator() -> View {
    view! { <CalculatorApp /> }.into_view()
}

fn render_notes() -> View {
    view! { <NotesApp /> }.into_view()
}

fn render_settings() -> View {
    view! { <SettingsApp /> }.into_view()
}

fn render_photos_placeholder() -> View {
    render_coming_soon("Photos app coming soon...")
}

fn render_music_placeholder() -> View {
    render_coming_soon("Music app coming soon...")
}

fn render_coming_soon(message: &'static str) -> View {
    view! {
        <div class="app app-placeholder">
            <p>{message}</p>
        </div>
    }
    .into_view()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn catalog_ids_are_unique_and_valid() {
        let mut seen = HashSet::new();
        for entry in app_catalog() {
            assert!(AppId::new(entry.id).is_ok(), "invalid id {}", entry.id);
            assert!(seen.insert(entry.id), "duplicate id {}", entry.id);
        }
    }

    #[test]
    fn dock_is_a_subset_of_the_desktop_grid() {
        let desktop: HashSet<&str> = desktop_apps().iter().map(|entry| entry.id).collect();
        for entry in dock_apps() {
            assert!(desktop.contains(entry.id), "{} missing from desktop", entry.id);
        }
        assert!(desktop_apps().len() > dock_apps().len());
    }

    #[test]
    fn both_surfaces_preserve_catalog_order() {
        let order: Vec<&str> = app_catalog().iter().map(|entry| entry.id).collect();
        let desktop: Vec<&str> = desktop_apps().iter().map(|entry| entry.id).collect();
        let dock: Vec<&str> = dock_apps().iter().map(|entry| entry.id).collect();

        let mut desktop_iter = order.iter();
        for id in &desktop {
            assert!(desktop_iter.any(|candidate| candidate == id));
        }
        let mut dock_iter = order.iter();
        for id in &dock {
            assert!(dock_iter.any(|candidate| candidate == id));
        }
    }
}
