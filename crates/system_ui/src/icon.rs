//! Centralized icon abstraction for the desktop shell.
//!
//! Semantic icon identifiers plus a single SVG renderer so shell and app
//! components never embed raw icon strings or ad hoc SVG snippets. The
//! catalog is a hand-kept set of simple 24px glyphs.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Semantic icon identifiers used by shell and app components.
pub enum IconName {
    /// Browser app icon.
    Globe,
    /// Calculator app icon.
    Calculator,
    /// Notes / text document app icon.
    DocumentText,
    /// Photos app icon.
    Image,
    /// Music app icon.
    MusicNote,
    /// Settings app icon.
    Settings,
    /// Network status glyph.
    Wifi,
    /// Battery status glyph.
    Battery,
    /// Signed-in user glyph.
    Person,
    /// Locked session glyph.
    Lock,
    /// Sign-out action glyph.
    SignOut,
    /// Window minimize control.
    WindowMinimize,
    /// Window maximize control.
    WindowMaximize,
    /// Window restore control.
    WindowRestore,
    /// Dismiss / close glyph.
    Dismiss,
    /// Add / new-item glyph.
    Add,
    /// Delete glyph.
    Delete,
    /// Favorite (outline) glyph.
    Star,
    /// Favorite (active) glyph.
    StarFilled,
    /// Back navigation glyph.
    ArrowLeft,
    /// Forward navigation glyph.
    ArrowRight,
    /// Reload glyph.
    ArrowClockwise,
    /// Home navigation glyph.
    Home,
}

impl IconName {
    /// Stable string token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Globe => "globe",
            Self::Calculator => "calculator",
            Self::DocumentText => "document-text",
            Self::Image => "image",
            Self::MusicNote => "music-note",
            Self::Settings => "settings",
            Self::Wifi => "wifi",
            Self::Battery => "battery",
            Self::Person => "person",
            Self::Lock => "lock",
            Self::SignOut => "sign-out",
            Self::WindowMinimize => "window-minimize",
            Self::WindowMaximize => "window-maximize",
            Self::WindowRestore => "window-restore",
            Self::Dismiss => "dismiss",
            Self::Add => "add",
            Self::Delete => "delete",
            Self::Star => "star",
            Self::StarFilled => "star-filled",
            Self::ArrowLeft => "arrow-left",
            Self::ArrowRight => "arrow-right",
            Self::ArrowClockwise => "arrow-clockwise",
            Self::Home => "home",
        }
    }

    /// Inner SVG markup for the icon body (24px viewBox, currentColor).
    fn svg_body(self) -> &'static str {
        match self {
            Self::Globe => {
                r#"<path d="M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20Zm0 1.5c.93 0 2.1 1.14 2.94 3.4.25.68.46 1.44.62 2.27H8.44c.16-.83.37-1.59.62-2.27.84-2.26 2-3.4 2.94-3.4Zm-4.1 1.08a13.6 13.6 0 0 0-1 4.59H4.13A8.52 8.52 0 0 1 7.9 4.58Zm8.2 0a8.52 8.52 0 0 1 3.77 4.59h-2.78a13.6 13.6 0 0 0-.99-4.59ZM4.13 13.83h2.78c.1 1.66.45 3.23 1 4.59a8.52 8.52 0 0 1-3.78-4.59Zm4.31 0h7.12a12.1 12.1 0 0 1-.62 2.27c-.84 2.26-2 3.4-2.94 3.4-.93 0-2.1-1.14-2.94-3.4a12.1 12.1 0 0 1-.62-2.27Zm8.65 0h2.78a8.52 8.52 0 0 1-3.77 4.59c.54-1.36.88-2.93.99-4.59Zm3.28-1.5h-3.2a22.3 22.3 0 0 0 0-2.66h3.2a8.6 8.6 0 0 1 0 2.66Zm-4.7 0H8.33a20.6 20.6 0 0 1 0-2.66h7.34a20.6 20.6 0 0 1 0 2.66Zm-8.84 0h-3.2a8.6 8.6 0 0 1 0-2.66h3.2a22.3 22.3 0 0 0 0 2.66Z"/>"#
            }
            Self::Calculator => {
                r#"<path d="M6.14 2A3.14 3.14 0 0 0 3 5.14v13.72C3 20.6 4.4 22 6.14 22h11.72c1.74 0 3.14-1.4 3.14-3.14V5.14C21 3.4 19.6 2 17.86 2H6.14ZM4.5 5.14c0-.9.73-1.64 1.64-1.64h11.72c.9 0 1.64.73 1.64 1.64v13.72c0 .9-.73 1.64-1.64 1.64H6.14c-.9 0-1.64-.73-1.64-1.64V5.14ZM7.75 5C6.78 5 6 5.78 6 6.75v1.5c0 .97.78 1.75 1.75 1.75h8.5c.97 0 1.75-.78 1.75-1.75v-1.5C18 5.78 17.22 5 16.25 5h-8.5ZM7.5 6.75c0-.14.11-.25.25-.25h8.5c.14 0 .25.11.25.25v1.5c0 .14-.11.25-.25.25h-8.5a.25.25 0 0 1-.25-.25v-1.5Zm.25 5.5a1.25 1.25 0 1 0 0 2.5 1.25 1.25 0 0 0 0-2.5Zm4.25 0a1.25 1.25 0 1 0 0 2.5 1.25 1.25 0 0 0 0-2.5Zm4.25 0a1.25 1.25 0 1 0 0 2.5 1.25 1.25 0 0 0 0-2.5ZM7.75 16.5a1.25 1.25 0 1 0 0 2.5 1.25 1.25 0 0 0 0-2.5Zm4.25 0a1.25 1.25 0 1 0 0 2.5 1.25 1.25 0 0 0 0-2.5Zm4.25 0a1.25 1.25 0 1 0 0 2.5 1.25 1.25 0 0 0 0-2.5Z"/>"#
            }
            Self::DocumentText => {
                r#"<path d="M8.75 11.5a.75.75 0 0 0 0 1.5h6.5a.75.75 0 0 0 0-1.5h-6.5Zm0 2.75a.75.75 0 0 0 0 1.5h6.5a.75.75 0 0 0 0-1.5h-6.5Zm0 2.75a.75.75 0 0 0 0 1.5h6.5a.75.75 0 0 0 0-1.5h-6.5Zm4.84-14.41L19.4 8.4A2 2 0 0 1 20 9.83V20a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V4c0-1.1.9-2 2-2h6.17c.52 0 1.05.22 1.42.59ZM18 20.5a.5.5 0 0 0 .5-.5V10H14a2 2 0 0 1-2-2V3.5H6a.5.5 0 0 0-.5.5v16c0 .27.22.5.5.5h12Zm-.62-12L13.5 4.62V8c0 .28.22.5.5.5h3.38Z"/>"#
            }
            Self::Image => {
                r#"<path d="M6.25 3A3.25 3.25 0 0 0 3 6.25v11.5C3 19.55 4.46 21 6.25 21h11.5c1.8 0 3.25-1.46 3.25-3.25V6.25C21 4.45 19.55 3 17.75 3H6.25ZM4.5 6.25c0-.97.78-1.75 1.75-1.75h11.5c.97 0 1.75.78 1.75 1.75v11.5c0 .33-.09.64-.25.9l-6.42-6.3a2.25 2.25 0 0 0-3.16 0l-6.42 6.3a1.74 1.74 0 0 1-.25-.9V6.25Zm11.25 2a1.75 1.75 0 1 1-3.5 0 1.75 1.75 0 0 1 3.5 0Zm-5.28 5.17 6.35 6.24c-.22.1-.47.15-.72.15H6.25c-.26 0-.5-.05-.72-.15l6.35-6.24a.75.75 0 0 1 1.05 0h-.46Z"/>"#
            }
            Self::MusicNote => {
                r#"<path d="M19.66 2.1a.75.75 0 0 1 .34.63v12.64a3.38 3.38 0 1 1-1.5-2.81V7.1l-8.5 2.27v8.51a3.38 3.38 0 1 1-1.5-2.81V5.9c0-.34.23-.64.56-.73l10-2.66c.2-.05.42-.02.6.1Zm-1.16 1.6L10 5.98v1.84l8.5-2.27V3.7ZM8.12 16.5a1.88 1.88 0 1 0 0 3.75 1.88 1.88 0 0 0 0-3.75Zm10 -2.5a1.88 1.88 0 1 0 0 3.75 1.88 1.88 0 0 0 0-3.75Z"/>"#
            }
            Self::Settings => {
                r#"<path d="M12 2a1 1 0 0 1 .98.8l.25 1.2a8.1 8.1 0 0 1 1.74.72l1.06-.64a1 1 0 0 1 1.24.15l1.58 1.58a1 1 0 0 1 .15 1.24l-.64 1.06c.3.55.54 1.13.72 1.74l1.2.25a1 1 0 0 1 .8.98v2.24a1 1 0 0 1-.8.98l-1.2.25a8.1 8.1 0 0 1-.72 1.74l.64 1.06a1 1 0 0 1-.15 1.24l-1.58 1.58a1 1 0 0 1-1.24.15l-1.06-.64a8.1 8.1 0 0 1-1.74.72l-.25 1.2a1 1 0 0 1-.98.8H9.76a1 1 0 0 1-.98-.8l-.25-1.2a8.1 8.1 0 0 1-1.74-.72l-1.06.64a1 1 0 0 1-1.24-.15l-1.58-1.58a1 1 0 0 1-.15-1.24l.64-1.06a8.1 8.1 0 0 1-.72-1.74l-1.2-.25a1 1 0 0 1-.8-.98V9.76a1 1 0 0 1 .8-.98l1.2-.25c.18-.61.42-1.19.72-1.74l-.64-1.06a1 1 0 0 1 .15-1.24l1.58-1.58a1 1 0 0 1 1.24-.15l1.06.64c.55-.3 1.13-.54 1.74-.72l.25-1.2A1 1 0 0 1 9.76 2H12Zm-1 6a3 3 0 1 0 0 6 3 3 0 0 0 0-6Zm0 1.5a1.5 1.5 0 1 1 0 3 1.5 1.5 0 0 1 0-3Z"/>"#
            }
            Self::Wifi => {
                r#"<path d="M17.74 10.75c.6.6 1.1 1.3 1.5 2.07a.75.75 0 1 1-1.34.68 6.56 6.56 0 0 0-11.71-.02.75.75 0 1 1-1.34-.67 8.06 8.06 0 0 1 12.9-2.06Zm-2.1 3.07c.45.45.82 1 1.08 1.58a.75.75 0 1 1-1.38.6A3.6 3.6 0 0 0 8.75 16a.75.75 0 1 1-1.37-.6 5.1 5.1 0 0 1 8.26-1.57Zm4.8-5.54c.52.5 1 1.09 1.42 1.7a.75.75 0 1 1-1.24.85 10.45 10.45 0 0 0-17.23 0 .75.75 0 0 1-1.23-.86 11.95 11.95 0 0 1 18.29-1.69Zm-7.38 8.16a1.5 1.5 0 1 1-2.12 2.12 1.5 1.5 0 0 1 2.12-2.12Z"/>"#
            }
            Self::Battery => {
                r#"<path d="M5.25 7A3.25 3.25 0 0 0 2 10.25v3.5C2 15.55 3.46 17 5.25 17h11.5c1.8 0 3.25-1.46 3.25-3.25v-3.5C20 8.45 18.55 7 16.75 7H5.25ZM3.5 10.25c0-.97.78-1.75 1.75-1.75h11.5c.97 0 1.75.78 1.75 1.75v3.5c0 .97-.78 1.75-1.75 1.75H5.25c-.97 0-1.75-.78-1.75-1.75v-3.5ZM5 10.5c0-.28.22-.5.5-.5h8c.28 0 .5.22.5.5v3a.5.5 0 0 1-.5.5h-8a.5.5 0 0 1-.5-.5v-3Zm16 -.25a.75.75 0 0 1 1.5 0v3.5a.75.75 0 0 1-1.5 0v-3.5Z"/>"#
            }
            Self::Person => {
                r#"<path d="M12 2a5 5 0 1 0 0 10 5 5 0 0 0 0-10ZM8.5 7a3.5 3.5 0 1 1 7 0 3.5 3.5 0 0 1-7 0Zm-2.25 6A2.25 2.25 0 0 0 4 15.25v.55c0 1.42.72 2.62 1.88 3.44 1.14.8 2.7 1.26 4.5 1.26h3.24c1.8 0 3.36-.46 4.5-1.26 1.16-.82 1.88-2.02 1.88-3.44v-.55A2.25 2.25 0 0 0 17.75 13H6.25Zm-.75 2.25c0-.41.34-.75.75-.75h11.5c.41 0 .75.34.75.75v.55c0 .87-.43 1.64-1.25 2.22-.84.59-2.08.98-3.63.98h-3.24c-1.55 0-2.8-.4-3.63-.98-.82-.58-1.25-1.35-1.25-2.22v-.55Z"/>"#
            }
            Self::Lock => {
                r#"<path d="M12 2a4 4 0 0 0-4 4v2H7a3 3 0 0 0-3 3v7a3 3 0 0 0 3 3h10a3 3 0 0 0 3-3v-7a3 3 0 0 0-3-3h-1V6a4 4 0 0 0-4-4ZM9.5 6a2.5 2.5 0 0 1 5 0v2h-5V6ZM7 9.5h10c.83 0 1.5.67 1.5 1.5v7c0 .83-.67 1.5-1.5 1.5H7A1.5 1.5 0 0 1 5.5 18v-7c0-.83.67-1.5 1.5-1.5Zm5 3a1.5 1.5 0 0 0-.75 2.8v1.45a.75.75 0 0 0 1.5 0V15.3A1.5 1.5 0 0 0 12 12.5Z"/>"#
            }
            Self::SignOut => {
                r#"<path d="M12 4.25a.75.75 0 0 0-.75-.75h-5A3.25 3.25 0 0 0 3 6.75v10.5c0 1.8 1.46 3.25 3.25 3.25h5a.75.75 0 0 0 0-1.5h-5a1.75 1.75 0 0 1-1.75-1.75V6.75c0-.97.78-1.75 1.75-1.75h5c.41 0 .75-.34.75-.75Zm3.53 3.22a.75.75 0 1 0-1.06 1.06l2.72 2.72H9.75a.75.75 0 0 0 0 1.5h7.44l-2.72 2.72a.75.75 0 1 0 1.06 1.06l4-4c.3-.3.3-.77 0-1.06l-4-4Z"/>"#
            }
            Self::WindowMinimize => {
                r#"<path d="M3.75 12.5h16.5a.75.75 0 0 0 0-1.5H3.75a.75.75 0 0 0 0 1.5Z"/>"#
            }
            Self::WindowMaximize => {
                r#"<path d="M3 6.25C3 4.45 4.46 3 6.25 3h11.5C19.55 3 21 4.46 21 6.25v11.5c0 1.8-1.46 3.25-3.25 3.25H6.25A3.25 3.25 0 0 1 3 17.75V6.25ZM6.25 4.5c-.97 0-1.75.78-1.75 1.75v11.5c0 .97.78 1.75 1.75 1.75h11.5c.97 0 1.75-.78 1.75-1.75V6.25c0-.97-.78-1.75-1.75-1.75H6.25Z"/>"#
            }
            Self::WindowRestore => {
                r#"<path d="M7.52 5H6c.13-1.68 1.53-3 3.24-3h8A4.75 4.75 0 0 1 22 6.75v8a3.25 3.25 0 0 1-3 3.24v-1.5c.85-.13 1.5-.86 1.5-1.74v-8c0-1.8-1.46-3.25-3.25-3.25h-8c-.88 0-1.61.65-1.73 1.5ZM5.25 6A3.25 3.25 0 0 0 2 9.25v9.5C2 20.55 3.46 22 5.25 22h9.5c1.8 0 3.25-1.46 3.25-3.25v-9.5C18 7.45 16.55 6 14.75 6h-9.5ZM3.5 9.25c0-.97.78-1.75 1.75-1.75h9.5c.97 0 1.75.78 1.75 1.75v9.5c0 .97-.78 1.75-1.75 1.75h-9.5c-.97 0-1.75-.78-1.75-1.75v-9.5Z"/>"#
            }
            Self::Dismiss => {
                r#"<path d="m4.4 4.55.07-.08a.75.75 0 0 1 .98-.07l.08.07L12 10.94l6.47-6.47a.75.75 0 1 1 1.06 1.06L13.06 12l6.47 6.47c.27.27.3.68.07.98l-.07.08a.75.75 0 0 1-.98.07l-.08-.07L12 13.06l-6.47 6.47a.75.75 0 0 1-1.06-1.06L10.94 12 4.47 5.53a.75.75 0 0 1-.07-.98l.07-.08-.07.08Z"/>"#
            }
            Self::Add => {
                r#"<path d="M11.25 3.75a.75.75 0 0 1 1.5 0v7.5h7.5a.75.75 0 0 1 0 1.5h-7.5v7.5a.75.75 0 0 1-1.5 0v-7.5h-7.5a.75.75 0 0 1 0-1.5h7.5v-7.5Z"/>"#
            }
            Self::Delete => {
                r#"<path d="M10 2.5c-.83 0-1.5.67-1.5 1.5v.5H4.75a.75.75 0 0 0 0 1.5h.56l1.2 13.23A2.75 2.75 0 0 0 9.25 21.5h5.5a2.75 2.75 0 0 0 2.74-2.27l1.2-13.23h.56a.75.75 0 0 0 0-1.5H15.5V4c0-.83-.67-1.5-1.5-1.5h-4ZM14 4.5h-4V4h4v.5Zm-7.18 1.5h10.36l-1.18 13.1c-.06.64-.6 1.13-1.25 1.13h-5.5c-.65 0-1.19-.5-1.25-1.13L6.82 6Zm3.43 3a.75.75 0 0 1 .75.75v6.5a.75.75 0 0 1-1.5 0v-6.5a.75.75 0 0 1 .75-.75Zm3.5 0a.75.75 0 0 1 .75.75v6.5a.75.75 0 0 1-1.5 0v-6.5a.75.75 0 0 1 .75-.75Z"/>"#
            }
            Self::Star => {
                r#"<path d="M10.79 3.1c.5-1 1.93-1 2.42 0l2.36 4.78 5.27.77c1.11.16 1.55 1.52.75 2.3l-3.82 3.72.9 5.25a1.35 1.35 0 0 1-1.96 1.42L12 18.86l-4.72 2.48a1.35 1.35 0 0 1-1.96-1.42l.9-5.25-3.81-3.72c-.8-.78-.36-2.14.75-2.3l5.27-.77 2.36-4.78Zm1.21.9L9.72 8.62c-.2.4-.58.67-1.02.74l-5.1.74 3.7 3.6c.31.3.46.75.38 1.19l-.87 5.08 4.56-2.4c.4-.2.86-.2 1.26 0l4.56 2.4-.87-5.08c-.08-.44.07-.88.39-1.2l3.69-3.59-5.1-.74a1.35 1.35 0 0 1-1.02-.74L12 4Z"/>"#
            }
            Self::StarFilled => {
                r#"<path d="M10.79 3.1c.5-1 1.93-1 2.42 0l2.36 4.78 5.27.77c1.11.16 1.55 1.52.75 2.3l-3.82 3.72.9 5.25a1.35 1.35 0 0 1-1.96 1.42L12 18.86l-4.72 2.48a1.35 1.35 0 0 1-1.96-1.42l.9-5.25-3.81-3.72c-.8-.78-.36-2.14.75-2.3l5.27-.77 2.36-4.78Z"/>"#
            }
            Self::ArrowLeft => {
                r#"<path d="M10.3 4.96a.75.75 0 0 1 0 1.06L5.06 11.25h15.19a.75.75 0 0 1 0 1.5H5.06l5.25 5.23a.75.75 0 1 1-1.06 1.06l-6.53-6.51a.75.75 0 0 1 0-1.06l6.53-6.51a.75.75 0 0 1 1.06 0Z"/>"#
            }
            Self::ArrowRight => {
                r#"<path d="M13.7 4.96a.75.75 0 0 0 0 1.06l5.23 5.23H3.75a.75.75 0 0 0 0 1.5h15.18l-5.24 5.23a.75.75 0 1 0 1.06 1.06l6.53-6.51a.75.75 0 0 0 0-1.06l-6.53-6.51a.75.75 0 0 0-1.06 0Z"/>"#
            }
            Self::ArrowClockwise => {
                r#"<path d="M12 4.5A7.5 7.5 0 1 0 19.5 12a.75.75 0 0 1 1.5 0 9 9 0 1 1-2.64-6.36L19.5 4.5V3.75a.75.75 0 0 1 1.5 0v3.5c0 .41-.34.75-.75.75h-3.5a.75.75 0 0 1 0-1.5h1.7A7.48 7.48 0 0 0 12 4.5Z"/>"#
            }
            Self::Home => {
                r#"<path d="M10.55 2.53a2.25 2.25 0 0 1 2.9 0l6.75 5.69c.5.42.8 1.05.8 1.72v9.31c0 .97-.78 1.75-1.75 1.75h-3.5a1.75 1.75 0 0 1-1.75-1.75v-5.5a.25.25 0 0 0-.25-.25h-3.5a.25.25 0 0 0-.25.25v5.5c0 .97-.78 1.75-1.75 1.75h-3.5A1.75 1.75 0 0 1 3 19.25v-9.3c0-.68.3-1.31.8-1.73l6.75-5.69Zm1.93 1.14a.75.75 0 0 0-.96 0L4.77 9.36a.75.75 0 0 0-.27.58v9.31c0 .14.11.25.25.25h3.5a.25.25 0 0 0 .25-.25v-5.5c0-.97.78-1.75 1.75-1.75h3.5c.97 0 1.75.78 1.75 1.75v5.5c0 .14.11.25.25.25h3.5a.25.25 0 0 0 .25-.25v-9.3a.75.75 0 0 0-.27-.59l-6.75-5.69Z"/>"#
            }
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Standardized shell icon sizes.
pub enum IconSize {
    /// 14px compact icon (dense controls).
    Xs,
    /// 16px standard icon (window chrome, fields).
    #[default]
    Sm,
    /// 20px medium icon (system bar, dock badges).
    Md,
    /// 24px large icon (desktop launchers, dock).
    Lg,
}

impl IconSize {
    /// Pixel size for the icon.
    pub const fn px(self) -> u16 {
        match self {
            Self::Xs => 14,
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 24,
        }
    }

    /// Stable size token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[component]
/// Renders a catalog icon as an inline SVG.
pub fn Icon(
    /// Semantic icon identifier.
    icon: IconName,
    /// Standardized icon size token.
    #[prop(default = IconSize::Sm)]
    size: IconSize,
) -> impl IntoView {
    let size_px = size.px().to_string();

    view! {
        <svg
            class="ui-icon"
            data-icon=icon.token()
            data-size=size.token()
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            width=size_px.clone()
            height=size_px
            fill="currentColor"
            focusable="false"
            aria-hidden="true"
            inner_html=icon.svg_body()
        />
    }
}
