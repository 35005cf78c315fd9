//! Settings app: a category sidebar over per-category panels.
//!
//! Account state comes from the auth collaborator; every other panel is
//! session-local toggle/display state owned by this window.

use leptos::*;
use platform_host::AuthService;
use system_ui::{Button, ButtonVariant, Icon, IconName, IconSize, ToggleRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SettingsCategory {
    Account,
    Notifications,
    Appearance,
    Language,
    Sound,
    Privacy,
    Storage,
    About,
}

#[derive(Clone, Copy)]
struct CategorySpec {
    category: SettingsCategory,
    label: &'static str,
    icon: IconName,
    accent: &'static str,
}

const CATEGORIES: [CategorySpec; 8] = [
    CategorySpec {
        category: SettingsCategory::Account,
        label: "Account",
        icon: IconName::Person,
        accent: "blue",
    },
    CategorySpec {
        category: SettingsCategory::Notifications,
        label: "Notifications",
        icon: IconName::DocumentText,
        accent: "purple",
    },
    CategorySpec {
        category: SettingsCategory::Appearance,
        label: "Appearance",
        icon: IconName::Image,
        accent: "pink",
    },
    CategorySpec {
        category: SettingsCategory::Language,
        label: "Language & Region",
        icon: IconName::Globe,
        accent: "green",
    },
    CategorySpec {
        category: SettingsCategory::Sound,
        label: "Sound",
        icon: IconName::MusicNote,
        accent: "orange",
    },
    CategorySpec {
        category: SettingsCategory::Privacy,
        label: "Privacy & Security",
        icon: IconName::Lock,
        accent: "red",
    },
    CategorySpec {
        category: SettingsCategory::Storage,
        label: "Storage",
        icon: IconName::Calculator,
        accent: "cyan",
    },
    CategorySpec {
        category: SettingsCategory::About,
        label: "About",
        icon: IconName::Settings,
        accent: "gray",
    },
];

fn redirect_to_lock_screen() {
    #[cfg(target_arch = "wasm32")]
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/");
    }
}

#[component]
fn InfoRow(#[prop(into)] label: String, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div class="settings-info-row">
            <span class="settings-info-label">{label}</span>
            <span class="settings-info-value">{value}</span>
        </div>
    }
}

#[component]
fn PanelHeading(
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
) -> impl IntoView {
    view! {
        <header class="settings-panel-heading">
            <h3>{title}</h3>
            <p>{subtitle}</p>
        </header>
    }
}

#[component]
/// Settings window contents.
pub fn SettingsApp() -> impl IntoView {
    let auth = expect_context::<AuthService>();
    let selected = create_rw_signal(SettingsCategory::Account);

    let notifications = create_rw_signal(true);
    let dark_mode = create_rw_signal(true);
    let sound_effects = create_rw_signal(true);
    let auto_update = create_rw_signal(true);

    let account_email = auth
        .current_user()
        .map(|user| user.email)
        .unwrap_or_else(|| "user@example.com".to_string());

    let sign_out = {
        let auth = auth.clone();
        Callback::new(move |_| {
            let auth = auth.clone();
            spawn_local(async move {
                if let Err(err) = auth.sign_out().await {
                    logging::warn!("sign out failed: {err}");
                }
                redirect_to_lock_screen();
            });
        })
    };

    let panel = move || match selected.get() {
        SettingsCategory::Account => view! {
            <PanelHeading title="Account Settings" subtitle="Manage your account and profile" />
            <div class="settings-card">
                <InfoRow label="Email" value=account_email.clone() />
                <InfoRow label="Account Type" value="Premium" />
                <InfoRow label="Member Since" value="January 2025" />
            </div>
            <Button
                variant=ButtonVariant::Danger
                layout_class="settings-sign-out"
                leading_icon=IconName::SignOut
                on_click=sign_out
            >
                "Sign Out"
            </Button>
        }
        .into_view(),
        SettingsCategory::Notifications => view! {
            <PanelHeading
                title="Notifications"
                subtitle="Configure how you receive notifications"
            />
            <div class="settings-card">
                <ToggleRow
                    label="Enable notifications"
                    description="Receive system notifications"
                    checked=notifications
                    on_toggle=Callback::new(move |value| notifications.set(value))
                />
            </div>
            <div class="settings-card">
                <ToggleRow
                    label="Sound alerts"
                    description="Play sound for notifications"
                    checked=sound_effects
                    on_toggle=Callback::new(move |value| sound_effects.set(value))
                />
            </div>
        }
        .into_view(),
        SettingsCategory::Appearance => view! {
            <PanelHeading title="Appearance" subtitle="Customize the look and feel" />
            <div class="settings-card">
                <ToggleRow
                    label="Dark mode"
                    description="Use dark theme"
                    checked=dark_mode
                    on_toggle=Callback::new(move |value| dark_mode.set(value))
                />
            </div>
            <div class="settings-card">
                <span class="settings-info-label">"Accent Color"</span>
                <div class="settings-accent-swatches">
                    {["blue", "purple", "pink", "green", "orange"]
                        .into_iter()
                        .map(|accent| {
                            view! {
                                <button
                                    type="button"
                                    class="settings-accent-swatch"
                                    data-accent=accent
                                    aria-label=format!("{accent} accent")
                                ></button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        }
        .into_view(),
        SettingsCategory::Language => view! {
            <PanelHeading
                title="Language & Region"
                subtitle="Set your language and regional preferences"
            />
            <div class="settings-card">
                <InfoRow label="Language" value="English (US)" />
                <InfoRow label="Region" value="United States" />
                <InfoRow label="Time Zone" value="PST (UTC-8)" />
            </div>
        }
        .into_view(),
        SettingsCategory::Sound => view! {
            <PanelHeading title="Sound" subtitle="Manage audio settings" />
            <div class="settings-card">
                <ToggleRow
                    label="Sound effects"
                    description="Play UI sound effects"
                    checked=sound_effects
                    on_toggle=Callback::new(move |value| sound_effects.set(value))
                />
            </div>
        }
        .into_view(),
        SettingsCategory::Privacy => view! {
            <PanelHeading
                title="Privacy & Security"
                subtitle="Control your privacy settings"
            />
            <div class="settings-card">
                <ToggleRow
                    label="Automatic updates"
                    description="Keep your system up to date"
                    checked=auto_update
                    on_toggle=Callback::new(move |value| auto_update.set(value))
                />
            </div>
        }
        .into_view(),
        SettingsCategory::Storage => view! {
            <PanelHeading title="Storage" subtitle="Manage your storage space" />
            <div class="settings-card">
                <InfoRow label="Used" value="45.2 GB of 128 GB" />
                <div class="settings-storage-meter" role="img" aria-label="35% used">
                    <div class="settings-storage-fill" style="width:35%;"></div>
                </div>
                <InfoRow label="Applications" value="12.4 GB" />
                <InfoRow label="Documents" value="8.7 GB" />
                <InfoRow label="Media" value="24.1 GB" />
            </div>
        }
        .into_view(),
        SettingsCategory::About => view! {
            <PanelHeading title="About" subtitle="System information" />
            <div class="settings-card">
                <InfoRow label="OS Version" value="Nimbus 0.1.0" />
                <InfoRow label="Build" value="2025.01.16" />
                <InfoRow label="Kernel" value="Leptos CSR" />
            </div>
        }
        .into_view(),
    };

    view! {
        <div class="app app-settings">
            <aside class="settings-sidebar">
                <h2 class="settings-sidebar-title">"Settings"</h2>
                <nav class="settings-categories">
                    {CATEGORIES
                        .iter()
                        .map(|spec| {
                            let category = spec.category;
                            view! {
                                <button
                                    type="button"
                                    class="settings-category"
                                    data-accent=spec.accent
                                    data-selected=move || (selected.get() == category).to_string()
                                    on:click=move |_| selected.set(category)
                                >
                                    <span class="settings-category-icon" aria-hidden="true">
                                        <Icon icon=spec.icon size=IconSize::Sm />
                                    </span>
                                    <span>{spec.label}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
            </aside>
            <section class="settings-panel">{panel}</section>
        </div>
    }
}
