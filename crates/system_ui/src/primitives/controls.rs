use super::*;

#[component]
/// Shared button primitive with standardized states and icon slots.
pub fn Button(
    #[prop(default = ButtonVariant::Standard)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Md)] size: ButtonSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional)] leading_icon: Option<IconName>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-button", layout_class)
            aria-label=move || aria_label.get()
            title=move || title.get()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-selected=move || bool_token(selected.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {leading_icon.map(|icon| view! { <Icon icon size=IconSize::Sm /> })}
            {children()}
        </button>
    }
}

#[component]
/// Compact icon-only button for toolbars and chrome.
pub fn IconButton(
    icon: IconName,
    #[prop(default = IconSize::Sm)] icon_size: IconSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] pressed: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-icon-button", layout_class)
            aria-label=move || aria_label.get()
            title=move || title.get()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="icon-button"
            data-ui-pressed=move || bool_token(pressed.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            <Icon icon size=icon_size />
        </button>
    }
}

#[component]
/// Single-line text input primitive.
pub fn TextField(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] autofocus: bool,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional)] on_input: Option<Callback<web_sys::Event>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
) -> impl IntoView {
    view! {
        <input
            class=merge_layout_class("ui-field", layout_class)
            placeholder=placeholder
            aria-label=aria_label
            type=input_type.unwrap_or("text")
            autofocus=autofocus
            required=required
            prop:value=move || value.get()
            data-ui-primitive="true"
            data-ui-kind="text-field"
            on:input=move |ev| {
                if let Some(on_input) = on_input.as_ref() {
                    on_input.call(ev);
                }
            }
            on:keydown=move |ev| {
                if let Some(on_keydown) = on_keydown.as_ref() {
                    on_keydown.call(ev);
                }
            }
        />
    }
}

#[component]
/// Multi-line text input primitive.
pub fn TextArea(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional)] on_input: Option<Callback<web_sys::Event>>,
) -> impl IntoView {
    view! {
        <textarea
            class=merge_layout_class("ui-field ui-field-area", layout_class)
            placeholder=placeholder
            aria-label=aria_label
            prop:value=move || value.get()
            data-ui-primitive="true"
            data-ui-kind="text-area"
            on:input=move |ev| {
                if let Some(on_input) = on_input.as_ref() {
                    on_input.call(ev);
                }
            }
        ></textarea>
    }
}

#[component]
/// Boolean toggle rendered as a switch control.
pub fn Switch(
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(into)] checked: MaybeSignal<bool>,
    on_toggle: Callback<bool>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            role="switch"
            class="ui-switch"
            aria-label=move || aria_label.get()
            aria-checked=move || bool_token(checked.get())
            data-ui-primitive="true"
            data-ui-kind="switch"
            data-ui-checked=move || bool_token(checked.get())
            on:click=move |_| on_toggle.call(!checked.get_untracked())
        >
            <span class="ui-switch-thumb" aria-hidden="true"></span>
        </button>
    }
}

#[component]
/// Labeled switch row used by settings-style panels.
pub fn ToggleRow(
    #[prop(into)] label: String,
    #[prop(optional, into)] description: Option<String>,
    #[prop(into)] checked: MaybeSignal<bool>,
    on_toggle: Callback<bool>,
) -> impl IntoView {
    let aria = label.clone();

    view! {
        <div class="ui-toggle-row" data-ui-primitive="true" data-ui-kind="toggle-row">
            <div class="ui-toggle-row-text">
                <span class="ui-toggle-row-label">{label}</span>
                {description.map(|text| view! { <span class="ui-toggle-row-description">{text}</span> })}
            </div>
            <Switch aria_label=aria checked on_toggle />
        </div>
    }
}

#[component]
/// Centered empty-state message for list/detail surfaces.
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(optional, into)] hint: Option<String>,
) -> impl IntoView {
    view! {
        <div class="ui-empty-state" data-ui-primitive="true" data-ui-kind="empty-state">
            <p class="ui-empty-state-title">{title}</p>
            {hint.map(|hint| view! { <p class="ui-empty-state-hint">{hint}</p> })}
        </div>
    }
}
