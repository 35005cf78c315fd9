use super::*;

#[component]
/// Vertical flow container.
pub fn Stack(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-stack", layout_class)
            data-ui-primitive="true"
            data-ui-kind="stack"
        >
            {children()}
        </div>
    }
}

#[component]
/// Horizontal flow container.
pub fn Cluster(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-cluster", layout_class)
            data-ui-primitive="true"
            data-ui-kind="cluster"
        >
            {children()}
        </div>
    }
}
