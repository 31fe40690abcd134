//! Form label component.

use leptos::prelude::*;

/// Label bound to a form control through `for`.
#[component]
pub fn Label(
    /// ID of the labelled control.
    html_for: &'static str,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let classes = format!(
        "flex items-center gap-2 text-sm font-medium leading-none select-none \
         peer-disabled:cursor-not-allowed peer-disabled:opacity-50 {class}"
    );

    view! {
        <label data-slot="label" for=html_for class=classes>
            {children()}
        </label>
    }
}
