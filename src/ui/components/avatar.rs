//! Avatar component showing a user's initials.

use leptos::prelude::*;

/// Up to two initials from a display name ("Jane Doe" -> "JD").
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

/// Round avatar with initials.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Avatar name="Jane Doe".to_string() />
/// }
/// ```
#[component]
pub fn Avatar(
    /// Display name the initials are taken from.
    #[prop(into)]
    name: String,
    /// Size class (e.g., "h-8 w-8").
    #[prop(default = "h-8 w-8")]
    size: &'static str,
) -> impl IntoView {
    let container_classes = format!("relative flex shrink-0 overflow-hidden rounded-lg {size}");

    view! {
        <span data-slot="avatar" class=container_classes>
            <span class="flex h-full w-full items-center justify-center rounded-lg bg-panelBorder text-textMuted text-xs font-medium">
                {initials(&name)}
            </span>
        </span>
    }
}
