//! Input component for text fields.

use leptos::prelude::*;

/// Text input component.
///
/// Required inputs also carry `aria-required="true"` so assistive tech and
/// tests can tell them apart without parsing boolean attributes.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Input
///         id="password"
///         input_type="password"
///         placeholder="Password"
///         required=true
///     />
/// }
/// ```
#[component]
pub fn Input(
    /// Input type (text, email, password, etc.).
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text.
    #[prop(default = "")]
    placeholder: &'static str,
    /// Input name attribute.
    #[prop(default = "")]
    name: &'static str,
    /// Input ID attribute, referenced by a [`Label`](super::Label).
    #[prop(default = "")]
    id: &'static str,
    /// Whether the input is required.
    #[prop(default = false)]
    required: bool,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Autocomplete attribute.
    #[prop(default = "off")]
    autocomplete: &'static str,
) -> impl IntoView {
    let base_classes = "flex h-10 w-full rounded-lg border border-panelBorder bg-background \
                        px-3 py-2 text-sm text-textPrimary placeholder:text-textMuted \
                        focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-primary \
                        focus-visible:ring-offset-2 disabled:cursor-not-allowed disabled:opacity-50";

    let classes = format!("{base_classes} {class}");

    view! {
        <input
            type=input_type
            data-slot="input"
            class=classes
            placeholder=placeholder
            name=name
            id=id
            required=required
            aria-required=required.then_some("true")
            autocomplete=autocomplete
        />
    }
}
