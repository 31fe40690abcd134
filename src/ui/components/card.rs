//! Card component family: container, header, title, description, content, footer.

use leptos::prelude::*;

/// Card container component.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Card>
///         <CardHeader>
///             <CardTitle>"UNW TOEFL"</CardTitle>
///         </CardHeader>
///         <CardContent>
///             <p>"Content goes here"</p>
///         </CardContent>
///         <CardFooter>
///             <Button>"Masuk"</Button>
///         </CardFooter>
///     </Card>
/// }
/// ```
#[component]
pub fn Card(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Card content.
    children: Children,
) -> impl IntoView {
    let classes = format!(
        "rounded-xl border border-panelBorder bg-panel text-textPrimary shadow-sm {class}"
    );

    view! {
        <div data-slot="card" class=classes>
            {children()}
        </div>
    }
}

/// Card header section.
#[component]
pub fn CardHeader(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Header content.
    children: Children,
) -> impl IntoView {
    let classes = format!("flex flex-col space-y-1.5 p-6 {class}");

    view! {
        <div data-slot="card-header" class=classes>
            {children()}
        </div>
    }
}

/// Card title, rendered as a heading.
#[component]
pub fn CardTitle(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let classes = format!("font-semibold leading-none tracking-tight {class}");

    view! {
        <h3 data-slot="card-title" class=classes>
            {children()}
        </h3>
    }
}

/// Muted secondary text under a card title.
#[component]
pub fn CardDescription(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let classes = format!("text-sm text-textMuted {class}");

    view! {
        <p data-slot="card-description" class=classes>
            {children()}
        </p>
    }
}

/// Card content section.
#[component]
pub fn CardContent(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Content.
    children: Children,
) -> impl IntoView {
    let classes = format!("p-6 pt-0 {class}");

    view! {
        <div data-slot="card-content" class=classes>
            {children()}
        </div>
    }
}

/// Card footer section.
#[component]
pub fn CardFooter(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Footer content.
    children: Children,
) -> impl IntoView {
    let classes = format!("flex items-center p-6 pt-0 {class}");

    view! {
        <div data-slot="card-footer" class=classes>
            {children()}
        </div>
    }
}
