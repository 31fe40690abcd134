//! Separator component for visual division.

use leptos::prelude::*;

/// Separator orientation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SeparatorOrientation {
    /// Horizontal separator (default).
    #[default]
    Horizontal,
    /// Vertical separator.
    Vertical,
}

impl SeparatorOrientation {
    fn as_str(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

/// Visual separator line component.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <div class="flex h-4 items-center gap-2">
///         <SidebarTrigger />
///         <Separator orientation=SeparatorOrientation::Vertical />
///         <h1>"Dashboard"</h1>
///     </div>
/// }
/// ```
#[component]
pub fn Separator(
    /// Separator orientation.
    #[prop(default = SeparatorOrientation::Horizontal)]
    orientation: SeparatorOrientation,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let base_classes = "shrink-0 bg-panelBorder";

    let orientation_classes = match orientation {
        SeparatorOrientation::Horizontal => "h-[1px] w-full",
        SeparatorOrientation::Vertical => "h-full w-[1px]",
    };

    let classes = format!("{base_classes} {orientation_classes} {class}");

    // Purely decorative, so it stays out of the accessibility tree.
    view! {
        <div
            role="none"
            data-slot="separator"
            data-orientation=orientation.as_str()
            class=classes
        />
    }
}
