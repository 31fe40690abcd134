//! SVG icon components.
//!
//! Icons are rendered inline as SVG elements (lucide outlines) so they pick up
//! the surrounding text colour through `currentColor`.

use leptos::prelude::*;

use crate::portal::IconName;

/// Common icon size class.
const ICON_SIZE: &str = "h-4 w-4";

/// Shared `<svg>` wrapper for the outline icon set.
#[component]
fn OutlineSvg(name: &'static str, class: &'static str, children: Children) -> impl IntoView {
    let classes = format!("{ICON_SIZE} shrink-0 {class}");

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            data-icon=name
            class=classes
        >
            {children()}
        </svg>
    }
}

/// Dashboard grid icon.
#[component]
pub fn LayoutDashboardIcon(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <OutlineSvg name="layout-dashboard" class=class>
            <rect width="7" height="9" x="3" y="3" rx="1" />
            <rect width="7" height="5" x="14" y="3" rx="1" />
            <rect width="7" height="9" x="14" y="12" rx="1" />
            <rect width="7" height="5" x="3" y="16" rx="1" />
        </OutlineSvg>
    }
}

/// Pencil icon.
#[component]
pub fn PencilIcon(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <OutlineSvg name="pencil" class=class>
            <path d="M21.174 6.812a1 1 0 0 0-3.986-3.987L3.842 16.174a2 2 0 0 0-.5.83l-1.321 4.352a.5.5 0 0 0 .623.622l4.353-1.32a2 2 0 0 0 .83-.497z" />
            <path d="m15 5 4 4" />
        </OutlineSvg>
    }
}

/// Wallet icon.
#[component]
pub fn WalletIcon(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <OutlineSvg name="wallet" class=class>
            <path d="M19 7V4a1 1 0 0 0-1-1H5a2 2 0 0 0 0 4h15a1 1 0 0 1 1 1v4h-3a2 2 0 0 0 0 4h3a1 1 0 0 0 1-1v-2a1 1 0 0 0-1-1" />
            <path d="M3 5v14a2 2 0 0 0 2 2h15a1 1 0 0 0 1-1v-4" />
        </OutlineSvg>
    }
}

/// Clock-with-arrow history icon.
#[component]
pub fn HistoryIcon(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <OutlineSvg name="history" class=class>
            <path d="M3 12a9 9 0 1 0 9-9 9.75 9.75 0 0 0-6.74 2.74L3 8" />
            <path d="M3 3v5h5" />
            <path d="M12 7v5l4 2" />
        </OutlineSvg>
    }
}

/// Text document icon.
#[component]
pub fn FileTextIcon(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <OutlineSvg name="file-text" class=class>
            <path d="M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z" />
            <path d="M14 2v4a2 2 0 0 0 2 2h4" />
            <path d="M10 9H8" />
            <path d="M16 13H8" />
            <path d="M16 17H8" />
        </OutlineSvg>
    }
}

/// Log-in (arrow into door) icon.
#[component]
pub fn LogInIcon(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <OutlineSvg name="log-in" class=class>
            <path d="M15 3h4a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2h-4" />
            <polyline points="10 17 15 12 10 7" />
            <line x1="15" y1="12" x2="3" y2="12" />
        </OutlineSvg>
    }
}

/// Panel-left icon used by the sidebar trigger.
#[component]
pub fn PanelLeftIcon(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <OutlineSvg name="panel-left" class=class>
            <rect width="18" height="18" x="3" y="3" rx="2" />
            <path d="M9 3v18" />
        </OutlineSvg>
    }
}

/// Renders the glyph for a configured [`IconName`].
#[component]
pub fn NavIcon(
    /// Glyph to render.
    icon: IconName,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    match icon {
        IconName::LayoutDashboard => view! { <LayoutDashboardIcon class=class /> }.into_any(),
        IconName::Pencil => view! { <PencilIcon class=class /> }.into_any(),
        IconName::Wallet => view! { <WalletIcon class=class /> }.into_any(),
        IconName::History => view! { <HistoryIcon class=class /> }.into_any(),
        IconName::FileText => view! { <FileTextIcon class=class /> }.into_any(),
    }
}
