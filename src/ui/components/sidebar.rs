//! Sidebar primitives and the open/collapsed context they share.
//!
//! [`SidebarProvider`] owns a [`SidebarState`] and exposes it through Leptos
//! context; [`Sidebar`] and [`SidebarTrigger`] read it to render their
//! `data-state`. On the client, `static/sidebar.js` flips `data-state` on the
//! provider and writes the choice to the [`SIDEBAR_COOKIE`] cookie, which the
//! server feeds back in as `default_open` on the next request.

use leptos::prelude::*;

use super::{ButtonSize, ButtonVariant, PanelLeftIcon};

/// Cookie holding the last client-side sidebar state (`true`/`false`).
pub const SIDEBAR_COOKIE: &str = "sidebar_state";

/// DOM id of the sidebar panel, referenced by the trigger's `aria-controls`.
pub const SIDEBAR_ID: &str = "app-sidebar";

/// Open/collapsed flag shared by the sidebar and its trigger.
///
/// Only the owning provider creates it; everything else gets a copy from
/// context and can mutate it solely through [`SidebarState::toggle`].
#[derive(Debug, Clone, Copy)]
pub struct SidebarState {
    open: RwSignal<bool>,
}

impl SidebarState {
    fn new(open: bool) -> Self {
        Self {
            open: RwSignal::new(open),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open.get_untracked()
    }

    pub fn toggle(&self) {
        self.open.update(|open| *open = !*open);
    }

    /// Value of the `data-state` attribute for the current flag.
    pub fn data_state(&self) -> &'static str {
        if self.is_open() { "expanded" } else { "collapsed" }
    }
}

/// Returns the enclosing provider's state, if any.
pub fn use_sidebar() -> Option<SidebarState> {
    use_context::<SidebarState>()
}

fn current_data_state() -> &'static str {
    use_sidebar().map_or("expanded", |state| state.data_state())
}

/// Establishes the sidebar context for everything rendered inside it.
#[component]
pub fn SidebarProvider(
    /// Initial open state.
    #[prop(default = true)]
    default_open: bool,
    children: Children,
) -> impl IntoView {
    let state = SidebarState::new(default_open);
    provide_context(state);

    view! {
        <div
            data-slot="sidebar-wrapper"
            data-sidebar="provider"
            data-state=state.data_state()
            class="group/sidebar-wrapper flex min-h-svh w-full"
        >
            {children()}
        </div>
    }
}

/// The sidebar panel itself.
#[component]
pub fn Sidebar(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let classes = format!(
        "flex h-svh w-64 shrink-0 flex-col border-r border-panelBorder bg-panel \
         text-textPrimary transition-[width] ease-linear \
         group-data-[state=collapsed]/sidebar-wrapper:w-0 \
         group-data-[state=collapsed]/sidebar-wrapper:overflow-hidden {class}"
    );

    view! {
        <aside
            id=SIDEBAR_ID
            data-slot="sidebar"
            data-sidebar="sidebar"
            data-state=current_data_state()
            class=classes
        >
            {children()}
        </aside>
    }
}

/// Button that toggles the sidebar.
#[component]
pub fn SidebarTrigger(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let expanded = use_sidebar().is_none_or(|state| state.is_open());
    let classes = format!(
        "inline-flex items-center justify-center rounded-lg {} {} {class}",
        ButtonVariant::Ghost.classes(),
        ButtonSize::Icon.classes(),
    );

    view! {
        <button
            type="button"
            data-slot="sidebar-trigger"
            data-sidebar="trigger"
            aria-controls=SIDEBAR_ID
            aria-expanded=if expanded { "true" } else { "false" }
            class=classes
        >
            <PanelLeftIcon />
            <span class="sr-only">"Toggle Sidebar"</span>
        </button>
    }
}

/// Top section of the sidebar (branding).
#[component]
pub fn SidebarHeader(children: Children) -> impl IntoView {
    view! {
        <div data-slot="sidebar-header" data-sidebar="header" class="flex flex-col gap-2 p-2">
            {children()}
        </div>
    }
}

/// Scrollable middle section of the sidebar.
#[component]
pub fn SidebarContent(children: Children) -> impl IntoView {
    view! {
        <div
            data-slot="sidebar-content"
            data-sidebar="content"
            class="flex min-h-0 flex-1 flex-col gap-2 overflow-auto"
        >
            {children()}
        </div>
    }
}

/// Bottom section of the sidebar.
#[component]
pub fn SidebarFooter(children: Children) -> impl IntoView {
    view! {
        <div data-slot="sidebar-footer" data-sidebar="footer" class="flex flex-col gap-2 p-2">
            {children()}
        </div>
    }
}

#[component]
pub fn SidebarGroup(children: Children) -> impl IntoView {
    view! {
        <div
            data-slot="sidebar-group"
            data-sidebar="group"
            class="relative flex w-full min-w-0 flex-col p-2"
        >
            {children()}
        </div>
    }
}

#[component]
pub fn SidebarGroupContent(children: Children) -> impl IntoView {
    view! {
        <div data-slot="sidebar-group-content" data-sidebar="group-content" class="w-full text-sm">
            {children()}
        </div>
    }
}

/// Vertical menu list.
#[component]
pub fn SidebarMenu(children: Children) -> impl IntoView {
    view! {
        <ul data-slot="sidebar-menu" data-sidebar="menu" class="flex w-full min-w-0 flex-col gap-1">
            {children()}
        </ul>
    }
}

/// One row of a [`SidebarMenu`].
#[component]
pub fn SidebarMenuItem(children: Children) -> impl IntoView {
    view! {
        <li data-slot="sidebar-menu-item" data-sidebar="menu-item" class="group/menu-item relative">
            {children()}
        </li>
    }
}

const MENU_BUTTON_CLASSES: &str = "flex w-full items-center gap-2 overflow-hidden rounded-md p-2 \
                                   text-left text-sm outline-none hover:bg-panelBorder \
                                   focus-visible:ring-2 focus-visible:ring-primary";

/// Clickable link inside a menu row.
#[component]
pub fn SidebarMenuButton(
    /// Link target.
    #[prop(into)]
    href: String,
    children: Children,
) -> impl IntoView {
    view! {
        <a
            href=href
            data-slot="sidebar-menu-button"
            data-sidebar="menu-button"
            class=MENU_BUTTON_CLASSES
        >
            {children()}
        </a>
    }
}
