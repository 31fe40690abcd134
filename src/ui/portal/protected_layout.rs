//! Layout shared by every page of the authenticated area.

use leptos::prelude::*;

use super::{AppSidebar, SiteHeader};
use crate::portal::{Navigation, UserDescriptor};
use crate::ui::components::SidebarProvider;

/// Sidebar + header + content section around a routed page.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <ProtectedLayout
///         brand="UNW TOEFL".to_string()
///         navigation=Navigation::default()
///         user=UserDescriptor::default()
///         title="Dashboard".to_string()
///     >
///         <DashboardHome />
///     </ProtectedLayout>
/// }
/// ```
#[component]
pub fn ProtectedLayout(
    /// Brand shown in the sidebar header.
    #[prop(into)]
    brand: String,
    navigation: Navigation,
    user: UserDescriptor,
    /// Page title shown in the header.
    #[prop(into, default = String::new())]
    title: String,
    /// Initial sidebar state.
    #[prop(default = true)]
    sidebar_open: bool,
    /// Routed page content.
    children: Children,
) -> impl IntoView {
    view! {
        <SidebarProvider default_open=sidebar_open>
            <AppSidebar brand=brand navigation=navigation user=user />
            <main data-slot="sidebar-inset" class="flex min-h-svh flex-1 flex-col">
                <SiteHeader>
                    <h1 class="text-base font-medium">{title}</h1>
                </SiteHeader>
                <section data-slot="content" class="container m-4 flex-1 rounded-xl border border-panelBorder p-4 lg:p-6">
                    {children()}
                </section>
            </main>
        </SidebarProvider>
    }
}
