//! Application sidebar: brand, navigation menu and the signed-in user.

use leptos::prelude::*;

use crate::portal::{Navigation, NavigationItem, UserDescriptor};
use crate::ui::components::{
    Avatar, NavIcon, Sidebar, SidebarContent, SidebarFooter, SidebarGroup, SidebarGroupContent,
    SidebarHeader, SidebarMenu, SidebarMenuButton, SidebarMenuItem,
};

/// Navigation sidebar built from injected portal data.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <AppSidebar
///         brand="UNW TOEFL".to_string()
///         navigation=Navigation::default()
///         user=UserDescriptor::default()
///     />
/// }
/// ```
#[component]
pub fn AppSidebar(
    /// Brand shown in the sidebar header.
    #[prop(into)]
    brand: String,
    /// Menu rows, rendered in order.
    navigation: Navigation,
    /// User shown in the footer.
    user: UserDescriptor,
) -> impl IntoView {
    let rows = navigation
        .into_iter()
        .map(|NavigationItem { title, target, icon }| {
            view! {
                <SidebarMenuItem>
                    <SidebarMenuButton href=target>
                        <NavIcon icon=icon />
                        <span data-slot="nav-label">{title}</span>
                    </SidebarMenuButton>
                </SidebarMenuItem>
            }
        })
        .collect_view();

    view! {
        <Sidebar>
            <SidebarHeader>
                <h1 class="px-2 text-xl font-bold">{brand}</h1>
            </SidebarHeader>
            <SidebarContent>
                <SidebarGroup>
                    <SidebarGroupContent>
                        <SidebarMenu>{rows}</SidebarMenu>
                    </SidebarGroupContent>
                </SidebarGroup>
            </SidebarContent>
            <SidebarFooter>
                <NavUser user=user />
            </SidebarFooter>
        </Sidebar>
    }
}

/// Compact user card for the sidebar footer.
#[component]
fn NavUser(user: UserDescriptor) -> impl IntoView {
    let UserDescriptor {
        id,
        display_name,
        email,
    } = user;

    view! {
        <div data-slot="nav-user" class="flex items-center gap-2 rounded-md p-2 text-sm" title=email>
            <Avatar name=display_name.clone() />
            <div data-slot="nav-user-details" class="grid flex-1 text-left leading-tight">
                <span class="truncate font-medium">{display_name}</span>
                <span class="truncate text-xs text-textMuted">{id}</span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portal::IconName;
    use crate::ui::render;

    fn render_default() -> String {
        render(|| {
            view! {
                <AppSidebar
                    brand="UNW TOEFL"
                    navigation=Navigation::default()
                    user=UserDescriptor::default()
                />
            }
        })
    }

    /// Text of every `nav-label` span, in document order.
    fn labels(html: &str) -> Vec<String> {
        html.split(r#"data-slot="nav-label">"#)
            .skip(1)
            .map(|rest| {
                let end = rest.find("</span>").unwrap();
                rest[..end].replace("<!>", "")
            })
            .collect()
    }

    #[test]
    fn renders_five_rows_in_order() {
        let html = render_default();
        assert_eq!(html.matches(r#"data-sidebar="menu-item""#).count(), 5);
        assert_eq!(
            labels(&html),
            ["Dashboard", "Pendaftaran", "Keuangan", "Riwayat", "Dokumen"]
        );
    }

    #[test]
    fn labels_match_source_titles() {
        let nav = Navigation::default();
        let html = render_default();
        let expected: Vec<String> = nav.titles().map(str::to_string).collect();
        assert_eq!(labels(&html), expected);
    }

    #[test]
    fn renders_brand_icons_and_user() {
        let html = render_default();
        assert!(html.contains("UNW TOEFL"));
        for icon in ["layout-dashboard", "pencil", "wallet", "history", "file-text"] {
            assert!(html.contains(&format!(r#"data-icon="{icon}""#)), "{icon}");
        }
        assert!(html.contains("Jane Doe"));
        assert!(html.contains("NIM.123456"));
        assert_eq!(html.matches(r##"href="#""##).count(), 5);
    }

    #[test]
    fn injected_navigation_replaces_stock_menu() {
        let navigation = Navigation::new(vec![
            NavigationItem::new("Jadwal", "/jadwal", IconName::History),
            NavigationItem::new("Nilai", "/nilai", IconName::FileText),
        ])
        .unwrap();

        let html = render(move || {
            view! {
                <AppSidebar brand="Portal" navigation=navigation user=UserDescriptor::default() />
            }
        });

        assert_eq!(labels(&html), ["Jadwal", "Nilai"]);
        assert!(html.contains(r#"href="/jadwal""#));
        assert!(!html.contains("Dashboard"));
    }
}
