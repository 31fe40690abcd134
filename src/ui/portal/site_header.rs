//! Site header bar hosting the sidebar trigger.

use leptos::prelude::*;

use crate::ui::components::{Separator, SeparatorOrientation, SidebarTrigger};

/// Fixed-height header with the sidebar trigger.
///
/// Optional children (usually the page title) are rendered after a vertical
/// separator; without children only the trigger is shown.
#[component]
pub fn SiteHeader(
    /// Trailing header content.
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <header
            data-slot="site-header"
            class="group-has-data-[collapsible=icon]/sidebar-wrapper:h-12 flex h-12 shrink-0 \
                   items-center gap-2 border-b border-panelBorder transition-[width,height] ease-linear"
        >
            <div class="flex w-full items-center gap-1 px-4 lg:gap-2 lg:px-6">
                <SidebarTrigger class="-ml-1" />
                {children.map(|children| {
                    view! {
                        <Separator orientation=SeparatorOrientation::Vertical class="mx-2 h-4" />
                        {children()}
                    }
                })}
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::render;

    #[test]
    fn renders_single_trigger() {
        let html = render(|| view! { <SiteHeader /> });
        assert_eq!(html.matches(r#"data-sidebar="trigger""#).count(), 1);
        assert!(html.contains("h-12"));
        assert!(!html.contains(r#"data-slot="separator""#));
    }

    #[test]
    fn renders_trailing_content_after_separator() {
        let html = render(|| {
            view! {
                <SiteHeader>
                    <h1>"Keuangan"</h1>
                </SiteHeader>
            }
        });
        let separator = html.find(r#"data-slot="separator""#).unwrap();
        let title = html.find("Keuangan").unwrap();
        assert!(separator < title);
    }
}
