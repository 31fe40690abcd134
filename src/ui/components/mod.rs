//! ShadCN-style reusable UI components.
//!
//! This module provides the primitive kit the portal shell is composed from,
//! inspired by shadcn/ui and rendered via Leptos SSR.
//!
//! # Components
//!
//! - [`Button`]: Clickable button with variants
//! - [`Card`], [`CardHeader`], [`CardTitle`], [`CardDescription`], [`CardContent`],
//!   [`CardFooter`]: Card container
//! - [`Input`], [`Label`]: Form controls
//! - [`Avatar`]: User initials
//! - [`Separator`]: Visual separator line
//! - [`sidebar`]: Sidebar provider, panel, trigger and menu primitives
//! - [`icons`]: SVG icon components

mod avatar;
mod button;
mod card;
mod icons;
mod input;
mod label;
mod separator;
pub mod sidebar;

pub use avatar::{Avatar, initials};
pub use button::{Button, ButtonSize, ButtonVariant};
pub use card::{Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle};
pub use icons::*;
pub use input::Input;
pub use label::Label;
pub use separator::{Separator, SeparatorOrientation};
pub use sidebar::{
    Sidebar, SidebarContent, SidebarFooter, SidebarGroup, SidebarGroupContent, SidebarHeader,
    SidebarMenu, SidebarMenuButton, SidebarMenuItem, SidebarProvider, SidebarState,
    SidebarTrigger, use_sidebar,
};
