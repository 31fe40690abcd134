//! UI components and pages.
//!
//! This module provides Leptos SSR components for rendering the portal shell,
//! following ShadCN-UI design principles.
//!
//! # Structure
//!
//! - [`app`]: Pages and the HTML document shell
//! - [`components`]: Reusable ShadCN-style UI primitives
//! - [`portal`]: Login card, sidebar, header and protected layout

use leptos::prelude::*;

pub mod app;
pub mod components;
pub mod portal;

/// Render a view to an HTML string.
///
/// Each call gets a fresh reactive owner, so context provided while rendering
/// (such as the sidebar state) never outlives the render.
pub fn render<F, V>(view: F) -> String
where
    F: FnOnce() -> V,
    V: RenderHtml,
{
    let owner = Owner::new();
    owner.with(|| view().to_html())
}
