//! Portal shell components.
//!
//! These compose the primitive kit into the student-facing shell: the login
//! card and the protected layout with its sidebar and header.

mod app_sidebar;
mod login_form;
mod protected_layout;
mod site_header;

pub use app_sidebar::AppSidebar;
pub use login_form::{AuthOutcome, INVALID_CREDENTIALS_MESSAGE, LoginForm};
pub use protected_layout::ProtectedLayout;
pub use site_header::SiteHeader;
