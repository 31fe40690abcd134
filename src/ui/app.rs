//! Page components and the HTML document shell.

use leptos::prelude::*;

use crate::config::PortalConfig;
use crate::ui::components::{Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle};
use crate::ui::portal::{AuthOutcome, LoginForm, ProtectedLayout};
use crate::ui::render;

/// Wrap rendered page markup in the HTML document.
///
/// The `<title>` goes through Leptos so configured brand text is escaped.
pub fn html_shell(title: &str, brand: &str, body: &str) -> String {
    let head_title = format!("{title} - {brand}");
    let head_title = render(move || view! { <title>{head_title}</title> });
    format!(
        r#"<!DOCTYPE html>
<html lang="id">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <meta name="description" content="Portal pendaftaran TOEFL mahasiswa">
    {head_title}
    <link rel="stylesheet" href="/static/app.css">
    <script defer src="/static/sidebar.js"></script>
</head>
<body class="min-h-svh bg-background text-textPrimary antialiased">
{body}
</body>
</html>"#
    )
}

/// Login page: the login card centered in the viewport.
#[component]
pub fn LoginPage(
    /// Outcome forwarded to the form.
    #[prop(into, default = None)]
    outcome: Option<AuthOutcome>,
    /// Brand shown on the card.
    #[prop(into)]
    brand: String,
) -> impl IntoView {
    view! {
        <main class="flex min-h-svh w-full flex-col items-center justify-center p-4">
            <section class="w-full max-w-sm">
                <LoginForm outcome=outcome brand=brand />
            </section>
        </main>
    }
}

/// Dashboard page inside the protected layout.
#[component]
pub fn DashboardPage(
    portal: PortalConfig,
    /// Initial sidebar state.
    #[prop(default = true)]
    sidebar_open: bool,
) -> impl IntoView {
    let PortalConfig {
        brand,
        user,
        navigation,
    } = portal;
    let greeting = format!("Selamat datang, {}", user.display_name);

    view! {
        <ProtectedLayout
            brand=brand
            navigation=navigation
            user=user
            title="Dashboard"
            sidebar_open=sidebar_open
        >
            <Card>
                <CardHeader>
                    <CardTitle class="text-2xl">{greeting}</CardTitle>
                </CardHeader>
                <CardContent>
                    <p class="text-sm text-textMuted">
                        "Pilih menu di samping untuk mendaftar tes TOEFL, melihat tagihan, \
                         riwayat, dan dokumen Anda."
                    </p>
                </CardContent>
            </Card>
        </ProtectedLayout>
    }
}

/// 404 Not Found page.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <main class="flex min-h-svh flex-col items-center justify-center py-20">
            <h1 class="mb-4 text-4xl font-bold">"404"</h1>
            <p class="mb-6 text-textMuted">"Halaman tidak ditemukan"</p>
            <a href="/dashboard">
                <Button variant=ButtonVariant::Primary>"Kembali ke Dashboard"</Button>
            </a>
        </main>
    }
}
