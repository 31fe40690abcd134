//! Login card.
//!
//! The form is purely visual: it has no submit handler and performs no
//! validation. Without a reported [`AuthOutcome`] the error banner is always
//! rendered. Once an authentication collaborator reports an outcome, only
//! `Failure` keeps it.

use leptos::prelude::*;

use crate::ui::components::{
    Button, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Input, Label,
    LogInIcon,
};

/// Message shown after a rejected login attempt.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "NIM atau password yang anda masukkan salah";

/// Result of the most recent authentication attempt, as reported by the
/// external authentication collaborator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthOutcome {
    /// No attempt has been made.
    #[default]
    None,
    Success,
    Failure,
}

impl AuthOutcome {
    /// Parses a query value. A missing value means nothing was reported;
    /// anything unrecognised counts as no attempt.
    pub fn from_query(value: Option<&str>) -> Option<Self> {
        let value = value?.to_ascii_lowercase();
        Some(match value.as_str() {
            "success" => Self::Success,
            "failure" => Self::Failure,
            _ => Self::None,
        })
    }

    pub fn shows_error(self) -> bool {
        self == Self::Failure
    }

    /// Banner visibility: always on until an outcome is reported.
    pub fn banner_visible(outcome: Option<Self>) -> bool {
        outcome.is_none_or(Self::shows_error)
    }
}

/// Student login card with NIM and password fields.
#[component]
pub fn LoginForm(
    /// Outcome of the last attempt, when one has been reported.
    #[prop(into, default = None)]
    outcome: Option<AuthOutcome>,
    /// Title shown at the top of the card.
    #[prop(into, default = "UNW TOEFL".to_string())]
    brand: String,
) -> impl IntoView {
    let error = AuthOutcome::banner_visible(outcome).then(|| {
        view! {
            <CardDescription class="text-center text-danger">
                <span role="alert" data-slot="login-error">{INVALID_CREDENTIALS_MESSAGE}</span>
            </CardDescription>
        }
    });

    view! {
        <div data-slot="login-form">
            <Card>
                <CardHeader>
                    <CardTitle class="text-center text-5xl font-bold">{brand}</CardTitle>
                </CardHeader>
                <CardContent>
                    <form id="login-form" class="grid w-full items-center gap-4">
                        <div class="flex flex-col gap-2">
                            <Label html_for="username">"Nomor Induk Mahasiswa"</Label>
                            <Input
                                id="username"
                                name="username"
                                input_type="text"
                                placeholder="NIM.123456"
                                autocomplete="username"
                                required=true
                            />
                        </div>
                        <div class="flex flex-col gap-2">
                            <Label html_for="password">"Password"</Label>
                            <Input
                                id="password"
                                name="password"
                                input_type="password"
                                placeholder="Password"
                                autocomplete="current-password"
                                required=true
                            />
                        </div>
                    </form>
                </CardContent>
                <CardFooter>
                    <div class="grid w-full items-center gap-4">
                        <div class="flex flex-col gap-2">
                            {error}
                            <Button button_type="submit" class="w-full">
                                <span>"Masuk"</span>
                                <LogInIcon />
                            </Button>
                        </div>
                    </div>
                </CardFooter>
            </Card>
        </div>
    }
}
