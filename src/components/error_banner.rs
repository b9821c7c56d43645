//! Error Banner Component
//!
//! Inline failure message shown above the affected section.

use leptos::prelude::*;

#[component]
pub fn ErrorBanner<F>(
    /// e.g. "Error loading tasks"
    title: &'static str,
    message: String,
    on_retry: F,
) -> impl IntoView
where
    F: Fn() + Send + Sync + 'static,
{
    view! {
        <div class="error-banner" role="alert">
            <span class="error-text">{format!("{}: {}", title, message)}</span>
            <button class="retry-btn" on:click=move |_| on_retry()>"Retry"</button>
        </div>
    }
}
