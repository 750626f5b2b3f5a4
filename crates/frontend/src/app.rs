use crate::domain::product::ui::ProductPage;
use crate::shared::confirm::ConfirmService;
use crate::shared::notifications::{NotificationHost, NotificationService};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the notification service to the whole app via context.
    provide_context(NotificationService::new());

    // Provide the confirmation capability; the browser dialog is the default.
    provide_context(ConfirmService::browser());

    view! {
        <main class="container">
            <h1 class="container__title">"Product Management"</h1>
            <NotificationHost />
            <ProductPage />
        </main>
    }
}
