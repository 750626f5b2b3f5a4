pub mod form;
pub mod list;

use self::form::view_model::ProductFormViewModel;
use self::form::ProductForm;
use self::list::ProductTable;
use crate::domain::product::api;
use crate::shared::confirm::ConfirmService;
use crate::shared::notifications::NotificationService;
use contracts::domain::product::{Product, ProductId};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Owns the list snapshot and the form state, and wires every user action
/// to the gateway. Constructed once at startup; lives for the page.
#[component]
pub fn ProductPage() -> impl IntoView {
    let notifications =
        use_context::<NotificationService>().expect("NotificationService not found in context");
    let confirm = use_context::<ConfirmService>().expect("ConfirmService not found in context");

    let (products, set_products) = signal::<Vec<Product>>(Vec::new());
    let vm = ProductFormViewModel::new();

    // The snapshot is replaced wholesale after every fetch; no patching.
    let fetch = move || {
        spawn_local(async move {
            match api::list_products().await {
                Ok(list) => set_products.set(list),
                Err(e) => {
                    log::error!("Error fetching products: {}", e);
                    notifications
                        .error("Failed to load products. Please ensure the backend is running.");
                }
            }
        });
    };

    // Branches on the held identifier: create without one, update with it.
    let handle_submit = move || {
        let Some(input) = vm.submit_input() else {
            return;
        };
        let editing = vm.editing_id();
        spawn_local(async move {
            let result = match editing {
                Some(id) => api::update_product(id, &input)
                    .await
                    .map(|_| "Product updated successfully!"),
                None => api::create_product(&input)
                    .await
                    .map(|_| "Product added successfully!"),
            };
            match result {
                Ok(message) => {
                    notifications.success(message);
                    vm.reset();
                    fetch();
                }
                Err(e) => {
                    log::error!("Error saving product: {}", e);
                    notifications.error(format!("Failed to save product: {}", e));
                }
            }
        });
    };

    let handle_edit = move |id: ProductId| {
        spawn_local(async move {
            match api::fetch_product(id).await {
                Ok(product) => vm.begin_edit(&product),
                Err(e) => {
                    log::error!("Error fetching product for edit: {}", e);
                    notifications.error("Failed to load product for editing.");
                }
            }
        });
    };

    let handle_delete = move |id: ProductId| {
        if !confirm.confirm("Are you sure you want to delete this product?") {
            // Declined: no request, no message.
            return;
        }
        spawn_local(async move {
            match api::delete_product(id).await {
                Ok(()) => {
                    notifications.success("Product deleted successfully!");
                    fetch();
                }
                Err(e) => {
                    log::error!("Error deleting product: {}", e);
                    notifications.error("Failed to delete product.");
                }
            }
        });
    };

    fetch();

    view! {
        <div class="content">
            <ProductForm vm=vm on_submit=Callback::new(move |_| handle_submit()) />
            <ProductTable
                products=products
                on_edit=Callback::new(move |id| handle_edit(id))
                on_delete=Callback::new(handle_delete)
            />
        </div>
    }
}
