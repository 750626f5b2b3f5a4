pub mod view_model;

use self::view_model::ProductFormViewModel;
use leptos::prelude::*;

#[component]
pub fn ProductForm(
    vm: ProductFormViewModel,
    #[prop(into)] on_submit: Callback<()>,
) -> impl IntoView {
    view! {
        <section class="form-card">
            <h2 class="form-card__title">
                {move || if vm.is_edit_mode() { "Edit Product" } else { "Add New Product" }}
            </h2>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <form on:submit=move |ev| {
                ev.prevent_default();
                on_submit.run(());
            }>
                // The held identifier mirrors the draft state; it is never
                // edited directly.
                <input
                    type="hidden"
                    id="productId"
                    prop:value=move || {
                        vm.draft.get().id.map(|id| id.as_string()).unwrap_or_default()
                    }
                />

                <div class="form-group">
                    <label for="name">"Name"</label>
                    <input
                        type="text"
                        id="name"
                        required=true
                        prop:value=move || vm.draft.get().name
                        on:input=move |ev| vm.draft.update(|d| d.name = event_target_value(&ev))
                        placeholder="Product name"
                    />
                </div>

                <div class="form-group">
                    <label for="description">"Description"</label>
                    <textarea
                        id="description"
                        prop:value=move || vm.draft.get().description
                        on:input=move |ev| {
                            vm.draft.update(|d| d.description = event_target_value(&ev))
                        }
                        placeholder="Short description"
                        rows="3"
                    />
                </div>

                <div class="form-group">
                    <label for="price">"Price"</label>
                    <input
                        type="number"
                        id="price"
                        required=true
                        step="0.01"
                        min="0"
                        prop:value=move || vm.draft.get().price
                        on:input=move |ev| vm.draft.update(|d| d.price = event_target_value(&ev))
                        placeholder="0.00"
                    />
                </div>

                <div class="form-actions">
                    <button type="submit" class="button button--primary">
                        {move || if vm.is_edit_mode() { "Update Product" } else { "Add Product" }}
                    </button>
                    {move || {
                        vm.is_edit_mode()
                            .then(|| {
                                view! {
                                    <button
                                        type="button"
                                        class="button button--secondary"
                                        on:click=move |_| vm.reset()
                                    >
                                        "Cancel Edit"
                                    </button>
                                }
                            })
                    }}
                </div>
            </form>
        </section>
    }
}
