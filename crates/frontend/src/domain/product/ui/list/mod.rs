use crate::shared::number_format::format_price;
use contracts::domain::product::{Product, ProductId};
use leptos::prelude::*;

/// Shown as the only row when the collection is empty.
pub const EMPTY_PLACEHOLDER: &str = "No products found. Add one above!";

/// Id, name, description, price, actions.
pub const COLUMN_COUNT: usize = 5;

#[component]
pub fn ProductTable(
    #[prop(into)] products: Signal<Vec<Product>>,
    #[prop(into)] on_edit: Callback<ProductId>,
    #[prop(into)] on_delete: Callback<ProductId>,
) -> impl IntoView {
    view! {
        <div class="table-container">
            <table class="table__data table--striped">
                <thead class="table__head">
                    <tr>
                        <th class="table__header-cell">"ID"</th>
                        <th class="table__header-cell">"Name"</th>
                        <th class="table__header-cell">"Description"</th>
                        <th class="table__header-cell">"Price"</th>
                        <th class="table__header-cell table__header-cell--actions">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let items = products.get();
                        if items.is_empty() {
                            view! {
                                <tr class="table__row">
                                    <td
                                        class="table__cell table__cell--empty"
                                        colspan=COLUMN_COUNT.to_string()
                                    >
                                        {EMPTY_PLACEHOLDER}
                                    </td>
                                </tr>
                            }
                                .into_any()
                        } else {
                            items
                                .into_iter()
                                .map(|product| {
                                    let id = product.id;
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">{id.as_string()}</td>
                                            <td class="table__cell">{product.name}</td>
                                            <td class="table__cell">{product.description}</td>
                                            <td class="table__cell">
                                                {format_price(product.price)}
                                            </td>
                                            <td class="table__cell table__cell--actions">
                                                <button
                                                    class="button button--primary"
                                                    on:click=move |_| on_edit.run(id)
                                                >
                                                    "Edit"
                                                </button>
                                                <button
                                                    class="button button--danger"
                                                    on:click=move |_| on_delete.run(id)
                                                >
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </tbody>
            </table>
        </div>
    }
}
