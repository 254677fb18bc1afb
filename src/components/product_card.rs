/// Product card: image, title, stock marker, details, color swatches and cart buttons,
/// with the review tabs underneath.
use crate::components::product_tabs::ProductTabs;
use crate::models::product::ProductSelection;
use crate::relay::EventRelay;
use leptos::logging::log;
use leptos::*;
use std::rc::Rc;

#[component]
pub fn ProductCard(
    product: ProductSelection,
    premium: bool,
    relay: Rc<EventRelay>,
    #[prop(into)] on_add_to_cart: Callback<u32>,
    #[prop(into)] on_remove_from_cart: Callback<u32>,
) -> impl IntoView {
    let details = product.catalog().details.clone();
    let variants = product.catalog().variants.clone();
    let selection = create_rw_signal(product);

    // Derived values, recomputed only when the selection changes.
    let title = create_memo(move |_| selection.with(ProductSelection::title));
    let image = create_memo(move |_| selection.with(|p| p.image().to_string()));
    let in_stock = create_memo(move |_| selection.with(ProductSelection::in_stock));

    let update_product = move |index: usize| {
        selection.update(|p| {
            if let Err(err) = p.select_variant(index) {
                log!("[PRODUCT] {}", err);
            }
        });
    };

    let add_to_cart = move |_| match selection.with_untracked(ProductSelection::add_to_cart_request) {
        Some(id) => on_add_to_cart.call(id),
        None => log!("[PRODUCT] Add to cart ignored, selected variant is out of stock"),
    };

    let remove_from_cart = move |_| {
        on_remove_from_cart.call(selection.with_untracked(ProductSelection::remove_from_cart_request));
    };

    view! {
        <div class="product">
            <div class="product-image">
                <img src=move || image.get() alt=move || title.get()/>
            </div>
            <div class="product-info">
                <h1>{move || title.get()}</h1>
                <Show when=move || in_stock.get()>
                    <span class="in-stock">"In stock!"</span>
                </Show>
                <p>"User is premium: " {premium.to_string()}</p>
                <ul>
                    {details.into_iter().map(|detail| view! { <li>{detail}</li> }).collect_view()}
                </ul>
                {variants.into_iter().enumerate().map(|(index, variant)| view! {
                    <div
                        class="color-box"
                        title=variant.color.clone()
                        style:background-color=variant.color
                        on:click=move |_| update_product(index)
                    ></div>
                }).collect_view()}
                <button
                    class="add-to-cart"
                    on:click=add_to_cart
                    prop:disabled=move || !in_stock.get()
                    class:disabled-button=move || !in_stock.get()
                >
                    "Add to Cart"
                </button>
                <button class="remove-from-cart" on:click=remove_from_cart>"Remove from Cart"</button>
                <ProductTabs relay=relay/>
            </div>
        </div>
    }
}
