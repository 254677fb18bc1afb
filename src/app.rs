/// Main application entry point for the Sock Shop.
/// Owns the cart and the review relay, and hands them to the product card.
use crate::components::{cart_counter::CartCounter, product_card::ProductCard};
use crate::models::cart::Cart;
use crate::models::product::{ProductCatalog, ProductSelection};
use crate::relay::EventRelay;
use leptos::logging::log;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use std::rc::Rc;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/sockshop.css"/>
        <Title text="Sock Shop"/>
        <Router>
            <main>
                <Routes>
                    <Route path="" view=|| view! { <Shop premium=true/> }/>
                </Routes>
            </main>
        </Router>
    }
}

/// The product page: cart counter plus product card.
#[component]
pub fn Shop(premium: bool) -> impl IntoView {
    let relay = Rc::new(EventRelay::new());
    let cart = create_rw_signal(Cart::new());

    let add_to_cart = move |id: u32| {
        cart.update(|c| c.add(id));
        log!("[CART] Added {}, {} item(s) in cart", id, cart.with_untracked(Cart::len));
    };

    let remove_from_cart = move |id: u32| {
        let mut removed = false;
        cart.update(|c| removed = c.remove(id));
        if removed {
            log!("[CART] Removed {}, {} item(s) in cart", id, cart.with_untracked(Cart::len));
        } else {
            log!("[CART] {} is not in the cart, nothing removed", id);
        }
    };

    match ProductCatalog::bundled().and_then(ProductSelection::new) {
        Ok(product) => view! {
            <div id="app">
                <CartCounter cart=cart/>
                <ProductCard
                    product=product
                    premium=premium
                    relay=relay
                    on_add_to_cart=add_to_cart
                    on_remove_from_cart=remove_from_cart
                />
            </div>
        }
        .into_view(),
        Err(err) => {
            log!("[PRODUCT] Could not load catalog: {}", err);
            view! { <p class="error">"This product is currently unavailable."</p> }.into_view()
        }
    }
}
