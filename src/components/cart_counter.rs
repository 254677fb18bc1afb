use crate::models::cart::Cart;
use leptos::*;

#[component]
pub fn CartCounter(#[prop(into)] cart: Signal<Cart>) -> impl IntoView {
    view! {
        <div class="cart">
            <p>"Cart(" {move || cart.with(Cart::len)} ")"</p>
        </div>
    }
}
