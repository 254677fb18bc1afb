use crate::models::review::{Review, ReviewLog};
use crate::relay::{EventRelay, RelayEvent, Topic};
use crate::utils::leptos_owner::run_in_owner;
use leptos::*;
use std::rc::Rc;

/// Lists reviews as they arrive on the relay. Subscribes on creation and
/// unsubscribes when the component is cleaned up.
#[component]
pub fn ReviewsList(relay: Rc<EventRelay>) -> impl IntoView {
    let reviews = create_rw_signal(ReviewLog::default());

    let owner = Owner::current();
    let subscription = relay.subscribe(Topic::ReviewSubmitted, move |event| {
        let RelayEvent::ReviewSubmitted(review) = event;
        let review = review.clone();
        run_in_owner(owner, "reviews_list", move || {
            reviews.update(|log| log.receive(review));
        });
    });
    on_cleanup(move || {
        relay.unsubscribe(subscription);
    });

    view! {
        <div class="reviews">
            <h2>"Reviews"</h2>
            <Show when=move || reviews.with(|log| !log.has_reviews())>
                <p class="no-reviews">"There are no reviews yet"</p>
            </Show>
            <ul>
                <For
                    each=move || reviews.with(|log| log.reviews().iter().cloned().enumerate().collect::<Vec<_>>())
                    // Append-only, so a position never changes owner.
                    key=|entry: &(usize, Review)| entry.0
                    children=|(_, review): (usize, Review)| view! { <ReviewEntry review=review/> }
                />
            </ul>
        </div>
    }
}

#[component]
fn ReviewEntry(review: Review) -> impl IntoView {
    let recommendation = if review.would_recommend {
        "Would recommend this product"
    } else {
        "Would not recommend this product."
    };

    view! {
        <li class="review">
            <p>{review.name}</p>
            <p>{review.body}</p>
            <p>"Rating: " {review.rating.value()}</p>
            <p>{recommendation}</p>
        </li>
    }
}
