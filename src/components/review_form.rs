/// Form for writing a review.
/// Keeps a controlled draft, shows validation errors, and publishes valid reviews on the relay.
use crate::models::review::{DraftReview, Rating};
use crate::relay::EventRelay;
use leptos::ev::SubmitEvent;
use leptos::logging::log;
use leptos::*;
use std::rc::Rc;

#[component]
pub fn ReviewForm(relay: Rc<EventRelay>) -> impl IntoView {
    let draft = create_rw_signal(DraftReview::default());
    let (errors, set_errors) = create_signal(Vec::<String>::new());

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        // Work on a copy so relay handlers never run while the draft signal is borrowed.
        let mut current = draft.get_untracked();
        match current.submit(&relay) {
            Ok(_) => set_errors.set(Vec::new()),
            Err(err) => set_errors.set(err.messages()),
        }
        draft.set(current);
    };

    let set_rating = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        let rating = match value.parse::<Rating>() {
            Ok(rating) => Some(rating),
            Err(err) => {
                log!("[REVIEW] Ignoring rating input: {}", err);
                None
            }
        };
        draft.update(|d| d.rating = rating);
    };

    view! {
        <form class="review-form" on:submit=handle_submit>
            <Show when=move || errors.with(|e| !e.is_empty())>
                <div class="errors">
                    <p>"Please correct these error(s):"</p>
                    <ul>
                        {move || errors.get().into_iter().map(|error| view! {
                            <li>{error}</li>
                        }).collect_view()}
                    </ul>
                </div>
            </Show>
            <p>
                <label for="name">"Name:"</label>
                <input
                    id="name"
                    type="text"
                    prop:value=move || draft.with(|d| d.name.clone())
                    on:input=move |e| draft.update(|d| d.name = event_target_value(&e))
                />
            </p>
            <p>
                <label for="review">"Review:"</label>
                <textarea
                    id="review"
                    prop:value=move || draft.with(|d| d.body.clone())
                    on:input=move |e| draft.update(|d| d.body = event_target_value(&e))
                ></textarea>
            </p>
            <p>
                <label for="rating">"Rating:"</label>
                <select
                    id="rating"
                    prop:value=move || draft.with(|d| d.rating.map(|r| r.to_string()).unwrap_or_default())
                    on:change=set_rating
                >
                    <option value="">"--"</option>
                    {Rating::choices().map(|rating| view! {
                        <option value=rating.to_string()>{rating.value()}</option>
                    }).collect_view()}
                </select>
            </p>
            <p>"Would you recommend this product?"</p>
            <label>
                <input
                    id="recommend-yes"
                    type="radio"
                    name="would-recommend"
                    prop:checked=move || draft.with(|d| d.would_recommend == Some(true))
                    on:change=move |_| draft.update(|d| d.would_recommend = Some(true))
                />
                "Yes"
            </label>
            <label>
                <input
                    id="recommend-no"
                    type="radio"
                    name="would-recommend"
                    prop:checked=move || draft.with(|d| d.would_recommend == Some(false))
                    on:change=move |_| draft.update(|d| d.would_recommend = Some(false))
                />
                "No"
            </label>
            <p>
                <input id="submit-review" type="submit" value="Submit" />
            </p>
        </form>
    }
}
