use crate::components::{review_form::ReviewForm, reviews_list::ReviewsList};
use crate::relay::EventRelay;
use leptos::*;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Reviews,
    MakeReview,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Reviews, Tab::MakeReview];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Reviews => "Reviews",
            Tab::MakeReview => "Make a review",
        }
    }
}

/// Review panel with a tab per view. Both panels stay mounted and are only hidden,
/// so the list keeps its relay subscription while the form is showing.
#[component]
pub fn ProductTabs(relay: Rc<EventRelay>) -> impl IntoView {
    let (selected_tab, set_selected_tab) = create_signal(Tab::Reviews);
    let display_for = move |tab: Tab| {
        move || if selected_tab.get() == tab { "block" } else { "none" }
    };
    let list_relay = Rc::clone(&relay);

    view! {
        <div class="product-tabs">
            {Tab::ALL.into_iter().map(|tab| view! {
                <span
                    class="tab"
                    class:active-tab=move || selected_tab.get() == tab
                    on:click=move |_| set_selected_tab.set(tab)
                >
                    {tab.label()}
                </span>
            }).collect_view()}
            <div class="tab-panel" style:display=display_for(Tab::Reviews)>
                <ReviewsList relay=list_relay/>
            </div>
            <div class="tab-panel" style:display=display_for(Tab::MakeReview)>
                <ReviewForm relay=relay/>
            </div>
        </div>
    }
}
