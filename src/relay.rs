//! In-process publish/subscribe channel connecting the review form to the review list.
//!
//! Delivery is synchronous and single-threaded: `publish` calls every handler that is
//! subscribed to the event's topic at the moment of publishing, in subscription order.
//! Nothing is buffered, so a handler registered after a publish never sees it.
use crate::models::review::Review;
use leptos::logging::log;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    ReviewSubmitted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayEvent {
    ReviewSubmitted(Review),
}

impl RelayEvent {
    pub fn topic(&self) -> Topic {
        match self {
            RelayEvent::ReviewSubmitted(_) => Topic::ReviewSubmitted,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Handler = Rc<dyn Fn(&RelayEvent)>;

struct Subscriber {
    id: SubscriptionId,
    topic: Topic,
    handler: Handler,
}

#[derive(Default)]
pub struct EventRelay {
    next_id: Cell<u64>,
    subscribers: RefCell<Vec<Subscriber>>,
}

impl EventRelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(
        &self,
        topic: Topic,
        handler: impl Fn(&RelayEvent) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.subscribers.borrow_mut().push(Subscriber {
            id,
            topic,
            handler: Rc::new(handler),
        });
        log!("[RELAY] Subscription {} added for {:?}", id.0, topic);
        id
    }

    /// Removes a subscription. Returns `false` if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.borrow_mut();
        let before = subscribers.len();
        subscribers.retain(|s| s.id != id);
        let removed = subscribers.len() != before;
        if removed {
            log!("[RELAY] Subscription {} removed", id.0);
        }
        removed
    }

    /// Delivers `event` to the current subscribers of its topic and returns how many
    /// handlers ran.
    pub fn publish(&self, event: RelayEvent) -> usize {
        let topic = event.topic();
        // Snapshot so handlers may subscribe or unsubscribe while we deliver.
        let handlers: Vec<Handler> = self
            .subscribers
            .borrow()
            .iter()
            .filter(|s| s.topic == topic)
            .map(|s| Rc::clone(&s.handler))
            .collect();

        log!("[RELAY] Publishing {:?} to {} handler(s)", topic, handlers.len());
        for handler in &handlers {
            handler(&event);
        }
        handlers.len()
    }

    pub fn subscriber_count(&self, topic: Topic) -> usize {
        self.subscribers
            .borrow()
            .iter()
            .filter(|s| s.topic == topic)
            .count()
    }
}

impl fmt::Debug for EventRelay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventRelay")
            .field("subscribers", &self.subscribers.borrow().len())
            .finish()
    }
}
