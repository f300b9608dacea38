//! Event Subscriptions
//!
//! Single-threaded publish/subscribe for page events. Subscribers get a
//! token back and unsubscribe with it; nothing is registered globally.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

/// Something that happened on the page
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The page finished loading
    PageLoad,
    /// An element scrolled into view
    Visible { target: String },
    /// The viewport scrolled to `offset` pixels
    Scroll { offset: f64 },
}

impl Event {
    pub fn visible(target: impl Into<String>) -> Self {
        Event::Visible {
            target: target.into(),
        }
    }

    /// The subscription key this event is delivered to
    pub fn kind(&self) -> EventKind {
        match self {
            Event::PageLoad => EventKind::PageLoad,
            Event::Visible { target } => EventKind::Visible(target.clone()),
            Event::Scroll { .. } => EventKind::Scroll,
        }
    }
}

/// Subscription key. Visibility is subscribed per element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventKind {
    PageLoad,
    Visible(String),
    Scroll,
}

/// Returned by [`EventBus::subscribe`]; pass to
/// [`EventBus::unsubscribe`] to stop delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionToken(u64);

type Handler = Rc<RefCell<Box<dyn FnMut(&Event)>>>;

struct Subscription {
    kind: EventKind,
    once: bool,
    handler: Handler,
}

/// Dispatches events to subscribers in subscription order
#[derive(Default)]
pub struct EventBus {
    next_id: Cell<u64>,
    subscriptions: RefCell<BTreeMap<u64, Subscription>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver every event of `kind` to `handler` until unsubscribed
    pub fn subscribe<F>(&self, kind: EventKind, handler: F) -> SubscriptionToken
    where
        F: FnMut(&Event) + 'static,
    {
        self.insert(kind, false, Box::new(handler))
    }

    /// Deliver only the next event of `kind`, then drop the subscription
    pub fn subscribe_once<F>(&self, kind: EventKind, handler: F) -> SubscriptionToken
    where
        F: FnOnce(&Event) + 'static,
    {
        let mut handler = Some(handler);
        self.insert(
            kind,
            true,
            Box::new(move |event| {
                if let Some(handler) = handler.take() {
                    handler(event);
                }
            }),
        )
    }

    fn insert(
        &self,
        kind: EventKind,
        once: bool,
        handler: Box<dyn FnMut(&Event)>,
    ) -> SubscriptionToken {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        tracing::trace!(subscription = id, kind = ?kind, "Subscribed");
        self.subscriptions.borrow_mut().insert(
            id,
            Subscription {
                kind,
                once,
                handler: Rc::new(RefCell::new(handler)),
            },
        );
        SubscriptionToken(id)
    }

    /// Stop delivery. Returns `false` if the token was already unsubscribed.
    pub fn unsubscribe(&self, token: SubscriptionToken) -> bool {
        self.subscriptions.borrow_mut().remove(&token.0).is_some()
    }

    /// Number of live subscriptions
    pub fn len(&self) -> usize {
        self.subscriptions.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.borrow().is_empty()
    }

    /// Deliver `event` and return how many handlers ran.
    ///
    /// Handlers may subscribe or unsubscribe while the event is being
    /// delivered. A handler unsubscribed mid-delivery is not called, and a
    /// subscription added mid-delivery first sees the next event.
    pub fn emit(&self, event: &Event) -> usize {
        let kind = event.kind();
        let matching: Vec<(u64, bool, Handler)> = self
            .subscriptions
            .borrow()
            .iter()
            .filter(|(_, sub)| sub.kind == kind)
            .map(|(id, sub)| (*id, sub.once, sub.handler.clone()))
            .collect();

        let mut delivered = 0;
        for (id, once, handler) in matching {
            if !self.subscriptions.borrow().contains_key(&id) {
                continue;
            }
            if once {
                self.subscriptions.borrow_mut().remove(&id);
            }

            match handler.try_borrow_mut() {
                Ok(mut handler) => {
                    (*handler)(event);
                    delivered += 1;
                }
                Err(_) => {
                    tracing::warn!(subscription = id, "Skipping re-entrant event delivery");
                }
            }
        }
        delivered
    }

    /// Drop every subscription
    pub fn clear(&self) {
        self.subscriptions.borrow_mut().clear();
    }
}
