//! Change notification for contact fields.
//!
//! Listeners run synchronously on the thread that performed the mutation,
//! after the new value is stored, in registration order.

use crate::domain::{ContactField, FieldValue};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactChange {
    pub field: ContactField,
    pub old: Option<FieldValue>,
    pub new: Option<FieldValue>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

type Listener = Box<dyn FnMut(&ContactChange)>;

struct Subscription {
    id: SubscriptionId,
    field: Option<ContactField>,
    listener: Listener,
}

#[derive(Default)]
pub struct Listeners {
    next_id: u64,
    subscriptions: Vec<Subscription>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener for one field. `None` listens to every field.
    pub fn subscribe<F>(&mut self, field: Option<ContactField>, listener: F) -> SubscriptionId
    where
        F: FnMut(&ContactChange) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscriptions.push(Subscription {
            id,
            field,
            listener: Box::new(listener),
        });
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|subscription| subscription.id != id);
        self.subscriptions.len() != before
    }

    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    pub fn notify(&mut self, change: &ContactChange) {
        for subscription in &mut self.subscriptions {
            if subscription.field.map_or(true, |field| field == change.field) {
                (subscription.listener)(change);
            }
        }
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.subscriptions.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{ContactChange, Listeners};
    use crate::domain::{ContactField, FieldValue};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn change(field: ContactField) -> ContactChange {
        ContactChange {
            field,
            old: None,
            new: Some(FieldValue::from("value")),
        }
    }

    #[test]
    fn field_listener_only_sees_its_field() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut listeners = Listeners::new();
        let sink = Rc::clone(&seen);
        listeners.subscribe(Some(ContactField::Nickname), move |change| {
            sink.borrow_mut().push(change.field);
        });

        listeners.notify(&change(ContactField::Address));
        listeners.notify(&change(ContactField::Nickname));

        assert_eq!(*seen.borrow(), vec![ContactField::Nickname]);
    }

    #[test]
    fn listeners_run_in_registration_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut listeners = Listeners::new();
        for tag in ["first", "second", "third"] {
            let sink = Rc::clone(&order);
            listeners.subscribe(None, move |_| sink.borrow_mut().push(tag));
        }

        listeners.notify(&change(ContactField::LastName));

        assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn unsubscribe_removes_only_that_listener() {
        let mut listeners = Listeners::new();
        let first = listeners.subscribe(None, |_| {});
        let second = listeners.subscribe(None, |_| {});

        assert!(listeners.unsubscribe(first));
        assert!(!listeners.unsubscribe(first));
        assert_eq!(listeners.len(), 1);
        assert_ne!(first, second);
    }
}
