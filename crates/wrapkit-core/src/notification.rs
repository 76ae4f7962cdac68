/// In-process named notifications and the value wrappers built on them.
///
/// A `NotificationCenter` maps notification names to observer callbacks.
/// `NotificationPublisher` posts its value under a name whenever it is set;
/// `NotificationSubscriber` keeps the most recent value posted under that
/// name. Delivery is synchronous on the posting thread.
use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};

use parking_lot::{Mutex, RwLock};

type Payload = Arc<dyn Any + Send + Sync>;
type Handler = Arc<dyn Fn(&Notification) + Send + Sync>;

/// A posted notification: a name plus an optional type-erased payload.
#[derive(Clone)]
pub struct Notification {
    name: String,
    payload: Option<Payload>,
}

impl fmt::Debug for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notification")
            .field("name", &self.name)
            .field("has_payload", &self.payload.is_some())
            .finish()
    }
}

impl Notification {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the payload if it is a `T`.
    pub fn payload<T: Any>(&self) -> Option<&T> {
        self.payload.as_deref()?.downcast_ref()
    }
}

/// Registration handle returned by [`NotificationCenter::add_observer`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObserverToken {
    name: String,
    id: u64,
}

/// Name-keyed broadcast registry.
///
/// Observers are invoked outside the registry lock, so a handler may post
/// or (un)register without deadlocking. An observer removed while a post
/// is in flight may still receive that one notification.
#[derive(Default)]
pub struct NotificationCenter {
    observers: RwLock<HashMap<String, Vec<(u64, Handler)>>>,
    next_id: AtomicU64,
}

impl fmt::Debug for NotificationCenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationCenter")
            .field("names", &self.observers.read().len())
            .finish()
    }
}

impl NotificationCenter {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Returns the process-wide center.
    pub fn global() -> Arc<Self> {
        static GLOBAL: OnceLock<Arc<NotificationCenter>> = OnceLock::new();
        Arc::clone(GLOBAL.get_or_init(NotificationCenter::new))
    }

    pub fn add_observer(
        &self,
        name: &str,
        handler: impl Fn(&Notification) + Send + Sync + 'static,
    ) -> ObserverToken {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.observers
            .write()
            .entry(name.to_string())
            .or_default()
            .push((id, Arc::new(handler)));
        ObserverToken {
            name: name.to_string(),
            id,
        }
    }

    /// Unregisters an observer. Returns `false` if it was not registered.
    pub fn remove_observer(&self, token: &ObserverToken) -> bool {
        let mut observers = self.observers.write();
        let Some(list) = observers.get_mut(&token.name) else {
            return false;
        };
        let before = list.len();
        list.retain(|(id, _)| *id != token.id);
        let removed = list.len() != before;
        if list.is_empty() {
            observers.remove(&token.name);
        }
        removed
    }

    pub fn observer_count(&self, name: &str) -> usize {
        self.observers.read().get(name).map_or(0, Vec::len)
    }

    /// Posts `payload` to every observer of `name`.
    pub fn post<P: Any + Send + Sync>(&self, name: &str, payload: P) {
        self.dispatch(Notification {
            name: name.to_string(),
            payload: Some(Arc::new(payload)),
        });
    }

    /// Posts a notification without a payload.
    pub fn post_empty(&self, name: &str) {
        self.dispatch(Notification {
            name: name.to_string(),
            payload: None,
        });
    }

    fn dispatch(&self, notification: Notification) {
        let handlers: Vec<Handler> = match self.observers.read().get(&notification.name) {
            Some(list) => list.iter().map(|(_, h)| Arc::clone(h)).collect(),
            None => return,
        };
        tracing::trace!(
            "Delivering '{}' to {} observer(s)",
            notification.name,
            handlers.len()
        );
        for handler in handlers {
            handler(&notification);
        }
    }
}

/// Value that posts itself under `name` every time it is set.
#[derive(Debug)]
pub struct NotificationPublisher<T> {
    name: String,
    center: Arc<NotificationCenter>,
    value: T,
}

impl<T: Clone + Send + Sync + 'static> NotificationPublisher<T> {
    pub fn new(initial: T, name: &str, center: Arc<NotificationCenter>) -> Self {
        Self {
            name: name.to_string(),
            center,
            value: initial,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Stores `value` and posts a copy of it.
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.center.post(&self.name, self.value.clone());
    }

    /// Creates a subscriber on the same name and center, seeded with the
    /// current value.
    pub fn subscriber(&self) -> NotificationSubscriber<T> {
        NotificationSubscriber::new(self.value.clone(), &self.name, Arc::clone(&self.center))
    }
}

/// Value that follows the latest `T` payload posted under `name`.
///
/// Payloads of any other type are ignored. The registration is removed
/// when the subscriber is dropped.
pub struct NotificationSubscriber<T> {
    name: String,
    center: Arc<NotificationCenter>,
    token: ObserverToken,
    value: Arc<Mutex<T>>,
}

impl<T: fmt::Debug> fmt::Debug for NotificationSubscriber<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationSubscriber")
            .field("name", &self.name)
            .field("value", &*self.value.lock())
            .finish()
    }
}

impl<T: Clone + Send + Sync + 'static> NotificationSubscriber<T> {
    pub fn new(initial: T, name: &str, center: Arc<NotificationCenter>) -> Self {
        Self::register(initial, name, center, None)
    }

    /// Like [`new`](Self::new), calling `did_set` after each received value.
    pub fn with_did_set(
        initial: T,
        name: &str,
        center: Arc<NotificationCenter>,
        did_set: impl Fn(&T) + Send + Sync + 'static,
    ) -> Self {
        Self::register(initial, name, center, Some(Box::new(did_set)))
    }

    fn register(
        initial: T,
        name: &str,
        center: Arc<NotificationCenter>,
        did_set: Option<Box<dyn Fn(&T) + Send + Sync>>,
    ) -> Self {
        let value = Arc::new(Mutex::new(initial));
        let weak = Arc::downgrade(&value);
        let token = center.add_observer(name, move |notification| {
            let Some(value) = weak.upgrade() else {
                return;
            };
            let Some(received) = notification.payload::<T>() else {
                return;
            };
            *value.lock() = received.clone();
            if let Some(did_set) = &did_set {
                did_set(received);
            }
        });

        Self {
            name: name.to_string(),
            center,
            token,
            value,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns a copy of the latest received value.
    pub fn get(&self) -> T {
        self.value.lock().clone()
    }

    /// Creates a publisher on the same name and center, seeded with the
    /// current value.
    pub fn publisher(&self) -> NotificationPublisher<T> {
        NotificationPublisher::new(self.get(), &self.name, Arc::clone(&self.center))
    }
}

impl<T> Drop for NotificationSubscriber<T> {
    fn drop(&mut self) {
        self.center.remove_observer(&self.token);
    }
}
