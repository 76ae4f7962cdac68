//! Value wrappers with attached behavior: shared locking, undo/redo
//! history, lazy and late initialization, clamping, expiry, observation,
//! notifications and persisted preferences.

pub mod atomic;
pub mod clamping;
pub mod copying;
pub mod default_value;
pub mod dynamic_color;
pub mod env_var;
pub mod error;
pub mod expirable;
pub mod history;
pub mod late_init;
pub mod lazy;
pub mod mapping;
pub mod notification;
pub mod observed;
pub mod stack;
pub mod user_default;

pub use atomic::AtomicValue;
pub use clamping::Clamping;
pub use copying::Copying;
pub use default_value::DefaultValue;
pub use dynamic_color::DynamicColor;
pub use env_var::EnvironmentVariable;
pub use error::WrapError;
pub use expirable::Expirable;
pub use history::UndoRedoBuffer;
pub use late_init::LateInit;
pub use lazy::{Lazy, LazyConstant, SharedLazy};
pub use mapping::{MappingSetter, TrimSet, Trimmed};
pub use notification::{
    Notification, NotificationCenter, NotificationPublisher, NotificationSubscriber,
    ObserverToken,
};
pub use observed::{Observed, ObserverId};
pub use stack::Stack;
pub use user_default::UserDefault;
pub use wrapkit_config::{Appearance, HexColor, PreferenceStore};
