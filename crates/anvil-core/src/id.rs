//! Interned identifiers for widgets, canvases and layout components.
//!
//! Highlight payloads carry these around on every drag-over pass, so they
//! are 4-byte `Spur` handles into a shared interner rather than `String`s.

use lasso::{Spur, ThreadedRodeo};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;

/// Global string interner shared by every identifier kind.
static INTERNER: LazyLock<ThreadedRodeo> = LazyLock::new(ThreadedRodeo::default);

macro_rules! interned_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(Spur);

        impl $name {
            /// Intern `s`, or return the existing handle if already interned.
            pub fn intern(s: &str) -> Self {
                Self(INTERNER.get_or_intern(s))
            }

            /// Resolve back to a string slice.
            pub fn as_str(&self) -> &str {
                INTERNER.resolve(&self.0)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.as_str())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                Ok(Self::intern(&s))
            }
        }
    };
}

interned_id!(
    /// Identifier of a widget. Canvas widgets use it as the owning canvas of a highlight.
    WidgetId
);

interned_id!(
    /// Identifier of a layout component (row, column, aligned row/column).
    LayoutId
);
