//! The [`Nullable`] container.

use crate::state::State;

/// A value slot paired with a [`State`] tag.
///
/// Unlike `Option<T>`, a `Nullable<T>` separates "never assigned"
/// ([`State::Unset`], the default) from "explicitly null" ([`State::Nil`]).
/// Whenever the state is not [`State::Set`] the slot holds `T::default()`.
///
/// The container has no interior synchronization. Sharing one instance
/// across threads requires the usual exclusive borrow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Nullable<T> {
    value: T,
    state: State,
}

impl<T> Nullable<T> {
    /// Creates a container in the [`State::Set`] state.
    pub const fn new(value: T) -> Self {
        Self {
            value,
            state: State::Set,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// True iff a concrete value is present.
    pub fn is_valid(&self) -> bool {
        self.state.is_set()
    }

    pub fn is_nil(&self) -> bool {
        self.state.is_nil()
    }

    pub fn is_unset(&self) -> bool {
        self.state.is_unset()
    }

    /// The value slot, regardless of state.
    ///
    /// Holds `T::default()` unless [`is_valid`](Self::is_valid).
    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn as_option(&self) -> Option<&T> {
        self.state.is_set().then_some(&self.value)
    }

    pub fn into_option(self) -> Option<T> {
        if self.state.is_set() {
            Some(self.value)
        } else {
            None
        }
    }

    pub fn set(&mut self, value: T) {
        self.value = value;
        self.state = State::Set;
    }

    /// Maps a set value, keeping unset and nil as they are.
    pub fn map<U: Default, F>(self, f: F) -> Nullable<U>
    where
        F: FnOnce(T) -> U,
    {
        match self.state {
            State::Set => Nullable::new(f(self.value)),
            State::Nil => Nullable::nil(),
            State::Unset => Nullable::unset(),
        }
    }
}

impl<T: Default> Nullable<T> {
    /// Creates a container in the [`State::Nil`] state.
    pub fn nil() -> Self {
        Self {
            value: T::default(),
            state: State::Nil,
        }
    }

    /// Same as [`Default::default`].
    pub fn unset() -> Self {
        Self::default()
    }

    /// `None` becomes nil, `Some` becomes set.
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::new(value),
            None => Self::nil(),
        }
    }

    pub fn set_option(&mut self, value: Option<T>) {
        *self = Self::from_option(value);
    }

    pub fn set_nil(&mut self) {
        *self = Self::nil();
    }

    /// Returns to [`State::Unset`] and clears the slot.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Moves the current contents out, leaving an unset container behind.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}

impl<T: Clone + Default> Nullable<T> {
    /// Like [`from_option`](Self::from_option), cloning the referenced value.
    pub fn from_option_ref(value: Option<&T>) -> Self {
        Self::from_option(value.cloned())
    }
}

impl<T: Clone> Nullable<T> {
    /// A detached copy of the value, if set.
    pub fn to_option(&self) -> Option<T> {
        self.as_option().cloned()
    }
}

impl<T: Default> From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        Self::from_option(value)
    }
}

impl<T> From<Nullable<T>> for Option<T> {
    fn from(value: Nullable<T>) -> Self {
        value.into_option()
    }
}
