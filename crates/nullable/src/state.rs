use std::fmt;

/// Which of the three states a [`Nullable`](crate::Nullable) is in.
///
/// `Unset` is the default and must stay the first variant: a container that
/// was never written to reads as unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum State {
    #[default]
    Unset = 0,
    Nil = 1,
    Set = 2,
}

impl State {
    pub fn is_unset(self) -> bool {
        self == State::Unset
    }

    pub fn is_nil(self) -> bool {
        self == State::Nil
    }

    pub fn is_set(self) -> bool {
        self == State::Set
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            State::Unset => "unset",
            State::Nil => "nil",
            State::Set => "set",
        })
    }
}
