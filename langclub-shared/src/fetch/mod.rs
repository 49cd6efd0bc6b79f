//! The data-loading lifecycle every page goes through
//!
//! A page starts out [`FetchState::Loading`], then settles exactly once into
//! [`FetchState::Ready`] or [`FetchState::Failed`]. A [`FetchLifecycle`] guards against results
//! that arrive too late: each fetch gets a [`FetchTicket`], and a result is only applied while its
//! ticket is the newest one and the page has not been torn down.

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FetchState<T> {
    Loading,
    /// The user-facing message; the underlying error is only logged
    Failed(String),
    Ready(T),
}
impl<T> FetchState<T> {
    /// Settle a fetch result. Errors are replaced by `failure_message`.
    pub fn settle<E>(result: Result<T, E>, failure_message: &str) -> Self {
        match result {
            Ok(data) => Self::Ready(data),
            Err(_) => Self::Failed(failure_message.to_string()),
        }
    }
}
#[cfg(test)]
impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FetchState<U> {
        match self {
            Self::Loading => FetchState::Loading,
            Self::Failed(msg) => FetchState::Failed(msg),
            Self::Ready(data) => FetchState::Ready(f(data)),
        }
    }
}
impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::Loading
    }
}

/// Handed out by [`FetchLifecycle::begin`]; needed to apply the result of that fetch
#[derive(Debug, PartialEq, Eq)]
pub struct FetchTicket(u64);

#[derive(Debug, Default)]
pub struct FetchLifecycle {
    generation: u64,
    torn_down: bool,
}
impl FetchLifecycle {
    /// Start a new fetch. Any ticket issued before is superseded.
    pub fn begin(&mut self) -> FetchTicket {
        self.generation += 1;
        FetchTicket(self.generation)
    }

    /// May the result belonging to `ticket` still be applied?
    pub fn accepts(&self, ticket: &FetchTicket) -> bool {
        !self.torn_down && ticket.0 == self.generation
    }

    /// The owning page went away. No result is accepted from now on.
    pub fn teardown(&mut self) {
        self.torn_down = true;
    }
}
#[cfg(test)]
impl FetchLifecycle {
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }
}
