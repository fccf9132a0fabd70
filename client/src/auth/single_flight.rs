//! Coalesce concurrent calls onto one in-flight future.
//!
//! The first caller starts the work; callers arriving before it settles await
//! a clone of the same `Shared` future and see the same output. The slot is
//! cleared once the future settles, so the next call starts fresh.

#[cfg(test)]
#[path = "single_flight_test.rs"]
mod single_flight_test;

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture, Shared};

type Flight<T> = Shared<LocalBoxFuture<'static, T>>;

pub struct SingleFlight<T: Clone> {
    slot: Rc<RefCell<Option<Flight<T>>>>,
}

impl<T: Clone> Clone for SingleFlight<T> {
    fn clone(&self) -> Self {
        Self { slot: Rc::clone(&self.slot) }
    }
}

impl<T: Clone> Default for SingleFlight<T> {
    fn default() -> Self {
        Self { slot: Rc::new(RefCell::new(None)) }
    }
}

impl<T: Clone + 'static> SingleFlight<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Join the in-flight call, or start one with `start`.
    pub async fn run<F, Fut>(&self, start: F) -> T
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T> + 'static,
    {
        let flight = {
            let mut slot = self.slot.borrow_mut();
            if let Some(existing) = slot.as_ref() {
                existing.clone()
            } else {
                let started = start().boxed_local().shared();
                *slot = Some(started.clone());
                started
            }
        };

        let output = flight.clone().await;

        let mut slot = self.slot.borrow_mut();
        if slot.as_ref().is_some_and(|current| current.ptr_eq(&flight)) {
            *slot = None;
        }
        output
    }
}
