// presentation state shared by the webapp and the server
//
// nothing in here touches the dom, the network, or a runtime; the webapp owns the
// side effects (timers, local storage, fetch) and feeds the results back in.  that
// keeps this crate buildable for both wasm32 and the host, and testable on the host
use chrono::Utc;

pub mod carousel;
pub mod detail;
pub mod drag;
pub mod filter;
pub mod locale;
pub mod stars;
pub mod theme;

// wall clock in epoch milliseconds
//
// anything with a ttl or a rate limit asks one of these instead of reading the time
// itself, so tests can pin the clock
pub trait Clock {
    fn now_millis(&self) -> i64;
}

impl<T: Clock> Clock for &T {
    fn now_millis(&self) -> i64 {
        T::now_millis(self)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::Cell;

    use super::Clock;

    // a clock that only moves when told to
    #[derive(Debug, Default)]
    pub struct ManualClock(Cell<i64>);

    impl ManualClock {
        pub fn at(millis: i64) -> Self {
            ManualClock(Cell::new(millis))
        }

        pub fn advance(&self, millis: i64) {
            self.0.set(self.0.get() + millis);
        }
    }

    impl Clock for ManualClock {
        fn now_millis(&self) -> i64 {
            self.0.get()
        }
    }
}
