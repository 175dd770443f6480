pub mod storage;
pub mod style;

use common::{Clock, SystemClock};

// milliseconds since the page loaded, from performance.now()
//
// monotonic, so the step limiter is not fooled by the wall clock being adjusted; falls
// back to the wall clock where the performance api is missing
#[derive(Clone, Copy, Debug, Default)]
pub struct PageClock;

impl Clock for PageClock {
    fn now_millis(&self) -> i64 {
        match web_sys::window().and_then(|w| w.performance()) {
            Some(performance) => performance.now() as i64,
            None => SystemClock.now_millis(),
        }
    }
}

pub fn now_millis() -> i64 {
    PageClock.now_millis()
}
