//! Recurring-Fetch Scheduler
//!
//! Keeps the three dashboard buckets (latest snapshot, history, attack
//! count) fresh with one immediate fetch plus a fixed 10-second interval.
//! The three fetches of a tick run as independent tasks: they are issued
//! without waiting on each other, complete in any order, and apply their
//! results in isolation, so one hung or failed source never blocks or
//! corrupts the others.
//!
//! Teardown is explicit: disposing the poller flips a shared liveness flag
//! and clears the interval exactly once. Any completion that arrives after
//! disposal is discarded before it can touch state.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use leptos::leptos_dom::helpers::IntervalHandle;
use leptos::{set_interval_with_handle, spawn_local};

use crate::api;
use crate::state::DashboardState;

const POLL_INTERVAL: Duration = Duration::from_secs(10);

/// Cancellation handle for the polling schedule.
///
/// Dropping the handle tears the schedule down; `dispose` is the explicit
/// spelling of the same thing for view cleanup hooks.
pub struct Poller {
    alive: Rc<Cell<bool>>,
    interval: Option<IntervalHandle>,
}

impl Poller {
    /// Begin an immediate fetch of all three buckets, then repeat every
    /// ten seconds until the returned handle is disposed.
    pub fn start(state: DashboardState) -> Self {
        let alive = Rc::new(Cell::new(true));

        tick(state.clone(), alive.clone());

        let interval = {
            let alive = alive.clone();
            set_interval_with_handle(
                move || tick(state.clone(), alive.clone()),
                POLL_INTERVAL,
            )
            .ok()
        };

        Self { alive, interval }
    }

    /// Stop polling. No further fetch is issued and no in-flight result is
    /// applied after this returns.
    pub fn dispose(self) {}
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.alive.set(false);
        if let Some(handle) = self.interval.take() {
            handle.clear();
        }
    }
}

/// One scheduled tick: three concurrent, independent fetches.
fn tick(state: DashboardState, alive: Rc<Cell<bool>>) {
    {
        let state = state.clone();
        let alive = alive.clone();
        spawn_local(async move {
            let result = api::latest_data().await;
            apply::latest(&state, &alive, result);
        });
    }
    {
        let state = state.clone();
        let alive = alive.clone();
        spawn_local(async move {
            let result = api::all_data().await;
            apply::history(&state, &alive, result);
        });
    }
    spawn_local(async move {
        let result = api::attack_count().await.map(|r| r.att);
        apply::attack_count(&state, &alive, result);
    });
}

/// Guarded bucket application.
///
/// Every write goes through here: a success replaces the bucket wholesale
/// (last-write-wins), a failure keeps the previous value and is logged, and
/// anything that resolves after the liveness flag went false is dropped.
pub(crate) mod apply {
    use std::cell::Cell;
    use std::rc::Rc;

    use leptos::SignalSet;

    use crate::api::{ApiClientError, ApiResult};
    use crate::state::DashboardState;
    use crate::types::Reading;

    pub fn latest(state: &DashboardState, alive: &Rc<Cell<bool>>, result: ApiResult<Vec<Reading>>) {
        if !alive.get() {
            discard("latest snapshot");
            return;
        }
        match result {
            Ok(readings) => state.latest.set(readings),
            Err(e) => warn("latest snapshot", &e),
        }
    }

    pub fn history(state: &DashboardState, alive: &Rc<Cell<bool>>, result: ApiResult<Vec<Reading>>) {
        if !alive.get() {
            discard("history");
            return;
        }
        match result {
            Ok(readings) => {
                // Ordering is a backend guarantee; surface violations in the
                // console rather than silently misrendering trends.
                if readings.windows(2).any(|w| w[0].date > w[1].date) {
                    tracing::debug!("history arrived out of timestamp order");
                }
                state.history.set(readings);
            }
            Err(e) => warn("history", &e),
        }
    }

    pub fn attack_count(state: &DashboardState, alive: &Rc<Cell<bool>>, result: ApiResult<u64>) {
        if !alive.get() {
            discard("attack count");
            return;
        }
        match result {
            Ok(count) => state.attack_count.set(Some(count)),
            Err(e) => warn("attack count", &e),
        }
    }

    fn warn(bucket: &str, error: &ApiClientError) {
        tracing::warn!(bucket, %error, "refresh failed; keeping previous data");
    }

    fn discard(bucket: &str) {
        tracing::debug!(bucket, "dropping poll result that resolved after teardown");
    }
}

#[cfg(test)]
mod tests {
    use super::apply;
    use crate::api::ApiClientError;
    use crate::state::DashboardState;
    use crate::types::Reading;
    use leptos::{create_runtime, SignalGetUntracked, SignalSet};
    use std::cell::Cell;
    use std::rc::Rc;

    fn reading(id: i64) -> Reading {
        Reading {
            id,
            ldr: 500.0,
            vr: 700.0,
            temp: 27.0,
            distance: 90.0,
            date: "2024-05-01T07:30:00Z".parse().unwrap(),
        }
    }

    fn network_error() -> ApiClientError {
        ApiClientError {
            status: 0,
            message: "connection refused".to_string(),
        }
    }

    #[test]
    fn test_success_replaces_bucket_wholesale() {
        let runtime = create_runtime();
        let state = DashboardState::new();
        let alive = Rc::new(Cell::new(true));

        state.latest.set(vec![reading(1), reading(2)]);
        apply::latest(&state, &alive, Ok(vec![reading(3)]));

        let latest = state.latest.get_untracked();
        assert_eq!(latest.len(), 1);
        assert_eq!(latest[0].id, 3);
        runtime.dispose();
    }

    #[test]
    fn test_failed_fetch_retains_previous_bucket() {
        let runtime = create_runtime();
        let state = DashboardState::new();
        let alive = Rc::new(Cell::new(true));

        state.history.set(vec![reading(1)]);
        apply::history(&state, &alive, Err(network_error()));

        assert_eq!(state.history.get_untracked(), vec![reading(1)]);
        runtime.dispose();
    }

    #[test]
    fn test_buckets_fail_independently() {
        let runtime = create_runtime();
        let state = DashboardState::new();
        let alive = Rc::new(Cell::new(true));

        // History fails while the other two succeed in the same tick.
        apply::latest(&state, &alive, Ok(vec![reading(5)]));
        apply::history(&state, &alive, Err(network_error()));
        apply::attack_count(&state, &alive, Ok(3));

        assert_eq!(state.latest.get_untracked().len(), 1);
        assert!(state.history.get_untracked().is_empty());
        assert_eq!(state.attack_count.get_untracked(), Some(3));
        runtime.dispose();
    }

    #[test]
    fn test_result_after_teardown_is_discarded() {
        let runtime = create_runtime();
        let state = DashboardState::new();
        let alive = Rc::new(Cell::new(true));

        state.latest.set(vec![reading(1)]);
        state.attack_count.set(Some(2));

        // Teardown races an in-flight request: the flag goes false while the
        // request is still pending, then the response resolves late.
        alive.set(false);
        apply::latest(&state, &alive, Ok(vec![reading(9)]));
        apply::attack_count(&state, &alive, Ok(99));
        apply::history(&state, &alive, Ok(vec![reading(9)]));

        assert_eq!(state.latest.get_untracked(), vec![reading(1)]);
        assert_eq!(state.attack_count.get_untracked(), Some(2));
        assert!(state.history.get_untracked().is_empty());
        runtime.dispose();
    }

    #[test]
    fn test_attack_count_none_until_first_success() {
        let runtime = create_runtime();
        let state = DashboardState::new();
        let alive = Rc::new(Cell::new(true));

        apply::attack_count(&state, &alive, Err(network_error()));
        assert_eq!(state.attack_count.get_untracked(), None);

        apply::attack_count(&state, &alive, Ok(0));
        assert_eq!(state.attack_count.get_untracked(), Some(0));
        runtime.dispose();
    }
}
