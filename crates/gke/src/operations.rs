use std::thread;
use std::time::{Duration, Instant};

use tracing::debug;

use axl_core::types::{OpStatus, Operation};
use axl_core::{AxlError, ClusterApi};

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Polling parameters for [`wait_for_operation`].
#[derive(Debug, Clone)]
pub struct WaitConfig {
    /// Statuses that end the wait. Defaults to `DONE` and `ABORTING`.
    pub conditions: Vec<OpStatus>,
    /// Fixed sleep between polls; no backoff.
    pub poll_interval: Duration,
    /// Give up after this long. `None` polls until a condition is met
    /// or the process is interrupted.
    pub timeout: Option<Duration>,
}

impl Default for WaitConfig {
    fn default() -> Self {
        WaitConfig {
            conditions: vec![OpStatus::Done, OpStatus::Aborting],
            poll_interval: DEFAULT_POLL_INTERVAL,
            timeout: None,
        }
    }
}

/// Polls an operation until its status reaches one of the configured
/// conditions, returning the full operation record from the final poll.
///
/// An empty condition set fails immediately without querying.
pub fn wait_for_operation(
    api: &impl ClusterApi,
    name: &str,
    config: &WaitConfig,
) -> Result<Operation, AxlError> {
    if config.conditions.is_empty() {
        return Err(AxlError::EmptyConditions);
    }

    let start = Instant::now();
    loop {
        let op = api.get_operation(name)?;
        debug!(operation = name, status = %op.status, "polled operation");

        if config.conditions.contains(&op.status) {
            return Ok(op);
        }

        if let Some(timeout) = config.timeout {
            if start.elapsed() >= timeout {
                return Err(AxlError::Timeout(timeout));
            }
        }

        thread::sleep(config.poll_interval);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;

    /// Serves a scripted status sequence, repeating the final status
    /// once the script is exhausted.
    struct ScriptedOps {
        statuses: RefCell<VecDeque<OpStatus>>,
        last: Cell<OpStatus>,
        calls: Cell<u32>,
    }

    impl ScriptedOps {
        fn new(statuses: &[OpStatus]) -> Self {
            ScriptedOps {
                statuses: RefCell::new(statuses.iter().copied().collect()),
                last: Cell::new(*statuses.last().unwrap_or(&OpStatus::StatusUnspecified)),
                calls: Cell::new(0),
            }
        }
    }

    impl ClusterApi for ScriptedOps {
        fn get_operation(&self, name: &str) -> Result<Operation, AxlError> {
            self.calls.set(self.calls.get() + 1);
            let status = self
                .statuses
                .borrow_mut()
                .pop_front()
                .unwrap_or(self.last.get());
            Ok(Operation {
                name: name.to_string(),
                status,
                zone: None,
                operation_type: None,
                detail: None,
                status_message: None,
                target_link: None,
            })
        }
    }

    fn fast_config(conditions: Vec<OpStatus>) -> WaitConfig {
        WaitConfig {
            conditions,
            poll_interval: Duration::from_millis(1),
            timeout: None,
        }
    }

    #[test]
    fn polls_until_condition_and_returns_final_response() {
        let api = ScriptedOps::new(&[OpStatus::Running, OpStatus::Running, OpStatus::Done]);
        let config = fast_config(vec![OpStatus::Done]);

        let op = wait_for_operation(&api, "projects/p/locations/z/operations/op-1", &config)
            .unwrap();

        assert_eq!(api.calls.get(), 3);
        assert_eq!(op.status, OpStatus::Done);
        assert_eq!(op.name, "projects/p/locations/z/operations/op-1");
    }

    #[test]
    fn aborting_counts_as_terminal_by_default() {
        let api = ScriptedOps::new(&[OpStatus::Pending, OpStatus::Aborting]);
        let config = WaitConfig {
            poll_interval: Duration::from_millis(1),
            ..WaitConfig::default()
        };

        let op = wait_for_operation(&api, "op", &config).unwrap();
        assert_eq!(op.status, OpStatus::Aborting);
        assert_eq!(api.calls.get(), 2);
    }

    #[test]
    fn empty_conditions_fail_without_querying() {
        let api = ScriptedOps::new(&[OpStatus::Done]);
        let config = fast_config(vec![]);

        let err = wait_for_operation(&api, "op", &config).unwrap_err();
        assert!(matches!(err, AxlError::EmptyConditions));
        assert_eq!(api.calls.get(), 0);
    }

    #[test]
    fn times_out_when_operation_never_converges() {
        let api = ScriptedOps::new(&[OpStatus::Running]);
        let config = WaitConfig {
            conditions: vec![OpStatus::Done],
            poll_interval: Duration::from_millis(1),
            timeout: Some(Duration::from_millis(10)),
        };

        let err = wait_for_operation(&api, "op", &config).unwrap_err();
        assert!(matches!(err, AxlError::Timeout(_)));
    }

    #[test]
    fn query_failures_propagate() {
        struct Failing;
        impl ClusterApi for Failing {
            fn get_operation(&self, _name: &str) -> Result<Operation, AxlError> {
                Err(AxlError::NotFound("op".to_string()))
            }
        }

        let err = wait_for_operation(&Failing, "op", &fast_config(vec![OpStatus::Done]))
            .unwrap_err();
        assert!(matches!(err, AxlError::NotFound(_)));
    }
}
