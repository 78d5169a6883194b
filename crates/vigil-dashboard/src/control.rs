//! Command Dispatcher
//!
//! Sends one operator-initiated control command per invocation and
//! reconciles the locally-displayed device status with the backend's
//! acknowledgment. The status transition is strictly pending → confirmed or
//! pending → rejected: only a confirmed success updates the status.
//!
//! There is no retry and no queue. Concurrent dispatches may race; the last
//! response received wins, which is an accepted limitation of the single
//! round-trip design rather than a correctness guarantee.

use leptos::{SignalGetUntracked, SignalSet};

use crate::api;
use crate::state::AppState;
use crate::types::{CommandResponse, DeviceCommand, DeviceStatus};

/// Decide the device status after one command round-trip.
///
/// Pure: a successful acknowledgment moves the status to the sent command's
/// status; anything else leaves the current status untouched.
pub fn reconcile(
    current: DeviceStatus,
    sent: DeviceCommand,
    response: &CommandResponse,
) -> DeviceStatus {
    if response.success {
        sent.acknowledged_status()
    } else {
        current
    }
}

/// Send one command and surface the outcome to the operator.
pub async fn dispatch(app: AppState, command: DeviceCommand) {
    match api::send_command(command).await {
        Ok(response) => {
            let current = app.device_status.get_untracked();
            let next = reconcile(current, command, &response);
            if response.success {
                app.device_status.set(next);
                app.toast_success(
                    "Device control",
                    format!("Command \"{}\" acknowledged", command.label()),
                );
            } else {
                app.toast_error(
                    "Device control",
                    format!("Device rejected \"{}\"", command.label()),
                );
            }
        }
        Err(e) => {
            tracing::warn!(command = command.as_str(), error = %e, "control command failed");
            app.toast_error("Device control", e.message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acknowledged_command_becomes_status() {
        let next = reconcile(
            DeviceStatus::Deactivated,
            DeviceCommand::ActivateSystem,
            &CommandResponse { success: true },
        );
        assert_eq!(next, DeviceStatus::SystemActive);
    }

    #[test]
    fn test_rejected_command_leaves_status_unchanged() {
        let next = reconcile(
            DeviceStatus::SystemActive,
            DeviceCommand::ActivateBuzzer,
            &CommandResponse { success: false },
        );
        assert_eq!(next, DeviceStatus::SystemActive);
    }

    #[test]
    fn test_deactivate_round_trip() {
        let next = reconcile(
            DeviceStatus::BuzzerActive,
            DeviceCommand::Deactivate,
            &CommandResponse { success: true },
        );
        assert_eq!(next, DeviceStatus::Deactivated);
    }

    #[test]
    fn test_last_write_wins_on_racing_dispatches() {
        // Two commands in flight; responses arrive out of order. Whichever
        // acknowledgment lands last determines the displayed status.
        let after_first = reconcile(
            DeviceStatus::Deactivated,
            DeviceCommand::ActivateBuzzer,
            &CommandResponse { success: true },
        );
        let after_second = reconcile(
            after_first,
            DeviceCommand::ActivateSystem,
            &CommandResponse { success: true },
        );
        assert_eq!(after_second, DeviceStatus::SystemActive);
    }
}
