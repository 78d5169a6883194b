//! Data types for the Vigil Dashboard
//!
//! These types mirror the backend API models for serialization/deserialization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Sensor Readings
// ============================================================================

/// One sensor sample as reported by the node.
///
/// Field names match the backend JSON exactly; any extra fields the backend
/// adds are ignored on deserialization. Readings are immutable once received;
/// the poller replaces whole collections, it never patches them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub id: i64,
    /// Light-dependent resistor value.
    pub ldr: f64,
    /// Variable (trim) resistor value.
    pub vr: f64,
    /// Temperature in degrees Celsius.
    pub temp: f64,
    /// Ultrasonic distance in centimeters.
    pub distance: f64,
    /// Server-assigned sample time.
    pub date: DateTime<Utc>,
}

/// Response shape of `GET /api/attackCount`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttackCountResponse {
    pub att: u64,
}

// ============================================================================
// Device Control
// ============================================================================

/// Control commands understood by the node firmware.
///
/// The wire strings are the firmware's own protocol.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DeviceCommand {
    #[serde(rename = "RGB_ON")]
    ActivateSystem,
    #[serde(rename = "BUZZER_ON")]
    ActivateBuzzer,
    #[serde(rename = "OFF")]
    Deactivate,
}

impl DeviceCommand {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ActivateSystem => "RGB_ON",
            Self::ActivateBuzzer => "BUZZER_ON",
            Self::Deactivate => "OFF",
        }
    }

    /// Operator-facing button label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::ActivateSystem => "Open System",
            Self::ActivateBuzzer => "Buzzer",
            Self::Deactivate => "Off",
        }
    }

    /// The status the device enters once this command is acknowledged.
    pub fn acknowledged_status(&self) -> DeviceStatus {
        match self {
            Self::ActivateSystem => DeviceStatus::SystemActive,
            Self::ActivateBuzzer => DeviceStatus::BuzzerActive,
            Self::Deactivate => DeviceStatus::Deactivated,
        }
    }
}

/// Request body of `POST /api/getControlCommand`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandRequest {
    pub command: DeviceCommand,
}

/// Response body of `POST /api/getControlCommand`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandResponse {
    pub success: bool,
}

/// Last command the backend acknowledged, held purely client-side.
///
/// Never set from a command that is merely in flight or that failed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeviceStatus {
    #[default]
    Deactivated,
    SystemActive,
    BuzzerActive,
}

impl DeviceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Deactivated => "deactivated",
            Self::SystemActive => "system active",
            Self::BuzzerActive => "buzzer active",
        }
    }

    pub fn color_class(&self) -> &'static str {
        match self {
            Self::Deactivated => "status-stopped",
            Self::SystemActive => "status-running",
            Self::BuzzerActive => "status-warning",
        }
    }
}

// ============================================================================
// Chart Selection
// ============================================================================

/// The one visualization variant active on the dashboard.
///
/// Switching never discards fetched data and never triggers a fetch; it only
/// changes which bucket is transformed for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChartSelection {
    #[default]
    Aggregate,
    Snapshot,
    TrendLdrVr,
    TrendTempDistance,
}

impl ChartSelection {
    pub const ALL: [ChartSelection; 4] = [
        Self::Aggregate,
        Self::Snapshot,
        Self::TrendLdrVr,
        Self::TrendTempDistance,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Aggregate => "Doughnut: Temperature & Distance",
            Self::Snapshot => "Bars: LDR & VR per Reading",
            Self::TrendLdrVr => "Trend: LDR & VR",
            Self::TrendTempDistance => "Trend: Temperature & Distance",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reading_parses_backend_json() {
        let json = r#"{
            "id": 42,
            "ldr": 512.0,
            "vr": 730.5,
            "temp": 28.4,
            "distance": 115.0,
            "date": "2024-05-01T07:30:00Z",
            "extra_field": "ignored"
        }"#;
        let reading: Reading = serde_json::from_str(json).unwrap();
        assert_eq!(reading.id, 42);
        assert_eq!(reading.temp, 28.4);
        assert_eq!(reading.date.to_rfc3339(), "2024-05-01T07:30:00+00:00");
    }

    #[test]
    fn test_command_wire_strings() {
        let body = serde_json::to_string(&CommandRequest {
            command: DeviceCommand::ActivateSystem,
        })
        .unwrap();
        assert_eq!(body, r#"{"command":"RGB_ON"}"#);

        let body = serde_json::to_string(&CommandRequest {
            command: DeviceCommand::Deactivate,
        })
        .unwrap();
        assert_eq!(body, r#"{"command":"OFF"}"#);
    }

    #[test]
    fn test_command_response_parses() {
        let ok: CommandResponse = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(ok.success);
        let rejected: CommandResponse = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert!(!rejected.success);
    }

    #[test]
    fn test_attack_count_parses() {
        let count: AttackCountResponse = serde_json::from_str(r#"{"att":7}"#).unwrap();
        assert_eq!(count.att, 7);
    }

    #[test]
    fn test_device_status_defaults_deactivated() {
        assert_eq!(DeviceStatus::default(), DeviceStatus::Deactivated);
    }
}
