//! Mock actuator synthesis.
//!
//! There is no device behind this service. Every [`Actuator`] handed back to a
//! caller is built from the request alone and dropped once the response is
//! sent. Nothing here reads or writes shared state, so two calls for the same
//! `device_id` never observe each other: [`actuator_status`] reports `OFF`
//! even right after a `TURN_ON`.

use actuator_tonic_core::proto::{
    Actuator, ActuatorMode, ActuatorStatus, ControlAction, ControlActuatorRequest,
    ControlActuatorResponse, GetActuatorStatusRequest,
};
use std::borrow::Cow;

/// Actuator type reported by control responses.
pub const ACTUATOR_TYPE_NAME: &str = "pump";

/// Farm reported by control responses.
pub const FARM_ID: &str = "farm-01";

/// Zone reported by control responses.
pub const ZONE_ID: &str = "zone-A";

/// Applies a control request to a freshly synthesized actuator.
///
/// The resulting status is `ON` for [`ControlAction::TurnOn`] and `OFF` for
/// every other value, including `TURN_OFF`, `CONTROL_ACTION_UNSPECIFIED` and
/// wire values outside the enum.
pub fn control_actuator(request: ControlActuatorRequest) -> ControlActuatorResponse {
    let status = if request.action == ControlAction::TurnOn as i32 {
        ActuatorStatus::On
    } else {
        ActuatorStatus::Off
    };

    let actuator = Actuator {
        name: display_name(&request.device_id),
        device_id: request.device_id,
        actuator_type_name: ACTUATOR_TYPE_NAME.to_string(),
        farm_id: FARM_ID.to_string(),
        zone_id: ZONE_ID.to_string(),
        status: status as i32,
        mode: ActuatorMode::Manual as i32,
    };

    ControlActuatorResponse {
        actuator: Some(actuator),
    }
}

/// Reports the state of a device: always `OFF` in `MANUAL` mode.
///
/// Only `device_id`, `name`, `status` and `mode` are filled in; the type, farm
/// and zone fields stay empty.
pub fn actuator_status(request: GetActuatorStatusRequest) -> Actuator {
    Actuator {
        name: display_name(&request.device_id),
        device_id: request.device_id,
        status: ActuatorStatus::Off as i32,
        mode: ActuatorMode::Manual as i32,
        ..Default::default()
    }
}

/// Symbolic name of a wire-level action value, for logging.
pub fn action_name(action: i32) -> Cow<'static, str> {
    match ControlAction::try_from(action) {
        Ok(action) => Cow::Borrowed(action.as_str_name()),
        Err(_) => Cow::Owned(format!("UNKNOWN({action})")),
    }
}

fn display_name(device_id: &str) -> String {
    format!("Pump {device_id}")
}
