#![doc = include_str!("../README.md")]

mod common;
pub use common::*;

/// gRPC service and message definitions generated from `proto/actuator.proto`.
///
/// ## Service
///
/// - `ActuatorManagerService::ControlActuator`: applies a [`ControlAction`] to
///   a device and answers with a [`ControlActuatorResponse`].
/// - `ActuatorManagerService::GetActuatorStatus`: answers with the device's
///   [`Actuator`] state.
///
/// Enum-typed fields are carried as `i32` on the wire. Use the generated
/// accessors (`action()`, `status()`, `mode()`) to read them; unknown values
/// decode to the enum's zero variant.
///
/// [`ControlAction`]: crate::proto::ControlAction
/// [`ControlActuatorResponse`]: crate::proto::ControlActuatorResponse
/// [`Actuator`]: crate::proto::Actuator
pub mod proto {
    tonic::include_proto!("smart_agriculture.v1");

    /// Encoded `FileDescriptorSet` for the actuator protocol, used to serve
    /// gRPC reflection.
    pub const FILE_DESCRIPTOR_SET: &[u8] =
        tonic::include_file_descriptor_set!("actuator_descriptor");
}
