/// Builds the gRPC client and server code for the `actuator.proto` definition
/// using `tonic-prost-build`.
///
/// This code generation step processes the Protocol Buffer definitions located
/// in the `proto` directory and emits Rust modules with gRPC bindings into the
/// crate's `OUT_DIR`, alongside an encoded file descriptor set used by the
/// server's reflection service.
///
/// # Files and Paths
///
/// - Proto file: `proto/actuator.proto`
/// - Includes: `proto/`
/// - Descriptor: `$OUT_DIR/actuator_descriptor.bin`
///
/// # Panics
///
/// This function will `panic!` if code generation fails.
///
/// # Output
///
/// Generated code will be accessible in Rust via:
///
/// ```rust
/// pub mod proto {
///     tonic::include_proto!("smart_agriculture.v1");
/// }
/// ```
use std::env;
use std::path::PathBuf;

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let descriptor_path = out_dir.join("actuator_descriptor.bin");

    println!("cargo:rerun-if-changed=proto/actuator.proto");

    let mut config = tonic_prost_build::Config::new();
    config.file_descriptor_set_path(&descriptor_path);

    tonic_prost_build::configure()
        .compile_with_config(config, &["proto/actuator.proto"], &["proto"])
        .unwrap();
}
