//! Generated protobuf types for the `idagrpc.v1` wire package.
//!
//! The schema source of truth is `proto/idagrpc/v1/service.proto`; the
//! generated module is checked in so builds need neither protoc nor
//! prost-build.

pub mod v1 {
    include!("generated/idagrpc.v1.rs");
}
