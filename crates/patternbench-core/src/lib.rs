// Anti-pattern workload catalogue and measurement harness
//
// This crate is transport-agnostic: it knows nothing about HTTP beyond the
// `MicroCaller` trait the self-call workloads go through.
//
// Key design decisions:
// - Run configuration is a per-request value threaded through the harness;
//   the measured duration comes back as a value (no process-wide state)
// - The catalogue is a closed enum; dispatch is a function-pointer lookup
// - All workloads share one signature: fn(&WorkloadCtx, u64) -> i32, where
//   the i32 is a sentinel that only exists to defeat dead-code elimination
// - The outbound self-call transport lives behind the MicroCaller trait so
//   the catalogue can be exercised without a network

pub mod case;
pub mod context;
pub mod harness;
pub mod run;
pub mod traits;
pub mod workloads;

// Re-exports for convenience
pub use case::{Case, UnknownCase, Workload};
pub use context::{Endpoints, WorkloadCtx};
pub use harness::measure;
pub use run::{MeasuredRun, RunConfig, MAX_MAGNITUDE, MIN_MAGNITUDE, WARMUP_ITERATIONS};
pub use traits::MicroCaller;
pub use workloads::microservice::timestamp_now;
