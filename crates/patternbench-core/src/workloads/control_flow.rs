// Error-as-control-flow anti-patterns
//
// The point of the exception cases is that they really do raise and catch.
// A fresh raise pays for a forced backtrace capture every iteration; the
// static variant captures once and re-raises a borrow of the same error.

use std::backtrace::Backtrace;
use std::hint::black_box;

use thiserror::Error;

use crate::context::WorkloadCtx;

/// Domain error raised and caught inside the exception workloads. The forced
/// backtrace capture is the costly part of constructing one.
///
/// The backtrace is boxed so thiserror treats it as an opaque field; a bare
/// `Backtrace` field would make the derive emit the unstable `provide` impl.
#[derive(Debug, Error)]
#[error("control flow escape")]
pub struct FlowError {
    backtrace: Box<Backtrace>,
}

impl FlowError {
    fn capture() -> Self {
        Self {
            backtrace: Box::new(Backtrace::force_capture()),
        }
    }
}

#[inline(never)]
fn raise_fresh() -> Result<(), FlowError> {
    Err(FlowError::capture())
}

#[inline(never)]
fn raise_static(error: &FlowError) -> Result<(), &FlowError> {
    Err(error)
}

/// Fresh error constructed, raised, and caught every iteration.
pub(crate) fn exception(ctx: &WorkloadCtx, iterations: u64) -> i32 {
    for _ in 0..iterations {
        if let Err(error) = raise_fresh() {
            // caught: the expected path
            black_box(&error);
        }
        ctx.pause();
    }
    42
}

/// One error allocated before the loop, the same object raised every iteration.
pub(crate) fn static_exception(ctx: &WorkloadCtx, iterations: u64) -> i32 {
    let error = FlowError::capture();
    for _ in 0..iterations {
        if let Err(error) = raise_static(&error) {
            black_box(error);
        }
        ctx.pause();
    }
    42
}

/// Cheap non-raising baseline: a boolean toggled back and forth.
pub(crate) fn no_exception(ctx: &WorkloadCtx, iterations: u64) -> i32 {
    let mut toggle = true;
    for _ in 0..iterations {
        toggle = !toggle;
        black_box(toggle);
        ctx.pause();
    }
    42
}
