// Recursion wrapper: deepen the call stack, do nothing else
//
// The exception families exist in depth-10 and depth-100 forms so the raise
// and catch (or the baseline toggle) happens at the bottom of a taller stack.

use std::hint::black_box;

use crate::case::Workload;
use crate::context::WorkloadCtx;
use crate::workloads::control_flow;

/// Linear self-recursion down to the workload. `black_box` on the depth keeps
/// the compiler from collapsing the frames into a loop.
#[inline(never)]
fn descend(depth: u32, routine: Workload, ctx: &WorkloadCtx, iterations: u64) -> i32 {
    if depth == 0 {
        routine(ctx, iterations)
    } else {
        descend(black_box(depth - 1), routine, ctx, iterations)
    }
}

pub(crate) fn exception_recursion_10(ctx: &WorkloadCtx, iterations: u64) -> i32 {
    descend(10, control_flow::exception, ctx, iterations)
}

pub(crate) fn static_exception_recursion_10(ctx: &WorkloadCtx, iterations: u64) -> i32 {
    descend(10, control_flow::static_exception, ctx, iterations)
}

pub(crate) fn no_exception_recursion_10(ctx: &WorkloadCtx, iterations: u64) -> i32 {
    descend(10, control_flow::no_exception, ctx, iterations)
}

pub(crate) fn exception_recursion_100(ctx: &WorkloadCtx, iterations: u64) -> i32 {
    descend(100, control_flow::exception, ctx, iterations)
}

pub(crate) fn static_exception_recursion_100(ctx: &WorkloadCtx, iterations: u64) -> i32 {
    descend(100, control_flow::static_exception, ctx, iterations)
}

pub(crate) fn no_exception_recursion_100(ctx: &WorkloadCtx, iterations: u64) -> i32 {
    descend(100, control_flow::no_exception, ctx, iterations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workloads::testing::{endpoints, FixedCaller};

    #[test]
    fn wrapped_workloads_still_run_to_completion() {
        let endpoints = endpoints();
        let caller = FixedCaller("response");
        let ctx = WorkloadCtx::new(false, &endpoints, &caller);

        assert_eq!(exception_recursion_10(&ctx, 3), 42);
        assert_eq!(static_exception_recursion_10(&ctx, 3), 42);
        assert_eq!(no_exception_recursion_10(&ctx, 3), 42);
        assert_eq!(exception_recursion_100(&ctx, 3), 42);
        assert_eq!(static_exception_recursion_100(&ctx, 3), 42);
        assert_eq!(no_exception_recursion_100(&ctx, 3), 42);
    }

    #[test]
    fn descent_adds_real_stack_frames() {
        use std::cell::Cell;

        thread_local! {
            static MARKER: Cell<usize> = const { Cell::new(0) };
        }

        fn record_stack_position(_ctx: &WorkloadCtx, _iterations: u64) -> i32 {
            let marker = 0u8;
            MARKER.with(|cell| cell.set(&marker as *const u8 as usize));
            42
        }

        let endpoints = endpoints();
        let caller = FixedCaller("response");
        let ctx = WorkloadCtx::new(false, &endpoints, &caller);

        descend(0, record_stack_position, &ctx, 1);
        let shallow = MARKER.with(Cell::get);

        descend(100, record_stack_position, &ctx, 1);
        let deep = MARKER.with(Cell::get);

        // 100 extra non-inlined frames must move the workload noticeably
        // down the stack; anything tail-call-folded would land in place
        assert!(
            shallow.abs_diff(deep) >= 100 * 8,
            "depth 100 moved the stack by only {} bytes",
            shallow.abs_diff(deep)
        );
    }

    #[test]
    fn depth_zero_invokes_the_routine_directly() {
        let endpoints = endpoints();
        let caller = FixedCaller("response");
        let ctx = WorkloadCtx::new(false, &endpoints, &caller);

        assert_eq!(descend(0, control_flow::no_exception, &ctx, 1), 42);
    }
}
