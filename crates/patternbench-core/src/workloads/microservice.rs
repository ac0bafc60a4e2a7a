// Microservice-call family: one service call per iteration, last response kept
//
// The direct case calls an in-process stand-in; the other three go through
// the MicroCaller transport against the configured endpoints. Transport
// failures surface as the literal "fail" body and never abort the run.

use std::hint::black_box;

use chrono::Local;

use crate::context::WorkloadCtx;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Local wall-clock time with millisecond precision, the microcall body format.
pub fn timestamp_now() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// In-process stand-in for a microservice
fn fake_microservice() -> String {
    timestamp_now()
}

/// Nominal sum referencing the last response so it stays live
fn sentinel_for(last: &str) -> i32 {
    42 + if last == "response" { 23 } else { 42 }
}

fn call_loop(ctx: &WorkloadCtx, iterations: u64, url: &str) -> i32 {
    let mut last = String::new();
    for _ in 0..iterations {
        last = ctx.caller.call(url);
        ctx.pause();
    }
    sentinel_for(black_box(&last))
}

/// Service call without transport: the fake microservice, inline.
pub(crate) fn micro_service_direct(ctx: &WorkloadCtx, iterations: u64) -> i32 {
    let mut last = String::new();
    for _ in 0..iterations {
        last = fake_microservice();
        ctx.pause();
    }
    sentinel_for(black_box(&last))
}

/// One HTTP GET per iteration against this instance.
pub(crate) fn micro_service_local(ctx: &WorkloadCtx, iterations: u64) -> i32 {
    call_loop(ctx, iterations, &ctx.endpoints.local)
}

/// One HTTP GET per iteration against the second local instance.
pub(crate) fn micro_service_local_other(ctx: &WorkloadCtx, iterations: u64) -> i32 {
    call_loop(ctx, iterations, &ctx.endpoints.peer)
}

/// One HTTP GET per iteration against the remote instance.
pub(crate) fn micro_service_remote(ctx: &WorkloadCtx, iterations: u64) -> i32 {
    call_loop(ctx, iterations, &ctx.endpoints.remote)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::MicroCaller;
    use crate::workloads::testing::{endpoints, FixedCaller};
    use std::cell::RefCell;

    #[test]
    fn timestamp_has_millisecond_precision() {
        let re = regex::Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}\.\d{3}$").unwrap();
        assert!(re.is_match(&timestamp_now()), "got {}", timestamp_now());
    }

    #[test]
    fn direct_case_never_touches_the_transport() {
        struct Panicking;
        impl MicroCaller for Panicking {
            fn call(&self, _url: &str) -> String {
                panic!("direct case must not call out");
            }
        }

        let endpoints = endpoints();
        let ctx = WorkloadCtx::new(false, &endpoints, &Panicking);
        // the timestamp body is not "response", so the sentinel is 42 + 42
        assert_eq!(micro_service_direct(&ctx, 3), 84);
    }

    #[test]
    fn call_count_equals_iterations_and_targets_the_configured_endpoint() {
        struct Recording(RefCell<Vec<String>>);
        impl MicroCaller for Recording {
            fn call(&self, url: &str) -> String {
                self.0.borrow_mut().push(url.to_string());
                "response".to_string()
            }
        }

        let endpoints = endpoints();
        let caller = Recording(RefCell::new(Vec::new()));
        let ctx = WorkloadCtx::new(false, &endpoints, &caller);

        assert_eq!(micro_service_local(&ctx, 4), 65);
        assert_eq!(caller.0.borrow().len(), 4);
        assert!(caller.0.borrow().iter().all(|url| url == &endpoints.local));

        caller.0.borrow_mut().clear();
        assert_eq!(micro_service_local_other(&ctx, 2), 65);
        assert!(caller.0.borrow().iter().all(|url| url == &endpoints.peer));

        caller.0.borrow_mut().clear();
        assert_eq!(micro_service_remote(&ctx, 2), 65);
        assert!(caller.0.borrow().iter().all(|url| url == &endpoints.remote));
    }

    #[test]
    fn failed_calls_do_not_abort_the_run() {
        let endpoints = endpoints();
        let caller = FixedCaller("fail");
        let ctx = WorkloadCtx::new(false, &endpoints, &caller);

        assert_eq!(micro_service_local(&ctx, 3), 84);
    }
}
