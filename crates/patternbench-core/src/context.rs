// Shared per-run context handed to every workload

use std::thread;
use std::time::Duration;

use crate::traits::MicroCaller;

/// Fully formed microcall URLs for the self-call workloads
#[derive(Debug, Clone)]
pub struct Endpoints {
    /// This instance, e.g. `http://localhost:8080/bench?microcall=on`
    pub local: String,
    /// A second instance on the same host
    pub peer: String,
    /// An instance on another machine
    pub remote: String,
}

/// Borrowed context a workload runs against: the sleep flag, the self-call
/// targets, and the transport behind them.
pub struct WorkloadCtx<'a> {
    sleep: bool,
    pub endpoints: &'a Endpoints,
    pub caller: &'a dyn MicroCaller,
}

impl<'a> WorkloadCtx<'a> {
    pub fn new(sleep: bool, endpoints: &'a Endpoints, caller: &'a dyn MicroCaller) -> Self {
        Self {
            sleep,
            endpoints,
            caller,
        }
    }

    /// Pause 1 ms if the run asked for it, otherwise return immediately.
    ///
    /// `thread::sleep` always sleeps the full duration; there is no
    /// interruption path here.
    pub fn pause(&self) {
        if self.sleep {
            thread::sleep(Duration::from_millis(1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    struct NoCaller;

    impl MicroCaller for NoCaller {
        fn call(&self, _url: &str) -> String {
            unreachable!("no self-calls expected")
        }
    }

    fn endpoints() -> Endpoints {
        Endpoints {
            local: "http://localhost:8080/bench?microcall=on".into(),
            peer: "http://localhost:8081/bench?microcall=on".into(),
            remote: "http://192.168.0.133:8080/bench?microcall=on".into(),
        }
    }

    #[test]
    fn pause_sleeps_at_least_one_millisecond_when_enabled() {
        let endpoints = endpoints();
        let ctx = WorkloadCtx::new(true, &endpoints, &NoCaller);

        let started = Instant::now();
        ctx.pause();
        assert!(started.elapsed() >= Duration::from_millis(1));
    }

    #[test]
    fn pause_returns_immediately_when_disabled() {
        let endpoints = endpoints();
        let ctx = WorkloadCtx::new(false, &endpoints, &NoCaller);

        let started = Instant::now();
        ctx.pause();
        // generous bound, only guards against an accidental real sleep
        assert!(started.elapsed() < Duration::from_millis(50));
    }
}
