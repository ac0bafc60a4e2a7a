// Seam between the catalogue and the outbound HTTP transport

/// Issues one blocking GET against a fully formed URL and returns the body.
///
/// Implementations never fail: any transport problem collapses to the
/// literal `"fail"` so a benchmark run is not aborted by a dead peer.
pub trait MicroCaller {
    fn call(&self, url: &str) -> String;
}
