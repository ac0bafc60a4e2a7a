// The load generating routines
//
// Every routine fulfills the `Workload` signature from `case.rs`: it loops
// `iterations` times over one unit of the named anti-pattern, calls the sleep
// helper after each outer iteration, and returns a sentinel that is black-boxed
// by the harness so the loop body cannot be eliminated.

pub mod control_flow;
pub mod microservice;
pub mod recursion;
pub mod strings;
