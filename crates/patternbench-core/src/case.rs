// The closed workload catalogue
//
// Case names are the exact query-string literals the HTTP surface accepts.
// Dispatch is a name -> function-pointer lookup, one match arm per case.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::context::WorkloadCtx;
use crate::workloads::{control_flow, microservice, recursion, strings};

/// Signature every load routine fulfills: iteration count in, sentinel out.
pub type Workload = fn(&WorkloadCtx, u64) -> i32;

/// Requested case name is not part of the catalogue
#[derive(Debug, Error)]
#[error("unknown benchmark case: {0}")]
pub struct UnknownCase(String);

/// One entry of the closed workload catalogue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    ConcatStringsPlus,
    ConcatStringsBuilder,
    ConcatManyStringsPlus,
    ConcatManyStringsBuilder,
    Exception,
    StaticException,
    NoException,
    ExceptionRecursion10,
    StaticExceptionRecursion10,
    NoExceptionRecursion10,
    ExceptionRecursion100,
    StaticExceptionRecursion100,
    NoExceptionRecursion100,
    MicroServiceDirect,
    MicroServiceLocal,
    MicroServiceLocalOtherTomcat,
    MicroServiceRemote,
}

impl Case {
    /// Every catalogue entry, in presentation order
    pub const ALL: [Case; 17] = [
        Case::ConcatStringsPlus,
        Case::ConcatStringsBuilder,
        Case::ConcatManyStringsPlus,
        Case::ConcatManyStringsBuilder,
        Case::Exception,
        Case::StaticException,
        Case::NoException,
        Case::ExceptionRecursion10,
        Case::StaticExceptionRecursion10,
        Case::NoExceptionRecursion10,
        Case::ExceptionRecursion100,
        Case::StaticExceptionRecursion100,
        Case::NoExceptionRecursion100,
        Case::MicroServiceDirect,
        Case::MicroServiceLocal,
        Case::MicroServiceLocalOtherTomcat,
        Case::MicroServiceRemote,
    ];

    /// The query-string literal for this case
    pub fn as_str(&self) -> &'static str {
        match self {
            Case::ConcatStringsPlus => "concatStringsPlus",
            Case::ConcatStringsBuilder => "concatStringsBuilder",
            Case::ConcatManyStringsPlus => "concatManyStringsPlus",
            Case::ConcatManyStringsBuilder => "concatManyStringsBuilder",
            Case::Exception => "exception",
            Case::StaticException => "staticException",
            Case::NoException => "noException",
            Case::ExceptionRecursion10 => "exceptionRecursion10",
            Case::StaticExceptionRecursion10 => "staticExceptionRecursion10",
            Case::NoExceptionRecursion10 => "noExceptionRecursion10",
            Case::ExceptionRecursion100 => "exceptionRecursion100",
            Case::StaticExceptionRecursion100 => "staticExceptionRecursion100",
            Case::NoExceptionRecursion100 => "noExceptionRecursion100",
            Case::MicroServiceDirect => "microServiceDirect",
            Case::MicroServiceLocal => "microServiceLocal",
            Case::MicroServiceLocalOtherTomcat => "microServiceLocalOtherTomcat",
            Case::MicroServiceRemote => "microServiceRemote",
        }
    }

    /// The load routine registered for this case
    pub fn routine(&self) -> Workload {
        match self {
            Case::ConcatStringsPlus => strings::concat_strings_plus,
            Case::ConcatStringsBuilder => strings::concat_strings_builder,
            Case::ConcatManyStringsPlus => strings::concat_many_strings_plus,
            Case::ConcatManyStringsBuilder => strings::concat_many_strings_builder,
            Case::Exception => control_flow::exception,
            Case::StaticException => control_flow::static_exception,
            Case::NoException => control_flow::no_exception,
            Case::ExceptionRecursion10 => recursion::exception_recursion_10,
            Case::StaticExceptionRecursion10 => recursion::static_exception_recursion_10,
            Case::NoExceptionRecursion10 => recursion::no_exception_recursion_10,
            Case::ExceptionRecursion100 => recursion::exception_recursion_100,
            Case::StaticExceptionRecursion100 => recursion::static_exception_recursion_100,
            Case::NoExceptionRecursion100 => recursion::no_exception_recursion_100,
            Case::MicroServiceDirect => microservice::micro_service_direct,
            Case::MicroServiceLocal => microservice::micro_service_local,
            Case::MicroServiceLocalOtherTomcat => microservice::micro_service_local_other,
            Case::MicroServiceRemote => microservice::micro_service_remote,
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Case {
    type Err = UnknownCase;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Case::ALL
            .iter()
            .find(|case| case.as_str() == s)
            .copied()
            .ok_or_else(|| UnknownCase(s.to_string()))
    }
}
