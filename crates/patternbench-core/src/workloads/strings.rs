// String assembly anti-patterns: fresh allocation per append vs. one buffer

use std::hint::black_box;

use crate::context::WorkloadCtx;

const PARTS: [&str; 10] = [
    "these", "are", "separate", "parts", "of", "a", "string", "that", "get", "connected",
];

const MANY_APPENDS: usize = 100;

/// Ten short tokens, each append producing a brand-new string from the
/// previous one, a space, and the next token.
pub(crate) fn concat_strings_plus(ctx: &WorkloadCtx, iterations: u64) -> i32 {
    for _ in 0..iterations {
        let mut text = String::from("Text:");
        for part in PARTS {
            text = format!("{} {}", text, part);
        }
        black_box(&text);
        ctx.pause();
    }
    42
}

/// Same output as [`concat_strings_plus`], assembled in one growable buffer.
pub(crate) fn concat_strings_builder(ctx: &WorkloadCtx, iterations: u64) -> i32 {
    for _ in 0..iterations {
        let mut builder = String::new();
        builder.push_str("Text:");
        for part in PARTS {
            builder.push(' ');
            builder.push_str(part);
        }
        black_box(&builder);
        ctx.pause();
    }
    42
}

/// One hundred appends of the same literal, fresh string per append.
pub(crate) fn concat_many_strings_plus(ctx: &WorkloadCtx, iterations: u64) -> i32 {
    for _ in 0..iterations {
        let mut text = String::from("Text:");
        for _ in 0..MANY_APPENDS {
            text = format!("{} something", text);
        }
        black_box(&text);
        ctx.pause();
    }
    42
}

/// One hundred appends of the same literal into one buffer.
pub(crate) fn concat_many_strings_builder(ctx: &WorkloadCtx, iterations: u64) -> i32 {
    for _ in 0..iterations {
        let mut builder = String::new();
        builder.push_str("Text:");
        for _ in 0..MANY_APPENDS {
            builder.push_str(" something");
        }
        black_box(&builder);
        ctx.pause();
    }
    42
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workloads::testing::{endpoints, FixedCaller};

    #[test]
    fn both_short_variants_assemble_the_same_text() {
        // the sentinel hides the text, so rebuild one iteration by hand
        let mut plus = String::from("Text:");
        for part in PARTS {
            plus = format!("{} {}", plus, part);
        }

        let mut builder = String::new();
        builder.push_str("Text:");
        for part in PARTS {
            builder.push(' ');
            builder.push_str(part);
        }

        assert_eq!(plus, builder);
        assert_eq!(
            plus,
            "Text: these are separate parts of a string that get connected"
        );
    }

    #[test]
    fn string_workloads_return_the_shared_sentinel() {
        let endpoints = endpoints();
        let caller = FixedCaller("response");
        let ctx = WorkloadCtx::new(false, &endpoints, &caller);

        assert_eq!(concat_strings_plus(&ctx, 2), 42);
        assert_eq!(concat_strings_builder(&ctx, 2), 42);
        assert_eq!(concat_many_strings_plus(&ctx, 2), 42);
        assert_eq!(concat_many_strings_builder(&ctx, 2), 42);
    }
}
