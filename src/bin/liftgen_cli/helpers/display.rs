// ABOUTME: Output helpers for the liftgen CLI
// ABOUTME: Writes JSON results to stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftgen Contributors

use liftgen::errors::AppResult;
use serde::Serialize;

/// Print `value` as JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> AppResult<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{rendered}");
    Ok(())
}
