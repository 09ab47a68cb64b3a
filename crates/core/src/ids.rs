// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::sync::atomic::{AtomicU64, Ordering};
use time::OffsetDateTime;

/// Sequence appended to every generated id.
///
/// Two ids created in the same millisecond still differ.
static ID_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Generates a fresh entry id.
///
/// Ids are the current Unix time in milliseconds followed by a
/// process-wide sequence number, so they sort roughly by creation time and
/// never repeat within a process.
#[must_use]
pub fn generate_id() -> String {
    let millis: i128 = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
    let sequence: u64 = ID_SEQUENCE.fetch_add(1, Ordering::SeqCst);
    format!("{millis}-{sequence}")
}
