// src/core/sample.rs
//
// Summary Sampler: assemble the bounded text payload handed to the
// summarization collaborator. `None` means "do not call the collaborator".

use crate::config::consts::DESCRIPTION_COLUMN;
use crate::record::{JobRecord, field_text};

/// Join the first `max_samples` non-empty (after trimming) description
/// values, in input order, separated by a blank line.
///
/// Records with a missing, null, or whitespace-only description are
/// skipped and do not count toward the cap. Returns `None` iff zero
/// records qualify, including a record set with no description key
/// at all.
pub fn build_summary_input(records: &[JobRecord], max_samples: usize) -> Option<String> {
    let samples: Vec<&str> = records
        .iter()
        .filter_map(|r| field_text(r, DESCRIPTION_COLUMN))
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .take(max_samples)
        .collect();

    if samples.is_empty() {
        return None;
    }
    Some(samples.join("\n\n"))
}
