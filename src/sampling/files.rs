use crate::sampling::seed;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Pick roughly `sample_pct`% of `paths` by hash bucket, plus every file in
/// `file_locs` larger than `min_loc`. The result is sorted and
/// duplicate-free.
pub fn select_files(
    paths: &[String],
    sample_pct: f64,
    min_loc: f64,
    file_locs: Option<&BTreeMap<String, f64>>,
) -> Vec<String> {
    let mut selected: BTreeSet<&str> = paths
        .iter()
        .map(String::as_str)
        .filter(|path| f64::from(seed(path) % 100) < sample_pct)
        .collect();
    let hashed = selected.len();

    if let Some(locs) = file_locs {
        selected.extend(
            locs.iter()
                .filter(|(_, loc)| **loc > min_loc)
                .map(|(path, _)| path.as_str()),
        );
    }

    debug!(
        candidates = paths.len(),
        hashed,
        selected = selected.len(),
        sample_pct,
        min_loc,
        "selected file sample"
    );

    selected.into_iter().map(str::to_string).collect()
}
