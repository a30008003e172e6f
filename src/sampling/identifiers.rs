use crate::sampling::{seed, sha256_hex};

/// Choose `count` identifiers from a file for naming review.
///
/// Small lists come back untouched. Larger ones are ordered by the SHA-256 of
/// `"{seed}:{identifier}"`, with the file's path seed mixed in, and
/// truncated. The output follows that hash order, not the input order.
pub fn select_identifiers_for_file(
    file_path: &str,
    identifiers: &[String],
    count: usize,
) -> Vec<String> {
    if identifiers.len() <= count {
        return identifiers.to_vec();
    }
    let path_seed = seed(file_path);
    let mut keyed: Vec<(String, &String)> = identifiers
        .iter()
        .map(|ident| (sha256_hex(format!("{path_seed}:{ident}").as_bytes()), ident))
        .collect();
    keyed.sort();
    keyed
        .into_iter()
        .take(count)
        .map(|(_, ident)| ident.clone())
        .collect()
}
