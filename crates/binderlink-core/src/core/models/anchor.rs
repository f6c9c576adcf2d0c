//! N-terminal anchor expansion and its inverse.
//!
//! Every designed peptide is submitted to the binding predictor once per canonical
//! amino acid, with that residue prepended as the P1 anchor. Qualifying predictions
//! are mapped back by removing exactly one leading symbol.

/// The 20 canonical amino-acid one-letter codes, in expansion order.
pub const ANCHOR_RESIDUES: [char; 20] = [
    'A', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'K', 'L', 'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'V',
    'W', 'Y',
];

/// Yields the 20 anchor-prefixed variants of `sequence`, in [`ANCHOR_RESIDUES`] order.
///
/// The sequence is concatenated verbatim; no case normalization is applied.
pub fn expand(sequence: &str) -> impl Iterator<Item = String> + '_ {
    ANCHOR_RESIDUES.iter().map(move |anchor| {
        let mut candidate = String::with_capacity(sequence.len() + 1);
        candidate.push(*anchor);
        candidate.push_str(sequence);
        candidate
    })
}

/// Removes the leading anchor symbol from an anchor-prefixed peptide.
///
/// Returns `None` when the peptide has fewer than two symbols, since nothing of the
/// original design would remain.
pub fn strip_anchor(peptide: &str) -> Option<&str> {
    let mut chars = peptide.chars();
    chars.next()?;
    let rest = chars.as_str();
    if rest.is_empty() { None } else { Some(rest) }
}
