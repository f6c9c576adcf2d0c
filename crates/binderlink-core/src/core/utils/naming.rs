//! Header and path conventions that link a peptide back to where it came from.
//!
//! Designed sequences live in a tree shaped like `<root>/<experiment>/seqs/<design>.fa`.
//! The experiment name is recovered from that path, joined with the original FASTA
//! header into a provenance header, and later cut back down to a structural stem
//! naming the backbone file the design was produced from.

use std::ffi::OsStr;
use std::path::{Component, Path};

/// Directory name that marks the per-experiment sequence folder.
pub const SEQS_DIR: &str = "seqs";

/// Separator between the experiment name and the original header.
pub const PROVENANCE_SEPARATOR: &str = "__";

/// Experiment prefix used for peptides with no recoverable provenance.
pub const UNMAPPED_PREFIX: &str = "unmapped";

/// Derives the experiment name for a design sequence file.
///
/// The name is the path component immediately preceding the first component named
/// exactly `seqs`. When there is no such component, or `seqs` is the very first
/// component, the name falls back to the file's immediate parent directory name
/// (empty when the file has no named parent).
pub fn experiment_name(path: &Path) -> String {
    let parts: Vec<&OsStr> = path.components().map(Component::as_os_str).collect();

    if let Some(idx) = parts.iter().position(|part| *part == SEQS_DIR) {
        if idx > 0 {
            return parts[idx - 1].to_string_lossy().into_owned();
        }
    }

    path.parent()
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Builds `"{experiment}__{header}"`.
pub fn provenance_header(experiment: &str, header: &str) -> String {
    format!("{experiment}{PROVENANCE_SEPARATOR}{header}")
}

/// Builds the placeholder header for a peptide missing from the provenance index.
pub fn unmapped_header(peptide: &str) -> String {
    provenance_header(UNMAPPED_PREFIX, peptide)
}

/// Cuts a provenance header down to the stem of its structural file.
///
/// The header is truncated before its first `,`, then before its first `__`.
pub fn structural_stem(header: &str) -> &str {
    let before_comma = header.split(',').next().unwrap_or_default();
    before_comma
        .split(PROVENANCE_SEPARATOR)
        .next()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn experiment_name_uses_component_before_seqs() {
        let path = PathBuf::from("outputs/exp1/seqs/design.fa");
        assert_eq!(experiment_name(&path), "exp1");
    }

    #[test]
    fn experiment_name_uses_first_seqs_component_only() {
        let path = PathBuf::from("root/exp1/seqs/nested/seqs/design.fa");
        assert_eq!(experiment_name(&path), "exp1");
    }

    #[test]
    fn experiment_name_falls_back_to_parent_directory() {
        let path = PathBuf::from("outputs/exp2/design.fa");
        assert_eq!(experiment_name(&path), "exp2");
    }

    #[test]
    fn experiment_name_falls_back_when_seqs_is_leading_component() {
        let path = PathBuf::from("seqs/design.fa");
        assert_eq!(experiment_name(&path), "seqs");
    }

    #[test]
    fn experiment_name_is_empty_for_bare_file_name() {
        assert_eq!(experiment_name(Path::new("design.fa")), "");
    }

    #[test]
    fn structural_stem_truncates_comma_then_separator() {
        assert_eq!(structural_stem("exp1__design1, T=0.1, sample=20"), "exp1");
    }

    #[test]
    fn structural_stem_keeps_header_without_delimiters() {
        assert_eq!(structural_stem("backbone_7"), "backbone_7");
    }

    #[test]
    fn structural_stem_of_unmapped_header_is_unmapped() {
        assert_eq!(structural_stem(&unmapped_header("AACDEFGH")), "unmapped");
    }

    #[test]
    fn provenance_header_joins_with_double_underscore() {
        assert_eq!(
            provenance_header("exp1", "T=0.1, sample=20"),
            "exp1__T=0.1, sample=20"
        );
    }
}
