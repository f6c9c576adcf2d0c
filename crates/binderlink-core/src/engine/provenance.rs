use super::config::FilterConfig;
use super::error::{EngineError, InputKind};
use super::progress::ProgressReporter;
use crate::core::io::discovery::find_files;
use crate::core::io::fasta::{FastaRecords, RecordFasta};
use crate::core::io::traits::TextFormat;
use crate::core::utils::naming::{experiment_name, provenance_header};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexStats {
    pub files_indexed: usize,
    pub entries_indexed: usize,
    /// Sequences re-indexed under a different header; the later header wins.
    pub collisions: usize,
    pub orphan_lines: usize,
    pub decode_errors: usize,
}

/// Maps every designed sequence (upper-cased) to its provenance header.
///
/// All records are indexed, references included, so any peptide that came out of the
/// design tree can be resolved.
#[derive(Debug, Clone, Default)]
pub struct ProvenanceIndex {
    entries: HashMap<String, String>,
    stats: IndexStats,
}

impl ProvenanceIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indexes every design file under `root`.
    pub fn build(
        root: &Path,
        config: &FilterConfig,
        reporter: &ProgressReporter,
    ) -> Result<Self, EngineError> {
        if !root.is_dir() {
            return Err(EngineError::NotFound {
                kind: InputKind::DesignDirectory,
                path: root.to_path_buf(),
            });
        }

        let files = find_files(root, &config.design_extension).map_err(EngineError::io(root))?;
        info!("Indexing {} design file(s) under {:?}", files.len(), root);

        let mut index = Self::new();
        reporter.each(&files, |path| {
            let records = RecordFasta
                .read_from_path(path)
                .map_err(EngineError::io(path))?;
            index.add_file(path, records);
            Ok::<(), EngineError>(())
        })?;

        if index.stats.collisions > 0 {
            warn!(
                "{} sequence(s) appeared under more than one header; the last header was kept.",
                index.stats.collisions
            );
        }
        Ok(index)
    }

    /// Adds the records of one design file, tagging them with its experiment name.
    pub fn add_file(&mut self, path: &Path, records: FastaRecords) {
        let experiment = experiment_name(path);
        debug!(
            "Indexing {} record(s) from {:?} as experiment '{}'",
            records.records.len(),
            path,
            experiment
        );
        self.stats.files_indexed += 1;
        self.stats.orphan_lines += records.orphan_lines;
        self.stats.decode_errors += records.decode_errors;
        for record in records.records {
            self.insert(&record.sequence, provenance_header(&experiment, &record.header));
        }
    }

    pub fn insert(&mut self, sequence: &str, header: String) {
        let key = sequence.to_uppercase();
        self.stats.entries_indexed += 1;
        match self.entries.get_mut(&key) {
            Some(existing) => {
                if *existing != header {
                    self.stats.collisions += 1;
                    debug!(
                        "Provenance collision for {}: '{}' replaced by '{}'",
                        key, existing, header
                    );
                }
                *existing = header;
            }
            None => {
                self.entries.insert(key, header);
            }
        }
    }

    /// Looks up the provenance header of a peptide, ignoring case.
    pub fn get(&self, peptide: &str) -> Option<&str> {
        self.entries
            .get(&peptide.to_uppercase())
            .map(String::as_str)
    }

    pub fn unique_sequences(&self) -> usize {
        self.entries.len()
    }

    pub fn stats(&self) -> &IndexStats {
        &self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::PipelineConfig;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn insert_normalizes_case_and_counts_entries() {
        let mut index = ProvenanceIndex::new();
        index.insert("aacdef", "exp1__d1".to_string());
        assert_eq!(index.get("AACDEF"), Some("exp1__d1"));
        assert_eq!(index.get("aaCDef"), Some("exp1__d1"));
        assert_eq!(index.stats().entries_indexed, 1);
    }

    #[test]
    fn insert_keeps_last_header_and_counts_collision() {
        let mut index = ProvenanceIndex::new();
        index.insert("AAC", "exp1__d1".to_string());
        index.insert("AAC", "exp2__d9".to_string());
        index.insert("AAC", "exp2__d9".to_string());
        assert_eq!(index.get("AAC"), Some("exp2__d9"));
        assert_eq!(index.stats().collisions, 1);
        assert_eq!(index.stats().entries_indexed, 3);
        assert_eq!(index.unique_sequences(), 1);
    }

    #[test]
    fn build_indexes_all_records_with_experiment_names() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("exp1/seqs")).unwrap();
        fs::create_dir_all(root.join("loose")).unwrap();
        fs::write(
            root.join("exp1/seqs/exp1.fa"),
            ">exp1, score=1.0\nMKTAYIAKQR\n>T=0.1, sample=1\naacdefgh\n",
        )
        .unwrap();
        fs::write(root.join("loose/other.FA"), ">ref\nGGHHKK\n").unwrap();
        fs::write(root.join("loose/ignored.txt"), ">x\nWWWW\n").unwrap();

        let index = ProvenanceIndex::build(
            root,
            &PipelineConfig::default().filter,
            &ProgressReporter::new(),
        )
        .unwrap();

        assert_eq!(index.stats().files_indexed, 2);
        assert_eq!(index.stats().entries_indexed, 3);
        assert_eq!(index.unique_sequences(), 3);
        assert_eq!(index.get("MKTAYIAKQR"), Some("exp1__exp1, score=1.0"));
        assert_eq!(index.get("AACDEFGH"), Some("exp1__T=0.1, sample=1"));
        assert_eq!(index.get("GGHHKK"), Some("loose__ref"));
        assert_eq!(index.get("WWWW"), None);
    }

    #[test]
    fn build_skips_records_under_empty_headers() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("exp1/seqs")).unwrap();
        fs::write(
            dir.path().join("exp1/seqs/exp1.fa"),
            ">ref\nMKT\n>\nAACDEFGH\n",
        )
        .unwrap();

        let index = ProvenanceIndex::build(
            dir.path(),
            &PipelineConfig::default().filter,
            &ProgressReporter::new(),
        )
        .unwrap();

        assert_eq!(index.get("AACDEFGH"), None);
        assert_eq!(index.stats().orphan_lines, 1);
        assert_eq!(index.stats().entries_indexed, 1);
    }

    #[test]
    fn build_fails_for_missing_root() {
        let dir = tempdir().unwrap();
        let result = ProvenanceIndex::build(
            &dir.path().join("nope"),
            &PipelineConfig::default().filter,
            &ProgressReporter::new(),
        );
        assert!(matches!(
            result,
            Err(EngineError::NotFound {
                kind: InputKind::DesignDirectory,
                ..
            })
        ));
    }
}
