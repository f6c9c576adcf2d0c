use serde::Serialize;
use std::path::{Path, PathBuf};

/// One structural threading task: thread `sequence` onto the backbone in `structure_path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadingJob {
    pub stem: String,
    pub sequence: String,
    /// 1-based, counted independently for each stem.
    pub output_index: usize,
    pub structure_path: PathBuf,
}

impl ThreadingJob {
    /// Output prefix handed to the threading engine, unique per (stem, index).
    pub fn output_prefix(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(format!("{}_threaded_{}_", self.stem, self.output_index))
    }

    pub fn manifest_row(&self, output_dir: &Path) -> ManifestRow {
        ManifestRow {
            stem: self.stem.clone(),
            sequence: self.sequence.clone(),
            output_index: self.output_index,
            structure_path: self.structure_path.display().to_string(),
            output_prefix: self.output_prefix(output_dir).display().to_string(),
        }
    }
}

/// A row of the CSV job manifest written next to the command file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestRow {
    pub stem: String,
    pub sequence: String,
    pub output_index: usize,
    pub structure_path: String,
    pub output_prefix: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job() -> ThreadingJob {
        ThreadingJob {
            stem: "exp1".to_string(),
            sequence: "AACDEFGH".to_string(),
            output_index: 2,
            structure_path: PathBuf::from("pdbs/exp1.pdb"),
        }
    }

    #[test]
    fn output_prefix_encodes_stem_and_local_index() {
        let prefix = job().output_prefix(Path::new("out"));
        assert_eq!(prefix, Path::new("out").join("exp1_threaded_2_"));
    }

    #[test]
    fn manifest_row_mirrors_job_fields() {
        let row = job().manifest_row(Path::new("out"));
        assert_eq!(row.stem, "exp1");
        assert_eq!(row.output_index, 2);
        assert_eq!(row.structure_path, Path::new("pdbs/exp1.pdb").display().to_string());
    }
}
