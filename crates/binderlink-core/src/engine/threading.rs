use crate::core::io::commands::CommandTemplate;
use crate::core::models::job::ThreadingJob;
use crate::core::models::record::SequenceRecord;
use crate::core::utils::naming::structural_stem;
use std::collections::{BTreeSet, HashMap};
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Threading jobs derived from provenance-tagged peptides, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThreadingPlan {
    pub jobs: Vec<ThreadingJob>,
    per_stem: HashMap<String, usize>,
    missing: BTreeSet<String>,
    missing_records: usize,
}

impl ThreadingPlan {
    /// Plans jobs against backbone files `{stem}.{extension}` directly inside `structure_dir`.
    pub fn plan(records: &[SequenceRecord], structure_dir: &Path, extension: &str) -> Self {
        Self::plan_with(records, |stem| {
            let path = structure_dir.join(format!("{stem}.{extension}"));
            path.is_file().then_some(path)
        })
    }

    /// Plans jobs using `resolve` to find the backbone file of each stem.
    ///
    /// Records whose stem does not resolve, or is not a single plain file-name
    /// component, are skipped and remembered as missing.
    pub fn plan_with(
        records: &[SequenceRecord],
        resolve: impl Fn(&str) -> Option<PathBuf>,
    ) -> Self {
        let mut plan = Self::default();
        let mut resolved: HashMap<String, Option<PathBuf>> = HashMap::new();

        for record in records {
            let stem = structural_stem(&record.header);
            let structure = resolved
                .entry(stem.to_string())
                .or_insert_with(|| is_plain_file_name(stem).then(|| resolve(stem)).flatten())
                .clone();

            let Some(structure_path) = structure else {
                debug!("No structure for stem '{}', skipping {}", stem, record.sequence);
                plan.missing.insert(stem.to_string());
                plan.missing_records += 1;
                continue;
            };

            let counter = plan.per_stem.entry(stem.to_string()).or_insert(0);
            *counter += 1;
            plan.jobs.push(ThreadingJob {
                stem: stem.to_string(),
                sequence: record.sequence.clone(),
                output_index: *counter,
                structure_path,
            });
        }
        plan
    }

    /// Number of distinct backbones referenced by at least one job.
    pub fn backbone_count(&self) -> usize {
        self.per_stem.len()
    }

    /// Distinct stems with no backbone file, sorted.
    pub fn missing_stems(&self) -> impl Iterator<Item = &str> {
        self.missing.iter().map(String::as_str)
    }

    pub fn missing_count(&self) -> usize {
        self.missing.len()
    }

    /// Records skipped because their stem had no backbone file.
    pub fn skipped_records(&self) -> usize {
        self.missing_records
    }

    /// The first `limit` missing stems in sorted order.
    pub fn missing_preview(&self, limit: usize) -> Vec<String> {
        self.missing_stems().take(limit).map(str::to_string).collect()
    }

    pub fn render_commands(&self, template: &CommandTemplate, output_dir: &Path) -> Vec<String> {
        self.jobs
            .iter()
            .map(|job| template.render(job, output_dir))
            .collect()
    }
}

/// A stem must name a file directly inside its directory: exactly one normal
/// path component, so no separators, roots, or `.`/`..`.
fn is_plain_file_name(stem: &str) -> bool {
    let mut components = Path::new(stem).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}
