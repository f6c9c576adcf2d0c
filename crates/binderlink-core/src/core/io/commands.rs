use crate::core::models::job::ThreadingJob;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Renders threading jobs into command lines for the external threading engine.
///
/// The rendered shape is fixed by the engine:
/// `<binary> -in:file:s <structure> -parser:protocol <protocol> -parser:script_vars sequence=<seq> -out:prefix <prefix>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandTemplate<'a> {
    pub engine_binary: &'a str,
    pub protocol: &'a str,
}

impl CommandTemplate<'_> {
    pub fn render(&self, job: &ThreadingJob, output_dir: &Path) -> String {
        format!(
            "{} -in:file:s {} -parser:protocol {} -parser:script_vars sequence={} -out:prefix {}",
            self.engine_binary,
            job.structure_path.display(),
            self.protocol,
            job.sequence,
            job.output_prefix(output_dir).display()
        )
    }
}

/// Writes one command per line; an empty job list produces an empty file.
pub fn write_commands(path: &Path, commands: &[String]) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for command in commands {
        writeln!(writer, "{}", command)?;
    }
    writer.flush()
}

/// Writes the CSV job manifest, one row per job in command order.
pub fn write_manifest(
    path: &Path,
    jobs: &[ThreadingJob],
    output_dir: &Path,
) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_path(path)?;
    for job in jobs {
        writer.serialize(job.manifest_row(output_dir))?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn job(stem: &str, index: usize) -> ThreadingJob {
        ThreadingJob {
            stem: stem.to_string(),
            sequence: "AACDEFGH".to_string(),
            output_index: index,
            structure_path: PathBuf::from(format!("pdbs/{stem}.pdb")),
        }
    }

    #[test]
    fn render_produces_exact_engine_command() {
        let template = CommandTemplate {
            engine_binary: "rosetta_scripts",
            protocol: "thread.xml",
        };
        let command = template.render(&job("exp1", 1), Path::new("out"));
        assert_eq!(
            command,
            "rosetta_scripts -in:file:s pdbs/exp1.pdb -parser:protocol thread.xml \
             -parser:script_vars sequence=AACDEFGH -out:prefix out/exp1_threaded_1_"
        );
    }

    #[test]
    fn write_commands_terminates_every_line() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cmds.txt");
        write_commands(&path, &["a".to_string(), "b".to_string()]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "a\nb\n");

        write_commands(&path, &[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn write_manifest_emits_header_and_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("jobs.csv");
        write_manifest(&path, &[job("exp1", 1), job("exp1", 2)], Path::new("out")).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(
            lines[0],
            "stem,sequence,output_index,structure_path,output_prefix"
        );
        assert_eq!(lines.len(), 3);
        assert!(lines[2].starts_with("exp1,AACDEFGH,2,"));
    }
}
