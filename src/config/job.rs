use std::borrow::Cow;
use std::path::{Path, PathBuf};

use derive_more::Display;
use hashlink::LinkedHashMap;
use saphyr::{Scalar, Yaml};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum JobMode {
    /// Diff, then apply the patch to the target.
    #[display("sync")]
    Sync,
    #[default]
    #[display("diff")]
    Diff,
    /// Copy the source over the target without deleting anything.
    #[display("mirror")]
    Mirror,
    #[display("count")]
    Count,
}

impl JobMode {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "sync" => Some(JobMode::Sync),
            "diff" => Some(JobMode::Diff),
            "mirror" => Some(JobMode::Mirror),
            "count" => Some(JobMode::Count),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Job {
    name: String,
    source: PathBuf,
    target: Option<PathBuf>,
    mode: JobMode,
    exclude: Vec<String>,
}

fn key(name: &'static str) -> Yaml<'static> {
    Yaml::Value(Scalar::String(Cow::Borrowed(name)))
}

impl Job {
    pub fn from_job_yaml(job_name: &str, job_data: &LinkedHashMap<Yaml, Yaml>) -> Option<Self> {
        debug!("Parsing job '{}'", job_name);

        let Some(source) = job_data.get(&key("source")).and_then(|v| v.as_str()) else {
            warn!("Job '{}' has no source. Skipping.", job_name);
            return None;
        };

        let target = job_data
            .get(&key("target"))
            .and_then(|v| v.as_str())
            .map(PathBuf::from);

        let mode = match job_data.get(&key("mode")).and_then(|v| v.as_str()) {
            None => JobMode::default(),
            Some(name) => match JobMode::from_name(name) {
                Some(mode) => mode,
                None => {
                    warn!("Unknown mode for job '{}': {}. Skipping.", job_name, name);
                    return None;
                }
            },
        };

        let exclude = job_data
            .get(&key("exclude"))
            .and_then(|v| v.as_sequence())
            .map(|seq| {
                seq.iter()
                    .filter_map(|item| item.as_str().map(|s| s.to_string()))
                    .collect()
            })
            .unwrap_or_default();

        Some(Job {
            name: job_name.to_string(),
            source: PathBuf::from(source),
            target,
            mode,
            exclude,
        })
    }

    pub fn id(&self) -> String {
        self.name.clone()
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn target(&self) -> Option<&Path> {
        self.target.as_deref()
    }

    pub fn mode(&self) -> JobMode {
        self.mode
    }

    /// Whether the final component of `reference` is listed under `exclude`.
    pub fn excludes(&self, reference: &Path) -> bool {
        reference
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| self.exclude.iter().any(|excluded| excluded == name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use saphyr::LoadableYamlNode;

    fn parse(contents: &str) -> Option<Job> {
        let docs = Yaml::load_from_str(contents).unwrap();
        let data = docs[0].as_mapping().unwrap();
        Job::from_job_yaml("job", data)
    }

    #[test]
    fn job_reads_every_field() {
        let job = parse(
            r#"
source: photos
target: backup/photos
mode: sync
exclude: [".cache", "Thumbs.db"]
"#,
        )
        .unwrap();

        assert_eq!(job.id(), "job");
        assert_eq!(job.source(), Path::new("photos"));
        assert_eq!(job.target(), Some(Path::new("backup/photos")));
        assert_eq!(job.mode(), JobMode::Sync);
        assert!(job.excludes(Path::new("/data/photos/.cache")));
        assert!(job.excludes(Path::new("/data/photos/2024/Thumbs.db")));
        assert!(!job.excludes(Path::new("/data/photos/.cache/inner")));
    }

    #[test]
    fn job_defaults_to_diff_without_excludes() {
        let job = parse("source: a\ntarget: b").unwrap();

        assert_eq!(job.mode(), JobMode::Diff);
        assert!(!job.excludes(Path::new("/a/anything")));
    }

    #[rstest]
    #[case("target: b")]
    #[case("source: [not, a, string]")]
    #[case("source: a\nmode: teleport")]
    fn invalid_jobs_are_skipped(#[case] contents: &str) {
        assert!(parse(contents).is_none());
    }

    #[test]
    fn count_job_needs_no_target() {
        let job = parse("source: a\nmode: count").unwrap();

        assert_eq!(job.mode(), JobMode::Count);
        assert_eq!(job.target(), None);
    }
}
