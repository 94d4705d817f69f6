use hashlink::LinkedHashMap;
use saphyr::{LoadableYamlNode, Scalar, Yaml};
use snafu::prelude::*;
use std::{
    borrow::Cow,
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, warn};
use treesync::ext::BestEffortPathExt;

use crate::config::Job;

const JOB_FILE_NAME: &str = "treesync.yaml";

fn get_job_file_path(root: &Path) -> PathBuf {
    root.join(JOB_FILE_NAME)
}

#[derive(Debug, Clone)]
pub struct JobRegistry {
    jobs: HashMap<String, Job>,
}

impl JobRegistry {
    pub fn read(root: &Path) -> Result<Self, JobRegistryCreationError> {
        Self::from_path(get_job_file_path(root))
    }

    pub fn from_path(path: PathBuf) -> Result<Self, JobRegistryCreationError> {
        debug!("Reading config file: {}", path.best_effort_path_display());
        let contents = fs::read_to_string(&path).context(ReadSnafu {
            file_path: path.best_effort_path_display(),
        })?;
        debug!("Successfully read config file: {} bytes", contents.len());

        contents.as_str().try_into()
    }

    pub fn get_job_by_id(&self, id: impl AsRef<str>) -> Option<&Job> {
        self.jobs.get(id.as_ref())
    }

    fn parse_jobs_from_yaml(
        top_level: &LinkedHashMap<Yaml, Yaml>,
    ) -> Result<Vec<Job>, JobRegistryCreationError> {
        let jobs = top_level
            .get(&Yaml::Value(Scalar::String(Cow::Borrowed("jobs"))))
            .unwrap_or(&Yaml::Mapping(LinkedHashMap::new()))
            .as_mapping()
            .ok_or(JobRegistryCreationError::JobsNotMap)?
            .iter()
            .filter_map(|(key, value)| {
                if let Yaml::Value(Scalar::String(job_name)) = key {
                    if let Yaml::Mapping(job_data) = value {
                        return Some((job_name, job_data));
                    }
                }
                warn!("Skipping invalid job entry: {:?}", key);
                None
            })
            .filter_map(|(job_name, job_data)| Job::from_job_yaml(job_name, job_data))
            .collect::<Vec<_>>();

        Ok(jobs)
    }
}

impl TryFrom<&str> for JobRegistry {
    type Error = JobRegistryCreationError;

    fn try_from(contents: &str) -> Result<Self, Self::Error> {
        let contents_vec = Yaml::load_from_str(contents)
            .map_err(|e| JobRegistryCreationError::ParseError { source: e })?;
        let contents = contents_vec
            .first()
            .ok_or(JobRegistryCreationError::MalformedConfig)?;

        let top_level = contents
            .as_mapping()
            .ok_or(JobRegistryCreationError::TopLevelNotMap)?;

        let jobs = Self::parse_jobs_from_yaml(top_level)?
            .into_iter()
            .map(|job| (job.id(), job))
            .collect();

        Ok(JobRegistry { jobs })
    }
}

#[derive(Debug, Snafu)]
pub enum JobRegistryCreationError {
    #[snafu(display("Failed to read the config file: {}", file_path))]
    ReadError {
        file_path: String,
        source: std::io::Error,
    },
    #[snafu(display("Failed to parse the config file"))]
    ParseError { source: saphyr::ScanError },
    #[snafu(display("Improperly formatted config file"))]
    MalformedConfig,
    #[snafu(display("Top level of config should be a map"))]
    TopLevelNotMap,
    #[snafu(display("Jobs section should be a map"))]
    JobsNotMap,
}
