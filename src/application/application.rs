use std::path::{Path, PathBuf};

use snafu::Snafu;
use snafu::prelude::*;
use tracing::{debug, info};
use treesync::{
    operations::{DiffOptions, count_nodes, deep_compare, reflect_tree},
    patch::{Patch, patch_tree_with},
    tree::{FileSystemTree, Tree, TreeError},
    visitor::{Filters, remap_reference},
};

use crate::application::RuntimeConfig;
use crate::application::report::{print_count, print_patch};
use crate::config::{Job, JobMode, JobRegistry, JobRegistryCreationError};

pub struct Application;

impl Application {
    pub fn run(app_config: impl Into<RuntimeConfig>) -> Result<(), ApplicationError> {
        let app_config: RuntimeConfig = app_config.into();
        let registry = JobRegistry::read(&app_config.root).context(JobRegistrySnafu)?;
        debug!("Loaded config: {:?}", registry);

        let job = registry
            .get_job_by_id(&app_config.job)
            .context(UnknownJobSnafu {
                job_name: app_config.job.clone(),
            })?;
        let source = FileSystemTree::new(app_config.root.join(job.source()));
        let included = |reference: &Path| !job.excludes(reference);
        let filters = Filters::default()
            .with_node(&included)
            .with_leaf(&included);
        info!("Running job '{}' in {} mode", job.id(), job.mode());

        // A missing source would diff as one deletion of the whole target.
        ensure!(
            source.exists(source.root()),
            MissingSourceSnafu {
                job_name: job.id(),
                source_path: source.root().to_path_buf(),
            }
        );

        match job.mode() {
            JobMode::Count => {
                let count = count_nodes(&source, filters).context(JobSnafu)?;
                print_count(&count);
            }
            JobMode::Mirror => {
                let target = Self::target_tree(job, &app_config.root)?;
                reflect_tree(&source, &target, filters).context(JobSnafu)?;
            }
            JobMode::Diff => {
                let target = Self::target_tree(job, &app_config.root)?;
                let patch = Self::diff(&source, &target, filters)?;
                print_patch(&patch, &source);
            }
            JobMode::Sync => {
                let target = Self::target_tree(job, &app_config.root)?;
                let patch = Self::diff(&source, &target, filters)?;
                print_patch(&patch, &source);
                if app_config.dry_run {
                    info!("Dry run, leaving {} untouched", target.root().display());
                } else {
                    patch_tree_with(&target, &patch, |reference, value| {
                        (remap_reference(&source, &target, reference), value.clone())
                    })
                    .context(JobSnafu)?;
                }
            }
        }

        Ok(())
    }

    fn target_tree(job: &Job, root: &Path) -> Result<FileSystemTree, ApplicationError> {
        let target = job
            .target()
            .context(MissingTargetSnafu { job_name: job.id() })?;
        Ok(FileSystemTree::new(root.join(target)))
    }

    fn diff(
        source: &dyn Tree,
        target: &dyn Tree,
        filters: Filters,
    ) -> Result<Patch, ApplicationError> {
        let mut patch = Patch::new();
        let options = DiffOptions::default().with_filters(filters);
        deep_compare(source, target, &mut patch, &options).context(JobSnafu)?;
        Ok(patch)
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Critical failure encountered during configuration stage"))]
    JobRegistryError { source: JobRegistryCreationError },
    #[snafu(display("No job named '{}' in the config file", job_name))]
    UnknownJobError { job_name: String },
    #[snafu(display("Source {} of job '{}' does not exist", source_path.display(), job_name))]
    MissingSourceError {
        job_name: String,
        source_path: PathBuf,
    },
    #[snafu(display("Job '{}' needs a target", job_name))]
    MissingTargetError { job_name: String },
    #[snafu(display("Critical failure encountered while running the job"))]
    JobError { source: TreeError },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use tempfile::TempDir;

    fn workspace(config: &str) -> TempDir {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        fs::write(temp_dir.path().join("treesync.yaml"), config).unwrap();
        fs::create_dir_all(temp_dir.path().join("backup/2024")).unwrap();
        fs::write(temp_dir.path().join("backup/2024/img"), "1").unwrap();
        temp_dir
    }

    fn run(temp_dir: &TempDir, job: &str) -> Result<(), ApplicationError> {
        Application::run(RuntimeConfig {
            job: job.to_string(),
            root: temp_dir.path().to_path_buf(),
            dry_run: false,
        })
    }

    #[test]
    fn sync_with_a_missing_source_leaves_the_target_alone() {
        let temp_dir = workspace(
            "jobs:\n  photos:\n    source: photoz\n    target: backup\n    mode: sync\n",
        );

        let result = run(&temp_dir, "photos");

        assert!(matches!(
            result,
            Err(ApplicationError::MissingSourceError { .. })
        ));
        assert!(temp_dir.path().join("backup/2024/img").is_file());
    }

    #[test]
    fn sync_copies_new_leaves_and_removes_stale_ones() {
        let temp_dir = workspace(
            "jobs:\n  photos:\n    source: photos\n    target: backup\n    mode: sync\n",
        );
        fs::create_dir_all(temp_dir.path().join("photos/2025")).unwrap();
        fs::write(temp_dir.path().join("photos/2025/img"), "2").unwrap();

        run(&temp_dir, "photos").unwrap();

        assert!(temp_dir.path().join("backup/2025/img").is_file());
        assert!(!temp_dir.path().join("backup/2024").exists());
    }

    #[test]
    fn unknown_job_is_reported() {
        let temp_dir = workspace("jobs: {}\n");

        assert!(matches!(
            run(&temp_dir, "photos"),
            Err(ApplicationError::UnknownJobError { .. })
        ));
    }
}
