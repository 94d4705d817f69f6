mod job;
mod job_registry;

pub use job::{Job, JobMode};
pub use job_registry::{JobRegistry, JobRegistryCreationError};
