use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;
use snafu::ResultExt;
use tracing::debug;

use crate::tree::tree_error::{
    DecodeSnafu, EncodeSnafu, NotFoundSnafu, ReadSnafu, StructuralMismatchSnafu, WriteSnafu,
};
use crate::tree::{NodeData, Tree, TreeError};

/// Tree stored on disk: directories are interior nodes, every other entry is
/// a leaf file holding one JSON document.
///
/// Directory listings are sorted by name so repeated walks visit children in
/// the same order.
#[derive(Debug, Clone)]
pub struct FileSystemTree {
    root: PathBuf,
}

impl FileSystemTree {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn read_leaf(reference: &Path) -> Result<Value, TreeError> {
        let bytes = fs::read(reference).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                TreeError::NotFoundError {
                    reference: reference.to_path_buf(),
                }
            } else {
                TreeError::ReadError {
                    reference: reference.to_path_buf(),
                    source,
                }
            }
        })?;
        serde_json::from_slice(&bytes).context(DecodeSnafu { reference })
    }
}

impl Tree for FileSystemTree {
    fn root(&self) -> &Path {
        &self.root
    }

    fn exists(&self, reference: &Path) -> bool {
        reference.exists()
    }

    fn node_data(&self, reference: &Path) -> Result<NodeData, TreeError> {
        let metadata = match fs::metadata(reference) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return NotFoundSnafu { reference }.fail();
            }
            Err(e) => return Err(e).context(ReadSnafu { reference }),
        };

        if metadata.is_dir() {
            Ok(NodeData::Interior)
        } else {
            Self::read_leaf(reference).map(NodeData::Leaf)
        }
    }

    fn children(&self, reference: &Path, _data: &NodeData) -> Result<Vec<PathBuf>, TreeError> {
        let mut children = fs::read_dir(reference)
            .context(ReadSnafu { reference })?
            .map(|entry| entry.map(|entry| entry.path()))
            .collect::<Result<Vec<_>, _>>()
            .context(ReadSnafu { reference })?;
        children.sort();
        Ok(children)
    }

    fn read(&self, reference: &Path) -> Result<Value, TreeError> {
        if reference.is_dir() {
            return StructuralMismatchSnafu { reference }.fail();
        }
        Self::read_leaf(reference)
    }

    fn write(&self, reference: &Path, value: &Value) -> Result<(), TreeError> {
        if value.is_object() || reference.is_dir() {
            return StructuralMismatchSnafu { reference }.fail();
        }
        let bytes = serde_json::to_vec(value).context(EncodeSnafu { reference })?;

        match fs::write(reference, &bytes) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                if let Some(parent) = reference.parent() {
                    debug!("Creating missing ancestors of {}", reference.display());
                    fs::create_dir_all(parent).context(WriteSnafu { reference: parent })?;
                }
                fs::write(reference, &bytes).context(WriteSnafu { reference })
            }
            Err(e) => Err(e).context(WriteSnafu { reference }),
        }
    }

    fn make_node(&self, reference: &Path) -> Result<(), TreeError> {
        if reference.is_file() {
            return StructuralMismatchSnafu { reference }.fail();
        }
        fs::create_dir_all(reference).context(WriteSnafu { reference })
    }

    fn delete_node(&self, reference: &Path) -> Result<(), TreeError> {
        let result = if reference.is_dir() {
            fs::remove_dir_all(reference)
        } else {
            fs::remove_file(reference)
        };
        match result {
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            other => other.context(WriteSnafu { reference }),
        }
    }

    fn delete_leaf(&self, reference: &Path) -> Result<(), TreeError> {
        if reference.is_dir() {
            return StructuralMismatchSnafu { reference }.fail();
        }
        match fs::remove_file(reference) {
            Err(e) if e.kind() == ErrorKind::NotFound => NotFoundSnafu { reference }.fail(),
            other => other.context(WriteSnafu { reference }),
        }
    }
}
