use colored::{ColoredString, Colorize};
use treesync::{
    patch::{ChangeKind, Patch, PatchEntry, Scope},
    tree::Tree,
    visitor::NodeCount,
};

fn marker(kind: ChangeKind) -> &'static str {
    match kind {
        ChangeKind::Insert => "+",
        ChangeKind::Modify => "~",
        ChangeKind::Delete => "-",
    }
}

/// Plain text of one report line, with the reference shown relative to `tree`.
pub fn describe_entry(entry: &PatchEntry, tree: &dyn Tree) -> String {
    let suffix = match entry.scope {
        Scope::Node => "/",
        Scope::Leaf => "",
    };
    format!(
        "{} {}{}",
        marker(entry.kind),
        tree.to_relative(entry.reference).display(),
        suffix
    )
}

fn paint(line: String, kind: ChangeKind) -> ColoredString {
    match kind {
        ChangeKind::Insert => line.green(),
        ChangeKind::Modify => line.yellow(),
        ChangeKind::Delete => line.red(),
    }
}

pub fn print_patch(patch: &Patch, tree: &dyn Tree) {
    if patch.is_empty() {
        println!("No changes");
        return;
    }
    for entry in patch.entries() {
        println!("{}", paint(describe_entry(&entry, tree), entry.kind));
    }
    println!(
        "{} inserted, {} modified, {} deleted",
        patch.insert_leaves.len() + patch.insert_nodes.len(),
        patch.modify_leaves.len() + patch.modify_nodes.len(),
        patch.delete_leaves.len() + patch.delete_nodes.len()
    );
}

pub fn print_count(count: &NodeCount) {
    println!("{} leaves, {} nodes", count.leaves, count.nodes);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    use serde_json::{Value, json};
    use treesync::tree::FileSystemTree;

    #[test]
    fn entries_are_described_relative_to_the_tree() {
        let tree = FileSystemTree::new("/data/photos");
        let leaf = PatchEntry {
            kind: ChangeKind::Insert,
            scope: Scope::Leaf,
            reference: Path::new("/data/photos/2024/img"),
            value: &json!(1),
        };
        let node = PatchEntry {
            kind: ChangeKind::Delete,
            scope: Scope::Node,
            reference: Path::new("/data/photos/old"),
            value: &Value::Null,
        };

        assert_eq!(describe_entry(&leaf, &tree), "+ 2024/img");
        assert_eq!(describe_entry(&node, &tree), "- old/");
    }

    #[test]
    fn modified_entries_use_a_tilde() {
        let tree = FileSystemTree::new("/data");
        let entry = PatchEntry {
            kind: ChangeKind::Modify,
            scope: Scope::Leaf,
            reference: Path::new("/data/a"),
            value: &json!("v2"),
        };

        assert_eq!(describe_entry(&entry, &tree), "~ a");
    }
}
