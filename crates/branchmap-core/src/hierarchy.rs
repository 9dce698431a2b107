//! Parent→children index over a flat branch list.
//!
//! Child order is creation order (input order), which every downstream pass relies on for
//! deterministic output.

use crate::model::Branch;
use crate::{Error, Result};
use indexmap::IndexMap;

#[derive(Debug, Clone)]
pub struct BranchHierarchy {
    root: String,
    children: IndexMap<String, Vec<String>>,
}

impl BranchHierarchy {
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Children of `id` in creation order. Every known branch id is a key, leaves included.
    pub fn children(&self, id: &str) -> &[String] {
        self.children.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.children.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// 0-based index of `id` among its parent's children; 0 for the root.
    pub fn sibling_index(&self, parent: Option<&str>, id: &str) -> usize {
        let Some(parent) = parent else {
            return 0;
        };
        self.children(parent)
            .iter()
            .position(|c| c == id)
            .unwrap_or(0)
    }

    /// Root-first walk with siblings in creation order. The shared deterministic traversal
    /// for positioning and color assignment.
    pub fn walk_preorder(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.children.len());
        let mut stack = vec![self.root.clone()];
        while let Some(id) = stack.pop() {
            for child in self.children(&id).iter().rev() {
                stack.push(child.clone());
            }
            out.push(id);
        }
        out
    }
}

pub fn build_hierarchy(branches: &[Branch]) -> Result<BranchHierarchy> {
    let mut children: IndexMap<String, Vec<String>> = IndexMap::with_capacity(branches.len());
    for b in branches {
        if children.insert(b.id.clone(), Vec::new()).is_some() {
            return Err(Error::DuplicateBranch { id: b.id.clone() });
        }
    }

    let mut root: Option<&str> = None;
    for b in branches {
        if b.depth == 0 {
            match root {
                None => root = Some(&b.id),
                Some(first) => {
                    // Invariant violation; tolerate it and keep the first one.
                    tracing::debug!(kept = first, ignored = %b.id, "multiple depth-0 branches");
                }
            }
            continue;
        }
        let Some(parent) = b.parent_branch_id.as_deref() else {
            tracing::debug!(branch = %b.id, "non-root branch without parent id");
            continue;
        };
        match children.get_mut(parent) {
            Some(list) => list.push(b.id.clone()),
            None => {
                // Dangling parent reference: the branch stays in the index as an orphan leaf.
                tracing::debug!(branch = %b.id, parent, "unknown parent branch");
            }
        }
    }

    let Some(root) = root else {
        return Err(Error::MissingRoot);
    };

    Ok(BranchHierarchy {
        root: root.to_string(),
        children,
    })
}
