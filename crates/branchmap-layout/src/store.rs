//! Storage collaborator seam.
//!
//! The engine reads one full snapshot per recompute and writes one layout record per
//! branch. Each write is independent and atomically applied to one branch record; the
//! persistence schema is the collaborator's concern.

use branchmap_core::{Branch, BranchLayout, Message};
use rustc_hash::FxHashMap;
use std::sync::Mutex;

#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    #[error("record not found: {id}")]
    NotFound { id: String },

    #[error("storage backend error: {message}")]
    Backend { message: String },
}

pub trait LayoutStore {
    fn load_branches(&self, project_id: &str) -> Result<Vec<Branch>, StoreError>;
    fn load_messages(&self, project_id: &str) -> Result<Vec<Message>, StoreError>;
    fn write_branch_layout(
        &self,
        project_id: &str,
        branch_id: &str,
        layout: &BranchLayout,
    ) -> Result<(), StoreError>;
}

#[derive(Debug, Default)]
struct ProjectRecords {
    branches: Vec<Branch>,
    messages: Vec<Message>,
    layouts: FxHashMap<String, BranchLayout>,
}

/// In-process store for embedders and tests. Interior mutability keeps the trait object
/// shareable; per-branch writes are applied whole-record under the lock, so a reader
/// never observes a half-written layout.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    projects: Mutex<FxHashMap<String, ProjectRecords>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_project(&self, project_id: &str, branches: Vec<Branch>, messages: Vec<Message>) {
        let mut projects = self.projects.lock().expect("store lock");
        projects.insert(
            project_id.to_string(),
            ProjectRecords {
                branches,
                messages,
                layouts: FxHashMap::default(),
            },
        );
    }

    pub fn add_branch(&self, project_id: &str, branch: Branch) {
        let mut projects = self.projects.lock().expect("store lock");
        projects.entry(project_id.to_string()).or_default().branches.push(branch);
    }

    pub fn add_message(&self, project_id: &str, message: Message) {
        let mut projects = self.projects.lock().expect("store lock");
        projects.entry(project_id.to_string()).or_default().messages.push(message);
    }

    /// Persisted layout for one branch, if a recompute has written it.
    pub fn layout(&self, project_id: &str, branch_id: &str) -> Option<BranchLayout> {
        let projects = self.projects.lock().expect("store lock");
        projects.get(project_id)?.layouts.get(branch_id).cloned()
    }

    pub fn layout_count(&self, project_id: &str) -> usize {
        let projects = self.projects.lock().expect("store lock");
        projects.get(project_id).map_or(0, |p| p.layouts.len())
    }
}

impl LayoutStore for InMemoryStore {
    fn load_branches(&self, project_id: &str) -> Result<Vec<Branch>, StoreError> {
        let projects = self.projects.lock().expect("store lock");
        projects
            .get(project_id)
            .map(|p| p.branches.clone())
            .ok_or_else(|| StoreError::NotFound {
                id: project_id.to_string(),
            })
    }

    fn load_messages(&self, project_id: &str) -> Result<Vec<Message>, StoreError> {
        let projects = self.projects.lock().expect("store lock");
        projects
            .get(project_id)
            .map(|p| p.messages.clone())
            .ok_or_else(|| StoreError::NotFound {
                id: project_id.to_string(),
            })
    }

    fn write_branch_layout(
        &self,
        project_id: &str,
        branch_id: &str,
        layout: &BranchLayout,
    ) -> Result<(), StoreError> {
        let mut projects = self.projects.lock().expect("store lock");
        let project = projects
            .get_mut(project_id)
            .ok_or_else(|| StoreError::NotFound {
                id: project_id.to_string(),
            })?;
        project
            .layouts
            .insert(branch_id.to_string(), layout.clone());
        Ok(())
    }
}
