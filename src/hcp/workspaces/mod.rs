//! Workspace module

mod api;
mod models;

pub use models::{
    RelationshipData, RelationshipId, VcsRepo, Workspace, WorkspaceAttributes, WorkspaceDraft,
    WorkspaceRelationships,
};
