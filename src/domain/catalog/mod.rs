// SPDX-License-Identifier: MPL-2.0
//! Portfolio catalog types.
//!
//! The catalog is a read-only, ordered list of projects provided at startup.
//! Filtering preserves catalog order.

pub mod category;
pub mod project;

pub use category::{Category, CategoryFilter, UnknownCategory};
pub use project::{Project, ProjectId};

use std::sync::Arc;

/// The static, ordered project catalog.
///
/// Cloning is cheap: projects are shared behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    projects: Arc<[Project]>,
}

impl Catalog {
    /// Creates a catalog from projects in display order.
    #[must_use]
    pub fn new(projects: Vec<Project>) -> Self {
        Self {
            projects: projects.into(),
        }
    }

    /// All projects in catalog order.
    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Projects passing `filter`, in catalog order.
    pub fn filtered(&self, filter: CategoryFilter) -> impl Iterator<Item = &Project> + '_ {
        self.projects
            .iter()
            .filter(move |project| filter.matches(project.category))
    }

    /// Looks up a project by id.
    #[must_use]
    pub fn find(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        Catalog::new(vec![
            Project::new(1, "Cake", Category::CafeBeverage, "cake.jpg"),
            Project::new(2, "Plate", Category::Food, "plate.jpg"),
            Project::new(3, "Chemex", Category::CafeBeverage, "chemex.jpg"),
        ])
    }

    #[test]
    fn filtered_preserves_catalog_order() {
        let catalog = sample();
        let ids: Vec<u32> = catalog
            .filtered(CategoryFilter::Only(Category::CafeBeverage))
            .map(|p| p.id.0)
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn filtered_with_no_match_is_empty() {
        let catalog = sample();
        assert_eq!(
            catalog
                .filtered(CategoryFilter::Only(Category::Animal))
                .count(),
            0
        );
    }

    #[test]
    fn find_returns_project_by_id() {
        let catalog = sample();
        assert_eq!(catalog.find(ProjectId(2)).map(|p| p.title.as_str()), Some("Plate"));
        assert!(catalog.find(ProjectId(99)).is_none());
    }
}
