//! Project profitability scan.

use serde::Serialize;
use teampulse_core::{Project, ProjectId};

/// A project whose realized revenue does not cover its cost.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnprofitableProject {
    /// The project.
    pub project_id: ProjectId,
    /// Project name.
    pub name: String,
    /// Realized revenue minus cost (negative here by definition).
    pub profit: f64,
}

/// Flag every project with negative profit. No ordering is imposed
/// beyond input order.
pub fn detect_unprofitable_projects(projects: &[Project]) -> Vec<UnprofitableProject> {
    projects
        .iter()
        .filter(|p| p.profit() < 0.0)
        .map(|p| UnprofitableProject {
            project_id: p.id,
            name: p.name.clone(),
            profit: p.profit(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: i64, revenue: f64, cost: f64) -> Project {
        Project {
            id: ProjectId(id),
            name: format!("project {id}"),
            actual_revenue: revenue,
            cost,
        }
    }

    #[test]
    fn test_negative_profit_flagged() {
        let projects = vec![project(1, 5000.0, 6000.0), project(2, 9000.0, 2000.0)];
        let flagged = detect_unprofitable_projects(&projects);
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].project_id, ProjectId(1));
        assert_eq!(flagged[0].profit, -1000.0);
    }

    #[test]
    fn test_break_even_not_flagged() {
        let projects = vec![project(1, 3000.0, 3000.0)];
        assert!(detect_unprofitable_projects(&projects).is_empty());
    }
}
