//! Reference directory — departments, their managers and skill catalogues,
//! and the emergency-contact relationships on offer.
//!
//! The directory is read-only for the lifetime of a session. It ships with
//! built-in data and can be replaced by a JSON file of the same shape.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ConfigError;
use crate::wizard::model::Department;

/// A manager an applicant can report to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manager {
    pub id: String,
    pub name: String,
    pub department: Department,
}

/// Managers and skills for one department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentEntry {
    pub department: Department,
    pub managers: Vec<Manager>,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Directory {
    pub departments: Vec<DepartmentEntry>,
    pub relationships: Vec<String>,
}

impl Directory {
    /// The reference data bundled with the wizard.
    pub fn builtin() -> Self {
        fn entry(
            department: Department,
            managers: &[(&str, &str)],
            skills: &[&str],
        ) -> DepartmentEntry {
            DepartmentEntry {
                department,
                managers: managers
                    .iter()
                    .map(|(id, name)| Manager {
                        id: id.to_string(),
                        name: name.to_string(),
                        department,
                    })
                    .collect(),
                skills: skills.iter().map(|s| s.to_string()).collect(),
            }
        }

        Self {
            departments: vec![
                entry(
                    Department::Engineering,
                    &[("eng-1", "Sarah Chen"), ("eng-2", "Marcus Johnson")],
                    &[
                        "Rust",
                        "TypeScript",
                        "Python",
                        "SQL",
                        "Docker",
                        "Kubernetes",
                        "AWS",
                        "React",
                    ],
                ),
                entry(
                    Department::Marketing,
                    &[("mkt-1", "Emily Rodriguez"), ("mkt-2", "David Kim")],
                    &[
                        "SEO",
                        "Content Writing",
                        "Social Media",
                        "Google Analytics",
                        "Copywriting",
                        "Email Marketing",
                    ],
                ),
                entry(
                    Department::Sales,
                    &[("sales-1", "James Wilson"), ("sales-2", "Priya Patel")],
                    &[
                        "Negotiation",
                        "CRM",
                        "Lead Generation",
                        "Account Management",
                        "Cold Calling",
                        "Presentations",
                    ],
                ),
                entry(
                    Department::Hr,
                    &[("hr-1", "Linda Martinez"), ("hr-2", "Robert Taylor")],
                    &[
                        "Recruiting",
                        "Employee Relations",
                        "Payroll",
                        "Onboarding",
                        "Compliance",
                        "Training",
                    ],
                ),
                entry(
                    Department::Finance,
                    &[("fin-1", "Michael Brown"), ("fin-2", "Aisha Okafor")],
                    &[
                        "Financial Modeling",
                        "Excel",
                        "Budgeting",
                        "Accounting",
                        "Forecasting",
                        "Auditing",
                    ],
                ),
                entry(
                    Department::Operations,
                    &[("ops-1", "Tom Anderson"), ("ops-2", "Nina Schultz")],
                    &[
                        "Logistics",
                        "Project Management",
                        "Process Improvement",
                        "Vendor Management",
                        "Scheduling",
                        "Six Sigma",
                    ],
                ),
            ],
            relationships: ["Spouse", "Parent", "Sibling", "Child", "Partner", "Friend", "Other"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    /// Load a directory from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::DirectoryIo {
            path: path.to_path_buf(),
            source,
        })?;
        let directory: Directory =
            serde_json::from_str(&text).map_err(|source| ConfigError::DirectoryParse {
                path: path.to_path_buf(),
                source,
            })?;
        directory.check_unique()?;

        info!(
            path = %path.display(),
            departments = directory.departments.len(),
            relationships = directory.relationships.len(),
            "Loaded directory file"
        );
        Ok(directory)
    }

    fn check_unique(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for entry in &self.departments {
            if !seen.insert(entry.department) {
                return Err(ConfigError::DuplicateDepartment(entry.department.to_string()));
            }
        }
        Ok(())
    }

    /// Departments offered, in directory order.
    pub fn departments(&self) -> impl Iterator<Item = Department> + '_ {
        self.departments.iter().map(|e| e.department)
    }

    pub fn entry(&self, department: Department) -> Option<&DepartmentEntry> {
        self.departments.iter().find(|e| e.department == department)
    }

    pub fn managers_for(&self, department: Department) -> &[Manager] {
        self.entry(department)
            .map(|e| e.managers.as_slice())
            .unwrap_or_default()
    }

    pub fn skills_for(&self, department: Department) -> &[String] {
        self.entry(department)
            .map(|e| e.skills.as_slice())
            .unwrap_or_default()
    }

    /// Look up a manager by id across all departments.
    pub fn manager(&self, id: &str) -> Option<&Manager> {
        self.departments
            .iter()
            .flat_map(|e| e.managers.iter())
            .find(|m| m.id == id)
    }

    pub fn has_relationship(&self, relationship: &str) -> bool {
        self.relationships.iter().any(|r| r == relationship)
    }
}

impl Default for Directory {
    fn default() -> Self {
        Self::builtin()
    }
}
