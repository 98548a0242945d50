//! Issue-tracker domain types.

use std::fmt;

/// Identifies one issue on the tracker.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IssueQuery {
    project: String,
    issue_id: String,
    namespace: Option<String>,
}

impl IssueQuery {
    /// Targets issue `issue_id` of a top-level `project`.
    #[must_use]
    pub fn new(project: impl Into<String>, issue_id: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            issue_id: issue_id.into(),
            namespace: None,
        }
    }

    /// Places the project under a namespace. Blank namespaces are ignored.
    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        let value: String = namespace.into();
        self.namespace = (!value.trim().is_empty()).then_some(value);
        self
    }

    /// Returns the project name.
    #[must_use]
    pub fn project(&self) -> &str {
        &self.project
    }

    /// Returns the issue identifier.
    #[must_use]
    pub fn issue_id(&self) -> &str {
        &self.issue_id
    }

    /// Returns the namespace, if any.
    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }
}

impl fmt::Display for IssueQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(namespace) => write!(f, "{namespace}/{} #{}", self.project, self.issue_id),
            None => write!(f, "{} #{}", self.project, self.issue_id),
        }
    }
}

/// A tracker issue summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    query: IssueQuery,
    title: String,
    full_url: String,
}

impl Issue {
    /// Creates an issue summary for `query`.
    #[must_use]
    pub fn new(query: IssueQuery, title: impl Into<String>, full_url: impl Into<String>) -> Self {
        Self {
            query,
            title: title.into(),
            full_url: full_url.into(),
        }
    }

    /// Returns the project name.
    #[must_use]
    pub fn project(&self) -> &str {
        self.query.project()
    }

    /// Returns the namespace, if any.
    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        self.query.namespace()
    }

    /// Returns the issue identifier.
    #[must_use]
    pub fn issue_id(&self) -> &str {
        self.query.issue_id()
    }

    /// Returns the issue title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the browser URL of the issue.
    #[must_use]
    pub fn full_url(&self) -> &str {
        &self.full_url
    }
}
