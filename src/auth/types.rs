//! Authorization vocabulary shared by the role model and the ability engine

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Action a principal may perform on a subject
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Create a new instance
    Create,
    /// Read an instance
    Read,
    /// Update an instance
    Update,
    /// Delete an instance
    Delete,
    /// Every action on the subject
    Manage,
}

impl Action {
    /// All actions in declaration order
    pub const ALL: [Action; 5] = [
        Action::Create,
        Action::Read,
        Action::Update,
        Action::Delete,
        Action::Manage,
    ];

    /// Whether a rule granted for `self` covers a check for `requested`.
    ///
    /// `manage` covers every action; any other action only covers itself.
    pub fn covers(self, requested: Action) -> bool {
        self == Action::Manage || self == requested
    }

    /// Wire name of the action
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Create => "create",
            Action::Read => "read",
            Action::Update => "update",
            Action::Delete => "delete",
            Action::Manage => "manage",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create" => Ok(Action::Create),
            "read" => Ok(Action::Read),
            "update" => Ok(Action::Update),
            "delete" => Ok(Action::Delete),
            "manage" => Ok(Action::Manage),
            _ => Err(format!("Invalid action: {}", s)),
        }
    }
}

/// Resource category an action applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subject {
    /// Courses and their content
    Course,
    /// User accounts and profiles
    User,
    /// Platform-wide settings
    System,
    /// Reporting and usage data
    Analytics,
    /// Wildcard matching every subject
    #[serde(rename = "all")]
    All,
}

impl Subject {
    /// All subjects, wildcard last
    pub const ALL: [Subject; 5] = [
        Subject::Course,
        Subject::User,
        Subject::System,
        Subject::Analytics,
        Subject::All,
    ];

    /// Whether a rule written for `self` applies to a check on `requested`
    pub fn covers(self, requested: Subject) -> bool {
        self == Subject::All || self == requested
    }

    /// Wire name of the subject
    pub fn as_str(&self) -> &'static str {
        match self {
            Subject::Course => "Course",
            Subject::User => "User",
            Subject::System => "System",
            Subject::Analytics => "Analytics",
            Subject::All => "all",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Subject {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Course" => Ok(Subject::Course),
            "User" => Ok(Subject::User),
            "System" => Ok(Subject::System),
            "Analytics" => Ok(Subject::Analytics),
            "all" => Ok(Subject::All),
            _ => Err(format!("Invalid subject: {}", s)),
        }
    }
}
