//! Application entity - an applicant's request to be considered for a job

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::{ApplicationId, JobId, UserId};

/// Review state of an application
///
/// New applications always start as `Applied`; the other states are set by
/// the reviewing company.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Applied,
    Hold,
    Progress,
    Selected,
    Rejected,
}

impl ApplicationStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Applied => "applied",
            Self::Hold => "hold",
            Self::Progress => "progress",
            Self::Selected => "selected",
            Self::Rejected => "rejected",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "applied" => Some(Self::Applied),
            "hold" => Some(Self::Hold),
            "progress" => Some(Self::Progress),
            "selected" => Some(Self::Selected),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Human readable label
    pub const fn label(self) -> &'static str {
        match self {
            Self::Applied => "Applied",
            Self::Hold => "On Hold",
            Self::Progress => "In Progress",
            Self::Selected => "Selected",
            Self::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Application {
    pub id: ApplicationId,
    pub job_id: JobId,
    /// User id of the applying applicant account
    pub applicant_id: UserId,
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
}
