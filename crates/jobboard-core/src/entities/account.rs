//! Accounts - a user together with its role-specific profile

use super::user::{Role, User};
use crate::value_objects::UserId;

/// Profile owned by a company account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyProfile {
    pub user_id: UserId,
    pub name: String,
    pub description: Option<String>,
    pub website: Option<String>,
}

/// Profile owned by an applicant account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicantProfile {
    pub user_id: UserId,
    /// Reference to an uploaded CV (storage key or URL)
    pub cv: Option<String>,
    pub bio: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicantAccount {
    pub user: User,
    pub profile: ApplicantProfile,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyAccount {
    pub user: User,
    pub profile: CompanyProfile,
}

/// A user with exactly the profile its role calls for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Account {
    Applicant(ApplicantAccount),
    Company(CompanyAccount),
}

impl Account {
    pub fn user(&self) -> &User {
        match self {
            Self::Applicant(a) => &a.user,
            Self::Company(c) => &c.user,
        }
    }

    pub fn id(&self) -> UserId {
        self.user().id
    }

    pub fn role(&self) -> Role {
        match self {
            Self::Applicant(_) => Role::Applicant,
            Self::Company(_) => Role::Company,
        }
    }

    pub fn into_applicant(self) -> Option<ApplicantAccount> {
        match self {
            Self::Applicant(a) => Some(a),
            Self::Company(_) => None,
        }
    }

    pub fn into_company(self) -> Option<CompanyAccount> {
        match self {
            Self::Company(c) => Some(c),
            Self::Applicant(_) => None,
        }
    }
}

/// Role-specific part of a registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewProfile {
    Applicant,
    Company { name: String },
}

impl NewProfile {
    pub fn role(&self) -> Role {
        match self {
            Self::Applicant => Role::Applicant,
            Self::Company { .. } => Role::Company,
        }
    }
}

/// Everything needed to insert a user and its profile in one unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub profile: NewProfile,
}

/// Partial profile update; `None` leaves a field untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyProfileUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub website: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicantProfileUpdate {
    pub cv: Option<String>,
    pub bio: Option<String>,
}

impl CompanyProfile {
    pub fn apply(&mut self, update: CompanyProfileUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        if let Some(website) = update.website {
            self.website = Some(website);
        }
    }
}

impl ApplicantProfile {
    pub fn apply(&mut self, update: ApplicantProfileUpdate) {
        if let Some(cv) = update.cv {
            self.cv = Some(cv);
        }
        if let Some(bio) = update.bio {
            self.bio = Some(bio);
        }
    }
}
