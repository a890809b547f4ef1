//! User and profile model -> entity mappers

use jobboard_core::entities::{
    Account, ApplicantAccount, ApplicantProfile, CompanyAccount, CompanyProfile, Role, User,
};
use jobboard_core::error::DomainError;
use jobboard_core::value_objects::UserId;

use crate::models::{ApplicantModel, CompanyModel, UserModel};

/// Parse a stored role column
pub fn parse_role(raw: &str) -> Result<Role, DomainError> {
    Role::parse(raw).ok_or_else(|| DomainError::DatabaseError(format!("unknown role '{raw}'")))
}

impl TryFrom<UserModel> for User {
    type Error = DomainError;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId::new(model.id),
            role: parse_role(&model.role)?,
            username: model.username,
            email: model.email,
            first_name: model.first_name,
            last_name: model.last_name,
            is_active: model.is_active,
            email_verified: model.email_verified,
            date_joined: model.date_joined,
        })
    }
}

impl From<CompanyModel> for CompanyProfile {
    fn from(model: CompanyModel) -> Self {
        CompanyProfile {
            user_id: UserId::new(model.user_id),
            name: model.name,
            description: model.description,
            website: model.website,
        }
    }
}

impl From<ApplicantModel> for ApplicantProfile {
    fn from(model: ApplicantModel) -> Self {
        ApplicantProfile {
            user_id: UserId::new(model.user_id),
            cv: model.cv,
            bio: model.bio,
        }
    }
}

/// Pair a user with the profile matching its role
pub fn company_account(user: User, profile: CompanyModel) -> Account {
    Account::Company(CompanyAccount {
        user,
        profile: profile.into(),
    })
}

pub fn applicant_account(user: User, profile: ApplicantModel) -> Account {
    Account::Applicant(ApplicantAccount {
        user,
        profile: profile.into(),
    })
}
