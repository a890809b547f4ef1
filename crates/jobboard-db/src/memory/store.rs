//! Process-local implementation of every repository trait
//!
//! All tables sit behind one mutex, so multi-row writes such as account
//! creation are atomic. Uniqueness rules and error values match the
//! PostgreSQL schema.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;

use jobboard_core::entities::{
    Account, ApplicantAccount, ApplicantProfile, ApplicantProfileUpdate, Application,
    ApplicationStatus, CompanyAccount, CompanyProfile, CompanyProfileUpdate, Job, NewAccount,
    NewJob, NewProfile, Role, Session, User,
};
use jobboard_core::error::DomainError;
use jobboard_core::traits::{
    AccountRepository, ApplicationRepository, JobRepository, RepoResult, SessionRepository,
};
use jobboard_core::value_objects::{ApplicationId, JobId, UserId};

#[derive(Debug, Clone)]
struct UserRow {
    user: User,
    password_hash: String,
}

#[derive(Debug, Default)]
struct Tables {
    next_user_id: i64,
    next_job_id: i64,
    next_application_id: i64,
    users: BTreeMap<UserId, UserRow>,
    usernames: HashMap<String, UserId>,
    companies: HashMap<UserId, CompanyProfile>,
    applicants: HashMap<UserId, ApplicantProfile>,
    jobs: BTreeMap<JobId, Job>,
    applications: BTreeMap<ApplicationId, Application>,
    sessions: HashMap<String, Session>,
}

impl Tables {
    fn account(&self, id: UserId) -> RepoResult<Option<Account>> {
        let Some(row) = self.users.get(&id) else {
            return Ok(None);
        };
        let user = row.user.clone();

        let account = match user.role {
            Role::Company => {
                let profile = self
                    .companies
                    .get(&id)
                    .cloned()
                    .ok_or(DomainError::ProfileNotFound(id))?;
                Account::Company(CompanyAccount { user, profile })
            }
            Role::Applicant => {
                let profile = self
                    .applicants
                    .get(&id)
                    .cloned()
                    .ok_or(DomainError::ProfileNotFound(id))?;
                Account::Applicant(ApplicantAccount { user, profile })
            }
        };

        Ok(Some(account))
    }
}

/// In-memory store for tests and local runs
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of user rows
    pub fn user_count(&self) -> usize {
        self.tables.lock().users.len()
    }

    /// Number of company profile rows
    pub fn company_count(&self) -> usize {
        self.tables.lock().companies.len()
    }

    /// Number of applicant profile rows
    pub fn applicant_count(&self) -> usize {
        self.tables.lock().applicants.len()
    }

    /// Number of application rows
    pub fn application_count(&self) -> usize {
        self.tables.lock().applications.len()
    }

    /// Number of stored session rows, live or not
    pub fn session_count(&self) -> usize {
        self.tables.lock().sessions.len()
    }

    /// Open or close a posting
    pub fn set_job_active(&self, id: JobId, active: bool) -> RepoResult<()> {
        let mut tables = self.tables.lock();
        let job = tables.jobs.get_mut(&id).ok_or(DomainError::JobNotFound(id))?;
        job.is_active = active;
        Ok(())
    }
}

#[async_trait]
impl AccountRepository for MemoryStore {
    async fn find_user_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        Ok(self.tables.lock().users.get(&id).map(|row| row.user.clone()))
    }

    async fn find_user_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        let tables = self.tables.lock();
        Ok(tables
            .usernames
            .get(username)
            .and_then(|id| tables.users.get(id))
            .map(|row| row.user.clone()))
    }

    async fn username_exists(&self, username: &str) -> RepoResult<bool> {
        Ok(self.tables.lock().usernames.contains_key(username))
    }

    async fn find_account(&self, id: UserId) -> RepoResult<Option<Account>> {
        self.tables.lock().account(id)
    }

    async fn create_account(&self, account: &NewAccount, password_hash: &str) -> RepoResult<Account> {
        let mut tables = self.tables.lock();

        if tables.usernames.contains_key(&account.username) {
            return Err(DomainError::UsernameTaken);
        }

        tables.next_user_id += 1;
        let id = UserId::new(tables.next_user_id);

        let user = User {
            id,
            username: account.username.clone(),
            email: account.email.clone(),
            first_name: account.first_name.clone(),
            last_name: account.last_name.clone(),
            role: account.profile.role(),
            is_active: false,
            email_verified: false,
            date_joined: Utc::now(),
        };

        let created = match &account.profile {
            NewProfile::Company { name } => {
                let profile = CompanyProfile {
                    user_id: id,
                    name: name.clone(),
                    description: None,
                    website: None,
                };
                tables.companies.insert(id, profile.clone());
                Account::Company(CompanyAccount {
                    user: user.clone(),
                    profile,
                })
            }
            NewProfile::Applicant => {
                let profile = ApplicantProfile {
                    user_id: id,
                    cv: None,
                    bio: None,
                };
                tables.applicants.insert(id, profile.clone());
                Account::Applicant(ApplicantAccount {
                    user: user.clone(),
                    profile,
                })
            }
        };

        tables.usernames.insert(account.username.clone(), id);
        tables.users.insert(
            id,
            UserRow {
                user,
                password_hash: password_hash.to_string(),
            },
        );

        Ok(created)
    }

    async fn get_password_hash(&self, id: UserId) -> RepoResult<Option<String>> {
        Ok(self
            .tables
            .lock()
            .users
            .get(&id)
            .map(|row| row.password_hash.clone()))
    }

    async fn mark_verified(&self, id: UserId) -> RepoResult<()> {
        let mut tables = self.tables.lock();
        let row = tables.users.get_mut(&id).ok_or(DomainError::UserNotFound(id))?;
        row.user.mark_verified();
        Ok(())
    }

    async fn update_company_profile(
        &self,
        id: UserId,
        update: CompanyProfileUpdate,
    ) -> RepoResult<()> {
        let mut tables = self.tables.lock();
        let profile = tables
            .companies
            .get_mut(&id)
            .ok_or(DomainError::ProfileNotFound(id))?;
        profile.apply(update);
        Ok(())
    }

    async fn update_applicant_profile(
        &self,
        id: UserId,
        update: ApplicantProfileUpdate,
    ) -> RepoResult<()> {
        let mut tables = self.tables.lock();
        let profile = tables
            .applicants
            .get_mut(&id)
            .ok_or(DomainError::ProfileNotFound(id))?;
        profile.apply(update);
        Ok(())
    }
}

fn newest_first(jobs: &mut [Job]) {
    jobs.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
}

#[async_trait]
impl JobRepository for MemoryStore {
    async fn find_by_id(&self, id: JobId) -> RepoResult<Option<Job>> {
        Ok(self.tables.lock().jobs.get(&id).cloned())
    }

    async fn list_active(&self) -> RepoResult<Vec<Job>> {
        let mut jobs: Vec<Job> = self
            .tables
            .lock()
            .jobs
            .values()
            .filter(|job| job.is_active)
            .cloned()
            .collect();
        newest_first(&mut jobs);
        Ok(jobs)
    }

    async fn create(&self, job: &NewJob) -> RepoResult<Job> {
        let mut tables = self.tables.lock();

        // Same foreign key as jobs.company_id -> companies.user_id
        if !tables.companies.contains_key(&job.company_id) {
            return Err(DomainError::DatabaseError(format!(
                "company {} does not exist",
                job.company_id
            )));
        }

        tables.next_job_id += 1;
        let created = Job {
            id: JobId::new(tables.next_job_id),
            company_id: job.company_id,
            title: job.title.clone(),
            description: job.description.clone(),
            location: job.location.clone(),
            job_type: job.job_type.clone(),
            salary: job.salary.clone(),
            created_at: Utc::now(),
            is_active: job.is_active,
        };
        tables.jobs.insert(created.id, created.clone());
        Ok(created)
    }
}

#[async_trait]
impl ApplicationRepository for MemoryStore {
    async fn exists(&self, job_id: JobId, applicant_id: UserId) -> RepoResult<bool> {
        Ok(self
            .tables
            .lock()
            .applications
            .values()
            .any(|a| a.job_id == job_id && a.applicant_id == applicant_id))
    }

    async fn create(&self, job_id: JobId, applicant_id: UserId) -> RepoResult<Application> {
        let mut tables = self.tables.lock();

        if tables
            .applications
            .values()
            .any(|a| a.job_id == job_id && a.applicant_id == applicant_id)
        {
            return Err(DomainError::AlreadyApplied);
        }
        if !tables.jobs.contains_key(&job_id) {
            return Err(DomainError::DatabaseError(format!("job {job_id} does not exist")));
        }
        if !tables.applicants.contains_key(&applicant_id) {
            return Err(DomainError::DatabaseError(format!(
                "applicant {applicant_id} does not exist"
            )));
        }

        tables.next_application_id += 1;
        let application = Application {
            id: ApplicationId::new(tables.next_application_id),
            job_id,
            applicant_id,
            status: ApplicationStatus::default(),
            applied_at: Utc::now(),
        };
        tables.applications.insert(application.id, application.clone());
        Ok(application)
    }

    async fn find_by_applicant(&self, applicant_id: UserId) -> RepoResult<Vec<Application>> {
        // BTreeMap iterates in id order, i.e. oldest first
        let mut found: Vec<Application> = self
            .tables
            .lock()
            .applications
            .values()
            .filter(|a| a.applicant_id == applicant_id)
            .cloned()
            .collect();
        found.reverse();
        Ok(found)
    }

    async fn find_by_job(&self, job_id: JobId) -> RepoResult<Vec<Application>> {
        Ok(self
            .tables
            .lock()
            .applications
            .values()
            .filter(|a| a.job_id == job_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl SessionRepository for MemoryStore {
    async fn create(&self, session: &Session) -> RepoResult<()> {
        let mut tables = self.tables.lock();
        let now = Utc::now();
        tables.sessions.retain(|_, s| s.is_live_at(now));
        tables.sessions.insert(session.id.clone(), session.clone());
        Ok(())
    }

    async fn find(&self, id: &str) -> RepoResult<Option<Session>> {
        Ok(self.tables.lock().sessions.get(id).cloned())
    }

    async fn revoke(&self, id: &str) -> RepoResult<()> {
        if let Some(session) = self.tables.lock().sessions.get_mut(id) {
            session.revoked_at.get_or_insert_with(Utc::now);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn new_account(username: &str, profile: NewProfile) -> NewAccount {
        NewAccount {
            username: username.to_string(),
            email: format!("{username}@example.com"),
            first_name: String::new(),
            last_name: String::new(),
            profile,
        }
    }

    fn company(name: &str) -> NewProfile {
        NewProfile::Company {
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_company_signup_creates_only_company_profile() {
        let store = MemoryStore::new();
        let account = store
            .create_account(&new_account("acme", company("Acme")), "hash")
            .await
            .unwrap();

        assert_eq!(account.role(), Role::Company);
        assert!(!account.user().is_active);
        assert_eq!(store.company_count(), 1);
        assert_eq!(store.applicant_count(), 0);

        let loaded = store.find_account(account.id()).await.unwrap().unwrap();
        assert_eq!(loaded.into_company().unwrap().profile.name, "Acme");
    }

    #[tokio::test]
    async fn test_duplicate_username_leaves_no_rows() {
        let store = MemoryStore::new();
        store
            .create_account(&new_account("bob", NewProfile::Applicant), "hash")
            .await
            .unwrap();

        let err = store
            .create_account(&new_account("bob", company("Bob Inc")), "hash")
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::UsernameTaken));
        assert_eq!(store.user_count(), 1);
        assert_eq!(store.company_count(), 0);
    }

    #[tokio::test]
    async fn test_duplicate_application_rejected() {
        let store = MemoryStore::new();
        let acme = store
            .create_account(&new_account("acme", company("Acme")), "hash")
            .await
            .unwrap();
        let bob = store
            .create_account(&new_account("bob", NewProfile::Applicant), "hash")
            .await
            .unwrap();
        let job = JobRepository::create(
            &store,
            &NewJob::new(acme.id(), "Dev".into(), "Code".into(), "Remote".into()),
        )
        .await
        .unwrap();

        ApplicationRepository::create(&store, job.id, bob.id())
            .await
            .unwrap();
        let err = ApplicationRepository::create(&store, job.id, bob.id())
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::AlreadyApplied));
        assert_eq!(store.application_count(), 1);
    }

    #[tokio::test]
    async fn test_list_active_skips_closed_jobs_newest_first() {
        let store = MemoryStore::new();
        let acme = store
            .create_account(&new_account("acme", company("Acme")), "hash")
            .await
            .unwrap();

        let mut ids = Vec::new();
        for title in ["first", "second", "third"] {
            let job = JobRepository::create(
                &store,
                &NewJob::new(acme.id(), title.into(), "d".into(), "l".into()),
            )
            .await
            .unwrap();
            ids.push(job.id);
        }
        store.set_job_active(ids[1], false).unwrap();

        let listed: Vec<JobId> = store
            .list_active()
            .await
            .unwrap()
            .into_iter()
            .map(|j| j.id)
            .collect();
        assert_eq!(listed, vec![ids[2], ids[0]]);
    }

    #[tokio::test]
    async fn test_session_revoke() {
        let store = MemoryStore::new();
        let session = Session::new(
            "sess".to_string(),
            UserId::new(1),
            Role::Applicant,
            Duration::hours(1),
        );
        SessionRepository::create(&store, &session).await.unwrap();

        store.revoke("sess").await.unwrap();
        let revoked = store.find("sess").await.unwrap().unwrap();
        assert!(!revoked.is_live());

        // Unknown ids are ignored
        store.revoke("missing").await.unwrap();
    }

    #[tokio::test]
    async fn test_new_session_prunes_dead_ones() {
        let store = MemoryStore::new();
        let account = store
            .create_account(&new_account("bob", NewProfile::Applicant), "hash")
            .await
            .unwrap();
        let add = |id: &str, ttl: Duration| {
            let session = Session::new(id.to_string(), account.id(), Role::Applicant, ttl);
            let store = store.clone();
            async move { SessionRepository::create(&store, &session).await.unwrap() }
        };

        add("live", Duration::hours(1)).await;
        add("revoked", Duration::hours(1)).await;
        store.revoke("revoked").await.unwrap();
        assert!(store.find("revoked").await.unwrap().is_some());

        add("expired", Duration::seconds(-1)).await;
        assert!(store.find("revoked").await.unwrap().is_none());
        assert!(store.find("expired").await.unwrap().is_some());
        assert_eq!(store.session_count(), 2);

        add("next", Duration::hours(1)).await;
        assert!(store.find("expired").await.unwrap().is_none());
        assert!(store.find("live").await.unwrap().unwrap().is_live());
        assert_eq!(store.session_count(), 2);
    }
}
