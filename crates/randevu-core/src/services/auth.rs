//! The authenticator: credential verification, token issuance, account
//! registration, and token-to-account resolution.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::{
    Account, AccountKind, DoctorProfile, NewDoctorProfile, PatientProfile, Registration, Role,
    Specialty,
};
use crate::error::DomainError;
use crate::ports::{AccountRepository, PasswordService, TokenService};

/// Result of a successful login: the issued token plus a role/id summary.
#[derive(Debug, Clone)]
pub struct LoginSummary {
    pub id: i64,
    /// Absent for doctor logins, which are keyed by national id.
    pub username: Option<String>,
    pub role: Role,
    pub token: String,
    pub message: String,
}

/// Profile summary for the authenticated account.
#[derive(Debug, Clone)]
pub struct AccountDetails {
    pub id: i64,
    pub username: String,
    pub role: Role,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub phone: String,
}

pub struct AuthService {
    accounts: Arc<dyn AccountRepository>,
    tokens: Arc<dyn TokenService>,
    passwords: Arc<dyn PasswordService>,
}

impl AuthService {
    pub fn new(
        accounts: Arc<dyn AccountRepository>,
        tokens: Arc<dyn TokenService>,
        passwords: Arc<dyn PasswordService>,
    ) -> Self {
        Self {
            accounts,
            tokens,
            passwords,
        }
    }

    /// Verify a username/password pair and issue a token keyed on the
    /// username.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginSummary, DomainError> {
        let account = self
            .accounts
            .find_by_username(username)
            .await?
            .ok_or(DomainError::InvalidCredentials)?;

        self.check_password(password, &account)?;

        let token = self
            .tokens
            .issue(&account.username)
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        tracing::info!(account_id = account.id, role = %account.role(), "login succeeded");

        Ok(LoginSummary {
            id: account.id,
            username: Some(account.username.clone()),
            role: account.role(),
            token,
            message: "Login successful".to_string(),
        })
    }

    /// Doctor login: keyed by national id, restricted to DOCTOR accounts,
    /// and the issued token's subject is the national id rather than the
    /// username.
    pub async fn doctor_login(
        &self,
        national_id: &str,
        password: &str,
    ) -> Result<LoginSummary, DomainError> {
        let account = self
            .accounts
            .find_by_national_id(national_id)
            .await?
            .ok_or(DomainError::InvalidCredentials)?;

        self.check_password(password, &account)?;

        if account.role() != Role::Doctor {
            return Err(DomainError::InvalidCredentials);
        }

        let token = self
            .tokens
            .issue(&account.national_id)
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        tracing::info!(account_id = account.id, "doctor login succeeded");

        Ok(LoginSummary {
            id: account.id,
            username: None,
            role: account.role(),
            token,
            message: "Doctor login successful".to_string(),
        })
    }

    /// Self-service patient registration.
    pub async fn register_patient(&self, reg: Registration) -> Result<Account, DomainError> {
        self.check_uniqueness(&reg).await?;
        let account = self.build_account(reg, AccountKind::Patient(PatientProfile::default()))?;
        Ok(self.accounts.insert(account).await?)
    }

    /// Admin-gated doctor registration. The specialty arrives as a string
    /// and is resolved against the catalog, accepting either the enum name
    /// or the display name.
    pub async fn register_doctor(
        &self,
        reg: Registration,
        profile: NewDoctorProfile,
    ) -> Result<Account, DomainError> {
        let specialty = Specialty::from_name(profile.specialty.trim())
            .or_else(|| Specialty::from_display_name(&profile.specialty))
            .ok_or_else(|| DomainError::InvalidSpecialty(profile.specialty.trim().to_string()))?;

        self.check_uniqueness(&reg).await?;

        let kind = AccountKind::Doctor(DoctorProfile {
            diploma_no: profile.diploma_no,
            title: profile.title,
            specialty,
            patient_ids: Vec::new(),
        });
        let account = self.build_account(reg, kind)?;
        Ok(self.accounts.insert(account).await?)
    }

    /// Admin-gated admin registration.
    pub async fn register_admin(&self, reg: Registration) -> Result<Account, DomainError> {
        self.check_uniqueness(&reg).await?;
        let account = self.build_account(reg, AccountKind::Admin)?;
        Ok(self.accounts.insert(account).await?)
    }

    /// Idempotent seeding of the default admin account, run once at
    /// startup before the server starts accepting requests.
    pub async fn ensure_admin_account(&self) -> Result<(), DomainError> {
        if self.accounts.exists_by_username("admin").await? {
            return Ok(());
        }

        let reg = Registration {
            username: "admin".to_string(),
            password: "admin123".to_string(),
            national_id: "22345678901".to_string(),
            name: "Admin".to_string(),
            surname: "User".to_string(),
            email: "admin1@example.com".to_string(),
            phone: "1234567890".to_string(),
            address: Some("Admin Address".to_string()),
            birth_date: NaiveDate::from_ymd_opt(1990, 1, 1).expect("valid seed date"),
            blood_type: Some("A Rh+".to_string()),
        };
        let account = self.build_account(reg, AccountKind::Admin)?;
        self.accounts.insert(account).await?;
        tracing::info!("default admin account created");
        Ok(())
    }

    /// Resolve a raw token to the account it identifies. Every failure mode
    /// (malformed, tampered, expired, unknown subject) collapses into
    /// `Unauthenticated`.
    ///
    /// Subjects are usernames for regular logins and national ids for
    /// doctor logins, so resolution tries both lookups in that order.
    pub async fn resolve_token(&self, token: &str) -> Result<Account, DomainError> {
        let claims = self
            .tokens
            .verify(token)
            .map_err(|_| DomainError::Unauthenticated)?;

        if let Some(account) = self.accounts.find_by_username(&claims.subject).await? {
            return Ok(account);
        }
        self.accounts
            .find_by_national_id(&claims.subject)
            .await?
            .ok_or(DomainError::Unauthenticated)
    }

    pub fn token_lifetime_millis(&self) -> i64 {
        self.tokens.lifetime_millis()
    }

    /// Profile summary for `me`-style endpoints.
    pub fn current_user(&self, account: &Account) -> AccountDetails {
        AccountDetails {
            id: account.id,
            username: account.username.clone(),
            role: account.role(),
            name: account.name.clone(),
            surname: account.surname.clone(),
            email: account.email.clone(),
            phone: account.phone.clone(),
        }
    }

    fn check_password(&self, password: &str, account: &Account) -> Result<(), DomainError> {
        let valid = self
            .passwords
            .verify(password, &account.password_hash)
            .map_err(|e| DomainError::Internal(e.to_string()))?;
        if valid {
            Ok(())
        } else {
            Err(DomainError::InvalidCredentials)
        }
    }

    async fn check_uniqueness(&self, reg: &Registration) -> Result<(), DomainError> {
        if self.accounts.exists_by_national_id(&reg.national_id).await? {
            return Err(DomainError::AlreadyExists(format!(
                "national id already in use: {}",
                reg.national_id
            )));
        }
        if self.accounts.exists_by_email(&reg.email).await? {
            return Err(DomainError::AlreadyExists(format!(
                "email already in use: {}",
                reg.email
            )));
        }
        if self.accounts.exists_by_username(&reg.username).await? {
            return Err(DomainError::AlreadyExists(format!(
                "username already in use: {}",
                reg.username
            )));
        }
        Ok(())
    }

    fn build_account(&self, reg: Registration, kind: AccountKind) -> Result<Account, DomainError> {
        let password_hash = self
            .passwords
            .hash(&reg.password)
            .map_err(|e| DomainError::Internal(e.to_string()))?;
        Ok(Account::from_registration(reg, password_hash, kind))
    }
}
