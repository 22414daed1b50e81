use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::specialty::Specialty;

/// Access tier of an account. Stored and serialized as the exact strings
/// `"ADMIN"`, `"DOCTOR"`, `"PATIENT"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Doctor,
    Patient,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Doctor => "DOCTOR",
            Role::Patient => "PATIENT",
        }
    }

    /// Parse the stored role string. Case-sensitive: the store column holds
    /// exactly the three canonical values.
    pub fn parse(value: &str) -> Option<Role> {
        match value {
            "ADMIN" => Some(Role::Admin),
            "DOCTOR" => Some(Role::Doctor),
            "PATIENT" => Some(Role::Patient),
            _ => None,
        }
    }

    /// The `ROLE_<value>` form used when interfacing with an external
    /// authority model.
    pub fn authority(&self) -> String {
        format!("ROLE_{}", self.as_str())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Variant payload distinguishing the account kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AccountKind {
    Admin,
    Doctor(DoctorProfile),
    Patient(PatientProfile),
}

/// Doctor-specific profile data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctorProfile {
    pub diploma_no: String,
    pub title: String,
    pub specialty: Specialty,
    /// Patients this doctor has seen. Informational only, not an ownership
    /// relation.
    pub patient_ids: Vec<i64>,
}

/// Patient-specific profile data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatientProfile {
    pub medical_history: Option<String>,
    pub doctor_ids: Vec<i64>,
}

/// A person with system access. The role tag is derived from the variant
/// payload, so the two can never disagree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub national_id: String,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
    pub birth_date: NaiveDate,
    pub blood_type: Option<String>,
    pub kind: AccountKind,
}

impl Account {
    /// Build an unpersisted account from registration data. The store
    /// assigns the id on insert.
    pub fn from_registration(reg: Registration, password_hash: String, kind: AccountKind) -> Self {
        Self {
            id: 0,
            username: reg.username,
            password_hash,
            national_id: reg.national_id,
            name: reg.name,
            surname: reg.surname,
            email: reg.email,
            phone: reg.phone,
            address: reg.address,
            birth_date: reg.birth_date,
            blood_type: reg.blood_type,
            kind,
        }
    }

    pub fn role(&self) -> Role {
        match &self.kind {
            AccountKind::Admin => Role::Admin,
            AccountKind::Doctor(_) => Role::Doctor,
            AccountKind::Patient(_) => Role::Patient,
        }
    }

    pub fn doctor_profile(&self) -> Option<&DoctorProfile> {
        match &self.kind {
            AccountKind::Doctor(profile) => Some(profile),
            _ => None,
        }
    }

    pub fn patient_profile(&self) -> Option<&PatientProfile> {
        match &self.kind {
            AccountKind::Patient(profile) => Some(profile),
            _ => None,
        }
    }
}

/// Shared registration fields for any account variant. Carries the plain
/// password; hashing happens in the authenticator.
#[derive(Debug, Clone)]
pub struct Registration {
    pub username: String,
    pub password: String,
    pub national_id: String,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
    pub birth_date: NaiveDate,
    pub blood_type: Option<String>,
}

/// Doctor-specific registration fields. The specialty arrives as a string
/// (enum name or display name) and is resolved during registration.
#[derive(Debug, Clone)]
pub struct NewDoctorProfile {
    pub diploma_no: String,
    pub title: String,
    pub specialty: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trip() {
        for role in [Role::Admin, Role::Doctor, Role::Patient] {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
        assert_eq!(Role::parse("admin"), None);
        assert_eq!(Role::parse("NURSE"), None);
    }

    #[test]
    fn authority_prefixes_role() {
        assert_eq!(Role::Admin.authority(), "ROLE_ADMIN");
        assert_eq!(Role::Patient.authority(), "ROLE_PATIENT");
    }

    #[test]
    fn role_tag_follows_variant() {
        let reg = Registration {
            username: "ayse".to_string(),
            password: "parola1".to_string(),
            national_id: "12345678901".to_string(),
            name: "Ayşe".to_string(),
            surname: "Yılmaz".to_string(),
            email: "ayse@example.com".to_string(),
            phone: "5551112233".to_string(),
            address: None,
            birth_date: NaiveDate::from_ymd_opt(1995, 4, 1).unwrap(),
            blood_type: Some("A Rh+".to_string()),
        };
        let account = Account::from_registration(
            reg,
            "hash".to_string(),
            AccountKind::Patient(PatientProfile::default()),
        );
        assert_eq!(account.role(), Role::Patient);
        assert!(account.patient_profile().is_some());
        assert!(account.doctor_profile().is_none());
    }
}
