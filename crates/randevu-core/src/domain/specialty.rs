use std::fmt;

use serde::{Deserialize, Serialize};

/// Fixed catalog of medical specialties a doctor practices in.
///
/// Display names are the canonical patient-facing labels and are treated as
/// data: booking requests reference a specialty by display name, matched
/// case-insensitively against this list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Specialty {
    Cardiologist,
    Neurologist,
    Orthopedist,
    Pediatrician,
    Dermatologist,
    Psychiatrist,
    Gynecologist,
    Oncologist,
    Urologist,
    Gastroenterologist,
    EntSpecialist,
    Radiologist,
    Pathologist,
    Anesthesiologist,
    Pulmonologist,
    Ophthalmologist,
    Rheumatologist,
    Endocrinologist,
    Nephrologist,
    Hematologist,
    Surgeon,
    Immunologist,
    Allergist,
    GeneralPhysician,
    PlasticSurgeon,
    VascularSurgeon,
    TraumaSurgeon,
    FamilyMedicine,
    SportsMedicine,
    OccupationalMedicine,
}

impl Specialty {
    /// Every catalog entry, in seeding order.
    pub const ALL: [Specialty; 30] = [
        Specialty::Cardiologist,
        Specialty::Neurologist,
        Specialty::Orthopedist,
        Specialty::Pediatrician,
        Specialty::Dermatologist,
        Specialty::Psychiatrist,
        Specialty::Gynecologist,
        Specialty::Oncologist,
        Specialty::Urologist,
        Specialty::Gastroenterologist,
        Specialty::EntSpecialist,
        Specialty::Radiologist,
        Specialty::Pathologist,
        Specialty::Anesthesiologist,
        Specialty::Pulmonologist,
        Specialty::Ophthalmologist,
        Specialty::Rheumatologist,
        Specialty::Endocrinologist,
        Specialty::Nephrologist,
        Specialty::Hematologist,
        Specialty::Surgeon,
        Specialty::Immunologist,
        Specialty::Allergist,
        Specialty::GeneralPhysician,
        Specialty::PlasticSurgeon,
        Specialty::VascularSurgeon,
        Specialty::TraumaSurgeon,
        Specialty::FamilyMedicine,
        Specialty::SportsMedicine,
        Specialty::OccupationalMedicine,
    ];

    /// Stable identifier used in the store column.
    pub fn name(&self) -> &'static str {
        match self {
            Specialty::Cardiologist => "CARDIOLOGIST",
            Specialty::Neurologist => "NEUROLOGIST",
            Specialty::Orthopedist => "ORTHOPEDIST",
            Specialty::Pediatrician => "PEDIATRICIAN",
            Specialty::Dermatologist => "DERMATOLOGIST",
            Specialty::Psychiatrist => "PSYCHIATRIST",
            Specialty::Gynecologist => "GYNECOLOGIST",
            Specialty::Oncologist => "ONCOLOGIST",
            Specialty::Urologist => "UROLOGIST",
            Specialty::Gastroenterologist => "GASTROENTEROLOGIST",
            Specialty::EntSpecialist => "ENT_SPECIALIST",
            Specialty::Radiologist => "RADIOLOGIST",
            Specialty::Pathologist => "PATHOLOGIST",
            Specialty::Anesthesiologist => "ANESTHESIOLOGIST",
            Specialty::Pulmonologist => "PULMONOLOGIST",
            Specialty::Ophthalmologist => "OPHTHALMOLOGIST",
            Specialty::Rheumatologist => "RHEUMATOLOGIST",
            Specialty::Endocrinologist => "ENDOCRINOLOGIST",
            Specialty::Nephrologist => "NEPHROLOGIST",
            Specialty::Hematologist => "HEMATOLOGIST",
            Specialty::Surgeon => "SURGEON",
            Specialty::Immunologist => "IMMUNOLOGIST",
            Specialty::Allergist => "ALLERGIST",
            Specialty::GeneralPhysician => "GENERAL_PHYSICIAN",
            Specialty::PlasticSurgeon => "PLASTIC_SURGEON",
            Specialty::VascularSurgeon => "VASCULAR_SURGEON",
            Specialty::TraumaSurgeon => "TRAUMA_SURGEON",
            Specialty::FamilyMedicine => "FAMILY_MEDICINE",
            Specialty::SportsMedicine => "SPORTS_MEDICINE",
            Specialty::OccupationalMedicine => "OCCUPATIONAL_MEDICINE",
        }
    }

    /// Canonical human-readable label.
    pub fn display_name(&self) -> &'static str {
        match self {
            Specialty::Cardiologist => "Kardiyolog (Kalp ve Damar Hastalıkları Uzmanı)",
            Specialty::Neurologist => "Nörolog (Sinir Sistemi Hastalıkları Uzmanı)",
            Specialty::Orthopedist => "Ortopedi Uzmanı (Kemik ve Eklem Hastalıkları)",
            Specialty::Pediatrician => "Pediatrist (Çocuk Sağlığı ve Hastalıkları Uzmanı)",
            Specialty::Dermatologist => "Dermatolog (Cilt Hastalıkları Uzmanı)",
            Specialty::Psychiatrist => "Psikiyatrist (Ruh Sağlığı ve Hastalıkları Uzmanı)",
            Specialty::Gynecologist => "Jinekolog (Kadın Hastalıkları ve Doğum Uzmanı)",
            Specialty::Oncologist => "Onkolog (Kanser Hastalıkları Uzmanı)",
            Specialty::Urologist => "Ürolog (Üreme ve İdrar Yolları Hastalıkları Uzmanı)",
            Specialty::Gastroenterologist => "Gastroenterolog (Sindirim Sistemi Hastalıkları Uzmanı)",
            Specialty::EntSpecialist => "KBB Uzmanı (Kulak Burun Boğaz Hastalıkları)",
            Specialty::Radiologist => "Radyolog (Tıbbi Görüntüleme Uzmanı)",
            Specialty::Pathologist => "Patolog (Hastalıkların Mikroskobik İncelemesi)",
            Specialty::Anesthesiologist => "Anesteziyolog (Anestezi ve Reanimasyon Uzmanı)",
            Specialty::Pulmonologist => "Pulmonolog (Akciğer ve Solunum Hastalıkları Uzmanı)",
            Specialty::Ophthalmologist => "Göz Doktoru (Göz Sağlığı ve Hastalıkları Uzmanı)",
            Specialty::Rheumatologist => "Romatolog (Romatizmal Hastalıklar Uzmanı)",
            Specialty::Endocrinologist => "Endokrinolog (Hormon Hastalıkları Uzmanı)",
            Specialty::Nephrologist => "Nefrolog (Böbrek Hastalıkları Uzmanı)",
            Specialty::Hematologist => "Hematolog (Kan Hastalıkları Uzmanı)",
            Specialty::Surgeon => "Cerrah (Genel Cerrahi Uzmanı)",
            Specialty::Immunologist => "İmmünolog (Bağışıklık Sistemi Hastalıkları Uzmanı)",
            Specialty::Allergist => "Alerji Uzmanı",
            Specialty::GeneralPhysician => "Pratisyen Hekim (Genel Sağlık Hizmetleri)",
            Specialty::PlasticSurgeon => "Plastik Cerrah (Estetik ve Rekonstrüktif Cerrahi)",
            Specialty::VascularSurgeon => "Damar Cerrahı",
            Specialty::TraumaSurgeon => "Travma Cerrahı",
            Specialty::FamilyMedicine => "Aile Hekimi",
            Specialty::SportsMedicine => "Spor Hekimi",
            Specialty::OccupationalMedicine => "İşyeri Hekimi (Meslek Hastalıkları Uzmanı)",
        }
    }

    /// Resolve a stored enum name back to the variant.
    pub fn from_name(name: &str) -> Option<Specialty> {
        Specialty::ALL.iter().copied().find(|s| s.name() == name)
    }

    /// Resolve a display name, case-insensitively, after trimming. This is
    /// the lookup booking requests go through.
    pub fn from_display_name(display_name: &str) -> Option<Specialty> {
        let wanted = display_name.trim().to_lowercase();
        Specialty::ALL
            .iter()
            .copied()
            .find(|s| s.display_name().to_lowercase() == wanted)
    }
}

impl fmt::Display for Specialty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A persisted catalog row: one per enum value, keyed by a numeric id used
/// for id-based lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialtyRecord {
    pub id: i64,
    pub specialty: Specialty,
}

impl SpecialtyRecord {
    pub fn display_name(&self) -> &'static str {
        self.specialty.display_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_lookup_is_case_insensitive() {
        let found = Specialty::from_display_name("kardiyolog (kalp ve damar hastalıkları uzmanı)");
        assert_eq!(found, Some(Specialty::Cardiologist));
    }

    #[test]
    fn display_name_lookup_trims_whitespace() {
        let found = Specialty::from_display_name("  Aile Hekimi ");
        assert_eq!(found, Some(Specialty::FamilyMedicine));
    }

    #[test]
    fn unknown_display_name_is_rejected() {
        assert_eq!(Specialty::from_display_name("Diş Hekimi"), None);
        assert_eq!(Specialty::from_display_name(""), None);
    }

    #[test]
    fn name_round_trip() {
        for specialty in Specialty::ALL {
            assert_eq!(Specialty::from_name(specialty.name()), Some(specialty));
        }
        assert_eq!(Specialty::from_name("DENTIST"), None);
    }

    #[test]
    fn catalog_is_complete_and_distinct() {
        let mut names: Vec<_> = Specialty::ALL.iter().map(|s| s.display_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Specialty::ALL.len());
    }
}
