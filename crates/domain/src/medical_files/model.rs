use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::prescriptions::{Medication, Prescription};

/// Derived summary of a prescription, mirrored into the patient's file
/// at creation time.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PrescriptionEntry {
    pub prescription_id: Uuid,
    pub date: NaiveDate,
    pub doctor_id: Uuid,
    pub medications: Vec<Medication>,
}

impl From<&Prescription> for PrescriptionEntry {
    fn from(prescription: &Prescription) -> Self {
        Self {
            prescription_id: prescription.id,
            date: prescription.date,
            doctor_id: prescription.doctor_id,
            medications: prescription.medications.clone(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub date: NaiveDate,
    pub summary: String,
}

/// A patient's aggregated history. Every category is append-only: new
/// entries go at the end and prior entries are never rewritten.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MedicalFile {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub prescriptions: Vec<PrescriptionEntry>,
    pub lab_results: Vec<HistoryEntry>,
    pub vaccinations: Vec<HistoryEntry>,
    pub vascular_access: Vec<HistoryEntry>,
    pub updated_at: DateTime<Utc>,
}

impl MedicalFile {
    pub fn new(patient_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            patient_id,
            prescriptions: Vec::new(),
            lab_results: Vec::new(),
            vaccinations: Vec::new(),
            vascular_access: Vec::new(),
            updated_at: Utc::now(),
        }
    }

    pub fn append_prescription(&mut self, entry: PrescriptionEntry) {
        self.prescriptions.push(entry);
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(day: u32) -> PrescriptionEntry {
        PrescriptionEntry {
            prescription_id: Uuid::new_v4(),
            date: NaiveDate::from_ymd_opt(2026, 8, day).unwrap(),
            doctor_id: Uuid::new_v4(),
            medications: Vec::new(),
        }
    }

    #[test]
    fn append_preserves_prior_entries_in_order() {
        let mut file = MedicalFile::new(Uuid::new_v4());
        let first = entry(1);
        let second = entry(2);

        file.append_prescription(first.clone());
        let stamp = file.updated_at;
        file.append_prescription(second.clone());

        assert_eq!(file.prescriptions, vec![first, second]);
        assert!(file.updated_at >= stamp);
    }
}
