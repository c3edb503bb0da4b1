//! One named schema per request kind. Controllers validate a raw payload
//! against the schema for the route before any use-case runs.

use super::{Field, Schema};

pub const ROLES: &[&str] = &["ADMIN", "DOCTOR", "NURSE", "PATIENT"];
pub const MACHINE_STATUSES: &[&str] = &["ACTIVE", "MAINTENANCE", "OUT_OF_SERVICE"];

pub fn create_user() -> Schema {
    Schema::new("CreateUser")
        .field(Field::required("firstName").string().min_len(3).max_len(50))
        .field(Field::required("lastName").string().min_len(3).max_len(50))
        .field(Field::required("email").string().email())
        .field(Field::required("password").string().min_len(8).max_len(128))
        .field(Field::required("role").string().one_of(ROLES))
        .field(Field::optional("phone").string().max_len(30))
}

pub fn update_user() -> Schema {
    Schema::new("UpdateUser")
        .field(Field::optional("firstName").string().min_len(3).max_len(50))
        .field(Field::optional("lastName").string().min_len(3).max_len(50))
        .field(Field::optional("email").string().email())
        .field(Field::optional("role").string().one_of(ROLES))
        .field(Field::optional("phone").string().max_len(30))
}

fn medication() -> Schema {
    Schema::new("Medication")
        .field(Field::required("name").string().min_len(1).max_len(100))
        .field(Field::required("dosage").string().min_len(1).max_len(50))
        .field(Field::required("frequency").string().min_len(1).max_len(50))
        .field(Field::required("duration").string().min_len(1).max_len(50))
        .field(Field::optional("notes").string().max_len(500))
}

pub fn create_prescription() -> Schema {
    Schema::new("CreatePrescription")
        .field(Field::required("patientId").string().uuid())
        .field(Field::required("doctorId").string().uuid())
        .field(Field::required("date").string().date())
        .field(
            Field::required("medications")
                .array()
                .min_items(1)
                .each(medication()),
        )
}

pub fn update_prescription() -> Schema {
    Schema::new("UpdatePrescription")
        .field(Field::optional("date").string().date())
        .field(
            Field::optional("medications")
                .array()
                .min_items(1)
                .each(medication()),
        )
}

pub fn create_machine() -> Schema {
    Schema::new("CreateMachine")
        .field(Field::required("name").string().min_len(2).max_len(100))
        .field(Field::required("serialNumber").string().min_len(3).max_len(64))
        .field(Field::required("status").string().one_of(MACHINE_STATUSES))
        .field(Field::optional("location").string().max_len(100))
}

pub fn update_machine() -> Schema {
    Schema::new("UpdateMachine")
        .field(Field::optional("name").string().min_len(2).max_len(100))
        .field(Field::optional("status").string().one_of(MACHINE_STATUSES))
        .field(Field::optional("location").string().max_len(100))
}

pub fn create_appointment() -> Schema {
    Schema::new("CreateAppointment")
        .field(Field::required("patientId").string().uuid())
        .field(Field::required("doctorId").string().uuid())
        .field(Field::required("scheduledAt").string().timestamp())
        .field(Field::optional("reason").string().max_len(500))
}

pub fn update_appointment() -> Schema {
    Schema::new("UpdateAppointment")
        .field(Field::optional("scheduledAt").string().timestamp())
        .field(Field::optional("reason").string().max_len(500))
}

pub fn update_dialysis_session() -> Schema {
    Schema::new("UpdateDialysisSession")
        .field(Field::optional("date").string().date())
        .field(
            Field::optional("durationMinutes")
                .integer()
                .min(1.0)
                .max(600.0),
        )
        .field(Field::optional("preWeightKg").number().min(0.0).max(500.0))
        .field(Field::optional("postWeightKg").number().min(0.0).max(500.0))
        .field(Field::optional("notes").string().max_len(1000))
}

pub fn update_dialysis_protocol() -> Schema {
    Schema::new("UpdateDialysisProtocol")
        .field(Field::optional("dialyzer").string().min_len(1).max_len(100))
        .field(
            Field::optional("bloodFlowMlMin")
                .integer()
                .min(50.0)
                .max(600.0),
        )
        .field(
            Field::optional("durationMinutes")
                .integer()
                .min(1.0)
                .max(600.0),
        )
        .field(
            Field::optional("sessionsPerWeek")
                .integer()
                .min(1.0)
                .max(7.0),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn short_first_name_cites_the_field() {
        let err = create_user()
            .check(&json!({
                "firstName": "Jo",
                "lastName": "Doe",
                "email": "j@x.com",
                "password": "longenough",
                "role": "DOCTOR",
            }))
            .unwrap_err();

        assert!(err.violations.iter().any(|v| v.field == "firstName"));
    }

    #[test]
    fn valid_doctor_payload_passes() {
        let ok = create_user().check(&json!({
            "firstName": "John",
            "lastName": "Doe",
            "email": "j@x.com",
            "password": "longenough",
            "role": "DOCTOR",
        }));
        assert!(ok.is_ok());
    }

    #[test]
    fn role_outside_the_closed_set_is_rejected() {
        let err = create_user()
            .check(&json!({
                "firstName": "John",
                "lastName": "Doe",
                "email": "j@x.com",
                "password": "longenough",
                "role": "SURGEON",
            }))
            .unwrap_err();

        assert_eq!(err.violations[0].field, "role");
        assert_eq!(err.violations[0].constraint, "one_of");
    }

    #[test]
    fn prescription_requires_at_least_one_medication() {
        let err = create_prescription()
            .check(&json!({
                "patientId": "7f2c1a90-9a3e-4c0f-8a43-2a8a1f6a8f11",
                "doctorId": "f5b3b2a0-1c2d-4e3f-9a8b-7c6d5e4f3a21",
                "date": "2026-08-30",
                "medications": [],
            }))
            .unwrap_err();

        assert_eq!(err.violations[0].field, "medications");
        assert_eq!(err.violations[0].constraint, "min_items");
    }

    #[test]
    fn prescription_date_must_match_the_padded_form() {
        let err = create_prescription()
            .check(&json!({
                "patientId": "7f2c1a90-9a3e-4c0f-8a43-2a8a1f6a8f11",
                "doctorId": "f5b3b2a0-1c2d-4e3f-9a8b-7c6d5e4f3a21",
                "date": "2026-8-3",
                "medications": [{
                    "name": "Heparin",
                    "dosage": "5000 IU",
                    "frequency": "per session",
                    "duration": "ongoing",
                }],
            }))
            .unwrap_err();

        assert_eq!(err.violations[0].field, "date");
        assert_eq!(err.violations[0].constraint, "date");
    }

    #[test]
    fn nested_medication_violation_is_path_qualified() {
        let err = create_prescription()
            .check(&json!({
                "patientId": "7f2c1a90-9a3e-4c0f-8a43-2a8a1f6a8f11",
                "doctorId": "f5b3b2a0-1c2d-4e3f-9a8b-7c6d5e4f3a21",
                "date": "2026-08-30",
                "medications": [
                    { "name": "Heparin", "dosage": "5000 IU", "frequency": "per session", "duration": "ongoing" },
                    { "name": "Iron", "frequency": "weekly", "duration": "3 months" },
                ],
            }))
            .unwrap_err();

        assert_eq!(err.violations[0].field, "medications[1].dosage");
        assert_eq!(err.violations[0].constraint, "required");
    }

    #[test]
    fn dialysis_bounds_are_enforced() {
        let err = update_dialysis_session()
            .check(&json!({ "durationMinutes": 0, "preWeightKg": 612.5 }))
            .unwrap_err();

        let fields: Vec<_> = err.violations.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["durationMinutes", "preWeightKg"]);
    }
}
