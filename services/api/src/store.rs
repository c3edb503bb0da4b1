//! In-memory repository adapter.
//!
//! The hosted data store sits behind the repository traits in production;
//! this adapter implements the same traits over process-local maps so the
//! service is runnable and testable without external infrastructure.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use domain::appointments::inputs::{CreateAppointmentInput, UpdateAppointmentInput};
use domain::appointments::{Appointment, AppointmentRepository, AppointmentStatus};
use domain::dialysis::inputs::{UpdateDialysisProtocolInput, UpdateDialysisSessionInput};
use domain::dialysis::{DialysisRepository, DialysisSession};
use domain::machines::inputs::{CreateMachineInput, UpdateMachineInput};
use domain::machines::{Machine, MachineRepository};
use domain::medical_files::{MedicalFile, MedicalFileRepository};
use domain::prescriptions::inputs::{CreatePrescriptionInput, UpdatePrescriptionInput};
use domain::prescriptions::{Prescription, PrescriptionRepository};
use domain::users::inputs::{CreateUserInput, UpdateUserInput};
use domain::users::{Role, User, UserRepository};
use domain::Error;

#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<Uuid, User>>,
    prescriptions: RwLock<HashMap<Uuid, Prescription>>,
    // Keyed by patient id; one file per patient.
    medical_files: RwLock<HashMap<Uuid, MedicalFile>>,
    sessions: RwLock<HashMap<Uuid, DialysisSession>>,
    machines: RwLock<HashMap<Uuid, Machine>>,
    appointments: RwLock<HashMap<Uuid, Appointment>>,
}

impl MemoryStore {
    /// Registers a dialysis session directly. Session intake arrives from
    /// the clinical device integration, not this API, so the adapter
    /// exposes it for bootstrap and tests only.
    pub async fn insert_session(&self, session: DialysisSession) {
        self.sessions.write().await.insert(session.id, session);
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn create(&self, input: CreateUserInput) -> Result<User, Error> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.email == input.email && !u.deleted) {
            return Err(Error::Uniqueness {
                field: "email".to_string(),
            });
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            role: input.role,
            phone: input.phone,
            deleted: false,
            created_at: now,
            updated_at: now,
        };
        users.insert(user.id, user.clone());
        drop(users);

        // Patients get an empty medical file at registration.
        if user.role == Role::Patient {
            self.medical_files
                .write()
                .await
                .insert(user.id, MedicalFile::new(user.id));
        }

        Ok(user)
    }

    async fn get(&self, id: Uuid) -> Result<User, Error> {
        self.users
            .read()
            .await
            .get(&id)
            .filter(|u| !u.deleted)
            .cloned()
            .ok_or_else(|| Error::not_found("User"))
    }

    async fn get_all(&self) -> Result<Vec<User>, Error> {
        let mut users: Vec<User> = self
            .users
            .read()
            .await
            .values()
            .filter(|u| !u.deleted)
            .cloned()
            .collect();
        users.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(users)
    }

    async fn update(&self, id: Uuid, input: UpdateUserInput) -> Result<User, Error> {
        let mut users = self.users.write().await;
        let user = users
            .get_mut(&id)
            .filter(|u| !u.deleted)
            .ok_or_else(|| Error::not_found("User"))?;

        if let Some(first_name) = input.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = input.last_name {
            user.last_name = last_name;
        }
        if let Some(email) = input.email {
            user.email = email;
        }
        if let Some(role) = input.role {
            user.role = role;
        }
        if let Some(phone) = input.phone {
            user.phone = Some(phone);
        }
        user.updated_at = Utc::now();

        Ok(user.clone())
    }

    async fn soft_delete(&self, id: Uuid) -> Result<(), Error> {
        let mut users = self.users.write().await;
        let user = users
            .get_mut(&id)
            .filter(|u| !u.deleted)
            .ok_or_else(|| Error::not_found("User"))?;
        user.deleted = true;
        user.updated_at = Utc::now();
        Ok(())
    }
}

#[async_trait]
impl PrescriptionRepository for MemoryStore {
    async fn create(&self, input: CreatePrescriptionInput) -> Result<Prescription, Error> {
        let now = Utc::now();
        let prescription = Prescription {
            id: Uuid::new_v4(),
            patient_id: input.patient_id,
            doctor_id: input.doctor_id,
            date: input.date,
            medications: input.medications,
            created_at: now,
            updated_at: now,
        };
        self.prescriptions
            .write()
            .await
            .insert(prescription.id, prescription.clone());
        Ok(prescription)
    }

    async fn get(&self, id: Uuid) -> Result<Prescription, Error> {
        self.prescriptions
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| Error::not_found("Prescription"))
    }

    async fn get_by_patient(&self, patient_id: Uuid) -> Result<Vec<Prescription>, Error> {
        let mut prescriptions: Vec<Prescription> = self
            .prescriptions
            .read()
            .await
            .values()
            .filter(|p| p.patient_id == patient_id)
            .cloned()
            .collect();
        prescriptions.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(prescriptions)
    }

    async fn update(
        &self,
        id: Uuid,
        input: UpdatePrescriptionInput,
    ) -> Result<Prescription, Error> {
        let mut prescriptions = self.prescriptions.write().await;
        let prescription = prescriptions
            .get_mut(&id)
            .ok_or_else(|| Error::not_found("Prescription"))?;

        if let Some(date) = input.date {
            prescription.date = date;
        }
        if let Some(medications) = input.medications {
            prescription.medications = medications;
        }
        prescription.updated_at = Utc::now();

        Ok(prescription.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), Error> {
        self.prescriptions
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| Error::not_found("Prescription"))
    }
}

#[async_trait]
impl MedicalFileRepository for MemoryStore {
    async fn get_by_patient_id(&self, patient_id: Uuid) -> Result<Option<MedicalFile>, Error> {
        Ok(self.medical_files.read().await.get(&patient_id).cloned())
    }

    async fn update(&self, file: MedicalFile) -> Result<MedicalFile, Error> {
        self.medical_files
            .write()
            .await
            .insert(file.patient_id, file.clone());
        Ok(file)
    }
}

#[async_trait]
impl DialysisRepository for MemoryStore {
    async fn get_all_patients(&self) -> Result<Vec<User>, Error> {
        let mut patients: Vec<User> = self
            .users
            .read()
            .await
            .values()
            .filter(|u| u.role == Role::Patient && !u.deleted)
            .cloned()
            .collect();
        patients.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(patients)
    }

    async fn get_session_by_id(&self, id: Uuid) -> Result<DialysisSession, Error> {
        self.sessions
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| Error::not_found("DialysisSession"))
    }

    async fn get_sessions_by_patient_id(
        &self,
        patient_id: Uuid,
    ) -> Result<Vec<DialysisSession>, Error> {
        let mut sessions: Vec<DialysisSession> = self
            .sessions
            .read()
            .await
            .values()
            .filter(|s| s.patient_id == patient_id)
            .cloned()
            .collect();
        sessions.sort_by(|a, b| a.date.cmp(&b.date));
        Ok(sessions)
    }

    async fn update_session(
        &self,
        id: Uuid,
        input: UpdateDialysisSessionInput,
    ) -> Result<DialysisSession, Error> {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(&id)
            .ok_or_else(|| Error::not_found("DialysisSession"))?;

        if let Some(date) = input.date {
            session.date = date;
        }
        if let Some(duration) = input.duration_minutes {
            session.duration_minutes = duration;
        }
        if let Some(pre) = input.pre_weight_kg {
            session.pre_weight_kg = Some(pre);
        }
        if let Some(post) = input.post_weight_kg {
            session.post_weight_kg = Some(post);
        }
        if let Some(notes) = input.notes {
            session.notes = Some(notes);
        }
        session.updated_at = Utc::now();

        Ok(session.clone())
    }

    async fn update_protocol(
        &self,
        session_id: Uuid,
        input: UpdateDialysisProtocolInput,
    ) -> Result<DialysisSession, Error> {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(&session_id)
            .ok_or_else(|| Error::not_found("DialysisSession"))?;

        if let Some(dialyzer) = input.dialyzer {
            session.protocol.dialyzer = Some(dialyzer);
        }
        if let Some(flow) = input.blood_flow_ml_min {
            session.protocol.blood_flow_ml_min = Some(flow);
        }
        if let Some(duration) = input.duration_minutes {
            session.protocol.duration_minutes = Some(duration);
        }
        if let Some(per_week) = input.sessions_per_week {
            session.protocol.sessions_per_week = Some(per_week);
        }
        session.updated_at = Utc::now();

        Ok(session.clone())
    }

    async fn delete_session(&self, id: Uuid) -> Result<(), Error> {
        self.sessions
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| Error::not_found("DialysisSession"))
    }
}

#[async_trait]
impl MachineRepository for MemoryStore {
    async fn create(&self, input: CreateMachineInput) -> Result<Machine, Error> {
        let mut machines = self.machines.write().await;

        if machines
            .values()
            .any(|m| m.serial_number == input.serial_number)
        {
            return Err(Error::Uniqueness {
                field: "serialNumber".to_string(),
            });
        }

        let now = Utc::now();
        let machine = Machine {
            id: Uuid::new_v4(),
            name: input.name,
            serial_number: input.serial_number,
            status: input.status,
            location: input.location,
            created_at: now,
            updated_at: now,
        };
        machines.insert(machine.id, machine.clone());
        Ok(machine)
    }

    async fn get(&self, id: Uuid) -> Result<Machine, Error> {
        self.machines
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| Error::not_found("Machine"))
    }

    async fn get_all(&self) -> Result<Vec<Machine>, Error> {
        let mut machines: Vec<Machine> =
            self.machines.read().await.values().cloned().collect();
        machines.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(machines)
    }

    async fn update(&self, id: Uuid, input: UpdateMachineInput) -> Result<Machine, Error> {
        let mut machines = self.machines.write().await;
        let machine = machines
            .get_mut(&id)
            .ok_or_else(|| Error::not_found("Machine"))?;

        if let Some(name) = input.name {
            machine.name = name;
        }
        if let Some(status) = input.status {
            machine.status = status;
        }
        if let Some(location) = input.location {
            machine.location = Some(location);
        }
        machine.updated_at = Utc::now();

        Ok(machine.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), Error> {
        self.machines
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| Error::not_found("Machine"))
    }
}

#[async_trait]
impl AppointmentRepository for MemoryStore {
    async fn create(&self, input: CreateAppointmentInput) -> Result<Appointment, Error> {
        let now = Utc::now();
        let appointment = Appointment {
            id: Uuid::new_v4(),
            patient_id: input.patient_id,
            doctor_id: input.doctor_id,
            scheduled_at: input.scheduled_at,
            reason: input.reason,
            status: AppointmentStatus::Scheduled,
            created_at: now,
            updated_at: now,
        };
        self.appointments
            .write()
            .await
            .insert(appointment.id, appointment.clone());
        Ok(appointment)
    }

    async fn get(&self, id: Uuid) -> Result<Appointment, Error> {
        self.appointments
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| Error::not_found("Appointment"))
    }

    async fn get_by_patient(&self, patient_id: Uuid) -> Result<Vec<Appointment>, Error> {
        let mut appointments: Vec<Appointment> = self
            .appointments
            .read()
            .await
            .values()
            .filter(|a| a.patient_id == patient_id)
            .cloned()
            .collect();
        appointments.sort_by(|a, b| a.scheduled_at.cmp(&b.scheduled_at));
        Ok(appointments)
    }

    async fn update(
        &self,
        id: Uuid,
        input: UpdateAppointmentInput,
    ) -> Result<Appointment, Error> {
        let mut appointments = self.appointments.write().await;
        let appointment = appointments
            .get_mut(&id)
            .ok_or_else(|| Error::not_found("Appointment"))?;

        if let Some(scheduled_at) = input.scheduled_at {
            appointment.scheduled_at = scheduled_at;
        }
        if let Some(reason) = input.reason {
            appointment.reason = Some(reason);
        }
        appointment.updated_at = Utc::now();

        Ok(appointment.clone())
    }

    async fn cancel(&self, id: Uuid) -> Result<Appointment, Error> {
        let mut appointments = self.appointments.write().await;
        let appointment = appointments
            .get_mut(&id)
            .ok_or_else(|| Error::not_found("Appointment"))?;
        appointment.status = AppointmentStatus::Cancelled;
        appointment.updated_at = Utc::now();
        Ok(appointment.clone())
    }
}
