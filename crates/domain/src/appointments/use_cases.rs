use std::sync::Arc;

use derive_new::new;
use uuid::Uuid;

use super::inputs::{CreateAppointmentInput, UpdateAppointmentInput};
use super::model::Appointment;
use super::repository::AppointmentRepository;
use crate::errors::Error;

#[derive(new)]
pub struct CreateAppointment {
    appointments: Arc<dyn AppointmentRepository>,
}

impl CreateAppointment {
    pub async fn execute(&self, input: CreateAppointmentInput) -> Result<Appointment, Error> {
        self.appointments.create(input).await
    }
}

#[derive(new)]
pub struct GetAppointment {
    appointments: Arc<dyn AppointmentRepository>,
}

impl GetAppointment {
    pub async fn execute(&self, id: Uuid) -> Result<Appointment, Error> {
        self.appointments.get(id).await
    }
}

#[derive(new)]
pub struct GetPatientAppointments {
    appointments: Arc<dyn AppointmentRepository>,
}

impl GetPatientAppointments {
    pub async fn execute(&self, patient_id: Uuid) -> Result<Vec<Appointment>, Error> {
        self.appointments.get_by_patient(patient_id).await
    }
}

#[derive(new)]
pub struct UpdateAppointment {
    appointments: Arc<dyn AppointmentRepository>,
}

impl UpdateAppointment {
    pub async fn execute(
        &self,
        id: Uuid,
        input: UpdateAppointmentInput,
    ) -> Result<Appointment, Error> {
        self.appointments.update(id, input).await
    }
}

#[derive(new)]
pub struct CancelAppointment {
    appointments: Arc<dyn AppointmentRepository>,
}

impl CancelAppointment {
    pub async fn execute(&self, id: Uuid) -> Result<Appointment, Error> {
        self.appointments.cancel(id).await
    }
}
