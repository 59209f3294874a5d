pub mod booking;
pub mod doctor;
pub mod patient;
pub mod role;

pub use booking::Booking;
pub use doctor::{Doctor, DoctorAuth};
pub use patient::{Patient, PatientAuth};
pub use role::Role;
