//! Port of the web client's non-UI logic: a typed wrapper over the gateway
//! API, a file-backed session store standing in for browser localStorage,
//! and the signup/login flows the forms drove.

pub mod session;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::models::{Booking, Doctor, Patient, Role};
use crate::routes::check_email::{CheckEmailRequest, CheckEmailResponse};
use crate::routes::doctors::DoctorSignupRequest;
use crate::routes::users::PatientSignupRequest;
use crate::routes::LoginRequest;

pub use session::{Profile, Session, SessionError, SessionStore};

/// Client-side API failure
///
/// The client never branches on the kind of failure; both variants are
/// display-only, exactly like the web forms' inline error banner.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The gateway answered non-2xx; carries its error message verbatim
    #[error("{0}")]
    Api(String),

    /// The request never produced a gateway answer
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Thin typed wrapper over the gateway endpoints, one method per route
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// `base_url` is the server root, e.g. `http://localhost:5000`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            #[derive(serde::Deserialize)]
            struct ErrorBody {
                error: String,
            }
            let message = response
                .json::<ErrorBody>()
                .await
                .map(|b| b.error)
                .unwrap_or_else(|_| "An unexpected error occurred".to_string());
            Err(ApiError::Api(message))
        }
    }

    pub async fn patient_signup(&self, req: &PatientSignupRequest) -> Result<Patient, ApiError> {
        self.post("/api/users/signup", req).await
    }

    pub async fn patient_login(&self, email: &str, password: &str) -> Result<Patient, ApiError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.post("/api/users/login", &body).await
    }

    pub async fn doctor_signup(&self, req: &DoctorSignupRequest) -> Result<Doctor, ApiError> {
        self.post("/api/doctors/signup", req).await
    }

    pub async fn doctor_login(&self, email: &str, password: &str) -> Result<Doctor, ApiError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.post("/api/doctors/login", &body).await
    }

    pub async fn get_patient(&self, id: i64) -> Result<Patient, ApiError> {
        self.get(&format!("/api/users/{id}")).await
    }

    pub async fn get_doctor(&self, id: i64) -> Result<Doctor, ApiError> {
        self.get(&format!("/api/doctors/{id}")).await
    }

    pub async fn list_doctors(&self) -> Result<Vec<Doctor>, ApiError> {
        self.get("/api/doctors").await
    }

    pub async fn check_email(&self, email: &str) -> Result<CheckEmailResponse, ApiError> {
        let body = CheckEmailRequest {
            email: email.to_string(),
        };
        self.post("/api/check-email", &body).await
    }

    /// Bookings for the practitioner dashboard table
    pub async fn doctor_bookings(&self, doctor_id: i64) -> Result<Vec<Booking>, ApiError> {
        self.get(&format!("/api/bookings/doctor/{doctor_id}")).await
    }
}

/// Sign a patient up the way the web form did: probe for the email first,
/// insert, then persist the identity keys.
///
/// The probe and the insert are two separate requests, so a concurrent
/// signup with the same email can slip between them and both succeed.
pub async fn signup_patient(
    api: &ApiClient,
    session: &mut Session,
    req: &PatientSignupRequest,
) -> Result<Patient, ApiError> {
    let probe = api.check_email(&req.email).await?;
    if probe.exists {
        let role = probe.role.unwrap_or(Role::Patient);
        return Err(ApiError::Api(format!(
            "A {role} account with this email already exists"
        )));
    }

    let patient = api.patient_signup(req).await?;
    remember_best_effort(session, &Profile::Patient(patient.clone()));
    Ok(patient)
}

/// Practitioner counterpart of [`signup_patient`]
pub async fn signup_doctor(
    api: &ApiClient,
    session: &mut Session,
    req: &DoctorSignupRequest,
) -> Result<Doctor, ApiError> {
    let probe = api.check_email(&req.email).await?;
    if probe.exists {
        let role = probe.role.unwrap_or(Role::Doctor);
        return Err(ApiError::Api(format!(
            "A {role} account with this email already exists"
        )));
    }

    let doctor = api.doctor_signup(req).await?;
    remember_best_effort(session, &Profile::Doctor(doctor.clone()));
    Ok(doctor)
}

/// Log in and persist the identity keys for the chosen role
pub async fn login(
    api: &ApiClient,
    session: &mut Session,
    role: Role,
    email: &str,
    password: &str,
) -> Result<Profile, ApiError> {
    let profile = match role {
        Role::Patient => Profile::Patient(api.patient_login(email, password).await?),
        Role::Doctor => Profile::Doctor(api.doctor_login(email, password).await?),
    };

    remember_best_effort(session, &profile);
    Ok(profile)
}

// localStorage writes could not fail in the browser; a file write can, but
// a signed-in user with an unsaved session is still signed in.
fn remember_best_effort(session: &mut Session, profile: &Profile) {
    if let Err(e) = session.remember(profile) {
        tracing::warn!("Failed to persist session state: {}", e);
    }
}
