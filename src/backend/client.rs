//! HTTP client for the hotel REST backend.
//!
//! All persistent state lives on the backend; this client wraps its JSON
//! endpoints with typed calls. Every method takes the caller's [`Session`],
//! and every response decodes through the models' lenient numeric path.

use reqwest::{header, Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use std::time::Duration;

use crate::error::{AppError, Result};
use crate::models::{
    CreatedInvoice, ExtraServiceLine, NewInvoice, NewReservation, NewServiceLine, Reservation,
    ReservationStatus, Resource, ResourceKind,
};

use super::session::Session;

/// Typed client for the hotel backend.
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> reqwest::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        let base_url: String = base_url.into();
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch one reservation by id.
    pub async fn reservation(&self, session: &Session, id: i64) -> Result<Reservation> {
        self.get(session, &format!("reservas/{}", id), "reservation")
            .await
    }

    /// Fetch every reservation visible to the caller. Input for the
    /// conflict scan.
    pub async fn reservations(&self, session: &Session) -> Result<Vec<Reservation>> {
        self.get(session, "reservas", "reservations").await
    }

    /// Fetch the extra-service lines attached to a reservation.
    pub async fn service_lines(
        &self,
        session: &Session,
        reservation_id: i64,
    ) -> Result<Vec<ExtraServiceLine>> {
        self.get(
            session,
            &format!("reservas/{}/servicios", reservation_id),
            "service lines",
        )
        .await
    }

    /// Fetch the resource record backing a reservation. The endpoint and
    /// the price field differ per kind.
    pub async fn resource(
        &self,
        session: &Session,
        kind: ResourceKind,
        id: i64,
    ) -> Result<Resource> {
        match kind {
            ResourceKind::Room => Ok(Resource::Room(
                self.get(session, &format!("habitaciones/{}", id), "room")
                    .await?,
            )),
            ResourceKind::Table => Ok(Resource::Table(
                self.get(session, &format!("mesas/{}", id), "table").await?,
            )),
            ResourceKind::Hall => Ok(Resource::Hall(
                self.get(session, &format!("salones/{}", id), "hall").await?,
            )),
        }
    }

    /// Create a reservation; returns the stored record.
    pub async fn create_reservation(
        &self,
        session: &Session,
        reservation: &NewReservation,
    ) -> Result<Reservation> {
        self.send(session, Method::POST, "reservas", reservation, "reservation")
            .await
    }

    /// Attach an extra-service line to a reservation.
    pub async fn attach_service_line(&self, session: &Session, line: &NewServiceLine) -> Result<()> {
        let _: serde_json::Value = self
            .send(
                session,
                Method::POST,
                &format!("reservas/{}/servicios", line.reservation_id),
                line,
                "reservation",
            )
            .await?;
        Ok(())
    }

    /// Create the invoice record.
    pub async fn create_invoice(
        &self,
        session: &Session,
        invoice: &NewInvoice,
    ) -> Result<CreatedInvoice> {
        self.send(session, Method::POST, "facturar", invoice, "reservation")
            .await
    }

    /// Write a reservation's status. Transitions are not guarded.
    pub async fn update_reservation_status(
        &self,
        session: &Session,
        reservation_id: i64,
        status: ReservationStatus,
    ) -> Result<()> {
        let _: serde_json::Value = self
            .send(
                session,
                Method::PUT,
                &format!("reservas/{}", reservation_id),
                &json!({ "estado": status }),
                "reservation",
            )
            .await?;
        Ok(())
    }

    async fn get<T: DeserializeOwned>(
        &self,
        session: &Session,
        path: &str,
        what: &'static str,
    ) -> Result<T> {
        let response = self
            .client
            .get(self.url(path))
            .header(header::AUTHORIZATION, session.authorization_value())
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;
        Self::decode(response, what).await
    }

    async fn send<B: Serialize, T: DeserializeOwned>(
        &self,
        session: &Session,
        method: Method,
        path: &str,
        body: &B,
        what: &'static str,
    ) -> Result<T> {
        let response = self
            .client
            .request(method, self.url(path))
            .header(header::AUTHORIZATION, session.authorization_value())
            .header(header::ACCEPT, "application/json")
            .json(body)
            .send()
            .await?;
        Self::decode(response, what).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn decode<T: DeserializeOwned>(
        response: reqwest::Response,
        what: &'static str,
    ) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(match status {
                StatusCode::UNAUTHORIZED => AppError::Unauthorized,
                StatusCode::NOT_FOUND => AppError::NotFound(what),
                _ => AppError::BackendStatus {
                    status: status.as_u16(),
                    message,
                },
            });
        }
        Ok(response.json().await?)
    }
}
