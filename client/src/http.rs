//! HTTP client for the reservation API

use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::models::{Reservation, ReservationData, SeatData, StatusData, Table, TableData};
use shared::{DataResponse, ErrorResponse, RequestData};

use crate::{ClientConfig, ClientError, ClientResult};

/// Typed client for the reservation server
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    // ── Reservations ────────────────────────────────────────────────

    /// List reservations, filtered by date or phone number
    pub async fn list_reservations(
        &self,
        date: Option<&str>,
        mobile_number: Option<&str>,
    ) -> ClientResult<Vec<Reservation>> {
        let mut request = self.client.get(self.url("/reservations"));
        if let Some(date) = date {
            request = request.query(&[("date", date)]);
        }
        if let Some(mobile) = mobile_number {
            request = request.query(&[("mobile_number", mobile)]);
        }
        let response = request.send().await?;
        Self::unwrap_data(response).await
    }

    pub async fn read_reservation(&self, id: i64) -> ClientResult<Reservation> {
        let response = self
            .client
            .get(self.url(&format!("/reservations/{id}")))
            .send()
            .await?;
        Self::unwrap_data(response).await
    }

    pub async fn create_reservation(&self, data: &ReservationData) -> ClientResult<Reservation> {
        self.send_data(Method::POST, "/reservations", data).await
    }

    pub async fn update_reservation(
        &self,
        id: i64,
        data: &ReservationData,
    ) -> ClientResult<Reservation> {
        self.send_data(Method::PUT, &format!("/reservations/{id}"), data)
            .await
    }

    /// Change only the status field
    pub async fn change_status(&self, id: i64, status: &str) -> ClientResult<Reservation> {
        let body = StatusData {
            status: Some(status.to_string()),
        };
        self.send_data(Method::PUT, &format!("/reservations/{id}/status"), &body)
            .await
    }

    pub async fn delete_reservation(&self, id: i64) -> ClientResult<()> {
        let response = self
            .client
            .delete(self.url(&format!("/reservations/{id}")))
            .send()
            .await?;
        Self::expect_success(response).await?;
        Ok(())
    }

    // ── Tables ──────────────────────────────────────────────────────

    pub async fn list_tables(&self) -> ClientResult<Vec<Table>> {
        let response = self.client.get(self.url("/tables")).send().await?;
        Self::unwrap_data(response).await
    }

    pub async fn create_table(&self, data: &TableData) -> ClientResult<Table> {
        self.send_data(Method::POST, "/tables", data).await
    }

    /// Seat a reservation at a table
    pub async fn seat_table(&self, table_id: i64, reservation_id: i64) -> ClientResult<Table> {
        let body = SeatData {
            reservation_id: Some(reservation_id),
        };
        self.send_data(Method::PUT, &format!("/tables/{table_id}/seat"), &body)
            .await
    }

    /// Finish the seated reservation and free the table
    pub async fn finish_table(&self, table_id: i64) -> ClientResult<Table> {
        let response = self
            .client
            .delete(self.url(&format!("/tables/{table_id}/seat")))
            .send()
            .await?;
        Self::unwrap_data(response).await
    }

    // ── Internals ───────────────────────────────────────────────────

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a `{data: ...}`-wrapped body and unwrap the response
    async fn send_data<T: DeserializeOwned, B: Serialize + Clone>(
        &self,
        method: Method,
        path: &str,
        data: &B,
    ) -> ClientResult<T> {
        let response = self
            .client
            .request(method, self.url(path))
            .json(&RequestData::new(data.clone()))
            .send()
            .await?;
        Self::unwrap_data(response).await
    }

    async fn unwrap_data<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let response = Self::expect_success(response).await?;
        let bytes = response.bytes().await?;
        let envelope: DataResponse<T> = serde_json::from_slice(&bytes)?;
        Ok(envelope.data)
    }

    /// Map non-2xx responses to `ClientError` via the error envelope
    async fn expect_success(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = match response.json::<ErrorResponse>().await {
            Ok(envelope) => envelope.message,
            Err(_) => status.to_string(),
        };
        Err(match status {
            StatusCode::NOT_FOUND => ClientError::NotFound(message),
            StatusCode::BAD_REQUEST => ClientError::Validation(message),
            _ => ClientError::Server(message),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = HttpClient::new(&ClientConfig::new("http://localhost:5001/")).unwrap();
        assert_eq!(client.url("/tables"), "http://localhost:5001/tables");
    }

    #[test]
    fn malformed_envelope_surfaces_as_serialization_error() {
        let err: ClientError = serde_json::from_slice::<DataResponse<Table>>(b"not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, ClientError::Serialization(_)));
    }
}
