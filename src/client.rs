use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use tracing::debug;
use wreq::Client;

use crate::error::{self, ApiError};
use crate::map;
use crate::model::{Flight, Trip};
use crate::query::{DateRange, OneWayQuery, ReturnTripQuery};
use crate::wire;

pub const DEFAULT_CURRENCY: &str = "EUR";

/// Client for the Ryanair cheapest-fares search API.
///
/// Holds the currency every returned price is quoted in and a reusable HTTP
/// client. The client is never mutated after construction, so one instance
/// can serve concurrent searches.
#[derive(Clone)]
pub struct RyanairApi {
    currency: String,
    http: Client,
}

impl Default for RyanairApi {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENCY)
    }
}

impl RyanairApi {
    pub fn new(currency: impl Into<String>) -> Self {
        Self::with_client(Client::new(), currency)
    }

    /// Uses a caller-configured transport. Timeout and proxy policy belong
    /// to the supplied client; this layer adds none of its own.
    pub fn with_client(http: Client, currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            http,
        }
    }

    /// Retrieves the cheapest one-way flights departing `departure_airport`
    /// within the given date range, optionally limited to a destination
    /// country (two-letter code, e.g. "BE").
    ///
    /// Only the provider's cheapest fares are returned; equally priced or
    /// slightly more expensive flights with better timing are not included.
    /// Result order follows the provider's response order.
    pub async fn get_one_way_flights(
        &self,
        departure_airport: &str,
        outbound_from: NaiveDate,
        outbound_to: NaiveDate,
        destination_country: Option<&str>,
    ) -> Result<Vec<Flight>, ApiError> {
        let query = OneWayQuery {
            departure_airport: departure_airport.to_string(),
            outbound: DateRange::new(outbound_from, outbound_to),
            destination_country: destination_country.map(str::to_string),
            currency: self.currency.clone(),
        };

        let data: wire::OneWayFaresData = self.get_json(&query.url()).await?;

        Ok(data
            .fares
            .into_iter()
            .map(|fare| map::map_flight(fare.outbound))
            .collect())
    }

    /// Retrieves the cheapest round trips departing `departure_airport`,
    /// with the outbound leg inside the first date range and the inbound leg
    /// inside the second. Result order follows the provider's response order.
    pub async fn get_return_trips(
        &self,
        departure_airport: &str,
        outbound_from: NaiveDate,
        outbound_to: NaiveDate,
        inbound_from: NaiveDate,
        inbound_to: NaiveDate,
    ) -> Result<Vec<Trip>, ApiError> {
        let query = ReturnTripQuery {
            departure_airport: departure_airport.to_string(),
            outbound: DateRange::new(outbound_from, outbound_to),
            inbound: DateRange::new(inbound_from, inbound_to),
            currency: self.currency.clone(),
        };

        let data: wire::RoundTripFaresData = self.get_json(&query.url()).await?;

        Ok(data.fares.into_iter().map(map::map_trip).collect())
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        debug!(%url, "requesting fares");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(error::from_transport_error)?;

        let status = response.status();
        debug!(status = status.as_u16(), "fares response");

        if !status.is_success() {
            // Best-effort body read for diagnostics; this consumes the stream.
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::bad_status(
                status.as_u16(),
                status.canonical_reason(),
                body,
            ));
        }

        let json = response.text().await.map_err(error::from_transport_error)?;
        decode(&json)
    }
}

/// Decodes a response body. A body of `null` (valid JSON, no value) and a
/// structural mismatch both surface as the parse failure, raw body attached.
fn decode<T: DeserializeOwned>(json: &str) -> Result<T, ApiError> {
    match serde_json::from_str::<Option<T>>(json) {
        Ok(Some(value)) => Ok(value),
        Ok(None) => Err(ApiError::unparsable(json)),
        Err(err) => Err(ApiError::unparsable_with(&err, json)),
    }
}
