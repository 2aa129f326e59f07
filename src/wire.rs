//! Structures mirroring the provider's JSON response shapes. Decoding only;
//! nothing here is exposed to callers.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct OneWayFaresData {
    pub fares: Vec<OneWayFare>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OneWayFare {
    pub outbound: FareLeg,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RoundTripFaresData {
    pub fares: Vec<RoundTripFare>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RoundTripFare {
    pub outbound: FareLeg,
    pub inbound: FareLeg,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FareLeg {
    pub departure_airport: FareAirport,
    pub arrival_airport: FareAirport,
    /// Local time at the departure airport, no offset on the wire.
    pub departure_date: NaiveDateTime,
    /// Local time at the arrival airport, no offset on the wire.
    pub arrival_date: NaiveDateTime,
    pub price: FarePrice,
    // Present on the wire, not carried into domain types.
    #[allow(dead_code)]
    pub flight_number: Option<String>,
    #[allow(dead_code)]
    pub price_updated: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FareAirport {
    pub iata_code: String,
    pub name: String,
    pub country_name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FarePrice {
    pub value: Decimal,
}
