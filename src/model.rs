use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;

/// An airport as reported by the fares API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Airport {
    /// Three-letter IATA code, e.g. "BRU".
    pub iata_code: String,
    pub name: String,
    /// Full name of the country the airport is located in.
    pub country: String,
}

/// A single priced flight leg.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flight {
    /// Departure time, local to the departure airport's timezone.
    pub departure_time: NaiveDateTime,
    /// Arrival time, local to the arrival airport's timezone.
    pub arrival_time: NaiveDateTime,
    /// Price in the currency the client was configured with.
    pub price: Decimal,
    pub departure_airport: Airport,
    pub arrival_airport: Airport,
}

/// A round trip: an outbound flight and the matching inbound flight from the
/// same search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trip {
    pub outbound: Flight,
    pub inbound: Flight,
}

impl Trip {
    /// Total price of the round trip.
    pub fn total_price(&self) -> Decimal {
        self.outbound.price + self.inbound.price
    }
}
