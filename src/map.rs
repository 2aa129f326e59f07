//! Pure translation from the provider's wire shapes into the public domain
//! types. Total: a decoded wire value always maps.

use crate::model::{Airport, Flight, Trip};
use crate::wire;

pub(crate) fn map_airport(input: wire::FareAirport) -> Airport {
    Airport {
        iata_code: input.iata_code,
        name: input.name,
        country: input.country_name,
    }
}

/// Maps one leg. Timestamps are copied verbatim (still airport-local); the
/// wire's flight number and price-updated epoch are dropped.
pub(crate) fn map_flight(input: wire::FareLeg) -> Flight {
    Flight {
        departure_time: input.departure_date,
        arrival_time: input.arrival_date,
        price: input.price.value,
        departure_airport: map_airport(input.departure_airport),
        arrival_airport: map_airport(input.arrival_airport),
    }
}

pub(crate) fn map_trip(input: wire::RoundTripFare) -> Trip {
    Trip {
        outbound: map_flight(input.outbound),
        inbound: map_flight(input.inbound),
    }
}
