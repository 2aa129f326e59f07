use chrono::NaiveDate;

const SCHEME: &str = "https";
const HOST: &str = "services-api.ryanair.com";
const DATE_FORMAT: &str = "%Y-%m-%d";

pub const ONE_WAY_FARES_PATH: &str = "/farfnd/v4/oneWayFares";
pub const ROUND_TRIP_FARES_PATH: &str = "/farfnd/v4/roundTripFares";

/// An inclusive departure-date window. `from` may equal `to`; an inverted
/// range is forwarded to the API unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }
}

/// Parameters for a one-way cheapest-fares search.
#[derive(Debug, Clone)]
pub struct OneWayQuery {
    pub departure_airport: String,
    pub outbound: DateRange,
    /// Destination country filter, e.g. "BE". Sent only when non-blank.
    pub destination_country: Option<String>,
    pub currency: String,
}

impl OneWayQuery {
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("departureAirportIataCode".into(), self.departure_airport.clone()),
            ("outboundDepartureDateFrom".into(), format_date(self.outbound.from)),
            ("outboundDepartureDateTo".into(), format_date(self.outbound.to)),
            ("currency".into(), self.currency.clone()),
        ];

        if let Some(country) = &self.destination_country {
            if !country.trim().is_empty() {
                pairs.push(("arrivalCountryCode".into(), country.clone()));
            }
        }

        pairs
    }

    pub fn url(&self) -> String {
        build_url(ONE_WAY_FARES_PATH, &self.query_pairs())
    }
}

/// Parameters for a round-trip cheapest-fares search. The round-trip
/// endpoint takes no country filter.
#[derive(Debug, Clone)]
pub struct ReturnTripQuery {
    pub departure_airport: String,
    pub outbound: DateRange,
    pub inbound: DateRange,
    pub currency: String,
}

impl ReturnTripQuery {
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        vec![
            ("departureAirportIataCode".into(), self.departure_airport.clone()),
            ("outboundDepartureDateFrom".into(), format_date(self.outbound.from)),
            ("outboundDepartureDateTo".into(), format_date(self.outbound.to)),
            ("inboundDepartureDateFrom".into(), format_date(self.inbound.from)),
            ("inboundDepartureDateTo".into(), format_date(self.inbound.to)),
            ("currency".into(), self.currency.clone()),
        ]
    }

    pub fn url(&self) -> String {
        build_url(ROUND_TRIP_FARES_PATH, &self.query_pairs())
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Builds the absolute request URL for an endpoint path, percent-encoding
/// every key and value individually before joining with `&`.
pub fn build_url(path: &str, pairs: &[(String, String)]) -> String {
    let query: Vec<String> = pairs
        .iter()
        .map(|(key, value)| {
            format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
        })
        .collect();

    format!("{SCHEME}://{HOST}{path}?{}", query.join("&"))
}
