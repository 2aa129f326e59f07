use chrono::NaiveDate;
use ryanair_fares::query::{
    build_url, DateRange, OneWayQuery, ReturnTripQuery, ONE_WAY_FARES_PATH,
    ROUND_TRIP_FARES_PATH,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn make_one_way() -> OneWayQuery {
    OneWayQuery {
        departure_airport: "BRU".into(),
        outbound: DateRange::new(date(2026, 3, 1), date(2026, 3, 7)),
        destination_country: None,
        currency: "EUR".into(),
    }
}

fn make_return_trip() -> ReturnTripQuery {
    ReturnTripQuery {
        departure_airport: "BRU".into(),
        outbound: DateRange::new(date(2026, 3, 1), date(2026, 3, 7)),
        inbound: DateRange::new(date(2026, 3, 10), date(2026, 3, 14)),
        currency: "EUR".into(),
    }
}

fn value_of<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

#[test]
fn one_way_pairs_have_exactly_the_expected_keys() {
    let pairs = make_one_way().query_pairs();
    assert_eq!(pairs.len(), 4);
    assert_eq!(value_of(&pairs, "departureAirportIataCode"), Some("BRU"));
    assert_eq!(value_of(&pairs, "outboundDepartureDateFrom"), Some("2026-03-01"));
    assert_eq!(value_of(&pairs, "outboundDepartureDateTo"), Some("2026-03-07"));
    assert_eq!(value_of(&pairs, "currency"), Some("EUR"));
}

#[test]
fn return_trip_pairs_have_exactly_the_expected_keys() {
    let pairs = make_return_trip().query_pairs();
    assert_eq!(pairs.len(), 6);
    assert_eq!(value_of(&pairs, "inboundDepartureDateFrom"), Some("2026-03-10"));
    assert_eq!(value_of(&pairs, "inboundDepartureDateTo"), Some("2026-03-14"));
    assert_eq!(value_of(&pairs, "arrivalCountryCode"), None);
}

#[test]
fn dates_are_zero_padded_iso() {
    let mut query = make_one_way();
    query.outbound = DateRange::new(date(2026, 1, 5), date(2026, 1, 5));
    let pairs = query.query_pairs();
    assert_eq!(value_of(&pairs, "outboundDepartureDateFrom"), Some("2026-01-05"));
    assert_eq!(value_of(&pairs, "outboundDepartureDateTo"), Some("2026-01-05"));
}

#[test]
fn country_filter_included_when_given() {
    let mut query = make_one_way();
    query.destination_country = Some("BE".into());
    let pairs = query.query_pairs();
    assert_eq!(pairs.len(), 5);
    assert_eq!(value_of(&pairs, "arrivalCountryCode"), Some("BE"));
}

#[test]
fn country_filter_key_absent_when_none() {
    let pairs = make_one_way().query_pairs();
    assert_eq!(value_of(&pairs, "arrivalCountryCode"), None);
    assert!(!make_one_way().url().contains("arrivalCountryCode"));
}

#[test]
fn country_filter_key_absent_when_blank() {
    let mut query = make_one_way();
    query.destination_country = Some("   ".into());
    assert_eq!(value_of(&query.query_pairs(), "arrivalCountryCode"), None);

    query.destination_country = Some(String::new());
    assert_eq!(value_of(&query.query_pairs(), "arrivalCountryCode"), None);
}

#[test]
fn inverted_date_range_passes_through_unchanged() {
    let mut query = make_one_way();
    query.outbound = DateRange::new(date(2026, 3, 7), date(2026, 3, 1));
    let pairs = query.query_pairs();
    assert_eq!(value_of(&pairs, "outboundDepartureDateFrom"), Some("2026-03-07"));
    assert_eq!(value_of(&pairs, "outboundDepartureDateTo"), Some("2026-03-01"));
}

#[test]
fn one_way_url_targets_the_fixed_endpoint() {
    let url = make_one_way().url();
    assert!(url.starts_with("https://services-api.ryanair.com/farfnd/v4/oneWayFares?"));
    assert!(url.contains("departureAirportIataCode=BRU"));
}

#[test]
fn return_trip_url_targets_the_fixed_endpoint() {
    let url = make_return_trip().url();
    assert!(url.starts_with("https://services-api.ryanair.com/farfnd/v4/roundTripFares?"));
    assert!(url.contains("inboundDepartureDateTo=2026-03-14"));
}

#[test]
fn values_are_percent_encoded_per_component() {
    let pairs = vec![("q".to_string(), "a b&c=d".to_string())];
    let url = build_url(ONE_WAY_FARES_PATH, &pairs);
    assert!(url.ends_with("?q=a%20b%26c%3Dd"));
}

#[test]
fn encoded_query_decodes_back_to_the_original_values() {
    let mut query = make_one_way();
    query.departure_airport = "B R/U".into();
    query.destination_country = Some("B&E".into());

    let url = query.url();
    let raw_query = url.split_once('?').unwrap().1;

    let decoded: Vec<(String, String)> = raw_query
        .split('&')
        .map(|piece| {
            let (key, value) = piece.split_once('=').unwrap();
            (
                urlencoding::decode(key).unwrap().into_owned(),
                urlencoding::decode(value).unwrap().into_owned(),
            )
        })
        .collect();

    assert_eq!(decoded, query.query_pairs());
}

#[test]
fn malformed_airport_code_passes_through_to_encoding() {
    let mut query = make_one_way();
    query.departure_airport = "not an airport".into();
    let url = query.url();
    assert!(url.contains("departureAirportIataCode=not%20an%20airport"));
}

#[test]
fn round_trip_path_differs_from_one_way_path() {
    assert_ne!(ONE_WAY_FARES_PATH, ROUND_TRIP_FARES_PATH);
    assert!(build_url(ROUND_TRIP_FARES_PATH, &[]).ends_with("/farfnd/v4/roundTripFares?"));
}
