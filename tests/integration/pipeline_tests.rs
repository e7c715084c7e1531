use crate::common::{
    config_for, geocode_mock, mount_geocode, GEOCODE_PATH, HOME, LISTING_PATH, TWO_RESULTS,
};
use find_dentist::{find_dentists, haversine_km, write_report, Coordinate, DentistError};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CABILDO: &str = "Av. Cabildo 2040 Piso 3 Dto. B, Belgrano";
const RIVADAVIA: &str = "Av. Rivadavia 5120, Caballito";

const HOME_AT: Coordinate = Coordinate {
    lat: -34.6110,
    lng: -58.4390,
};
const CABILDO_AT: Coordinate = Coordinate {
    lat: -34.5600,
    lng: -58.4560,
};
const RIVADAVIA_AT: Coordinate = Coordinate {
    lat: -34.6190,
    lng: -58.4410,
};

async fn mount_listing(server: &MockServer, body: &str) {
    Mock::given(method("GET"))
        .and(path(LISTING_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html; charset=utf-8"),
        )
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_full_run_reports_nearest_first() {
    let mock_server = MockServer::start().await;

    mount_listing(&mock_server, TWO_RESULTS).await;
    mount_geocode(&mock_server, HOME, HOME_AT.lat, HOME_AT.lng).await;
    mount_geocode(&mock_server, CABILDO, CABILDO_AT.lat, CABILDO_AT.lng).await;
    mount_geocode(&mock_server, RIVADAVIA, RIVADAVIA_AT.lat, RIVADAVIA_AT.lng).await;

    let config = config_for(&mock_server);
    let ranked = find_dentists(&config).await.expect("Search failed");

    let mut out = Vec::new();
    write_report(&mut out, &ranked).expect("Failed to write report");

    // Caballito is listed second on the page but is nearer to home
    let expected = format!(
        "name: BENITEZ, Jorge\n\
         phone number: 4902-7788 / 4902-7789\n\
         address: {}\n\
         distance: {}\n\
         ===================================\n\
         \n\
         name: ALVAREZ, María Laura\n\
         phone number: 4781-2233\n\
         address: {}\n\
         distance: {}\n\
         ===================================\n\
         \n",
        RIVADAVIA,
        haversine_km(RIVADAVIA_AT, HOME_AT),
        CABILDO,
        haversine_km(CABILDO_AT, HOME_AT),
    );

    assert_eq!(String::from_utf8(out).unwrap(), expected);
}

#[tokio::test]
async fn test_one_failed_geocode_fails_whole_run() {
    let mock_server = MockServer::start().await;

    mount_listing(&mock_server, TWO_RESULTS).await;

    // Siblings of the failing request may be cancelled before they are sent
    geocode_mock(HOME, HOME_AT.lat, HOME_AT.lng)
        .mount(&mock_server)
        .await;
    geocode_mock(CABILDO, CABILDO_AT.lat, CABILDO_AT.lng)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(GEOCODE_PATH))
        .and(query_param("address", RIVADAVIA))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = config_for(&mock_server);
    let result = find_dentists(&config).await;

    match result {
        Err(DentistError::GeocodeRequest { address, .. }) => assert_eq!(address, RIVADAVIA),
        other => panic!("expected GeocodeRequest error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_blocked_page_fails_before_geocoding() {
    let mock_server = MockServer::start().await;

    mount_listing(
        &mock_server,
        include_str!("../fixtures/listing_no_results.html"),
    )
    .await;

    Mock::given(path(GEOCODE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = config_for(&mock_server);
    let result = find_dentists(&config).await;

    assert!(matches!(result, Err(DentistError::NoProviders)));
}
