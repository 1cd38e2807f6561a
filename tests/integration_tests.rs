use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};
use travelwise_rs::{
    Endpoint, FlightSearchTool, GatewayError, HotelSearchTool, ParamMap, ToolRouter,
    TransferSearchTool, TravelGateway,
};

/// Gateway stub that replays scripted responses and records every call
#[derive(Default)]
struct StubGateway {
    responses: Mutex<VecDeque<Result<Value, GatewayError>>>,
    calls: Mutex<Vec<(Endpoint, Value)>>,
}

impl StubGateway {
    fn scripted(responses: Vec<Result<Value, GatewayError>>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
            calls: Mutex::new(Vec::new()),
        })
    }

    fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn call(&self, index: usize) -> (Endpoint, Value) {
        self.calls.lock().unwrap()[index].clone()
    }
}

#[async_trait]
impl TravelGateway for StubGateway {
    async fn get(&self, endpoint: Endpoint, params: &ParamMap) -> Result<Value, GatewayError> {
        self.calls
            .lock()
            .unwrap()
            .push((endpoint, params.as_value()));
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected extra gateway call")
    }
}

fn router_with(gateway: Arc<StubGateway>) -> ToolRouter {
    let mut router = ToolRouter::new();
    router.register_tool(FlightSearchTool::new(gateway.clone()));
    router.register_tool(HotelSearchTool::new(gateway));
    router.register_tool(TransferSearchTool::new());
    router
}

#[tokio::test]
async fn flight_validation_short_circuits_before_any_upstream_call() {
    let gateway = StubGateway::scripted(vec![]);
    let router = router_with(gateway.clone());

    let response = router
        .dispatch(
            "search_flight_offers",
            json!({
                "originLocationCode": "SYD",
                "destinationLocationCode": "BKK",
                "departureDate": "2025-05-02",
                "adults": 11
            }),
        )
        .await;

    assert_eq!(
        response,
        json!({ "error": "Total number of seated travelers (adults + children) cannot exceed 9" })
    );
    assert_eq!(gateway.call_count(), 0);
}

#[tokio::test]
async fn flight_search_passes_upstream_payload_through() {
    let payload = json!({
        "data": [{ "type": "flight-offer", "id": "1" }],
        "meta": { "count": 1 }
    });
    let gateway = StubGateway::scripted(vec![Ok(payload.clone())]);
    let router = router_with(gateway.clone());

    let response = router
        .dispatch(
            "search_flight_offers",
            json!({
                "originLocationCode": "SYD",
                "destinationLocationCode": "BKK",
                "departureDate": "2025-05-02",
                "adults": 2,
                "nonStop": false
            }),
        )
        .await;

    assert_eq!(response, payload);

    let (endpoint, sent) = gateway.call(0);
    assert_eq!(endpoint, Endpoint::FlightOffers);
    assert_eq!(sent["originLocationCode"], "SYD");
    assert_eq!(sent["adults"], 2);
    assert_eq!(sent["nonStop"], false);
    assert_eq!(sent["max"], 5);
    assert!(sent.get("returnDate").is_none());
}

#[tokio::test]
async fn flight_search_with_no_matches_is_informational() {
    let gateway = StubGateway::scripted(vec![Ok(json!({ "data": [] }))]);
    let router = router_with(gateway);

    let response = router
        .dispatch(
            "search_flight_offers",
            json!({
                "originLocationCode": "SYD",
                "destinationLocationCode": "BKK",
                "departureDate": "2025-05-02",
                "adults": 1
            }),
        )
        .await;

    let info = response["info"].as_str().expect("info key expected");
    assert!(info.contains("No flight offers found"));
    assert!(response.get("error").is_none());
}

#[tokio::test]
async fn hotel_search_for_unknown_city_names_the_city() {
    let gateway =
        StubGateway::scripted(vec![Err(GatewayError::NotFound("no such city".into()))]);
    let router = router_with(gateway);

    let response = router
        .dispatch(
            "search_hotel_offers",
            json!({
                "cityCode": "XXZZ",
                "checkInDate": "2025-06-01",
                "checkOutDate": "2025-06-03"
            }),
        )
        .await;

    assert_eq!(response, json!({ "error": "No hotels found in city code: XXZZ" }));
}

#[tokio::test]
async fn hotel_search_with_no_availability_is_informational() {
    let gateway = StubGateway::scripted(vec![
        Ok(json!({ "data": [{ "hotelId": "AAA" }, { "hotelId": "BBB" }] })),
        Ok(json!({ "data": [] })),
    ]);
    let router = router_with(gateway.clone());

    let response = router
        .dispatch(
            "search_hotel_offers",
            json!({
                "cityCode": "PAR",
                "checkInDate": "2025-06-01",
                "checkOutDate": "2025-06-03",
                "currency": "EUR"
            }),
        )
        .await;

    assert!(response.get("info").is_some());
    assert!(response.get("error").is_none());

    let (endpoint, sent) = gateway.call(1);
    assert_eq!(endpoint, Endpoint::HotelOffers);
    assert_eq!(sent["hotelIds"], "AAA,BBB");
    assert_eq!(sent["adults"], 2);
    assert_eq!(sent["currency"], "EUR");
}

#[tokio::test]
async fn unclassified_gateway_failure_still_yields_a_wellformed_response() {
    let gateway = StubGateway::scripted(vec![Err(GatewayError::Transport(
        "connection refused".into(),
    ))]);
    let router = router_with(gateway);

    let response = router
        .dispatch(
            "search_flight_offers",
            json!({
                "originLocationCode": "SYD",
                "destinationLocationCode": "BKK",
                "departureDate": "2025-05-02",
                "adults": 1
            }),
        )
        .await;

    let message = response["error"].as_str().expect("error key expected");
    assert!(message.starts_with("Internal error:"));
    assert!(response.as_object().unwrap().len() == 1);
}

#[tokio::test]
async fn unknown_tool_is_rejected() {
    let router = router_with(StubGateway::scripted(vec![]));
    let response = router.dispatch("book_cruise", json!({})).await;
    assert_eq!(response, json!({ "error": "Unknown tool: book_cruise" }));
}

#[tokio::test]
async fn missing_required_parameters_are_rejected_before_any_call() {
    let gateway = StubGateway::scripted(vec![]);
    let router = router_with(gateway.clone());

    let response = router.dispatch("search_flight_offers", json!({})).await;

    let message = response["error"].as_str().unwrap();
    assert!(message.contains("Invalid parameters for `search_flight_offers`"));
    assert_eq!(gateway.call_count(), 0);
}

#[tokio::test]
async fn transfer_search_rejects_blank_locations() {
    let gateway = StubGateway::scripted(vec![]);
    let router = router_with(gateway.clone());

    let response = router
        .dispatch(
            "search_transfer_offers",
            json!({ "startLocation": "", "endLocation": "CDG" }),
        )
        .await;

    assert_eq!(
        response,
        json!({ "error": "Missing start or end location for transfer search" })
    );
    assert_eq!(gateway.call_count(), 0);
}

#[tokio::test]
async fn transfer_search_synthesizes_an_estimate_without_the_gateway() {
    let gateway = StubGateway::scripted(vec![]);
    let router = router_with(gateway.clone());

    let response = router
        .dispatch(
            "search_transfer_offers",
            json!({ "startLocation": "CDG", "endLocation": "Paris city centre" }),
        )
        .await;

    let offer = &response["data"][0];
    assert_eq!(offer["estimated"], true);
    assert_eq!(offer["quotation"]["currencyCode"], "USD");
    assert!(offer["quotation"]["monetaryAmount"].as_f64().is_some());
    assert_eq!(gateway.call_count(), 0);
}

#[tokio::test]
async fn router_describes_all_registered_tools() {
    let router = router_with(StubGateway::scripted(vec![]));

    let described = router.describe_tools();
    let names: Vec<&str> = described
        .iter()
        .map(|tool| tool["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![
            "search_flight_offers",
            "search_hotel_offers",
            "search_transfer_offers"
        ]
    );
    for tool in &described {
        assert!(tool["parameters"].is_object());
        assert!(!tool["description"].as_str().unwrap().is_empty());
    }
}
