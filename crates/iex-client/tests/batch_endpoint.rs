use iex_client::{Config, DataType, Error, IexClient};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> IexClient {
  let config = Config::default_with_key("Tpk_test".to_string())
    .with_base_url(format!("{}/stable", server.uri()));
  IexClient::new(config).expect("Failed to create client")
}

#[tokio::test]
async fn test_batch_sends_symbols_types_and_token() {
  let server = MockServer::start().await;

  Mock::given(method("GET"))
    .and(path("/stable/stock/market/batch"))
    .and(query_param("symbols", "AAPL,MSFT"))
    .and(query_param("types", "quote,stats"))
    .and(query_param("token", "Tpk_test"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "AAPL": {
        "quote": {"latestPrice": 150.25, "marketCap": 2.5e12},
        "stats": {"year1ChangePercent": 0.31, "month1ChangePercent": null}
      },
      "MSFT": {
        "quote": {"latestPrice": "n/a", "marketCap": 1.9e12},
        "stats": {}
      }
    })))
    .expect(1)
    .mount(&server)
    .await;

  let batch = client_for(&server)
    .market()
    .batch("AAPL,MSFT", &[DataType::Quote, DataType::Stats])
    .await
    .expect("batch request failed");

  assert_eq!(batch.len(), 2);
  assert_eq!(batch["AAPL"].latest_price(), Some(150.25));
  assert_eq!(batch["AAPL"].stats.as_ref().unwrap().year1_change_percent, Some(0.31));
  assert_eq!(batch["AAPL"].stats.as_ref().unwrap().month1_change_percent, None);
  assert_eq!(batch["MSFT"].latest_price(), None);
  assert_eq!(batch["MSFT"].market_cap(), Some(1.9e12));
}

#[tokio::test]
async fn test_absent_symbol_is_missing_not_error() {
  let server = MockServer::start().await;

  Mock::given(method("GET"))
    .and(path("/stable/stock/market/batch"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "AAPL": {"quote": {"latestPrice": 150.25}}
    })))
    .mount(&server)
    .await;

  let batch = client_for(&server).market().batch("AAPL,GONE", &[DataType::Quote]).await.unwrap();

  assert!(batch.contains_key("AAPL"));
  assert!(!batch.contains_key("GONE"));
}

#[tokio::test]
async fn test_error_status_is_fatal() {
  let server = MockServer::start().await;

  Mock::given(method("GET"))
    .and(path("/stable/stock/market/batch"))
    .respond_with(ResponseTemplate::new(403).set_body_string("Forbidden"))
    .expect(1)
    .mount(&server)
    .await;

  let result = client_for(&server).market().batch("AAPL", &[DataType::Quote]).await;

  match result {
    Err(Error::Api(msg)) => {
      assert!(msg.contains("403"));
      assert!(msg.contains("Forbidden"));
    }
    other => panic!("Expected Api error, got {:?}", other),
  }
}

#[tokio::test]
async fn test_malformed_json_is_fatal() {
  let server = MockServer::start().await;

  Mock::given(method("GET"))
    .and(path("/stable/stock/market/batch"))
    .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
    .mount(&server)
    .await;

  let result = client_for(&server).market().batch("AAPL", &[DataType::Quote]).await;

  assert!(matches!(result, Err(Error::Parse(_))));
}

#[tokio::test]
async fn test_transport_error_is_fatal() {
  // Nothing listens on port 9 of the loopback interface
  let config = Config::default_with_key("Tpk_SECRET".to_string()).with_base_url("http://127.0.0.1:9/stable");
  let client = IexClient::new(config).unwrap();

  let result = client.market().batch("AAPL", &[DataType::Quote]).await;

  match result {
    Err(err @ Error::Http(_)) => {
      let message = err.to_string();
      assert!(!message.contains("Tpk_SECRET"), "token leaked: {}", message);
      assert!(message.contains("127.0.0.1:9"));
    }
    other => panic!("Expected Http error, got {:?}", other),
  }
}
