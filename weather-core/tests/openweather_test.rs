// OpenWeather provider against a mockito server

use mockito::{Matcher, Server};
use shipping_weather_core::{
    Error, ForecastProvider, OpenWeatherProvider, ProviderReply, RejectReason, fetch_forecasts,
};

fn forecast_body(city: &str, entries: &[(&str, f64)]) -> String {
    let list: Vec<serde_json::Value> = entries
        .iter()
        .map(|(dt_txt, temp)| {
            serde_json::json!({
                "dt_txt": dt_txt,
                "main": { "temp": temp, "humidity": 60 },
                "weather": [{ "description": "clear sky" }]
            })
        })
        .collect();

    serde_json::json!({
        "cod": "200",
        "cnt": list.len(),
        "city": { "name": city, "country": "US" },
        "list": list
    })
    .to_string()
}

fn zip_query(zip: &str) -> Matcher {
    Matcher::AllOf(vec![
        Matcher::UrlEncoded("zip".into(), format!("{zip},us")),
        Matcher::UrlEncoded("appid".into(), "TEST_KEY".into()),
        Matcher::UrlEncoded("units".into(), "imperial".into()),
    ])
}

fn provider_for(server: &Server) -> OpenWeatherProvider {
    OpenWeatherProvider::new("TEST_KEY".into(), "us".into()).with_base_url(server.url())
}

#[tokio::test]
async fn test_fetch_city_success() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/forecast")
        .match_query(zip_query("32712"))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(forecast_body(
            "Apopka",
            &[("2024-07-04 12:00:00", 91.3), ("2024-07-04 15:00:00", 93.8)],
        ))
        .create_async()
        .await;

    let reply = provider_for(&server).fetch_city("32712").await.unwrap();

    match reply {
        ProviderReply::Found(report) => {
            assert_eq!(report.city_name, "Apopka");
            assert_eq!(report.samples.len(), 2);
            assert_eq!(report.samples[1].temperature, 93.8);
            assert_eq!(report.samples[0].timestamp.to_string(), "2024-07-04 12:00:00");
        }
        other => panic!("Expected Found, got {other:?}"),
    }

    mock.assert_async().await;
}

#[tokio::test]
async fn test_fetch_city_404_is_not_found() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/forecast")
        .match_query(zip_query("00000"))
        .with_status(404)
        .with_body(r#"{"cod":"404","message":"city not found"}"#)
        .create_async()
        .await;

    let reply = provider_for(&server).fetch_city("00000").await.unwrap();
    assert_eq!(reply, ProviderReply::NotFound { status: 404 });

    mock.assert_async().await;
}

#[tokio::test]
async fn test_fetch_city_unauthorized_is_not_found() {
    let mut server = Server::new_async().await;

    let _mock = server
        .mock("GET", "/forecast")
        .match_query(Matcher::Any)
        .with_status(401)
        .create_async()
        .await;

    let reply = provider_for(&server).fetch_city("32712").await.unwrap();
    assert_eq!(reply, ProviderReply::NotFound { status: 401 });
}

#[tokio::test]
async fn test_fetch_city_malformed_body() {
    let mut server = Server::new_async().await;

    let _mock = server
        .mock("GET", "/forecast")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("<html>gateway</html>")
        .create_async()
        .await;

    let result = provider_for(&server).fetch_city("32712").await;
    assert!(matches!(result, Err(Error::InvalidResponse(_))));
}

#[tokio::test]
async fn test_batch_with_one_invalid_zip() {
    let mut server = Server::new_async().await;

    let apopka = server
        .mock("GET", "/forecast")
        .match_query(zip_query("32712"))
        .with_status(200)
        .with_body(forecast_body(
            "Apopka",
            &[
                ("2024-07-04 21:00:00", 84.0),
                ("2024-07-05 00:00:00", 79.0),
                ("2024-07-05 15:00:00", 94.0),
            ],
        ))
        .create_async()
        .await;
    let invalid = server
        .mock("GET", "/forecast")
        .match_query(zip_query("99999"))
        .with_status(404)
        .create_async()
        .await;
    let beverly = server
        .mock("GET", "/forecast")
        .match_query(zip_query("90210"))
        .with_status(200)
        .with_body(forecast_body("Beverly Hills", &[("2024-07-04 21:00:00", 70.0)]))
        .create_async()
        .await;

    let provider = provider_for(&server);
    let codes = vec!["32712".to_string(), "99999".to_string(), "90210".to_string()];
    let batch = fetch_forecasts(&provider, &codes).await.unwrap();

    assert_eq!(batch.cities.len(), 2);
    assert_eq!(batch.cities[0].city_name, "Apopka");
    assert_eq!(batch.cities[0].days.len(), 2);
    assert_eq!(batch.cities[0].days[1].high, 94.0);
    assert_eq!(batch.cities[1].postal_code, "90210");

    assert_eq!(batch.rejected.len(), 1);
    assert_eq!(batch.rejected[0].postal_code, "99999");
    assert_eq!(batch.rejected[0].reason, RejectReason::InvalidPostalCode { status: 404 });

    apopka.assert_async().await;
    invalid.assert_async().await;
    beverly.assert_async().await;
}
