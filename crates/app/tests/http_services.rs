//! HTTP service wrappers exercised against a stub server.

use jiff::civil::date;
use rust_decimal::Decimal;
use serde_json::json;
use testresult::TestResult;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_partial_json, method, path},
};

use waybill::{
    cart::resolve_product_id,
    checkout::CheckoutSession,
    fixtures,
    geo::Coordinate,
    shipping,
};
use waybill_app::{
    api::{ApiClient, ApiConfig, ApiError},
    carts::{CartsService, CartsServiceError, HttpCartsService},
    payments::{HttpPaymentsService, PaymentsService, PaymentsServiceError},
    quotes::{
        HttpQuotesService, QuotesService, QuotesServiceError,
        models::{QuoteRequest, ShipmentLeg},
    },
};

const ORIGIN: Coordinate = Coordinate {
    lat: 14.6349,
    lng: -90.5069,
};

const DESTINATION: Coordinate = Coordinate {
    lat: 14.5586,
    lng: -90.7295,
};

fn client(server: &MockServer) -> Result<ApiClient, ApiError> {
    ApiClient::new(&ApiConfig {
        base_url: server.uri(),
    })
}

fn tariff_response() -> serde_json::Value {
    json!({
        "distancia_km": 12.5,
        "total_envio": 15.0,
        "recargo_distancia_total": 2.5,
        "costo_base_envio_unico": 10.0,
        "descuento_por_envio_pct": 0.0,
        "descuento_por_envio_total": 0.0,
        "detalle": [
            { "peso_cobrado_kg": 1.2, "costo_envio": 5.0 }
        ]
    })
}

#[tokio::test]
async fn quote_request_posts_items_and_leg() -> TestResult {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/tarifa_envio/calcular"))
        .and(body_partial_json(json!({
            "envio": {
                "origen_lat": 14.6349,
                "destino_lng": -90.7295
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(tariff_response()))
        .expect(1)
        .mount(&server)
        .await;

    let service = HttpQuotesService::new(client(&server)?);

    let quote = service
        .request(QuoteRequest {
            items: shipping::normalize(&[fixtures::jersey(2)]),
            leg: ShipmentLeg::new(ORIGIN, DESTINATION),
        })
        .await?;

    assert_eq!(quote.total, Decimal::new(15, 0));
    assert_eq!(quote.lines.len(), 1);

    Ok(())
}

#[tokio::test]
async fn tariff_error_message_is_surfaced_verbatim() -> TestResult {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/tarifa_envio/calcular"))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_json(json!({ "error": "tarifa no disponible para la zona" })),
        )
        .mount(&server)
        .await;

    let service = HttpQuotesService::new(client(&server)?);

    let result = service
        .request(QuoteRequest {
            items: shipping::normalize(&[fixtures::jersey(1)]),
            leg: ShipmentLeg::new(ORIGIN, DESTINATION),
        })
        .await;

    match result {
        Err(QuotesServiceError::Api(ApiError::Remote { status, message })) => {
            assert_eq!(status.as_u16(), 422);
            assert_eq!(message, "tarifa no disponible para la zona");
        }
        other => panic!("expected a remote error, got {other:?}"),
    }

    Ok(())
}

#[tokio::test]
async fn get_cart_parses_inconsistent_records() -> TestResult {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cart/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "producto_variante_id": 501,
                "cantidad": 2,
                "precio_unitario": 100.0,
                "productoId": 1
            },
            {
                "producto_variante_id": 502,
                "cantidad": 1,
                "producto": {
                    "productoColor": { "producto": { "id": 9 } }
                }
            }
        ])))
        .mount(&server)
        .await;

    let service = HttpCartsService::new(client(&server)?);

    let cart = service.get_cart(7).await?;

    assert_eq!(cart.len(), 2);
    assert_eq!(cart.subtotal(), Decimal::new(200, 0));

    let nested = cart.lines().get(1).ok_or("missing second line")?;
    assert_eq!(resolve_product_id(nested), 9);

    Ok(())
}

#[tokio::test]
async fn cart_update_hits_rest_path_with_body() -> TestResult {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/cart/7/501"))
        .and(body_partial_json(json!({ "cantidad": 3 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(1)
        .mount(&server)
        .await;

    let service = HttpCartsService::new(client(&server)?);

    service.update_quantity(7, 501, 3).await?;

    Ok(())
}

#[tokio::test]
async fn cart_update_rejects_zero_before_any_call() -> TestResult {
    let server = MockServer::start().await;
    let service = HttpCartsService::new(client(&server)?);

    let result = service.update_quantity(7, 501, 0).await;

    assert!(matches!(result, Err(CartsServiceError::InvalidQuantity)));
    assert!(server.received_requests().await.is_some_and(|r| r.is_empty()));

    Ok(())
}

#[tokio::test]
async fn cart_clear_hits_clear_path() -> TestResult {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/cart/clear/7"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let service = HttpCartsService::new(client(&server)?);

    service.clear(7).await?;

    Ok(())
}

#[tokio::test]
async fn payment_session_returns_redirect_url() -> TestResult {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/stripe/checkout"))
        .and(body_partial_json(json!({ "userId": 7, "nit": "CF" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "url": "https://pay.example/session/abc" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let service = HttpPaymentsService::new(client(&server)?);

    let url = service.create_session(ready_payload()?).await?;

    assert_eq!(url, "https://pay.example/session/abc");

    Ok(())
}

#[tokio::test]
async fn payment_session_without_url_is_fatal() -> TestResult {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/stripe/checkout"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let service = HttpPaymentsService::new(client(&server)?);

    let result = service.create_session(ready_payload()?).await;

    assert!(matches!(result, Err(PaymentsServiceError::MissingUrl)));

    Ok(())
}

fn ready_payload() -> Result<waybill::checkout::CheckoutPayload, waybill::checkout::CheckoutError> {
    let mut session = CheckoutSession::new(vec![fixtures::jersey(2)]);
    session.set_destination(DESTINATION);
    session.accept_quote(waybill::quote::Quote {
        distance_km: 12.5,
        total: Decimal::new(15, 0),
        distance_surcharge: Decimal::ZERO,
        base_cost: Decimal::new(15, 0),
        discount_pct: Decimal::ZERO,
        discount_total: Decimal::ZERO,
        lines: Vec::new(),
    });

    session.assemble(7, date(2026, 8, 5))
}
