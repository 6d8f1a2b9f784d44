//! OpenAPI document for the order API.
//!
//! - Swagger UI: `http://localhost:8000/docs/`
//! - OpenAPI JSON: `http://localhost:8000/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::handlers::health::HealthResponse;
use crate::handlers::orders::{
    CreateOrderItemRequest, CreateOrderRequest, ListOrdersParams, OrderItemResponse,
    OrderResponse,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Order API",
        version = "0.1.0",
        description = "Create, list and fetch point-of-sale orders with their line items."
    ),
    paths(
        crate::handlers::orders::create_order,
        crate::handlers::orders::list_orders,
        crate::handlers::orders::get_order,
        crate::handlers::health::health_check,
    ),
    components(schemas(
        CreateOrderRequest,
        CreateOrderItemRequest,
        OrderResponse,
        OrderItemResponse,
        ListOrdersParams,
        HealthResponse,
    )),
    tags(
        (name = "orders", description = "Order management"),
        (name = "health", description = "Liveness probe"),
    )
)]
pub struct ApiDoc;
