use actix_web::{web, HttpResponse};
use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::domain::order::{Order, OrderDraft, OrderItem, OrderItemDraft, Page};
use crate::errors::AppError;
use crate::AppOrderService;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateOrderItemRequest {
    pub product_id: Option<i32>,
    pub display_name: String,
    pub name: String,
    /// Product code (SKU)
    pub default_code: String,
    pub qty: f64,
    pub qty_available: Option<f64>,
    pub sales_cess_amount: f64,
    pub list_price: f64,
    pub mrp: f64,
    pub vat_percent: f64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    pub display_name: String,
    pub customer_name: String,
    pub counter: String,
    pub shop: String,
    pub user: String,
    pub amount_untaxed: f64,
    pub amount_tax: f64,
    pub total_cess: f64,
    pub amount_total: f64,
    pub payment_journal_id: i32,
    /// ISO-8601 timestamp, e.g. "2024-03-14T09:26:53", "2024-03-14 09:26:53"
    /// or "2024-03-14T09:26:53.000Z". An offset is dropped and the wall time kept.
    #[serde(deserialize_with = "deserialize_wall_time")]
    pub create_date: NaiveDateTime,
    pub order_items: Vec<CreateOrderItemRequest>,
}

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a client timestamp into the local wall time it names.
///
/// RFC 3339 values keep their clock reading and lose the offset, matching how
/// the store keeps timestamps without a zone.
fn parse_wall_time(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.naive_local());
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

fn deserialize_wall_time<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_wall_time(&raw).ok_or_else(|| {
        serde::de::Error::custom(format!("invalid datetime '{raw}'"))
    })
}

impl From<CreateOrderItemRequest> for OrderItemDraft {
    fn from(req: CreateOrderItemRequest) -> Self {
        Self {
            product_id: req.product_id,
            display_name: req.display_name,
            name: req.name,
            default_code: req.default_code,
            qty: req.qty,
            qty_available: req.qty_available,
            sales_cess_amount: req.sales_cess_amount,
            list_price: req.list_price,
            mrp: req.mrp,
            vat_percent: req.vat_percent,
        }
    }
}

impl From<CreateOrderRequest> for OrderDraft {
    fn from(req: CreateOrderRequest) -> Self {
        Self {
            display_name: req.display_name,
            customer_name: req.customer_name,
            counter: req.counter,
            shop: req.shop,
            user: req.user,
            amount_untaxed: req.amount_untaxed,
            amount_tax: req.amount_tax,
            total_cess: req.total_cess,
            amount_total: req.amount_total,
            create_date: req.create_date,
            payment_journal_id: req.payment_journal_id,
            items: req.order_items.into_iter().map(OrderItemDraft::from).collect(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderItemResponse {
    pub id: i64,
    pub order_id: i64,
    pub product_id: Option<i32>,
    pub display_name: String,
    pub name: String,
    pub default_code: String,
    pub qty: f64,
    pub qty_available: Option<f64>,
    pub sales_cess_amount: f64,
    pub list_price: f64,
    pub mrp: f64,
    pub vat_percent: f64,
}

impl From<OrderItem> for OrderItemResponse {
    fn from(item: OrderItem) -> Self {
        Self {
            id: item.id,
            order_id: item.order_id,
            product_id: item.product_id,
            display_name: item.display_name,
            name: item.name,
            default_code: item.default_code,
            qty: item.qty,
            qty_available: item.qty_available,
            sales_cess_amount: item.sales_cess_amount,
            list_price: item.list_price,
            mrp: item.mrp,
            vat_percent: item.vat_percent,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderResponse {
    pub id: i64,
    pub display_name: String,
    pub customer_name: String,
    pub counter: String,
    pub shop: String,
    pub user: String,
    pub amount_untaxed: f64,
    pub amount_tax: f64,
    pub total_cess: f64,
    pub amount_total: f64,
    pub payment_journal_id: i32,
    pub create_date: NaiveDateTime,
    pub order_items: Vec<OrderItemResponse>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            display_name: order.display_name,
            customer_name: order.customer_name,
            counter: order.counter,
            shop: order.shop,
            user: order.user,
            amount_untaxed: order.amount_untaxed,
            amount_tax: order.amount_tax,
            total_cess: order.total_cess,
            amount_total: order.amount_total,
            payment_journal_id: order.payment_journal_id,
            create_date: order.create_date,
            order_items: order.items.into_iter().map(OrderItemResponse::from).collect(),
        }
    }
}

// ── Pagination ───────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
pub struct ListOrdersParams {
    /// Number of orders to skip. Defaults to 0.
    #[serde(default)]
    pub skip: u32,
    /// Maximum number of orders to return. Defaults to 100.
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    100
}

impl From<ListOrdersParams> for Page {
    fn from(params: ListOrdersParams) -> Self {
        Page {
            skip: params.skip.into(),
            limit: params.limit.into(),
        }
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /orders/
///
/// Creates an order together with its items. Header, items and the read-back
/// share one transaction: on any failure nothing from the request is kept.
#[utoipa::path(
    post,
    path = "/orders/",
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "Order created", body = OrderResponse),
        (status = 400, description = "Malformed body or the store rejected the order"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn create_order(
    service: web::Data<AppOrderService>,
    body: web::Json<CreateOrderRequest>,
) -> Result<HttpResponse, AppError> {
    let draft = OrderDraft::from(body.into_inner());

    let order = web::block(move || service.create_order(draft)).await??;

    Ok(HttpResponse::Ok().json(OrderResponse::from(order)))
}

/// GET /orders/{order_id}
#[utoipa::path(
    get,
    path = "/orders/{order_id}",
    params(
        ("order_id" = i64, Path, description = "Order id"),
    ),
    responses(
        (status = 200, description = "Order found", body = OrderResponse),
        (status = 400, description = "Malformed id or store failure"),
        (status = 404, description = "Order not found"),
    ),
    tag = "orders"
)]
pub async fn get_order(
    service: web::Data<AppOrderService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let order_id = path.into_inner();

    let order = web::block(move || service.get_order(order_id)).await??;

    Ok(HttpResponse::Ok().json(OrderResponse::from(order)))
}

/// GET /orders/
///
/// Returns a window of orders, each with its items, in insertion order.
#[utoipa::path(
    get,
    path = "/orders/",
    params(
        ("skip" = Option<u32>, Query, description = "Orders to skip (default 0)"),
        ("limit" = Option<u32>, Query, description = "Maximum orders to return (default 100)"),
    ),
    responses(
        (status = 200, description = "Orders with their items", body = [OrderResponse]),
        (status = 400, description = "Malformed query or store failure"),
    ),
    tag = "orders"
)]
pub async fn list_orders(
    service: web::Data<AppOrderService>,
    query: web::Query<ListOrdersParams>,
) -> Result<HttpResponse, AppError> {
    let page = Page::from(query.into_inner());

    let orders = web::block(move || service.list_orders(page)).await??;

    let body: Vec<OrderResponse> = orders.into_iter().map(OrderResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}
