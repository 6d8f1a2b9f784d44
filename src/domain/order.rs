use chrono::NaiveDateTime;

/// An order header as submitted by a client, before the store assigns ids.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub display_name: String,
    pub customer_name: String,
    pub counter: String,
    pub shop: String,
    pub user: String,
    pub amount_untaxed: f64,
    pub amount_tax: f64,
    pub total_cess: f64,
    pub amount_total: f64,
    pub create_date: NaiveDateTime,
    pub payment_journal_id: i32,
    pub items: Vec<OrderItemDraft>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderItemDraft {
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

/// A persisted order with its items eagerly loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
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
    pub create_date: NaiveDateTime,
    pub payment_journal_id: i32,
    pub items: Vec<OrderItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
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

/// Offset window over the order listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub skip: i64,
    pub limit: i64,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: 100,
        }
    }
}
