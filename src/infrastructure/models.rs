use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::order::{Order, OrderDraft, OrderItem, OrderItemDraft};
use crate::schema::{order_items, orders};

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct OrderRow {
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
}

impl OrderRow {
    pub fn into_domain(self, items: Vec<OrderItemRow>) -> Order {
        Order {
            id: self.id,
            display_name: self.display_name,
            customer_name: self.customer_name,
            counter: self.counter,
            shop: self.shop,
            user: self.user,
            amount_untaxed: self.amount_untaxed,
            amount_tax: self.amount_tax,
            total_cess: self.total_cess,
            amount_total: self.amount_total,
            create_date: self.create_date,
            payment_journal_id: self.payment_journal_id,
            items: items.into_iter().map(OrderItem::from).collect(),
        }
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = orders)]
pub struct NewOrderRow<'a> {
    pub display_name: &'a str,
    pub customer_name: &'a str,
    pub counter: &'a str,
    pub shop: &'a str,
    pub user: &'a str,
    pub amount_untaxed: f64,
    pub amount_tax: f64,
    pub total_cess: f64,
    pub amount_total: f64,
    pub create_date: NaiveDateTime,
    pub payment_journal_id: i32,
}

impl<'a> From<&'a OrderDraft> for NewOrderRow<'a> {
    fn from(draft: &'a OrderDraft) -> Self {
        Self {
            display_name: &draft.display_name,
            customer_name: &draft.customer_name,
            counter: &draft.counter,
            shop: &draft.shop,
            user: &draft.user,
            amount_untaxed: draft.amount_untaxed,
            amount_tax: draft.amount_tax,
            total_cess: draft.total_cess,
            amount_total: draft.amount_total,
            create_date: draft.create_date,
            payment_journal_id: draft.payment_journal_id,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Associations)]
#[diesel(table_name = order_items)]
#[diesel(belongs_to(OrderRow, foreign_key = order_id))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct OrderItemRow {
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

impl From<OrderItemRow> for OrderItem {
    fn from(row: OrderItemRow) -> Self {
        Self {
            id: row.id,
            order_id: row.order_id,
            product_id: row.product_id,
            display_name: row.display_name,
            name: row.name,
            default_code: row.default_code,
            qty: row.qty,
            qty_available: row.qty_available,
            sales_cess_amount: row.sales_cess_amount,
            list_price: row.list_price,
            mrp: row.mrp,
            vat_percent: row.vat_percent,
        }
    }
}

// Absent optional fields must land as NULL, not as the SQL DEFAULT keyword.
#[derive(Debug, Insertable)]
#[diesel(table_name = order_items)]
#[diesel(treat_none_as_default_value = false)]
pub struct NewOrderItemRow<'a> {
    pub order_id: i64,
    pub product_id: Option<i32>,
    pub display_name: &'a str,
    pub name: &'a str,
    pub default_code: &'a str,
    pub qty: f64,
    pub qty_available: Option<f64>,
    pub sales_cess_amount: f64,
    pub list_price: f64,
    pub mrp: f64,
    pub vat_percent: f64,
}

impl<'a> NewOrderItemRow<'a> {
    pub fn new(order_id: i64, item: &'a OrderItemDraft) -> Self {
        Self {
            order_id,
            product_id: item.product_id,
            display_name: &item.display_name,
            name: &item.name,
            default_code: &item.default_code,
            qty: item.qty,
            qty_available: item.qty_available,
            sales_cess_amount: item.sales_cess_amount,
            list_price: item.list_price,
            mrp: item.mrp,
            vat_percent: item.vat_percent,
        }
    }
}
