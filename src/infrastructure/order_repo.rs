use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::order::{Order, OrderDraft, Page};
use crate::domain::ports::OrderRepository;
use crate::schema::{order_items, orders};

use super::models::{NewOrderItemRow, NewOrderRow, OrderItemRow, OrderRow};

// ── Error conversions (infrastructure concern only) ──────────────────────────

impl From<diesel::result::Error> for DomainError {
    fn from(e: diesel::result::Error) -> Self {
        DomainError::Storage(e.to_string())
    }
}

impl From<r2d2::Error> for DomainError {
    fn from(e: r2d2::Error) -> Self {
        DomainError::Unavailable(e.to_string())
    }
}

// ── Repository ────────────────────────────────────────────────────────────────

pub struct DieselOrderRepository {
    pool: DbPool,
}

impl DieselOrderRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl OrderRepository for DieselOrderRepository {
    fn create(&self, draft: OrderDraft) -> Result<Order, DomainError> {
        let mut conn = self.pool.get()?;

        // IMMEDIATE takes the write lock up front so a concurrent writer waits
        // on busy_timeout instead of failing the read-to-write upgrade.
        conn.immediate_transaction::<_, DomainError, _>(|conn| {
            // 1. Insert the header and take the store-assigned id
            let order_id: i64 = diesel::insert_into(orders::table)
                .values(NewOrderRow::from(&draft))
                .returning(orders::id)
                .get_result(conn)?;

            // 2. One row per submitted item, in submission order
            for item in &draft.items {
                diesel::insert_into(order_items::table)
                    .values(NewOrderItemRow::new(order_id, item))
                    .execute(conn)?;
            }

            // 3. Re-read inside the transaction so the caller sees exactly what was committed
            load_order(conn, order_id)?.ok_or_else(|| {
                DomainError::Storage(format!("order {order_id} missing after insert"))
            })
        })
    }

    fn find_by_id(&self, id: i64) -> Result<Option<Order>, DomainError> {
        let mut conn = self.pool.get()?;
        load_order(&mut conn, id)
    }

    fn list(&self, page: Page) -> Result<Vec<Order>, DomainError> {
        let mut conn = self.pool.get()?;

        conn.transaction::<_, DomainError, _>(|conn| {
            let rows = orders::table
                .select(OrderRow::as_select())
                .order(orders::id.asc())
                .limit(page.limit)
                .offset(page.skip)
                .load(conn)?;

            // Same window as a subselect: binding every order id would hit
            // SQLite's variable limit on large pages.
            let page_ids = orders::table
                .select(orders::id)
                .order(orders::id.asc())
                .limit(page.limit)
                .offset(page.skip);
            let items = order_items::table
                .filter(order_items::order_id.eq_any(page_ids))
                .select(OrderItemRow::as_select())
                .order(order_items::id.asc())
                .load(conn)?;

            Ok(items
                .grouped_by(&rows)
                .into_iter()
                .zip(rows)
                .map(|(items, order)| order.into_domain(items))
                .collect())
        })
    }
}

fn load_order(conn: &mut SqliteConnection, id: i64) -> Result<Option<Order>, DomainError> {
    let order = orders::table
        .find(id)
        .select(OrderRow::as_select())
        .first(conn)
        .optional()?;

    let Some(order) = order else {
        return Ok(None);
    };

    let items = OrderItemRow::belonging_to(&order)
        .select(OrderItemRow::as_select())
        .order(order_items::id.asc())
        .load(conn)?;

    Ok(Some(order.into_domain(items)))
}
