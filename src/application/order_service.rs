use crate::domain::errors::DomainError;
use crate::domain::order::{Order, OrderDraft, Page};
use crate::domain::ports::OrderRepository;

pub struct OrderService<R> {
    repo: R,
}

impl<R: OrderRepository> OrderService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn create_order(&self, draft: OrderDraft) -> Result<Order, DomainError> {
        let order = self.repo.create(draft)?;
        log::info!(
            "Created order {} ({}) with {} item(s)",
            order.id,
            order.display_name,
            order.items.len()
        );
        Ok(order)
    }

    /// Unlike the repository, a missing order is an error here.
    pub fn get_order(&self, id: i64) -> Result<Order, DomainError> {
        self.repo.find_by_id(id)?.ok_or(DomainError::NotFound)
    }

    pub fn list_orders(&self, page: Page) -> Result<Vec<Order>, DomainError> {
        self.repo.list(page)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use chrono::NaiveDateTime;

    use super::*;
    use crate::domain::order::OrderItem;

    #[derive(Default)]
    struct InMemoryRepo {
        orders: Mutex<Vec<Order>>,
    }

    impl OrderRepository for InMemoryRepo {
        fn create(&self, draft: OrderDraft) -> Result<Order, DomainError> {
            let mut orders = self.orders.lock().unwrap();
            let id = orders.len() as i64 + 1;
            let order = Order {
                id,
                display_name: draft.display_name,
                customer_name: draft.customer_name,
                counter: draft.counter,
                shop: draft.shop,
                user: draft.user,
                amount_untaxed: draft.amount_untaxed,
                amount_tax: draft.amount_tax,
                total_cess: draft.total_cess,
                amount_total: draft.amount_total,
                create_date: draft.create_date,
                payment_journal_id: draft.payment_journal_id,
                items: draft
                    .items
                    .into_iter()
                    .enumerate()
                    .map(|(n, i)| OrderItem {
                        id: n as i64 + 1,
                        order_id: id,
                        product_id: i.product_id,
                        display_name: i.display_name,
                        name: i.name,
                        default_code: i.default_code,
                        qty: i.qty,
                        qty_available: i.qty_available,
                        sales_cess_amount: i.sales_cess_amount,
                        list_price: i.list_price,
                        mrp: i.mrp,
                        vat_percent: i.vat_percent,
                    })
                    .collect(),
            };
            orders.push(order.clone());
            Ok(order)
        }

        fn find_by_id(&self, id: i64) -> Result<Option<Order>, DomainError> {
            Ok(self.orders.lock().unwrap().iter().find(|o| o.id == id).cloned())
        }

        fn list(&self, page: Page) -> Result<Vec<Order>, DomainError> {
            Ok(self
                .orders
                .lock()
                .unwrap()
                .iter()
                .skip(page.skip as usize)
                .take(page.limit as usize)
                .cloned()
                .collect())
        }
    }

    fn draft(name: &str) -> OrderDraft {
        OrderDraft {
            display_name: name.to_string(),
            customer_name: "Asha".to_string(),
            counter: "C2".to_string(),
            shop: "Harbour Road".to_string(),
            user: "cashier02".to_string(),
            amount_untaxed: 10.0,
            amount_tax: 0.5,
            total_cess: 0.0,
            amount_total: 10.5,
            create_date: NaiveDateTime::parse_from_str("2024-05-01 12:00:00", "%Y-%m-%d %H:%M:%S")
                .unwrap(),
            payment_journal_id: 1,
            items: vec![],
        }
    }

    #[test]
    fn get_order_maps_missing_to_not_found() {
        let service = OrderService::new(InMemoryRepo::default());

        let err = service.get_order(1).unwrap_err();

        assert!(matches!(err, DomainError::NotFound));
    }

    #[test]
    fn get_order_returns_created_order() {
        let service = OrderService::new(InMemoryRepo::default());
        let created = service.create_order(draft("POS/1")).unwrap();

        assert_eq!(service.get_order(created.id).unwrap(), created);
    }

    #[test]
    fn list_orders_respects_page_window() {
        let service = OrderService::new(InMemoryRepo::default());
        service.create_order(draft("POS/1")).unwrap();
        service.create_order(draft("POS/2")).unwrap();

        let page = service.list_orders(Page { skip: 0, limit: 1 }).unwrap();

        assert_eq!(page.len(), 1);
        assert_eq!(page[0].display_name, "POS/1");
    }
}
