use super::errors::DomainError;
use super::order::{Order, OrderDraft, Page};

pub trait OrderRepository: Send + Sync + 'static {
    /// Persist the header and every item as one unit and return the stored order.
    fn create(&self, draft: OrderDraft) -> Result<Order, DomainError>;
    fn find_by_id(&self, id: i64) -> Result<Option<Order>, DomainError>;
    fn list(&self, page: Page) -> Result<Vec<Order>, DomainError>;
}
