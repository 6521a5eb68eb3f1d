use crate::types::{LineItem, OrderGroup, SalesRecord};
use std::collections::HashMap;
use tracing::debug;

/// Sales records grouped into orders, ready for rendering
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderBook {
    groups: Vec<OrderGroup>,
}

impl OrderBook {
    /// Group records by order id.
    ///
    /// Groups come out in the order their ids first appear in `records`.
    /// Items inside a group are sorted by item number with a stable sort, so
    /// equal item numbers keep their input order.
    #[must_use]
    pub fn from_records(records: Vec<SalesRecord>) -> Self {
        let mut groups: Vec<OrderGroup> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for record in records {
            let slot = match index.get(&record.order_id) {
                Some(&slot) => slot,
                None => {
                    index.insert(record.order_id.clone(), groups.len());
                    groups.push(OrderGroup {
                        order_id: record.order_id.clone(),
                        items: Vec::new(),
                        grand_total: 0.0,
                    });
                    groups.len() - 1
                }
            };
            groups[slot].items.push(LineItem::new(record));
        }

        for group in &mut groups {
            group
                .items
                .sort_by(|a, b| a.record.item_number.cmp(&b.record.item_number));
            group.grand_total = group.items.iter().map(|item| item.total_price).sum();
            debug!(
                order_id = %group.order_id,
                items = group.items.len(),
                grand_total = group.grand_total,
                "built order group"
            );
        }

        Self { groups }
    }

    pub fn groups(&self) -> &[OrderGroup] {
        &self.groups
    }

    pub fn get(&self, order_id: &str) -> Option<&OrderGroup> {
        self.groups.iter().find(|g| g.order_id == order_id)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of line items across all orders
    pub fn item_count(&self) -> usize {
        self.groups.iter().map(|g| g.items.len()).sum()
    }
}
