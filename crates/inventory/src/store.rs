//! The bean bag store engine.
//!
//! Owns the stock collection and the sales ledger. Every public operation
//! validates its input first and only then mutates, so a failed call leaves
//! both collections exactly as they were.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use chrono::Month;
use tracing::{debug, info};

use beanbags_core::{BeanBagId, StoreError, StoreResult};

use crate::command::AddBeanBags;
use crate::record::{BeanBag, Descriptor, StockPeriod};

/// In-memory bean bag inventory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BeanBagStore {
    stock: HashMap<BeanBagId, BeanBag>,
    sold: HashMap<BeanBagId, BeanBag>,
}

fn ensure_quantity(quantity: i64) -> StoreResult<i64> {
    if quantity < 1 {
        return Err(StoreError::InvalidQuantity(quantity));
    }
    Ok(quantity)
}

fn ensure_period(period: StockPeriod) -> StoreResult<StockPeriod> {
    Month::try_from(period.month).map_err(|_| StoreError::InvalidMonth(period.month))?;
    Ok(period)
}

fn parse_id(raw: &str) -> StoreResult<BeanBagId> {
    raw.parse()
}

impl BeanBagStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn stock_entry(&self, raw: &str) -> StoreResult<&BeanBag> {
        let id = parse_id(raw)?;
        self.stock
            .get(&id)
            .ok_or_else(|| StoreError::unknown_id(id.as_str()))
    }

    fn sold_entry(&self, raw: &str) -> StoreResult<&BeanBag> {
        let id = parse_id(raw)?;
        self.sold
            .get(&id)
            .ok_or_else(|| StoreError::unknown_id(id.as_str()))
    }

    fn current_price(&self, id: &BeanBagId) -> i64 {
        self.stock.get(id).and_then(BeanBag::price).unwrap_or(0)
    }

    /// Add stock, creating the record on first intake.
    ///
    /// Validation order: quantity, intake month, id. Adding to an existing id
    /// requires identical manufacturer, name and information.
    pub fn add_bean_bags(&mut self, cmd: AddBeanBags) -> StoreResult<()> {
        let quantity = ensure_quantity(cmd.quantity)?;
        let intake = cmd.intake.map(ensure_period).transpose()?;
        let id = parse_id(&cmd.id)?;

        let incoming = BeanBag::from_descriptor(
            id.clone(),
            quantity,
            Descriptor::new(cmd.manufacturer, cmd.name, cmd.information.unwrap_or_default()),
        );

        match self.stock.entry(id) {
            Entry::Vacant(slot) => {
                let mut bag = incoming;
                if let Some(period) = intake {
                    bag.set_last_restocked(period);
                }
                debug!(id = %slot.key(), quantity, "new bean bag stocked");
                slot.insert(bag);
            }
            Entry::Occupied(mut slot) => {
                let existing = slot.get_mut();
                if existing.mismatched(&incoming) {
                    return Err(StoreError::RecordMismatch(incoming.id_typed().clone()));
                }
                let total = existing
                    .quantity()
                    .checked_add(quantity)
                    .ok_or(StoreError::InvalidQuantity(quantity))?;
                existing.set_quantity(total);
                if let Some(period) = intake {
                    existing.set_last_restocked(period);
                }
                debug!(id = %incoming.id_typed(), quantity, total, "bean bags restocked");
            }
        }
        Ok(())
    }

    /// Add stock without intake month/year metadata.
    pub fn add_stock(
        &mut self,
        quantity: i64,
        manufacturer: &str,
        name: &str,
        id: &str,
        information: Option<&str>,
    ) -> StoreResult<()> {
        let mut cmd = AddBeanBags::new(quantity, manufacturer, name, id);
        if let Some(information) = information {
            cmd = cmd.with_information(information);
        }
        self.add_bean_bags(cmd)
    }

    /// Set the unit price, in minor currency units, of a stocked bean bag.
    pub fn set_price(&mut self, id: &str, price: i64) -> StoreResult<()> {
        if price < 1 {
            return Err(StoreError::InvalidPrice(price));
        }
        let id = parse_id(id)?;
        let bag = self
            .stock
            .get_mut(&id)
            .ok_or_else(|| StoreError::unknown_id(id.as_str()))?;
        bag.set_price(price);
        debug!(id = %id, price, "price set");
        Ok(())
    }

    /// Sell from stock and record the sale in the ledger.
    pub fn sell(&mut self, quantity: i64, id: &str) -> StoreResult<()> {
        let quantity = ensure_quantity(quantity)?;
        let id = parse_id(id)?;
        let bag = self
            .stock
            .get_mut(&id)
            .ok_or_else(|| StoreError::unknown_id(id.as_str()))?;

        let available = bag.quantity();
        if available == 0 {
            return Err(StoreError::OutOfStock(id));
        }
        if available < quantity {
            return Err(StoreError::insufficient_stock(id, quantity, available));
        }
        if bag.price().is_none() {
            return Err(StoreError::PriceNotSet(id));
        }

        let sold_total = match self.sold.get(&id) {
            Some(entry) => entry
                .quantity()
                .checked_add(quantity)
                .ok_or(StoreError::InvalidQuantity(quantity))?,
            None => quantity,
        };

        bag.set_quantity(available - quantity);
        match self.sold.entry(id) {
            Entry::Occupied(mut slot) => slot.get_mut().set_quantity(sold_total),
            Entry::Vacant(slot) => {
                let ledger = BeanBag::from_descriptor(
                    slot.key().clone(),
                    sold_total,
                    bag.descriptor().clone(),
                );
                slot.insert(ledger);
            }
        }
        debug!(id = %bag.id_typed(), quantity, remaining = bag.quantity(), "bean bags sold");
        Ok(())
    }

    /// Units held across all stock records.
    pub fn total_in_stock(&self) -> i64 {
        self.stock
            .values()
            .map(BeanBag::quantity)
            .fold(0i64, i64::saturating_add)
    }

    pub fn in_stock(&self, id: &str) -> StoreResult<i64> {
        self.stock_entry(id).map(BeanBag::quantity)
    }

    /// Number of stock records with at least one unit available.
    pub fn distinct_in_stock_count(&self) -> usize {
        self.stock.values().filter(|bag| bag.quantity() > 0).count()
    }

    pub fn total_sold(&self) -> i64 {
        self.sold
            .values()
            .map(BeanBag::quantity)
            .fold(0i64, i64::saturating_add)
    }

    pub fn sold_count(&self, id: &str) -> StoreResult<i64> {
        self.sold_entry(id).map(BeanBag::quantity)
    }

    /// Units sold times the *current* stock price.
    pub fn sold_value(&self, id: &str) -> StoreResult<i64> {
        let entry = self.sold_entry(id)?;
        Ok(entry
            .quantity()
            .saturating_mul(self.current_price(entry.id_typed())))
    }

    pub fn total_sold_value(&self) -> i64 {
        self.sold
            .values()
            .map(|entry| entry.quantity().saturating_mul(self.current_price(entry.id_typed())))
            .fold(0i64, i64::saturating_add)
    }

    /// Free-text information for a stocked bean bag; blank text reads as `""`.
    pub fn details(&self, id: &str) -> StoreResult<&str> {
        let info = self.stock_entry(id)?.information();
        if info.trim().is_empty() {
            Ok("")
        } else {
            Ok(info)
        }
    }

    pub fn stock_record(&self, id: &str) -> StoreResult<&BeanBag> {
        self.stock_entry(id)
    }

    /// Sales ledger entry for `id`. Its `price()` is always `None`; the price
    /// lives on the stock record.
    pub fn sold_record(&self, id: &str) -> StoreResult<&BeanBag> {
        self.sold_entry(id)
    }

    /// Drop all stock and sales records.
    pub fn empty(&mut self) {
        self.stock.clear();
        self.sold.clear();
        info!("store emptied");
    }

    /// Drop the sales ledger; stock is untouched.
    pub fn reset_sales_tracking(&mut self) {
        self.sold.clear();
        info!("sales tracking reset");
    }

    /// Rename a stocked bean bag, carrying its sales history along.
    pub fn replace_id(&mut self, old_id: &str, new_id: &str) -> StoreResult<()> {
        let new_id = parse_id(new_id)?;
        let old_id: BeanBagId = old_id
            .parse()
            .map_err(|_| StoreError::unknown_id(old_id))?;
        if !self.stock.contains_key(&old_id) {
            return Err(StoreError::unknown_id(old_id.as_str()));
        }
        if self.stock.contains_key(&new_id) {
            return Err(StoreError::invalid_id(new_id.as_str()));
        }

        if let Some(mut bag) = self.stock.remove(&old_id) {
            bag.set_id(new_id.clone());
            self.stock.insert(new_id.clone(), bag);
        }
        if let Some(mut entry) = self.sold.remove(&old_id) {
            entry.set_id(new_id.clone());
            self.sold.insert(new_id.clone(), entry);
        }
        debug!(old = %old_id, new = %new_id, "bean bag id replaced");
        Ok(())
    }
}
