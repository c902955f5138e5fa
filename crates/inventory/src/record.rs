use serde::{Deserialize, Serialize};

use beanbags_core::{BeanBagId, Entity, ValueObject};

/// Descriptive details of a bean bag: who makes it, what it is called and any
/// free-text notes. Compared by text, never by allocation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Descriptor {
    pub manufacturer: String,
    pub name: String,
    pub information: String,
}

impl Descriptor {
    pub fn new(
        manufacturer: impl Into<String>,
        name: impl Into<String>,
        information: impl Into<String>,
    ) -> Self {
        Self {
            manufacturer: manufacturer.into(),
            name: name.into(),
            information: information.into(),
        }
    }
}

impl ValueObject for Descriptor {}

/// Year and month an intake of stock was recorded against (metadata only).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockPeriod {
    pub year: i16,
    pub month: u8,
}

impl StockPeriod {
    pub fn new(year: i16, month: u8) -> Self {
        Self { year, month }
    }
}

/// One bean bag stock-keeping unit.
///
/// The same type backs both the stock collection (`quantity` = units held) and
/// the sales ledger (`quantity` = units sold so far).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeanBag {
    id: BeanBagId,
    quantity: i64,
    /// Price in minor currency units (e.g. pence); `None` until set.
    price: Option<i64>,
    descriptor: Descriptor,
    last_restocked: Option<StockPeriod>,
}

impl BeanBag {
    /// Record without free-text information.
    pub fn new(
        quantity: i64,
        manufacturer: impl Into<String>,
        name: impl Into<String>,
        id: BeanBagId,
    ) -> Self {
        Self::with_information(quantity, manufacturer, name, id, String::new())
    }

    pub fn with_information(
        quantity: i64,
        manufacturer: impl Into<String>,
        name: impl Into<String>,
        id: BeanBagId,
        information: impl Into<String>,
    ) -> Self {
        Self::from_descriptor(id, quantity, Descriptor::new(manufacturer, name, information))
    }

    pub fn from_descriptor(id: BeanBagId, quantity: i64, descriptor: Descriptor) -> Self {
        Self {
            id,
            quantity,
            price: None,
            descriptor,
            last_restocked: None,
        }
    }

    pub fn id_typed(&self) -> &BeanBagId {
        &self.id
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn price(&self) -> Option<i64> {
        self.price
    }

    pub fn manufacturer(&self) -> &str {
        &self.descriptor.manufacturer
    }

    pub fn name(&self) -> &str {
        &self.descriptor.name
    }

    pub fn information(&self) -> &str {
        &self.descriptor.information
    }

    pub fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    pub fn last_restocked(&self) -> Option<StockPeriod> {
        self.last_restocked
    }

    pub fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }

    pub fn set_price(&mut self, price: i64) {
        self.price = Some(price);
    }

    pub fn set_id(&mut self, id: BeanBagId) {
        self.id = id;
    }

    pub(crate) fn set_last_restocked(&mut self, period: StockPeriod) {
        self.last_restocked = Some(period);
    }

    /// `true` unless manufacturer, name and information all match `other`.
    pub fn mismatched(&self, other: &BeanBag) -> bool {
        self.descriptor != other.descriptor
    }
}

impl Entity for BeanBag {
    type Id = BeanBagId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
