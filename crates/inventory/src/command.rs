use serde::{Deserialize, Serialize};

use crate::record::StockPeriod;

/// Command: AddBeanBags.
///
/// Raw caller input; nothing here is validated until the store handles it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddBeanBags {
    pub quantity: i64,
    pub manufacturer: String,
    pub name: String,
    pub id: String,
    pub information: Option<String>,
    pub intake: Option<StockPeriod>,
}

impl AddBeanBags {
    pub fn new(
        quantity: i64,
        manufacturer: impl Into<String>,
        name: impl Into<String>,
        id: impl Into<String>,
    ) -> Self {
        Self {
            quantity,
            manufacturer: manufacturer.into(),
            name: name.into(),
            id: id.into(),
            information: None,
            intake: None,
        }
    }

    pub fn with_information(mut self, information: impl Into<String>) -> Self {
        self.information = Some(information.into());
        self
    }

    pub fn with_intake(mut self, year: i16, month: u8) -> Self {
        self.intake = Some(StockPeriod::new(year, month));
        self
    }
}
