use core::str::FromStr;

use serde::{Deserialize, Serialize};

use aanya_core::DomainError;

/// Garment size. The set is fixed and ordered.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Size {
    M,
    L,
    XL,
    XXL,
    XXXL,
}

impl Size {
    /// All sizes in display order.
    pub const ALL: [Size; 5] = [Size::M, Size::L, Size::XL, Size::XXL, Size::XXXL];

    pub fn label(&self) -> &'static str {
        match self {
            Size::M => "M",
            Size::L => "L",
            Size::XL => "XL",
            Size::XXL => "XXL",
            Size::XXXL => "XXXL",
        }
    }

    /// Position within [`Size::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Size::M => 0,
            Size::L => 1,
            Size::XL => 2,
            Size::XXL => 3,
            Size::XXXL => 4,
        }
    }
}

impl core::fmt::Display for Size {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Size {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Size::ALL
            .into_iter()
            .find(|size| size.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::validation(format!("unknown size: {wanted}")))
    }
}

/// Stock level of a single quantity.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockLevel {
    /// Nothing left.
    Out,
    /// Between 1 and 10 units.
    Low,
    /// More than 10 units.
    Good,
}

impl StockLevel {
    /// Highest quantity still considered low.
    pub const LOW_THRESHOLD: u32 = 10;

    /// Classify a quantity. Every other stock-level decision goes through here.
    pub fn classify(quantity: u32) -> Self {
        match quantity {
            0 => StockLevel::Out,
            1..=StockLevel::LOW_THRESHOLD => StockLevel::Low,
            _ => StockLevel::Good,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StockLevel::Out => "out",
            StockLevel::Low => "low",
            StockLevel::Good => "good",
        }
    }
}

impl core::fmt::Display for StockLevel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StockLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "out" => Ok(StockLevel::Out),
            "low" => Ok(StockLevel::Low),
            "good" => Ok(StockLevel::Good),
            other => Err(DomainError::validation(format!("unknown stock level: {other}"))),
        }
    }
}

/// Quantity on hand for each size.
///
/// Always holds exactly the five sizes; sizes missing from serialized input
/// default to 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SizeStock {
    #[serde(rename = "M", default)]
    m: u32,
    #[serde(rename = "L", default)]
    l: u32,
    #[serde(rename = "XL", default)]
    xl: u32,
    #[serde(rename = "XXL", default)]
    xxl: u32,
    #[serde(rename = "XXXL", default)]
    xxxl: u32,
}

impl SizeStock {
    /// Build from quantities in [`Size::ALL`] order.
    pub fn from_quantities(quantities: [u32; 5]) -> Self {
        let [m, l, xl, xxl, xxxl] = quantities;
        Self { m, l, xl, xxl, xxxl }
    }

    pub fn get(&self, size: Size) -> u32 {
        match size {
            Size::M => self.m,
            Size::L => self.l,
            Size::XL => self.xl,
            Size::XXL => self.xxl,
            Size::XXXL => self.xxxl,
        }
    }

    pub fn set(&mut self, size: Size, quantity: u32) {
        let slot = match size {
            Size::M => &mut self.m,
            Size::L => &mut self.l,
            Size::XL => &mut self.xl,
            Size::XXL => &mut self.xxl,
            Size::XXXL => &mut self.xxxl,
        };
        *slot = quantity;
    }

    pub fn with(mut self, size: Size, quantity: u32) -> Self {
        self.set(size, quantity);
        self
    }

    /// `(size, quantity)` pairs in size order.
    pub fn iter(&self) -> impl Iterator<Item = (Size, u32)> + '_ {
        Size::ALL.into_iter().map(move |size| (size, self.get(size)))
    }

    /// Whether at least one size classifies to `level`.
    pub fn any_at(&self, level: StockLevel) -> bool {
        self.iter().any(|(_, q)| StockLevel::classify(q) == level)
    }

    /// Units across all sizes.
    pub fn total(&self) -> u64 {
        self.iter().map(|(_, q)| u64::from(q)).sum()
    }
}
