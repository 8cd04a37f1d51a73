use std::fmt;

use serde::Serialize;

/// Subscription tiers sold through Stripe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanTier {
    ProMonthly,
    UnlimitedMonthly,
}

impl PlanTier {
    pub const ALL: [PlanTier; 2] = [PlanTier::ProMonthly, PlanTier::UnlimitedMonthly];

    pub fn as_str(self) -> &'static str {
        match self {
            PlanTier::ProMonthly => "pro_monthly",
            PlanTier::UnlimitedMonthly => "unlimited_monthly",
        }
    }
}

impl fmt::Display for PlanTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed mapping of plan tiers to Stripe price identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceCatalog {
    pro_monthly: String,
    unlimited_monthly: String,
}

impl PriceCatalog {
    pub fn new(pro_monthly: impl Into<String>, unlimited_monthly: impl Into<String>) -> Self {
        Self {
            pro_monthly: pro_monthly.into(),
            unlimited_monthly: unlimited_monthly.into(),
        }
    }

    pub fn price_id(&self, tier: PlanTier) -> &str {
        match tier {
            PlanTier::ProMonthly => &self.pro_monthly,
            PlanTier::UnlimitedMonthly => &self.unlimited_monthly,
        }
    }

    /// Reverse lookup, used when Stripe reports a price on a subscription.
    /// Unset (empty) price ids never match.
    pub fn tier_for_price(&self, price_id: &str) -> Option<PlanTier> {
        if price_id.is_empty() {
            return None;
        }
        PlanTier::ALL
            .into_iter()
            .find(|tier| self.price_id(*tier) == price_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (PlanTier, &str)> + '_ {
        PlanTier::ALL
            .into_iter()
            .map(move |tier| (tier, self.price_id(tier)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_both_tiers() {
        let catalog = PriceCatalog::new("price_pro", "price_unlimited");
        assert_eq!(catalog.price_id(PlanTier::ProMonthly), "price_pro");
        assert_eq!(catalog.price_id(PlanTier::UnlimitedMonthly), "price_unlimited");

        let keys: Vec<&str> = catalog.iter().map(|(tier, _)| tier.as_str()).collect();
        assert_eq!(keys, vec!["pro_monthly", "unlimited_monthly"]);
    }

    #[test]
    fn reverse_lookup() {
        let catalog = PriceCatalog::new("price_pro", "price_unlimited");
        assert_eq!(
            catalog.tier_for_price("price_unlimited"),
            Some(PlanTier::UnlimitedMonthly)
        );
        assert_eq!(catalog.tier_for_price("price_other"), None);
    }

    #[test]
    fn unset_prices_never_match() {
        let catalog = PriceCatalog::new("", "");
        assert_eq!(catalog.tier_for_price(""), None);
    }
}
