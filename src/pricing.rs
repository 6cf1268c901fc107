/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Pricing model for the plan cards and the usage calculator.
//!
//! The recommendation rule and the usage-based estimate are pure functions
//! over a clamped usage input, so the section components stay free of
//! arithmetic.

/// Slider bounds for the calculator inputs.
pub const AI_WORDS_MIN: u32 = 10_000;
pub const AI_WORDS_MAX: u32 = 500_000;
pub const AI_WORDS_STEP: u32 = 5_000;
pub const USER_SEATS_MIN: u32 = 1;
pub const USER_SEATS_MAX: u32 = 50;

/// Professional-tier baseline the estimate is anchored to.
const ESTIMATE_BASE: f64 = 99.0;
const WORDS_INCLUDED: f64 = 50_000.0;
const SEATS_INCLUDED: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillingPeriod {
    Annual,
    Monthly,
}

impl BillingPeriod {
    pub fn caption(self) -> &'static str {
        match self {
            BillingPeriod::Annual => "per month, billed yearly",
            BillingPeriod::Monthly => "per month",
        }
    }
}

/// The three fixed plans, in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    Starter,
    Professional,
    Enterprise,
}

impl Tier {
    pub fn name(self) -> &'static str {
        match self {
            Tier::Starter => "Starter",
            Tier::Professional => "Professional",
            Tier::Enterprise => "Enterprise",
        }
    }

    /// Sticker price in dollars per month, `None` for custom pricing.
    pub fn monthly_price(self, period: BillingPeriod) -> Option<u32> {
        match (self, period) {
            (Tier::Starter, BillingPeriod::Annual) => Some(29),
            (Tier::Starter, BillingPeriod::Monthly) => Some(35),
            (Tier::Professional, BillingPeriod::Annual) => Some(99),
            (Tier::Professional, BillingPeriod::Monthly) => Some(119),
            (Tier::Enterprise, _) => None,
        }
    }

    /// Dollars saved per year when billed annually.
    pub fn annual_savings(self) -> Option<u32> {
        match self {
            Tier::Starter => Some(72),
            Tier::Professional => Some(240),
            Tier::Enterprise => None,
        }
    }

    /// Words and seats included in the plan, quoted under the calculator.
    pub fn included(self) -> Option<(u32, u32)> {
        match self {
            Tier::Starter => Some((10_000, 3)),
            Tier::Professional => Some((50_000, 10)),
            Tier::Enterprise => None,
        }
    }
}

/// Calculator input. Values are clamped to the slider bounds on
/// construction, so every function over it is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsageInput {
    pub ai_words: u32,
    pub user_seats: u32,
}

impl UsageInput {
    pub fn new(ai_words: u32, user_seats: u32) -> Self {
        Self {
            ai_words: ai_words.clamp(AI_WORDS_MIN, AI_WORDS_MAX),
            user_seats: user_seats.clamp(USER_SEATS_MIN, USER_SEATS_MAX),
        }
    }
}

impl Default for UsageInput {
    fn default() -> Self {
        Self::new(50_000, 5)
    }
}

/// Disjunctive threshold classifier, highest tier checked first.
pub fn recommend(usage: UsageInput) -> Tier {
    if usage.ai_words > 100_000 || usage.user_seats > 15 {
        Tier::Enterprise
    } else if usage.ai_words > 20_000 || usage.user_seats > 5 {
        Tier::Professional
    } else {
        Tier::Starter
    }
}

/// Usage-based monthly estimate: the Professional base plus $5 per extra
/// 10k words beyond 50k and $10 per seat beyond 10. Overage terms never go
/// negative, so usage below the baseline prices at the base.
pub fn custom_price(usage: UsageInput) -> f64 {
    let word_overage = ((usage.ai_words as f64 - WORDS_INCLUDED) / 10_000.0 * 5.0).max(0.0);
    let seat_overage = ((usage.user_seats as f64 - SEATS_INCLUDED) * 10.0).max(0.0);
    ESTIMATE_BASE + word_overage + seat_overage
}

/// Renders `1234567` as `"1,234,567"` for slider readouts.
pub fn format_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Dollar string for the estimate, whole dollars rounded to the nearest.
pub fn format_dollars(amount: f64) -> String {
    format!("${}", format_thousands(amount.round() as u32))
}

/// Static reference data behind the three plan cards.
pub struct PlanCard {
    pub tier: Tier,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub cta: &'static str,
    pub popular: bool,
    pub featured: bool,
}

pub static PLANS: [PlanCard; 3] = [
    PlanCard {
        tier: Tier::Starter,
        description: "Perfect for small teams getting started with AI marketing.",
        features: &[
            "10,000 AI words/month",
            "Basic analytics dashboard",
            "3 user seats included",
            "Email support (48h response)",
            "5 automation workflows",
            "Standard templates",
        ],
        cta: "Get Started",
        popular: false,
        featured: false,
    },
    PlanCard {
        tier: Tier::Professional,
        description: "For growing businesses scaling marketing operations.",
        features: &[
            "50,000 AI words/month",
            "Advanced analytics + reports",
            "10 user seats included",
            "Priority support (24h response)",
            "Unlimited workflows",
            "API access",
            "Custom templates",
            "A/B testing tools",
        ],
        cta: "Start Free Trial",
        popular: true,
        featured: false,
    },
    PlanCard {
        tier: Tier::Enterprise,
        description: "For organizations with complex requirements.",
        features: &[
            "Unlimited AI words",
            "Premium analytics + predictions",
            "Unlimited seats",
            "24/7 dedicated support",
            "Advanced automation",
            "SSO & SAML",
            "Custom AI models",
            "Dedicated account manager",
            "On-premise options",
        ],
        cta: "Contact Sales",
        popular: false,
        featured: true,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starter_within_both_thresholds() {
        assert_eq!(recommend(UsageInput::new(10_000, 1)), Tier::Starter);
        assert_eq!(recommend(UsageInput::new(20_000, 5)), Tier::Starter);
    }

    #[test]
    fn test_professional_when_either_threshold_crossed() {
        assert_eq!(recommend(UsageInput::new(25_000, 1)), Tier::Professional);
        assert_eq!(recommend(UsageInput::new(10_000, 6)), Tier::Professional);
        assert_eq!(recommend(UsageInput::new(100_000, 15)), Tier::Professional);
    }

    #[test]
    fn test_enterprise_overrides_regardless_of_other_value() {
        assert_eq!(recommend(UsageInput::new(105_000, 1)), Tier::Enterprise);
        assert_eq!(recommend(UsageInput::new(10_000, 16)), Tier::Enterprise);
        assert_eq!(recommend(UsageInput::new(500_000, 50)), Tier::Enterprise);
    }

    #[test]
    fn test_custom_price_at_baseline() {
        assert_eq!(custom_price(UsageInput::new(50_000, 10)), 99.0);
    }

    #[test]
    fn test_custom_price_word_overage() {
        assert_eq!(custom_price(UsageInput::new(60_000, 10)), 104.0);
    }

    #[test]
    fn test_custom_price_seat_overage() {
        assert_eq!(custom_price(UsageInput::new(50_000, 12)), 119.0);
    }

    #[test]
    fn test_custom_price_never_discounts_below_base() {
        assert_eq!(custom_price(UsageInput::new(10_000, 1)), 99.0);
    }

    #[test]
    fn test_usage_input_clamps_to_slider_bounds() {
        let usage = UsageInput::new(1_000_000, 200);
        assert_eq!(usage.ai_words, AI_WORDS_MAX);
        assert_eq!(usage.user_seats, USER_SEATS_MAX);
        let usage = UsageInput::new(0, 0);
        assert_eq!(usage.ai_words, AI_WORDS_MIN);
        assert_eq!(usage.user_seats, USER_SEATS_MIN);
    }

    #[test]
    fn test_sticker_prices() {
        assert_eq!(Tier::Starter.monthly_price(BillingPeriod::Annual), Some(29));
        assert_eq!(Tier::Starter.monthly_price(BillingPeriod::Monthly), Some(35));
        assert_eq!(
            Tier::Professional.monthly_price(BillingPeriod::Annual),
            Some(99)
        );
        assert_eq!(
            Tier::Professional.monthly_price(BillingPeriod::Monthly),
            Some(119)
        );
        assert_eq!(Tier::Enterprise.monthly_price(BillingPeriod::Annual), None);
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(500), "500");
        assert_eq!(format_thousands(50_000), "50,000");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn test_format_dollars_rounds_fractional_estimates() {
        // 55k words is half a word-overage step
        assert_eq!(format_dollars(custom_price(UsageInput::new(55_000, 10))), "$102");
    }
}
