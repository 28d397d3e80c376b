pub mod classifier;
pub mod pricing;

pub use classifier::{classify, redemption_failure_reason, status_for, SustainerStatus};
pub use pricing::{display_amount, is_zero_decimal_currency, Pricing, ZERO_DECIMAL_CURRENCY_CODES};
