//! Human-readable rendering of a fill estimate.

use super::FillResult;
use crate::shared::fmt::decimal::{display_cents, display_usd};
use crate::shared::fmt::num::display_shares;
use crate::shared::Side;
use std::fmt;

/// A fill estimate paired with the request it answers, ready to print.
///
/// ```text
/// You will pay approximately $6.25 at an average price of 42¢, filling 15 of 15 requested shares
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillSummary {
    pub side: Side,
    pub desired_shares: f64,
    pub result: FillResult,
}

impl FillSummary {
    pub fn new(side: Side, desired_shares: f64, result: &FillResult) -> Self {
        Self {
            side,
            desired_shares,
            result: *result,
        }
    }

    /// True when the book is too thin to fill the whole request.
    pub fn is_partial(&self) -> bool {
        !self.result.is_empty() && !self.result.is_complete(self.desired_shares)
    }
}

impl fmt::Display for FillSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(cents) = self.result.avg_price_cents else {
            return write!(
                f,
                "No liquidity available to {} {} shares",
                verb(self.side),
                display_shares(self.desired_shares)
            );
        };

        let action = match self.side {
            Side::Buy => "pay",
            Side::Sell => "receive",
        };

        write!(
            f,
            "You will {} approximately {} at an average price of {}, filling {} of {} requested shares",
            action,
            display_usd(&self.result.total_cost_usd()),
            display_cents(cents),
            display_shares(self.result.filled_shares),
            display_shares(self.desired_shares)
        )?;

        if self.is_partial() {
            write!(f, " (only partially fillable at current book depth)")?;
        }
        Ok(())
    }
}

fn verb(side: Side) -> &'static str {
    match side {
        Side::Buy => "buy",
        Side::Sell => "sell",
    }
}
