//! Finance quote calculation and input validation.
//!
//! The arithmetic is exact Decimal division with no rounding; formatting a
//! monthly payment to two places is the host's job. Validation is split out
//! from calculation on purpose: the predicates are cheap enough to run on
//! every keystroke, while `calculate` assumes a caller that has already
//! gated its inputs.

use crate::types::Money;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Fraction of the vehicle price taken as deposit when none is given.
pub const DEFAULT_DEPOSIT_RATE: Decimal = dec!(0.10);
/// Loan length used when none is given.
pub const DEFAULT_TERM_MONTHS: u32 = 60;
/// Longest loan on offer.
pub const MAX_TERM_MONTHS: i64 = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinanceInputs {
    pub deposit: Money,
    /// Loan length in months.
    pub term: u32,
}

/// The computed outcome for one price/deposit/term triple. Immutable once
/// produced; `total_amount_of_credit` is exactly `on_the_road_price -
/// total_deposit` and `monthly_payment` is exactly the credit divided by the
/// number of payments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinanceQuote {
    pub on_the_road_price: Money,
    pub total_deposit: Money,
    pub total_amount_of_credit: Money,
    pub number_of_monthly_payments: u32,
    pub monthly_payment: Money,
}

/// A quote together with the inputs that produced it, so a reader of the
/// current-quote slot can tell which request it answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinanceResult {
    pub quote: FinanceQuote,
    pub inputs: FinanceInputs,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FinanceError {
    #[error("monthly payment is undefined for a term of zero months")]
    UndefinedTerm,
}

/// True iff the deposit is strictly positive and no more than the price.
/// A zero deposit is arithmetically fine in `calculate` but rejected here:
/// the predicate gates user input, and the policy demands a real deposit.
pub fn is_valid_deposit(vehicle_price: Money, deposit: Money) -> bool {
    deposit.value() > Decimal::ZERO && deposit <= vehicle_price
}

/// True iff the term is between one month and [`MAX_TERM_MONTHS`] inclusive.
/// Takes a signed candidate because raw user input can go negative.
pub fn is_valid_term(term: i64) -> bool {
    term > 0 && term <= MAX_TERM_MONTHS
}

/// Quote calculator. Its only state is the single slot holding the most
/// recently computed result, replaced wholesale on every successful
/// `calculate`.
#[derive(Debug, Clone, Default)]
pub struct FinanceCalculator {
    current: Option<FinanceResult>,
}

impl FinanceCalculator {
    pub fn new() -> Self {
        Self { current: None }
    }

    /// The most recently computed result, by value. `None` until the first
    /// successful `calculate`. A failed call leaves the slot as it was.
    pub fn current_quote(&self) -> Option<FinanceResult> {
        self.current
    }

    /// Compute a quote. Callers are expected to have run `is_valid_term`
    /// first; a zero term fails here rather than dividing by zero.
    pub fn calculate(
        &mut self,
        vehicle_price: Money,
        inputs: FinanceInputs,
    ) -> Result<FinanceResult, FinanceError> {
        if inputs.term == 0 {
            return Err(FinanceError::UndefinedTerm);
        }

        let credit = vehicle_price.sub(inputs.deposit);
        let monthly = Money::new(credit.value() / Decimal::from(inputs.term));

        let quote = FinanceQuote {
            on_the_road_price: vehicle_price,
            total_deposit: inputs.deposit,
            total_amount_of_credit: credit,
            number_of_monthly_payments: inputs.term,
            monthly_payment: monthly,
        };

        let result = FinanceResult { quote, inputs };
        self.current = Some(result);
        Ok(result)
    }

    /// Quote with the policy defaults: 10% deposit over 60 months.
    pub fn calculate_default(&mut self, vehicle_price: Money) -> Result<FinanceResult, FinanceError> {
        let inputs = FinanceInputs {
            deposit: vehicle_price.mul(DEFAULT_DEPOSIT_RATE),
            term: DEFAULT_TERM_MONTHS,
        };
        self.calculate(vehicle_price, inputs)
    }
}
