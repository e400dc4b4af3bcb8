//! Доменные модели: строка выписки ING и запись QIF.

use chrono::NaiveDate;
use rust_decimal::Decimal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebitCredit {
    Debit,
    Credit,
}

/// Одна строка выписки ING. `amount` всегда неотрицательна;
/// знак появляется только при отображении в QIF.
#[derive(Debug, Clone, PartialEq)]
pub struct IngEntry {
    pub date: NaiveDate,
    pub description: String,
    pub account: String,
    pub counter_account: String,
    pub code: String,
    pub dc: DebitCredit,
    pub amount: Decimal,
    pub category: String,
    pub memo: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QifEntry {
    pub date: NaiveDate,
    pub amount: Decimal,
    pub payee: String,
    pub memo: String,
}
