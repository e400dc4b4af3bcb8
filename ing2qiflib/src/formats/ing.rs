//! CSV-выписка ING. Ожидаемые заголовки:
//! Datum,Naam / Omschrijving,Rekening,Tegenrekening,Code,Af Bij,Bedrag (EUR),Mutatiesoort,Mededelingen

use crate::{
    error::{Ing2QifError, Result},
    model::{DebitCredit, IngEntry},
};
use chrono::NaiveDate;
use csv::{DeserializeRecordsIntoIter, ReaderBuilder};
use rust_decimal::Decimal;
use std::io::Read;

const COLUMNS: [&str; 9] = [
    "Datum",
    "Naam / Omschrijving",
    "Rekening",
    "Tegenrekening",
    "Code",
    "Af Bij",
    "Bedrag (EUR)",
    "Mutatiesoort",
    "Mededelingen",
];

#[derive(serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Datum")]
    date: String,
    #[serde(rename = "Naam / Omschrijving")]
    description: String,
    #[serde(rename = "Rekening")]
    account: String,
    #[serde(rename = "Tegenrekening")]
    counter_account: String,
    #[serde(rename = "Code")]
    code: String,
    #[serde(rename = "Af Bij")]
    direction: String,
    #[serde(rename = "Bedrag (EUR)")]
    amount: String,
    #[serde(rename = "Mutatiesoort")]
    category: String,
    #[serde(rename = "Mededelingen")]
    memo: String,
}

/// Ленивый однопроходный читатель: одна строка файла за один `next()`.
pub struct IngCsvReader<R> {
    rows: DeserializeRecordsIntoIter<R, CsvRow>,
    row: u64,
}

impl<R: Read> IngCsvReader<R> {
    /// Проверяет схему по заголовку до выдачи первой записи.
    pub fn new(r: R) -> Result<Self> {
        let mut rdr = ReaderBuilder::new().from_reader(r);
        let headers = rdr.headers()?;
        for col in COLUMNS {
            if !headers.iter().any(|h| h == col) {
                return Err(Ing2QifError::MissingColumn(col));
            }
        }
        Ok(Self {
            rows: rdr.into_deserialize(),
            row: 0,
        })
    }
}

impl<R: Read> Iterator for IngCsvReader<R> {
    type Item = Result<IngEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        let rec = self.rows.next()?;
        self.row += 1;
        Some(to_entry(self.row, rec))
    }
}

fn to_entry(row: u64, rec: csv::Result<CsvRow>) -> Result<IngEntry> {
    let r = rec?;
    Ok(IngEntry {
        date: parse_date(row, &r.date)?,
        description: r.description,
        account: r.account,
        counter_account: r.counter_account,
        code: r.code,
        dc: parse_dc(row, &r.direction)?,
        amount: parse_amount(row, &r.amount)?,
        category: r.category,
        memo: r.memo,
    })
}

/// Дата строго в виде восьми цифр YYYYMMDD.
fn parse_date(row: u64, s: &str) -> Result<NaiveDate> {
    if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Ing2QifError::DateFormat {
            row,
            value: s.to_string(),
        });
    }
    NaiveDate::parse_from_str(s, "%Y%m%d").map_err(|_| Ing2QifError::DateFormat {
        row,
        value: s.to_string(),
    })
}

fn parse_dc(row: u64, s: &str) -> Result<DebitCredit> {
    match s {
        "Af" => Ok(DebitCredit::Debit),
        "Bij" => Ok(DebitCredit::Credit),
        _ => Err(Ing2QifError::InvalidDirection {
            row,
            value: s.to_string(),
        }),
    }
}

/// Сумма в локальной записи с запятой ("12,34"); точка — ошибка формата.
fn parse_amount(row: u64, s: &str) -> Result<Decimal> {
    let bad = || Ing2QifError::AmountFormat {
        row,
        value: s.to_string(),
    };
    if s.contains('.') {
        return Err(bad());
    }
    let amount = Decimal::from_str_exact(&s.replace(',', ".")).map_err(|_| bad())?;
    if amount.is_sign_negative() {
        return Err(bad());
    }
    Ok(amount)
}
