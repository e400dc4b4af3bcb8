use chrono::NaiveDate;
use ing2qiflib::{error::Ing2QifError, formats::ing::IngCsvReader, model::DebitCredit};
use rust_decimal::Decimal;
use std::io::Cursor;

#[test]
fn ing_read_minimal() {
    let input = "\
Datum,Naam / Omschrijving,Rekening,Tegenrekening,Code,Af Bij,Bedrag (EUR),Mutatiesoort,Mededelingen
20230115,Grocery Store,NL01INGB000,NL02ABNA111,ID,Af,\"12,34\",Groceries,weekly shop
20230131,Employer BV,NL01INGB000,NL03RABO222,OV,Bij,\"2500,00\",Salaris,january salary
";
    let entries: Vec<_> = IngCsvReader::new(Cursor::new(input))
        .expect("reader")
        .collect::<Result<_, _>>()
        .expect("parse");

    assert_eq!(entries.len(), 2);

    let e = &entries[0];
    assert_eq!(e.date, NaiveDate::from_ymd_opt(2023, 1, 15).unwrap());
    assert_eq!(e.description, "Grocery Store");
    assert_eq!(e.account, "NL01INGB000");
    assert_eq!(e.counter_account, "NL02ABNA111");
    assert_eq!(e.code, "ID");
    assert_eq!(e.dc, DebitCredit::Debit);
    assert_eq!(e.amount, Decimal::from_str_exact("12.34").unwrap());
    assert_eq!(e.category, "Groceries");
    assert_eq!(e.memo, "weekly shop");

    assert_eq!(entries[1].dc, DebitCredit::Credit);
    assert_eq!(entries[1].amount, Decimal::from_str_exact("2500.00").unwrap());
}

#[test]
fn missing_column_fails_before_first_record() {
    let input = "\
Datum,Naam / Omschrijving,Rekening
20230115,Grocery Store,NL01INGB000
";
    let err = IngCsvReader::new(Cursor::new(input)).err().expect("schema error");
    assert!(matches!(err, Ing2QifError::MissingColumn(_)));
}

#[test]
fn bad_date_is_fatal() {
    let input = "\
Datum,Naam / Omschrijving,Rekening,Tegenrekening,Code,Af Bij,Bedrag (EUR),Mutatiesoort,Mededelingen
2023-01-15,Grocery Store,NL01INGB000,NL02ABNA111,ID,Af,\"12,34\",Groceries,weekly shop
";
    let mut reader = IngCsvReader::new(Cursor::new(input)).expect("reader");
    let err = reader.next().expect("one row").unwrap_err();
    assert!(matches!(err, Ing2QifError::DateFormat { row: 1, .. }));
}

#[test]
fn unknown_direction_is_fatal() {
    let input = "\
Datum,Naam / Omschrijving,Rekening,Tegenrekening,Code,Af Bij,Bedrag (EUR),Mutatiesoort,Mededelingen
20230115,Grocery Store,NL01INGB000,NL02ABNA111,ID,Xx,\"12,34\",Groceries,weekly shop
";
    let mut reader = IngCsvReader::new(Cursor::new(input)).expect("reader");
    let err = reader.next().expect("one row").unwrap_err();
    assert!(matches!(err, Ing2QifError::InvalidDirection { row: 1, .. }));
}

#[test]
fn dot_decimal_amount_is_rejected() {
    let input = "\
Datum,Naam / Omschrijving,Rekening,Tegenrekening,Code,Af Bij,Bedrag (EUR),Mutatiesoort,Mededelingen
20230115,Grocery Store,NL01INGB000,NL02ABNA111,ID,Af,12.34,Groceries,weekly shop
";
    let mut reader = IngCsvReader::new(Cursor::new(input)).expect("reader");
    let err = reader.next().expect("one row").unwrap_err();
    assert!(matches!(err, Ing2QifError::AmountFormat { row: 1, .. }));
}
