//! Отображение ING → QIF и конвейер конвертации целиком.

use crate::{
    error::Result,
    formats::{ing::IngCsvReader, qif::QifWriter},
    model::{DebitCredit, IngEntry, QifEntry},
};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Чистое отображение одной записи: знак суммы задаёт направление.
pub fn to_qif(e: IngEntry) -> QifEntry {
    let amount = match e.dc {
        DebitCredit::Debit => -e.amount,
        DebitCredit::Credit => e.amount,
    };
    QifEntry {
        date: e.date,
        amount,
        payee: e.description,
        memo: e.memo,
    }
}

/// Переносит записи из `input` в `output` в исходном порядке и
/// возвращает их число. Первая ошибка прерывает конвертацию;
/// уже записанные блоки остаются в выводе.
pub fn convert<R: Read, W: Write>(input: R, output: W) -> Result<u64> {
    let reader = IngCsvReader::new(input)?;
    let mut writer = QifWriter::new(output)?;
    let mut count = 0u64;
    for entry in reader {
        writer.write_entry(&to_qif(entry?))?;
        count += 1;
    }
    writer.flush()?;
    Ok(count)
}

/// То же по путям; оба файла закрываются при выходе из функции
/// на любом исходе.
pub fn convert_file(csv_path: &Path, qif_path: &Path) -> Result<u64> {
    let input = BufReader::new(File::open(csv_path)?);
    let output = BufWriter::new(File::create(qif_path)?);
    convert(input, output)
}
