//! QIF (Quicken Interchange Format), счёт типа Bank.
//! Запись: T<сумма> / D<MM/DD/YYYY> / P<получатель> / M<примечание> / ^

use crate::{error::Result, model::QifEntry};
use std::io::Write;

pub struct QifWriter<W> {
    w: W,
}

impl<W: Write> QifWriter<W> {
    /// Сразу пишет обязательный заголовок `!Type:Bank`, даже если
    /// записей не будет вовсе.
    pub fn new(mut w: W) -> Result<Self> {
        w.write_all(b"!Type:Bank\n")?;
        Ok(Self { w })
    }

    pub fn write_entry(&mut self, e: &QifEntry) -> Result<()> {
        use std::fmt::Write as FmtWrite;
        // блок собирается целиком и уходит одним write_all
        let mut s = String::new();
        let _ = writeln!(s, "T{}", e.amount);
        let _ = writeln!(s, "D{}", e.date.format("%m/%d/%Y"));
        let _ = writeln!(s, "P{}", e.payee);
        let _ = writeln!(s, "M{}", e.memo);
        let _ = writeln!(s, "^");
        self.w.write_all(s.as_bytes())?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.w.flush()?;
        Ok(())
    }
}
