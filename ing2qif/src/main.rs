use clap::Parser;
use ing2qiflib::convert::convert_file;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "ing2qif",
    version,
    about = "Конвертация выписки ING (CSV) в QIF для GnuCash"
)]
struct Cli {
    /// CSV-файл с выпиской ING
    csv_file: PathBuf,

    /// Выходной QIF-файл (создаётся или перезаписывается)
    out: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = convert_file(&cli.csv_file, &cli.out) {
        eprintln!("ing2qif: {e}");
        std::process::exit(1);
    }
}
