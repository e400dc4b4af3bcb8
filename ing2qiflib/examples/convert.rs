use ing2qiflib::convert::convert;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Пример: CSV со stdin -> QIF в stdout
    convert(std::io::BufReader::new(std::io::stdin()), std::io::stdout())?;
    Ok(())
}
