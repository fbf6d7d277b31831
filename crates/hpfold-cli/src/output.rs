use anyhow::Result;
use hpfold::core::models::chain::Chain;
use hpfold::workflows::search::SearchResult;
use std::fs::OpenOptions;
use std::path::Path;

pub fn print_summary(chain: &Chain, result: &SearchResult) {
    println!("sequence:  {chain}");
    println!("route:     {}", result.route());
    println!("score:     {}", result.score);
    if result.contacts.is_empty() {
        println!("contacts:  none");
    } else {
        let contacts: Vec<String> = result
            .contacts
            .iter()
            .map(|(i, j)| format!("{i}-{j}"))
            .collect();
        println!("contacts:  {}", contacts.join(", "));
    }
}

/// Appends one `algorithm,route,stability` row, writing the header first
/// when the file is empty or the target is stdout.
pub fn write_csv_row(target: &Path, algorithm: &str, result: &SearchResult) -> Result<()> {
    if target.as_os_str() == "-" {
        let mut writer = csv::Writer::from_writer(std::io::stdout());
        write_rows(&mut writer, algorithm, result, true)?;
        return Ok(());
    }

    let fresh = !target.exists() || target.metadata()?.len() == 0;
    let file = OpenOptions::new().create(true).append(true).open(target)?;
    let mut writer = csv::Writer::from_writer(file);
    write_rows(&mut writer, algorithm, result, fresh)?;
    Ok(())
}

fn write_rows<W: std::io::Write>(
    writer: &mut csv::Writer<W>,
    algorithm: &str,
    result: &SearchResult,
    header: bool,
) -> Result<()> {
    if header {
        writer.write_record(["algorithm", "route", "stability"])?;
    }
    writer.write_record([algorithm, &result.route(), &result.score.to_string()])?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hpfold::engine::config::SearchConfig;
    use hpfold::workflows::search::{Strategy, run};

    fn sample_result() -> (Chain, SearchResult) {
        let chain: Chain = "HPPH".parse().unwrap();
        let result = run(&chain, Strategy::Exhaustive, &SearchConfig::default()).unwrap();
        (chain, result)
    }

    #[test]
    fn csv_row_round_trips_route_and_score() {
        let (_, result) = sample_result();

        let mut buffer = Vec::new();
        {
            let mut writer = csv::Writer::from_writer(&mut buffer);
            write_rows(&mut writer, "exhaustive", &result, true).unwrap();
        }

        let mut reader = csv::Reader::from_reader(buffer.as_slice());
        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(&record[0], "exhaustive");
        assert_eq!(&record[1], result.route());
        assert_eq!(record[2].parse::<f64>().unwrap(), result.score);
    }

    #[test]
    fn header_is_omitted_on_append() {
        let (_, result) = sample_result();

        let mut buffer = Vec::new();
        {
            let mut writer = csv::Writer::from_writer(&mut buffer);
            write_rows(&mut writer, "exhaustive", &result, false).unwrap();
        }

        let text = String::from_utf8(buffer).unwrap();
        assert!(!text.contains("algorithm"));
        assert!(text.contains("exhaustive"));
    }
}
