use crate::error::NrResult;
use crate::table::FrequencyTable;
use crate::util::normalize_name;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info, warn};

/// Earliest birth year included when building the given-name table.
const MIN_YEAR: u16 = 1950;

/// Where the census surname file is expected when no source is supplied.
pub const DEFAULT_SURNAME_PATH: &str = "data/last_names.csv";

/// Minimal surname distribution used when the census file is unreadable.
const FALLBACK_SURNAMES: [(&str, u64); 6] = [
    ("Smith", 2_442_977),
    ("Johnson", 1_932_812),
    ("Williams", 1_625_252),
    ("Brown", 1_437_026),
    ("Jones", 1_425_470),
    ("Garcia", 1_166_120),
];

/// Load per-year given-name files (`yobYYYY.txt`, lines `name,sex,count`)
/// from a directory, summing counts across sex and year. Files before
/// `MIN_YEAR` are ignored; malformed lines are skipped.
pub fn load_given_names<P: AsRef<Path>>(dir: P) -> NrResult<FrequencyTable> {
    let mut counts: HashMap<String, u64> = HashMap::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let file_name = entry.file_name();
        let Some(year) = parse_year_file(&file_name.to_string_lossy()) else {
            continue;
        };
        if year < MIN_YEAR {
            continue;
        }

        let file = File::open(entry.path())?;
        for line in BufReader::new(file).lines() {
            let line = line?;
            let mut fields = line.trim().split(',');
            let (Some(name), Some(_sex), Some(count)) =
                (fields.next(), fields.next(), fields.next())
            else {
                continue;
            };
            let Ok(count) = count.parse::<u64>() else {
                continue;
            };
            *counts.entry(normalize_name(name)).or_default() += count;
        }
    }

    let table = FrequencyTable::from_counts(counts);
    info!(
        "Loaded given names: {} unique, {} total",
        table.len(),
        table.total()
    );
    Ok(table)
}

fn parse_year_file(name: &str) -> Option<u16> {
    let digits = name.strip_prefix("yob")?.strip_suffix(".txt")?;
    if digits.len() == 4 && digits.bytes().all(|b| b.is_ascii_digit()) {
        digits.parse().ok()
    } else {
        None
    }
}

/// Load the surname table.
///
/// With a caller-supplied source, an unreadable file degrades to an empty
/// table (every lookup then takes the unseen-name path). Without one, the
/// default census file is tried and an unreadable file degrades to the
/// built-in fallback distribution. Construction never fails.
pub fn load_surnames<P: AsRef<Path>>(source: Option<P>) -> FrequencyTable {
    match source {
        Some(path) => match read_surname_csv(path.as_ref()) {
            Ok(table) => {
                info!(
                    "Loaded surnames: {} unique, {} total",
                    table.len(),
                    table.total()
                );
                table
            }
            Err(e) => {
                warn!(
                    "Surname source {:?} unreadable ({}); surname table is empty",
                    path.as_ref(),
                    e
                );
                FrequencyTable::empty()
            }
        },
        None => match read_surname_csv(Path::new(DEFAULT_SURNAME_PATH)) {
            Ok(table) => {
                info!(
                    "Loaded census surnames: {} unique, {} total",
                    table.len(),
                    table.total()
                );
                table
            }
            Err(e) => {
                warn!(
                    "Census surname data unavailable ({}); using built-in fallback",
                    e
                );
                fallback_surnames()
            }
        },
    }
}

/// One reader for both surname schemas, detected per row: 11 columns is a
/// census row (count in column 3, parsed as float and truncated), 2 columns
/// is a plain `name,count` row. Anything else — header rows included, since
/// their count column does not parse — is skipped.
fn read_surname_csv(path: &Path) -> NrResult<FrequencyTable> {
    let file = File::open(path)?;
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .from_reader(file);

    let mut counts: HashMap<String, u64> = HashMap::new();
    let mut skipped = 0usize;

    for record in rdr.records() {
        let Ok(record) = record else {
            skipped += 1;
            continue;
        };
        let parsed = match record.len() {
            11 => record[2].trim().parse::<f64>().ok().map(|c| c as u64),
            2 => record[1].trim().parse::<u64>().ok(),
            _ => None,
        };
        match parsed {
            Some(count) => {
                *counts.entry(normalize_name(&record[0])).or_default() += count;
            }
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        debug!("Skipped {} malformed surname rows", skipped);
    }
    Ok(FrequencyTable::from_counts(counts))
}

fn fallback_surnames() -> FrequencyTable {
    FrequencyTable::from_counts(
        FALLBACK_SURNAMES
            .iter()
            .map(|&(name, count)| (name.to_string(), count))
            .collect(),
    )
}
