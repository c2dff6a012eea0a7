use namerank_core::loader::{load_given_names, load_surnames};
use std::io::Write;
use std::path::PathBuf;
use tempfile::tempdir;

// --- GIVEN NAME TESTS ---

#[test]
fn sums_counts_across_sex_and_year() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("yob1990.txt"),
        "Mary,F,100\nJohn,M,300\nJohn,F,5\n",
    )
    .unwrap();
    std::fs::write(dir.path().join("yob2000.txt"), "John,M,200\n").unwrap();

    let table = load_given_names(dir.path()).unwrap();
    assert_eq!(table.count("John"), 505);
    assert_eq!(table.count("Mary"), 100);
    assert_eq!(table.total(), 605);
}

#[test]
fn ignores_years_before_1950_and_stray_files() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("yob1880.txt"), "Minnie,F,1000\n").unwrap();
    std::fs::write(dir.path().join("yob1990.txt"), "John,M,10\n").unwrap();
    std::fs::write(dir.path().join("readme.txt"), "not,a,year\n").unwrap();
    std::fs::write(dir.path().join("yobXXXX.txt"), "Bad,F,1\n").unwrap();

    let table = load_given_names(dir.path()).unwrap();
    assert_eq!(table.count("Minnie"), 0);
    assert_eq!(table.count("John"), 10);
    assert_eq!(table.total(), 10);
}

#[test]
fn skips_malformed_given_name_lines() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("yob1990.txt"),
        "John,M,10\ngarbage\nJane,F,notanumber\nJane,F,7\n",
    )
    .unwrap();

    let table = load_given_names(dir.path()).unwrap();
    assert_eq!(table.count("John"), 10);
    assert_eq!(table.count("Jane"), 7);
}

#[test]
fn normalizes_given_name_keys() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("yob1990.txt"), "MARY,F,4\nmary,F,6\n").unwrap();

    let table = load_given_names(dir.path()).unwrap();
    assert_eq!(table.count("Mary"), 10);
    assert!(!table.contains("MARY"));
}

#[test]
fn missing_given_name_directory_is_an_error() {
    let missing = PathBuf::from("/definitely/not/here");
    assert!(load_given_names(&missing).is_err());
}

// --- SURNAME TESTS ---

#[test]
fn reads_census_schema_rows() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "name,rank,count,prop100k,cum_prop100k,pctwhite,pctblack,pctapi,pctaian,pct2prace,pcthispanic"
    )
    .unwrap();
    writeln!(
        file,
        "SMITH,1,2442977.0,828.19,828.19,70.9,23.11,0.5,0.89,2.19,2.4"
    )
    .unwrap();
    writeln!(
        file,
        "JOHNSON,2,1932812.5,655.24,1483.42,58.97,34.63,0.54,0.94,2.56,2.36"
    )
    .unwrap();

    let table = load_surnames(Some(file.path()));
    // Counts parse as floats and truncate; keys normalize.
    assert_eq!(table.count("Smith"), 2_442_977);
    assert_eq!(table.count("Johnson"), 1_932_812);
    assert!(!table.contains("SMITH"));
}

#[test]
fn reads_simple_two_column_rows() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "name,count").unwrap();
    writeln!(file, "Nakamura,120").unwrap();
    writeln!(file, "o'neill,80").unwrap();

    let table = load_surnames(Some(file.path()));
    assert_eq!(table.count("Nakamura"), 120);
    assert_eq!(table.count("O'neill"), 80);
    assert_eq!(table.total(), 200);
}

#[test]
fn detects_schema_per_row_and_skips_the_rest() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "Garcia,100").unwrap();
    writeln!(
        file,
        "JONES,5,1425470,483.24,1966.66,55.19,38.48,0.44,1.0,2.61,2.29"
    )
    .unwrap();
    writeln!(file, "too,many,columns,here").unwrap();

    let table = load_surnames(Some(file.path()));
    assert_eq!(table.count("Garcia"), 100);
    assert_eq!(table.count("Jones"), 1_425_470);
    assert_eq!(table.len(), 2);
}

#[test]
fn unreadable_custom_source_degrades_to_an_empty_table() {
    let table = load_surnames(Some(PathBuf::from("/no/such/surnames.csv")));
    assert!(table.is_empty());
    assert_eq!(table.total(), 0);
    assert_eq!(table.frequency("Smith"), 0.0);
}

#[test]
fn missing_census_source_falls_back_to_builtin_distribution() {
    // No data/last_names.csv exists relative to the test cwd.
    let table = load_surnames::<PathBuf>(None);
    assert_eq!(table.len(), 6);
    assert_eq!(table.count("Smith"), 2_442_977);
    assert_eq!(table.count("Garcia"), 1_166_120);
    assert_eq!(table.total(), 10_029_657);
}
