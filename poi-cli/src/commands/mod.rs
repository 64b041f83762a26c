pub(crate) mod import;
pub(crate) mod list;
pub(crate) mod search;
pub(crate) mod stats;

use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use poi_core::Poi;
use rusqlite::Connection;

use crate::CliError;

pub(crate) fn open_db(db_path: &Path) -> Result<Connection, CliError> {
    poi_db::open_database(db_path).map_err(|e| {
        CliError::database(format!(
            "Failed to open database at {}: {}",
            db_path.display(),
            e
        ))
    })
}

/// Truncate a string to a maximum width in characters, appending "..." if needed.
pub(crate) fn truncate_str(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max > 3 {
        let head: String = s.chars().take(max - 3).collect();
        format!("{}...", head)
    } else {
        s.chars().take(max).collect()
    }
}

fn format_opt(value: Option<f64>, precision: usize) -> String {
    match value {
        Some(v) => format!("{:.*}", precision, v),
        None => "-".to_string(),
    }
}

/// Print PoIs as a table, or as a JSON array.
pub(crate) fn print_pois(pois: &[Poi], json: bool) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string_pretty(pois)?);
        return Ok(());
    }

    println!(
        "{}",
        format!(
            "{:>5}  {:<14} {:<28} {:<16} {:>10} {:>11} {:>6}",
            "ID", "External ID", "Name", "Category", "Lat", "Lon", "Rating"
        )
        .if_supports_color(Stdout, |t| t.bold()),
    );
    for poi in pois {
        println!(
            "{:>5}  {:<14} {:<28} {:<16} {:>10} {:>11} {:>6}",
            poi.id,
            truncate_str(&poi.external_id, 14),
            truncate_str(&poi.name, 28),
            truncate_str(&poi.category, 16),
            format_opt(poi.latitude, 5),
            format_opt(poi.longitude, 5),
            format_opt(poi.avg_rating, 2),
        );
    }
    println!("{} PoI(s)", pois.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("short", 10), "short");
        assert_eq!(truncate_str("exactly10!", 10), "exactly10!");
        assert_eq!(truncate_str("this is too long", 10), "this is...");
        assert_eq!(truncate_str("café olé", 5), "ca...");
        assert_eq!(truncate_str("abcdef", 2), "ab");
    }

    #[test]
    fn test_format_opt() {
        assert_eq!(format_opt(None, 2), "-");
        assert_eq!(format_opt(Some(14.0 / 3.0), 2), "4.67");
        assert_eq!(format_opt(Some(-20.25), 5), "-20.25000");
    }
}
