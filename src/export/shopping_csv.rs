use std::io;
use std::path::Path;

use crate::error::Result;
use crate::models::ShoppingListItem;

fn write_rows<W: io::Write>(wtr: &mut csv::Writer<W>, list: &[ShoppingListItem]) -> Result<()> {
    wtr.write_record(["name", "total", "unit"])?;
    for item in list {
        wtr.write_record([
            item.name.clone(),
            format!("{:.0}", item.total),
            item.unit.clone(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write the shopping list as CSV, totals rounded to whole units.
pub fn write_shopping_list_csv(list: &[ShoppingListItem], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    write_rows(&mut wtr, list)
}

/// Render the shopping list as a CSV string.
pub fn shopping_list_csv_string(list: &[ShoppingListItem]) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    write_rows(&mut wtr, list)?;
    let bytes = wtr
        .into_inner()
        .map_err(|e| io::Error::other(e.to_string()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, total: f64) -> ShoppingListItem {
        ShoppingListItem {
            id: name.to_lowercase(),
            name: name.to_string(),
            total,
            unit: "g".to_string(),
        }
    }

    #[test]
    fn test_csv_rows() {
        let list = vec![item("Brown Rice", 374.6), item("Kale, curly", 100.0)];
        let csv = shopping_list_csv_string(&list).unwrap();
        assert_eq!(csv, "name,total,unit\nBrown Rice,375,g\n\"Kale, curly\",100,g\n");
    }

    #[test]
    fn test_csv_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        write_shopping_list_csv(&[item("Quinoa", 250.0)], file.path()).unwrap();
        let content = std::fs::read_to_string(file.path()).unwrap();
        assert!(content.starts_with("name,total,unit\n"));
        assert!(content.contains("Quinoa,250,g"));
    }
}
