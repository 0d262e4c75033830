use crate::types::IfgResult;
use std::fs;
use std::path::Path;

/// Parse a name list file into an ordered list of paths.
///
/// Each line is trimmed; blank lines are skipped. Order and duplicates are kept.
pub fn parse_namelist<P: AsRef<Path>>(path: P) -> IfgResult<Vec<String>> {
    log::info!("Reading name list: {}", path.as_ref().display());

    let content = fs::read_to_string(&path)?;
    let names: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect();

    log::debug!("Found {} entries in name list", names.len());
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::IfgError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_namelist_trims_and_keeps_order() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "  geo_060619-061002.tif\r\n\n\t\ngeo_060619-061002.tif\nb.tif   \n").unwrap();

        let names = parse_namelist(file.path()).unwrap();
        assert_eq!(
            names,
            vec!["geo_060619-061002.tif", "geo_060619-061002.tif", "b.tif"]
        );
    }

    #[test]
    fn test_missing_namelist() {
        let result = parse_namelist("/nonexistent/ifg.list");
        assert!(matches!(result, Err(IfgError::Io(_))));
    }
}
