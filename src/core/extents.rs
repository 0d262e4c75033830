use crate::io::config::ProcessingParams;
use crate::types::{ExtentField, IfgError, IfgResult, Interferogram};

/// Validate origin, size and pixel steps across interferograms.
///
/// Returns the first field whose values are not identical for every
/// interferogram, or `None` when all extents match. Values are compared
/// exactly.
pub fn check_xy_extents<I: Interferogram>(ifgs: &[I]) -> Option<ExtentField> {
    let first = ifgs.first()?;

    ExtentField::ALL.iter().copied().find(|&field| {
        let reference = first.extent(field);
        ifgs.iter().any(|ifg| ifg.extent(field) != reference)
    })
}

/// Check that interferograms can be prepared together.
///
/// Fails with [`IfgError::ExtentMismatch`] when the extents disagree.
pub fn prepare_ifgs<I: Interferogram>(ifgs: &[I], params: &ProcessingParams) -> IfgResult<()> {
    if let Some(field) = check_xy_extents(ifgs) {
        log::warn!("{} differs between supplied interferograms", field);
        return Err(IfgError::ExtentMismatch(field));
    }

    log::info!(
        "{} interferograms share a common extent (crop option: {:?}, looks: {}x{})",
        ifgs.len(),
        params.crop_option,
        params.ifg_looks_x,
        params.ifg_looks_y
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::IfgHeader;
    use chrono::NaiveDate;

    fn header() -> IfgHeader {
        let master = NaiveDate::from_ymd_opt(2006, 6, 19).unwrap();
        let slave = NaiveDate::from_ymd_opt(2006, 10, 2).unwrap();
        IfgHeader::new(master, slave).with_geometry((150.91, -34.17), (47, 72), (0.000833, -0.000833))
    }

    #[test]
    fn test_matching_extents() {
        let ifgs = vec![header(), header(), header()];
        assert_eq!(check_xy_extents(&ifgs), None);
        assert!(prepare_ifgs(&ifgs, &ProcessingParams::default()).is_ok());
    }

    #[test]
    fn test_empty_and_single() {
        assert_eq!(check_xy_extents::<IfgHeader>(&[]), None);
        assert_eq!(check_xy_extents(&[header()]), None);
    }

    #[test]
    fn test_each_field_reported() {
        for field in ExtentField::ALL {
            let mut odd = header();
            match field {
                ExtentField::XFirst => odd.x_first += 0.1,
                ExtentField::YFirst => odd.y_first += 0.1,
                ExtentField::Width => odd.width += 1,
                ExtentField::FileLength => odd.file_length += 1,
                ExtentField::XStep => odd.x_step *= 2.0,
                ExtentField::YStep => odd.y_step *= 2.0,
            }

            let ifgs = vec![header(), header(), odd];
            assert_eq!(check_xy_extents(&ifgs), Some(field));
        }
    }

    #[test]
    fn test_first_mismatch_wins() {
        let mut odd = header();
        odd.y_step = 1.0;
        odd.width = 10;

        assert_eq!(check_xy_extents(&[header(), odd]), Some(ExtentField::Width));
    }

    #[test]
    fn test_prepare_reports_field() {
        let mut odd = header();
        odd.x_first = 0.0;

        let err = prepare_ifgs(&[header(), odd], &ProcessingParams::default()).unwrap_err();
        assert!(matches!(err, IfgError::ExtentMismatch(ExtentField::XFirst)));
        assert_eq!(err.to_string(), "X_FIRST unequal for supplied interferograms");
    }
}
