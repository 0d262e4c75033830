use crate::types::Interferogram;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Days per year used for epoch spans
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Distinct acquisition dates of a set of interferograms.
///
/// `date`, `repeat` and `span` are parallel: entry `i` of each describes the
/// `i`-th date in ascending order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochList {
    pub date: Vec<NaiveDate>,
    /// Occurrences of each date across all master and slave dates
    pub repeat: Vec<usize>,
    /// Years elapsed since the first date
    pub span: Vec<f64>,
}

impl EpochList {
    pub fn len(&self) -> usize {
        self.date.len()
    }

    pub fn is_empty(&self) -> bool {
        self.date.is_empty()
    }
}

/// Collect epochs from the master and slave dates of `ifgs`
pub fn get_epochs<I: Interferogram>(ifgs: &[I]) -> EpochList {
    let masters = ifgs.iter().map(|i| i.master());
    let slaves = ifgs.iter().map(|i| i.slave());

    let mut counts: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for date in masters.chain(slaves) {
        *counts.entry(date).or_insert(0) += 1;
    }

    let (date, repeat): (Vec<NaiveDate>, Vec<usize>) = counts.into_iter().unzip();

    let span = match date.first() {
        Some(&first) => date
            .iter()
            .map(|d| (*d - first).num_days() as f64 / DAYS_PER_YEAR)
            .collect(),
        None => Vec::new(),
    };

    log::debug!(
        "{} epochs from {} interferograms, span {:.3} years",
        date.len(),
        ifgs.len(),
        span.last().copied().unwrap_or(0.0)
    );

    EpochList { date, repeat, span }
}
