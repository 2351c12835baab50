//! Folding 3-hour samples into per-day and overall temperature ranges.

use std::collections::{HashMap, hash_map::Entry};

use chrono::NaiveDate;

use crate::model::{DailySummary, ForecastSample, TempRange};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    /// `None` when there were no samples at all.
    pub overall: Option<TempRange>,
    pub days: Vec<DailySummary>,
}

/// Groups samples by calendar date in a single pass.
///
/// Days come out in the order their first sample appears; they are never
/// re-sorted.
pub fn summarize(samples: &[ForecastSample]) -> Summary {
    let mut days: Vec<DailySummary> = Vec::new();
    let mut positions: HashMap<NaiveDate, usize> = HashMap::new();
    let mut overall: Option<TempRange> = None;

    for sample in samples {
        let date = sample.timestamp.date();
        let temp = sample.temperature;

        match positions.entry(date) {
            Entry::Occupied(slot) => {
                let day = &mut days[*slot.get()];
                day.high = day.high.max(temp);
                day.low = day.low.min(temp);
            }
            Entry::Vacant(slot) => {
                slot.insert(days.len());
                days.push(DailySummary { date, high: temp, low: temp });
            }
        }

        overall = Some(match overall {
            None => TempRange { high: temp, low: temp },
            Some(range) => TempRange { high: range.high.max(temp), low: range.low.min(temp) },
        });
    }

    Summary { overall, days }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn sample(ts: &str, temperature: f64) -> ForecastSample {
        ForecastSample {
            timestamp: NaiveDateTime::parse_from_str(ts, "%Y-%m-%d %H:%M:%S").unwrap(),
            temperature,
        }
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn empty_input_yields_empty_summary() {
        let summary = summarize(&[]);
        assert_eq!(summary.overall, None);
        assert!(summary.days.is_empty());
    }

    #[test]
    fn daily_range_bounds_every_sample_of_the_day() {
        let samples = vec![
            sample("2024-07-04 00:00:00", 71.2),
            sample("2024-07-04 03:00:00", 68.9),
            sample("2024-07-04 12:00:00", 88.4),
            sample("2024-07-04 21:00:00", 75.0),
        ];

        let summary = summarize(&samples);
        assert_eq!(summary.days.len(), 1);

        let day = &summary.days[0];
        assert_eq!(day.date, date("2024-07-04"));
        assert_eq!(day.high, 88.4);
        assert_eq!(day.low, 68.9);
        for s in &samples {
            assert!(day.high >= s.temperature);
            assert!(day.low <= s.temperature);
        }
    }

    #[test]
    fn overall_range_matches_daily_extremes() {
        let samples = vec![
            sample("2024-01-01 06:00:00", 40.0),
            sample("2024-01-01 15:00:00", 55.5),
            sample("2024-01-02 06:00:00", 28.3),
            sample("2024-01-02 15:00:00", 47.1),
            sample("2024-01-03 15:00:00", 61.0),
        ];

        let summary = summarize(&samples);
        let overall = summary.overall.expect("samples were given");

        let max_high = summary.days.iter().map(|d| d.high).fold(f64::MIN, f64::max);
        let min_low = summary.days.iter().map(|d| d.low).fold(f64::MAX, f64::min);
        assert_eq!(overall.high, max_high);
        assert_eq!(overall.low, min_low);
        assert_eq!(overall, TempRange { high: 61.0, low: 28.3 });
    }

    #[test]
    fn days_keep_first_seen_order() {
        let samples = vec![
            sample("2024-03-10 00:00:00", 50.0),
            sample("2024-03-09 21:00:00", 52.0),
            sample("2024-03-10 03:00:00", 49.0),
            sample("2024-03-11 00:00:00", 47.0),
        ];

        let summary = summarize(&samples);
        let dates: Vec<NaiveDate> = summary.days.iter().map(|d| d.date).collect();
        assert_eq!(dates, vec![date("2024-03-10"), date("2024-03-09"), date("2024-03-11")]);
        assert_eq!(summary.days[0].low, 49.0);
    }

    #[test]
    fn single_sample_seeds_both_ends() {
        let summary = summarize(&[sample("2024-05-05 09:00:00", 64.0)]);
        assert_eq!(summary.overall, Some(TempRange { high: 64.0, low: 64.0 }));
        assert_eq!(summary.days[0].high, summary.days[0].low);
    }
}
