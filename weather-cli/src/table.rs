//! Fixed-width forecast table with alarm highlighting.

use chrono::{Datelike, NaiveDate};
use colored::{ColoredString, Colorize};
use shipping_weather_core::{AlarmThresholds, CityForecast};

/// Column geometry of the forecast table, in visible characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Width reserved for the row label (the postal code).
    pub indent: usize,
    /// Nominal width of a day cell.
    pub cell_width: usize,
    /// Gap after a cell of nominal width.
    pub spacing: usize,
}

impl Default for Layout {
    fn default() -> Self {
        Self { indent: 20, cell_width: 9, spacing: 7 }
    }
}

impl Layout {
    fn column(&self) -> usize {
        self.cell_width + self.spacing
    }

    fn padding(&self, visible_width: usize) -> String {
        " ".repeat(self.column().saturating_sub(visible_width))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TempBand {
    Cold,
    Normal,
    Hot,
}

/// Both thresholds are inclusive; `high` wins if they overlap.
pub fn classify(rounded: i64, alarms: &AlarmThresholds) -> TempBand {
    if rounded >= i64::from(alarms.high) {
        TempBand::Hot
    } else if rounded <= i64::from(alarms.low) {
        TempBand::Cold
    } else {
        TempBand::Normal
    }
}

/// `72.4` → `72°`, colored by band. Halves round to even.
pub fn format_temp(value: f64, alarms: &AlarmThresholds) -> ColoredString {
    let rounded = value.round_ties_even() as i64;
    let text = format!("{rounded}°");

    match classify(rounded, alarms) {
        TempBand::Hot => text.red(),
        TempBand::Cold => text.blue(),
        TempBand::Normal => text.normal(),
    }
}

pub fn ordinal(day: u32) -> String {
    let suffix = match day {
        4..=20 | 24..=30 => "th",
        _ => match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    };
    format!("{day}{suffix}")
}

pub fn weekday_label(date: NaiveDate) -> String {
    date.format("%A").to_string()
}

pub fn date_label(date: NaiveDate) -> String {
    format!("{} {}", date.format("%B"), ordinal(date.day()))
}

fn header_line(items: &[String], layout: &Layout) -> String {
    let mut line = " ".repeat(layout.indent);
    for item in items {
        line.push_str(item);
        line.push_str(&layout.padding(item.chars().count()));
    }
    line.push('\n');
    line
}

/// Render every city as one row, under headers taken from the first city's dates.
pub fn render(cities: &[CityForecast], alarms: &AlarmThresholds, layout: &Layout) -> String {
    let Some(first) = cities.first() else {
        return String::new();
    };

    let weekdays: Vec<String> = first.days.iter().map(|d| weekday_label(d.date)).collect();
    let dates: Vec<String> = first.days.iter().map(|d| date_label(d.date)).collect();

    let mut out = String::from("\n");
    out.push_str(&header_line(&weekdays, layout));
    out.push_str(&header_line(&dates, layout));
    out.push('\n');

    for city in cities {
        out.push_str(&city.city_name);
        out.push('\n');

        out.push_str(&city.postal_code);
        let label_width = city.postal_code.chars().count();
        out.push_str(&" ".repeat(layout.indent.saturating_sub(label_width).max(1)));

        for day in &city.days {
            let low = format_temp(day.low, alarms);
            let high = format_temp(day.high, alarms);
            // ColoredString derefs to the unstyled text.
            let visible = low.chars().count() + " - ".len() + high.chars().count();
            out.push_str(&format!("{low} - {high}{}", layout.padding(visible)));
        }
        out.push_str("\n\n");
    }
    out.push('\n');

    out
}
