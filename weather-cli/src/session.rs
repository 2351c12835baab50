//! The interactive read-dispatch loop.

use std::{io::Write, time::Duration};

use anyhow::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use inquire::InquireError;
use shipping_weather_core::{AlarmThresholds, ConfigStore, Error, ForecastProvider, fetch_forecasts};
use tracing::warn;

use crate::{
    command::Command,
    table::{Layout, render},
};

pub const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

/// Source of input lines for the loop.
pub trait LineReader {
    /// Next line, or `None` once the user closes input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Terminal prompts via `inquire`; Esc and Ctrl-C close input.
#[derive(Debug, Default)]
pub struct InquireReader;

impl LineReader for InquireReader {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match inquire::Text::new(prompt).prompt() {
            Ok(line) => Ok(Some(line)),
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

/// Startup values handed to the loop.
#[derive(Debug, Clone)]
pub struct Settings {
    pub default_postal_codes: Vec<String>,
    pub layout: Layout,
    pub show_spinner: bool,
}

/// Alarms from the config store. A malformed config is reported and the defaults are used.
pub fn initial_alarms<W: Write>(store: &ConfigStore, out: &mut W) -> Result<AlarmThresholds> {
    match store.alarms() {
        Ok(alarms) => Ok(alarms),
        Err(err @ Error::ConfigParse { .. }) => {
            warn!(error = %err, "ignoring malformed config");
            writeln!(out, "{}", format!("{err}. Using default alarm temps.").red())?;
            Ok(AlarmThresholds::default())
        }
        Err(err) => Err(err.into()),
    }
}

pub struct Session<'a> {
    settings: Settings,
    store: ConfigStore,
    provider: &'a dyn ForecastProvider,
    alarms: AlarmThresholds,
}

impl<'a> Session<'a> {
    pub fn new(
        settings: Settings,
        store: ConfigStore,
        provider: &'a dyn ForecastProvider,
        alarms: AlarmThresholds,
    ) -> Self {
        Self { settings, store, provider, alarms }
    }

    #[cfg(test)]
    pub fn alarms(&self) -> AlarmThresholds {
        self.alarms
    }

    /// Run until the user quits or input closes.
    pub async fn run<R, W>(&mut self, input: &mut R, out: &mut W) -> Result<()>
    where
        R: LineReader + ?Sized,
        W: Write + ?Sized,
    {
        writeln!(out, "{} - {}", "Shipping Weather".bold().yellow(), VERSION.dimmed())?;
        write_alarm_prompt(out, &self.alarms)?;

        while let Some(line) = input.read_line(">")? {
            match Command::parse(&line, &self.settings.default_postal_codes) {
                Command::Quit => break,
                Command::ChangeAlarms => {
                    self.change_alarms(input, out)?;
                    write_alarm_prompt(out, &self.alarms)?;
                }
                Command::Lookup(codes) => self.lookup(&codes, out).await?,
            }
            out.flush()?;
        }

        Ok(())
    }

    fn change_alarms<R, W>(&mut self, input: &mut R, out: &mut W) -> Result<()>
    where
        R: LineReader + ?Sized,
        W: Write + ?Sized,
    {
        writeln!(out)?;
        let Some(low) = read_threshold(input, out, "Low temp alarm:")? else {
            return Ok(());
        };
        let Some(high) = read_threshold(input, out, "High temp alarm:")? else {
            return Ok(());
        };

        self.alarms = AlarmThresholds { low, high };
        if let Err(err) = self.store.save_alarms(&self.alarms) {
            warn!(error = %err, "alarm temps not persisted");
            writeln!(out, "{}", format!("Could not save alarm temps: {err}").red())?;
        }

        Ok(())
    }

    async fn lookup<W>(&self, codes: &[String], out: &mut W) -> Result<()>
    where
        W: Write + ?Sized,
    {
        let spinner = self.settings.show_spinner.then(fetch_spinner);
        let batch = fetch_forecasts(self.provider, codes).await;
        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }
        let batch = batch?;

        for rejection in &batch.rejected {
            writeln!(out, "\n{} {rejection}", ">".red())?;
        }
        write!(out, "{}", render(&batch.cities, &self.alarms, &self.settings.layout))?;

        Ok(())
    }
}

/// `None` when input closed or the value was not an integer.
fn read_threshold<R, W>(input: &mut R, out: &mut W, prompt: &str) -> Result<Option<i32>>
where
    R: LineReader + ?Sized,
    W: Write + ?Sized,
{
    let Some(line) = input.read_line(prompt)? else {
        return Ok(None);
    };

    match line.trim().parse::<i32>() {
        Ok(value) => Ok(Some(value)),
        Err(_) => {
            writeln!(out, "Invalid input. Please enter an integer.")?;
            Ok(None)
        }
    }
}

fn write_alarm_prompt<W: Write + ?Sized>(out: &mut W, alarms: &AlarmThresholds) -> Result<()> {
    writeln!(
        out,
        "Alarm Temps: {} and {}",
        alarms.low.to_string().blue(),
        alarms.high.to_string().red()
    )?;
    writeln!(out, "\nEnter one or more Zip Codes\n\nOR\n")?;
    writeln!(out, "{}  to {}hange alarm temps", "C".green(), "C".underline())?;
    writeln!(out, "{}  to {}uit\n", "Q".green(), "Q".underline())?;
    Ok(())
}

fn fetch_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Fetching weather data...");
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}
