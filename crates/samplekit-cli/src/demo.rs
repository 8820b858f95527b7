use std::io::Write;

use chrono::{NaiveDate, NaiveDateTime};
use rand::RngCore;

use samplekit_core::{Gender, VehicleKind};
use samplekit_generate::output::write_values;
use samplekit_generate::{GeneratedValue, OutputFormat, SamplingEngine};

use crate::CliError;

const MOVIES: &[&str] = &[
    "Carol",
    "Daddys Home",
    "Den gode dinosaurien",
    "En man som heter Ove",
    "En underbar jävla jul",
    "In the Heart of the Sea",
    "Star Wars: The Force Awakens",
    "Suffragette",
    "The Hateful Eight",
    "The Hunger Games - Mockingjay Part 2",
];

fn timestamp(
    year: i32,
    month: u32,
    day: u32,
    (hour, minute, second): (u32, u32, u32),
) -> Result<NaiveDateTime, CliError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, second))
        .ok_or_else(|| CliError::InvalidArgument(format!("invalid date {year}-{month}-{day}")))
}

fn section<W: Write>(
    out: &mut W,
    title: &str,
    values: Vec<GeneratedValue>,
) -> Result<(), CliError> {
    writeln!(out, "# {title}")?;
    write_values(&mut *out, &values, OutputFormat::Text)?;
    tracing::debug!(event = "demo_section_written", section = title, count = values.len());
    Ok(())
}

/// Print a batch from every generator, one section per kind.
///
/// `now` bounds the recent-dates section.
pub fn run_demo<W: Write, R: RngCore>(
    out: &mut W,
    engine: &mut SamplingEngine<R>,
    count: usize,
    now: NaiveDateTime,
) -> Result<(), CliError> {
    for kind in VehicleKind::ALL {
        let pairs = engine.vehicle_models(kind, count)?;
        section(
            out,
            kind.as_str(),
            pairs.into_iter().map(GeneratedValue::Pair).collect(),
        )?;
    }

    let batch = engine.registration_numbers(count)?;
    section(
        out,
        "registration",
        batch.into_numbers().into_iter().map(GeneratedValue::Text).collect(),
    )?;

    let colors = engine.colors(count)?;
    section(
        out,
        "color",
        colors.into_iter().map(GeneratedValue::Text).collect(),
    )?;

    let people = engine.people(count, Gender::Any)?;
    section(
        out,
        "person",
        people.into_iter().map(GeneratedValue::Person).collect(),
    )?;

    let eighties = engine.date_time(
        timestamp(1980, 1, 1, (0, 0, 0))?,
        timestamp(1990, 12, 31, (23, 59, 59))?,
    )?;
    section(out, "datetime", vec![GeneratedValue::Timestamp(eighties)])?;

    let recent = engine.date_times(timestamp(2015, 1, 1, (0, 0, 0))?, now, count)?;
    section(
        out,
        "datetime since 2015",
        recent.into_iter().map(GeneratedValue::Timestamp).collect(),
    )?;

    let integers = engine.integers(count, 0, 10)?;
    section(
        out,
        "integer",
        integers.into_iter().map(GeneratedValue::Int).collect(),
    )?;

    let movies = engine.sample_flat_list(MOVIES, Some(count))?;
    section(
        out,
        "movie",
        movies
            .into_iter()
            .map(|title| GeneratedValue::Text(title.to_string()))
            .collect(),
    )?;

    Ok(())
}
