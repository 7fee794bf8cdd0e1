//! CSV export and re-import of schedules, plus JSON persistence.
//!
//! The CSV mirrors the console table: header `Round, Court 1 .. Court C,
//! Rest`, one row per round, teams rendered as member tuples. The reader
//! reverses the writer exactly, so a schedule survives a round trip
//! through disk unchanged.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use schedule_core::{Match, PlayerId, Round, Schedule, Team};

use crate::render::id_tuple;

fn court_columns(schedule: &Schedule) -> usize {
    schedule
        .rounds
        .iter()
        .map(|r| r.matches.len())
        .max()
        .unwrap_or(0)
}

/// Write the schedule as CSV. Degraded rounds leave their trailing court
/// cells empty.
pub fn write_csv(schedule: &Schedule, path: &Path) -> Result<()> {
    let courts = court_columns(schedule);
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create CSV file: {}", path.display()))?;

    let mut header = vec!["Round".to_string()];
    for court in 1..=courts {
        header.push(format!("Court {court}"));
    }
    header.push("Rest".to_string());
    writer.write_record(&header)?;

    for (index, round) in schedule.rounds.iter().enumerate() {
        let mut record = vec![(index + 1).to_string()];
        for m in &round.matches {
            record.push(m.to_string());
        }
        record.resize(courts + 1, String::new());
        record.push(id_tuple(&round.resting));
        writer.write_record(&record)?;
    }

    writer
        .flush()
        .with_context(|| format!("Failed to write CSV file: {}", path.display()))
}

/// Read a schedule back from a CSV produced by [`write_csv`].
pub fn read_csv(path: &Path) -> Result<Schedule> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;

    let mut rounds = Vec::new();
    for record in reader.records() {
        let record = record.context("Failed to read CSV record")?;
        let fields: Vec<&str> = record.iter().collect();
        if fields.len() < 2 {
            bail!("schedule row needs at least a round and a rest column");
        }

        let resting = parse_id_tuple(fields[fields.len() - 1])?;
        let matches = fields[1..fields.len() - 1]
            .iter()
            .filter(|cell| !cell.trim().is_empty())
            .map(|cell| parse_match(cell))
            .collect::<Result<Vec<Match>>>()?;

        rounds.push(Round { matches, resting });
    }

    Ok(Schedule { rounds })
}

/// Save the schedule as pretty-printed JSON.
pub fn write_json(schedule: &Schedule, path: &Path) -> Result<()> {
    let json =
        serde_json::to_string_pretty(schedule).context("Failed to serialize schedule")?;
    fs::write(path, json).with_context(|| format!("Failed to write: {}", path.display()))
}

/// Load a schedule previously saved with [`write_json`].
pub fn read_json(path: &Path) -> Result<Schedule> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("Failed to read: {}", path.display()))?;
    serde_json::from_str(&contents).context("Failed to parse schedule JSON")
}

fn parse_match(cell: &str) -> Result<Match> {
    let (a, b) = cell
        .split_once(" vs ")
        .with_context(|| format!("expected 'teamA vs teamB', got '{cell}'"))?;
    Ok(Match {
        team_a: parse_team(a)?,
        team_b: parse_team(b)?,
    })
}

fn parse_team(text: &str) -> Result<Team> {
    Ok(Team::new(parse_id_tuple(text)?))
}

fn parse_id_tuple(text: &str) -> Result<Vec<PlayerId>> {
    let inner = text
        .trim()
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .with_context(|| format!("expected a player tuple, got '{text}'"))?;
    inner
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<PlayerId>()
                .with_context(|| format!("invalid player id '{part}'"))
        })
        .collect()
}
