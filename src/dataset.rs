use std::env;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Deserializer};

use crate::http_client::http_client;

const DRIVE_FILE_ID: &str = "1qHqMKHwmO3QX0HGotAVVBrSPBEIVonlK";

/// One play-by-play row. Optional fields stay `None` for non-shot events
/// (timeouts, substitutions) and for cells the source export left blank.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ShotEvent {
    #[serde(deserialize_with = "de_trimmed_string")]
    pub game_id: String,
    pub home: String,
    pub away: String,
    #[serde(default, deserialize_with = "de_opt_score")]
    pub home_score: Option<u32>,
    #[serde(default, deserialize_with = "de_opt_score")]
    pub away_score: Option<u32>,
    #[serde(default, deserialize_with = "de_opt_string")]
    pub shot_team: Option<String>,
    #[serde(default, deserialize_with = "de_opt_string")]
    pub shooter: Option<String>,
    #[serde(default, deserialize_with = "de_opt_outcome")]
    pub shot_outcome: Option<ShotOutcome>,
    #[serde(default, deserialize_with = "de_flex_bool")]
    pub three_pt: bool,
    #[serde(default, deserialize_with = "de_flex_bool")]
    pub free_throw: bool,
    #[serde(default, deserialize_with = "de_opt_string")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    Made,
    Missed,
}

impl ShotEvent {
    pub fn is_made(&self) -> bool {
        self.shot_outcome == Some(ShotOutcome::Made)
    }

    /// Case-sensitive substring test; a missing description never matches.
    pub fn description_contains(&self, needle: &str) -> bool {
        self.description.as_deref().is_some_and(|d| d.contains(needle))
    }
}

pub fn dataset_url() -> String {
    env::var("DATASET_URL")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| {
            format!(
                "https://drive.usercontent.google.com/download?id={DRIVE_FILE_ID}&export=download&confirm=t"
            )
        })
}

/// Download the published play-by-play CSV. The only hard failure path in the
/// pipeline: everything downstream assumes a loaded table.
pub fn load_dataset() -> Result<Vec<ShotEvent>> {
    let url = dataset_url();
    let client = http_client()?;
    let resp = client.get(&url).send().context("dataset request failed")?;
    let status = resp.status();
    let body = resp.text().context("failed reading dataset body")?;
    if !status.is_success() {
        return Err(anyhow!("http {status} fetching dataset"));
    }
    parse_events(body.as_bytes()).context("parse downloaded dataset")
}

pub fn load_events_from_path(path: &Path) -> Result<Vec<ShotEvent>> {
    let file =
        File::open(path).with_context(|| format!("open dataset file {}", path.display()))?;
    parse_events(file).with_context(|| format!("parse dataset file {}", path.display()))
}

pub fn parse_events<R: Read>(reader: R) -> Result<Vec<ShotEvent>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);
    let mut out = Vec::new();
    for row in rdr.deserialize::<ShotEvent>() {
        out.push(row.context("decode play-by-play row")?);
    }
    Ok(out)
}

pub fn team_shots<'a>(events: &'a [ShotEvent], team: &str) -> Vec<&'a ShotEvent> {
    events
        .iter()
        .filter(|e| e.shot_team.as_deref() == Some(team))
        .collect()
}

pub fn player_shots<'a>(events: &'a [ShotEvent], shooter: &str) -> Vec<&'a ShotEvent> {
    events
        .iter()
        .filter(|e| e.shooter.as_deref() == Some(shooter))
        .collect()
}

fn de_trimmed_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().to_string())
}

fn de_opt_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty() && s != "NA"))
}

// Scores come through as "75", "75.0", or blank depending on the export.
fn de_opt_score<'de, D>(deserializer: D) -> std::result::Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    let Some(raw) = raw else { return Ok(None) };
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "NA" {
        return Ok(None);
    }
    Ok(trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
        .map(|v| v as u32))
}

fn de_opt_outcome<'de, D>(deserializer: D) -> std::result::Result<Option<ShotOutcome>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    let Some(raw) = raw else { return Ok(None) };
    match raw.trim() {
        "made" => Ok(Some(ShotOutcome::Made)),
        "missed" => Ok(Some(ShotOutcome::Missed)),
        _ => Ok(None),
    }
}

fn de_flex_bool<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    let Some(raw) = raw else { return Ok(false) };
    Ok(matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "true" | "t" | "1"
    ))
}
