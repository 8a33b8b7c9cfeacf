use std::collections::VecDeque;

use crate::conference::{all_teams, conference_teams, conferences};
use crate::dataset::ShotEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    TeamAnalysis,
    Comparison,
    Standings,
    ShotChart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartSubject {
    Team,
    Player,
}

/// UI state over an immutable event table. Every derived view is recomputed
/// from `events` when a selection changes; nothing here caches aggregates.
pub struct AppState {
    pub events: Vec<ShotEvent>,
    pub screen: Screen,
    // 0 selects all conferences, 1.. index into `conferences()`.
    pub conference_idx: usize,
    pub team_idx: usize,
    pub rival_offset: usize,
    pub player_idx: usize,
    pub chart_subject: ChartSubject,
    pub help_overlay: bool,
    pub logs: VecDeque<String>,
}

impl AppState {
    pub fn new(events: Vec<ShotEvent>) -> Self {
        Self {
            events,
            screen: Screen::TeamAnalysis,
            conference_idx: 0,
            team_idx: 0,
            rival_offset: 0,
            player_idx: 0,
            chart_subject: ChartSubject::Team,
            help_overlay: false,
            logs: VecDeque::new(),
        }
    }

    pub fn conference_label(&self) -> &'static str {
        if self.conference_idx == 0 {
            "All"
        } else {
            conferences()[self.conference_idx - 1]
        }
    }

    /// Selectable teams under the current conference filter, sorted.
    pub fn team_options(&self) -> Vec<&'static str> {
        if self.conference_idx == 0 {
            all_teams()
        } else {
            let mut teams: Vec<&'static str> = conference_teams(self.conference_label())
                .unwrap_or(&[])
                .to_vec();
            teams.sort_unstable();
            teams
        }
    }

    pub fn selected_team(&self) -> Option<&'static str> {
        let options = self.team_options();
        options.get(self.team_idx).copied()
    }

    /// Comparison opponent: always a different team than the selected one.
    pub fn rival_team(&self) -> Option<&'static str> {
        let options = self.team_options();
        if options.len() < 2 {
            return None;
        }
        let idx = (self.team_idx + 1 + self.rival_offset % (options.len() - 1)) % options.len();
        options.get(idx).copied()
    }

    /// Shooters with at least one resolved shot for the selected team, sorted.
    pub fn team_players(&self) -> Vec<String> {
        let Some(team) = self.selected_team() else {
            return Vec::new();
        };
        let mut players: Vec<String> = self
            .events
            .iter()
            .filter(|e| e.shot_team.as_deref() == Some(team) && e.shot_outcome.is_some())
            .filter_map(|e| e.shooter.clone())
            .collect();
        players.sort_unstable();
        players.dedup();
        players
    }

    pub fn selected_player(&self) -> Option<String> {
        let players = self.team_players();
        players.get(self.player_idx).cloned()
    }

    pub fn cycle_conference(&mut self) {
        self.conference_idx = (self.conference_idx + 1) % (conferences().len() + 1);
        self.team_idx = 0;
        self.rival_offset = 0;
        self.player_idx = 0;
        self.push_log(format!("[INFO] Conference: {}", self.conference_label()));
    }

    pub fn select_next_team(&mut self) {
        let total = self.team_options().len();
        if total == 0 {
            self.team_idx = 0;
            return;
        }
        self.team_idx = (self.team_idx + 1) % total;
        self.player_idx = 0;
    }

    pub fn select_prev_team(&mut self) {
        let total = self.team_options().len();
        if total == 0 {
            self.team_idx = 0;
            return;
        }
        self.team_idx = if self.team_idx == 0 {
            total - 1
        } else {
            self.team_idx - 1
        };
        self.player_idx = 0;
    }

    pub fn cycle_rival(&mut self) {
        let total = self.team_options().len();
        if total < 2 {
            return;
        }
        self.rival_offset = (self.rival_offset + 1) % (total - 1);
    }

    pub fn cycle_player(&mut self) {
        let total = self.team_players().len();
        if total == 0 {
            self.player_idx = 0;
            return;
        }
        self.player_idx = (self.player_idx + 1) % total;
    }

    pub fn toggle_chart_subject(&mut self) {
        self.chart_subject = match self.chart_subject {
            ChartSubject::Team => ChartSubject::Player,
            ChartSubject::Player => ChartSubject::Team,
        };
    }

    pub fn push_log(&mut self, msg: impl Into<String>) {
        const MAX_LOGS: usize = 200;
        self.logs.push_back(msg.into());
        while self.logs.len() > MAX_LOGS {
            self.logs.pop_front();
        }
    }

    pub fn last_log(&self) -> Option<&str> {
        self.logs.back().map(String::as_str)
    }
}

pub fn screen_label(screen: Screen) -> &'static str {
    match screen {
        Screen::TeamAnalysis => "Team Analysis",
        Screen::Comparison => "Comparison",
        Screen::Standings => "Standings",
        Screen::ShotChart => "Shot Chart",
    }
}
