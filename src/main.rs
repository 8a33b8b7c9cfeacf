use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Clear, Paragraph};

use hoops_terminal::conference::conference_standings;
use hoops_terminal::dataset::{self, ShotEvent, team_shots};
use hoops_terminal::fake_feed;
use hoops_terminal::player_stats::{PlayerStats, get_player_stats, top_scorers};
use hoops_terminal::shooting::percentage;
use hoops_terminal::shot_chart::{
    ZoneColor, get_zone_color, process_shots_for_chart, shot_type_breakdown, zone_summary,
};
use hoops_terminal::state::{AppState, ChartSubject, Screen, screen_label};
use hoops_terminal::team_stats::{COMPARISON_CATEGORIES, comparison_values, get_team_stats};

const TOP_SCORER_COUNT: usize = 5;

struct App {
    state: AppState,
    should_quit: bool,
}

impl App {
    fn new(state: AppState) -> Self {
        Self {
            state,
            should_quit: false,
        }
    }

    fn on_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('1') => self.state.screen = Screen::TeamAnalysis,
            KeyCode::Char('2') => self.state.screen = Screen::Comparison,
            KeyCode::Char('3') => self.state.screen = Screen::Standings,
            KeyCode::Char('4') => self.state.screen = Screen::ShotChart,
            KeyCode::Tab => self.next_screen(),
            KeyCode::Char('c') => self.state.cycle_conference(),
            KeyCode::Char('j') | KeyCode::Down => self.state.select_next_team(),
            KeyCode::Char('k') | KeyCode::Up => self.state.select_prev_team(),
            KeyCode::Char('r') | KeyCode::Char('J') => self.state.cycle_rival(),
            KeyCode::Char('p') => self.state.cycle_player(),
            KeyCode::Char('t') => self.state.toggle_chart_subject(),
            KeyCode::Char('?') => self.state.help_overlay = !self.state.help_overlay,
            _ => {}
        }
    }

    fn next_screen(&mut self) {
        self.state.screen = match self.state.screen {
            Screen::TeamAnalysis => Screen::Comparison,
            Screen::Comparison => Screen::Standings,
            Screen::Standings => Screen::ShotChart,
            Screen::ShotChart => Screen::TeamAnalysis,
        };
    }
}

fn main() -> io::Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    // Load before touching the terminal so a failure prints a plain error.
    let events = match load_events() {
        Ok(events) => events,
        Err(err) => {
            eprintln!("dataset load failed: {err:#}");
            std::process::exit(1);
        }
    };

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let mut app = App::new(AppState::new(events));
    app.state.push_log(format!(
        "[INFO] Loaded {} play-by-play rows",
        app.state.events.len()
    ));

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("error: {err}");
    }
    Ok(())
}

fn load_events() -> Result<Vec<ShotEvent>> {
    if let Ok(path) = std::env::var("DATASET_FILE") {
        let path = path.trim().to_string();
        if !path.is_empty() {
            return dataset::load_events_from_path(Path::new(&path));
        }
    }

    let demo = std::env::var("DEMO_DATA")
        .is_ok_and(|v| v.trim() == "1" || v.trim().eq_ignore_ascii_case("true"));
    if demo {
        let seed = std::env::var("DEMO_SEED")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(7);
        return Ok(fake_feed::generate_sample_events(seed));
    }

    dataset::load_dataset()
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    let tick_rate = Duration::from_millis(250);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui(f, app))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key);
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn ui(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.size());

    let header =
        Paragraph::new(header_text(&app.state)).block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    match app.state.screen {
        Screen::TeamAnalysis => render_team_analysis(frame, chunks[1], &app.state),
        Screen::Comparison => render_comparison(frame, chunks[1], &app.state),
        Screen::Standings => render_standings(frame, chunks[1], &app.state),
        Screen::ShotChart => render_shot_chart(frame, chunks[1], &app.state),
    }

    let footer =
        Paragraph::new(footer_text(&app.state)).block(Block::default().borders(Borders::TOP));
    frame.render_widget(footer, chunks[2]);

    if app.state.help_overlay {
        render_help_overlay(frame, frame.size());
    }
}

fn header_text(state: &AppState) -> String {
    format!(
        "HOOPS TERMINAL | {} | Conference: {} | Team: {}",
        screen_label(state.screen),
        state.conference_label(),
        state.selected_team().unwrap_or("-"),
    )
}

fn footer_text(state: &AppState) -> String {
    let keys = match state.screen {
        Screen::TeamAnalysis => "1-4 Screens | j/k Team | c Conference | ? Help | q Quit",
        Screen::Comparison => "1-4 Screens | j/k Team | r Rival | c Conference | ? Help | q Quit",
        Screen::Standings => "1-4 Screens | c Conference | ? Help | q Quit",
        Screen::ShotChart => {
            "1-4 Screens | t Team/Player | p Player | j/k Team | c Conference | ? Help | q Quit"
        }
    };
    match state.last_log() {
        Some(log) => format!("{keys}\n{log}"),
        None => keys.to_string(),
    }
}

fn render_team_analysis(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(team) = state.selected_team() else {
        render_empty(frame, area, "No team selected");
        return;
    };

    let stats = get_team_stats(&state.events, team);
    let players = get_player_stats(&state.events, team);
    let shots = team_shots(&state.events, team);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    let metrics = format!(
        "Games {}   W {}   L {}   FG% {:.1}   3PT% {:.1}",
        stats.games_played, stats.wins, stats.losses, stats.fg_percentage, stats.three_percentage
    );
    let metrics = Paragraph::new(metrics).block(
        Block::default()
            .title(format!("{team} Statistics"))
            .borders(Borders::ALL),
    );
    frame.render_widget(metrics, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(38), Constraint::Percentage(62)])
        .split(rows[1]);

    let breakdown = shot_type_breakdown(&shots);
    let total: usize = breakdown.iter().map(|(_, n)| n).sum();
    let mut dist_lines = Vec::new();
    if total == 0 {
        dist_lines.push("No shot data for this team".to_string());
    }
    for (category, count) in &breakdown {
        dist_lines.push(format!(
            "{:<11} {:>6}  {:>5.1}%",
            category.label(),
            count,
            percentage(*count, total)
        ));
    }
    let dist = Paragraph::new(dist_lines.join("\n")).block(
        Block::default()
            .title("Shot Type Distribution")
            .borders(Borders::ALL),
    );
    frame.render_widget(dist, columns[0]);

    let table = player_table_text(&players, columns[1].height);
    let table = Paragraph::new(table).block(Block::default().title("Players").borders(Borders::ALL));
    frame.render_widget(table, columns[1]);
}

fn player_table_text(players: &[PlayerStats], height: u16) -> String {
    if players.is_empty() {
        return "No player data".to_string();
    }
    let mut lines = vec![format!(
        "{:<22} {:>5} {:>6} {:>4} {:>6} {:>6}",
        "PLAYER", "PTS", "PPG", "GP", "FG%", "3PT%"
    )];
    let visible = usize::from(height.saturating_sub(3));
    for p in top_scorers(players, visible.max(1)) {
        lines.push(format!(
            "{:<22} {:>5} {:>6.1} {:>4} {:>6.1} {:>6.1}",
            truncate_name(&p.player, 22),
            p.total_points,
            p.ppg,
            p.games_played,
            p.fg_percentage,
            p.three_percentage
        ));
    }
    lines.join("\n")
}

fn render_comparison(frame: &mut Frame, area: Rect, state: &AppState) {
    let (Some(team), Some(rival)) = (state.selected_team(), state.rival_team()) else {
        render_empty(frame, area, "Need two teams to compare");
        return;
    };

    let team_stats = get_team_stats(&state.events, team);
    let rival_stats = get_team_stats(&state.events, rival);
    let team_values = comparison_values(&team_stats);
    let rival_values = comparison_values(&rival_stats);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(9)])
        .split(area);

    let mut chart = BarChart::default()
        .block(
            Block::default()
                .title(format!("{team} (cyan) vs {rival} (magenta)"))
                .borders(Borders::ALL),
        )
        .bar_width(7)
        .bar_gap(1)
        .group_gap(3)
        .max(100);
    for (idx, category) in COMPARISON_CATEGORIES.iter().enumerate() {
        let bars = [
            comparison_bar(team_values[idx], Color::Cyan),
            comparison_bar(rival_values[idx], Color::Magenta),
        ];
        chart = chart.data(BarGroup::default().label((*category).into()).bars(&bars));
    }
    frame.render_widget(chart, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);
    render_top_scorers(frame, columns[0], state, team);
    render_top_scorers(frame, columns[1], state, rival);
}

fn comparison_bar(value: f64, color: Color) -> Bar<'static> {
    Bar::default()
        .value(value.round() as u64)
        .text_value(format!("{value:.1}"))
        .style(Style::default().fg(color))
}

fn render_top_scorers(frame: &mut Frame, area: Rect, state: &AppState, team: &str) {
    let players = get_player_stats(&state.events, team);
    let mut lines = Vec::new();
    for p in top_scorers(&players, TOP_SCORER_COUNT) {
        lines.push(format!(
            "{:<22} {:>5.1} ppg",
            truncate_name(&p.player, 22),
            p.ppg
        ));
    }
    if lines.is_empty() {
        lines.push("No player data".to_string());
    }
    let list = Paragraph::new(lines.join("\n")).block(
        Block::default()
            .title(format!("Top Scorers: {team}"))
            .borders(Borders::ALL),
    );
    frame.render_widget(list, area);
}

fn render_standings(frame: &mut Frame, area: Rect, state: &AppState) {
    let teams = state.team_options();
    let rows = conference_standings(&state.events, &teams);
    if rows.is_empty() {
        render_empty(frame, area, "No tracked games for this conference");
        return;
    }

    let mut lines = vec![format!(
        "{:<22} {:>4} {:>4} {:>7} {:>7}",
        "TEAM", "W", "GP", "WIN%", "FG%"
    )];
    let visible = usize::from(area.height.saturating_sub(3));
    for row in rows.iter().take(visible.max(1)) {
        lines.push(format!(
            "{:<22} {:>4} {:>4} {:>6.1}% {:>6.1}%",
            truncate_name(&row.team, 22),
            row.wins,
            row.total_games,
            row.win_percentage,
            row.fg_percentage
        ));
    }
    let table = Paragraph::new(lines.join("\n")).block(
        Block::default()
            .title(format!("{} Overview", state.conference_label()))
            .borders(Borders::ALL),
    );
    frame.render_widget(table, area);
}

fn render_shot_chart(frame: &mut Frame, area: Rect, state: &AppState) {
    let (name, is_team) = match state.chart_subject {
        ChartSubject::Team => match state.selected_team() {
            Some(team) => (team.to_string(), true),
            None => {
                render_empty(frame, area, "No team selected");
                return;
            }
        },
        ChartSubject::Player => match state.selected_player() {
            Some(player) => (player, false),
            None => {
                render_empty(frame, area, "No players with shot data for this team");
                return;
            }
        },
    };

    let labeled = process_shots_for_chart(&state.events, &name, is_team);
    if labeled.is_empty() {
        render_empty(frame, area, &format!("No shot data for {name}"));
        return;
    }

    let made = labeled.iter().filter(|s| s.event.is_made()).count();
    let overall = percentage(made, labeled.len());
    let header = format!(
        "Shots {}   Made {}   Overall {:.1}%",
        labeled.len(),
        made,
        overall
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(2),
            Constraint::Min(2),
            Constraint::Min(2),
        ])
        .split(area);

    let title = if is_team {
        format!("Shot Chart: {name}")
    } else {
        format!("Shot Chart: {name} (player)")
    };
    let header =
        Paragraph::new(header).block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(header, rows[0]);

    // Arc to rim, top to bottom.
    let summary = zone_summary(&labeled);
    for (slot, zone_stats) in summary.iter().rev().enumerate() {
        let tint = zone_fill(get_zone_color(zone_stats.percentage));
        let text = format!(
            "{}  {:.1}%  ({}/{})",
            zone_stats.zone.label(),
            zone_stats.percentage,
            zone_stats.made,
            zone_stats.attempts
        );
        let block = Paragraph::new(text)
            .style(Style::default().fg(Color::Black).bg(tint))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(block, rows[slot + 1]);
    }
}

fn zone_fill(color: ZoneColor) -> Color {
    match color {
        ZoneColor::Neutral => Color::Rgb(211, 211, 211),
        ZoneColor::Red => Color::Rgb(255, 71, 71),
        ZoneColor::Yellow => Color::Rgb(247, 243, 109),
        ZoneColor::LightGreen => Color::Rgb(191, 247, 131),
        ZoneColor::Green => Color::Rgb(118, 245, 98),
        ZoneColor::BrightGreen => Color::Rgb(5, 250, 5),
    }
}

fn render_empty(frame: &mut Frame, area: Rect, message: &str) {
    let empty = Paragraph::new(message.to_string()).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(empty, area);
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup = centered_rect(56, 14, area);
    frame.render_widget(Clear, popup);
    let text = [
        "1  Team Analysis",
        "2  Comparison",
        "3  Standings",
        "4  Shot Chart",
        "Tab  Next screen",
        "c  Cycle conference filter",
        "j/k  Select team",
        "r  Cycle comparison rival",
        "p  Cycle player (shot chart)",
        "t  Toggle team/player shot chart",
        "q  Quit",
    ]
    .join("\n");
    let help = Paragraph::new(text)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::default().title("Keys").borders(Borders::ALL));
    frame.render_widget(help, popup);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn truncate_name(name: &str, max: usize) -> String {
    if name.chars().count() <= max {
        name.to_string()
    } else {
        let truncated: String = name.chars().take(max.saturating_sub(1)).collect();
        format!("{truncated}…")
    }
}
