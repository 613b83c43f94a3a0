// services/sentinel-tui/src/main.rs
//
// Terminal console for the Sentinel surveillance demo
// Same feed simulation as the browser console, rendered with ratatui
//
// Run with: cargo run --bin sentinel-tui -- --seed 7

use std::io::stdout;
use std::time::{Duration, Instant};

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    prelude::*,
    widgets::{canvas::Canvas, *},
};

use opskit::data::{
    equipment_groups, infrastructure_statuses, patrol_routes, resource_metrics, weather_for,
    weekly_activity,
};
use opskit::filter::{filter_by_region, RegionSelection};
use opskit::geo::{GeoPoint, MapBounds};
use opskit::types::{PatrolRoute, Recommendation, Severity};

mod config;
mod state;

use state::{ConsoleState, Tab};

#[derive(Parser, Debug)]
#[command(name = "sentinel-tui")]
#[command(about = "Terminal console for the Sentinel border surveillance demo")]
#[command(version = "0.1.0")]
struct Args {
    /// Seed the feed simulation for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Milliseconds between feed ticks (overrides the config file)
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Per-feed alert probability 0..=1 (overrides the config file)
    #[arg(long)]
    alert_probability: Option<f64>,

    /// Optional TOML settings file, SENTINEL_* env vars also apply
    #[arg(long, short)]
    config: Option<String>,
}

// Color palette: Crimson, White, Silver, Gold
mod colors {
    use ratatui::style::Color;

    pub const RED: Color = Color::Rgb(220, 20, 60);
    pub const DARK_RED: Color = Color::Rgb(120, 10, 30);
    pub const WHITE: Color = Color::Rgb(229, 233, 240);
    pub const SILVER: Color = Color::Rgb(139, 148, 167);
    pub const GOLD: Color = Color::Rgb(245, 158, 11);
    pub const BG_DARK: Color = Color::Rgb(11, 14, 20);
    pub const BG_PANEL: Color = Color::Rgb(19, 24, 35);
    pub const SUCCESS: Color = Color::Rgb(34, 197, 94);
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    // Run app
    let result = run_app(&mut terminal, args);

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, args: Args) -> Result<()> {
    let mut sim = config::load_simulation(args.config.as_deref())?;
    if let Some(tick_ms) = args.tick_ms {
        sim.tick_interval_ms = tick_ms;
    }
    if let Some(probability) = args.alert_probability {
        sim.alert_probability = probability;
    }
    sim.validate()?;

    let mut state = ConsoleState::new(sim, args.seed, Utc::now());

    let tick_rate = Duration::from_millis(sim.tick_interval_ms);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| draw_ui(frame, &state))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    // Search mode captures the keyboard until Enter or Esc.
                    if state.searching {
                        match key.code {
                            KeyCode::Enter => state.finish_search(),
                            KeyCode::Esc => state.clear_search(),
                            KeyCode::Backspace => state.pop_search(),
                            KeyCode::Char(c) => state.push_search(c),
                            _ => {}
                        }
                    } else {
                        match key.code {
                            KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                            KeyCode::Tab => state.next_tab(),
                            KeyCode::Char('1') => state.set_tab(Tab::Feeds),
                            KeyCode::Char('2') => state.set_tab(Tab::WeatherPatrol),
                            KeyCode::Char('3') => state.set_tab(Tab::Maintenance),
                            KeyCode::Char('4') => state.set_tab(Tab::Threats),
                            KeyCode::Char('r') => state.cycle_region(),
                            KeyCode::Char('s') => state.cycle_sector(),
                            KeyCode::Char('p') => state.cycle_platform(),
                            KeyCode::Char('v') => state.cycle_severity(),
                            KeyCode::Char('/') => state.start_search(),
                            KeyCode::Char('a') => state.raise_manual_alert(Utc::now()),
                            KeyCode::Char(' ') => state.toggle_pause(Utc::now()),
                            KeyCode::Up => state.select_up(),
                            KeyCode::Down => state.select_down(),
                            _ => {}
                        }
                    }
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            state.tick(Utc::now());
            last_tick = Instant::now();
        }
    }
}

fn draw_ui(frame: &mut Frame, state: &ConsoleState) {
    let area = frame.area();

    // Background
    frame.render_widget(
        Block::default().style(Style::default().bg(colors::BG_DARK)),
        area,
    );

    // Main layout
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(1), // Tab strip
            Constraint::Min(10),   // Active panel
            Constraint::Length(3), // Footer
        ])
        .split(area);

    draw_header(frame, chunks[0], state);
    draw_tab_strip(frame, chunks[1], state);

    match state.tab {
        Tab::Feeds => draw_feeds(frame, chunks[2], state),
        Tab::WeatherPatrol => draw_weather_patrol(frame, chunks[2], state),
        Tab::Maintenance => draw_maintenance(frame, chunks[2], state),
        Tab::Threats => draw_threats(frame, chunks[2], state),
    }

    draw_footer(frame, chunks[3]);
}

fn draw_header(frame: &mut Frame, area: Rect, state: &ConsoleState) {
    let (mode_text, mode_color) = if state.paused {
        ("PAUSED", colors::GOLD)
    } else {
        ("LIVE", colors::SUCCESS)
    };

    let alerts = state.alert_count();
    let alert_color = if alerts > 0 { colors::RED } else { colors::SILVER };

    let title = Line::from(vec![
        Span::styled(
            " SENTINEL ",
            Style::default().fg(colors::WHITE).bg(colors::DARK_RED).bold(),
        ),
        Span::raw("  "),
        Span::styled(
            "BORDER SURVEILLANCE CONSOLE",
            Style::default().fg(colors::GOLD).bold(),
        ),
        Span::raw("  "),
        Span::styled(
            format!("[{}]", mode_text),
            Style::default().fg(mode_color).bold(),
        ),
        Span::raw("  "),
        Span::styled(
            format!("ALERTS: {}", alerts),
            Style::default().fg(alert_color).bold(),
        ),
        Span::raw("  "),
        Span::styled(
            format!("REGION: {}", state.region_label()),
            Style::default().fg(colors::SILVER),
        ),
    ]);

    let header = Paragraph::new(title)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(colors::DARK_RED))
                .style(Style::default().bg(colors::BG_DARK)),
        );

    frame.render_widget(header, area);
}

fn draw_tab_strip(frame: &mut Frame, area: Rect, state: &ConsoleState) {
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .map(|tab| Line::from(format!(" {} ", tab.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(state.tab.index())
        .style(Style::default().fg(colors::SILVER).bg(colors::BG_DARK))
        .highlight_style(Style::default().fg(colors::WHITE).bg(colors::DARK_RED).bold())
        .divider("|");

    frame.render_widget(tabs, area);
}

fn draw_feeds(frame: &mut Frame, area: Rect, state: &ConsoleState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(area);

    draw_feed_table(frame, chunks[0], state);
    draw_event_log(frame, chunks[1], state);
}

fn draw_feed_table(frame: &mut Frame, area: Rect, state: &ConsoleState) {
    let block = Block::default()
        .title(Span::styled(
            format!(" FEEDS - {} ", state.region_label().to_uppercase()),
            Style::default().fg(colors::GOLD).bold(),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::SILVER))
        .border_type(BorderType::Rounded)
        .style(Style::default().bg(colors::BG_PANEL));

    let rows: Vec<Row> = state
        .visible_feeds()
        .iter()
        .map(|feed| {
            let status_style = if feed.status.is_alert() {
                Style::default().fg(colors::RED).bold()
            } else {
                Style::default().fg(colors::SUCCESS)
            };

            Row::new(vec![
                Cell::from(Span::styled(feed.status.to_string(), status_style)),
                Cell::from(Span::styled(
                    feed.name.clone(),
                    Style::default().fg(colors::WHITE),
                )),
                Cell::from(Span::styled(
                    feed.region.clone(),
                    Style::default().fg(colors::SILVER),
                )),
                Cell::from(Span::styled(
                    feed.running_time_display(),
                    Style::default().fg(colors::SILVER),
                )),
                Cell::from(Span::styled(
                    feed.last_updated.format("%H:%M:%S").to_string(),
                    Style::default().fg(colors::SILVER),
                )),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(16),
            Constraint::Min(18),
            Constraint::Length(18),
            Constraint::Length(10),
            Constraint::Length(10),
        ],
    )
    .header(
        Row::new(vec![
            Cell::from(Span::styled("STATUS", Style::default().fg(colors::GOLD).bold())),
            Cell::from(Span::styled("WATCH POST", Style::default().fg(colors::GOLD).bold())),
            Cell::from(Span::styled("REGION", Style::default().fg(colors::GOLD).bold())),
            Cell::from(Span::styled("UPTIME", Style::default().fg(colors::GOLD).bold())),
            Cell::from(Span::styled("UPDATED", Style::default().fg(colors::GOLD).bold())),
        ])
        .bottom_margin(1),
    )
    .block(block)
    .row_highlight_style(Style::default().bg(colors::BG_DARK).bold())
    .highlight_symbol("» ");

    let mut table_state = TableState::default().with_selected(Some(state.selected));
    frame.render_stateful_widget(table, area, &mut table_state);
}

fn draw_event_log(frame: &mut Frame, area: Rect, state: &ConsoleState) {
    let block = Block::default()
        .title(Span::styled(
            " EVENT LOG ",
            Style::default().fg(colors::WHITE).bold(),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::SILVER))
        .border_type(BorderType::Rounded)
        .style(Style::default().bg(colors::BG_PANEL));

    let lines: Vec<Line> = state
        .events
        .iter()
        .rev()
        .take(30)
        .map(|entry| {
            let (prefix, color) = match entry.level.as_str() {
                "WARN" => ("[WRN]", colors::GOLD),
                "INFO" => ("[INF]", colors::SUCCESS),
                _ => ("[---]", colors::SILVER),
            };

            Line::from(vec![
                Span::styled(
                    format!("{} ", entry.timestamp.format("%H:%M:%S")),
                    Style::default().fg(colors::SILVER).add_modifier(Modifier::DIM),
                ),
                Span::styled(format!("{} ", prefix), Style::default().fg(color)),
                Span::styled(entry.message.clone(), Style::default().fg(colors::WHITE)),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

fn draw_weather_patrol(frame: &mut Frame, area: Rect, state: &ConsoleState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(42), Constraint::Percentage(58)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(6)])
        .split(chunks[0]);

    draw_weather(frame, left[0], state);
    draw_routes(frame, left[1], state);
    draw_route_map(frame, chunks[1], state);
}

fn draw_weather(frame: &mut Frame, area: Rect, state: &ConsoleState) {
    let block = Block::default()
        .title(Span::styled(
            " WEATHER CONDITIONS ",
            Style::default().fg(colors::WHITE).bold(),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::SILVER))
        .border_type(BorderType::Rounded)
        .style(Style::default().bg(colors::BG_PANEL));

    let lines = match weather_for(state.region_label()) {
        Some(weather) => vec![
            reading("Temperature", weather.temperature),
            reading("Humidity", weather.humidity),
            reading("Wind Speed", weather.wind_speed),
            reading("Visibility", weather.visibility),
        ],
        None => vec![Line::from(Span::styled(
            "Press [R] to pick a region for weather readings",
            Style::default().fg(colors::SILVER),
        ))],
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn reading(label: &str, value: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), Style::default().fg(colors::SILVER)),
        Span::styled(value, Style::default().fg(colors::WHITE)),
    ])
}

fn draw_routes(frame: &mut Frame, area: Rect, state: &ConsoleState) {
    let block = Block::default()
        .title(Span::styled(
            " PATROL ROUTES ",
            Style::default().fg(colors::WHITE).bold(),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::SILVER))
        .border_type(BorderType::Rounded)
        .style(Style::default().bg(colors::BG_PANEL));

    let selection = RegionSelection::from_label(state.region_label());
    let routes = patrol_routes();
    let visible = filter_by_region(&routes, &selection);

    let mut lines: Vec<Line> = Vec::new();
    for route in &visible {
        lines.push(Line::from(vec![
            Span::styled(route.name, Style::default().fg(colors::WHITE).bold()),
            Span::styled(
                format!(" - {}", route.region),
                Style::default().fg(colors::SILVER),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {} | ", route.condition),
                Style::default().fg(colors::SILVER),
            ),
            Span::styled(
                route.recommendation.to_string(),
                Style::default().fg(recommendation_color(route.recommendation)),
            ),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

fn draw_route_map(frame: &mut Frame, area: Rect, state: &ConsoleState) {
    let selection = RegionSelection::from_label(state.region_label());
    let all = patrol_routes();
    let routes: Vec<PatrolRoute> = filter_by_region(&all, &selection)
        .into_iter()
        .copied()
        .collect();

    let points: Vec<GeoPoint> = routes.iter().map(GeoPoint::from).collect();
    let bounds = MapBounds::fit(&points);

    let block = Block::default()
        .title(Span::styled(
            " PATROL MAP ",
            Style::default().fg(colors::WHITE).bold(),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::SILVER))
        .border_type(BorderType::Rounded)
        .style(Style::default().bg(colors::BG_PANEL));

    let canvas = Canvas::default()
        .block(block)
        .x_bounds([bounds.min_lng, bounds.max_lng])
        .y_bounds([bounds.min_lat, bounds.max_lat])
        .paint(|ctx| {
            for route in &routes {
                let color = recommendation_color(route.recommendation);
                ctx.print(
                    route.lng,
                    route.lat,
                    Line::from(Span::styled(
                        format!("◉ {}", route.name),
                        Style::default().fg(color),
                    )),
                );
            }
        });

    frame.render_widget(canvas, area);
}

fn draw_maintenance(frame: &mut Frame, area: Rect, state: &ConsoleState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(9)])
        .split(area);

    draw_equipment(frame, chunks[0], state);

    let lower = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    draw_resources(frame, lower[0]);
    draw_infrastructure(frame, lower[1]);
}

fn draw_equipment(frame: &mut Frame, area: Rect, state: &ConsoleState) {
    let block = Block::default()
        .title(Span::styled(
            format!(" {} REGION EQUIPMENT HEALTH ", state.sector().to_uppercase()),
            Style::default().fg(colors::GOLD).bold(),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::SILVER))
        .border_type(BorderType::Rounded)
        .style(Style::default().bg(colors::BG_PANEL));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let items = equipment_groups()
        .into_iter()
        .find(|group| group.region == state.sector())
        .map(|group| group.items)
        .unwrap_or_default();

    if items.is_empty() {
        return;
    }

    let constraints: Vec<Constraint> = items.iter().map(|_| Constraint::Length(2)).collect();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(constraints)
        .split(inner);

    for (item, row) in items.iter().zip(rows.iter()) {
        let gauge = Gauge::default()
            .gauge_style(
                Style::default()
                    .fg(health_color(item.health))
                    .bg(colors::BG_DARK),
            )
            .percent(item.health as u16)
            .label(format!(
                "{} - {}% (expires {})",
                item.name, item.health, item.expiry
            ));
        frame.render_widget(gauge, *row);
    }
}

fn draw_resources(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(Span::styled(
            " RESOURCE OPTIMIZATION ",
            Style::default().fg(colors::WHITE).bold(),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::SILVER))
        .border_type(BorderType::Rounded)
        .style(Style::default().bg(colors::BG_PANEL));

    let lines: Vec<Line> = resource_metrics()
        .iter()
        .map(|metric| {
            Line::from(vec![
                Span::styled(
                    format!("{}: ", metric.label),
                    Style::default().fg(colors::SILVER),
                ),
                Span::styled(
                    format!("{}% ", metric.level_pct),
                    Style::default().fg(colors::GOLD).bold(),
                ),
                Span::styled(metric.note, Style::default().fg(colors::WHITE)),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

fn draw_infrastructure(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(Span::styled(
            " INFRASTRUCTURE STATUS ",
            Style::default().fg(colors::WHITE).bold(),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::SILVER))
        .border_type(BorderType::Rounded)
        .style(Style::default().bg(colors::BG_PANEL));

    let lines: Vec<Line> = infrastructure_statuses()
        .iter()
        .map(|status| {
            let (icon, color) = if status.needs_attention {
                ("⚠", colors::GOLD)
            } else {
                ("●", colors::SUCCESS)
            };

            Line::from(vec![
                Span::styled(format!("{} ", icon), Style::default().fg(color)),
                Span::styled(
                    format!("{}: ", status.name),
                    Style::default().fg(colors::WHITE),
                ),
                Span::styled(status.condition, Style::default().fg(colors::SILVER)),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

fn draw_threats(frame: &mut Frame, area: Rect, state: &ConsoleState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Stat boxes
            Constraint::Min(8),    // Threat table
            Constraint::Length(5), // Weekly sparkline
        ])
        .split(area);

    draw_threat_stats(frame, chunks[0], state);
    draw_threat_table(frame, chunks[1], state);
    draw_weekly_activity(frame, chunks[2]);
}

fn draw_threat_stats(frame: &mut Frame, area: Rect, state: &ConsoleState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let high = state
        .threats
        .iter()
        .filter(|t| t.severity == Severity::High)
        .count();

    draw_stat_box(
        frame,
        chunks[0],
        "TOTAL THREATS",
        &state.threats.len().to_string(),
        colors::GOLD,
    );
    draw_stat_box(
        frame,
        chunks[1],
        "HIGH SEVERITY",
        &high.to_string(),
        if high > 0 { colors::RED } else { colors::SILVER },
    );
    draw_stat_box(frame, chunks[2], "MOST ACTIVE", "X", colors::WHITE);
}

fn draw_stat_box(frame: &mut Frame, area: Rect, label: &str, value: &str, value_color: Color) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::SILVER))
        .border_type(BorderType::Rounded)
        .style(Style::default().bg(colors::BG_PANEL));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text = vec![
        Line::from(Span::styled(
            label,
            Style::default().fg(colors::SILVER).add_modifier(Modifier::DIM),
        )),
        Line::from(""),
        Line::from(Span::styled(
            value,
            Style::default().fg(value_color).bold(),
        )),
    ];

    let paragraph = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}

fn draw_threat_table(frame: &mut Frame, area: Rect, state: &ConsoleState) {
    let search = if state.searching {
        format!(" [search: {}_]", state.search)
    } else if state.search.is_empty() {
        String::new()
    } else {
        format!(" [search: {}]", state.search)
    };

    let block = Block::default()
        .title(Span::styled(
            format!(
                " THREATS [platform: {}] [severity: {}]{} ",
                state.platform_label(),
                state.severity_label(),
                search
            ),
            Style::default().fg(colors::GOLD).bold(),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::SILVER))
        .border_type(BorderType::Rounded)
        .style(Style::default().bg(colors::BG_PANEL));

    let rows: Vec<Row> = state
        .visible_threats()
        .iter()
        .map(|threat| {
            Row::new(vec![
                Cell::from(Span::styled(
                    threat.platform.to_string(),
                    Style::default().fg(colors::WHITE),
                )),
                Cell::from(Span::styled(
                    threat.severity.to_string(),
                    Style::default().fg(severity_color(threat.severity)),
                )),
                Cell::from(Span::styled(
                    threat.location.clone(),
                    Style::default().fg(colors::SILVER),
                )),
                Cell::from(Span::styled(
                    threat.content.clone(),
                    Style::default().fg(colors::WHITE),
                )),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Length(8),
            Constraint::Length(16),
            Constraint::Min(30),
        ],
    )
    .header(
        Row::new(vec![
            Cell::from(Span::styled("PLATFORM", Style::default().fg(colors::GOLD).bold())),
            Cell::from(Span::styled("SEVERITY", Style::default().fg(colors::GOLD).bold())),
            Cell::from(Span::styled("LOCATION", Style::default().fg(colors::GOLD).bold())),
            Cell::from(Span::styled("CONTENT", Style::default().fg(colors::GOLD).bold())),
        ])
        .bottom_margin(1),
    )
    .block(block)
    .row_highlight_style(Style::default().bg(colors::BG_DARK).bold())
    .highlight_symbol("» ");

    let mut table_state = TableState::default().with_selected(Some(state.selected));
    frame.render_stateful_widget(table, area, &mut table_state);
}

fn draw_weekly_activity(frame: &mut Frame, area: Rect) {
    let totals: Vec<u64> = weekly_activity()
        .iter()
        .map(|day| day.counts.iter().map(|&n| n as u64).sum())
        .collect();

    let block = Block::default()
        .title(Span::styled(
            " WEEKLY MENTIONS (MON-SUN) ",
            Style::default().fg(colors::WHITE).bold(),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::SILVER))
        .border_type(BorderType::Rounded)
        .style(Style::default().bg(colors::BG_PANEL));

    let sparkline = Sparkline::default()
        .block(block)
        .data(&totals)
        .style(Style::default().fg(colors::GOLD));

    frame.render_widget(sparkline, area);
}

fn draw_footer(frame: &mut Frame, area: Rect) {
    let help = Line::from(vec![
        Span::styled(" [Q] ", Style::default().fg(colors::BG_DARK).bg(colors::RED)),
        Span::styled(" Quit ", Style::default().fg(colors::SILVER)),
        Span::raw(" "),
        Span::styled(" [TAB/1-4] ", Style::default().fg(colors::BG_DARK).bg(colors::GOLD)),
        Span::styled(" Panels ", Style::default().fg(colors::SILVER)),
        Span::raw(" "),
        Span::styled(" [R] ", Style::default().fg(colors::BG_DARK).bg(colors::WHITE)),
        Span::styled(" Region ", Style::default().fg(colors::SILVER)),
        Span::raw(" "),
        Span::styled(" [S] ", Style::default().fg(colors::BG_DARK).bg(colors::WHITE)),
        Span::styled(" Sector ", Style::default().fg(colors::SILVER)),
        Span::raw(" "),
        Span::styled(" [P/V] ", Style::default().fg(colors::BG_DARK).bg(colors::WHITE)),
        Span::styled(" Filters ", Style::default().fg(colors::SILVER)),
        Span::raw(" "),
        Span::styled(" [/] ", Style::default().fg(colors::BG_DARK).bg(colors::WHITE)),
        Span::styled(" Search ", Style::default().fg(colors::SILVER)),
        Span::raw(" "),
        Span::styled(" [A] ", Style::default().fg(colors::BG_DARK).bg(colors::RED)),
        Span::styled(" Manual Alert ", Style::default().fg(colors::SILVER)),
        Span::raw(" "),
        Span::styled(" [SPACE] ", Style::default().fg(colors::BG_DARK).bg(colors::GOLD)),
        Span::styled(" Pause ", Style::default().fg(colors::SILVER)),
        Span::raw(" "),
        Span::styled(" [UP/DOWN] ", Style::default().fg(colors::BG_DARK).bg(colors::SILVER)),
        Span::styled(" Select ", Style::default().fg(colors::SILVER)),
    ]);

    let footer = Paragraph::new(help)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(colors::DARK_RED))
                .style(Style::default().bg(colors::BG_DARK)),
        );

    frame.render_widget(footer, area);
}

fn recommendation_color(recommendation: Recommendation) -> Color {
    match recommendation {
        Recommendation::Recommended => colors::SUCCESS,
        Recommendation::Caution => colors::GOLD,
        Recommendation::NotRecommended => colors::RED,
    }
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Low => colors::SUCCESS,
        Severity::Medium => colors::GOLD,
        Severity::High => colors::RED,
    }
}

fn health_color(health: u8) -> Color {
    if health >= 80 {
        colors::SUCCESS
    } else if health >= 65 {
        colors::GOLD
    } else {
        colors::RED
    }
}
