//! Terminal rendering of the weather card and the loading spinner.

use crossterm::style::{Color, Stylize, style};
use indicatif::{ProgressBar, ProgressStyle};
use std::{sync::Mutex, time::Duration};
use suhu_core::{IconId, LoadingHook, Theme, UiState, WeatherCard};

const INNER: usize = 38;
const TITLE: &str = "Cek Suhu Lokasi";

struct Palette {
    border: Color,
    title: Color,
    text: Color,
    muted: Color,
    accent: Color,
    error: Color,
}

impl Palette {
    fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                border: Color::Blue,
                title: Color::DarkBlue,
                text: Color::Black,
                muted: Color::DarkGrey,
                accent: Color::Blue,
                error: Color::DarkRed,
            },
            Theme::Dark => Self {
                border: Color::DarkGrey,
                title: Color::White,
                text: Color::White,
                muted: Color::Grey,
                accent: Color::Cyan,
                error: Color::Red,
            },
        }
    }
}

/// Render the whole card for `state`.
pub fn card(state: &UiState, weather: Option<&WeatherCard>) -> String {
    let palette = Palette::for_theme(state.theme());
    let mut out = Vec::new();

    out.push(edge('╭', '╮', &palette));
    out.push(row(&center(TITLE), palette.title, &palette, true));
    out.push(edge('├', '┤', &palette));

    if let Some(message) = state.error() {
        for line in wrap(message, INNER - 4) {
            out.push(row(&format!("! {line}"), palette.error, &palette, true));
        }
        out.push(blank(&palette));
    }

    match weather {
        Some(weather) => weather_rows(weather, &palette, &mut out),
        None => out.push(row("Masukkan nama kota...", palette.muted, &palette, false)),
    }

    out.push(edge('╰', '╯', &palette));
    out.join("\n")
}

fn weather_rows(weather: &WeatherCard, palette: &Palette, out: &mut Vec<String>) {
    let toggle = format!("[{}]", weather.unit_label);
    let name_width = INNER - 2 - toggle.chars().count();
    let header = format!("{}{toggle}", pad(&weather.location_name, name_width));

    out.push(row(&header, palette.text, palette, true));
    out.push(row(&weather.description, palette.muted, palette, false));
    out.push(blank(palette));

    let half = (INNER - 2) / 2;
    out.push(row(
        &format!("{}{}", pad("Suhu", half), pad("Kelembaban", half)),
        palette.muted,
        palette,
        false,
    ));
    out.push(row(
        &format!("{}{}", pad(&weather.temperature, half), pad(&weather.humidity, half)),
        palette.accent,
        palette,
        true,
    ));
    out.push(blank(palette));

    for line in icon_art(weather.icon) {
        out.push(row(&center(line), palette.text, palette, false));
    }

    if let Some(observed) = weather.observed_at {
        let local = observed.with_timezone(&chrono::Local);
        out.push(blank(palette));
        out.push(row(
            &format!("Diperbarui {}", local.format("%d-%m-%Y %H:%M")),
            palette.muted,
            palette,
            false,
        ));
    }
}

fn edge(left: char, right: char, palette: &Palette) -> String {
    let line: String = std::iter::once(left)
        .chain(std::iter::repeat_n('─', INNER))
        .chain(std::iter::once(right))
        .collect();
    style(line).with(palette.border).to_string()
}

fn row(content: &str, color: Color, palette: &Palette, bold: bool) -> String {
    let body = style(pad(content, INNER - 2)).with(color);
    let body = if bold { body.bold() } else { body };
    format!("{}{}{}", style("│ ").with(palette.border), body, style(" │").with(palette.border))
}

fn blank(palette: &Palette) -> String {
    row("", palette.text, palette, false)
}

/// Left-align `text` in exactly `width` columns, cutting it if needed.
fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len > width {
        let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
        cut.push('…');
        return cut;
    }
    format!("{text}{}", " ".repeat(width - len))
}

fn center(text: &str) -> String {
    let width = INNER - 2;
    let len = text.chars().count().min(width);
    format!("{}{text}", " ".repeat((width - len) / 2))
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() { 0 } else { 1 } + word.chars().count();
        if !current.is_empty() && current.chars().count() + needed > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn icon_art(icon: IconId) -> &'static [&'static str] {
    match icon {
        IconId::ClearDay => &[r"   \   /   ", r"    .-.    ", r" - (   ) - ", r"    `-'    ", r"   /   \   "],
        IconId::Cloudy => &[r"           ", r"    .--.   ", r" .-(    ). ", r"(___.__)__)", r"           "],
        IconId::Rain => &[r"    .--.   ", r" .-(    ). ", r"(___.__)__)", r"  ' ' ' '  ", r" ' ' ' '   "],
        IconId::Snow => &[r"    .--.   ", r" .-(    ). ", r"(___.__)__)", r"  *  *  *  ", r" *  *  *   "],
        IconId::Wind => &[r"  ~~~~     ", r" ~~~~~~~~  ", r"   ~~~~~~~ ", r" ~~~~~~    ", r"    ~~~~   "],
        IconId::Sleet => &[r"    .--.   ", r" .-(    ). ", r"(___.__)__)", r"  ' * ' *  ", r" * ' * '   "],
        IconId::Fog => &[r"           ", r" _ - _ - _ ", r"  _ - _ -  ", r" _ - _ - _ ", r"           "],
    }
}

/// Loading hook that shows an animated spinner while a request is in flight.
pub fn loading_hook() -> LoadingHook {
    let current: Mutex<Option<ProgressBar>> = Mutex::new(None);

    Box::new(move |loading| {
        let Ok(mut slot) = current.lock() else {
            return;
        };
        if let Some(previous) = slot.take() {
            previous.finish_and_clear();
        }
        if loading {
            *slot = Some(spinner());
        }
    })
}

fn spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message("Memuat cuaca...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
