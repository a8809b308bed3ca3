//! Plain-text rendering of [`ViewState`].

use std::fmt::Write;

use forecast_core::{DaySummary, Region, TodaySummary, UNKNOWN, ViewMode, ViewState};

/// Render whatever the current state calls for: loading, error, or the selected view.
pub fn render_state(state: &ViewState) -> String {
    let mut out = format!("== {} ({}) ==\n", state.selected_region, state.view_mode);

    if state.is_loading {
        out.push_str("Loading...\n");
        return out;
    }

    if let Some(error) = &state.error {
        let _ = writeln!(out, "Error: {error}");
        return out;
    }

    match state.view_mode {
        ViewMode::Today => match &state.today {
            Some(today) => out.push_str(&render_today(today)),
            None => out.push_str("No data for today.\n"),
        },
        ViewMode::ThreeDay => match &state.three_day {
            Some(days) => out.push_str(&render_three_day(days)),
            None => out.push_str("No three-day data.\n"),
        },
    }

    out
}

pub fn render_today(today: &TodaySummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Date:          {}", today.date);
    let _ = writeln!(out, "Weather:       {}", today.weather);
    let _ = writeln!(out, "Temperature:   {}", with_unit(&today.temperature, "°C"));
    let _ = writeln!(out, "Precipitation: {}", with_unit(&today.precipitation, "%"));
    out
}

pub fn render_three_day(days: &[DaySummary]) -> String {
    let mut out = format!("{:<8}{:<12}{:>8}{:>8}\n", "Date", "Weather", "Max", "Min");
    for day in days {
        let _ = writeln!(
            out,
            "{:<8}{:<12}{:>8}{:>8}",
            day.date,
            day.weather,
            with_unit(&day.max_temp, "°C"),
            with_unit(&day.min_temp, "°C"),
        );
    }
    out
}

/// Menu label for a region, marking the selected one.
pub fn region_label(region: Region, selected: Region) -> String {
    let marker = if region == selected { "*" } else { " " };
    format!("{marker} {} ({})", region.name(), region.slug())
}

pub fn view_mode_label(mode: ViewMode, selected: ViewMode) -> String {
    let marker = if mode == selected { "*" } else { " " };
    format!("{marker} View: {mode}")
}

fn with_unit(value: &str, unit: &str) -> String {
    if value == UNKNOWN { value.to_string() } else { format!("{value}{unit}") }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> TodaySummary {
        TodaySummary {
            date: "3日".into(),
            weather: "sunny".into(),
            temperature: "23".into(),
            precipitation: UNKNOWN.into(),
        }
    }

    #[test]
    fn today_card_adds_units_except_for_unknown() {
        let card = render_today(&today());
        assert!(card.contains("23°C"));
        assert!(card.contains("Precipitation: unknown\n"));
        assert!(!card.contains("unknown%"));
    }

    #[test]
    fn three_day_table_has_one_row_per_day() {
        let days = vec![
            DaySummary {
                date: "3日".into(),
                weather: "sunny".into(),
                max_temp: "25".into(),
                min_temp: "14".into(),
            },
            DaySummary {
                date: "4日".into(),
                weather: "rainy".into(),
                max_temp: UNKNOWN.into(),
                min_temp: "12".into(),
            },
        ];
        let table = render_three_day(&days);

        assert_eq!(table.lines().count(), 3);
        assert!(table.contains("25°C"));
        assert!(table.lines().nth(2).unwrap().contains("unknown"));
    }

    #[test]
    fn state_rendering_follows_loading_error_and_mode() {
        let mut state = ViewState::new(Region::Tokyo);
        state.is_loading = true;
        assert!(render_state(&state).contains("Loading"));

        state.is_loading = false;
        state.error = Some("could not retrieve data".into());
        assert!(render_state(&state).contains("Error: could not retrieve data"));

        state.error = None;
        state.today = Some(today());
        assert!(render_state(&state).contains("Weather:       sunny"));

        state.view_mode = ViewMode::ThreeDay;
        assert!(render_state(&state).contains("No three-day data"));
    }

    #[test]
    fn labels_mark_the_selection() {
        assert!(region_label(Region::Osaka, Region::Osaka).starts_with('*'));
        assert!(region_label(Region::Tokyo, Region::Osaka).starts_with(' '));
        assert_eq!(view_mode_label(ViewMode::ThreeDay, ViewMode::Today), "  View: three-day");
    }
}
