use std::{fmt, sync::Arc, time::Duration};

use anyhow::{Context, anyhow};
use clap::{Parser, Subcommand, ValueEnum};
use forecast_core::{
    Controller, DEFAULT_BASE_URL, FetchConfig, FetchDone, ForecastService, ForecastSource, Region,
    ViewMode, ViewState, source_from_config,
};
use inquire::{InquireError, Select};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::view::{region_label, render_state, view_mode_label};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "forecast", version, about = "Regional weather forecast viewer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Base URL of the forecast feed.
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Request timeout in seconds; the HTTP client default applies when omitted.
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the supported regions and their area codes.
    Regions,

    /// Fetch one region and print its forecast.
    Show {
        /// Region slug or name, e.g. "tokyo" or "東京".
        region: String,

        /// Which view to print.
        #[arg(long, value_enum, default_value_t = ShowView::Both)]
        view: ShowView,

        /// Print the view state as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Browse regions interactively (the default).
    Browse {
        /// Region to load first.
        #[arg(long)]
        region: Option<String>,

        /// Initial view.
        #[arg(long, default_value_t = ViewMode::Today)]
        view: ViewMode,
    },
}

/// Views printed by `show`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShowView {
    Today,
    ThreeDay,
    Both,
}

impl ShowView {
    fn modes(self) -> &'static [ViewMode] {
        match self {
            ShowView::Today => &[ViewMode::Today],
            ShowView::ThreeDay => &[ViewMode::ThreeDay],
            ShowView::Both => ViewMode::all(),
        }
    }
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = self.fetch_config();

        match self.command {
            Some(Command::Regions) => {
                for region in Region::all() {
                    println!("{:<8} {:<4} {}", region.slug(), region.name(), region.area_code());
                }
                Ok(())
            }
            Some(Command::Show { region, view, json }) => {
                let region = Region::try_from(region.as_str())?;
                show(&config, region, view, json).await
            }
            Some(Command::Browse { region, view }) => {
                let region = region.as_deref().map(Region::try_from).transpose()?;
                browse(&config, region.unwrap_or_default(), view).await
            }
            None => browse(&config, Region::default(), ViewMode::default()).await,
        }
    }

    fn fetch_config(&self) -> FetchConfig {
        let config = FetchConfig::default().with_base_url(self.base_url.clone());
        match self.timeout_secs {
            Some(secs) => config.with_timeout(Duration::from_secs(secs)),
            None => config,
        }
    }
}

async fn show(
    config: &FetchConfig,
    region: Region,
    view: ShowView,
    json: bool,
) -> anyhow::Result<()> {
    let source = source_from_config(config).context("Failed to build HTTP client")?;
    let mut controller = Controller::new(region);
    controller.refresh(&*source, region).await;

    if json {
        let out = serde_json::to_string_pretty(controller.state())
            .context("Failed to serialize view state")?;
        println!("{out}");
    } else {
        for &mode in view.modes() {
            controller.select_view_mode(mode);
            print!("{}", render_state(controller.state()));
        }
    }

    match &controller.state().error {
        Some(error) => Err(anyhow!("{region}: {error}")),
        None => Ok(()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Region(Region),
    View(ViewMode),
    Quit,
}

struct MenuEntry {
    label: String,
    action: Action,
}

impl fmt::Display for MenuEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

async fn browse(config: &FetchConfig, region: Region, view: ViewMode) -> anyhow::Result<()> {
    let source: Arc<dyn ForecastSource> =
        Arc::from(source_from_config(config).context("Failed to build HTTP client")?);
    let (service, mut rx) = ForecastService::new(source);

    let mut controller = Controller::new(region);
    controller.select_view_mode(view);
    load(&mut controller, &service, &mut rx, region).await?;

    loop {
        print!("{}", render_state(controller.state()));

        let action = choose(controller.state()).await?;
        match action {
            Action::Region(region) => load(&mut controller, &service, &mut rx, region).await?,
            Action::View(mode) => controller.select_view_mode(mode),
            Action::Quit => return Ok(()),
        }
    }
}

/// Select `region` and wait until its own result has been applied.
async fn load(
    controller: &mut Controller,
    service: &ForecastService,
    rx: &mut UnboundedReceiver<FetchDone>,
    region: Region,
) -> anyhow::Result<()> {
    let ticket = controller.select_region(region);
    print!("{}", render_state(controller.state()));
    service.request(ticket);

    // `service` holds a sender, so the channel stays open until our ticket completes.
    loop {
        let Some(done) = rx.recv().await else {
            return Err(anyhow!("Forecast channel closed before {region} finished loading"));
        };
        if controller.complete(done.ticket, done.outcome) {
            return Ok(());
        }
    }
}

fn menu_entries(state: &ViewState) -> Vec<MenuEntry> {
    let mut entries: Vec<MenuEntry> = Region::all()
        .iter()
        .map(|&r| MenuEntry {
            label: region_label(r, state.selected_region),
            action: Action::Region(r),
        })
        .collect();
    entries.extend(ViewMode::all().iter().map(|&m| MenuEntry {
        label: view_mode_label(m, state.view_mode),
        action: Action::View(m),
    }));
    entries.push(MenuEntry { label: "  Quit".to_string(), action: Action::Quit });
    entries
}

/// Show the menu on the blocking pool so the runtime thread stays free.
async fn choose(state: &ViewState) -> anyhow::Result<Action> {
    let entries = menu_entries(state);
    let answer =
        tokio::task::spawn_blocking(move || Select::new("Region / view:", entries).prompt())
            .await
            .context("Menu prompt task failed")?;

    match answer {
        Ok(entry) => Ok(entry.action),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
            Ok(Action::Quit)
        }
        Err(e) => Err(e).context("Failed to read menu selection"),
    }
}
