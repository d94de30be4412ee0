//! Replay a recorded input script through a timeline and print what the
//! host would have seen.
//!
//! ```text
//! timegrid-replay script.json --pretty
//! RUST_LOG=timegrid=debug timegrid-replay script.json --final-only
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use timegrid::{
    CategoryRow, EngineConfig, EventOutcome, Item, ItemClick, Point, RawPointerEvent, RowModel, ScrollViewport,
    Timeline, TimelineClick, TimelineListener, ViewParams, WheelEvent,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "timegrid-replay", about = "Replay pointer input against a timeline grid", version)]
struct Cli {
    /// JSON script with the timeline setup and the events to replay
    script: PathBuf,

    /// Print only the final state, not every callback
    #[arg(long)]
    final_only: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Script {
    #[serde(default)]
    config: EngineConfig,
    #[serde(default)]
    view: ViewParams,
    #[serde(default)]
    categories: Vec<CategoryRow>,
    #[serde(default)]
    items: Vec<Item>,
    #[serde(default)]
    surface_origin: Point,
    #[serde(default)]
    viewport: ScrollViewport,
    events: Vec<ScriptEvent>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
enum ScriptEvent {
    Pointer(RawPointerEvent),
    Wheel(WheelEvent),
    Cancel,
}

#[derive(Serialize)]
#[serde(tag = "callback", rename_all = "camelCase")]
enum Callback {
    ItemsChange { step: usize, items: Vec<Item> },
    BackgroundClick { step: usize, click: TimelineClick },
    ItemClick { step: usize, click: ItemClick },
    ViewChange { step: usize, view: ViewParams },
}

/// Collects callbacks, tagging each with the index of the event that caused it
#[derive(Default)]
struct Recorder {
    step: usize,
    callbacks: Vec<Callback>,
}

impl TimelineListener for Recorder {
    fn on_items_change(&mut self, items: &[Item]) {
        self.callbacks.push(Callback::ItemsChange {
            step: self.step,
            items: items.to_vec(),
        });
    }

    fn on_background_click(&mut self, click: &TimelineClick) {
        self.callbacks.push(Callback::BackgroundClick {
            step: self.step,
            click: click.clone(),
        });
    }

    fn on_item_click(&mut self, click: &ItemClick) {
        self.callbacks.push(Callback::ItemClick {
            step: self.step,
            click: click.clone(),
        });
    }

    fn on_view_change(&mut self, view: &ViewParams) {
        self.callbacks.push(Callback::ViewChange {
            step: self.step,
            view: view.clone(),
        });
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Report<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    callbacks: Option<&'a [Callback]>,
    outcomes: Vec<EventOutcome>,
    items: &'a [Item],
    view: &'a ViewParams,
    viewport: &'a ScrollViewport,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let json = std::fs::read_to_string(&cli.script)
        .with_context(|| format!("Failed to read script {}", cli.script.display()))?;
    let script: Script = serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse script {}", cli.script.display()))?;

    let rows = RowModel::from_categories(&script.categories);
    let mut timeline =
        Timeline::new(script.config, script.view, rows, script.items).context("Invalid timeline setup")?;
    let mut viewport = script.viewport;
    let mut recorder = Recorder::default();
    let mut outcomes = Vec::with_capacity(script.events.len());

    for (step, event) in script.events.iter().enumerate() {
        recorder.step = step;
        let outcome = match event {
            ScriptEvent::Pointer(raw) => {
                timeline.handle_pointer(raw, script.surface_origin, &mut viewport, &mut recorder)
            }
            ScriptEvent::Wheel(wheel) => timeline.handle_wheel(wheel, &mut viewport, &mut recorder),
            ScriptEvent::Cancel => timeline.cancel(&mut viewport, &mut recorder),
        };
        outcomes.push(outcome);
    }
    info!(
        events = script.events.len(),
        callbacks = recorder.callbacks.len(),
        "Replay finished"
    );

    let report = Report {
        callbacks: (!cli.final_only).then_some(recorder.callbacks.as_slice()),
        outcomes,
        items: timeline.items(),
        view: timeline.view(),
        viewport: &viewport,
    };
    let output = if cli.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{output}");
    Ok(())
}
