//! Giswater Info (gw-info).
//!
//! Führt eine einzelne Identify-Abfrage ohne Host-Viewer aus und gibt
//! Ergebnisfenster und Karten-Effekte als JSON aus.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use clap::{Parser, Subcommand};
use glam::DVec2;
use gw_info::core::LayerRole;
use gw_info::{
    AppCommand, AppController, AppIntent, AppState, ClickEvent, HostSnapshot, HttpLookupClient,
    InfoOptions, MapLayer, MapProjection,
};

/// Pause zwischen zwei Abfragen des Transports.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Parser)]
#[command(name = "gw-info")]
#[command(about = "Giswater-Info-Abfragen ohne Host-Viewer")]
#[command(version)]
struct Cli {
    /// Optionen-Datei (Standard: gw_info.toml neben der Binary)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Basis-URL des Info-Service (überschreibt Datei und Umgebung)
    #[arg(long, global = true)]
    service_url: Option<String>,

    /// Aufgelöste Optionen vor der Abfrage in die Optionen-Datei schreiben
    #[arg(long, global = true)]
    write_config: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Abfrage an einem Kartenpunkt (`fromcoordinates`)
    Point {
        #[arg(long, allow_negative_numbers = true)]
        x: f64,

        #[arg(long, allow_negative_numbers = true)]
        y: f64,

        /// Kartenprojektion
        #[arg(long, default_value = "EPSG:25831")]
        projection: String,

        /// Maßstabszahl der aktuellen Zoomstufe
        #[arg(long, default_value_t = 500.0)]
        scale: f64,

        /// Abfragbare Sublayer, kommagetrennt
        #[arg(long, value_delimiter = ',', required = true)]
        layers: Vec<String>,
    },

    /// Abfrage eines Features über ID und Tabelle (`fromid`)
    Feature {
        #[arg(long)]
        id: String,

        #[arg(long)]
        table_name: String,

        /// Kartenprojektion für Marker und Hervorhebung
        #[arg(long, default_value = "EPSG:25831")]
        projection: String,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    log::info!("Giswater Info v{} startet...", env!("CARGO_PKG_VERSION"));

    let config_path = cli.config.unwrap_or_else(InfoOptions::config_path);
    let mut options = InfoOptions::load_from_file(&config_path).with_env_overrides();
    if let Some(url) = cli.service_url {
        options.service_url = Some(url);
    }
    if cli.write_config {
        options.save_to_file(&config_path)?;
    }
    if options.service_url().is_none() {
        anyhow::bail!("Keine Service-URL konfiguriert (--service-url oder GW_INFO_SERVICE_URL)");
    }

    let timeout = Duration::from_secs(options.request_timeout_secs);
    let lookup = HttpLookupClient::new(timeout)?;
    let mut controller = AppController::new(Box::new(lookup));
    let mut state = AppState::with_options(options);

    match cli.command {
        Commands::Point {
            x,
            y,
            projection,
            scale,
            layers,
        } => {
            let snapshot = host_snapshot(&state.options, &projection, scale, layers);
            controller.handle_intent(
                &mut state,
                AppIntent::HostUpdated {
                    snapshot: snapshot.clone(),
                },
            )?;

            let clicked = HostSnapshot {
                click: Some(Arc::new(ClickEvent::primary(DVec2::new(x, y)))),
                ..snapshot
            };
            controller.handle_intent(&mut state, AppIntent::HostUpdated { snapshot: clicked })?;
        }
        Commands::Feature {
            id,
            table_name,
            projection,
        } => {
            let snapshot = host_snapshot(&state.options, &projection, 0.0, Vec::new());
            controller.handle_intent(&mut state, AppIntent::HostUpdated { snapshot })?;
            // Ohne angezeigtes Formular direkt als Command, nicht als Formular-Aktion
            controller.handle_command(&mut state, AppCommand::LookupFeature { id, table_name })?;
        }
    }

    wait_for_result(&mut controller, &mut state, timeout + Duration::from_secs(1))?;
    log::info!(
        "Abfrage abgeschlossen: {}",
        state.command_log.describe_last_lookup()
    );

    let output = serde_json::json!({
        "panel": controller.build_info_panel(&state),
        "effects": state.map.drain_effects(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Host-Zustand mit aktivem Info-Werkzeug und einem abfragbaren Layer.
fn host_snapshot(
    options: &InfoOptions,
    projection: &str,
    scale: f64,
    query_layers: Vec<String>,
) -> HostSnapshot {
    let layers = if query_layers.is_empty() {
        Vec::new()
    } else {
        vec![MapLayer {
            id: "giswater".to_string(),
            url: options.query_service_url.clone(),
            role: LayerRole::Theme,
            visible: true,
            query_layers,
        }]
    };

    HostSnapshot {
        current_identify_tool: Some(options.tool_id.clone()),
        projection: MapProjection::new(projection),
        scales: vec![scale],
        zoom: 0.0,
        layers,
        ..HostSnapshot::default()
    }
}

/// Holt Antworten ab, bis keine Abfrage mehr aussteht oder `limit` überschritten ist.
fn wait_for_result(
    controller: &mut AppController,
    state: &mut AppState,
    limit: Duration,
) -> anyhow::Result<()> {
    let started = Instant::now();
    while state.results.is_pending() {
        if started.elapsed() > limit {
            anyhow::bail!(
                "Keine Antwort innerhalb von {:?} ({})",
                limit,
                state.command_log.describe_last_lookup()
            );
        }
        if controller.poll_lookups(state)? == 0 {
            std::thread::sleep(POLL_INTERVAL);
        }
    }
    Ok(())
}
