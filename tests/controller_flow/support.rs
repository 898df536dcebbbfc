use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use glam::DVec2;
use gw_info::core::LayerRole;
use gw_info::lookup::{LookupRequest, LookupTicket};
use gw_info::{
    AppController, AppIntent, AppState, ClickEvent, HostSnapshot, IdentifiedFeature,
    IdentifyResult, InfoOptions, LookupClient, LookupCompletion, LookupError, MapLayer,
    MapProjection,
};
use url::Url;

pub const SERVICE_URL: &str = "http://gw.example/info/";

/// Abgesetzte Anfrage.
#[derive(Debug, Clone)]
pub struct Submitted {
    pub ticket: LookupTicket,
    pub request: LookupRequest,
    pub url: Url,
}

#[derive(Default)]
pub struct FakeShared {
    pub submitted: Vec<Submitted>,
    ready: Vec<LookupCompletion>,
}

/// Zeichnet Anfragen auf; Antworten werden vom Test freigegeben.
pub struct FakeLookup {
    shared: Rc<RefCell<FakeShared>>,
}

impl LookupClient for FakeLookup {
    fn submit(&mut self, ticket: LookupTicket, request: &LookupRequest, url: Url) {
        self.shared.borrow_mut().submitted.push(Submitted {
            ticket,
            request: request.clone(),
            url,
        });
    }

    fn poll_completed(&mut self) -> Vec<LookupCompletion> {
        std::mem::take(&mut self.shared.borrow_mut().ready)
    }
}

/// Controller, Zustand und Host-Nachbildung für einen Ablauf-Test.
pub struct Harness {
    pub controller: AppController,
    pub state: AppState,
    pub host: HostSnapshot,
    shared: Rc<RefCell<FakeShared>>,
}

impl Harness {
    /// Aktives Werkzeug mit Service-URL, EPSG:25831, Maßstab 500 und Layer `layer_a`.
    pub fn active() -> Self {
        Self::active_with(configured_options())
    }

    pub fn active_with(options: InfoOptions) -> Self {
        let mut harness = Self::inactive_with(options);
        harness.host.current_identify_tool = Some(harness.state.options.tool_id.clone());
        harness.push_host();
        harness.state.map.drain_effects();
        harness
    }

    pub fn inactive_with(options: InfoOptions) -> Self {
        let shared = Rc::new(RefCell::new(FakeShared::default()));
        let lookup = FakeLookup {
            shared: Rc::clone(&shared),
        };
        let host = HostSnapshot {
            projection: MapProjection::new("EPSG:25831"),
            scales: vec![500.0],
            zoom: 0.0,
            layers: vec![giswater_layer("ws", &options.query_service_url, &["layer_a"])],
            ..HostSnapshot::default()
        };
        Self {
            controller: AppController::new(Box::new(lookup)),
            state: AppState::with_options(options),
            host,
            shared,
        }
    }

    /// Schickt den aktuellen Host-Zustand an den Controller.
    pub fn push_host(&mut self) {
        self.controller
            .handle_intent(
                &mut self.state,
                AppIntent::HostUpdated {
                    snapshot: self.host.clone(),
                },
            )
            .expect("HostUpdated sollte ohne Fehler durchlaufen");
    }

    /// Primärklick auf die Karte.
    pub fn click(&mut self, x: f64, y: f64) -> Arc<ClickEvent> {
        self.click_with(ClickEvent::primary(DVec2::new(x, y)))
    }

    pub fn click_with(&mut self, click: ClickEvent) -> Arc<ClickEvent> {
        let click = Arc::new(click);
        self.host.click = Some(Arc::clone(&click));
        self.push_host();
        click
    }

    pub fn intent(&mut self, intent: AppIntent) {
        self.controller
            .handle_intent(&mut self.state, intent)
            .expect("Intent sollte ohne Fehler durchlaufen");
    }

    pub fn submitted(&self) -> Vec<Submitted> {
        self.shared.borrow().submitted.clone()
    }

    pub fn submitted_urls(&self) -> Vec<String> {
        self.submitted()
            .iter()
            .map(|s| s.url.as_str().to_string())
            .collect()
    }

    /// Gibt die Antwort der `index`-ten Anfrage frei und holt sie ab.
    pub fn respond(&mut self, index: usize, outcome: Result<IdentifyResult, LookupError>) {
        let ticket = self.shared.borrow().submitted[index].ticket;
        self.shared
            .borrow_mut()
            .ready
            .push(LookupCompletion { ticket, outcome });
        let applied = self
            .controller
            .poll_lookups(&mut self.state)
            .expect("poll_lookups sollte ohne Fehler durchlaufen");
        assert_eq!(applied, 1);
    }

    /// Führt Klick und Antwort mit einem Treffer aus.
    pub fn show_result(&mut self, result: IdentifyResult) {
        self.click(1.0, 1.0);
        let index = self.submitted().len() - 1;
        self.respond(index, Ok(result));
    }
}

pub fn configured_options() -> InfoOptions {
    InfoOptions {
        service_url: Some(SERVICE_URL.to_string()),
        ..InfoOptions::default()
    }
}

pub fn giswater_layer(id: &str, url: &str, query_layers: &[&str]) -> MapLayer {
    MapLayer {
        id: id.to_string(),
        url: url.to_string(),
        role: LayerRole::Theme,
        visible: true,
        query_layers: query_layers.iter().map(|s| s.to_string()).collect(),
    }
}

/// Treffer mit WKT-Geometrie, wie ihn der Service als JSON liefert.
pub fn feature_result(id: &str, table_name: &str, wkt: &str) -> IdentifyResult {
    IdentifyResult {
        feature: Some(IdentifiedFeature {
            id: id.to_string(),
            geometry: wkt.to_string(),
            table_name: table_name.to_string(),
        }),
        form_xml: Some(format!("<ui><widget name=\"{id}\"/></ui>")),
    }
}

pub fn empty_response() -> IdentifyResult {
    serde_json::from_str("{}").expect("leeres Objekt sollte lesbar sein")
}
