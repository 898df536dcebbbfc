//! HTTP-Transport über `reqwest` (blocking) mit einem Worker-Thread je Anfrage.

use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use url::Url;

use super::{LookupClient, LookupCompletion, LookupError, LookupRequest, LookupTicket};
use crate::core::IdentifyResult;

/// Führt Service-Anfragen im Hintergrund aus und sammelt die Ergebnisse in einem Kanal.
pub struct HttpLookupClient {
    client: reqwest::blocking::Client,
    sender: Sender<LookupCompletion>,
    receiver: Receiver<LookupCompletion>,
}

impl HttpLookupClient {
    /// Erstellt einen Client mit Timeout je Anfrage.
    pub fn new(timeout: Duration) -> Result<Self, LookupError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LookupError::Unavailable(e.to_string()))?;
        Ok(Self::with_client(client))
    }

    /// Verwendet einen vom Host vorkonfigurierten Client (Proxy, TLS, Header).
    pub fn with_client(client: reqwest::blocking::Client) -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            client,
            sender,
            receiver,
        }
    }
}

impl LookupClient for HttpLookupClient {
    fn submit(&mut self, ticket: LookupTicket, request: &LookupRequest, url: Url) {
        log::debug!("{:?}-Anfrage (Generation {}): {}", ticket.kind, ticket.generation, url);
        let client = self.client.clone();
        let sender = self.sender.clone();
        let endpoint = request.endpoint();

        let spawned = std::thread::Builder::new()
            .name(format!("gw-info-{endpoint}"))
            .spawn(move || {
                let outcome = fetch(&client, url);
                if sender.send(LookupCompletion { ticket, outcome }).is_err() {
                    log::debug!("Lookup-Ergebnis verworfen: Empfänger existiert nicht mehr");
                }
            });

        if let Err(e) = spawned {
            let outcome = Err(LookupError::Unavailable(e.to_string()));
            // Empfänger gehört uns selbst, Senden kann hier nicht fehlschlagen
            let _ = self.sender.send(LookupCompletion { ticket, outcome });
        }
    }

    fn poll_completed(&mut self) -> Vec<LookupCompletion> {
        self.receiver.try_iter().collect()
    }
}

fn fetch(client: &reqwest::blocking::Client, url: Url) -> Result<IdentifyResult, LookupError> {
    let response = client
        .get(url)
        .send()
        .map_err(|e| LookupError::Network(e.to_string()))?;
    let status = response.status();
    if !status.is_success() {
        return Err(LookupError::Status(status.as_u16()));
    }
    response
        .json::<IdentifyResult>()
        .map_err(|e| LookupError::Decode(e.to_string()))
}
