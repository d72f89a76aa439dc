use super::api::ScanApi;
use super::fsm::{ScanEvent, ScanState, ScanStateMachine};
use crate::Result;
use crate::recognition::{BookReference, ChapterMatch};
use tracing::warn;

/// One encoded camera frame, as the capture surface hands it over.
#[derive(Debug, Clone)]
pub struct CapturedFrame {
    /// Encoded image as a data URI (typically base64 JPEG).
    pub data_uri: String,
}

/// Source of still frames. The actual camera UI is out of scope; anything
/// that can produce an encoded frame plugs in here.
pub trait CaptureSource {
    fn capture(&mut self) -> Result<CapturedFrame>;
}

/// Drives one capture-and-recognize exchange against the service.
///
/// The session owns the client state machine: a scan is busy from trigger
/// until it settles, capture failures never touch the network, and every
/// response is validated before it is shown as a success.
pub struct ScanSession {
    machine: ScanStateMachine,
    api: ScanApi,
}

impl ScanSession {
    pub fn new(api: ScanApi) -> Self {
        Self {
            machine: ScanStateMachine::new(),
            api,
        }
    }

    pub fn state(&self) -> &ScanState {
        self.machine.current_state()
    }

    pub fn is_busy(&self) -> bool {
        self.state().is_busy()
    }

    /// Captures a frame and submits it. Returns the settled state.
    pub async fn scan(&mut self, camera: &mut dyn CaptureSource) -> &ScanState {
        // Trigger is rejected while a submission is in flight.
        if self.machine.transition(ScanEvent::Trigger).is_err() {
            return self.state();
        }

        let frame = match camera.capture() {
            Ok(frame) => frame,
            Err(e) => {
                warn!("Frame capture failed: {}", e);
                self.settle(ScanEvent::CaptureFailed);
                return self.state();
            }
        };

        let event = match self.api.submit(&frame.data_uri).await {
            Ok(answer) => classify_answer(&answer),
            Err(e) => {
                warn!("Scan request failed: {}", e);
                ScanEvent::RequestFailed
            }
        };

        self.settle(event);
        self.state()
    }

    fn settle(&mut self, event: ScanEvent) {
        // Every settle event is valid from Loading; a refused transition
        // would mean the machine and session disagree, which is worth a log
        // but must not leave the UI stuck on busy.
        if let Err(e) = self.machine.transition(event) {
            warn!("Scan session failed to settle: {}", e);
        }
    }
}

/// Validates the service's answer the way the original UI did: the service
/// is not fully trusted even on a nominal success.
fn classify_answer(answer: &serde_json::Value) -> ScanEvent {
    match answer.get("status").and_then(|s| s.as_str()) {
        Some("error") => ScanEvent::BackendRejected(
            answer
                .get("message")
                .and_then(|m| m.as_str())
                .map(str::to_string),
        ),
        Some("success") => {
            let data = &answer["data"];
            let name = data["book"]["name"].as_str().unwrap_or_default();
            let short_name = data["book"]["shortName"].as_str().unwrap_or_default();
            let chapter = data["chapter"].as_str().unwrap_or_default();

            if name.is_empty() || short_name.is_empty() || chapter.is_empty() {
                ScanEvent::MalformedAnswer
            } else {
                ScanEvent::Recognized(ChapterMatch {
                    book: BookReference {
                        name: name.to_string(),
                        short_name: short_name.to_string(),
                    },
                    chapter: chapter.to_string(),
                })
            }
        }
        _ => ScanEvent::MalformedAnswer,
    }
}
