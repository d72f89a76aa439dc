mod api;
mod fsm;
mod session;

pub use api::ScanApi;
pub use fsm::{ScanEvent, ScanState, ScanStateMachine};
pub use session::{CaptureSource, CapturedFrame, ScanSession};
