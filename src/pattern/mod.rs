//! Anbindung des externen Muster-Moduls.
//!
//! Die Profilkurve wird unverändert über einen asynchronen Request/Response-Kanal
//! an ein Backend gereicht, das in einem eigenen Thread läuft. Die Anwendung
//! kennt nur den Vertrag (`contract`) und das Busy/Idle-Signal.

pub mod contract;
pub mod endpoint;
pub mod ring_backend;
pub mod wire;
pub mod worker;

pub use contract::{
    MeshInfo, Pattern, PatternBackend, PatternConfig, PatternError, PatternRow, RequestId,
};
pub use ring_backend::RingPatternBackend;
pub use worker::{PatternResult, PatternWorker, DEFAULT_REQUEST_TIMEOUT};
