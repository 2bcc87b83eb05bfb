//! Application services - the call sites.
//!
//! Each service is handed a registry (and, where it applies, the discriminator
//! chosen by configuration) and forwards work through it. None of them branch
//! on which provider sits behind the discriminator.

pub mod area_service;
pub mod log_service;
pub mod print_service;
pub mod record_service;

pub use area_service::AreaService;
pub use log_service::LogService;
pub use print_service::PrintService;
pub use record_service::RecordService;
