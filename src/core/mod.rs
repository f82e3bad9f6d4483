pub mod error;
pub mod loader;
pub mod scanner;
pub mod server;

pub use error::LoadError;
pub use loader::{load_post, parse_post};
pub use scanner::{ScanEntry, ScanFailure, ScanReport, Scanner};
pub use server::Server;
