// crates/cli/src/config.rs
use crate::args::Args;
pub use add_license_header_engine::config::Config;

impl From<Args> for Config {
    fn from(_args: Args) -> Self {
        Self::default()
    }
}
