// crates/cli/src/presentation.rs
use std::path::Path;

pub fn notice(path: &Path) -> String {
    format!("Adding license to {}", path.display())
}

pub fn print_added(path: &Path) {
    println!("{}", notice(path));
}
