// Skills: trait-based abstraction for pipeline capabilities.
//
// The Skill trait defines `run(payload) -> payload` plus a contract naming
// the keys on each side. MediaDownloader and Transcriber are placeholders
// behind it; swapping in real implementations doesn't touch callers.

pub mod media_downloader;
pub mod traits;
pub mod transcriber;

use std::path::Path;

use media_downloader::MediaDownloader;
use traits::Skill;
use transcriber::Transcriber;

/// All known skills, in display order.
pub fn registry(download_dir: &Path) -> Vec<Box<dyn Skill>> {
    vec![
        Box::new(MediaDownloader::new(download_dir)),
        Box::new(Transcriber),
    ]
}

/// Look up a skill by name. Accepts `-` in place of `_`.
pub fn find(download_dir: &Path, name: &str) -> Option<Box<dyn Skill>> {
    let wanted = name.trim().replace('-', "_");
    registry(download_dir)
        .into_iter()
        .find(|skill| skill.name() == wanted)
}
