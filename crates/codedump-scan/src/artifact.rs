//! Artifact naming and framing.

use std::io::{self, Write};
use std::path::Path;

use chrono::{DateTime, Local};

use codedump_core::CollectConfig;

/// Rule line framing the artifact header.
pub const HEADER_RULE: &str = "================================================";

/// Timestamp format used in artifact file names.
const NAME_TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Timestamp format used in the artifact header.
const HEADER_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Base name of the collected directory.
pub fn project_name(root: &Path) -> String {
    root.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "root".to_string())
}

/// File name for an artifact.
///
/// `attempt` 0 yields `dump_<project>_<timestamp>.txt`; later attempts add
/// `_<attempt>` before the suffix so same-second runs never collide.
pub fn artifact_name(
    config: &CollectConfig,
    project: &str,
    timestamp: &DateTime<Local>,
    attempt: u32,
) -> String {
    let stamp = timestamp.format(NAME_TIMESTAMP_FORMAT);
    if attempt == 0 {
        format!(
            "{}{project}_{stamp}{}",
            config.artifact_prefix, config.artifact_suffix
        )
    } else {
        format!(
            "{}{project}_{stamp}_{attempt}{}",
            config.artifact_prefix, config.artifact_suffix
        )
    }
}

/// Write the artifact header. Returns the number of bytes written.
pub fn write_header<W: Write>(
    writer: &mut W,
    project: &str,
    root: &Path,
    timestamp: &DateTime<Local>,
) -> io::Result<u64> {
    let header = format!(
        "{HEADER_RULE}\n📁 PROJECT: {project}\n📍 PATH: {}\n🕒 COLLECTED: {}\n{HEADER_RULE}\n\n",
        root.display(),
        timestamp.format(HEADER_TIMESTAMP_FORMAT),
    );
    writer.write_all(header.as_bytes())?;
    Ok(header.len() as u64)
}

/// Write one file block. Returns the number of bytes written.
pub fn write_block<W: Write>(writer: &mut W, relative: &Path, contents: &str) -> io::Result<u64> {
    let block = format!("####\n{}\n{contents}\n#####\n\n", relative.display());
    writer.write_all(block.as_bytes())?;
    Ok(block.len() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::path::PathBuf;

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap()
    }

    #[test]
    fn test_project_name() {
        assert_eq!(project_name(Path::new("/home/user/webapp")), "webapp");
        assert_eq!(project_name(Path::new("/")), "root");
    }

    #[test]
    fn test_artifact_name() {
        let config = CollectConfig::default();
        let name = artifact_name(&config, "webapp", &fixed_time(), 0);
        assert_eq!(name, "dump_webapp_20240309070501.txt");
        assert!(config.is_artifact_name(&name));

        let retry = artifact_name(&config, "webapp", &fixed_time(), 2);
        assert_eq!(retry, "dump_webapp_20240309070501_2.txt");
        assert!(config.is_artifact_name(&retry));
    }

    #[test]
    fn test_header_format() {
        let mut out = Vec::new();
        let written =
            write_header(&mut out, "webapp", Path::new("/srv/webapp"), &fixed_time()).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(written as usize, text.len());
        assert_eq!(
            text,
            "================================================\n\
             📁 PROJECT: webapp\n\
             📍 PATH: /srv/webapp\n\
             🕒 COLLECTED: 2024-03-09 07:05:01\n\
             ================================================\n\n"
        );
    }

    #[test]
    fn test_block_format() {
        let mut out = Vec::new();
        let relative: PathBuf = ["src", "main.rs"].iter().collect();
        write_block(&mut out, &relative, "fn main() {}").unwrap();
        let text = String::from_utf8(out).unwrap();

        let expected = format!("####\n{}\nfn main() {{}}\n#####\n\n", relative.display());
        assert_eq!(text, expected);
    }
}
