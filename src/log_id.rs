use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

/// `YYMMDD-<uuid>`, the form Mahjong Soul uses for paifu IDs.
static MATCH_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d{6}-[0-9a-f-]{36})").expect("failed to compile match ID regex"));

/// Guesses the match ID from the file name of a saved paifu, for logs that do
/// not carry one.
pub fn guess_match_id(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_str()?;
    MATCH_ID
        .captures(name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_owned())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn guess() {
        let cases = [
            (
                "paifu/240101-0d5f5c3e-8a1b-4c2d-9e0f-1a2b3c4d5e6f.json",
                Some("240101-0d5f5c3e-8a1b-4c2d-9e0f-1a2b3c4d5e6f"),
            ),
            (
                "dl_240103-3F2B8E61-7C4A-4D59-B0E1-9A8F7E6D5C4B (1).json",
                Some("240103-3F2B8E61-7C4A-4D59-B0E1-9A8F7E6D5C4B"),
            ),
            // the directory part is never looked at
            ("240101-0d5f5c3e-8a1b-4c2d-9e0f-1a2b3c4d5e6f/log.json", None),
            ("240101-short.json", None),
            ("", None),
        ];

        for (path, expected) in cases {
            assert_eq!(guess_match_id(Path::new(path)).as_deref(), expected, "{path}");
        }
    }
}
