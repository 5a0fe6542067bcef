use std::fmt;
use std::fs::{self, File};
use std::io::{self, prelude::*, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub enum LogSource {
    File(PathBuf),
    Stdin,
}

impl LogSource {
    /// Expands the CLI inputs into individual logs. Directories yield their
    /// ".json" files in name order; `data_dir` is only used when `inputs` is
    /// empty.
    pub fn collect(inputs: &[PathBuf], data_dir: Option<&Path>) -> Result<Vec<Self>> {
        let mut sources = vec![];

        let inputs = match (inputs, data_dir) {
            ([], Some(dir)) => vec![dir.to_owned()],
            ([], None) => return Ok(vec![Self::Stdin]),
            _ => inputs.to_vec(),
        };

        for input in inputs {
            if input.as_os_str() == "-" {
                sources.push(Self::Stdin);
            } else if input.is_dir() {
                sources.extend(json_files_in(&input)?.into_iter().map(Self::File));
            } else {
                sources.push(Self::File(input));
            }
        }

        Ok(sources)
    }

    pub fn open(&self) -> Result<Box<dyn Read>> {
        let reader: Box<dyn Read> = match self {
            Self::File(path) => Box::new(BufReader::new(
                File::open(path).with_context(|| format!("failed to open paifu file {path:?}"))?,
            )),
            Self::Stdin => Box::new(io::stdin()),
        };
        Ok(reader)
    }

    #[inline]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::File(path) => Some(path),
            Self::Stdin => None,
        }
    }
}

impl fmt::Display for LogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Stdin => f.write_str("<stdin>"),
        }
    }
}

fn json_files_in(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = vec![];
    for entry in fs::read_dir(dir).with_context(|| format!("failed to read directory {dir:?}"))? {
        let path = entry
            .with_context(|| format!("failed to read directory {dir:?}"))?
            .path();
        let is_json = path
            .extension()
            .map_or(false, |ext| ext.eq_ignore_ascii_case("json"));
        if is_json && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod test {
    use super::*;

    use std::env;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("paifu-stats-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn stdin_by_default() {
        let sources = LogSource::collect(&[], None).unwrap();
        assert!(matches!(sources.as_slice(), [LogSource::Stdin]));

        let sources = LogSource::collect(&[PathBuf::from("-")], None).unwrap();
        assert!(matches!(sources.as_slice(), [LogSource::Stdin]));
    }

    #[test]
    fn directories_in_name_order() {
        let dir = scratch_dir("collect");
        for name in ["b.json", "a.JSON", "c.txt"] {
            fs::write(dir.join(name), "{}").unwrap();
        }
        fs::create_dir(dir.join("nested.json")).unwrap();

        let sources = LogSource::collect(&[], Some(dir.as_path())).unwrap();
        let names: Vec<_> = sources
            .iter()
            .map(|s| s.path().and_then(Path::file_name).unwrap().to_owned())
            .collect();
        assert_eq!(names, ["a.JSON", "b.json"]);

        // explicit inputs win over the data directory
        let explicit = dir.join("c.txt");
        let sources = LogSource::collect(&[explicit.clone()], Some(dir.as_path())).unwrap();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].path(), Some(explicit.as_path()));
        assert_eq!(sources[0].to_string(), explicit.display().to_string());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_file_fails_on_open() {
        let source = LogSource::File("/nonexistent/paifu.json".into());
        assert!(source.open().is_err());
        assert_eq!(LogSource::Stdin.to_string(), "<stdin>");
    }
}
