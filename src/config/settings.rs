use crate::config::lookup::{as_string, as_unsigned, Lookup};
use crate::error::{NodeError, Result};
use log::{debug, info};
use once_cell::sync::OnceCell;
use serde_json::{Map, Value};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Directory, relative to the deployment root, holding the settings file
pub const CONFIG_DIR: &str = "config/";
/// File name of the settings file
pub const CONFIG_NAME: &str = "config.json";

/// Lazily loaded view over the node's JSON settings file.
///
/// The file is parsed on the first lookup and never re-read afterwards, even
/// when that first read fails: the failure itself is kept and handed back to
/// every later lookup. First use is guarded by a `OnceCell`, so concurrent
/// callers racing the first lookup still load the file once.
pub struct Settings {
    file_path: PathBuf,
    tree: OnceCell<Result<Map<String, Value>>>,
    loads: AtomicUsize,
}

impl Settings {
    /// Settings for a deployment rooted at `root`, read from `config/config.json`
    pub fn new(root: impl AsRef<Path>) -> Result<Settings> {
        let relative = Path::new(CONFIG_DIR).join(CONFIG_NAME);
        let file_path = Self::resolve_absolute_path(root.as_ref(), &relative)?;
        Ok(Self::with_path(file_path))
    }

    /// Settings read from an explicit file, made absolute against the working directory
    pub fn from_file(path: impl AsRef<Path>) -> Result<Settings> {
        let path = path.as_ref();
        let file_path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            Self::resolve_absolute_path(&working_dir(path)?, path)?
        };
        Ok(Self::with_path(file_path))
    }

    fn with_path(file_path: PathBuf) -> Settings {
        Settings {
            file_path,
            tree: OnceCell::new(),
            loads: AtomicUsize::new(0),
        }
    }

    /// Joins `configured` onto `root` unless it is already absolute.
    /// A relative `root` is itself taken relative to the working directory.
    pub fn resolve_absolute_path(root: &Path, configured: &Path) -> Result<PathBuf> {
        if configured.is_absolute() {
            return Ok(configured.to_path_buf());
        }
        let root = if root.is_absolute() {
            root.to_path_buf()
        } else {
            working_dir(root)?.join(root)
        };
        Ok(root.join(configured))
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.tree.get(), Some(Ok(_)))
    }

    /// How many times the file has been read from disk
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    fn load(&self) -> Result<Map<String, Value>> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        info!("Loading settings from {}", self.file_path.display());

        let bytes = fs::read(&self.file_path).map_err(|e| NodeError::Io {
            path: self.file_path.clone(),
            message: e.to_string(),
        })?;

        serde_json::from_slice::<Map<String, Value>>(&bytes).map_err(|e| {
            NodeError::MalformedSettings {
                path: self.file_path.clone(),
                message: e.to_string(),
            }
        })
    }

    fn tree(&self) -> Result<&Map<String, Value>> {
        match self.tree.get_or_init(|| self.load()) {
            Ok(tree) => Ok(tree),
            Err(e) => Err(e.clone()),
        }
    }

    /// Looks up a dot-delimited path such as `blockchain.dataPath`.
    ///
    /// Returns `Ok(None)` when nothing is stored there. When the walk reaches a
    /// value that is not an object before the path is exhausted, that value is
    /// returned as a partial result instead of failing. JSON `null` counts as
    /// absent.
    pub fn get(&self, path: &str) -> Result<Option<Value>> {
        let tree = self.tree()?;
        let value = resolve(tree, path).cloned();
        debug!("Setting {path} resolved: {}", value.is_some());
        Ok(value)
    }

    pub fn get_str(&self, path: &str) -> Result<Lookup<String>> {
        Ok(as_string(self.get(path)?))
    }

    /// Reads an unsigned integer given either as a JSON number or a decimal string.
    /// The string form takes plain digits only: no sign, no surrounding whitespace.
    pub fn get_u64(&self, path: &str) -> Result<Lookup<u64>> {
        let raw = match as_unsigned(self.get(path)?) {
            Lookup::Found(value) => value,
            Lookup::Missing => return Ok(Lookup::Missing),
            Lookup::WrongKind { found } => return Ok(Lookup::WrongKind { found }),
        };
        let parsed = match &raw {
            Value::String(s) if s.bytes().all(|b| b.is_ascii_digit()) => s.parse::<u64>().ok(),
            Value::Number(n) => n.as_u64(),
            _ => None,
        };
        Ok(match parsed {
            Some(n) => Lookup::Found(n),
            None => Lookup::WrongKind {
                found: "non-integer",
            },
        })
    }
}

fn working_dir(for_path: &Path) -> Result<PathBuf> {
    env::current_dir().map_err(|e| NodeError::Io {
        path: for_path.to_path_buf(),
        message: e.to_string(),
    })
}

fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

fn resolve<'a>(tree: &'a Map<String, Value>, path: &str) -> Option<&'a Value> {
    let keys: Vec<&str> = path.split('.').collect();
    if keys.len() == 1 {
        return present(tree.get(path));
    }

    let mut current = present(tree.get(keys[0]))?;
    for key in &keys[1..] {
        match current {
            Value::Object(map) => current = present(map.get(*key))?,
            _ => return Some(current),
        }
    }
    Some(current)
}
