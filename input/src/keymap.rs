use std::collections::HashMap;
use std::path::Path;

/// Logical button name (lowercase) to physical key name. Partial maps are
/// expected while iterating on bindings; lookups for missing names return
/// `None` instead of failing.
#[derive(Clone, Debug, Default)]
pub struct Keymap {
    map: HashMap<String, String>,
}

#[derive(Debug)]
pub enum KeymapError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl std::fmt::Display for KeymapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeymapError::Io(err) => write!(f, "can't read keymap: {err}"),
            KeymapError::Parse(err) => write!(f, "malformed keymap: {err}"),
        }
    }
}

impl std::error::Error for KeymapError {}

impl From<std::io::Error> for KeymapError {
    fn from(err: std::io::Error) -> KeymapError {
        KeymapError::Io(err)
    }
}

impl From<serde_json::Error> for KeymapError {
    fn from(err: serde_json::Error) -> KeymapError {
        KeymapError::Parse(err)
    }
}

impl Keymap {
    pub fn load(path: &Path) -> Result<Keymap, KeymapError> {
        let text = std::fs::read_to_string(path)?;
        let map: HashMap<String, String> = serde_json::from_str(&text)?;
        Ok(map.into_iter().collect())
    }
    pub fn physical(&self, logical: &str) -> Option<&str> {
        self.map.get(&logical.to_lowercase()).map(String::as_str)
    }
    pub fn len(&self) -> usize {
        self.map.len()
    }
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl FromIterator<(String, String)> for Keymap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Keymap {
        Keymap {
            map: iter
                .into_iter()
                .map(|(logical, physical)| (logical.to_lowercase(), physical))
                .collect(),
        }
    }
}
