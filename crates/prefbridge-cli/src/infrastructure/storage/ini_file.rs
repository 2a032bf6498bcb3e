//! INI file adapter for the emulator's backend configuration.
//!
//! The format is the one the emulator writes:
//!
//! ```ini
//! [Core]
//! CPUCore = 1
//! CPUThread = True
//!
//! [Video_Hacks]
//! EFBCopyEnable = False
//! ```
//!
//! Section and key lookups ignore ASCII case, and a value wrapped in double
//! quotes reads without them, as the emulator itself parses the file.
//! Every line keeps its original text until `set` changes it, so comments
//! (`#` or `;`), quoting and spacing survive a save, and a file this store did
//! not change is reproduced line for line (apart from CRLF endings, which are
//! written back as LF).

use std::path::{Path, PathBuf};

use prefbridge_core::BackendConfigStore;
use tracing::debug;

use super::{read_optional, write_atomically, StorageError};
use crate::application::sync_settings::PersistentStore;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Line {
    Section { name: String, raw: String },
    Entry { key: String, value: String, raw: String },
    Verbatim(String),
}

impl Line {
    fn entry(key: &str, value: &str) -> Line {
        Line::Entry {
            key: key.to_string(),
            value: value.to_string(),
            raw: format!("{key} = {value}"),
        }
    }

    fn raw(&self) -> &str {
        match self {
            Line::Section { raw, .. } | Line::Entry { raw, .. } | Line::Verbatim(raw) => raw,
        }
    }
}

fn parse_line(raw: &str) -> Line {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with(';') {
        return Line::Verbatim(raw.to_string());
    }
    if let Some(name) = trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
    {
        return Line::Section {
            name: name.trim().to_string(),
            raw: raw.to_string(),
        };
    }
    match trimmed.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Line::Entry {
            key: key.trim().to_string(),
            value: strip_quotes(value.trim()).to_string(),
            raw: raw.to_string(),
        },
        _ => Line::Verbatim(raw.to_string()),
    }
}

fn strip_quotes(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(value)
}

/// The emulator INI file, held in memory between `open` and `persist`.
#[derive(Debug, Clone)]
pub struct IniFileStore {
    path: PathBuf,
    lines: Vec<Line>,
}

impl IniFileStore {
    /// Loads `path`, or starts empty if the file does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] for file-system errors other than
    /// "not found".
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let text = read_optional(&path)?.unwrap_or_default();
        let store = Self::parse(path, &text);
        debug!(
            path = %store.path.display(),
            lines = store.lines.len(),
            "loaded backend config"
        );
        Ok(store)
    }

    /// Builds a store from INI text without touching disk.
    pub fn parse(path: impl Into<PathBuf>, text: &str) -> Self {
        let lines = text.lines().map(parse_line).collect();
        Self {
            path: path.into(),
            lines,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Renders the current contents as INI text.
    pub fn to_ini_string(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line.raw());
            out.push('\n');
        }
        out
    }

    /// Writes the contents back to [`path`](Self::path).
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the file cannot be written.
    pub fn save(&self) -> Result<(), StorageError> {
        write_atomically(&self.path, &self.to_ini_string())
    }

    /// Line range of the first section named `section`, ignoring case.
    ///
    /// The range starts just past the header (at 0 for the unnamed section
    /// `""` above the first header) and ends at the next header.  Later
    /// sections with the same name are ignored, as the emulator ignores them.
    fn section_span(&self, section: &str) -> Option<(usize, usize)> {
        let start = if section.is_empty() {
            0
        } else {
            self.lines.iter().position(|line| match line {
                Line::Section { name, .. } => name.eq_ignore_ascii_case(section),
                _ => false,
            })? + 1
        };
        let end = self.lines[start..]
            .iter()
            .position(|line| matches!(line, Line::Section { .. }))
            .map_or(self.lines.len(), |offset| start + offset);
        Some((start, end))
    }

    /// Index of the `key` entry inside `section`, ignoring case.
    fn find_entry(&self, section: &str, key: &str) -> Option<usize> {
        let (start, end) = self.section_span(section)?;
        (start..end).find(|&idx| match &self.lines[idx] {
            Line::Entry { key: k, .. } => k.eq_ignore_ascii_case(key),
            _ => false,
        })
    }

    /// Index just past the last entry of `section`, if the section exists.
    fn section_insert_point(&self, section: &str) -> Option<usize> {
        let (start, end) = self.section_span(section)?;
        let last_entry = (start..end)
            .rev()
            .find(|&idx| matches!(self.lines[idx], Line::Entry { .. }));
        Some(last_entry.map_or(start, |idx| idx + 1))
    }
}

impl BackendConfigStore for IniFileStore {
    fn get(&self, section: &str, key: &str, default: &str) -> String {
        match self.find_entry(section, key).map(|idx| &self.lines[idx]) {
            Some(Line::Entry { value, .. }) => value.clone(),
            _ => default.to_string(),
        }
    }

    fn set(&mut self, section: &str, key: &str, value: &str) {
        if let Some(idx) = self.find_entry(section, key) {
            // Keep the file's own spelling of the key.
            let existing = match &self.lines[idx] {
                Line::Entry { key: k, .. } => k.clone(),
                _ => key.to_string(),
            };
            self.lines[idx] = Line::entry(&existing, value);
            return;
        }

        let entry = Line::entry(key, value);
        match self.section_insert_point(section) {
            Some(at) => self.lines.insert(at, entry),
            None => {
                if !self.lines.is_empty() {
                    self.lines.push(Line::Verbatim(String::new()));
                }
                self.lines.push(Line::Section {
                    name: section.to_string(),
                    raw: format!("[{section}]"),
                });
                self.lines.push(entry);
            }
        }
    }
}

impl PersistentStore for IniFileStore {
    type Error = StorageError;

    fn persist(&self) -> Result<(), StorageError> {
        self.save()
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    const SAMPLE: &str = "\
# Dolphin config
[Core]
CPUCore = 1
CPUThread = True

[Video_Hacks]
; hacks
EFBCopyEnable=False
EFBAccessEnable = True
";

    #[test]
    fn test_get_reads_trimmed_values_and_defaults_on_miss() {
        let store = IniFileStore::parse("Dolphin.ini", SAMPLE);

        assert_eq!(store.get("Core", "CPUCore", "3"), "1");
        assert_eq!(store.get("Video_Hacks", "EFBCopyEnable", "True"), "False");
        assert_eq!(store.get("Core", "Fastmem", "False"), "False");
        assert_eq!(store.get("Nope", "CPUCore", "x"), "x");
    }

    #[test]
    fn test_lookups_are_section_scoped_and_ignore_case() {
        let store = IniFileStore::parse("Dolphin.ini", SAMPLE);

        assert_eq!(store.get("Video_Hacks", "CPUCore", "none"), "none");
        assert_eq!(store.get("core", "CPUCore", "none"), "1");
        assert_eq!(store.get("Core", "cpucore", "none"), "1");
    }

    #[test]
    fn test_lowercase_section_and_key_are_read() {
        let text = "[video_hacks]\nefbcopyenable = True\nEFBToTextureEnable = True\n";
        let store = IniFileStore::parse("Dolphin.ini", text);

        assert_eq!(store.get("Video_Hacks", "EFBCopyEnable", "False"), "True");
        assert_eq!(store.get("Video_Hacks", "EFBToTextureEnable", "False"), "True");
    }

    #[test]
    fn test_quoted_value_reads_without_quotes() {
        let store = IniFileStore::parse(
            "Dolphin.ini",
            "[Core]\nGFXBackend = \"OGL\"\nCPUCore = \"\n",
        );

        assert_eq!(store.get("Core", "GFXBackend", ""), "OGL");
        assert_eq!(store.get("Core", "CPUCore", ""), "\"");
    }

    #[test]
    fn test_set_on_lowercase_section_updates_it_instead_of_adding_another() {
        // Arrange
        let text = "[video_hacks]\nefbcopyenable = True\n[Core]\nGFXBackend = \"OGL\"\n";
        let mut store = IniFileStore::parse("Dolphin.ini", text);

        // Act
        store.set("Video_Hacks", "EFBCopyEnable", "False");
        store.set("Video_Hacks", "EFBToTextureEnable", "True");

        // Assert
        assert_eq!(
            store.to_ini_string(),
            "[video_hacks]\nefbcopyenable = False\nEFBToTextureEnable = True\n\
             [Core]\nGFXBackend = \"OGL\"\n"
        );
    }

    #[test]
    fn test_only_first_of_duplicate_sections_is_used() {
        let text = "[Core]\nCPUCore = 1\n[core]\nCPUCore = 4\nFastmem = True\n";
        let mut store = IniFileStore::parse("Dolphin.ini", text);

        assert_eq!(store.get("Core", "CPUCore", ""), "1");
        assert_eq!(store.get("Core", "Fastmem", "False"), "False");

        store.set("Core", "Fastmem", "True");
        assert!(store
            .to_ini_string()
            .starts_with("[Core]\nCPUCore = 1\nFastmem = True\n[core]\n"));
    }

    #[test]
    fn test_unchanged_store_round_trips_text() {
        let text = "# Dolphin config\n[ Core ]\nCPUCore=1\nGFXBackend = \"OGL\"\n; hacks\n";
        let store = IniFileStore::parse("Dolphin.ini", text);

        assert_eq!(store.to_ini_string(), text);
        assert_eq!(IniFileStore::parse("Dolphin.ini", SAMPLE).to_ini_string(), SAMPLE);
    }

    #[test]
    fn test_set_existing_key_rewrites_in_place() {
        // Arrange
        let mut store = IniFileStore::parse("Dolphin.ini", SAMPLE);

        // Act
        store.set("Core", "CPUCore", "2");

        // Assert
        let rendered = store.to_ini_string();
        let core_pos = rendered.find("CPUCore = 2").expect("rewritten");
        let thread_pos = rendered.find("CPUThread").unwrap();
        assert!(core_pos < thread_pos, "order preserved:\n{rendered}");
        assert!(!rendered.contains("CPUCore = 1"));
    }

    #[test]
    fn test_set_new_key_appends_inside_existing_section() {
        let mut store = IniFileStore::parse("Dolphin.ini", SAMPLE);

        store.set("Core", "Fastmem", "True");

        let rendered = store.to_ini_string();
        let fastmem = rendered.find("Fastmem = True").unwrap();
        let hacks = rendered.find("[Video_Hacks]").unwrap();
        assert!(fastmem < hacks, "new key stays in [Core]:\n{rendered}");
        assert_eq!(store.get("Core", "Fastmem", ""), "True");
    }

    #[test]
    fn test_set_in_missing_section_appends_section() {
        let mut store = IniFileStore::parse("Dolphin.ini", SAMPLE);

        store.set("Video_Settings", "UseXFB", "True");

        assert!(store
            .to_ini_string()
            .ends_with("\n[Video_Settings]\nUseXFB = True\n"));
        assert_eq!(store.get("Video_Settings", "UseXFB", ""), "True");
    }

    #[test]
    fn test_set_on_empty_store_has_no_leading_blank_line() {
        let mut store = IniFileStore::parse("Dolphin.ini", "");
        store.set("Android", "ScreenControls", "True");
        assert_eq!(store.to_ini_string(), "[Android]\nScreenControls = True\n");
    }

    #[test]
    fn test_crlf_input_is_accepted() {
        let store = IniFileStore::parse("Dolphin.ini", "[Core]\r\nCPUCore = 4\r\n");
        assert_eq!(store.get("Core", "CPUCore", ""), "4");
    }

    #[test]
    fn test_open_missing_file_is_empty_and_save_creates_it() {
        // Arrange
        let dir = std::env::temp_dir().join(format!("prefbridge_ini_{}", Uuid::new_v4()));
        let path = dir.join("Dolphin.ini");

        // Act
        let mut store = IniFileStore::open(&path).expect("open");
        store.set("Core", "GFXBackend", "OGL");
        store.save().expect("save");
        let reloaded = IniFileStore::open(&path).expect("reopen");

        // Assert
        assert_eq!(reloaded.get("Core", "GFXBackend", ""), "OGL");
        std::fs::remove_dir_all(&dir).ok();
    }
}
