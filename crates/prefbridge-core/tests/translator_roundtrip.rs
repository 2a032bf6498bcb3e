//! Integration tests for the settings translator.
//!
//! Drives the public API only: in-memory stores on both sides, full import
//! and export passes, and the decode priority order for composite choices.

use prefbridge_core::{
    BackendConfigStore, EfbCopyMethod, MemoryBackendStore, MemoryPreferenceStore, PrefValue,
    PreferenceStore, SettingsTranslator, XfbMode,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn efb_backend(copy: &str, texture: &str, cache: &str) -> MemoryBackendStore {
    MemoryBackendStore::new()
        .with("Video_Hacks", "EFBCopyEnable", copy)
        .with("Video_Hacks", "EFBToTextureEnable", texture)
        .with("Video_Hacks", "EFBCopyCacheEnable", cache)
}

fn imported(backend: &MemoryBackendStore) -> MemoryPreferenceStore {
    let mut prefs = MemoryPreferenceStore::new();
    SettingsTranslator::new().import_from_backend(backend, &mut prefs);
    prefs
}

// ── Composite round trips ─────────────────────────────────────────────────────

#[test]
fn test_every_efb_copy_method_survives_export_and_import() {
    for method in EfbCopyMethod::ALL {
        // Arrange
        let prefs = MemoryPreferenceStore::new().with("efbCopyMethod", method.label());
        let mut backend = MemoryBackendStore::new();

        // Act
        SettingsTranslator::new().export_to_backend(&prefs, &mut backend);
        let restored = imported(&backend);

        // Assert
        assert_eq!(
            restored.get_string("efbCopyMethod", "<missing>"),
            method.label(),
            "round trip of {method}"
        );
    }
}

#[test]
fn test_every_xfb_mode_survives_export_and_import() {
    for mode in XfbMode::ALL {
        let prefs = MemoryPreferenceStore::new().with("externalFrameBuffer", mode.label());
        let mut backend = MemoryBackendStore::new();

        SettingsTranslator::new().export_to_backend(&prefs, &mut backend);
        let restored = imported(&backend);

        assert_eq!(
            restored.get_string("externalFrameBuffer", "<missing>"),
            mode.label()
        );
    }
}

#[test]
fn test_switching_choice_over_stale_backend_still_round_trips() {
    // A backend left in "RAM (cached)" is re-exported as "Texture" and then
    // as "Off"; each import must see the latest choice.
    let translator = SettingsTranslator::new();
    let mut backend = efb_backend("True", "False", "True");

    for method in [EfbCopyMethod::Texture, EfbCopyMethod::Off, EfbCopyMethod::RamUncached] {
        let prefs = MemoryPreferenceStore::new().with("efbCopyMethod", method.label());
        translator.export_to_backend(&prefs, &mut backend);
        assert_eq!(
            imported(&backend).get_string("efbCopyMethod", ""),
            method.label()
        );
    }
}

// ── Decode priority ───────────────────────────────────────────────────────────

#[test]
fn test_copy_disabled_wins_over_other_flags() {
    let prefs = imported(&efb_backend("False", "True", "True"));
    assert_eq!(prefs.get_string("efbCopyMethod", ""), "Off");
}

#[test]
fn test_texture_wins_regardless_of_cache_flag() {
    for cache in ["True", "False"] {
        let prefs = imported(&efb_backend("True", "True", cache));
        assert_eq!(prefs.get_string("efbCopyMethod", ""), "Texture");
    }
}

#[test]
fn test_non_boolean_copy_flag_leaves_previous_ui_value() {
    // Arrange
    let backend = efb_backend("Yes please", "False", "False");
    let mut prefs = MemoryPreferenceStore::new().with("efbCopyMethod", "Texture");

    // Act
    let report = SettingsTranslator::new().import_from_backend(&backend, &mut prefs);

    // Assert
    assert_eq!(report.unmatched, vec!["efbCopyMethod"]);
    assert_eq!(prefs.get_string("efbCopyMethod", ""), "Texture");
}

// ── Polarity ──────────────────────────────────────────────────────────────────

#[test]
fn test_format_change_polarity_is_inverted_on_import_only() {
    let backend = MemoryBackendStore::new().with("Video_Hacks", "EFBEmulateFormatChanges", "False");
    let prefs = imported(&backend);
    assert!(prefs.get_bool("ignoreFormatChanges", false));

    let backend = MemoryBackendStore::new().with("Video_Hacks", "EFBEmulateFormatChanges", "True");
    let prefs = imported(&backend);
    assert!(!prefs.get_bool("ignoreFormatChanges", true));

    // Export writes the UI value unchanged.
    let prefs = MemoryPreferenceStore::new().with("ignoreFormatChanges", true);
    let mut backend = MemoryBackendStore::new();
    SettingsTranslator::new().export_to_backend(&prefs, &mut backend);
    assert_eq!(
        backend.get("Video_Hacks", "EFBEmulateFormatChanges", ""),
        "True"
    );
}

#[test]
fn test_skip_efb_access_is_inverted_on_export_only() {
    for (skip, literal) in [(true, "False"), (false, "True")] {
        let prefs = MemoryPreferenceStore::new().with("skipEFBAccess", skip);
        let mut backend = MemoryBackendStore::new();

        SettingsTranslator::new().export_to_backend(&prefs, &mut backend);

        assert_eq!(backend.get("Video_Hacks", "EFBAccessEnable", ""), literal);
    }

    let backend = MemoryBackendStore::new().with("Video_Hacks", "EFBAccessEnable", "True");
    assert!(imported(&backend).get_bool("skipEFBAccess", false));
}

// ── Full passes ───────────────────────────────────────────────────────────────

#[test]
fn test_import_then_export_preserves_simple_backend_values() {
    // Arrange
    let original = MemoryBackendStore::new()
        .with("Core", "CPUCore", "1")
        .with("Core", "CPUThread", "True")
        .with("Core", "GFXBackend", "OGL")
        .with("Video_Settings", "EFBScale", "4")
        .with("Video_Settings", "SafeTextureCacheColorSamples", "512")
        .with("Video_Enhancements", "MaxAnisotropy", "3")
        .with("Video_Hacks", "DlistCachingEnable", "True");

    // Act
    let prefs = imported(&original);
    let mut exported = MemoryBackendStore::new();
    SettingsTranslator::new().export_to_backend(&prefs, &mut exported);

    // Assert
    for (section, key, value) in original.entries() {
        assert_eq!(
            exported.get(section, key, "<missing>"),
            value,
            "[{section}] {key}"
        );
    }
}

#[test]
fn test_import_writes_every_catalogued_preference() {
    let prefs = imported(&MemoryBackendStore::new());

    let translator = SettingsTranslator::new();
    for name in translator.catalog().names() {
        assert!(prefs.value(name).is_some(), "{name} not imported");
    }
    assert_eq!(prefs.value("showFPS"), Some(&PrefValue::Bool(false)));
    assert_eq!(prefs.commits(), 1);
}
