//! End-to-end tests for reading manifests through the public API.

use serde_json::{json, Value};
use speech_manifest::{
    normalize_default, read, read_with, resolve, ManifestError, ManifestRecord, ManifestResult,
};
use std::path::Path;
use tempfile::TempDir;

fn write_manifest(dir: &Path, name: &str, lines: &[Value]) -> String {
    let path = dir.join(name);
    let content: String = lines.iter().map(|l| format!("{}\n", l)).collect();
    std::fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn test_read_dataset_with_relative_audio() {
    let data = TempDir::new().unwrap();
    std::fs::create_dir_all(data.path().join("wavs")).unwrap();
    for name in ["a.wav", "b.wav"] {
        std::fs::write(data.path().join("wavs").join(name), b"RIFF").unwrap();
    }
    std::fs::write(data.path().join("b.txt"), "second\nsample\n").unwrap();

    let train = write_manifest(
        data.path(),
        "train.json",
        &[
            json!({"audio_filename": "wavs/a.wav", "duration": 1.5, "text": "first sample", "lang": "en"}),
            json!({
                "audio_file": "wavs/b.wav",
                "duration": 2.0,
                "text_filepath": data.path().join("b.txt").to_str().unwrap(),
                "orig_sample_rate": 16000,
            }),
        ],
    );
    let dev = write_manifest(
        data.path(),
        "dev.json",
        &[json!({"audio_filepath": "/abs/c.wav", "duration": 0.5, "normalized_text": "third"})],
    );

    let records: Vec<ManifestRecord> = read(vec![train, dev])
        .collect::<ManifestResult<_>>()
        .unwrap();

    assert_eq!(records.iter().map(|r| r.id).collect::<Vec<_>>(), vec![0, 1, 2]);

    assert_eq!(Path::new(&records[0].audio_file), data.path().join("wavs/a.wav"));
    assert_eq!(records[0].text, "first sample");
    assert_eq!(records[0].lang, Some(json!("en")));

    assert_eq!(Path::new(&records[1].audio_file), data.path().join("wavs/b.wav"));
    assert_eq!(records[1].text, "secondsample");
    assert_eq!(records[1].orig_sr, Some(json!(16000)));

    assert_eq!(records[2].audio_file, "/abs/c.wav");
    assert_eq!(records[2].text, "third");
    assert_eq!(records[2].rttm_file, None);
}

#[test]
fn test_single_location_and_fatal_error() {
    let data = TempDir::new().unwrap();
    let manifest = write_manifest(
        data.path(),
        "train.json",
        &[
            json!({"audio_file": "/abs/a.wav", "duration": 1.0}),
            json!({"audio_file": "/abs/b.wav"}),
            json!({"audio_file": "/abs/c.wav", "duration": 1.0}),
        ],
    );

    let results: Vec<_> = read(manifest.as_str()).collect();
    assert_eq!(results.len(), 2);
    assert!(results[0].is_ok());
    match &results[1] {
        Err(err @ ManifestError::Schema { .. }) => {
            let message = err.to_string();
            assert!(message.contains(&manifest));
            assert!(message.contains("/abs/b.wav"));
        }
        other => panic!("expected schema error, got {:?}", other),
    }
}

#[test]
fn test_read_with_custom_normalizer() {
    let data = TempDir::new().unwrap();
    let manifest = write_manifest(
        data.path(),
        "custom.json",
        &[json!({"wav": "x.wav", "secs": 3}), json!({"wav": "y.wav", "secs": 4})],
    );

    let normalizer = |line: &str, _manifest: &str| -> ManifestResult<ManifestRecord> {
        let value: Value = serde_json::from_str(line).unwrap();
        let mut record = ManifestRecord::new(value["wav"].as_str().unwrap_or_default(), value["secs"].clone());
        record.text = "custom".to_string();
        Ok(record)
    };

    let records: Vec<ManifestRecord> = read_with(manifest, normalizer)
        .collect::<ManifestResult<_>>()
        .unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].id, 1);
    assert_eq!(records[1].audio_file, "y.wav");
    assert_eq!(records[1].duration, json!(4));
}

#[test]
fn test_resolve_entry_points() {
    let data = TempDir::new().unwrap();
    let audio = data.path().join("wavs").join("a.wav");
    std::fs::create_dir_all(audio.parent().unwrap()).unwrap();
    std::fs::write(&audio, b"RIFF").unwrap();
    let manifest = data.path().join("manifest.json");
    let manifest = manifest.to_str().unwrap();

    let resolved = resolve("wavs/a.wav", manifest, 255);
    assert_eq!(Path::new(&resolved), audio);
    assert_eq!(resolve(&resolved, manifest, 255), resolved);
    assert_eq!(resolve("/abs/a.wav", manifest, 255), "/abs/a.wav");
    assert_eq!(resolve("wavs/a.wav", manifest, 4), "wavs/a.wav");

    let line = json!({"audio_filepath": "wavs/a.wav", "duration": 1.0}).to_string();
    let record = normalize_default(&line, manifest).unwrap();
    assert_eq!(record.audio_file, resolved);
}
