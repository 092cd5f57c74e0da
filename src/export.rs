//! Setlist export serializers.
//!
//! The sequencer's output feeds three boundary formats: a CSV download, a
//! plain-text cue sheet, and the ordered URI list a playlist exporter pushes
//! back to the streaming platform. None of these affect sequencing; they only
//! consume its output.

use crate::track::Track;
use std::fmt::Write;

/// Serialize a setlist to CSV.
///
/// Header row `Track Name,Artist,BPM,Key,Camelot,Energy`; text fields are
/// double-quoted (embedded quotes doubled), numeric fields bare. The `Key`
/// column carries the raw source pitch class untouched; the core never reads
/// it, so whatever encoding the analysis collaborator wrote survives export.
#[must_use]
pub fn to_csv(setlist: &[Track]) -> String {
    let mut out = String::from("Track Name,Artist,BPM,Key,Camelot,Energy\n");
    for track in setlist {
        let _ = writeln!(
            out,
            "\"{}\",\"{}\",{},\"{}\",\"{}\",{}",
            quote(&track.name),
            quote(&track.artist),
            track.bpm,
            track.key,
            quote(&track.camelot),
            track.energy,
        );
    }
    out
}

/// Serialize a setlist to the plain-text cue-sheet format:
/// `{rank}. {name} - {artist} [{bpm} BPM] [{camelot}]` per line.
#[must_use]
pub fn to_text(setlist: &[Track]) -> String {
    setlist
        .iter()
        .enumerate()
        .map(|(index, track)| {
            format!(
                "{}. {} - {} [{} BPM] [{}]",
                index + 1,
                track.name,
                track.artist,
                track.bpm,
                track.camelot
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Ordered playable-resource references for playlist export.
#[must_use]
pub fn track_uris(setlist: &[Track]) -> Vec<String> {
    setlist.iter().map(|track| track.uri.clone()).collect()
}

fn quote(field: &str) -> String {
    field.replace('"', "\"\"")
}
