//! Static dump corpora used across harnesses.
//!
//! `CANDIDATE_DUMP` is what the decoder under test prints for a small
//! two-track file; `REFERENCE_DUMP` is what the trusted decoder prints for the
//! same file. After normalization the two agree on every non-meta line.

/// Candidate-vocabulary dump of a two-track file.
pub const CANDIDATE_DUMP: &str = "\
TrackName \"Piano\" [0]
ProgramChange [ch 0] program=0: Acoustic Grand Piano [0]
ControlChange [ch 0] ctrl=7 val=100 [0]
NoteOn [ch 0] note=60(C4) vel=100 [0]
NoteOff [ch 0] note=60(C4) vel=0 [480]
SysEx len=3 [F0 43 F7] [0]
EndOfTrack [0]
------
TrackName \"Strings\" [0]
ProgramChange [ch 1] program=48: String Ensemble 1 [0]
NoteOn [ch 1] note=64(E4) vel=90 [0]
NoteOn [ch 1] note=64(E4) vel=0 [960]
EndOfTrack [0]
";

/// Trusted-decoder dump of the same file.
pub const REFERENCE_DUMP: &str = "\
MetaMessage('track_name', name='Piano', time=0)
program_change channel=0 program=0 time=0
control_change channel=0 control=7 value=100 time=0
note_on channel=0 note=60 velocity=100 time=0
note_off channel=0 note=60 velocity=0 time=480
sysex data=(f0,43,f7) time=0
MetaMessage('end_of_track', time=0)
------
MetaMessage('track_name', name='Strings', time=0)
program_change channel=1 program=48 time=0
note_on channel=1 note=64 velocity=90 time=0
note_on channel=1 note=64 velocity=0 time=960
MetaMessage('end_of_track', time=0)
";

/// Single candidate lines paired with their expected normalized form.
pub const LINE_CASES: &[(&str, &str)] = &[
    (
        "NoteOn channel=0 note=60(C4) vel=100 [ch 0] [480]",
        "note_on note=60 velocity=100 channel=0 time=480",
    ),
    (
        "ProgramChange program=12: Vibraphone [480]",
        "program_change program=12 time=480",
    ),
    ("SysEx len=3 [F0 43 F7]", "sysex data=(f0,43,f7)"),
    (
        "ControlChange [ch 15] ctrl=64 val=127 [30]",
        "control_change channel=15 control=64 value=127 time=30",
    ),
    (
        "NoteOff   [ch 2]\tnote=67(G4)   vel=64   [1920]",
        "note_off channel=2 note=67 velocity=64 time=1920",
    ),
];

/// Generate a reference/candidate pair of `n` note events for throughput
/// and large-input tests.
pub fn note_dumps(n: usize) -> (String, String) {
    let mut reference = Vec::with_capacity(n);
    let mut candidate = Vec::with_capacity(n);
    for i in 0..n {
        let note = 36 + i % 48;
        let velocity = i % 128;
        let time = i * 10;
        reference.push(format!(
            "note_on channel=0 note={note} velocity={velocity} time={time}"
        ));
        candidate.push(format!("NoteOn [ch 0] note={note}(X) vel={velocity} [{time}]"));
    }
    (reference.join("\n"), candidate.join("\n"))
}
