//! Gherkin step runner for note scenarios.
//!
//! Feature files use a small subset of Gherkin: `Feature:`, `Scenario:`,
//! `Given/When/Then/And/But` steps and `#` comments. Each scenario starts
//! from a fresh `World`.

use notes_core::{Memory, Note, StoreError};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::path::Path;

/// Thin test wrapper around `Memory`, mirroring how scenario steps talk
/// about "the todo list" and "the note".
#[derive(Debug, Default)]
pub struct MemoryHelper {
    memory: Memory,
}

impl MemoryHelper {
    pub fn save(&mut self, note: Note) {
        self.memory.save(note);
    }

    pub fn get_notes(&self) -> &[Note] {
        self.memory.get_notes()
    }

    pub fn get_saved_note(&self) -> Result<&Note, StoreError> {
        self.memory.get_saved_note()
    }
}

#[derive(Debug, Default)]
struct World {
    helper: Option<MemoryHelper>,
    pending: Option<Note>,
}

impl World {
    fn helper(&mut self) -> &mut MemoryHelper {
        self.helper
            .as_mut()
            .expect("scenario must start with a Given step that creates the memory")
    }

    fn pending(&self) -> Note {
        self.pending
            .clone()
            .expect("no note has been prepared by an earlier step")
    }
}

type StepFn = fn(&mut World, &Captures<'_>);

struct StepDef {
    pattern: Regex,
    run: StepFn,
}

fn step(pattern: &str, run: StepFn) -> StepDef {
    StepDef {
        pattern: Regex::new(pattern).expect("valid step regex"),
        run,
    }
}

static STEPS: Lazy<Vec<StepDef>> = Lazy::new(|| {
    vec![
        step(r"^we are out of food for the cats$", |world, _| {
            world.helper = Some(MemoryHelper::default());
        }),
        step(r"^an empty memory$", |world, _| {
            world.helper = Some(MemoryHelper::default());
        }),
        step(r"^she must remember to book (\w+)$", |world, caps| {
            world.helper = Some(MemoryHelper::default());
            world.pending = Some(Note::new(format!("Remember to book {}", &caps[1])));
        }),
        step(r"^\w+ writes a note about buying (.+)$", |world, caps| {
            let note = Note::new(format!("Buy {}", &caps[1]));
            world.helper().save(note);
        }),
        step(r#"^\w+ writes a note "([^"]*)"$"#, |world, caps| {
            world.helper().save(Note::new(&caps[1]));
        }),
        step(r"^(?:she|he|they) writes? the note$", |world, _| {
            let note = world.pending();
            world.helper().save(note);
        }),
        step(
            r"^should (?:his|her|their) todo list contain buy (.+)$",
            |world, caps| {
                let expected = vec![Note::new(format!("Buy {}", &caps[1]))];
                assert_eq!(world.helper().get_notes(), expected.as_slice());
            },
        ),
        step(
            r"^should (?:she|he|they) be able to see the note$",
            |world, _| {
                let expected = world.pending();
                assert_eq!(world.helper().get_saved_note(), Ok(&expected));
            },
        ),
        step(
            r"^the todo list should contain (\d+) notes?$",
            |world, caps| {
                let expected: usize = caps[1].parse().expect("numeric note count");
                assert_eq!(world.helper().get_notes().len(), expected);
            },
        ),
        step(r#"^note (\d+) should read "([^"]*)"$"#, |world, caps| {
            let position: usize = caps[1].parse().expect("numeric note position");
            assert!(position > 0, "note positions start at 1, got `note {position}`");
            let notes = world.helper().get_notes();
            assert_eq!(notes.get(position - 1), Some(&Note::new(&caps[2])));
        }),
        step(r#"^the latest note should read "([^"]*)"$"#, |world, caps| {
            let expected = Note::new(&caps[1]);
            assert_eq!(world.helper().get_saved_note(), Ok(&expected));
        }),
        step(r"^reading the todo list twice gives the same notes$", |world, _| {
            let helper = world.helper();
            let first = helper.get_notes().to_vec();
            assert_eq!(helper.get_notes(), first.as_slice());
        }),
        step(r"^asking for the saved note should fail$", |world, _| {
            assert_eq!(
                world.helper().get_saved_note(),
                Err(StoreError::NoSavedNote)
            );
        }),
    ]
});

static STEP_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:Given|When|Then|And|But)\s+(.+)$").expect("valid step line regex")
});

fn run_step(world: &mut World, text: &str, origin: &str) {
    let matched = STEPS
        .iter()
        .find_map(|def| def.pattern.captures(text).map(|caps| (def.run, caps)));
    match matched {
        Some((run, caps)) => run(world, &caps),
        None => panic!("{origin}: no step definition matches `{text}`"),
    }
}

/// Runs every scenario in one feature file and returns the scenario count.
///
/// Text before the first `Scenario:` is the feature header and is skipped.
/// After that, every non-blank, non-comment line must be a scenario or a
/// step, and every scenario must run at least one step.
pub fn run_feature(path: &Path) -> usize {
    let source = std::fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));

    // (origin of the `Scenario:` line, state, steps run so far)
    let mut current: Option<(String, World, usize)> = None;
    let mut scenarios = 0;
    for (index, raw) in source.lines().enumerate() {
        let line = raw.trim();
        let origin = format!("{}:{}", path.display(), index + 1);
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if line.starts_with("Scenario:") {
            if let Some(finished) = current.take() {
                ensure_steps_ran(&finished);
            }
            current = Some((origin, World::default(), 0));
            scenarios += 1;
            continue;
        }
        let Some((_, world, steps)) = current.as_mut() else {
            // Feature header: `Feature:` line and free-text description.
            continue;
        };
        match STEP_LINE_RE.captures(line) {
            Some(caps) => {
                run_step(world, caps[1].trim(), &origin);
                *steps += 1;
            }
            None => panic!("{origin}: unrecognised line `{line}`"),
        }
    }
    if let Some(finished) = current.take() {
        ensure_steps_ran(&finished);
    }
    scenarios
}

fn ensure_steps_ran((origin, _, steps): &(String, World, usize)) {
    if *steps == 0 {
        panic!("{origin}: scenario has no steps");
    }
}
