//! Event scripts: recorded host input replayed through an editor.
//!
//! A script is a JSON array. Each step is either an editor [`Event`]
//! (tagged by `"type"`, exactly as a host would dispatch it) or a panel
//! operation tagged by `"op"`:
//!
//! ```json
//! [
//!   { "op": "set_tool", "tool": "rectangle" },
//!   { "type": "pointer_down", "screen": { "x": 10, "y": 10 } },
//!   { "type": "pointer_move", "screen": { "x": 60, "y": 40 } },
//!   { "type": "pointer_up", "screen": { "x": 60, "y": 40 } },
//!   { "op": "undo" }
//! ]
//! ```

#[cfg(test)]
#[path = "script_test.rs"]
mod script_test;

use std::fs;
use std::path::Path;

use editor::doc::ElementEdit;
use editor::engine::{EditorContext, Effect};
use editor::input::{Event, Tool};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::CliError;

/// Panel operations a script can invoke between events.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Op {
    SetTool { tool: Tool },
    SetFill { color: String },
    SetBackground { color: String },
    PendingImage { src: String },
    Edit { edit: ElementEdit },
    Delete,
    Undo,
    Redo,
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Step {
    Event(Event),
    Op(Op),
}

/// Counts gathered while replaying.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub steps: usize,
    pub commits: usize,
    pub restores: usize,
    pub elements: usize,
    pub selected: usize,
    pub history_depth: usize,
}

pub fn parse(json: &str) -> Result<Vec<Step>, CliError> {
    Ok(serde_json::from_str(json)?)
}

pub fn read(path: &Path) -> Result<Vec<Step>, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Read { path: path.to_path_buf(), source })?;
    parse(&text)
}

/// Run every step in order against `ctx`.
pub fn replay(ctx: &mut EditorContext, steps: Vec<Step>) -> Report {
    let mut report = Report::default();
    for step in steps {
        let effects = match step {
            Step::Event(event) => ctx.dispatch(event),
            Step::Op(op) => apply(ctx, op),
        };
        report.steps += 1;
        for effect in &effects {
            match effect {
                Effect::Committed { .. } => report.commits += 1,
                Effect::Restored => report.restores += 1,
                _ => {}
            }
        }
        debug!(step = report.steps, effects = effects.len(), mode = ctx.input().name(), "step replayed");
    }
    report.elements = ctx.doc().len();
    report.selected = ctx.selection().len();
    report.history_depth = ctx.history().depth();
    report
}

fn apply(ctx: &mut EditorContext, op: Op) -> Vec<Effect> {
    match op {
        Op::SetTool { tool } => {
            ctx.set_tool(tool);
            Vec::new()
        }
        Op::SetFill { color } => ctx.set_fill(&color),
        Op::SetBackground { color } => ctx.set_background(&color),
        Op::PendingImage { src } => {
            ctx.set_pending_image(src);
            Vec::new()
        }
        Op::Edit { edit } => ctx.apply_edit(&edit),
        Op::Delete => ctx.delete_selection(),
        Op::Undo => ctx.undo(),
        Op::Redo => ctx.redo(),
        Op::Cancel => ctx.cancel(),
    }
}
