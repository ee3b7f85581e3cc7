//! Interactive line-oriented session driving a [`GoalStore`].
//!
//! Each line is one form event: typing into the new-goal fields, pressing a
//! goal's buttons, or typing into / leaving a goal's max field. The session
//! keeps the store alive between lines, so the edit buffer and draft behave
//! as they would behind a form.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::models::GoalId;
use crate::render;
use crate::store::{GoalRepository, GoalStore};

pub const HELP: &str = "\
Commands:
  name <text>        set the new goal's name
  max <text>         type into the new goal's max field
  max-blur           leave the new goal's max field
  add                create a goal from the draft
  inc <goal>         add one to a goal's progress
  reset <goal>       set a goal's progress to 0
  delete <goal>      remove a goal
  type <goal> <text> type into a goal's max field
  blur <goal>        leave a goal's max field
  list               show all goals
  stats              show statistics
  help               show this help
  quit               end the session
<goal> is a list position (1, 2, ...) or a goal id.
";

/// One parsed session line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Name(String),
    Max(String),
    MaxBlur,
    Add,
    Inc(String),
    Reset(String),
    Delete(String),
    Type { goal: String, raw: String },
    Blur(String),
    List,
    Stats,
    Help,
    Quit,
}

impl Command {
    /// Parse a line. Blank lines yield `Ok(None)`.
    ///
    /// Text arguments are taken verbatim after the single separating space,
    /// so `type 1 ` types an empty string and `type 1  7` types `" 7"`.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let line = line.trim_end_matches(['\r', '\n']).trim_start();
        if line.trim().is_empty() {
            return Ok(None);
        }

        let (word, rest) = line.split_once(' ').unwrap_or((line, ""));
        let goal_arg = || {
            let goal = rest.trim();
            if goal.is_empty() {
                Err(format!("'{word}' needs a goal"))
            } else {
                Ok(goal.to_string())
            }
        };

        let command = match word {
            "name" => Self::Name(rest.to_string()),
            "max" => Self::Max(rest.to_string()),
            "max-blur" => Self::MaxBlur,
            "add" => Self::Add,
            "inc" => Self::Inc(goal_arg()?),
            "reset" => Self::Reset(goal_arg()?),
            "delete" => Self::Delete(goal_arg()?),
            "type" => {
                let (goal, raw) = rest.split_once(' ').unwrap_or((rest, ""));
                if goal.is_empty() {
                    return Err("'type' needs a goal".to_string());
                }
                Self::Type {
                    goal: goal.to_string(),
                    raw: raw.to_string(),
                }
            }
            "blur" => Self::Blur(goal_arg()?),
            "list" | "ls" => Self::List,
            "stats" => Self::Stats,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => return Err(format!("Unknown command '{other}', try 'help'")),
        };
        Ok(Some(command))
    }
}

/// Resolve a 1-based list position or a literal goal id.
pub fn resolve_goal<R: GoalRepository>(store: &GoalStore<R>, reference: &str) -> Option<GoalId> {
    if let Ok(position) = reference.parse::<usize>() {
        if let Some(goal) = position.checked_sub(1).and_then(|i| store.goals().get(i)) {
            return Some(goal.id().clone());
        }
    }
    let id = GoalId::from(reference);
    store.get(&id).map(|goal| goal.id().clone())
}

/// Render every goal with its current max-field text.
pub fn render_store<R: GoalRepository>(store: &GoalStore<R>) -> String {
    render::render_goals(store.goals().iter().map(|goal| {
        let display = store.max_display(goal.id()).unwrap_or_default();
        (goal, display)
    }))
}

pub struct Session<R: GoalRepository> {
    store: GoalStore<R>,
}

impl<R: GoalRepository> Session<R> {
    pub fn new(store: GoalStore<R>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &GoalStore<R> {
        &self.store
    }

    /// Apply one command and return the text to show for it.
    pub fn execute(&mut self, command: Command) -> Result<String> {
        let out = match command {
            Command::Name(name) => {
                self.store.set_draft_name(&name);
                format!("Name: {name}\n")
            }
            Command::Max(raw) => {
                self.store.set_draft_max_input(&raw);
                format!("Max: {}\n", self.store.draft().max.display())
            }
            Command::MaxBlur => {
                self.store.on_draft_max_blur();
                format!("Max: {}\n", self.store.draft().max.display())
            }
            Command::Add if !self.store.draft().is_submittable() => {
                "Enter a goal name first\n".to_string()
            }
            Command::Add => match self.store.submit_draft()? {
                Some(goal) => format!("Added '{}' (max {})\n", goal.name(), goal.max()),
                None => "Enter a goal name first\n".to_string(),
            },
            Command::Inc(goal) => self.with_goal(&goal, |store, id| {
                Ok(if store.increment(id)? {
                    "Progress +1\n".to_string()
                } else {
                    "Already at max\n".to_string()
                })
            })?,
            Command::Reset(goal) => self.with_goal(&goal, |store, id| {
                store.reset(id)?;
                Ok("Progress reset\n".to_string())
            })?,
            Command::Delete(goal) => self.with_goal(&goal, |store, id| {
                store.delete(id)?;
                Ok("Deleted\n".to_string())
            })?,
            Command::Type { goal, raw } => self.with_goal(&goal, |store, id| {
                store.on_buffer_input(id, &raw)?;
                Ok(max_field_line(store, id))
            })?,
            Command::Blur(goal) => self.with_goal(&goal, |store, id| {
                store.on_buffer_commit(id)?;
                Ok(max_field_line(store, id))
            })?,
            Command::List => {
                let mut out = render_store(&self.store);
                out.push_str(&render::render_stats(&self.store.stats()));
                out
            }
            Command::Stats => {
                let stats = render::render_stats(&self.store.stats());
                if stats.is_empty() {
                    "No goals yet\n".to_string()
                } else {
                    stats
                }
            }
            Command::Help => HELP.to_string(),
            Command::Quit => String::new(),
        };
        Ok(out)
    }

    /// Read commands from `input` until it ends or `quit` is entered.
    /// Persistence failures abort the session; parse errors are reported and
    /// skipped.
    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> Result<()> {
        for line in input.lines() {
            let line = line?;
            let command = match Command::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(message) => {
                    writeln!(output, "{message}")?;
                    continue;
                }
            };
            if command == Command::Quit {
                break;
            }
            let text = self.execute(command)?;
            output.write_all(text.as_bytes())?;
            output.flush()?;
        }
        Ok(())
    }

    fn with_goal(
        &mut self,
        reference: &str,
        f: impl FnOnce(&mut GoalStore<R>, &GoalId) -> Result<String>,
    ) -> Result<String> {
        match resolve_goal(&self.store, reference) {
            Some(id) => f(&mut self.store, &id),
            None => Ok(format!("No goal matches '{reference}'\n")),
        }
    }
}

fn max_field_line<R: GoalRepository>(store: &GoalStore<R>, id: &GoalId) -> String {
    match (store.get(id), store.max_display(id)) {
        (Some(goal), Some(display)) => {
            format!("Max field: {display} (max {}, progress {})\n", goal.max(), goal.progress())
        }
        _ => "No such goal\n".to_string(),
    }
}
