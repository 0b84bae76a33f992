// Line-oriented shell: each input line is one user event

use crate::render::Renderer;
use crate::screen::{Navigator, Screen};
use crate::store::TaskList;
use eyre::{Context, Result, eyre};
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{debug, info};

const HELP: &str = "\
Commands:
  add <text>              add a task
  done <id>               toggle a task's completed flag (alias: toggle)
  rm <id>                 remove a task (alias: remove)
  state <id>              show where a task is in its lifecycle
  show <screen>           switch screen: login, tasks, completed, removed
  login                   leave the welcome screen
  dump                    print both lists as JSON
  help                    show this message
  quit                    exit (alias: exit)";

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Toggle(String),
    Remove(String),
    State(String),
    Show(Screen),
    Login,
    Dump,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = eyre::Report;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let require_id = |name: &str| -> Result<String> {
            if rest.is_empty() {
                Err(eyre!("Usage: {} <id>", name))
            } else {
                Ok(rest.to_string())
            }
        };

        match word {
            "add" => Ok(Command::Add(rest.to_string())),
            "done" | "toggle" => Ok(Command::Toggle(require_id(word)?)),
            "rm" | "remove" => Ok(Command::Remove(require_id(word)?)),
            "state" => Ok(Command::State(require_id(word)?)),
            "show" => Ok(Command::Show(rest.parse()?)),
            "login" => Ok(Command::Login),
            "dump" => Ok(Command::Dump),
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            // Bare screen names navigate
            other if rest.is_empty() => match other.parse::<Screen>() {
                Ok(screen) => Ok(Command::Show(screen)),
                Err(_) => Err(eyre!("Unknown command '{}', try 'help'", other)),
            },
            other => Err(eyre!("Unknown command '{}', try 'help'", other)),
        }
    }
}

/// What the loop should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Re-render the current screen
    Render,
    /// Print this text
    Print(String),
    Quit,
}

/// Drives one store and one navigator from input events
#[derive(Debug)]
pub struct Shell {
    list: TaskList,
    nav: Navigator,
    renderer: Renderer,
}

impl Shell {
    pub fn new(list: TaskList, nav: Navigator, renderer: Renderer) -> Self {
        Self { list, nav, renderer }
    }

    pub fn list(&self) -> &TaskList {
        &self.list
    }

    pub fn screen(&self) -> Screen {
        self.nav.current()
    }

    /// Apply a single command
    pub fn apply(&mut self, command: Command) -> Result<Step> {
        debug!(?command, "Applying command");
        let step = match command {
            Command::Add(text) => {
                self.list.add(&text);
                Step::Render
            }
            Command::Toggle(id) => {
                self.list.toggle(&id);
                Step::Render
            }
            Command::Remove(id) => {
                self.list.remove(&id);
                Step::Render
            }
            Command::State(id) => match self.list.state(&id) {
                Some(state) => Step::Print(format!("{}: {}", id, state)),
                None => Step::Print(format!("{}: unknown", id)),
            },
            Command::Show(screen) => {
                self.nav.go(screen);
                Step::Render
            }
            Command::Login => {
                self.nav.go(Screen::Tasks);
                Step::Render
            }
            Command::Dump => {
                let json = serde_json::to_string_pretty(&self.list.snapshot())
                    .context("Failed to encode task lists")?;
                Step::Print(json)
            }
            Command::Help => Step::Print(HELP.to_string()),
            Command::Quit => Step::Quit,
        };
        Ok(step)
    }

    pub fn render(&self) -> Vec<String> {
        self.renderer.render(&self.list, self.nav.current())
    }

    /// Read commands from `input` until EOF or quit
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        self.write_screen(out)?;

        for line in input.lines() {
            let line = line.context("Failed to read input")?;
            if line.trim().is_empty() {
                continue;
            }

            let command = match line.parse::<Command>() {
                Ok(c) => c,
                Err(e) => {
                    writeln!(out, "{}", e)?;
                    continue;
                }
            };

            match self.apply(command)? {
                Step::Render => self.write_screen(out)?,
                Step::Print(text) => writeln!(out, "{}", text)?,
                Step::Quit => break,
            }
        }

        info!(active = self.list.len(), removed = self.list.removed_view().len(), "Shell finished");
        out.flush()?;
        Ok(())
    }

    fn write_screen<W: Write>(&self, out: &mut W) -> Result<()> {
        for line in self.render() {
            writeln!(out, "{}", line)?;
        }
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shell() -> Shell {
        Shell::new(TaskList::new(), Navigator::new(Screen::Login), Renderer::new(false))
    }

    fn run(shell: &mut Shell, input: &str) -> String {
        let mut out = Vec::new();
        shell.run(input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!("add Buy milk".parse::<Command>().unwrap(), Command::Add("Buy milk".to_string()));
        assert_eq!("add".parse::<Command>().unwrap(), Command::Add(String::new()));
        assert_eq!("done 3".parse::<Command>().unwrap(), Command::Toggle("3".to_string()));
        assert_eq!("toggle 3".parse::<Command>().unwrap(), Command::Toggle("3".to_string()));
        assert_eq!("rm 2".parse::<Command>().unwrap(), Command::Remove("2".to_string()));
        assert_eq!("remove 2".parse::<Command>().unwrap(), Command::Remove("2".to_string()));
        assert_eq!("state 2".parse::<Command>().unwrap(), Command::State("2".to_string()));
        assert_eq!("show completed".parse::<Command>().unwrap(), Command::Show(Screen::Completed));
        assert_eq!("removed".parse::<Command>().unwrap(), Command::Show(Screen::Removed));
        assert_eq!("tasks".parse::<Command>().unwrap(), Command::Show(Screen::Tasks));
        assert_eq!("login".parse::<Command>().unwrap(), Command::Login);
        assert_eq!("show login".parse::<Command>().unwrap(), Command::Show(Screen::Login));
        assert_eq!("  quit  ".parse::<Command>().unwrap(), Command::Quit);
        assert_eq!("exit".parse::<Command>().unwrap(), Command::Quit);
    }

    #[test]
    fn test_parse_errors() {
        assert!("done".parse::<Command>().is_err());
        assert!("rm".parse::<Command>().is_err());
        assert!("remove".parse::<Command>().is_err());
        assert!("state".parse::<Command>().is_err());
        assert!("show settings".parse::<Command>().is_err());
        assert!("frobnicate".parse::<Command>().is_err());
    }

    #[test]
    fn test_scenario_through_shell() {
        let mut shell = shell();
        run(&mut shell, "login\nadd Buy milk\nadd Walk dog\ndone 1\nrm 2\n");

        let active = shell.list().active();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].text, "Buy milk");
        assert!(active[0].completed);

        let removed = shell.list().removed_view();
        assert_eq!(removed.len(), 1);
        assert_eq!(removed[0].text, "Walk dog");
        assert!(!removed[0].completed);
    }

    #[test]
    fn test_run_renders_screens() {
        let mut shell = shell();
        let output = run(&mut shell, "login\nadd   \nadd Buy milk\nshow completed\nquit\nadd ignored\n");

        assert!(output.starts_with("Welcome\n"));
        assert!(output.contains("No tasks yet!"));
        assert!(output.contains("[1] Buy milk  [done]  [remove]"));
        assert!(output.contains("No completed tasks."));
        assert_eq!(shell.screen(), Screen::Completed);
        // input after quit is not processed
        assert_eq!(shell.list().len(), 1);
    }

    #[test]
    fn test_run_unknown_command_changes_nothing() {
        let mut shell = shell();
        let output = run(&mut shell, "frobnicate\ndone\n");

        assert!(output.contains("Unknown command 'frobnicate'"));
        assert!(output.contains("Usage: done <id>"));
        assert!(shell.list().is_empty());
        assert_eq!(shell.screen(), Screen::Login);
    }

    #[test]
    fn test_state_follows_lifecycle() {
        let mut shell = shell();
        let output = run(
            &mut shell,
            "add Buy milk\nstate 1\ndone 1\nstate 1\nrm 1\nstate 1\nstate 9\n",
        );

        assert!(output.contains("1: active_incomplete\n"));
        assert!(output.contains("1: active_complete\n"));
        assert!(output.contains("1: removed\n"));
        assert!(output.contains("9: unknown\n"));
    }

    #[test]
    fn test_remove_without_id_changes_nothing() {
        let mut shell = shell();
        let output = run(&mut shell, "add Buy milk\nrm\nremove\n");

        assert!(output.contains("Usage: rm <id>"));
        assert!(output.contains("Usage: remove <id>"));
        assert_eq!(shell.list().len(), 1);
        assert!(shell.list().removed_view().is_empty());
    }

    #[test]
    fn test_dump_is_json() {
        let mut shell = shell();
        shell.apply(Command::Add("Buy milk".to_string())).unwrap();

        let step = shell.apply(Command::Dump).unwrap();
        let Step::Print(json) = &step else {
            panic!("expected Print, got {:?}", step);
        };
        let snapshot: crate::models::Snapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.active.len(), 1);
        assert!(snapshot.removed.is_empty());
    }
}
