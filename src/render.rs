// Text rendering of the task list for each screen

use crate::models::Task;
use crate::screen::Screen;
use crate::store::TaskList;
use colored::Colorize;

const ENTRY_PROMPT: &str = "Enter a task...  (add <text>)";

/// Renders screens as lines of text
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    /// Use ANSI styling; otherwise completed text is wrapped in `~`
    pub color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn render(&self, list: &TaskList, screen: Screen) -> Vec<String> {
        match screen {
            Screen::Login => vec![
                self.title("Welcome"),
                "Enter 'login' to open your tasks.".to_string(),
            ],
            Screen::Tasks => {
                let mut lines = vec![self.title("Task Manager"), ENTRY_PROMPT.to_string()];
                if list.is_empty() {
                    lines.push("No tasks yet!".to_string());
                }
                lines.extend(list.active().iter().map(|t| self.item(t, true)));
                lines
            }
            Screen::Completed => {
                let completed = list.completed_view();
                let mut lines = vec![self.title("Completed")];
                if completed.is_empty() {
                    lines.push("No completed tasks.".to_string());
                }
                lines.extend(completed.into_iter().map(|t| self.item(t, false)));
                lines
            }
            Screen::Removed => {
                let removed = list.removed_view();
                let mut lines = vec![self.title("Removed")];
                if removed.is_empty() {
                    lines.push("No removed tasks.".to_string());
                }
                lines.extend(removed.iter().map(|t| self.item(t, false)));
                lines
            }
        }
    }

    fn title(&self, title: &str) -> String {
        if self.color {
            title.bold().to_string()
        } else {
            title.to_string()
        }
    }

    /// One task line; `actions` adds the done/remove affordances
    fn item(&self, task: &Task, actions: bool) -> String {
        let text = match (task.completed, self.color) {
            (true, true) => task.text.strikethrough().dimmed().to_string(),
            (true, false) => format!("~{}~", task.text),
            (false, _) => task.text.clone(),
        };

        let mut line = format!("[{}] {}", task.id, text);
        if actions {
            if !task.completed {
                line.push_str(&self.action("[done]", true));
            }
            line.push_str(&self.action("[remove]", false));
        }
        line
    }

    fn action(&self, label: &str, positive: bool) -> String {
        let label = match (self.color, positive) {
            (false, _) => label.to_string(),
            (true, true) => label.green().to_string(),
            (true, false) => label.red().to_string(),
        };
        format!("  {}", label)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(true)
    }
}
