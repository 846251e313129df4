//! Line input for the interactive menu

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::debug;

/// Source of answers to menu prompts
pub trait Prompt {
    /// Ask for one line of input; `None` means the input has ended
    fn ask(&mut self, prompt: &str) -> anyhow::Result<Option<String>>;
}

/// Prompt backed by a rustyline editor
pub struct ReadlinePrompt {
    editor: DefaultEditor,
}

impl ReadlinePrompt {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl Prompt for ReadlinePrompt {
    fn ask(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(e) = self.editor.add_history_entry(line.as_str()) {
                        debug!("Failed to record history entry: {}", e);
                    }
                }
                Ok(Some(line))
            }
            // Ctrl-C and Ctrl-D both leave the menu
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// Prompt that replays a fixed list of answers
#[cfg(test)]
pub struct ScriptedPrompt {
    answers: std::collections::VecDeque<String>,
    pub asked: Vec<String>,
}

#[cfg(test)]
impl ScriptedPrompt {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }
}

#[cfg(test)]
impl Prompt for ScriptedPrompt {
    fn ask(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        self.asked.push(prompt.to_string());
        Ok(self.answers.pop_front())
    }
}
