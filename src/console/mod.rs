// Console narration log

use crate::step::{Step, StepKind};

/// Classification of a console line. Step lines keep their tag so the pane
/// can color them like the array highlights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Error,
    Step(StepKind),
}

/// A single narration line.
#[derive(Debug, Clone)]
pub struct Message {
    pub kind: MessageKind,
    pub text: String,
}

/// In-process narration sink rendered by the console pane.
///
/// Receives one message per playback position change plus free-standing
/// info/error/success messages from the controller.
#[derive(Debug, Default)]
pub struct MessageLog {
    lines: Vec<Message>,
}

impl MessageLog {
    pub fn new() -> Self {
        MessageLog { lines: Vec::new() }
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.push(MessageKind::Info, text.into());
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.push(MessageKind::Success, text.into());
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.push(MessageKind::Error, text.into());
    }

    /// Narrate one step: its description, classified by its tag.
    pub fn step(&mut self, step: &Step) {
        self.push(MessageKind::Step(step.kind), step.description.clone());
    }

    fn push(&mut self, kind: MessageKind, text: String) {
        self.lines.push(Message { kind, text });
    }

    pub fn lines(&self) -> &[Message] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_step_descriptions_with_their_tag() {
        let mut log = MessageLog::new();
        let step = Step::new(
            StepKind::Swap,
            &[2, 1],
            vec![0, 1],
            "Swapped elements at indices 0 and 1".to_string(),
        );
        log.info("Running Bubble Sort...");
        log.step(&step);
        assert_eq!(log.len(), 2);
        assert_eq!(log.lines()[1].kind, MessageKind::Step(StepKind::Swap));
        assert_eq!(log.lines()[1].text, "Swapped elements at indices 0 and 1");
    }
}
