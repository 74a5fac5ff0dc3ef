/// Single-line input used to type the path of an export to open.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PathPrompt {
    pub active: bool,
    pub input_value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    None,
    Submit(String),
    Escape,
}

impl PathPrompt {
    pub fn open(&mut self, initial: &str) {
        self.active = true;
        self.input_value = initial.to_string();
    }

    pub fn push(&mut self, c: char) {
        self.input_value.push(c);
    }

    pub fn backspace(&mut self) {
        self.input_value.pop();
    }

    /// Close the prompt, handing back the trimmed input if there is any.
    pub fn submit(&mut self) -> FormAction {
        self.active = false;
        let value = std::mem::take(&mut self.input_value);
        let value = value.trim();
        if value.is_empty() {
            FormAction::None
        } else {
            FormAction::Submit(value.to_string())
        }
    }

    pub fn cancel(&mut self) -> FormAction {
        self.active = false;
        self.input_value.clear();
        FormAction::Escape
    }
}
