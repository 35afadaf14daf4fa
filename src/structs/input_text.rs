/// Text gathered from stdin and files, sent as the single user message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputText(String);

impl InputText {
    pub const fn new(text: String) -> Self {
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Length in Unicode scalar values, as shown by verbose output.
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}
