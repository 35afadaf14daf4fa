use std::io::Write;
use crate::errors::{TokenCounterError, TokenCounterResult};
use crate::structs::input_text::InputText;

pub struct ResultReporter {
    verbose: bool,
}

impl ResultReporter {
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn report<W: Write>(
        &self,
        out: &mut W,
        model: &str,
        text: &InputText,
        count: u64,
    ) -> TokenCounterResult<()> {
        self.write_lines(out, model, text, count)
            .map_err(TokenCounterError::Output)
    }

    fn write_lines<W: Write>(
        &self,
        out: &mut W,
        model: &str,
        text: &InputText,
        count: u64,
    ) -> std::io::Result<()> {
        if self.verbose {
            writeln!(out, "Model: {}", model)?;
            writeln!(out, "Input length: {} characters", text.char_len())?;
        }
        writeln!(out, "Token count: {}", count)?;
        out.flush()
    }
}
