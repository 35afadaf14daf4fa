use std::fs;
use std::io::Read;
use std::path::PathBuf;
use crate::errors::{TokenCounterError, TokenCounterResult};
use crate::structs::input_text::InputText;

pub struct InputCollector;

impl InputCollector {
    /// Builds the input text from piped stdin (if any) followed by the files.
    ///
    /// `stdin` is `None` when standard input is an interactive terminal. Files
    /// are read before stdin so a bad path fails without consuming the pipe.
    pub fn collect<R: Read>(
        files: &[PathBuf],
        stdin: Option<R>,
    ) -> TokenCounterResult<InputText> {
        let file_input = Self::read_files(files)?;
        let piped_input = match stdin {
            Some(reader) => Self::read_piped(reader)?,
            None => String::new(),
        };

        // No separator between the piped segment and the file segment.
        let text = piped_input + &file_input;
        if text.is_empty() {
            return Err(TokenCounterError::EmptyInput);
        }

        log::debug!(
            "📥 Collected {} bytes ({} piped, {} from {} files)",
            text.len(),
            text.len() - file_input.len(),
            file_input.len(),
            files.len()
        );

        Ok(InputText::new(text))
    }

    /// Invalid UTF-8 is replaced with U+FFFD rather than rejected.
    pub fn read_files(files: &[PathBuf]) -> TokenCounterResult<String> {
        let texts = files
            .iter()
            .map(|path| {
                fs::read(path)
                    .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
                    .map_err(|e| TokenCounterError::file_error(path, e))
            })
            .collect::<TokenCounterResult<Vec<_>>>()?;

        Ok(texts.join("\n"))
    }

    fn read_piped<R: Read>(mut reader: R) -> TokenCounterResult<String> {
        let mut buffer = Vec::new();
        reader
            .read_to_end(&mut buffer)
            .map_err(TokenCounterError::StdinRead)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}
