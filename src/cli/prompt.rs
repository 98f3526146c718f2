use crate::error::OpampError;
use crate::models::{output_style_menu, select_output_style, OutputStyle, CUSTOM_MENU_NUMBER};
use std::io::{self, BufRead, Stdout, Write};

/// Line-oriented terminal input for the interactive shell.
///
/// Generic over reader and writer so scripted input can drive it.
pub struct UserPrompter<R, W> {
    input: R,
    output: W,
    use_colors: bool,
}

impl UserPrompter<io::StdinLock<'static>, Stdout> {
    pub fn stdio(use_colors: bool) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), use_colors)
    }
}

impl<R: BufRead, W: Write> UserPrompter<R, W> {
    pub fn new(input: R, output: W, use_colors: bool) -> Self {
        Self {
            input,
            output,
            use_colors,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Reads one line without its terminator. `None` on EOF.
    fn read_line(&mut self) -> Result<Option<String>, OpampError> {
        let mut line = String::new();
        match self.input.read_line(&mut line)? {
            0 => Ok(None),
            _ => Ok(Some(line.trim_end_matches(['\n', '\r']).to_string())),
        }
    }

    fn ask(&mut self, prompt: &str) -> Result<Option<String>, OpampError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Asks until a non-empty answer is given.
    pub fn prompt_required(&mut self, prompt: &str) -> Result<String, OpampError> {
        loop {
            match self.ask(prompt)? {
                Some(answer) if !answer.trim().is_empty() => return Ok(answer.trim().to_string()),
                Some(_) => writeln!(self.output, "❓ A value is required.")?,
                None => {
                    return Err(OpampError::Validation(
                        "Input ended before a value was provided".to_string(),
                    ))
                }
            }
        }
    }

    /// Reads lines until an empty line follows at least one line of text.
    pub fn prompt_multiline(&mut self, title: &str) -> Result<String, OpampError> {
        loop {
            writeln!(self.output, "\n{}", self.highlight(title))?;
            writeln!(self.output, "Enter the opinion (press Enter twice when done):")?;
            self.output.flush()?;

            let mut lines: Vec<String> = Vec::new();
            while let Some(line) = self.read_line()? {
                if line.trim().is_empty() && !lines.is_empty() {
                    break;
                }
                lines.push(line);
            }

            let text = lines.join("\n").trim().to_string();
            if !text.is_empty() {
                return Ok(text);
            }
            if lines.is_empty() {
                return Err(OpampError::Validation(format!(
                    "{} cannot be empty",
                    title
                )));
            }
            writeln!(self.output, "❌ The opinion cannot be empty.")?;
        }
    }

    pub fn prompt_output_style(&mut self) -> Result<OutputStyle, OpampError> {
        writeln!(self.output, "\nSelect desired output format:")?;
        for line in output_style_menu() {
            writeln!(self.output, "{}", line)?;
        }

        loop {
            let choice = self
                .ask("Enter the number corresponding to the output type: ")?
                .ok_or_else(|| {
                    OpampError::Validation("Input ended before a style was chosen".to_string())
                })?;

            match choice.trim().parse::<usize>() {
                Ok(CUSTOM_MENU_NUMBER) => {
                    let custom = self.prompt_required("Enter your custom output type/format: ")?;
                    return select_output_style(&custom);
                }
                Ok(number) => {
                    if let Some(style) = OutputStyle::from_menu_number(number) {
                        return Ok(style);
                    }
                }
                Err(_) => {}
            }
            writeln!(self.output, "Invalid input. Try again.")?;
        }
    }

    /// Yes/no question; EOF and anything but yes count as no.
    pub fn prompt_confirmation(&mut self, message: &str) -> Result<bool, OpampError> {
        let answer = self.ask(&format!("{} (y/n): ", message))?;
        Ok(matches!(
            answer.map(|a| a.trim().to_lowercase()).as_deref(),
            Some("y") | Some("yes")
        ))
    }

    /// File stem with a fallback when the answer is empty.
    pub fn prompt_filename(&mut self, default_stem: &str) -> Result<String, OpampError> {
        let answer = self.ask("Enter filename (without extension): ")?;
        let stem = answer
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| default_stem.to_string());
        Ok(format!("{}.txt", stem))
    }

    pub fn display_message(&mut self, message: &str) -> Result<(), OpampError> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    fn highlight(&self, text: &str) -> String {
        if self.use_colors {
            format!("\x1b[1m\x1b[36m{}\x1b[0m", text)
        } else {
            text.to_string()
        }
    }
}
