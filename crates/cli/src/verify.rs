use std::io::{BufRead, Write};

/// Prompts the user to confirm a choice on stdin.
///
/// Empty input selects `default`; anything other than y/n reprompts.
pub fn user_verify(msg: &str, default: bool) -> bool {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    prompt(&mut stdin.lock(), &mut stdout, msg, default)
}

fn prompt(input: &mut impl BufRead, output: &mut impl Write, msg: &str, default: bool) -> bool {
    let choices = if default { "[Yn]" } else { "[yN]" };

    loop {
        let _ = write!(output, "\n {msg} {choices}: ");
        let _ = output.flush();

        let mut line = String::new();
        if input.read_line(&mut line).unwrap_or(0) == 0 {
            // stdin closed; fall back to the default
            return default;
        }

        match line.trim().to_lowercase().as_str() {
            "" => return default,
            "y" => return true,
            "n" => return false,
            _ => {
                let _ = writeln!(output, "please enter y or n");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str, default: bool) -> bool {
        let mut output = Vec::new();
        prompt(&mut Cursor::new(input), &mut output, "continue?", default)
    }

    #[test]
    fn yes_and_no_answers() {
        assert!(run("y\n", false));
        assert!(!run("n\n", true));
        assert!(run("Y\n", false));
    }

    #[test]
    fn empty_input_returns_default() {
        assert!(run("\n", true));
        assert!(!run("\n", false));
    }

    #[test]
    fn reprompts_on_garbage_until_valid() {
        assert!(run("maybe\nok\ny\n", false));
    }

    #[test]
    fn closed_stdin_returns_default() {
        assert!(run("", true));
        assert!(!run("", false));
    }
}
