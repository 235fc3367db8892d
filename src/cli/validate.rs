//! Expression validation command implementation.

use super::CliError;
use trigart::parse;

/// Execute the validate command.
///
/// # Errors
///
/// Returns an error at the first expression that fails to parse.
pub(crate) fn execute(exprs: &[String]) -> Result<(), CliError> {
    for text in exprs {
        println!("Validating: {text}");

        match parse(text) {
            Ok(expr) => {
                let canonical = expr.to_string();
                print_check("Parses", true);
                print_check("Already canonical", canonical == *text);
                println!("  Canonical: {canonical}");
                println!("  Nodes:     {}", expr.node_count());
                println!("  Depth:     {}", expr.depth());
            }
            Err(e) => {
                print_check("Parses", false);
                if let Some(caret) = caret_line(text, e.position) {
                    println!("  {text}");
                    println!("  {caret}");
                }
                return Err(CliError::new(format!("Invalid expression: {e}")));
            }
        }
        println!();
    }

    println!("Validation successful!");

    Ok(())
}

/// A `^` under character `position` of `text`.
///
/// Columns only line up when every character is one cell wide, so non-ASCII
/// input gets no caret; the error message still carries the index.
fn caret_line(text: &str, position: usize) -> Option<String> {
    text.is_ascii().then(|| format!("{}^", " ".repeat(position)))
}

fn print_check(name: &str, ok: bool) {
    let status = if ok { "OK" } else { "FAILED" };
    let symbol = if ok { "✓" } else { "✗" };
    println!("  {symbol} {name}: {status}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caret_under_error() {
        let text = "sin( x  q";
        let err = parse(text).unwrap_err();
        assert_eq!(caret_line(text, err.position).unwrap(), "        ^");
    }

    #[test]
    fn test_caret_at_end_of_input() {
        let text = "cos(x";
        let err = parse(text).unwrap_err();
        assert_eq!(caret_line(text, err.position).unwrap(), "     ^");
    }

    #[test]
    fn test_no_caret_for_wide_characters() {
        let text = "sin(\u{5168}\u{89d2})";
        let err = parse(text).unwrap_err();
        assert_eq!(err.position, 4);
        assert_eq!(caret_line(text, err.position), None);
    }
}
