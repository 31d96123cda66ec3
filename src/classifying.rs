#[derive(Debug, PartialEq, Eq)]
pub enum LineKind {
    command,
    assignment,
    expression,
    invalid,
}

fn is_word_character(character: char) -> bool {
    character.is_ascii_alphanumeric() || character == '_'
}

/// Word characters, then optional blanks, then `=` with something after it.
fn is_assignment(line: &str) -> bool {
    match line.split_once('=') {
        Some((target, value)) => {
            !value.is_empty() && target.trim_end().chars().all(is_word_character)
        }
        None => false,
    }
}

fn is_expression(line: &str) -> bool {
    line.chars()
        .any(|c| c.is_ascii_alphanumeric() || "-+*/^()".contains(c))
}

/// Sorts a trimmed, non-empty line into the handler that should take it.
pub fn classify(line: &str) -> LineKind {
    if line.starts_with('/') {
        LineKind::command
    } else if is_assignment(line) {
        LineKind::assignment
    } else if is_expression(line) {
        LineKind::expression
    } else {
        LineKind::invalid
    }
}
