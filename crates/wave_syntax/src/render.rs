//! Diagnostic rendering.
//!
//! Turns a [`Diagnostic`] into a header + source snippet + optional hint,
//! resolving file contents through the [`SourceMap`].
use crate::{Diagnostic, Severity, SourceMap};

const RED: &str = "\x1b[31m";
const MAGENTA: &str = "\x1b[35m";
const HINT_STYLE: &str = "\x1b[4;37m";
const RESET: &str = "\x1b[0m";

pub fn render_diagnostic(files: &SourceMap, diag: &Diagnostic) -> String {
    let (path, text) = match (files.filepath(diag.span.file), files.source(diag.span.file)) {
        (Some(path), Some(text)) => (path, text),
        // Correct producers never emit diagnostics with dangling file ids.
        _ => panic!("diagnostic refers to a file missing from the store: {:?}", diag.span.file),
    };
    let span = diag.span.clamp_to(text.len());
    let (line, col) = text.line_col(span.start);

    let (color, severity) = match diag.severity {
        Severity::Error => (RED, "error"),
        Severity::Warning => (MAGENTA, "warning"),
    };
    let mut out = String::new();
    out.push_str(&format!(
        "{color}{path}:{line}:{col}: {severity}: {message}{RESET}\n",
        line = line + 1,
        col = col + 1,
        message = diag.message,
    ));

    let first = line;
    let last = if span.end > span.start {
        text.line_of(span.end - 1)
    } else {
        first
    };
    let width = (last + 1).to_string().len();
    let src = text.as_str();

    for l in first..=last {
        let (ls, le) = text.line_span(l);
        out.push_str(&format!(
            " {n:>width$} | {text}\n",
            n = l + 1,
            text = &src[ls as usize..le as usize],
        ));

        let from = if l == first { span.start.clamp(ls, le) } else { ls };
        let to = if l == last { span.end.clamp(from, le) } else { le };
        let pad = src[ls as usize..from as usize].chars().count();
        let carets = src[from as usize..to as usize].chars().count().max(1);
        out.push_str(&format!(" {:>width$} | ", ""));
        out.extend(std::iter::repeat_n(' ', pad));
        out.extend(std::iter::repeat_n('^', carets));
        if l == first && !diag.label.is_empty() {
            out.push(' ');
            out.push_str(&diag.label);
        }
        out.push('\n');
    }

    if let Some(hint) = &diag.hint {
        out.push_str(&format!("{HINT_STYLE}Hint: {hint}{RESET}\n"));
    }
    out
}

pub fn render_diagnostics(files: &SourceMap, diagnostics: &[Diagnostic]) -> String {
    let mut out = String::new();
    for d in diagnostics {
        out.push_str(&render_diagnostic(files, d));
    }
    out
}

/// Print every diagnostic to standard error.
pub fn emit_diagnostics(files: &SourceMap, diagnostics: &[Diagnostic]) {
    eprint!("{}", render_diagnostics(files, diagnostics));
}
