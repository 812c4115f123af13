//! Source location of a log call, recovered from the execution stack

use serde::Serialize;

/// Symbol suffix identifying the frame of [`CallContext::capture`] itself
const CAPTURE_SYMBOL: &str = "CallContext::capture";

/// Snapshot of the source location a log call was made from
///
/// `package` is the module path of the enclosing function and `type_name` is
/// present only when the function is a method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallContext {
    pub path: String,
    pub file: String,
    pub line: u32,
    pub package: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    pub function: String,
}

struct ResolvedFrame {
    name: String,
    file: Option<String>,
    line: Option<u32>,
}

impl CallContext {
    /// Capture the location `depth + 1` frames above this call
    ///
    /// `capture(0)` describes the function calling `capture`, `capture(1)` its
    /// caller and so on. Inlined frames are counted like real ones, so the
    /// result is exact whenever debug info is available. Returns `None` if the
    /// stack is not that deep or the frame has no source location, as in
    /// release builds without debug info.
    #[inline(never)]
    pub fn capture(depth: usize) -> Option<CallContext> {
        let mut frames: Vec<ResolvedFrame> = Vec::new();
        let mut anchor: Option<usize> = None;

        backtrace::trace(|frame| {
            backtrace::resolve_frame(frame, |symbol| {
                let name = symbol
                    .name()
                    .map(|name| format!("{:#}", name))
                    .unwrap_or_default();
                if anchor.is_none() && strip_hash(&name).ends_with(CAPTURE_SYMBOL) {
                    anchor = Some(frames.len());
                }
                frames.push(ResolvedFrame {
                    name,
                    file: symbol
                        .filename()
                        .map(|file| file.to_string_lossy().into_owned()),
                    line: symbol.lineno(),
                });
            });
            match anchor {
                Some(anchor) => frames.len() <= anchor.saturating_add(depth).saturating_add(1),
                None => true,
            }
        });

        let target = anchor?.checked_add(depth)?.checked_add(1)?;
        frames.get(target).and_then(CallContext::from_frame)
    }

    /// A frame without file and line comes from a build lacking debug info,
    /// where inlined frames are missing and the symbol is not the caller's
    fn from_frame(frame: &ResolvedFrame) -> Option<CallContext> {
        let (path, file) = split_path(frame.file.as_deref()?);
        let line = frame.line?;
        let (package, type_name, function) = split_function(&frame.name);

        Some(CallContext {
            path,
            file,
            line,
            package,
            type_name,
            function,
        })
    }
}

/// Split a source path into directory (with trailing separator) and file name
fn split_path(file: &str) -> (String, String) {
    match file.rfind(|c| c == '/' || c == '\\') {
        Some(idx) => (file[..=idx].to_string(), file[idx + 1..].to_string()),
        None => (String::new(), file.to_string()),
    }
}

/// Drop the `::h0123456789abcdef` disambiguator of legacy mangled symbols
fn strip_hash(name: &str) -> &str {
    match name.rfind("::h") {
        Some(idx)
            if name.len() - idx == 19
                && name[idx + 3..].bytes().all(|b| b.is_ascii_hexdigit()) =>
        {
            &name[..idx]
        }
        _ => name,
    }
}

/// Drop closure markers and trailing generic arguments from a symbol path
fn strip_decorations(mut name: &str) -> &str {
    loop {
        if let Some(rest) = name.strip_suffix("::{{closure}}") {
            name = rest;
        } else if let Some(idx) = name.rfind("::<").filter(|_| name.ends_with('>')) {
            name = &name[..idx];
        } else {
            return name;
        }
    }
}

/// Index of the `>` closing the `<` that opens `name`
fn closing_angle(name: &str) -> Option<usize> {
    let mut open = 0usize;
    for (idx, ch) in name.char_indices() {
        match ch {
            '<' => open += 1,
            '>' => {
                open = open.checked_sub(1)?;
                if open == 0 {
                    return Some(idx);
                }
            }
            _ => {}
        }
    }
    None
}

/// Split a type path into its module path and bare type name
fn split_type(path: &str) -> (String, String) {
    let path = path.split('<').next().unwrap_or(path).trim_start_matches('&');
    match path.rsplit_once("::") {
        Some((package, ty)) => (package.to_string(), ty.to_string()),
        None => (String::new(), path.to_string()),
    }
}

/// Split a demangled function path into package, optional type and function
///
/// `crate::module::Type::method` yields a type, `crate::module::function`
/// does not. Trait implementations (`<crate::Type as Trait>::method`) are
/// attributed to the implementing type.
pub(crate) fn split_function(name: &str) -> (String, Option<String>, String) {
    let name = strip_decorations(strip_hash(name));

    if name.starts_with('<') {
        if let Some(end) = closing_angle(name) {
            let inner = &name[1..end];
            let self_ty = inner.split(" as ").next().unwrap_or(inner);
            let function = name[end + 1..].trim_start_matches("::");
            let function = function.rsplit("::").next().unwrap_or(function);
            let (package, ty) = split_type(self_ty);
            return (package, Some(ty), function.to_string());
        }
    }

    let Some((scope, function)) = name.rsplit_once("::") else {
        return (String::new(), None, name.to_string());
    };

    match scope.rsplit_once("::") {
        Some((package, ty)) if ty.starts_with(|c: char| c.is_ascii_uppercase()) => {
            (package.to_string(), Some(ty.to_string()), function.to_string())
        }
        _ => (scope.to_string(), None, function.to_string()),
    }
}
