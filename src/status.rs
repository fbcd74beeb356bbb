/// Status code used when a successful exchange carries no explicit code.
pub const DEFAULT_SUCCESS_STATUS: i64 = 200;

/// Status code used when a failed exchange carries no explicit code.
pub const DEFAULT_ERROR_STATUS: i64 = 500;

const RESET: &str = "\x1b[0m";

/// Half-open numeric range a status code falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusBucket {
    /// `[100, 300)`
    Informational,
    /// `[300, 400)`
    Redirection,
    /// `[400, 500)`
    ClientFault,
    /// `[500, 600)`
    ServerFault,
    /// Everything else.
    Unclassified,
}

/// Terminal color assigned to a [`StatusBucket`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Green,
    Cyan,
    Yellow,
    Red,
}

impl Color {
    fn sgr(self) -> &'static str {
        match self {
            Color::Green => "\x1b[32m",
            Color::Cyan => "\x1b[36m",
            Color::Yellow => "\x1b[33m",
            Color::Red => "\x1b[31m",
        }
    }

    /// Wrap `text` in this color's SGR directive.
    pub fn paint(self, text: &str) -> String {
        format!("{}{}{}", self.sgr(), text, RESET)
    }
}

impl StatusBucket {
    /// Classify an arbitrary integer. Total: values outside `[100, 600)`
    /// land in [`StatusBucket::Unclassified`].
    pub fn classify(code: i64) -> Self {
        match code {
            100..=299 => StatusBucket::Informational,
            300..=399 => StatusBucket::Redirection,
            400..=499 => StatusBucket::ClientFault,
            500..=599 => StatusBucket::ServerFault,
            _ => StatusBucket::Unclassified,
        }
    }

    /// Display treatment for the bucket; `None` means "render untagged".
    pub fn color(self) -> Option<Color> {
        match self {
            StatusBucket::Informational => Some(Color::Green),
            StatusBucket::Redirection => Some(Color::Cyan),
            StatusBucket::ClientFault => Some(Color::Yellow),
            StatusBucket::ServerFault => Some(Color::Red),
            StatusBucket::Unclassified => None,
        }
    }

    pub fn is_failure(self) -> bool {
        matches!(self, StatusBucket::ClientFault | StatusBucket::ServerFault)
    }
}

/// Render a status code for the `status` field of a record.
///
/// With `color_enabled == false` this is exactly `code.to_string()`. With
/// coloring on, the code is wrapped in the ANSI color of its bucket
/// (unclassified codes stay untagged).
pub fn classify_and_format(code: i64, color_enabled: bool) -> String {
    let text = code.to_string();
    if !color_enabled {
        return text;
    }
    match StatusBucket::classify(code).color() {
        Some(color) => color.paint(&text),
        None => text,
    }
}

/// Remove ANSI SGR directives from a rendered status string.
pub fn strip_color(status: &str) -> String {
    let mut out = String::with_capacity(status.len());
    let mut chars = status.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            // skip `[...m`
            for next in chars.by_ref() {
                if next == 'm' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Parse the numeric code back out of a (possibly colored) status string.
pub fn parse_status(status: &str) -> Option<i64> {
    strip_color(status).trim().parse().ok()
}
