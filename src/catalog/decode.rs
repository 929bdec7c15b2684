/// One decoded source/target pair, borrowed from the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pair<'a> {
    pub source: &'a str,
    pub target: &'a str,
}

/// Lazy iterator over the well-formed pairs in catalog text.
///
/// Holds a single pending-source slot: a `msgid` line fills it (replacing any
/// stale value left by a `msgid` with no intervening `msgstr`), a `msgstr`
/// line drains it into a pair, and every other line falls through untouched.
pub struct Pairs<'a> {
    lines: std::str::Lines<'a>,
    pending_source: Option<&'a str>,
}

/// Decode catalog text into its source/target pairs.
pub fn decode(input: &str) -> Pairs<'_> {
    Pairs {
        lines: input.lines(),
        pending_source: None,
    }
}

impl<'a> Iterator for Pairs<'a> {
    type Item = Pair<'a>;

    fn next(&mut self) -> Option<Pair<'a>> {
        for line in self.lines.by_ref() {
            if let Some(source) = capture(line, "msgid ") {
                // A repeated msgid discards the stale pending source rather
                // than wedging the scanner.
                self.pending_source = Some(source);
            } else if let Some(target) = capture(line, "msgstr ") {
                if let Some(source) = self.pending_source.take() {
                    return Some(Pair { source, target });
                }
                // Orphan msgstr: skip without touching the buffer.
            }
        }
        None
    }
}

/// Match an anchored `<directive> "<text>"` line and capture the text between
/// the first and last double quote, verbatim. Escapes are not interpreted;
/// an empty capture is a valid match.
fn capture<'a>(line: &'a str, directive: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(directive)?;
    let rest = rest.strip_prefix('"')?;
    rest.strip_suffix('"')
}
