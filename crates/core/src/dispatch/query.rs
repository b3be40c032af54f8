//! Query text normalization.

/// Keyword that routes a message to the pool totals flow.
pub const TOTAL_KEYWORD: &str = "total";

/// Quote pairs that mark an exact-name search. The gershayim pair shows up
/// when the sender's keyboard is on a Hebrew layout.
const QUOTE_PAIRS: [(char, char); 3] = [('"', '"'), ('\'', '\''), ('״', '״')];

/// A normalized query, ready for routing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedQuery {
    /// The pool totals keyword.
    Totals,
    /// Nothing left after trimming and quote stripping.
    Empty,
    /// A phrase search. `exact` is set when the phrase arrived quoted.
    Search { phrase: String, exact: bool },
}

/// Normalize raw query text into a routable query.
///
/// The totals keyword is matched before quote handling, so a quoted
/// `"total"` searches for a restaurant with that name instead of
/// triggering the totals flow.
pub fn parse_query(raw: &str) -> ParsedQuery {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return ParsedQuery::Empty;
    }
    if trimmed.eq_ignore_ascii_case(TOTAL_KEYWORD) {
        return ParsedQuery::Totals;
    }
    match strip_quotes(trimmed) {
        Some("") => ParsedQuery::Empty,
        Some(inner) => ParsedQuery::Search {
            phrase: inner.to_string(),
            exact: true,
        },
        None => ParsedQuery::Search {
            phrase: trimmed.to_string(),
            exact: false,
        },
    }
}

/// Strip one quote pair that wraps the entire text. Mismatched styles and
/// quotes in the middle of the text are left alone.
fn strip_quotes(text: &str) -> Option<&str> {
    QUOTE_PAIRS
        .iter()
        .find_map(|&(open, close)| text.strip_prefix(open)?.strip_suffix(close))
}
