use std::fmt;

/// Human-readable outcome of a find or replace operation.
///
/// These go to the dialog's status line; none of them is an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// The term is empty after an edit of the term or options
    TypeTerm,
    /// Term or options changed, nothing searched yet
    Ready,
    /// Search requested with an empty term
    EnterTerm,
    MatchFound,
    WrappedToStart,
    WrappedToEnd,
    NoMoreMatches,
    NoEarlierMatches,
    /// One occurrence replaced, followed by the result of finding the next
    Replaced(Box<Status>),
    /// Result of a replace-all
    ReplacedCount(usize),
}

impl Status {
    /// Whether a match got selected
    pub fn is_match(&self) -> bool {
        matches!(
            self,
            Status::MatchFound | Status::WrappedToStart | Status::WrappedToEnd
        )
    }

    /// The request could not be satisfied
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            Status::EnterTerm | Status::NoMoreMatches | Status::NoEarlierMatches
        )
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::TypeTerm => f.write_str("Type a term and press Next."),
            Status::Ready => f.write_str("Ready."),
            Status::EnterTerm => f.write_str("Enter a search term."),
            Status::MatchFound => f.write_str("Match found."),
            Status::WrappedToStart => f.write_str("Wrapped to start."),
            Status::WrappedToEnd => f.write_str("Wrapped to end."),
            Status::NoMoreMatches => f.write_str("No more matches."),
            Status::NoEarlierMatches => f.write_str("No earlier matches."),
            Status::Replaced(next) => write!(f, "Replaced. {}", next),
            Status::ReplacedCount(count) => write!(f, "Replaced {} occurrence(s).", count),
        }
    }
}
