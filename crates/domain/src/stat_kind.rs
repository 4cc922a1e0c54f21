use std::fmt;

/// Which upstream query is being requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatKind {
    /// Raw (unformatted) summary counters.
    Summary,
    /// Share of each DNS record type among all queries.
    QueryTypes,
}

impl StatKind {
    /// Query parameter understood by the Pi-hole API.
    pub fn as_query_param(&self) -> &'static str {
        match self {
            StatKind::Summary => "summaryRaw",
            StatKind::QueryTypes => "getQueryTypes",
        }
    }
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query_param())
    }
}
