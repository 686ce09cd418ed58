//! Classification of one order's synchronization attempt.

/// Outcome of syncing a single order to the purchases store, derived from
/// the HTTP response status — except [`SyncOutcome::Unreachable`], which
/// marks a request that produced no response at all and is never emitted by
/// the status table.
///
/// Computed once per order, immediately after the upsert call; never
/// retried automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// 201: the store created a fresh record.
    Created,
    /// 200: the store replaced an existing record via the update path.
    Updated,
    /// 409: the record already exists (duplicate create).
    Conflict,
    /// 500: the store failed internally.
    ServerError,
    /// No response at all (connection refused, timeout, DNS failure).
    Unreachable,
    /// Any status outside the fixed table.
    Unknown,
}

impl SyncOutcome {
    /// The fixed status table. Constructed from a match so it can never be
    /// reassigned or drift between calls.
    #[must_use]
    pub fn from_status(status: u16) -> Self {
        match status {
            200 => Self::Updated,
            201 => Self::Created,
            409 => Self::Conflict,
            500 => Self::ServerError,
            _ => Self::Unknown,
        }
    }

    /// Single-glyph token used in the end-of-run summary.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Created => "👶",
            Self::Updated => "👷",
            Self::Conflict => "🙅",
            Self::ServerError => "🧟",
            Self::Unreachable => "🔌",
            Self::Unknown => "🤷",
        }
    }
}

impl std::fmt::Display for SyncOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Conflict => "conflict",
            Self::ServerError => "server error",
            Self::Unreachable => "unreachable",
            Self::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_table_maps_every_known_status() {
        assert_eq!(SyncOutcome::from_status(200), SyncOutcome::Updated);
        assert_eq!(SyncOutcome::from_status(201), SyncOutcome::Created);
        assert_eq!(SyncOutcome::from_status(409), SyncOutcome::Conflict);
        assert_eq!(SyncOutcome::from_status(500), SyncOutcome::ServerError);
    }

    #[test]
    fn statuses_outside_the_table_are_unknown() {
        for status in [100, 204, 301, 400, 404, 418, 502, 503] {
            assert_eq!(SyncOutcome::from_status(status), SyncOutcome::Unknown);
        }
    }

    #[test]
    fn status_table_is_stable_across_calls() {
        // Same input, same classification; there is no state to drift.
        assert_eq!(SyncOutcome::from_status(200), SyncOutcome::from_status(200));
        assert_eq!(SyncOutcome::from_status(409), SyncOutcome::from_status(409));
    }

    #[test]
    fn glyphs_are_distinct() {
        let glyphs = [
            SyncOutcome::Created.glyph(),
            SyncOutcome::Updated.glyph(),
            SyncOutcome::Conflict.glyph(),
            SyncOutcome::ServerError.glyph(),
            SyncOutcome::Unreachable.glyph(),
            SyncOutcome::Unknown.glyph(),
        ];
        for (i, a) in glyphs.iter().enumerate() {
            for b in &glyphs[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
