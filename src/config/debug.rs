//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so release
//! builds remain quiet.

pub struct DebugFlags {
    /// Emit every request URL (query strings included) before it is sent.
    pub print_requests: bool,
    /// Emit the raw value vectors of both series after fetching.
    pub print_series_values: bool,
    /// Emit each date the aligner had to fill or drop.
    pub print_alignment_gaps: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_requests: false,
    print_series_values: false,
    print_alignment_gaps: false,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_flags_off_by_default() {
        assert!(!DEBUG_FLAGS.print_requests);
        assert!(!DEBUG_FLAGS.print_series_values);
        assert!(!DEBUG_FLAGS.print_alignment_gaps);
    }
}
