/// Candidate sets are encoded as `u64` masks over the variable list.
pub const MAX_VARIABLES: usize = 63;
/// Above this many variables the exhaustive search gets slow enough to warn about.
pub const WARN_VARIABLE_COUNT: usize = 20;
