/// Errors surfaced by rankorder-core.
///
/// Ranking itself never fails: every score sequence, including empty and all-missing
/// ones, has an order. The only failure is a configuration value that does not name
/// one of the known variants, and it is reported before any comparison work starts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RankError {
    #[error("Invalid {field} \"{value}\". Use one of: {expected}.")]
    InvalidConfiguration {
        /// Which configuration knob was rejected (`missing`, `direction`, `ties`).
        field: &'static str,
        /// The value as supplied by the caller.
        value: String,
        /// Accepted spellings, for the error message.
        expected: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, RankError>;
