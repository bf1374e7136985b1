/// Reachability of the prediction service as seen by the last probe.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ServiceHealth {
    /// No probe has run yet.
    #[default]
    Unknown,
    /// A probe is in flight.
    Checking,
    Online,
    /// The probe failed; holds the reason.
    Offline(String),
}
