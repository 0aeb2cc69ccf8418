/// Fallback values for settings that neither the command line nor the config file set.
#[derive(Debug, Default)]
pub struct DefaultsConfig {
    pub show_counts: bool,
    /// `None` leaves the rayon pool at one thread per logical core.
    pub threads: Option<usize>,
}
