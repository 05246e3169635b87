//! Macros for declarative configuration literals.

/// Build a [`MachineConfig`](crate::config::MachineConfig) from a literal
/// description.
///
/// Expands to a [`MachineConfigBuilder`](crate::config::MachineConfigBuilder)
/// chain and evaluates to `Result<MachineConfig, BuildError>`.
///
/// # Example
///
/// ```
/// use rewind::machine_config;
///
/// let config = machine_config! {
///     initial: "idle",
///     states: {
///         "idle" => { "start" => "running" },
///         "running" => { "stop" => "idle", "pause" => "paused" },
///         "paused" => { "resume" => "running" },
///     }
/// }
/// .unwrap();
///
/// assert_eq!(config.states.len(), 3);
/// ```
#[macro_export]
macro_rules! machine_config {
    (
        initial: $initial:expr,
        states: {
            $(
                $state:expr => { $($event:expr => $target:expr),* $(,)? }
            ),* $(,)?
        } $(,)?
    ) => {
        $crate::config::MachineConfigBuilder::new()
            .initial($initial)
            $(
                .state($state, |t| t $(.on($event, $target))*)
            )*
            .build()
    };
}
