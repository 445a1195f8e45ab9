//! Macros for ergonomic configuration construction.

/// Build a [`MachineConfig`](crate::core::MachineConfig) from a compact table.
///
/// State and event names are identifiers and become their own spelling.
/// States keep the order they are written in.
///
/// # Example
///
/// ```
/// use waypoint::machine_config;
///
/// let config = machine_config! {
///     initial: idle,
///     idle => { run => running },
///     running => { stop => idle, pause => paused },
///     paused => { run => running },
/// };
///
/// assert_eq!(config.initial(), "idle");
/// assert_eq!(config.resolve("running", "pause"), Some("paused"));
/// ```
#[macro_export]
macro_rules! machine_config {
    (
        initial: $initial:ident
        $(,
            $state:ident => {
                $($event:ident => $target:ident),* $(,)?
            }
        )* $(,)?
    ) => {
        $crate::core::MachineConfig::new(stringify!($initial))
            $(
                .with_state(
                    $crate::core::StateConfig::new(stringify!($state))
                        $(.on(stringify!($event), stringify!($target)))*
                )
            )*
    };
}
