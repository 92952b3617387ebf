// Constants for the step driver

/// Label of the single call-stack frame present after a reset
pub const INITIAL_FRAME: &str = "main";

/// Prefix of synthetic loop tracker ids (`loop_0`, `loop_1`, ...)
pub const LOOP_ID_PREFIX: &str = "loop_";
