// Web host tuning.
// Longest step fed to the scene after a stall (tab switch, debugger).
pub const MAX_FRAME_DT_SEC: f64 = 0.1;

// Node record stride in floats, mirrored on the JS side.
pub const RECORD_STRIDE: usize = 12;
