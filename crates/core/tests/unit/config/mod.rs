/// Built-in presets.
pub mod presets;
