pub mod axis_ticks;
pub mod chart_spec;
pub mod disordered_regions;
pub mod label_placement;
