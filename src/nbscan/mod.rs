pub mod families;
pub mod hotspots;
pub mod motif;
pub mod record;
pub mod resolve;
pub mod scoring;
pub mod sequence;
pub mod workflows;
pub mod writers;
