/// The two eframe applications, one per instrument export format.
pub mod amplitude;
pub mod sweep;
