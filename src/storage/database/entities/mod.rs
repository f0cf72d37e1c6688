//! Database entity definitions

pub mod usage_record;
