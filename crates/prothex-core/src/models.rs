pub mod analysis;
pub mod labels;
pub mod metrics;
pub mod profile;
pub mod record;
pub mod weekly;
