mod wizard;

pub use wizard::{MenuAction, collect_record, run};
