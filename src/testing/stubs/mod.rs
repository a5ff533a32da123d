mod script_driver;

pub use script_driver::{Answer, AskedPrompt, ScriptedDriver};
