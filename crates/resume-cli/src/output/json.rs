use resume_core::error::ResumeError;
use serde::Serialize;

pub fn print<T: Serialize>(value: &T) -> Result<(), ResumeError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
