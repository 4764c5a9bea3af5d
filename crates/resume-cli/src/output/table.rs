use resume_core::model::{BatchResult, ParsedRecord, ResumeFields};
use std::fmt::Write;

/// Human-readable rendering of a single record.
pub fn format_record(record: &ParsedRecord) -> String {
    match record {
        ParsedRecord::Success(fields) => format_fields(fields),
        ParsedRecord::Failure { error } => format!("  Error: {error}\n"),
    }
}

/// Human-readable rendering of a batch: one block per file plus a summary line.
pub fn format_batch(result: &BatchResult) -> String {
    let mut out = String::new();

    if result.is_empty() {
        out.push_str("No PDF or DOCX files found.\n");
        return out;
    }

    for (name, records) in result.iter() {
        let _ = writeln!(out, "=== {name} ===\n");
        for record in records {
            out.push_str(&format_record(record));
        }
        out.push('\n');
    }

    let _ = writeln!(
        out,
        "{} file(s): {} parsed, {} failed",
        result.len(),
        result.success_count(),
        result.failure_count()
    );
    out
}

fn format_fields(fields: &ResumeFields) -> String {
    let mut out = String::new();
    let scalar = |v: &Option<String>| v.as_deref().unwrap_or("-").to_string();

    let _ = writeln!(out, "  Name:   {}", scalar(&fields.name));
    let _ = writeln!(out, "  Email:  {}", scalar(&fields.email));
    let _ = writeln!(out, "  Phone:  {}", scalar(&fields.phone));

    let _ = writeln!(out, "  Skills: {}", inline(&fields.skills));
    let _ = writeln!(out, "  Organizations: {}", inline(&fields.organizations));

    write_lines(&mut out, "Education", &fields.education);
    write_lines(&mut out, "Work experience", &fields.work_experience);
    out
}

fn inline(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}

fn write_lines(out: &mut String, title: &str, lines: &[String]) {
    if lines.is_empty() {
        let _ = writeln!(out, "  {title}: -");
        return;
    }
    let _ = writeln!(out, "  {title}:");
    for line in lines {
        let _ = writeln!(out, "    {line}");
    }
}
