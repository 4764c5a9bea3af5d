use crate::entities::{EntityRecognizer, EntitySpan};
use crate::error::ResumeError;
use std::io::Write;
use std::process::{Command, Stdio};

/// Entity recognizer that delegates to an external program.
///
/// The program receives the document text on stdin and must print a JSON
/// array of `{"text": ..., "label": ...}` objects on stdout, in order of
/// appearance. Labels follow the usual NER conventions (`PERSON`, `ORG`, ...).
/// Stdin is fed from a separate thread while output is collected, and the
/// child is always waited on; a non-zero exit takes precedence over a failed
/// write.
#[derive(Debug, Clone)]
pub struct CommandRecognizer {
    program: String,
    args: Vec<String>,
}

impl CommandRecognizer {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        CommandRecognizer {
            program: program.into(),
            args,
        }
    }
}

impl EntityRecognizer for CommandRecognizer {
    fn recognize(&self, text: &str) -> Result<Vec<EntitySpan>, ResumeError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ResumeError::RecognizerNotFound(self.program.clone())
                } else {
                    ResumeError::Io(e)
                }
            })?;

        let stdin = child.stdin.take();
        let (output, written) = std::thread::scope(|scope| {
            let writer = scope.spawn(move || match stdin {
                Some(mut stdin) => stdin.write_all(text.as_bytes()),
                None => Ok(()),
            });
            let output = child.wait_with_output();
            let written = writer.join().unwrap_or_else(|_| {
                Err(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    "stdin writer panicked",
                ))
            });
            (output, written)
        });

        let output = output?;
        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(ResumeError::RecognizerFailed { code, stderr });
        }

        // A program that exits cleanly without reading all of its input is fine.
        match written {
            Err(e) if e.kind() != std::io::ErrorKind::BrokenPipe => {
                return Err(ResumeError::Io(e));
            }
            _ => {}
        }

        parse_spans(&output.stdout)
    }

    fn backend_name(&self) -> &str {
        &self.program
    }
}

fn parse_spans(stdout: &[u8]) -> Result<Vec<EntitySpan>, ResumeError> {
    let spans: Vec<EntitySpan> = serde_json::from_slice(stdout)?;
    Ok(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::EntityLabel;

    #[test]
    fn test_parse_spans() {
        let spans = parse_spans(
            br#"[{"text":"Jane Doe","label":"PERSON"},{"text":"Acme","label":"ORG"}]"#,
        )
        .unwrap();
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].label, EntityLabel::Person);
        assert_eq!(spans[1].text, "Acme");
    }

    #[test]
    fn test_parse_spans_rejects_garbage() {
        assert!(matches!(
            parse_spans(b"Traceback (most recent call last)"),
            Err(ResumeError::Json(_))
        ));
    }

    #[test]
    fn test_missing_program() {
        let recognizer = CommandRecognizer::new("resume-ner-does-not-exist", vec![]);
        assert!(matches!(
            recognizer.recognize("text"),
            Err(ResumeError::RecognizerNotFound(ref p)) if p == "resume-ner-does-not-exist"
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_shell_recognizer_round_trip() {
        let recognizer = CommandRecognizer::new(
            "sh",
            vec![
                "-c".into(),
                r#"cat >/dev/null; echo '[{"text":"Jane Doe","label":"PERSON"}]'"#.into(),
            ],
        );
        let spans = recognizer.recognize("Jane Doe, engineer").unwrap();
        assert_eq!(spans, vec![EntitySpan::new("Jane Doe", EntityLabel::Person)]);
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_is_reported() {
        let recognizer = CommandRecognizer::new(
            "sh",
            vec!["-c".into(), "cat >/dev/null; echo model missing >&2; exit 3".into()],
        );
        match recognizer.recognize("text") {
            Err(ResumeError::RecognizerFailed { code, stderr }) => {
                assert_eq!(code, 3);
                assert_eq!(stderr, "model missing");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_early_exit_with_large_input_reports_exit_status() {
        let recognizer = CommandRecognizer::new(
            "sh",
            vec!["-c".into(), "echo model missing >&2; exit 3".into()],
        );
        match recognizer.recognize(&"x".repeat(1 << 20)) {
            Err(ResumeError::RecognizerFailed { code, stderr }) => {
                assert_eq!(code, 3);
                assert_eq!(stderr, "model missing");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_large_input_echoed_while_reading() {
        // `cat` writes output before it has read all input; both pipes must drain.
        let long_name = "x".repeat(1 << 20);
        let input = format!(r#"[{{"text":"{long_name}","label":"ORG"}}]"#);
        let recognizer = CommandRecognizer::new("cat", vec![]);

        let spans = recognizer.recognize(&input).unwrap();
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text.len(), 1 << 20);
        assert_eq!(spans[0].label, EntityLabel::Org);
    }
}
