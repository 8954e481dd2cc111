#[cfg(feature = "clipboard-support")]
use clipboard::{ClipboardContext, ClipboardProvider};
use crossterm::{
    ExecutableCommand,
    style::{Color, ResetColor, SetForegroundColor},
};
use log::{debug, info};
#[cfg(feature = "clipboard-support")]
use log::warn;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

pub trait OutputWriter {
    fn write(&self, content: &str) -> anyhow::Result<()>;
}

pub struct FileWriter {
    path: String,
}

impl FileWriter {
    pub fn new(path: String) -> Self {
        Self { path }
    }
}

impl OutputWriter for FileWriter {
    fn write(&self, content: &str) -> anyhow::Result<()> {
        debug!("Writing report to file: {}", self.path);
        fs::write(Path::new(&self.path), content)?;
        info!("Report written to file: {}", self.path);
        Ok(())
    }
}

pub struct ConsoleWriter;

impl OutputWriter for ConsoleWriter {
    fn write(&self, content: &str) -> anyhow::Result<()> {
        debug!("Writing report to console");
        let mut stdout = io::stdout().lock();
        stdout.write_all(content.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}

#[cfg(feature = "clipboard-support")]
pub struct ClipboardWriter;

#[cfg(feature = "clipboard-support")]
impl OutputWriter for ClipboardWriter {
    fn write(&self, content: &str) -> anyhow::Result<()> {
        debug!("Writing report to clipboard");

        let mut ctx: ClipboardContext = match ClipboardProvider::new() {
            Ok(ctx) => ctx,
            Err(e) => {
                warn!("Failed to access clipboard: {}", e);
                return Err(anyhow::anyhow!("Failed to access clipboard: {}", e));
            }
        };

        match ctx.set_contents(content.to_owned()) {
            Ok(_) => {
                info!("Report copied to clipboard (size: {} bytes)", content.len());
                Ok(())
            }
            Err(e) => {
                warn!("Failed to copy to clipboard: {}", e);
                Err(anyhow::anyhow!("Failed to copy to clipboard: {}", e))
            }
        }
    }
}

pub fn create_writer(
    output_path: &Option<String>,
    clipboard_output: bool,
) -> anyhow::Result<Box<dyn OutputWriter>> {
    if clipboard_output {
        #[cfg(feature = "clipboard-support")]
        return Ok(Box::new(ClipboardWriter) as Box<dyn OutputWriter>);

        #[cfg(not(feature = "clipboard-support"))]
        anyhow::bail!("Clipboard output requires the clipboard-support feature");
    }

    Ok(match output_path {
        Some(path) => Box::new(FileWriter::new(path.clone())) as Box<dyn OutputWriter>,
        None => Box::new(ConsoleWriter) as Box<dyn OutputWriter>,
    })
}

fn preview(content: &str, max_chars: usize) -> String {
    if content.chars().count() > max_chars {
        let safe_substring: String = content.chars().take(max_chars).collect();
        format!("{}...", safe_substring)
    } else {
        content.to_string()
    }
}

pub fn write_output(
    formatted_content: &str,
    output_path: Option<String>,
    clipboard_output: bool,
) -> anyhow::Result<()> {
    let writer = create_writer(&output_path, clipboard_output)?;
    writer.write(formatted_content)?;

    if clipboard_output && output_path.is_none() {
        let mut stderr = io::stderr();
        stderr.execute(SetForegroundColor(Color::Green))?;
        writeln!(stderr, "\n📋 Report copied to clipboard!")?;
        stderr.execute(ResetColor)?;

        writeln!(stderr, "\nPreview of copied report:\n")?;
        writeln!(stderr, "{}", preview(formatted_content, 200))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_file_writer() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_string_lossy().to_string();
        let writer = FileWriter::new(path.clone());
        let content = "domain,count\nexample.com,2\n";

        writer.write(content).unwrap();

        let read_content = fs::read_to_string(path).unwrap();
        assert_eq!(read_content, content);
    }

    #[test]
    fn test_write_output_to_file() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_string_lossy().to_string();

        write_output("DOMAIN  COUNT\n", Some(path.clone()), false).unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "DOMAIN  COUNT\n");
    }

    #[test]
    fn test_create_writer() {
        assert!(create_writer(&Some("report.txt".to_string()), false).is_ok());
        assert!(create_writer(&None, false).is_ok());
    }

    #[cfg(not(feature = "clipboard-support"))]
    #[test]
    fn test_clipboard_needs_feature() {
        assert!(create_writer(&None, true).is_err());
    }

    #[test]
    fn test_utf8_safe_preview() {
        let content = "müller@bücher.de ümlaut.example 🚀 and more text after";

        let short = preview(content, 10);
        assert_eq!(short.chars().count(), 13);
        assert!(short.ends_with("..."));
        assert_eq!(preview("short", 10), "short");
    }
}
