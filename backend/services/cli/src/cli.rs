use std::fs;
use std::path::PathBuf;

use clap::Parser;
use scamintel_common::error::{ScamIntelError, ScamIntelResult};
use scamintel_scoring::AnalysisInput;

#[derive(Parser, Debug)]
#[command(name = "scamintel")]
#[command(about = "Multi-signal scam risk triage for messages and contact metadata", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Message, transcript, or email body
    #[arg(long, required_unless_present = "input")]
    pub text: Option<String>,

    /// Related URLs
    #[arg(long, num_args = 0..)]
    pub urls: Vec<String>,

    /// Related email addresses
    #[arg(long, num_args = 0..)]
    pub emails: Vec<String>,

    /// Related phone numbers
    #[arg(long, num_args = 0..)]
    pub phones: Vec<String>,

    /// JSON file holding an analysis input; flags given on the command line extend it
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Print single-line JSON
    #[arg(long)]
    pub compact: bool,
}

impl Cli {
    /// Build the analysis input from the optional file plus command-line flags.
    /// `--text` replaces the file's text; list flags append to the file's lists.
    pub fn to_input(&self) -> ScamIntelResult<AnalysisInput> {
        let mut input = match &self.input {
            Some(path) => {
                let raw = fs::read_to_string(path)?;
                serde_json::from_str(&raw).map_err(|e| {
                    ScamIntelError::Validation(format!("invalid input file {}: {e}", path.display()))
                })?
            }
            None => AnalysisInput::default(),
        };

        if let Some(text) = &self.text {
            input.text = text.clone();
        }
        input.urls.extend(self.urls.iter().cloned());
        input.emails.extend(self.emails.iter().cloned());
        input.phones.extend(self.phones.iter().cloned());
        Ok(input)
    }
}
