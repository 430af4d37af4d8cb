//! CLI argument definitions

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::config::ImportConfig;
use crate::error::{CertImportError, CertImportResult};
use crate::tags::parse_tags;

const LONG_ABOUT: &str = "\
AWS Certificate Manager Import CLI

Import SSL/TLS certificates into AWS Certificate Manager";

const EXAMPLES: &str = "\
Examples:
  certimport --cert cert.pem --key private-key.pem
  certimport --cert cert.pem --key key.pem --chain chain.pem --region us-west-2
  certimport --cert cert.pem --key key.pem --tags 'Environment=prod,Application=web'";

/// Flag names that are also accepted with a single leading dash
const LEGACY_FLAGS: [&str; 7] = ["cert", "key", "chain", "region", "profile", "tags", "json"];

/// Command line arguments for the import tool
///
/// Every value-taking flag consumes the next argument even when it starts
/// with a dash, so `-cert -x.pem` names the file `-x.pem`.
#[derive(Parser, Debug)]
#[command(name = "certimport", version)]
#[command(about = "AWS Certificate Manager Import CLI")]
#[command(long_about = LONG_ABOUT)]
#[command(after_help = EXAMPLES)]
pub struct Cli {
    /// Path to certificate file (PEM format)
    #[arg(
        long,
        value_name = "PATH",
        allow_hyphen_values = true,
        help_heading = "Required Options"
    )]
    pub cert: Option<String>,

    /// Path to private key file (PEM format)
    #[arg(
        long,
        value_name = "PATH",
        allow_hyphen_values = true,
        help_heading = "Required Options"
    )]
    pub key: Option<String>,

    /// Path to certificate chain file (PEM format)
    #[arg(
        long,
        value_name = "PATH",
        allow_hyphen_values = true,
        help_heading = "Optional Options"
    )]
    pub chain: Option<String>,

    /// AWS region (defaults to AWS_REGION, the profile's region, or us-east-1)
    #[arg(long, allow_hyphen_values = true, help_heading = "Optional Options")]
    pub region: Option<String>,

    /// AWS profile to use (defaults to default profile)
    #[arg(long, allow_hyphen_values = true, help_heading = "Optional Options")]
    pub profile: Option<String>,

    /// Tags in format 'key1=value1,key2=value2'
    #[arg(long, allow_hyphen_values = true, help_heading = "Optional Options")]
    pub tags: Option<String>,

    /// Output the result in JSON format
    #[arg(long, help_heading = "Optional Options")]
    pub json: bool,
}

impl Cli {
    /// Validate required arguments and build the run configuration
    ///
    /// Absent and empty values are treated the same way. No files are
    /// touched here.
    pub fn into_config(self) -> CertImportResult<ImportConfig> {
        let (Some(cert), Some(key)) = (non_empty(self.cert), non_empty(self.key)) else {
            return Err(CertImportError::Usage(
                "Both --cert and --key are required".to_string(),
            ));
        };

        let mut config = ImportConfig::new(cert, key);
        config.chain_file = non_empty(self.chain).map(PathBuf::from);
        config.region = non_empty(self.region);
        config.profile = non_empty(self.profile);
        config.tags = non_empty(self.tags)
            .map(|tags| parse_tags(&tags))
            .unwrap_or_default();
        config.json = self.json;
        Ok(config)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Rewrite `-cert`, `-key=...` and friends to their `--long` form
///
/// The program name and everything after a `--` separator are left alone,
/// as are arguments that are not valid UTF-8.
pub fn normalize_legacy_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut passthrough = false;
    args.into_iter()
        .map(Into::into)
        .enumerate()
        .map(|(index, arg)| {
            if index == 0 || passthrough {
                return arg;
            }
            if arg == "--" {
                passthrough = true;
                return arg;
            }
            rewrite_legacy_flag(arg)
        })
        .collect()
}

fn rewrite_legacy_flag(arg: OsString) -> OsString {
    let Some(text) = arg.to_str() else {
        return arg;
    };
    let Some(rest) = text.strip_prefix('-') else {
        return arg;
    };
    if rest.starts_with('-') {
        return arg;
    }

    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    if LEGACY_FLAGS.contains(&name) {
        OsString::from(format!("-{text}"))
    } else {
        arg
    }
}
