//! Command-line interface.
//!
//! ```text
//! beacon [-v...] [--config FILE] <COMMAND>
//!
//!   render   Render the site to HTML
//!   theme    Show how the initial theme resolves
//!   audit    Check palette contrast against WCAG
//!   contact  Validate and submit a contact message
//! ```
//!
//! [`run`] writes command output to the given writer and returns the process
//! exit status; diagnostics go through `tracing` to stderr.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context};
use beacon_contact::{
    ArgFields, ContactError, ContactFields, ContactFormProcessor, ContactResult, Field, FieldReader,
};
use beacon_render::theme::AmbientPreference;
use beacon_render::{ColorMode, ThemeOptions};
use clap::{ArgAction, ArgMatches, Args, Parser, Subcommand};
use console::Style;
use serde_json::json;

use crate::audit::{run_audit, AuditLevel};
use crate::config::SiteConfig;
use crate::content::SiteContent;
use crate::form::{ContactFormView, FormRejection};
use crate::page::Page;

/// Environment variable holding the initial theme (`light` or `dark`).
pub const THEME_ENV_VAR: &str = "BEACON_THEME";

/// Exit status for a failed contact submission or audit.
pub const EXIT_FAILURE: u8 = 1;

#[derive(Debug, Parser)]
#[command(name = "beacon", version, about = "Brochure site renderer with light/dark themes")]
pub struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file [default: ./beacon.yaml when present]
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render the site to HTML
    Render(RenderArgs),
    /// Show how the initial theme resolves
    Theme(ThemeArgs),
    /// Check palette contrast against WCAG
    Audit(AuditArgs),
    /// Validate and submit a contact message
    Contact(ContactArgs),
}

#[derive(Debug, Clone, Default, Args)]
pub struct ThemeFlags {
    /// Initial theme, overriding the config file
    #[arg(long, value_name = "MODE", env = THEME_ENV_VAR)]
    pub theme: Option<ColorMode>,

    /// Ignore the host's light/dark preference
    #[arg(long)]
    pub no_system_theme: bool,
}

#[derive(Debug, Clone, Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub theme: ThemeFlags,

    /// Site content YAML [default: built-in content]
    #[arg(long, value_name = "FILE")]
    pub content: Option<PathBuf>,

    /// Write HTML here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Toggle the theme once before rendering
    #[arg(long)]
    pub toggle: bool,
}

#[derive(Debug, Clone, Args)]
pub struct ThemeArgs {
    #[command(flatten)]
    pub theme: ThemeFlags,

    /// Toggle the theme once and report the result
    #[arg(long)]
    pub toggle: bool,

    /// Print JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Args)]
pub struct AuditArgs {
    #[arg(long, value_enum, default_value_t = AuditLevel::Aa)]
    pub level: AuditLevel,

    /// Print JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Args)]
pub struct ContactArgs {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub message: Option<String>,

    /// Simulated delivery delay [default: config `contact_delay_ms`]
    #[arg(long, value_name = "MS")]
    pub delay_ms: Option<u64>,

    /// Submit without the form's per-field rules
    #[arg(long)]
    pub skip_rules: bool,
}

impl ContactArgs {
    fn to_fields(&self) -> ContactFields {
        ContactFields {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        }
    }
}

/// Runs `cli`. `matches` are the matches `cli` was built from.
pub async fn run(
    cli: &Cli,
    matches: &ArgMatches,
    ambient: &dyn AmbientPreference,
    out: &mut dyn Write,
) -> anyhow::Result<u8> {
    let config = SiteConfig::load(cli.config.as_deref()).context("failed to load config")?;

    match &cli.command {
        Command::Render(args) => render(&config, args, ambient, out),
        Command::Theme(args) => theme(&config, args, ambient, out),
        Command::Audit(args) => audit(args, out),
        Command::Contact(args) => {
            let sub_matches = matches.subcommand_matches("contact");
            contact(&config, args, sub_matches, out).await
        }
    }
}

/// Config first, then `--theme` / `BEACON_THEME`, then `--no-system-theme`.
pub fn theme_options(config: &SiteConfig, flags: &ThemeFlags) -> ThemeOptions {
    let mut options = config.theme_options();
    if let Some(mode) = flags.theme {
        options = options.with_default(mode);
    }
    if flags.no_system_theme {
        options = options.without_system_preference();
    }
    options
}

fn load_content(flag: Option<&Path>, config: &SiteConfig) -> anyhow::Result<SiteContent> {
    match flag.map(Path::to_path_buf).or_else(|| config.content_path()) {
        Some(path) => SiteContent::from_file(&path)
            .with_context(|| format!("failed to load content from {}", path.display())),
        None => Ok(SiteContent::builtin()),
    }
}

fn render(
    config: &SiteConfig,
    args: &RenderArgs,
    ambient: &dyn AmbientPreference,
    out: &mut dyn Write,
) -> anyhow::Result<u8> {
    let content = load_content(args.content.as_deref(), config)?;
    let mut page = Page::new(content, theme_options(config, &args.theme), ambient)
        .with_submit_delay(config.contact_delay());
    if let Some(title) = &config.title {
        page = page.with_title(title.clone());
    }
    if args.toggle {
        page.scope().toggle_theme();
    }

    let html = page.render().context("failed to render page")?;
    match &args.out {
        Some(path) => {
            fs::write(path, &html).with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), mode = %page.scope().mode(), "wrote page");
        }
        None => out.write_all(html.as_bytes())?,
    }
    Ok(0)
}

fn theme(
    config: &SiteConfig,
    args: &ThemeArgs,
    ambient: &dyn AmbientPreference,
    out: &mut dyn Write,
) -> anyhow::Result<u8> {
    let page = Page::new(
        SiteContent::builtin(),
        theme_options(config, &args.theme),
        ambient,
    );
    let scope = page.scope();
    let initial = scope.mode();

    let subscription = scope.subscribe(|mode| tracing::info!(%mode, "theme changed"));
    if args.toggle {
        scope.toggle_theme();
    }
    scope.unsubscribe(subscription);

    let state = scope.state();
    let root = page.document().root();

    if args.json {
        let report = json!({
            "initial_mode": initial,
            "mode": state.current_mode,
            "system_preference": state.system_preference,
            "root_class": root.class_attr(),
            "data_theme": root.attribute(beacon_render::THEME_ATTRIBUTE),
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        return Ok(0);
    }

    let label = Style::new().bold();
    let system = match state.system_preference {
        Some(mode) => mode.to_string(),
        None => "disabled".to_string(),
    };
    writeln!(out, "{} {}", label.apply_to("mode:"), state.current_mode)?;
    if args.toggle {
        writeln!(out, "{} {}", label.apply_to("initial mode:"), initial)?;
    }
    writeln!(out, "{} {}", label.apply_to("system preference:"), system)?;
    writeln!(out, "{} {}", label.apply_to("root class:"), root.class_attr())?;
    Ok(0)
}

fn audit(args: &AuditArgs, out: &mut dyn Write) -> anyhow::Result<u8> {
    let report = run_audit(args.level);
    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        write!(out, "{}", report.render_text())?;
    }
    Ok(if report.passed() { 0 } else { EXIT_FAILURE })
}

async fn contact(
    config: &SiteConfig,
    args: &ContactArgs,
    matches: Option<&ArgMatches>,
    out: &mut dyn Write,
) -> anyhow::Result<u8> {
    let delay = args
        .delay_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| config.contact_delay());
    let processor = ContactFormProcessor::simulated(delay);

    let from_args;
    let from_struct;
    let reader: &dyn FieldReader = match matches {
        Some(matches) => {
            from_args = ArgFields::new(matches);
            &from_args
        }
        None => {
            from_struct = args.to_fields();
            &from_struct
        }
    };

    let result = if args.skip_rules {
        processor.submit(reader).await
    } else {
        let fields = match collect_fields(reader) {
            Ok(fields) => fields,
            Err(err) => {
                let failure = ContactResult::from(err);
                writeln!(out, "{}", serde_json::to_string_pretty(&failure)?)?;
                return Ok(EXIT_FAILURE);
            }
        };
        let mut view = ContactFormView::new().with_fields(fields);
        match view.submit(&processor).await {
            Ok(result) => result,
            Err(FormRejection::Invalid(errors)) => {
                let fields: serde_json::Map<_, _> = errors
                    .iter()
                    .map(|(field, message)| (field.key().to_string(), json!(message)))
                    .collect();
                let report = json!({
                    "success": false,
                    "error": "Please correct the highlighted fields",
                    "fields": fields,
                });
                writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
                return Ok(EXIT_FAILURE);
            }
            Err(rejection @ FormRejection::AlreadySubmitting) => bail!(rejection),
        }
    };

    writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
    Ok(match result {
        ContactResult::Success { .. } => 0,
        ContactResult::Failure { .. } => EXIT_FAILURE,
    })
}

fn collect_fields(reader: &dyn FieldReader) -> Result<ContactFields, ContactError> {
    let mut fields = ContactFields::new();
    for field in Field::ALL {
        if let Some(value) = reader.read(field)? {
            fields.set(field, value);
        }
    }
    Ok(fields)
}
