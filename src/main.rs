use cardinal::carousel::{self, FixedStrip, StripEvent};
use cardinal::config::{self, FormOverrides};
use cardinal::contact::{
    ContactForm, ContactValues, FormData, FormSurface, HONEYPOT_FIELD, HttpTransport, Status,
    build_mailto,
};
use cardinal::output;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

/// Fields every contact form carries.
#[derive(clap::Args, Clone)]
struct MessageArgs {
    /// Sender name
    #[arg(long)]
    name: String,

    /// Sender email address
    #[arg(long)]
    email: String,

    /// Message body
    #[arg(long)]
    message: String,

    /// Selected service or package
    #[arg(long)]
    interest: Option<String>,

    /// Destination mailbox (overrides contact.contact_email)
    #[arg(long)]
    to: Option<String>,
}

impl MessageArgs {
    fn form_data(&self, bot_field: &str) -> FormData {
        let mut form = FormData::new()
            .with(HONEYPOT_FIELD, bot_field)
            .with("name", &self.name)
            .with("email", &self.email);
        if let Some(interest) = &self.interest {
            form.push("interest", interest);
        }
        form.push("message", &self.message);
        form
    }
}

#[derive(Parser)]
#[command(name = "cardinal")]
#[command(about = "Carousel and contact-form behavior for the Digital Cardinal site")]
#[command(long_about = "\
Carousel and contact-form behavior for the Digital Cardinal site

The library drives the site's interactive elements; this CLI runs the same
code from a terminal:

  cardinal submit     Deliver a message through the full channel chain:
                      form endpoint → origin relay → mail handoff
  cardinal mailto     Print the mail handoff URI for a message
  cardinal carousel   Replay scroll/step events on an in-memory strip and
                      show where it settles, including wrap-around jumps
  cardinal track      Replay the same events on a bounded strip and show
                      which arrow buttons are disabled
  cardinal check      Validate config.toml and show the effective settings
  cardinal gen-config Print a documented config.toml

Carousel events: scroll:<px>, resize:<px>, key:<name>, next, prev

Set RUST_LOG (or pass --verbose) to see channel and settle decisions.")]
#[command(version = version_string())]
struct Cli {
    /// Directory holding config.toml
    #[arg(long, default_value = ".", global = true)]
    config: PathBuf,

    /// Log channel and settle decisions to stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Submit a message through the delivery channels
    Submit {
        #[command(flatten)]
        message: MessageArgs,

        /// Honeypot value; anything non-empty drops the submission
        #[arg(long, default_value = "")]
        bot_field: String,

        /// Form endpoint (overrides contact.form_endpoint)
        #[arg(long)]
        endpoint: Option<String>,

        /// Print the submission record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the mailto: URI the mail handoff would open
    Mailto {
        #[command(flatten)]
        message: MessageArgs,
    },
    /// Replay events on an in-memory carousel
    Carousel {
        /// Real item widths in px; boundary clones are added automatically
        #[arg(long, value_delimiter = ',', required = true)]
        widths: Vec<f64>,

        /// Tab id of each real item
        #[arg(long, value_delimiter = ',')]
        tabs: Vec<String>,

        /// Visible width in px
        #[arg(long)]
        viewport: f64,

        /// Padding before the first and after the last item, in px
        /// [default: just enough for both boundary clones to be centered]
        #[arg(long)]
        inset: Option<f64>,

        /// Events to replay, in order
        events: Vec<StripEvent>,
    },
    /// Replay events on an in-memory bounded track
    Track {
        /// Item widths in px
        #[arg(long, value_delimiter = ',', required = true)]
        widths: Vec<f64>,

        /// Visible width in px
        #[arg(long)]
        viewport: f64,

        /// Gap between items in px [default: carousel.item_gap]
        #[arg(long)]
        gap: Option<f64>,

        /// Events to replay, in order
        events: Vec<StripEvent>,
    },
    /// Validate config.toml and print the effective settings
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

/// Form surface for the terminal: statuses go to stderr as they change,
/// the mail handoff prints the URI the browser would navigate to.
struct TerminalSurface;

impl FormSurface for TerminalSurface {
    fn set_status(&mut self, status: Status) {
        eprintln!("{}", output::format_status(status));
    }

    fn set_busy(&mut self, _busy: bool) {}

    fn reset(&mut self) {}

    fn open_mail_client(&mut self, uri: &str) {
        eprintln!("Open: {uri}");
    }

    fn wait(&mut self, delay: Duration) {
        std::thread::sleep(delay);
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Submit {
            message,
            bot_field,
            endpoint,
            json,
        } => {
            let site_config = config::load_config(&cli.config)?;
            let overrides = FormOverrides {
                contact_to: message.to.clone(),
                endpoint,
            };
            let form = ContactForm::new(site_config.contact.resolve(&overrides));
            let transport = HttpTransport::new()?;

            let attempt = form.submit(&message.form_data(&bot_field), &transport, &mut TerminalSurface);
            if json {
                println!("{}", serde_json::to_string_pretty(&attempt)?);
            } else {
                output::print_attempt(&attempt);
            }
        }
        Command::Mailto { message } => {
            let site_config = config::load_config(&cli.config)?;
            let overrides = FormOverrides {
                contact_to: message.to.clone(),
                endpoint: None,
            };
            let contact = site_config.contact.resolve(&overrides);
            let values = ContactValues::from_form(&message.form_data(""));
            println!(
                "{}",
                build_mailto(&contact.to, &values, &contact.product_name, &contact.attribution)
            );
        }
        Command::Carousel {
            widths,
            tabs,
            viewport,
            inset,
            events,
        } => {
            let site_config = config::load_config(&cli.config)?;
            let mut strip = FixedStrip::padded(&widths, &tabs, site_config.carousel.item_gap, viewport);
            if let Some(inset) = inset {
                strip = strip.with_inset(inset);
            }
            let session = carousel::replay(&mut strip, &site_config.carousel, &events)?;
            output::print_replay(&session, &strip);
        }
        Command::Track {
            widths,
            viewport,
            gap,
            events,
        } => {
            let site_config = config::load_config(&cli.config)?;
            let gap = gap.unwrap_or(site_config.carousel.item_gap);
            let mut strip = FixedStrip::new(widths, gap, viewport);
            let session = carousel::replay_track(&mut strip, &site_config.track, &events);
            output::print_track_replay(&session);
        }
        Command::Check => {
            println!("==> Checking {}", cli.config.join("config.toml").display());
            let site_config = config::load_config(&cli.config)?;
            output::print_config(&site_config);
            println!("==> Config is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
