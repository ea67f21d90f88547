//! `survey-client` -- terminal front-end for the accessory survey.
//!
//! `form` walks a respondent through the three questions and submits them.
//! `dashboard` (alias `admin-secret`) prints the summary counts and every
//! response, newest first.
//!
//! # Environment variables
//!
//! | Variable         | Default                 | Description             |
//! |------------------|-------------------------|-------------------------|
//! | `SURVEY_API_URL` | `http://localhost:5000` | Base URL of the API     |
//! | `RUST_LOG`       | `survey_client=info`    | Log filter (to stderr)  |

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use survey_core::accessory::Accessory;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use survey_client::dashboard::Dashboard;
use survey_client::form::{DraftField, FormClient, FormError, FormState};
use survey_client::SurveyApi;

#[derive(Debug, Parser)]
#[command(name = "survey-client", about = "Accessory survey form and admin dashboard")]
struct CliArgs {
    /// Base URL of the survey API.
    #[arg(long, env = "SURVEY_API_URL", default_value = "http://localhost:5000")]
    api_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fill in and submit the survey.
    Form,
    /// Show every response with summary counts.
    #[command(alias = "admin-secret")]
    Dashboard,
}

type StdinLines = Lines<BufReader<Stdin>>;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "survey_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = CliArgs::parse();
    let api = SurveyApi::new(args.api_url);
    tracing::debug!(api_url = %api.api_url(), "Using survey API");

    match args.command {
        Command::Form => run_form(&api).await,
        Command::Dashboard => {
            let mut dashboard = Dashboard::new();
            print!("{}", dashboard.render());
            dashboard.load(&api).await;
            print!("{}", dashboard.render());
            Ok(())
        }
    }
}

/// Drive the form until the respondent declines to answer again or stdin closes.
async fn run_form(api: &SurveyApi) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut form = FormClient::new();

    loop {
        match form.state() {
            FormState::Editing(_) => {
                println!("{}", form.render());
                if !fill_draft(&mut form, &mut lines).await? {
                    return Ok(());
                }

                match form.submit(api).await {
                    Ok(_) => {}
                    Err(FormError::Incomplete(fields)) => {
                        let names: Vec<_> = fields.iter().map(|f| f.label()).collect();
                        println!("Vui lòng điền đầy đủ thông tin: {}", names.join(", "));
                    }
                    Err(err) => return Err(err).context("form rejected submission"),
                }

                if let Some(notice) = form.take_notice() {
                    println!("⚠ {notice} (Enter để tiếp tục)");
                    if lines.next_line().await?.is_none() {
                        return Ok(());
                    }
                }
            }
            FormState::Submitted => {
                print!("{}", form.render());
                println!("Gửi thêm câu trả lời khác? [y/N]");
                let answer = lines.next_line().await?.unwrap_or_default();
                if !answer.trim().eq_ignore_ascii_case("y") {
                    return Ok(());
                }
                form.go_back()?;
            }
            FormState::Submitting(_) => {
                // `submit` resolves before returning, so the loop never observes this.
                anyhow::bail!("form left in submitting state");
            }
        }
    }
}

/// Prompt for each field. An empty answer keeps the current value.
/// Returns `false` when stdin is closed.
async fn fill_draft(form: &mut FormClient, lines: &mut StdinLines) -> Result<bool> {
    for field in DraftField::ALL {
        if field == DraftField::AccessoryType {
            for (i, accessory) in Accessory::ALL.iter().enumerate() {
                println!("  {}. {}", i + 1, accessory);
            }
        }
        println!("{}:", field.label());

        let Some(line) = lines.next_line().await? else {
            return Ok(false);
        };
        let Some(value) = answer(&line) else {
            continue;
        };

        match field {
            DraftField::AccessoryType => match parse_accessory(value.trim()) {
                Some(accessory) => form.choose_accessory(accessory)?,
                None => println!("Lựa chọn không hợp lệ: {value}"),
            },
            _ => form.set_field(field, value)?,
        }
    }
    Ok(true)
}

/// The answer as typed, or `None` for a blank line. Surrounding whitespace
/// is kept, so a whitespace-only answer is still an answer.
fn answer(line: &str) -> Option<&str> {
    (!line.is_empty()).then_some(line)
}

/// Accept a 1-based menu number or an exact label.
fn parse_accessory(input: &str) -> Option<Accessory> {
    input
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| Accessory::ALL.get(i).copied())
        .or_else(|| Accessory::from_label(input))
}
