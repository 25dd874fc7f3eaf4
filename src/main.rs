//! greenroom - terminal client for a remote AI interview service
//!
//! Creates an interview session for a candidate, conducts the turn-based
//! conversation with the remote interviewer, and prints the evaluation
//! summary once the interviewer concludes.

mod config;
mod engine;
mod runtime;
mod transcript;
mod transport;

use config::ClientConfig;
use engine::SessionContext;
use runtime::{attach, Session, SessionUpdate};
use std::io::Write as _;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast;
use transcript::{Message, Sender};
use transport::{CandidateProfile, HttpTransport, InterviewSummary, LoggingTransport};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type StdinLines = tokio::io::Lines<BufReader<tokio::io::Stdin>>;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let config = ClientConfig::from_env();
    let transport = Arc::new(HttpTransport::new(&config.base_url));
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    // An existing session id can be passed as the only argument; otherwise a
    // session is created from a profile collected on stdin.
    let session_id = match std::env::args().nth(1) {
        Some(id) => id,
        None => {
            let profile = prompt_profile(&mut lines).await?;
            match transport.create_session(&profile).await {
                Ok(id) => {
                    println!("Session created: {}", id);
                    id
                }
                Err(e) => {
                    eprintln!("Could not create the session: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let context = SessionContext::new(session_id, config.opening_prompt);
    let handle = attach(context, LoggingTransport::new(transport.clone()));
    let mut updates = handle.subscribe();
    let mut session = Session::new(handle.session_id().to_string());

    handle.bootstrap().await;

    loop {
        tokio::select! {
            update = updates.recv() => {
                match update {
                    Ok(SessionUpdate::Message { message, .. }) => {
                        println!("{}", render_message(&message));
                    }
                    Ok(SessionUpdate::StateChange { state }) => {
                        // Pending indicator; cleared implicitly by the reply
                        if state.is_in_flight() {
                            println!("...");
                        }
                    }
                    Ok(SessionUpdate::Completed) => {
                        session.completed = true;
                        break;
                    }
                    Err(broadcast::error::RecvError::Lagged(_)) => continue,
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
            line = lines.next_line() => {
                match line? {
                    Some(text) => {
                        if !text.trim().is_empty() {
                            handle.submit(text).await;
                        }
                    }
                    None => break,
                }
            }
        }
    }

    if session.completed {
        match transport.fetch_summary(&session.id).await {
            Ok(summary) => print_summary(&summary),
            Err(e) => {
                eprintln!("Could not fetch the interview summary: {}", e);
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

/// Logs go to stderr so they never interleave with the conversation on
/// stdout. `GREENROOM_LOG_JSON=1` switches to JSON lines.
fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "greenroom=info".into());

    if std::env::var("GREENROOM_LOG_JSON").is_ok_and(|v| v == "1") {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_current_span(false)
                    .with_span_list(false),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

/// Collect the candidate profile from stdin, one field per line
async fn prompt_profile(lines: &mut StdinLines) -> Result<CandidateProfile, std::io::Error> {
    println!("No session id given; creating a new interview session.");
    Ok(CandidateProfile {
        name: prompt_line(lines, "Candidate name").await?,
        email: prompt_line(lines, "Email").await?,
        contact: prompt_line(lines, "Contact (optional)").await?,
        role: prompt_line(lines, "Role").await?,
        job_description: prompt_line(lines, "Job description").await?,
    })
}

async fn prompt_line(lines: &mut StdinLines, label: &str) -> Result<String, std::io::Error> {
    print!("{}: ", label);
    std::io::stdout().flush()?;
    let line = lines.next_line().await?.unwrap_or_default();
    Ok(line.trim().to_string())
}

fn render_message(message: &Message) -> String {
    let label = match message.sender {
        Sender::User => "you",
        Sender::Agent => "interviewer",
    };
    format!("{}: {}", label, message.content)
}

fn print_summary(summary: &InterviewSummary) {
    println!();
    println!("=== Interview summary: {} ({}) ===", summary.name, summary.role);
    println!();
    println!("{}", summary.summary);
    if !summary.strengths.is_empty() {
        println!();
        println!("Strengths:");
        for item in &summary.strengths {
            println!("  - {}", item);
        }
    }
    if !summary.weaknesses.is_empty() {
        println!();
        println!("Weaknesses:");
        for item in &summary.weaknesses {
            println!("  - {}", item);
        }
    }
    println!();
    println!("Recommendation: {}", summary.recommendation);
}
