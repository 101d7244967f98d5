use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use shared::domain::Decision;
use wizard::{
    rsvp::{CONFIRM_LABEL, DECLINE_LABEL},
    validation::{DAY_HINT, MONTH_HINT, YEAR_HINT},
    HttpNotifier, Step, Wizard, WizardError,
};

#[derive(Parser, Debug)]
struct Args {
    #[arg(long, default_value = "http://127.0.0.1:8787")]
    dispatcher_url: String,
}

const CLEAR_COMMANDS: [&str; 2] = ["limpar", "clear"];

struct Prompt<R> {
    input: R,
}

impl<R: BufRead> Prompt<R> {
    /// `None` once input is exhausted.
    fn ask(&mut self, label: &str) -> Result<Option<String>> {
        print!("{label}");
        io::stdout().flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

fn show_validation(result: Result<(), WizardError>) -> Result<()> {
    match result {
        Ok(()) => Ok(()),
        Err(WizardError::Validation(err)) => {
            println!("  {err}");
            Ok(())
        }
        Err(other) => Err(other.into()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_writer(io::stderr)
        .init();
    let args = Args::parse();
    let notifier = HttpNotifier::for_server(&args.dispatcher_url)?;

    let mut wizard = Wizard::default();
    let mut prompt = Prompt {
        input: io::stdin().lock(),
    };

    println!("Olá, meu amor...");
    println!("Tenho uma surpresa especial para você\n");

    loop {
        match wizard.step() {
            Step::Email => {
                let Some(email) = prompt.ask("Seu e-mail: ")? else {
                    return Ok(());
                };
                show_validation(wizard.submit_email(&email))?;
                if wizard.step() == Step::Challenge {
                    println!("\nQual o dia que nos tornamos um só?");
                    println!("(Dica: o dia da entrega dos anéis, olhe seu Instagram)");
                }
            }
            Step::Challenge => {
                let fields = [
                    format!("Dia ({}-{}): ", DAY_HINT.min, DAY_HINT.max),
                    format!("Mês ({}-{}): ", MONTH_HINT.min, MONTH_HINT.max),
                    format!("Ano ({}-{}): ", YEAR_HINT.min, YEAR_HINT.max),
                ];
                let mut values = Vec::with_capacity(fields.len());
                for label in &fields {
                    let Some(value) = prompt.ask(label)? else {
                        return Ok(());
                    };
                    if CLEAR_COMMANDS.contains(&value.trim()) {
                        break;
                    }
                    values.push(value);
                }
                let [day, month, year] = values.as_slice() else {
                    wizard.clear_challenge()?;
                    println!("  Campos limpos.");
                    continue;
                };
                wizard.fill_challenge(day, month, year)?;
                show_validation(wizard.submit_challenge())?;
            }
            Step::Revelation => {
                let invitation = wizard.invitation();
                println!("\nParabéns, você conseguiu! ❤️");
                println!("Agora, te convido a relembrar essa data :3\n");
                println!("  {}", invitation.venue.name);
                println!("  {}", invitation.venue.address);
                println!("  {}", invitation.venue.city);
                println!("  {} às {}", invitation.date, invitation.time);
                println!("  {}\n", invitation.maps_url());
                println!("Caso você também esteja como eu, morrendo de saudades, confirme abaixo:");

                let decision = loop {
                    let label = format!("[s] {CONFIRM_LABEL} / [n] {DECLINE_LABEL}: ");
                    let Some(answer) = prompt.ask(&label)? else {
                        return Ok(());
                    };
                    match answer.trim().to_lowercase().as_str() {
                        "s" | "sim" => break Decision::Confirmed,
                        "n" | "nao" | "não" => break Decision::Declined,
                        _ => continue,
                    }
                };

                println!("Enviando...");
                let outcome = wizard.submit_rsvp(decision, &notifier).await?;
                if let Some(warning) = outcome.warning {
                    eprintln!("Aviso: {warning}");
                }
                println!("\n{}", outcome.modal.title());
                println!("{}", outcome.modal.message());
                return Ok(());
            }
        }
    }
}
