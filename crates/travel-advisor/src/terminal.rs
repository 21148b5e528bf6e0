use advisor_api::AdviceBackend;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tracing::info;

use crate::command::{self, Command, USAGE};
use crate::controller::{Completion, Controller, SearchForm};
use crate::layout::is_narrow_terminal;

/// Drives the controller from stdin commands, flow completions and fact
/// ticks until `/quit` or end of input.
pub async fn run<B: AdviceBackend + 'static>(
    mut controller: Controller<B>,
    mut completions: mpsc::UnboundedReceiver<Completion>,
    mut facts: mpsc::UnboundedReceiver<String>,
) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    draw(&mut stdout, &format!("{}\n{USAGE}\n", controller.frame())).await?;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match command::parse(&line) {
                    Ok(None) => continue,
                    Ok(Some(Command::Quit)) => break,
                    Ok(Some(Command::Help)) => {
                        draw(&mut stdout, &format!("{USAGE}\n")).await?;
                        continue;
                    }
                    Ok(Some(cmd)) => {
                        if !apply(&mut controller, cmd) {
                            draw(&mut stdout, "Nothing to do.\n").await?;
                            continue;
                        }
                    }
                    Err(e) => {
                        draw(&mut stdout, &format!("{e}\n")).await?;
                        continue;
                    }
                }
            }
            Some(completion) = completions.recv() => controller.complete(completion),
            Some(fact) = facts.recv() => controller.show_fact(fact),
        }
        draw(&mut stdout, &controller.frame().to_string()).await?;
    }

    info!(history = controller.history().len(), "session ended");
    Ok(())
}

/// Returns `false` when the command was ignored in the current state.
fn apply<B: AdviceBackend + 'static>(controller: &mut Controller<B>, cmd: Command) -> bool {
    match cmd {
        Command::Search {
            city,
            country,
            hobbies,
        } => controller.submit_search(SearchForm {
            city,
            country,
            hobbies,
        }),
        Command::Ask(question) => controller.submit_follow_up(&question),
        Command::ToggleHistory => {
            controller.toggle_sidebar();
            true
        }
        Command::Open(index) => controller.select_history(index, is_narrow_terminal()),
        Command::Section(index) => controller.toggle_section(index),
        Command::Help | Command::Quit => true,
    }
}

async fn draw(stdout: &mut tokio::io::Stdout, text: &str) -> std::io::Result<()> {
    stdout.write_all(b"\n").await?;
    stdout.write_all(text.as_bytes()).await?;
    stdout.flush().await
}
