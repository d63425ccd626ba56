use std::io::{self, BufRead, Write};
use std::rc::Rc;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use tracing::warn;

use raffle::audio::KiraCueEmitter;
use raffle::config::RaffleConfig;
use raffle::pool::NamePool;
use raffle::session::{Phase, Sequencer};
use raffle::traits::audio::{CueEmitter, NullCueEmitter};
use raffle::traits::time::SystemClock;
use raffle::util::logging::init_logging;

/// Wait for Enter. Returns false when the user quits or stdin closes.
fn wait_for_enter(prompt: &str) -> Result<bool> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(false);
    }
    Ok(line.trim() != "q")
}

fn main() -> Result<()> {
    init_logging(None, false)?;

    let config = RaffleConfig::load()?;
    let pool = NamePool::new(config.names.clone())?;
    let cues: Box<dyn CueEmitter> = match KiraCueEmitter::new() {
        Ok(driver) => Box::new(driver),
        Err(e) => {
            warn!("audio unavailable, continuing silently: {e}");
            Box::new(NullCueEmitter)
        }
    };
    let mut sequencer = Sequencer::new(
        pool,
        config.session_params(),
        Rc::new(SystemClock::new()),
        cues,
    )?;

    println!("Fun Friday board leader picker");
    println!("pool: {}", config.names.join(", "));

    loop {
        match sequencer.phase() {
            Phase::Idle => {
                if !wait_for_enter("\nPress Enter to spin (q to quit): ")? {
                    break;
                }
                sequencer.start();
                println!("Spinning...");
            }
            Phase::Spinning => {
                thread::sleep(Duration::from_millis(50));
                sequencer.update();
                if sequencer.phase() == Phase::Revealed {
                    let snapshot = sequencer.snapshot();
                    println!("Winners: {}", snapshot.winners.join(", "));
                    println!("({} confetti pieces raining)", snapshot.confetti.len());
                }
            }
            Phase::Revealed => {
                if !wait_for_enter("Press Enter to reset (q to quit): ")? {
                    break;
                }
                sequencer.reset();
            }
        }
    }

    sequencer.abort();
    Ok(())
}
