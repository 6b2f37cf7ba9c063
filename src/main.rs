// src/main.rs

use taskorder::{cli, logging, run};

fn main() {
    match run_main() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("taskorder error: {err:?}");
            std::process::exit(1);
        }
    }
}

/// `Ok(false)` when no order could be produced.
fn run_main() -> anyhow::Result<bool> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;
    let response = run(&args)?;
    Ok(!response.recommended_order.is_empty())
}
