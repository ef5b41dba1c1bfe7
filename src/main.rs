//! roomdesk main entrypoint.

use roomdesk::run;

fn main() {
    println!();
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        // exit 2 for bad input, 1 for everything else
        std::process::exit(if e.is_validation() { 2 } else { 1 });
    }
}
