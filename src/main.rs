//! coachtrack main entrypoint.

use coachtrack::run;
use coachtrack::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
