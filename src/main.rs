use std::env;
use std::process;

mod cli;

fn main() {
    // Keep generated secrets out of core dumps.
    #[cfg(target_os = "linux")]
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0)
    };

    let args: Vec<String> = env::args().collect();
    if let Err(err) = cli::run(&args) {
        cli::error(&err);
        process::exit(1);
    }
}
